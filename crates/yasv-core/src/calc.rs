//! Arithmetic dispatch on an operation tag.
//!
//! Failures are reported as [`CalcError`] rather than in-band strings, so a
//! caller can always tell a result from an error without inspecting its type.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use thiserror::Error;

/// Errors produced by [`calculate`] and by parsing an [`Operation`] tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The divisor of a `divide` was zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// The tag did not name a known operation.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// One of the four supported arithmetic operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Operation {
    #[default]
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in tag order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// The tag that selects this operation.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// The infix symbol used when printing an expression.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.tag() == s)
            .ok_or_else(|| CalcError::InvalidOperation(s.to_string()))
    }
}

/// Applies `op` to `a` and `b`.
///
/// # Errors
///
/// Returns [`CalcError::DivisionByZero`] when dividing by zero (either sign).
pub fn calculate(a: f64, b: f64, op: Operation) -> Result<f64, CalcError> {
    match op {
        Operation::Add => Ok(a + b),
        Operation::Subtract => Ok(a - b),
        Operation::Multiply => Ok(a * b),
        Operation::Divide if b == 0.0 => Err(CalcError::DivisionByZero),
        Operation::Divide => Ok(a / b),
    }
}

/// Formats a result for display.
///
/// Integral values print without a fractional part (`8`, not `8.0`), negative
/// zero prints as `0`, and infinities print as `Infinity` / `-Infinity`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    value.to_string()
}

/// The fixed expressions shown by the calculator demonstration.
const DEMO_CASES: [(f64, f64, Operation); 4] = [
    (5.0, 3.0, Operation::Add),
    (10.0, 4.0, Operation::Subtract),
    (6.0, 7.0, Operation::Multiply),
    (15.0, 3.0, Operation::Divide),
];

/// Writes one `a <op> b = result` line, or `Error: ...` in place of the result.
///
/// # Errors
///
/// Returns any error produced by `out`.
pub fn write_expression<W: Write>(out: &mut W, a: f64, b: f64, op: Operation) -> io::Result<()> {
    let rendered = match calculate(a, b, op) {
        Ok(value) => format_number(value),
        Err(e) => format!("Error: {e}"),
    };
    writeln!(
        out,
        "{} {} {} = {rendered}",
        format_number(a),
        op.symbol(),
        format_number(b)
    )
}

/// Writes the calculator demonstration.
///
/// # Errors
///
/// Returns any error produced by `out`.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Calculator Demo ===")?;
    for (a, b, op) in DEMO_CASES {
        write_expression(out, a, b, op)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(a: f64, b: f64, tag: &str) -> Result<f64, CalcError> {
        calculate(a, b, tag.parse()?)
    }

    #[test]
    fn add() {
        assert_eq!(calc(5.0, 3.0, "add"), Ok(8.0));
    }

    #[test]
    fn subtract() {
        assert_eq!(calc(10.0, 4.0, "subtract"), Ok(6.0));
    }

    #[test]
    fn multiply() {
        assert_eq!(calc(6.0, 7.0, "multiply"), Ok(42.0));
    }

    #[test]
    fn divide() {
        assert_eq!(calc(15.0, 3.0, "divide"), Ok(5.0));
    }

    #[test]
    fn divide_fractional() {
        assert_eq!(calc(1.0, 4.0, "divide"), Ok(0.25));
    }

    #[test]
    fn divide_by_zero() {
        let err = calc(5.0, 0.0, "divide").unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero);
        assert_eq!(format!("Error: {err}"), "Error: Division by zero");
    }

    #[test]
    fn divide_by_negative_zero() {
        assert_eq!(calc(5.0, -0.0, "divide"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn invalid_operation() {
        let err = calc(1.0, 1.0, "bogus").unwrap_err();
        assert_eq!(err, CalcError::InvalidOperation("bogus".to_string()));
        assert_eq!(format!("Error: {err}"), "Error: Invalid operation: bogus");
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert!("Add".parse::<Operation>().is_err());
        assert!(" add".parse::<Operation>().is_err());
    }

    #[test]
    fn default_operation_is_add() {
        assert_eq!(Operation::default(), Operation::Add);
    }

    #[test]
    fn tag_roundtrips_through_display() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn format_integral_values() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-6.0), "-6");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn format_fractional_and_special_values() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn expression_line_with_error() {
        let mut out = Vec::new();
        write_expression(&mut out, 5.0, 0.0, Operation::Divide).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "5 / 0 = Error: Division by zero\n"
        );
    }

    #[test]
    fn run_prints_demo_block() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n=== Calculator Demo ===\n5 + 3 = 8\n10 - 4 = 6\n6 * 7 = 42\n15 / 3 = 5\n"
        );
    }
}
