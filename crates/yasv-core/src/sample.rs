//! Sample helpers: a greeting and a two-argument sum.

use std::io::{self, Write};
use std::ops::Add;

/// Returns the greeting for `name`.
#[must_use]
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Returns `a + b`.
pub fn calculate_sum<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Writes the sample demonstration: a greeting to `World` and the sum of 5 and 3.
///
/// # Errors
///
/// Returns any error produced by `out`.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", greet("World"))?;
    writeln!(out, "Sum: {}", calculate_sum(5, 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greet_world() {
        assert_eq!(greet("World"), "Hello, World!");
    }

    #[test]
    fn greet_empty_name() {
        assert_eq!(greet(""), "Hello, !");
    }

    #[test]
    fn greet_keeps_unicode() {
        assert_eq!(greet("世界"), "Hello, 世界!");
    }

    #[test]
    fn sum_integers() {
        assert_eq!(calculate_sum(5, 3), 8);
        assert_eq!(calculate_sum(-7, 2), -5);
    }

    #[test]
    fn sum_floats() {
        let sum = calculate_sum(0.5_f64, 0.25);
        assert!((sum - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn sum_matches_addition() {
        for (a, b) in [(0_i64, 0), (1, -1), (i64::from(i32::MAX), 1), (-40, -2)] {
            assert_eq!(calculate_sum(a, b), a + b);
        }
    }

    #[test]
    fn run_prints_sample_lines() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hello, World!\nSum: 8\n");
    }
}
