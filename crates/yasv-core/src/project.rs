//! The project metadata record.

use std::io::{self, Write};

use chrono::{DateTime, Local, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::calc::{self, CalcError, Operation};

const DEFAULT_NAME: &str = "Key-Yasv";
const DEFAULT_VERSION: &str = "1.0.0";
const DEFAULT_DESCRIPTION: &str = "Git版本管理演示项目";

/// Format of the `Created:` line in the banner.
const BANNER_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Project name, version and description.
///
/// Deserializes from a table where every key is optional; missing keys keep
/// their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectInfo {
    name: String,
    version: String,
    description: String,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self::new(DEFAULT_NAME, DEFAULT_VERSION, DEFAULT_DESCRIPTION)
    }
}

/// A point-in-time view of a [`ProjectInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoSnapshot {
    pub name: String,
    pub version: String,
    pub description: String,
    /// When the snapshot was taken. Serialized as `YYYY-MM-DDTHH:MM:SS.sssZ`.
    #[serde(serialize_with = "serialize_iso")]
    pub timestamp: DateTime<Utc>,
}

impl InfoSnapshot {
    /// The timestamp as ISO-8601 UTC with millisecond precision.
    #[must_use]
    pub fn iso_timestamp(&self) -> String {
        iso(&self.timestamp)
    }
}

fn iso(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_iso<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&iso(ts))
}

impl ProjectInfo {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current field values with a fresh timestamp.
    #[must_use]
    pub fn info(&self) -> InfoSnapshot {
        self.info_at(Utc::now())
    }

    /// Returns the current field values stamped with `now`.
    #[must_use]
    pub fn info_at(&self, now: DateTime<Utc>) -> InfoSnapshot {
        InfoSnapshot {
            name: self.name.clone(),
            version: self.version.clone(),
            description: self.description.clone(),
            timestamp: now,
        }
    }

    /// Prints the banner to standard output, using the local clock.
    ///
    /// # Errors
    ///
    /// Returns an error if standard output cannot be written.
    pub fn demonstrate(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_banner(&mut out, Local::now())
    }

    /// Writes the banner to `out` with `now` as the creation time.
    ///
    /// The closing rule is as long as the header line.
    ///
    /// # Errors
    ///
    /// Returns any error produced by `out`.
    pub fn write_banner<W: Write>(&self, out: &mut W, now: DateTime<Local>) -> io::Result<()> {
        let header = format!("=== {} Project Demo ===", self.name);
        writeln!(out, "{header}")?;
        writeln!(out, "Name: {}", self.name)?;
        writeln!(out, "Version: {}", self.version)?;
        writeln!(out, "Description: {}", self.description)?;
        writeln!(out, "Created: {}", now.format(BANNER_TIME_FORMAT))?;
        writeln!(out, "{}", "=".repeat(header.chars().count()))
    }

    /// Applies the operation named by `operation` to `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidOperation`] for an unknown tag and
    /// [`CalcError::DivisionByZero`] when dividing by zero.
    pub fn calculate(&self, a: f64, b: f64, operation: &str) -> Result<f64, CalcError> {
        let op: Operation = operation.parse()?;
        calc::calculate(a, b, op)
    }
}
