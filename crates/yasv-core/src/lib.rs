//! yasv-core - Project info record and arithmetic demos
//!
//! This crate provides:
//! - The sample helpers [`greet`] and [`calculate_sum`]
//! - [`ProjectInfo`], the project metadata record with its banner and info snapshot
//! - [`Operation`] dispatch through [`calculate`], returning [`CalcError`] instead of error strings
//!
//! Nothing here touches the filesystem or the process environment; output goes
//! through caller-supplied writers.

#![forbid(unsafe_code)]

pub mod calc;
pub mod project;
pub mod sample;

pub use calc::{calculate, format_number, CalcError, Operation};
pub use project::{InfoSnapshot, ProjectInfo};
pub use sample::{calculate_sum, greet};
