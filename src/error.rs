//! Error types for the payroll cost engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a calculation.

use thiserror::Error;

/// The main error type for the payroll cost engine.
///
/// Row-level data problems (an unparseable hire date, a negative base
/// salary, a row with no earnings at all) are reported as errors so that
/// callers processing many rows can filter the failed ones out; nothing in
/// the engine panics on malformed input.
///
/// # Example
///
/// ```
/// use nomina_engine::error::EngineError;
///
/// let error = EngineError::TablesNotFound {
///     path: "/missing/income_tax.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Statutory table file not found: /missing/income_tax.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A statutory table file was not found at the specified path.
    #[error("Statutory table file not found: {path}")]
    TablesNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A statutory table file could not be parsed.
    #[error("Failed to parse statutory table file '{path}': {message}")]
    TablesParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The hire date cell could not be interpreted as a date.
    #[error("Hire date could not be parsed: '{raw}'")]
    InvalidHireDate {
        /// The raw cell text that failed every parsing heuristic.
        raw: String,
    },

    /// The monthly base salary resolved to a negative amount.
    #[error("Monthly base salary is negative: {amount}")]
    NegativeBaseSalary {
        /// The offending amount.
        amount: rust_decimal::Decimal,
    },

    /// Both the total perceptions and the base salary are non-positive.
    #[error("Row has no positive earnings")]
    NoEarnings,
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
