//! Error types for the staff payroll registry.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the registry, the persistence adapter and the policy
//! loader can report.

use thiserror::Error;

/// The main error type for the staff payroll registry.
///
/// All fallible operations return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use staff_payroll::error::PayrollError;
///
/// let error = PayrollError::NotFound {
///     employee_id: "FT001".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: FT001");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// An employee with the same ID is already registered.
    #[error("Duplicate employee ID: {employee_id}")]
    DuplicateId {
        /// The ID that is already present.
        employee_id: String,
    },

    /// No employee with the given ID is registered.
    #[error("Employee not found: {employee_id}")]
    NotFound {
        /// The ID that was looked up.
        employee_id: String,
    },

    /// The backing file could not be read or written.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// The file that failed.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A persisted row could not be turned back into an employee.
    #[error("Failed to parse '{path}' at line {line}: {message}")]
    Parse {
        /// The file being read.
        path: String,
        /// 1-based line number of the offending row.
        line: u64,
        /// A description of what was wrong with the row.
        message: String,
    },

    /// A salary or payroll total could not be computed.
    #[error("Calculation error: {message}")]
    Calculation {
        /// A description of the calculation error.
        message: String,
    },

    /// Policy file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
