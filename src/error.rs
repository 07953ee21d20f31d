//! Error types for the payroll roster.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every way a user action or start-up step can be rejected.

use std::fmt;

use thiserror::Error;

/// A field of the employee input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Free-text employee name.
    Name,
    /// Employee ID, parsed as an integer.
    Id,
    /// Monthly salary (salaried) or hourly rate (hourly), parsed as a float.
    SalaryOrRate,
    /// Hours worked, parsed as an integer. Only enabled for hourly employees.
    Hours,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::Name => "name",
            FormField::Id => "id",
            FormField::SalaryOrRate => "salary/rate",
            FormField::Hours => "hours worked",
        };
        f.write_str(label)
    }
}

/// What the user failed to select before acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTarget {
    /// No employee type was chosen before adding.
    EmployeeType,
    /// No displayed row (or a row no longer in the roster) was chosen before removing.
    Row,
}

impl fmt::Display for SelectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionTarget::EmployeeType => f.write_str("employee type"),
            SelectionTarget::Row => f.write_str("employee row"),
        }
    }
}

/// The main error type for the payroll roster.
///
/// # Example
///
/// ```
/// use payroll_roster::error::{FormField, PayrollError};
///
/// let error = PayrollError::InvalidInput {
///     field: FormField::Id,
///     message: "not an integer".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input for 'id': not an integer");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A required numeric field was empty or failed to parse.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The field that failed to parse.
        field: FormField,
        /// A description of the parse failure.
        message: String,
    },

    /// The action needs a selection that has not been made.
    #[error("No {target} selected")]
    NoSelection {
        /// What was expected to be selected.
        target: SelectionTarget,
    },

    /// A value was entered into a field that is currently disabled.
    #[error("Field '{field}' is disabled for the selected employee type")]
    FieldDisabled {
        /// The disabled field.
        field: FormField,
    },

    /// A terminal input line was not a recognised command.
    #[error("Unknown command: {input}")]
    UnknownCommand {
        /// The offending input.
        input: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl PayrollError {
    /// Shorthand for a missing-selection error.
    pub fn no_selection(target: SelectionTarget) -> Self {
        PayrollError::NoSelection { target }
    }

    /// Shorthand for a parse failure on a form field.
    pub fn invalid_input(field: FormField, message: impl Into<String>) -> Self {
        PayrollError::InvalidInput {
            field,
            message: message.into(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
