//! User-facing notices for rejected actions.

use std::fmt;

use crate::error::{PayrollError, SelectionTarget};

/// How serious a notice is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// The action failed because of bad input.
    Error,
    /// The action was not possible in the current state.
    Warning,
}

/// A message shown to the user after an action is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Message text.
    pub message: String,
}

impl Notice {
    /// Creates an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Creates a warning notice.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

impl From<&PayrollError> for Notice {
    fn from(err: &PayrollError) -> Self {
        match err {
            PayrollError::InvalidInput { .. } => {
                Notice::error("Invalid input. Please check your entries.")
            }
            PayrollError::NoSelection {
                target: SelectionTarget::EmployeeType,
            } => Notice::warning("Please select an employee type."),
            PayrollError::NoSelection {
                target: SelectionTarget::Row,
            } => Notice::warning("No employee selected."),
            PayrollError::FieldDisabled { .. } => {
                Notice::warning("Hours worked can only be entered for hourly employees.")
            }
            PayrollError::UnknownCommand { input } => Notice::warning(format!(
                "Unknown command '{}'. Type 'help' for a list of commands.",
                input
            )),
            PayrollError::ConfigNotFound { .. } | PayrollError::ConfigParseError { .. } => {
                Notice::error(err.to_string())
            }
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.level {
            NoticeLevel::Error => "ERROR",
            NoticeLevel::Warning => "WARNING",
        };
        write!(f, "{}: {}", prefix, self.message)
    }
}
