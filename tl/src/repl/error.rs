//! Input error types

use thiserror::Error;

/// Problems with the fields of a new task
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please fill in all fields ({field} is empty)")]
    EmptyField { field: &'static str },

    #[error("Priority must be a whole number, got '{value}'")]
    InvalidPriority { value: String },

    #[error("Expected {expected} fields separated by '|', found {found}")]
    WrongFieldCount { expected: usize, found: usize },
}

/// Problems with a command line
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Not a task number: '{0}'")]
    InvalidIndex(String),

    #[error("No task #{index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Input(#[from] InputError),
}

impl CommandError {
    /// Errors caused by the task fields rather than the command itself
    pub fn is_input_error(&self) -> bool {
        matches!(self, CommandError::Input(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = InputError::EmptyField { field: "title" };
        assert_eq!(err.to_string(), "Please fill in all fields (title is empty)");

        let err = CommandError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "No task #4 (list has 2)");
    }

    #[test]
    fn test_input_error_converts() {
        let err: CommandError = InputError::InvalidPriority { value: "high".into() }.into();
        assert!(err.is_input_error());
        assert_eq!(err.to_string(), "Priority must be a whole number, got 'high'");

        assert!(!CommandError::Unknown("frobnicate".into()).is_input_error());
    }
}
