//! Error types for the stencil CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for stencil operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum StencilError {
    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// Config file could not be parsed or failed validation.
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Reading the template or writing the output failed.
    #[error("{0}")]
    IoError(String),
}

impl StencilError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            StencilError::UserError(_) => exit_codes::USER_ERROR,
            StencilError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            StencilError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for stencil operations.
pub type Result<T> = std::result::Result<T, StencilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = StencilError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = StencilError::ConfigError("unparseable".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_FAILURE);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = StencilError::IoError("missing template".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = StencilError::UserError("invalid --set pair 'title'".to_string());
        assert_eq!(err.to_string(), "invalid --set pair 'title'");

        let err = StencilError::ConfigError("failed to parse config YAML".to_string());
        assert_eq!(err.to_string(), "Config error: failed to parse config YAML");
    }
}
