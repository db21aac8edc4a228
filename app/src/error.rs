//! Application error handling
//!
//! This module provides unified error handling for the application,
//! mapping internal failures to messages and process exit codes for
//! the command-line front-end.

use thiserror::Error;
use tracing::error;

/// Application error type surfaced by services and the store
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Import rejected: {0}")]
    Import(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Process exit code for the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Validation(_) => 2,
            AppError::NotFound(_) => 3,
            AppError::Import(_) => 4,
            AppError::Storage(_) | AppError::Io(_) | AppError::Internal(_) => 1,
        }
    }

    /// Render the error for terminal output, logging internal detail
    pub fn report(&self) -> String {
        match self {
            AppError::Internal(err) => {
                error!("Internal error: {:?}", err);
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias for services and commands
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::Validation("Quantity must be positive".to_string()), 2)]
    #[case(AppError::NotFound("Profile not found".to_string()), 3)]
    #[case(AppError::Import("Unsupported version 2".to_string()), 4)]
    #[case(AppError::Storage("Corrupt snapshot".to_string()), 1)]
    fn test_exit_codes(#[case] error: AppError, #[case] code: i32) {
        assert_eq!(error.exit_code(), code);
    }

    #[test]
    fn test_report_passes_user_facing_messages_through() {
        let error = AppError::Validation("Quantity must be positive".to_string());
        assert_eq!(error.report(), "Validation error: Quantity must be positive");

        let error = AppError::Import("Unsupported version 2".to_string());
        assert_eq!(error.report(), "Import rejected: Unsupported version 2");
    }

    #[test]
    fn test_internal_error_is_masked() {
        let error = AppError::Internal(anyhow::anyhow!("stack detail"));
        assert_eq!(error.exit_code(), 1);
        assert_eq!(error.report(), "An internal error occurred");
    }
}
