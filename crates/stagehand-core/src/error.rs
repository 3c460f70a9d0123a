//! Unified error handling for Stagehand Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Stagehand Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// stagehand-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum StagehandError {
    /// Errors from the domain layer (structural plan problems, detected
    /// before any filesystem mutation).
    #[error("Plan error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (I/O failures while applying).
    #[error("Scaffold error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors (bad plan file, missing web root, …).
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl StagehandError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check the plan file and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Stagehand".into(),
                "Please report this issue at: https://github.com/cosecruz/stagehand/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
///
/// Shared by the domain and application layers so the CLI only has to map
/// one enum to exit codes and colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A declaration or template was structurally wrong.
    Validation,
    /// A declared source file (or placeholder key) could not be found.
    NotFound,
    /// A filesystem operation failed while applying the plan.
    Io,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type StagehandResult<T> = Result<T, StagehandError>;
