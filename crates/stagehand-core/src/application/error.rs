//! Application layer errors.
//!
//! These are the I/O failures that can occur while *applying* a resolved
//! plan. Structural plan problems are `DomainError` from `crate::domain`
//! and are raised before any of these can happen.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while applying a scaffold plan.
///
/// `CopyFailed`/`LinkFailed`/`ReadFailed`/`WriteFailed` name the relative
/// paths from the package declaration so the user can locate the failing
/// entry; `Filesystem` is the raw port-level failure they wrap.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A filesystem port operation failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Byte-copying a scaffold source to its destination failed.
    #[error("could not copy source file {source_path} to {destination}: {reason}")]
    CopyFailed {
        source_path: String,
        destination: String,
        reason: String,
    },

    /// Creating a symlink from destination to source failed.
    #[error("could not symlink source file {source_path} to {destination}: {reason}")]
    LinkFailed {
        source_path: String,
        destination: String,
        reason: String,
    },

    /// An append fragment could not be read.
    #[error("could not read scaffold fragment {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    /// The assembled destination could not be written.
    #[error("could not write scaffold file {path}: {reason}")]
    WriteFailed { path: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the destination tree is not read-only".into(),
            ],
            Self::CopyFailed { destination, .. } | Self::LinkFailed { destination, .. } => vec![
                format!("Could not produce '{}'", destination),
                "Check permissions on the destination directory".into(),
                "Files already staged by this run are left in place".into(),
            ],
            Self::ReadFailed { path, .. } => vec![
                format!("Fragment '{}' could not be read", path),
                "Check the declaring package's install location".into(),
            ],
            Self::WriteFailed { path, .. } => vec![
                format!("Destination '{}' could not be written", path),
                "Check permissions on the destination directory".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Io
    }
}
