//! Domain layer errors: structural problems in a scaffold plan.
//!
//! Every variant here is detected while *resolving* the plan, before any
//! filesystem mutation happens. Messages always name the relative paths
//! and the declaring package — the things a user can actually look up in
//! a manifest — never internal identifiers.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A declaration named a destination but gave no source path at all.
    #[error("no scaffold file path given for {destination} in package {package}")]
    MissingSource {
        package: String,
        destination: String,
    },

    /// The declared source path does not exist in the package.
    #[error("scaffold file {source_path} not found in package {package}")]
    SourceNotFound {
        package: String,
        source_path: String,
    },

    /// The declared source path resolves to a directory.
    #[error("scaffold file {source_path} in package {package} is a directory; only files may be scaffolded")]
    InvalidSource {
        package: String,
        source_path: String,
    },

    /// A template referenced a placeholder key that is not known.
    #[error("unknown placeholder '{key}' in template '{template}'")]
    MissingPlaceholder { key: String, template: String },

    /// A declaration combined fields in a way that has no meaning.
    #[error("invalid scaffold declaration for {destination} in package {package}: {reason}")]
    InvalidDeclaration {
        package: String,
        destination: String,
        reason: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingSource {
                package,
                destination,
            } => vec![
                format!("Package '{}' declares '{}' without a source", package, destination),
                "Give the declaration a 'path' (or 'paths' for append mode)".into(),
                "Or set the destination to false to disable it explicitly".into(),
            ],
            Self::SourceNotFound {
                package,
                source_path,
            } => vec![
                format!("'{}' does not exist inside package '{}'", source_path, package),
                "Check the path for typos — it is relative to the package install location".into(),
            ],
            Self::InvalidSource {
                package,
                source_path,
            } => vec![
                format!("'{}' in package '{}' is a directory", source_path, package),
                "Scaffold sources must be individual files; declare each file separately".into(),
            ],
            Self::MissingPlaceholder { key, .. } => vec![
                format!("No replacement value is registered for '{}'", key),
                "Destination templates may only use known placeholders such as [web-root]".into(),
            ],
            Self::InvalidDeclaration { reason, .. } => vec![
                format!("Declaration problem: {}", reason),
                "See the manifest reference for valid mode/path/paths combinations".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingSource { .. } | Self::SourceNotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidSource { .. }
            | Self::MissingPlaceholder { .. }
            | Self::InvalidDeclaration { .. } => ErrorCategory::Validation,
        }
    }
}
