//! Core domain layer for Stagehand.
//!
//! Value types that make up a scaffold plan: the placeholder
//! [`Interpolator`], the [`ScaffoldFilePath`] value object, and the
//! already-parsed per-package [`ScaffoldDeclaration`]s.
//!
//! Everything in this module is synchronous and free of side effects; the
//! one exception is [`ScaffoldFilePath::source_path`], which checks that a
//! declared source actually exists — it does so through the `Filesystem`
//! port so tests can substitute an in-memory implementation.

pub mod declaration;
pub mod error;
pub mod interpolator;
pub mod path;

// Re-exports for convenience
pub use declaration::{DeclarationEntry, OpMode, ScaffoldDeclaration};
pub use error::DomainError;
pub use interpolator::Interpolator;
pub use path::{AUTOLOAD_BASENAME, PathKind, ScaffoldFilePath};
