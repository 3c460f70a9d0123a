//! Application layer: the plan machinery and its orchestration.
//!
//! The domain layer supplies value types; this layer turns raw package
//! declarations into a merged [`ScaffoldFileCollection`] and applies it
//! to the filesystem through the driven ports.

pub mod error;
pub mod operations;
pub mod plan;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use operations::{AppendOp, OpOutcome, ReplaceOp, ScaffoldOp, SkipOp, relative_to};
pub use plan::{OverrideWarning, ScaffoldFileCollection, ScaffoldFileInfo};
pub use services::{
    ErrorPolicy, FailedFile, PackageScaffold, ScaffoldOptions, ScaffoldService, ScaffoldSummary,
};
