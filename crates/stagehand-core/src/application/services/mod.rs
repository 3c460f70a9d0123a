//! Application services.

mod scaffold_service;

pub use scaffold_service::{
    ErrorPolicy, FailedFile, PackageScaffold, ScaffoldOptions, ScaffoldService, ScaffoldSummary,
};
