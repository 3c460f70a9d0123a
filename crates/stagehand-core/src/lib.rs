//! Stagehand Core - Scaffold Resolution and Placement Engine
//!
//! This crate provides the domain and application layers for the Stagehand
//! scaffold staging tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         stagehand-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (ScaffoldService)              │
//! │     resolve plan  →  apply plan         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Driven: Filesystem, ProgressSink)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stagehand-adapters (Infrastructure)  │
//! │  (LocalFilesystem, MemoryFilesystem, …) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Interpolator, ScaffoldFilePath, decls) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stagehand_core::application::{PackageScaffold, ScaffoldOptions, ScaffoldService};
//!
//! // 1. The host hands over its resolved package list (root package last).
//! let packages: Vec<PackageScaffold> = vec![];
//!
//! // 2. Use the application service (with injected adapters).
//! let service = ScaffoldService::new(filesystem, sink);
//! let summary = service.scaffold(&packages, "/srv/project/web".as_ref(), &ScaffoldOptions::default())?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ErrorPolicy, OpOutcome, PackageScaffold, ScaffoldFileCollection, ScaffoldFileInfo,
        ScaffoldOp, ScaffoldOptions, ScaffoldService, ScaffoldSummary,
        ports::{Filesystem, ProgressSink},
    };
    pub use crate::domain::{
        DeclarationEntry, Interpolator, OpMode, PathKind, ScaffoldDeclaration, ScaffoldFilePath,
    };
    pub use crate::error::{StagehandError, StagehandResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
