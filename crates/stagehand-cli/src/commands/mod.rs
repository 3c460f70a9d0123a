//! Command handlers.
//!
//! Each submodule exposes a single `execute` entry point invoked from
//! `main::run`. Handlers translate parsed arguments into core service
//! calls and render the results; no staging logic lives here.

pub mod apply;
pub mod completions;
pub mod plan;
