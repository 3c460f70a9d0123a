//! Scaffold operation that leaves the destination alone.

use crate::application::ApplicationError;
use crate::application::operations::OpOutcome;
use crate::application::plan::ScaffoldFileInfo;
use crate::application::ports::ProgressSink;

/// Degenerate operation for destinations explicitly disabled by a
/// package (`false` in the manifest). It performs no I/O; it exists to
/// consume the destination's priority so nothing else scaffolds there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipOp;

impl SkipOp {
    pub fn new() -> Self {
        Self
    }

    /// Emit the skip notice. Never touches the filesystem.
    pub fn process(
        &self,
        file: &ScaffoldFileInfo,
        sink: &dyn ProgressSink,
    ) -> Result<OpOutcome, ApplicationError> {
        let interpolator = file.interpolator();
        sink.notice(
            &interpolator
                .interpolate_or_keep("  - Skip [dest-rel-path]: disabled by [package-name]"),
        );
        Ok(OpOutcome::Skipped)
    }
}
