//! Scaffold operation to copy or symlink from source to destination.

use tracing::debug;

use crate::application::ApplicationError;
use crate::application::operations::{OpOutcome, relative_to};
use crate::application::plan::ScaffoldFileInfo;
use crate::application::ports::{Filesystem, ProgressSink};
use crate::application::services::ScaffoldOptions;
use crate::domain::path::ScaffoldFilePath;

/// Produce the destination from one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaceOp {
    source: ScaffoldFilePath,
    overwrite: bool,
}

impl ReplaceOp {
    /// A replace of `source`, overwriting by default.
    pub fn new(source: ScaffoldFilePath) -> Self {
        Self {
            source,
            overwrite: true,
        }
    }

    /// Set whether an existing destination file may be clobbered.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn source(&self) -> &ScaffoldFilePath {
        &self.source
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Process the replace operation: either a copy or a symlink.
    pub fn process(
        &self,
        file: &ScaffoldFileInfo,
        fs: &dyn Filesystem,
        sink: &dyn ProgressSink,
        options: &ScaffoldOptions,
    ) -> Result<OpOutcome, ApplicationError> {
        let destination = file.destination().full_path();

        let mut interpolator = file.interpolator();
        self.source.add_interpolation_data(&mut interpolator, None);

        // Do nothing if overwrite is false and a file already exists at
        // the destination.
        if !self.overwrite && fs.exists(destination) {
            sink.notice(
                &interpolator
                    .interpolate_or_keep("  - Skip [dest-rel-path] because it already exists"),
            );
            return Ok(OpOutcome::Skipped);
        }

        // Get rid of the destination if it exists, and make sure the
        // directory it is going into exists.
        fs.remove_file(destination)?;
        if let Some(parent) = destination.parent() {
            fs.create_dir_all(parent)?;
        }

        if options.symlink {
            self.symlink_scaffold(file, fs)?;
            sink.notice(
                &interpolator.interpolate_or_keep("  - Link [dest-rel-path] from [src-rel-path]"),
            );
        } else {
            self.copy_scaffold(file, fs)?;
            sink.notice(
                &interpolator.interpolate_or_keep("  - Copy [dest-rel-path] from [src-rel-path]"),
            );
        }

        Ok(OpOutcome::Written)
    }

    /// Byte-copy the scaffold file.
    fn copy_scaffold(
        &self,
        file: &ScaffoldFileInfo,
        fs: &dyn Filesystem,
    ) -> Result<(), ApplicationError> {
        let destination = file.destination();

        debug!(
            source = %self.source.full_path().display(),
            destination = %destination.full_path().display(),
            "copying scaffold file"
        );

        fs.copy(self.source.full_path(), destination.full_path())
            .map_err(|e| ApplicationError::CopyFailed {
                source_path: self.source.relative_path().to_string(),
                destination: destination.relative_path().to_string(),
                reason: e.to_string(),
            })
    }

    /// Symlink the scaffold file.
    ///
    /// The link target is expressed relative to the destination's own
    /// directory, computed from the final resolved endpoints.
    fn symlink_scaffold(
        &self,
        file: &ScaffoldFileInfo,
        fs: &dyn Filesystem,
    ) -> Result<(), ApplicationError> {
        let destination = file.destination();
        let link_dir = destination
            .full_path()
            .parent()
            .unwrap_or_else(|| destination.full_path());
        let target = relative_to(link_dir, self.source.full_path());

        debug!(
            target = %target.display(),
            link = %destination.full_path().display(),
            "linking scaffold file"
        );

        fs.symlink(&target, destination.full_path())
            .map_err(|e| ApplicationError::LinkFailed {
                source_path: self.source.relative_path().to_string(),
                destination: destination.relative_path().to_string(),
                reason: e.to_string(),
            })
    }
}
