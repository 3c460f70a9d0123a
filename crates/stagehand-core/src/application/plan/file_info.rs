//! One destination file in the resolved plan.

use crate::application::ApplicationError;
use crate::application::operations::{OpOutcome, ScaffoldOp};
use crate::application::ports::{Filesystem, ProgressSink};
use crate::application::services::ScaffoldOptions;
use crate::domain::Interpolator;
use crate::domain::path::ScaffoldFilePath;

/// Binds a destination path to the operation and package metadata that
/// produced it. One instance per logical destination in the merged plan;
/// immutable after plan resolution completes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldFileInfo {
    destination: ScaffoldFilePath,
    op: ScaffoldOp,
}

impl ScaffoldFileInfo {
    pub fn new(destination: ScaffoldFilePath, op: ScaffoldOp) -> Self {
        Self { destination, op }
    }

    pub fn destination(&self) -> &ScaffoldFilePath {
        &self.destination
    }

    pub fn op(&self) -> &ScaffoldOp {
        &self.op
    }

    /// The package whose declaration won this destination.
    pub fn package_name(&self) -> &str {
        self.destination.package_name()
    }

    /// A fresh interpolator seeded with the destination's data
    /// (`dest-rel-path`, `dest-full-path`, `package-name`).
    pub fn interpolator(&self) -> Interpolator {
        self.destination.interpolator()
    }

    /// Execute this entry's operation against the filesystem.
    pub fn process(
        &self,
        fs: &dyn Filesystem,
        sink: &dyn ProgressSink,
        options: &ScaffoldOptions,
    ) -> Result<OpOutcome, ApplicationError> {
        self.op.process(self, fs, sink, options)
    }

    pub(crate) fn into_parts(self) -> (ScaffoldFilePath, ScaffoldOp) {
        (self.destination, self.op)
    }

    pub(crate) fn op_mut(&mut self) -> &mut ScaffoldOp {
        &mut self.op
    }
}
