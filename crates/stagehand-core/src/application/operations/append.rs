//! Scaffold operation that assembles a destination from ordered fragments.

use tracing::debug;

use crate::application::ApplicationError;
use crate::application::operations::OpOutcome;
use crate::application::plan::ScaffoldFileInfo;
use crate::application::ports::{Filesystem, ProgressSink};
use crate::domain::path::ScaffoldFilePath;

/// Concatenate one or more source fragments into the destination.
///
/// The destination's previous bytes are always replaced with the freshly
/// assembled content — append never appends to whatever was already at
/// the destination.
#[derive(Debug, Clone, PartialEq)]
pub struct AppendOp {
    sources: Vec<ScaffoldFilePath>,
    header: Option<String>,
    footer: Option<String>,
}

impl AppendOp {
    /// An append of the given fragments, in declared order.
    pub fn new(sources: Vec<ScaffoldFilePath>) -> Self {
        Self {
            sources,
            header: None,
            footer: None,
        }
    }

    /// Template text placed before the fragments (interpolated tolerantly
    /// with the destination's data).
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Template text placed after the fragments.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn sources(&self) -> &[ScaffoldFilePath] {
        &self.sources
    }

    /// Accumulate another append's fragments after this one's.
    ///
    /// Used by the resolver when a later package declares the same
    /// destination with append-on-conflict. The first declaration's
    /// header and footer win.
    pub fn merge(&mut self, other: AppendOp) {
        self.sources.extend(other.sources);
        if self.header.is_none() {
            self.header = other.header;
        }
        if self.footer.is_none() {
            self.footer = other.footer;
        }
    }

    /// Assemble and write the destination.
    pub fn process(
        &self,
        file: &ScaffoldFileInfo,
        fs: &dyn Filesystem,
        sink: &dyn ProgressSink,
    ) -> Result<OpOutcome, ApplicationError> {
        let destination = file.destination();
        let interpolator = file.interpolator();

        let mut content = String::new();
        if let Some(header) = &self.header {
            content.push_str(&interpolator.interpolate_or_keep(header));
        }
        for source in &self.sources {
            let fragment =
                fs.read(source.full_path())
                    .map_err(|e| ApplicationError::ReadFailed {
                        path: source.relative_path().to_string(),
                        reason: e.to_string(),
                    })?;
            content.push_str(&fragment);
        }
        if let Some(footer) = &self.footer {
            content.push_str(&interpolator.interpolate_or_keep(footer));
        }

        debug!(
            destination = %destination.full_path().display(),
            fragments = self.sources.len(),
            "assembling scaffold file"
        );

        if let Some(parent) = destination.full_path().parent() {
            fs.create_dir_all(parent)?;
        }
        fs.write(destination.full_path(), &content)
            .map_err(|e| ApplicationError::WriteFailed {
                path: destination.relative_path().to_string(),
                reason: e.to_string(),
            })?;

        let fragment_list = self
            .sources
            .iter()
            .map(|s| s.relative_path())
            .collect::<Vec<_>>()
            .join(", ");
        sink.notice(&interpolator.interpolate_with(
            "  - Append [dest-rel-path] from [fragments]",
            &[("fragments", &fragment_list)],
            false,
        ).unwrap_or_default());

        Ok(OpOutcome::Written)
    }
}
