//! Operation variants: how one destination file gets produced.
//!
//! A [`ScaffoldOp`] is a tagged union over the three strategies — replace
//! (copy or link), append (concatenate fragments), and skip. Each variant
//! has a single `process` entry point that performs its filesystem side
//! effects through the driven ports; no inheritance hierarchy.

use std::path::{Component, Path, PathBuf};

use crate::application::ApplicationError;
use crate::application::plan::ScaffoldFileInfo;
use crate::application::ports::{Filesystem, ProgressSink};
use crate::application::services::ScaffoldOptions;
use crate::domain::OpMode;
use crate::domain::path::ScaffoldFilePath;

mod append;
mod replace;
mod skip;

pub use append::AppendOp;
pub use replace::ReplaceOp;
pub use skip::SkipOp;

/// What processing one destination amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpOutcome {
    /// The destination file was produced (copied, linked, or assembled).
    Written,
    /// Nothing was written (overwrite suppressed, or an explicit skip).
    Skipped,
}

/// Polymorphic scaffold operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaffoldOp {
    Replace(ReplaceOp),
    Append(AppendOp),
    Skip(SkipOp),
}

impl ScaffoldOp {
    /// Produce the destination file, emitting one progress line.
    ///
    /// `options.symlink` selects link-vs-copy for replace operations.
    /// Filesystem failures are returned immediately; the orchestrator
    /// decides whether to abort the run or continue with the next file.
    pub fn process(
        &self,
        file: &ScaffoldFileInfo,
        fs: &dyn Filesystem,
        sink: &dyn ProgressSink,
        options: &ScaffoldOptions,
    ) -> Result<OpOutcome, ApplicationError> {
        match self {
            Self::Replace(op) => op.process(file, fs, sink, options),
            Self::Append(op) => op.process(file, fs, sink),
            Self::Skip(op) => op.process(file, sink),
        }
    }

    /// The declaration mode this operation came from.
    pub fn mode(&self) -> OpMode {
        match self {
            Self::Replace(_) => OpMode::Replace,
            Self::Append(_) => OpMode::Append,
            Self::Skip(_) => OpMode::Skip,
        }
    }

    /// The sources this operation reads, in order. Empty for skip.
    pub fn sources(&self) -> Vec<&ScaffoldFilePath> {
        match self {
            Self::Replace(op) => vec![op.source()],
            Self::Append(op) => op.sources().iter().collect(),
            Self::Skip(_) => vec![],
        }
    }
}

/// Express `target` relative to the directory `base`.
///
/// Used for symlink targets and the generated autoload require line; it
/// must be computed from the final resolved locations of both endpoints,
/// at the time the link is created.
pub fn relative_to(base: &Path, target: &Path) -> PathBuf {
    let base_parts: Vec<Component<'_>> = base.components().collect();
    let target_parts: Vec<Component<'_>> = target.components().collect();

    let common = base_parts
        .iter()
        .zip(target_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &target_parts[common..] {
        relative.push(part);
    }

    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    relative
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_to_sibling_directory() {
        assert_eq!(
            relative_to(Path::new("/project/web"), Path::new("/project/vendor/pkg/a.txt")),
            PathBuf::from("../vendor/pkg/a.txt")
        );
    }

    #[test]
    fn relative_to_same_directory() {
        assert_eq!(
            relative_to(Path::new("/project/web"), Path::new("/project/web/robots.txt")),
            PathBuf::from("robots.txt")
        );
    }

    #[test]
    fn relative_to_identical_paths() {
        assert_eq!(
            relative_to(Path::new("/project/web"), Path::new("/project/web")),
            PathBuf::from(".")
        );
    }

    #[test]
    fn relative_to_deeper_base() {
        assert_eq!(
            relative_to(Path::new("/a/b/c/d"), Path::new("/a/x.txt")),
            PathBuf::from("../../../x.txt")
        );
    }
}
