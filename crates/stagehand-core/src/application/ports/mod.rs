//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stagehand-adapters` crate provides implementations.

use std::path::Path;

use crate::application::ApplicationError;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stagehand_adapters::filesystem::LocalFilesystem` (production)
/// - `stagehand_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Scaffold assets are treated as text; `read`/`write` use strings.
/// - `remove_file` on an absent path is NOT an error — callers clear a
///   destination before producing it without caring whether it existed.
/// - `symlink` takes the link target verbatim; relative targets are
///   resolved by the OS against the link's own directory.
pub trait Filesystem: Send + Sync {
    /// Check if a path exists (file, directory, or symlink).
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Read a file's contents.
    fn read(&self, path: &Path) -> Result<String, ApplicationError>;

    /// Write contents to a file, replacing any previous bytes.
    fn write(&self, path: &Path, contents: &str) -> Result<(), ApplicationError>;

    /// Byte-copy `source` to `destination`.
    fn copy(&self, source: &Path, destination: &Path) -> Result<(), ApplicationError>;

    /// Remove a file or symlink; absent paths are ignored.
    fn remove_file(&self, path: &Path) -> Result<(), ApplicationError>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), ApplicationError>;

    /// Create a symbolic link at `link` pointing at `target`.
    fn symlink(&self, target: &Path, link: &Path) -> Result<(), ApplicationError>;
}

/// Port for human-readable progress lines.
///
/// One line per processed destination. Implemented by:
/// - `stagehand_adapters::progress::BufferSink` (testing)
/// - `stagehand_adapters::progress::TracingSink` (logs)
/// - the CLI's terminal sink
pub trait ProgressSink: Send + Sync {
    /// Emit one progress line.
    fn notice(&self, message: &str);
}

// ── test doubles ──────────────────────────────────────────────────────────────

/// Minimal in-crate fakes for unit tests.
///
/// The full-featured `MemoryFilesystem` lives in `stagehand-adapters`;
/// these stubs exist so the core crate's own unit tests need no adapter.
#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Filesystem stub: a set of files, a set of directories, no contents.
    #[derive(Debug, Default)]
    pub struct StubFilesystem {
        files: HashSet<PathBuf>,
        dirs: HashSet<PathBuf>,
    }

    impl StubFilesystem {
        pub fn with_files<'a>(files: impl IntoIterator<Item = &'a str>) -> Self {
            Self {
                files: files.into_iter().map(PathBuf::from).collect(),
                dirs: HashSet::new(),
            }
        }

        pub fn with_dirs<'a>(dirs: impl IntoIterator<Item = &'a str>) -> Self {
            Self {
                files: HashSet::new(),
                dirs: dirs.into_iter().map(PathBuf::from).collect(),
            }
        }
    }

    impl Filesystem for StubFilesystem {
        fn exists(&self, path: &Path) -> bool {
            self.files.contains(path) || self.dirs.contains(path)
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.dirs.contains(path)
        }

        fn read(&self, path: &Path) -> Result<String, ApplicationError> {
            if self.files.contains(path) {
                Ok(String::new())
            } else {
                Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "not found".into(),
                })
            }
        }

        fn write(&self, _path: &Path, _contents: &str) -> Result<(), ApplicationError> {
            Ok(())
        }

        fn copy(&self, _source: &Path, _destination: &Path) -> Result<(), ApplicationError> {
            Ok(())
        }

        fn remove_file(&self, _path: &Path) -> Result<(), ApplicationError> {
            Ok(())
        }

        fn create_dir_all(&self, _path: &Path) -> Result<(), ApplicationError> {
            Ok(())
        }

        fn symlink(&self, _target: &Path, _link: &Path) -> Result<(), ApplicationError> {
            Ok(())
        }
    }

    /// Progress sink stub collecting notices in memory.
    #[derive(Debug, Default)]
    pub struct StubSink {
        lines: Mutex<Vec<String>>,
    }

    impl StubSink {
        pub fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl ProgressSink for StubSink {
        fn notice(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
    }
}
