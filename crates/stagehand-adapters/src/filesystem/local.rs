//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use stagehand_core::application::{ApplicationError, ports::Filesystem};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so dangling symlinks still count as present.
        path.symlink_metadata().is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read(&self, path: &Path) -> Result<String, ApplicationError> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), ApplicationError> {
        std::fs::write(path, contents).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn copy(&self, source: &Path, destination: &Path) -> Result<(), ApplicationError> {
        std::fs::copy(source, destination)
            .map(|_| ())
            .map_err(|e| map_io_error(destination, e, "copy file"))
    }

    fn remove_file(&self, path: &Path) -> Result<(), ApplicationError> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(map_io_error(path, e, "remove file")),
        }
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), ApplicationError> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    #[cfg(unix)]
    fn symlink(&self, target: &Path, link: &Path) -> Result<(), ApplicationError> {
        std::os::unix::fs::symlink(target, link).map_err(|e| map_io_error(link, e, "create symlink"))
    }

    #[cfg(windows)]
    fn symlink(&self, target: &Path, link: &Path) -> Result<(), ApplicationError> {
        std::os::windows::fs::symlink_file(target, link)
            .map_err(|e| map_io_error(link, e, "create symlink"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ApplicationError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
}
