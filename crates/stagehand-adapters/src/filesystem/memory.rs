//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock},
};

use stagehand_core::application::{ApplicationError, ports::Filesystem};

/// In-memory filesystem for testing.
///
/// Symlinks are recorded as link → target entries and resolved on
/// `read`, so relative link targets behave like the real thing. Paths
/// added to the deny list make every mutation of that path fail, which
/// is how tests exercise error handling without touching permissions.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    symlinks: HashMap<PathBuf, PathBuf>,
    denied: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating parent directories (testing helper).
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        let path = path.into();
        {
            let mut inner = self.inner.write().unwrap();
            if let Some(parent) = path.parent() {
                insert_dirs(&mut inner.directories, parent);
            }
            inner.files.insert(path, contents.into());
        }
        self
    }

    /// Seed a directory (testing helper).
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        {
            let mut inner = self.inner.write().unwrap();
            insert_dirs(&mut inner.directories, &path.into());
        }
        self
    }

    /// Make every mutation of `path` fail (testing helper).
    pub fn deny(&self, path: impl Into<PathBuf>) {
        self.inner.write().unwrap().denied.insert(path.into());
    }

    /// Read a file's content without symlink resolution (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.inner.read().unwrap().files.get(path).cloned()
    }

    /// The recorded target of a symlink (testing helper).
    pub fn symlink_target(&self, link: &Path) -> Option<PathBuf> {
        self.inner.read().unwrap().symlinks.get(link).cloned()
    }

    /// All file paths, unordered (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner.read().unwrap().files.keys().cloned().collect()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Follow one level of symlink indirection, resolving relative targets
/// against the link's own directory.
fn resolve(inner: &MemoryFilesystemInner, path: &Path) -> PathBuf {
    let Some(target) = inner.symlinks.get(path) else {
        return path.to_path_buf();
    };
    if target.is_absolute() {
        target.clone()
    } else {
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        normalize(&base.join(target))
    }
}

/// Collapse `.` and `..` components lexically.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out
}

fn insert_dirs(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn denied_error(path: &Path) -> ApplicationError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: "permission denied".into(),
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path)
            || inner.directories.contains(path)
            || inner.symlinks.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.read().unwrap().directories.contains(path)
    }

    fn read(&self, path: &Path) -> Result<String, ApplicationError> {
        let inner = self.inner.read().unwrap();
        let resolved = resolve(&inner, path);
        inner
            .files
            .get(&resolved)
            .cloned()
            .ok_or_else(|| ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), ApplicationError> {
        let mut inner = self.inner.write().unwrap();
        if inner.denied.contains(path) {
            return Err(denied_error(path));
        }
        inner.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn copy(&self, source: &Path, destination: &Path) -> Result<(), ApplicationError> {
        let mut inner = self.inner.write().unwrap();
        if inner.denied.contains(destination) {
            return Err(denied_error(destination));
        }
        let resolved = resolve(&inner, source);
        let contents =
            inner
                .files
                .get(&resolved)
                .cloned()
                .ok_or_else(|| ApplicationError::Filesystem {
                    path: source.to_path_buf(),
                    reason: "no such file".into(),
                })?;
        inner.files.insert(destination.to_path_buf(), contents);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<(), ApplicationError> {
        let mut inner = self.inner.write().unwrap();
        if inner.denied.contains(path) {
            return Err(denied_error(path));
        }
        inner.files.remove(path);
        inner.symlinks.remove(path);
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), ApplicationError> {
        let mut inner = self.inner.write().unwrap();
        insert_dirs(&mut inner.directories, path);
        Ok(())
    }

    fn symlink(&self, target: &Path, link: &Path) -> Result<(), ApplicationError> {
        let mut inner = self.inner.write().unwrap();
        if inner.denied.contains(link) {
            return Err(denied_error(link));
        }
        inner
            .symlinks
            .insert(link.to_path_buf(), target.to_path_buf());
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_follows_relative_symlink() {
        let fs = MemoryFilesystem::new().with_file("/project/vendor/pkg/robots.txt", "ok");
        fs.create_dir_all(Path::new("/project/web")).unwrap();
        fs.symlink(
            Path::new("../vendor/pkg/robots.txt"),
            Path::new("/project/web/robots.txt"),
        )
        .unwrap();

        assert_eq!(fs.read(Path::new("/project/web/robots.txt")).unwrap(), "ok");
    }

    #[test]
    fn remove_file_is_idempotent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.remove_file(Path::new("/nope")).is_ok());
    }

    #[test]
    fn denied_path_fails_writes() {
        let fs = MemoryFilesystem::new();
        fs.deny("/web/robots.txt");
        let err = fs.write(Path::new("/web/robots.txt"), "x").unwrap_err();
        assert!(err.to_string().contains("permission denied"));
    }
}
