//! The [`ScaffoldFilePath`] value object.
//!
//! Both the relative and full path to a file are maintained so that the
//! shorter name may be used in progress and error messages, as needed.
//! The name of the package that provided the path is recorded for the
//! same reason.
//!
//! A `ScaffoldFilePath` may represent a destination scaffold file or one
//! of the source files used to create it. The [`ScaffoldFilePath::source_path`]
//! and [`ScaffoldFilePath::destination_path`] factories are the normal way
//! to construct one.

use std::path::{Path, PathBuf};

use crate::application::ports::Filesystem;
use crate::domain::error::DomainError;
use crate::domain::interpolator::Interpolator;

/// Fixed basename of the generated autoload bootstrap file.
pub const AUTOLOAD_BASENAME: &str = "autoload.php";

/// What a [`ScaffoldFilePath`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// A file inside an installed package.
    Source,
    /// A file to be produced inside the project tree.
    Destination,
    /// The generated autoload bootstrap destination (not declared by any
    /// package).
    Autoload,
}

impl PathKind {
    /// Short name, used as the default interpolation key prefix.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "src",
            Self::Destination => "dest",
            Self::Autoload => "autoload",
        }
    }
}

/// A relative/absolute path pair with provenance.
///
/// Immutable once constructed. `full_path` is always filesystem-absolute
/// (or resolvable by the host); `relative_path` is always the
/// package-declared, human-readable form used in messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFilePath {
    kind: PathKind,
    package: String,
    relative: String,
    full: PathBuf,
}

impl ScaffoldFilePath {
    /// Plain constructor. Prefer the factories below, which enforce the
    /// source/destination invariants.
    pub fn new(
        kind: PathKind,
        package: impl Into<String>,
        relative: impl Into<String>,
        full: impl Into<PathBuf>,
    ) -> Self {
        Self {
            kind,
            package: package.into(),
            relative: relative.into(),
            full: full.into(),
        }
    }

    /// Resolve a declared source path against its package install location.
    ///
    /// Fails before any destination is touched:
    /// - [`DomainError::MissingSource`] if `source` is empty,
    /// - [`DomainError::SourceNotFound`] if the resolved path does not exist,
    /// - [`DomainError::InvalidSource`] if it is a directory.
    ///
    /// `destination` is only used in error messages.
    pub fn source_path(
        package_name: &str,
        package_path: &Path,
        destination: &str,
        source: &str,
        fs: &dyn Filesystem,
    ) -> Result<Self, DomainError> {
        if source.is_empty() {
            return Err(DomainError::MissingSource {
                package: package_name.to_string(),
                destination: destination.to_string(),
            });
        }

        let full = package_path.join(source);

        if !fs.exists(&full) {
            return Err(DomainError::SourceNotFound {
                package: package_name.to_string(),
                source_path: source.to_string(),
            });
        }
        if fs.is_dir(&full) {
            return Err(DomainError::InvalidSource {
                package: package_name.to_string(),
                source_path: source.to_string(),
            });
        }

        Ok(Self::new(PathKind::Source, package_name, source, full))
    }

    /// Resolve a destination template into an absolute path.
    ///
    /// Placeholders such as `[web-root]` are replaced strictly using the
    /// provided location interpolator; an unknown placeholder fails with
    /// [`DomainError::MissingPlaceholder`]. The destination need not exist
    /// yet, so no filesystem check is performed.
    pub fn destination_path(
        package_name: &str,
        destination: &str,
        locations: &Interpolator,
    ) -> Result<Self, DomainError> {
        let full = locations.interpolate(destination)?;

        Ok(Self::new(
            PathKind::Destination,
            package_name,
            destination,
            PathBuf::from(full),
        ))
    }

    /// Destination for the generated autoload bootstrap file.
    ///
    /// The file is not declared by any package; the root package name is
    /// recorded as its owner.
    pub fn autoload_path(package_name: &str, web_root: &Path) -> Self {
        Self::new(
            PathKind::Autoload,
            package_name,
            format!("[web-root]/{AUTOLOAD_BASENAME}"),
            web_root.join(AUTOLOAD_BASENAME),
        )
    }

    pub fn kind(&self) -> PathKind {
        self.kind
    }

    /// The name of the package this path was declared by.
    pub fn package_name(&self) -> &str {
        &self.package
    }

    /// The relative path (best to use in messages).
    pub fn relative_path(&self) -> &str {
        &self.relative
    }

    /// The full path.
    pub fn full_path(&self) -> &Path {
        &self.full
    }

    /// Register this path's data into an interpolator.
    ///
    /// Adds `package-name`, `{prefix}-rel-path` and `{prefix}-full-path`,
    /// where `prefix` defaults to the path kind (`src`, `dest`, …).
    pub fn add_interpolation_data(&self, interpolator: &mut Interpolator, name_prefix: Option<&str>) {
        let prefix = name_prefix.unwrap_or(self.kind.as_str());
        interpolator.add_data([
            ("package-name".to_string(), self.package.clone()),
            (format!("{prefix}-rel-path"), self.relative.clone()),
            (format!("{prefix}-full-path"), self.full.display().to_string()),
        ]);
    }

    /// A fresh interpolator seeded with this path's data.
    pub fn interpolator(&self) -> Interpolator {
        let mut interpolator = Interpolator::new();
        self.add_interpolation_data(&mut interpolator, None);
        interpolator
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
