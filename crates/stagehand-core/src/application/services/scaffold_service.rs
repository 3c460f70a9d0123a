//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire staging workflow:
//! 1. Resolve: merge every package's declarations into one plan
//! 2. Apply: execute the plan against the filesystem
//! 3. Generate the autoload bootstrap file
//!
//! Resolution and application are strictly sequential phases: every
//! declared source is validated and every placeholder resolved before
//! the first filesystem mutation. A structural problem therefore aborts
//! with the destination tree untouched.

use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        operations::{AppendOp, OpOutcome, ReplaceOp, ScaffoldOp, SkipOp, relative_to},
        plan::{ScaffoldFileCollection, ScaffoldFileInfo},
        ports::{Filesystem, ProgressSink},
    },
    domain::{
        DeclarationEntry, DomainError, Interpolator, OpMode, ScaffoldDeclaration, ScaffoldFilePath,
    },
    error::StagehandResult,
};

/// One package's contribution to the plan, as handed over by the host.
///
/// The host supplies these in dependency order, with the root project
/// last — which is what makes the root win ties.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageScaffold {
    /// Package name, e.g. `fixtures/scaffold-a`.
    pub name: String,
    /// Absolute install location of the package.
    pub install_path: PathBuf,
    /// Destination template → raw declaration, in declared order.
    pub declarations: Vec<(String, ScaffoldDeclaration)>,
}

/// What to do when a file operation fails mid-run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop at the first failure. Files already staged stay in place;
    /// there is no rollback.
    #[default]
    Abort,
    /// Record the failure in the summary and continue with the next file.
    Continue,
}

/// Global options for one staging run.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    /// Prefer relative symlinks over byte copies.
    pub symlink: bool,
    /// Per-file failure policy during `apply`.
    pub on_error: ErrorPolicy,
    /// Skip generating the autoload bootstrap file.
    pub no_autoload: bool,
    /// Directory containing the package manager's `autoload.php`.
    /// Defaults to a `vendor` directory next to the web root.
    pub vendor_dir: Option<PathBuf>,
}

/// A destination that failed while applying with [`ErrorPolicy::Continue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    pub destination: String,
    pub reason: String,
}

/// Structured result of one staging run, for the host to render or log.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldSummary {
    /// Destinations written (relative form), in processing order.
    pub written: Vec<String>,
    /// Destinations skipped (overwrite suppressed or explicitly disabled).
    pub skipped: Vec<String>,
    /// Destinations that more than one package declared.
    pub overridden: Vec<crate::application::plan::OverrideWarning>,
    /// Failures recorded under [`ErrorPolicy::Continue`].
    pub failed: Vec<FailedFile>,
}

impl ScaffoldSummary {
    /// True when every planned file was processed without failure.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Main staging service.
///
/// Owns the driven ports and orchestrates resolve → apply → autoload.
pub struct ScaffoldService {
    fs: Box<dyn Filesystem>,
    sink: Box<dyn ProgressSink>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(fs: Box<dyn Filesystem>, sink: Box<dyn ProgressSink>) -> Self {
        Self { fs, sink }
    }

    /// The location interpolator every destination template is resolved
    /// against. Carries the `web-root` placeholder.
    pub fn location_replacements(web_root: &Path) -> Interpolator {
        let mut interpolator = Interpolator::new();
        interpolator.add_data([("web-root", web_root.display().to_string())]);
        interpolator
    }

    /// Full staging run: resolve, apply, generate autoload.
    #[instrument(skip_all, fields(web_root = %web_root.display(), packages = packages.len()))]
    pub fn scaffold(
        &self,
        packages: &[PackageScaffold],
        web_root: &Path,
        options: &ScaffoldOptions,
    ) -> StagehandResult<ScaffoldSummary> {
        let collection = self.resolve(packages, web_root)?;
        info!(files = collection.len(), "scaffold plan resolved");

        let mut summary = self.apply(&collection, options)?;

        if !options.no_autoload {
            let written = self.generate_autoload(packages, web_root, options)?;
            summary.written.push(written);
        }

        info!(
            written = summary.written.len(),
            skipped = summary.skipped.len(),
            overridden = summary.overridden.len(),
            "scaffold run complete"
        );
        Ok(summary)
    }

    /// Merge every package's declarations into one effective plan.
    ///
    /// Packages are processed in host order and declarations in declared
    /// order, so merging is deterministic. Any structural problem —
    /// missing source, source that is a directory, unknown placeholder,
    /// nonsensical declaration — aborts resolution here, before any
    /// filesystem mutation.
    pub fn resolve(
        &self,
        packages: &[PackageScaffold],
        web_root: &Path,
    ) -> StagehandResult<ScaffoldFileCollection> {
        let locations = Self::location_replacements(web_root);
        let mut collection = ScaffoldFileCollection::new();

        for package in packages {
            debug!(
                package = %package.name,
                declarations = package.declarations.len(),
                "merging package declarations"
            );
            for (dest_template, declaration) in &package.declarations {
                let entry = declaration.normalize();
                let destination =
                    ScaffoldFilePath::destination_path(&package.name, dest_template, &locations)?;
                let op = self.build_op(package, dest_template, &entry)?;
                collection.add(
                    dest_template,
                    ScaffoldFileInfo::new(destination, op),
                    entry.append_on_conflict,
                );
            }
        }

        Ok(collection)
    }

    /// Execute the resolved plan in collection order.
    ///
    /// Override warnings never abort; they are surfaced through the sink
    /// and collected in the summary.
    pub fn apply(
        &self,
        collection: &ScaffoldFileCollection,
        options: &ScaffoldOptions,
    ) -> StagehandResult<ScaffoldSummary> {
        let mut summary = ScaffoldSummary::default();

        for file in collection.files() {
            let destination = file.destination().relative_path().to_string();
            match file.process(self.fs.as_ref(), self.sink.as_ref(), options) {
                Ok(OpOutcome::Written) => summary.written.push(destination),
                Ok(OpOutcome::Skipped) => summary.skipped.push(destination),
                Err(e) => {
                    error!(destination = %destination, error = %e, "scaffold operation failed");
                    match options.on_error {
                        ErrorPolicy::Abort => return Err(e.into()),
                        ErrorPolicy::Continue => summary.failed.push(FailedFile {
                            destination,
                            reason: e.to_string(),
                        }),
                    }
                }
            }
        }

        for warning in collection.warnings() {
            warn!(%warning, "duplicate scaffold destination");
            self.sink.notice(&format!("  - Warning: {warning}"));
            summary.overridden.push(warning.clone());
        }

        Ok(summary)
    }

    /// Build the operation for one normalized declaration entry.
    fn build_op(
        &self,
        package: &PackageScaffold,
        dest_template: &str,
        entry: &DeclarationEntry,
    ) -> StagehandResult<ScaffoldOp> {
        match entry.effective_mode() {
            OpMode::Replace => {
                if !entry.paths.is_empty() {
                    return Err(DomainError::InvalidDeclaration {
                        package: package.name.clone(),
                        destination: dest_template.to_string(),
                        reason: "replace mode takes a single 'path', not 'paths'".into(),
                    }
                    .into());
                }
                let source = ScaffoldFilePath::source_path(
                    &package.name,
                    &package.install_path,
                    dest_template,
                    entry.path.as_deref().unwrap_or(""),
                    self.fs.as_ref(),
                )?;
                Ok(ScaffoldOp::Replace(
                    ReplaceOp::new(source).with_overwrite(entry.overwrite()),
                ))
            }
            OpMode::Append => {
                let fragments = entry.fragment_paths();
                if fragments.is_empty() {
                    return Err(DomainError::InvalidDeclaration {
                        package: package.name.clone(),
                        destination: dest_template.to_string(),
                        reason: "append mode requires at least one fragment path".into(),
                    }
                    .into());
                }
                let sources = fragments
                    .iter()
                    .map(|fragment| {
                        ScaffoldFilePath::source_path(
                            &package.name,
                            &package.install_path,
                            dest_template,
                            fragment,
                            self.fs.as_ref(),
                        )
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                let mut op = AppendOp::new(sources);
                if let Some(header) = &entry.header {
                    op = op.with_header(header);
                }
                if let Some(footer) = &entry.footer {
                    op = op.with_footer(footer);
                }
                Ok(ScaffoldOp::Append(op))
            }
            OpMode::Skip => {
                if entry.path.is_some() || !entry.paths.is_empty() {
                    return Err(DomainError::InvalidDeclaration {
                        package: package.name.clone(),
                        destination: dest_template.to_string(),
                        reason: "skip mode takes no source paths".into(),
                    }
                    .into());
                }
                Ok(ScaffoldOp::Skip(SkipOp::new()))
            }
        }
    }

    /// Write the autoload bootstrap file at its fixed location.
    ///
    /// The generated file requires the package manager's own
    /// `autoload.php` via a relative path computed from the final
    /// resolved locations of the web root and the vendor directory.
    fn generate_autoload(
        &self,
        packages: &[PackageScaffold],
        web_root: &Path,
        options: &ScaffoldOptions,
    ) -> StagehandResult<String> {
        // The root project is the last package in host order.
        let owner = packages.last().map(|p| p.name.as_str()).unwrap_or("root");
        let destination = ScaffoldFilePath::autoload_path(owner, web_root);

        let vendor_dir = options
            .vendor_dir
            .clone()
            .unwrap_or_else(|| web_root.parent().unwrap_or(web_root).join("vendor"));
        let vendor_rel = relative_to(web_root, &vendor_dir);

        let mut interpolator = destination.interpolator();
        destination.add_interpolation_data(&mut interpolator, Some("dest"));
        interpolator.add_data([("vendor-path", vendor_rel.display().to_string())]);

        let content = interpolator.interpolate_or_keep(AUTOLOAD_TEMPLATE);

        if let Some(parent) = destination.full_path().parent() {
            self.fs.create_dir_all(parent)?;
        }
        self.fs
            .write(destination.full_path(), &content)
            .map_err(|e| ApplicationError::WriteFailed {
                path: destination.relative_path().to_string(),
                reason: e.to_string(),
            })?;

        self.sink
            .notice(&interpolator.interpolate_or_keep("  - Generate [dest-rel-path]"));

        Ok(destination.relative_path().to_string())
    }
}

/// Contents of the generated autoload bootstrap file.
const AUTOLOAD_TEMPLATE: &str = r#"<?php

/**
 * @file
 * Includes the autoloader created by the package manager.
 *
 * This file was generated by stagehand; changes will be overwritten.
 */

return require __DIR__ . '/[vendor-path]/autoload.php';
"#;

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::tests::{StubFilesystem, StubSink};
    use std::sync::Arc;

    fn package(name: &str, install: &str, decls: &[(&str, ScaffoldDeclaration)]) -> PackageScaffold {
        PackageScaffold {
            name: name.into(),
            install_path: PathBuf::from(install),
            declarations: decls
                .iter()
                .map(|(d, decl)| (d.to_string(), decl.clone()))
                .collect(),
        }
    }

    fn service(fs: StubFilesystem) -> ScaffoldService {
        ScaffoldService::new(Box::new(fs), Box::new(StubSink::default()))
    }

    #[test]
    fn resolve_later_package_wins() {
        let fs = StubFilesystem::with_files([
            "/pkg/a/assets/robots.txt",
            "/pkg/b/assets/other-robots.txt",
        ]);
        let packages = vec![
            package(
                "fixtures/a",
                "/pkg/a",
                &[(
                    "[web-root]/robots.txt",
                    ScaffoldDeclaration::Source("assets/robots.txt".into()),
                )],
            ),
            package(
                "fixtures/b",
                "/pkg/b",
                &[(
                    "[web-root]/robots.txt",
                    ScaffoldDeclaration::Source("assets/other-robots.txt".into()),
                )],
            ),
        ];

        let collection = service(fs).resolve(&packages, Path::new("/web")).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.warnings().len(), 1);

        let winner = collection.get("[web-root]/robots.txt").unwrap();
        assert_eq!(winner.package_name(), "fixtures/b");
    }

    #[test]
    fn resolve_fails_fast_on_missing_source() {
        let fs = StubFilesystem::default();
        let packages = vec![package(
            "fixtures/a",
            "/pkg/a",
            &[(
                "[web-root]/robots.txt",
                ScaffoldDeclaration::Source("assets/robots.txt".into()),
            )],
        )];

        let err = service(fs)
            .resolve(&packages, Path::new("/web"))
            .unwrap_err();
        assert!(err.to_string().contains("assets/robots.txt"));
        assert!(err.to_string().contains("fixtures/a"));
    }

    #[test]
    fn resolve_rejects_append_without_fragments() {
        let fs = StubFilesystem::default();
        let entry = DeclarationEntry {
            mode: Some(OpMode::Append),
            ..DeclarationEntry::default()
        };
        let packages = vec![package(
            "fixtures/a",
            "/pkg/a",
            &[(
                "[web-root]/.gitignore",
                ScaffoldDeclaration::Detailed(entry),
            )],
        )];

        let err = service(fs)
            .resolve(&packages, Path::new("/web"))
            .unwrap_err();
        assert!(err.to_string().contains("append mode requires"));
    }

    #[test]
    fn apply_counts_written_and_skipped() {
        let fs = StubFilesystem::with_files(["/pkg/a/assets/robots.txt"]);
        let packages = vec![package(
            "fixtures/a",
            "/pkg/a",
            &[
                (
                    "[web-root]/robots.txt",
                    ScaffoldDeclaration::Source("assets/robots.txt".into()),
                ),
                ("[web-root]/.htaccess", ScaffoldDeclaration::Enabled(false)),
            ],
        )];

        let sink = Arc::new(StubSink::default());
        struct SharedSink(Arc<StubSink>);
        impl crate::application::ports::ProgressSink for SharedSink {
            fn notice(&self, message: &str) {
                self.0.notice(message);
            }
        }

        let service = ScaffoldService::new(
            Box::new(fs),
            Box::new(SharedSink(Arc::clone(&sink))),
        );
        let collection = service.resolve(&packages, Path::new("/web")).unwrap();
        let summary = service
            .apply(&collection, &ScaffoldOptions::default())
            .unwrap();

        assert_eq!(summary.written, vec!["[web-root]/robots.txt"]);
        assert_eq!(summary.skipped, vec!["[web-root]/.htaccess"]);
        assert!(summary.is_success());

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Copy [web-root]/robots.txt from assets/robots.txt"));
        assert!(lines[1].contains("disabled by fixtures/a"));
    }

    #[test]
    fn scaffold_appends_autoload_to_written() {
        let fs = StubFilesystem::with_files(["/pkg/a/assets/robots.txt"]);
        let packages = vec![package(
            "fixtures/a",
            "/pkg/a",
            &[(
                "[web-root]/robots.txt",
                ScaffoldDeclaration::Source("assets/robots.txt".into()),
            )],
        )];

        let summary = service(fs)
            .scaffold(&packages, Path::new("/web"), &ScaffoldOptions::default())
            .unwrap();
        assert_eq!(
            summary.written,
            vec!["[web-root]/robots.txt", "[web-root]/autoload.php"]
        );
    }
}
