//! JSON plan-file loader.
//!
//! The plan file is the handoff from the package manager: the web root,
//! a global symlink preference, and the ordered package list with each
//! package's raw scaffold declarations. Declaration order within a
//! package and package order within the file are both significant, so
//! parsing preserves them.
//!
//! Relative paths in the file (web root, install paths) resolve against
//! the plan file's own directory, which keeps plan files relocatable.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use stagehand_core::{
    application::PackageScaffold,
    domain::ScaffoldDeclaration,
    error::{StagehandError, StagehandResult},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawPlan {
    web_root: String,
    #[serde(default)]
    symlink: bool,
    packages: Vec<RawPackage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawPackage {
    name: String,
    install_path: String,
    #[serde(default)]
    scaffold: serde_json::Map<String, serde_json::Value>,
}

/// A parsed and path-resolved plan file.
#[derive(Debug, Clone)]
pub struct PlanFile {
    pub web_root: PathBuf,
    pub symlink: bool,
    /// Packages in file order; the root project comes last.
    pub packages: Vec<PackageScaffold>,
}

/// Load and validate a plan file.
pub fn load_plan(path: &Path) -> StagehandResult<PlanFile> {
    let text = std::fs::read_to_string(path).map_err(|e| StagehandError::Configuration {
        message: format!("could not read plan file {}: {}", path.display(), e),
    })?;

    let raw: RawPlan = serde_json::from_str(&text).map_err(|e| StagehandError::Configuration {
        message: format!("plan file {} is not valid: {}", path.display(), e),
    })?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let web_root = absolutize(base, &raw.web_root);

    let mut packages = Vec::with_capacity(raw.packages.len());
    for package in raw.packages {
        let install_path = absolutize(base, &package.install_path);
        let mut declarations = Vec::with_capacity(package.scaffold.len());
        for (destination, value) in package.scaffold {
            let declaration: ScaffoldDeclaration =
                serde_json::from_value(value).map_err(|e| StagehandError::Configuration {
                    message: format!(
                        "invalid scaffold declaration for {} in package {}: {}",
                        destination, package.name, e
                    ),
                })?;
            declarations.push((destination, declaration));
        }
        packages.push(PackageScaffold {
            name: package.name,
            install_path,
            declarations,
        });
    }

    debug!(
        plan = %path.display(),
        packages = packages.len(),
        "plan file loaded"
    );

    Ok(PlanFile {
        web_root,
        symlink: raw.symlink,
        packages,
    })
}

fn absolutize(base: &Path, raw: &str) -> PathBuf {
    let path = PathBuf::from(raw);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use stagehand_core::domain::OpMode;

    fn write_plan(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("scaffold-plan.json");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_packages_and_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_plan(
            dir.path(),
            r#"{
                "web-root": "web",
                "packages": [
                    {
                        "name": "fixtures/scaffold-a",
                        "install-path": "vendor/fixtures/scaffold-a",
                        "scaffold": {
                            "[web-root]/robots.txt": "assets/robots.txt",
                            "[web-root]/.htaccess": false
                        }
                    }
                ]
            }"#,
        );

        let plan = load_plan(&path).unwrap();
        assert_eq!(plan.web_root, dir.path().join("web"));
        assert!(!plan.symlink);
        assert_eq!(plan.packages.len(), 1);

        let package = &plan.packages[0];
        assert_eq!(package.name, "fixtures/scaffold-a");
        assert_eq!(
            package.install_path,
            dir.path().join("vendor/fixtures/scaffold-a")
        );

        // Declaration order is file order.
        let destinations: Vec<_> = package.declarations.iter().map(|(d, _)| d.clone()).collect();
        assert_eq!(destinations, vec!["[web-root]/robots.txt", "[web-root]/.htaccess"]);
        assert!(matches!(
            package.declarations[1].1,
            ScaffoldDeclaration::Enabled(false)
        ));
    }

    #[test]
    fn parses_detailed_declarations() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_plan(
            dir.path(),
            r#"{
                "web-root": "/srv/web",
                "symlink": true,
                "packages": [
                    {
                        "name": "fixtures/scaffold-b",
                        "install-path": "/srv/vendor/fixtures/scaffold-b",
                        "scaffold": {
                            "[web-root]/.gitignore": {
                                "mode": "append",
                                "paths": ["assets/gitignore-extra.txt"],
                                "append-on-conflict": true
                            }
                        }
                    }
                ]
            }"#,
        );

        let plan = load_plan(&path).unwrap();
        assert!(plan.symlink);
        assert_eq!(plan.web_root, PathBuf::from("/srv/web"));

        let entry = plan.packages[0].declarations[0].1.normalize();
        assert_eq!(entry.effective_mode(), OpMode::Append);
        assert!(entry.append_on_conflict);
    }

    #[test]
    fn rejects_malformed_json_as_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_plan(dir.path(), "{ not json");

        let err = load_plan(&path).unwrap_err();
        assert!(matches!(err, StagehandError::Configuration { .. }));
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let err = load_plan(Path::new("/nonexistent/plan.json")).unwrap_err();
        assert!(matches!(err, StagehandError::Configuration { .. }));
        assert!(err.to_string().contains("/nonexistent/plan.json"));
    }
}
