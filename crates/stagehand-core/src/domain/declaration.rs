//! Already-parsed per-package scaffold declarations.
//!
//! Parsing the manifest file itself is the host's (or the plan loader's)
//! job; what arrives here is the key/value shape a manifest produces.
//! A declaration maps a destination template to either a bare source
//! path, a boolean (`false` disables the destination), or a structured
//! entry selecting a mode and its parameters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a destination file is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpMode {
    /// Copy (or link) one source over the destination.
    Replace,
    /// Concatenate ordered fragments into the destination.
    Append,
    /// Leave the destination alone, consuming its priority.
    Skip,
}

impl OpMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Append => "append",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for OpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One raw declaration value, as a manifest would spell it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaffoldDeclaration {
    /// `"assets/robots.txt"` — shorthand for a replace with that source.
    Source(String),
    /// `false` — explicitly disable this destination. (`true` carries no
    /// source and is caught as a missing source during plan building.)
    Enabled(bool),
    /// Structured form with an explicit mode and parameters.
    Detailed(DeclarationEntry),
}

impl ScaffoldDeclaration {
    /// Lower any declaration form to its structured equivalent.
    pub fn normalize(&self) -> DeclarationEntry {
        match self {
            Self::Source(path) => DeclarationEntry {
                mode: Some(OpMode::Replace),
                path: Some(path.clone()),
                ..DeclarationEntry::default()
            },
            Self::Enabled(false) => DeclarationEntry {
                mode: Some(OpMode::Skip),
                ..DeclarationEntry::default()
            },
            Self::Enabled(true) => DeclarationEntry {
                mode: Some(OpMode::Replace),
                ..DeclarationEntry::default()
            },
            Self::Detailed(entry) => entry.clone(),
        }
    }
}

/// Structured declaration entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DeclarationEntry {
    /// Operation mode. When omitted it is inferred: `append` if `paths`
    /// were given, `replace` otherwise.
    pub mode: Option<OpMode>,
    /// Source path for replace mode (relative to the package).
    pub path: Option<String>,
    /// Ordered fragment paths for append mode.
    pub paths: Vec<String>,
    /// Whether a replace may overwrite an existing destination file.
    /// Defaults to true.
    pub overwrite: Option<bool>,
    /// Accumulate this append's fragments onto an earlier declaration of
    /// the same destination instead of overriding it.
    pub append_on_conflict: bool,
    /// Literal text placed before the appended fragments. Interpolated
    /// tolerantly with the destination's data.
    pub header: Option<String>,
    /// Literal text placed after the appended fragments.
    pub footer: Option<String>,
}

impl DeclarationEntry {
    /// The effective operation mode.
    pub fn effective_mode(&self) -> OpMode {
        self.mode.unwrap_or(if self.paths.is_empty() {
            OpMode::Replace
        } else {
            OpMode::Append
        })
    }

    /// Whether a replace may clobber an existing destination.
    pub fn overwrite(&self) -> bool {
        self.overwrite.unwrap_or(true)
    }

    /// The ordered fragment list for append mode.
    ///
    /// A lone `path` is accepted as a single fragment so the shorthand
    /// `{mode: append, path: …}` works.
    pub fn fragment_paths(&self) -> Vec<&str> {
        if self.paths.is_empty() {
            self.path.iter().map(String::as_str).collect()
        } else {
            self.paths.iter().map(String::as_str).collect()
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_normalizes_to_replace() {
        let decl = ScaffoldDeclaration::Source("assets/robots.txt".into());
        let entry = decl.normalize();
        assert_eq!(entry.effective_mode(), OpMode::Replace);
        assert_eq!(entry.path.as_deref(), Some("assets/robots.txt"));
        assert!(entry.overwrite());
    }

    #[test]
    fn false_normalizes_to_skip() {
        let entry = ScaffoldDeclaration::Enabled(false).normalize();
        assert_eq!(entry.effective_mode(), OpMode::Skip);
    }

    #[test]
    fn true_normalizes_to_replace_without_source() {
        let entry = ScaffoldDeclaration::Enabled(true).normalize();
        assert_eq!(entry.effective_mode(), OpMode::Replace);
        assert!(entry.path.is_none());
    }

    #[test]
    fn mode_inferred_from_paths() {
        let entry = DeclarationEntry {
            paths: vec!["assets/a.txt".into(), "assets/b.txt".into()],
            ..DeclarationEntry::default()
        };
        assert_eq!(entry.effective_mode(), OpMode::Append);
        assert_eq!(entry.fragment_paths(), vec!["assets/a.txt", "assets/b.txt"]);
    }

    #[test]
    fn lone_path_works_as_append_fragment() {
        let entry = DeclarationEntry {
            mode: Some(OpMode::Append),
            path: Some("assets/extra.txt".into()),
            ..DeclarationEntry::default()
        };
        assert_eq!(entry.fragment_paths(), vec!["assets/extra.txt"]);
    }

    #[test]
    fn deserializes_manifest_shapes() {
        let shorthand: ScaffoldDeclaration =
            serde_json::from_str(r#""assets/robots.txt""#).unwrap();
        assert!(matches!(shorthand, ScaffoldDeclaration::Source(_)));

        let disabled: ScaffoldDeclaration = serde_json::from_str("false").unwrap();
        assert!(matches!(disabled, ScaffoldDeclaration::Enabled(false)));

        let detailed: ScaffoldDeclaration = serde_json::from_str(
            r#"{"mode": "append", "paths": ["a.txt"], "append-on-conflict": true}"#,
        )
        .unwrap();
        let entry = detailed.normalize();
        assert_eq!(entry.effective_mode(), OpMode::Append);
        assert!(entry.append_on_conflict);
    }

    #[test]
    fn overwrite_false_round_trips() {
        let detailed: ScaffoldDeclaration =
            serde_json::from_str(r#"{"path": "assets/.htaccess", "overwrite": false}"#).unwrap();
        let entry = detailed.normalize();
        assert_eq!(entry.effective_mode(), OpMode::Replace);
        assert!(!entry.overwrite());
    }
}
