//! Merge resolver: destination path → winning operation.
//!
//! All merge logic lives here, in one place, as an explicit reduce over
//! the ordered sequence of (destination, operation) pairs the packages
//! declare — not scattered across the host's package-iteration loop.
//!
//! Merge rules:
//! - first declaration of a destination is inserted;
//! - a later append with append-on-conflict accumulates its fragments
//!   onto the existing entry;
//! - anything else replaces the existing entry (later package wins) and
//!   records a non-fatal [`OverrideWarning`].
//!
//! Append-on-conflict is deliberately *not* retroactive: a later replace
//! of a destination that accumulated append fragments discards those
//! fragments, with a warning, like any other override.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::application::operations::{AppendOp, ScaffoldOp};
use crate::application::plan::ScaffoldFileInfo;

/// Non-fatal diagnostic: a later package re-declared a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideWarning {
    pub destination: String,
    pub previous_package: String,
    pub package: String,
}

impl fmt::Display for OverrideWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} overrides scaffold file {} previously declared by {}",
            self.package, self.destination, self.previous_package
        )
    }
}

/// Ordered map from destination-relative-path to the winning entry.
///
/// Keys are unique — merging is total and never silently produces
/// duplicates. Iteration preserves first-insertion order of destination
/// paths, which keeps processing (and progress output) deterministic.
#[derive(Debug, Default, Clone)]
pub struct ScaffoldFileCollection {
    order: Vec<String>,
    entries: HashMap<String, ScaffoldFileInfo>,
    warnings: Vec<OverrideWarning>,
}

impl ScaffoldFileCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one declaration into the collection.
    ///
    /// `append_on_conflict` is the incoming declaration's flag; it only
    /// matters when the incoming operation is an append and the
    /// destination already has an entry.
    pub fn add(&mut self, destination: &str, info: ScaffoldFileInfo, append_on_conflict: bool) {
        let Some(existing) = self.entries.get_mut(destination) else {
            self.order.push(destination.to_string());
            self.entries.insert(destination.to_string(), info);
            return;
        };

        if append_on_conflict && matches!(info.op(), ScaffoldOp::Append(_)) {
            let (_, ScaffoldOp::Append(incoming)) = info.into_parts() else {
                unreachable!("matched append above");
            };
            match existing.op_mut() {
                ScaffoldOp::Append(op) => op.merge(incoming),
                // An earlier replace becomes the first fragment.
                ScaffoldOp::Replace(op) => {
                    let mut seeded = AppendOp::new(vec![op.source().clone()]);
                    seeded.merge(incoming);
                    *existing.op_mut() = ScaffoldOp::Append(seeded);
                }
                // Skip consumed the destination's priority; accumulating
                // onto it would resurrect a file the user disabled.
                ScaffoldOp::Skip(_) => {
                    debug!(destination, "append-on-conflict ignored: destination is disabled");
                }
            }
            return;
        }

        let warning = OverrideWarning {
            destination: destination.to_string(),
            previous_package: existing.package_name().to_string(),
            package: info.package_name().to_string(),
        };
        debug!(%warning, "scaffold file overridden");
        *existing = info;
        self.warnings.push(warning);
    }

    /// Resolved entries, in first-insertion order of their destinations.
    pub fn files(&self) -> impl Iterator<Item = &ScaffoldFileInfo> {
        self.order.iter().map(|k| &self.entries[k])
    }

    /// Look up the entry for a destination-relative path.
    pub fn get(&self, destination: &str) -> Option<&ScaffoldFileInfo> {
        self.entries.get(destination)
    }

    /// Override diagnostics accumulated during merging.
    pub fn warnings(&self) -> &[OverrideWarning] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
