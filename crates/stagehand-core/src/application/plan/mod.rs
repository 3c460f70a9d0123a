//! The resolved scaffold plan: per-destination file info and the merge
//! resolver that combines declarations from every package into one map.

mod collection;
mod file_info;

pub use collection::{OverrideWarning, ScaffoldFileCollection};
pub use file_info::ScaffoldFileInfo;
