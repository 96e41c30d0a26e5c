//! Content loaders for reading battle data from files.
//!
//! Loaders convert RON files into `battle-core` combatants and skills.
//! String element/category/condition tags are resolved here, at load
//! time; unknown tags are load errors, never formula-time fallbacks.

pub mod roster;
pub mod specs;

pub use roster::RosterLoader;
pub use specs::{PetSpec, SkillSpec, StatModifierSpec, StatusSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
