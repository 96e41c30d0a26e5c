//! Pet roster loader.
//!
//! Loads pet records from RON files and resolves them into combatants.

use std::path::Path;

use battle_core::{Combatant, CombatantId};

use super::specs::PetSpec;
use super::{LoadResult, read_file};

/// Loader for pet rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    ///
    /// RON format: `Vec<PetSpec>`
    pub fn load(path: &Path) -> LoadResult<Vec<PetSpec>> {
        let content = read_file(path)?;
        ron::from_str(&content).map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))
    }

    /// Load a roster and build the first two entries as the player and
    /// enemy sides of a battle.
    pub fn load_pair(path: &Path) -> LoadResult<(Combatant, Combatant)> {
        let specs = Self::load(path)?;
        Self::build_pair(&specs)
    }

    /// Build the first two roster entries as (player, enemy).
    pub fn build_pair(specs: &[PetSpec]) -> LoadResult<(Combatant, Combatant)> {
        let [player, enemy, ..] = specs else {
            anyhow::bail!("roster needs at least two pets, found {}", specs.len());
        };
        Ok((
            player.build(CombatantId::Player)?,
            enemy.build(CombatantId::Enemy)?,
        ))
    }
}
