//! Combatant and skill data model.
//!
//! Skill definitions are immutable data records supplied by the caller
//! (the content crate builds them from RON); the only runtime-mutable part
//! of a loadout is each skill's current PP. Combatants own their HP meter,
//! stat levels, and loadout, and every mutation appends typed events for
//! the UI collaborator.
mod combatant;
mod skill;
mod stat;

pub use combatant::{BaseStats, Combatant, CombatantId};
pub use skill::{ClearStatus, SkillCategory, SkillDef, SkillEffect, SkillInstance, StatusApplication};
pub use stat::{StatKind, StatLevels, StatModifier};
