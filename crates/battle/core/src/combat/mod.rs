//! Damage and hit resolution.
//!
//! Pure functions over combatant snapshots, skill data, status-engine
//! queries, and the injected environment. Nothing in here mutates state;
//! the resolution pipeline applies the results.
mod damage;
mod hit;
mod result;

pub use damage::compute_damage;
pub use hit::check_hit;
pub use result::DamageOutcome;
