/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Pause between a resolved skill and the end-of-turn bookkeeping.
    /// Purely presentation pacing; the outcome never depends on it.
    pub turn_end_delay_ms: u64,

    /// Pause before the scripted enemy takes its scheduled action.
    pub enemy_turn_delay_ms: u64,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of skills in a combatant's loadout.
    pub const MAX_SKILLS: usize = 4;
    /// Maximum number of concurrently active status effects per combatant.
    pub const MAX_STATUS_EFFECTS: usize = 8;

    // ===== balance constants =====
    /// Lower bound for a stat level.
    pub const MIN_STAT_LEVEL: i32 = -6;
    /// Upper bound for a stat level.
    pub const MAX_STAT_LEVEL: i32 = 6;
    /// Each stat level scales the base stat by 10%.
    pub const STAT_LEVEL_MULTIPLIER: f32 = 0.1;

    /// Critical chance with a critical level of zero.
    pub const BASE_CRIT_CHANCE: f32 = 0.05;
    /// Additional critical chance per critical level.
    pub const CRIT_CHANCE_PER_LEVEL: f32 = 0.05;
    /// Damage multiplier on a critical hit.
    pub const CRIT_MULTIPLIER: f32 = 1.5;

    /// Lower bound of the uniform damage variance roll.
    pub const DAMAGE_VARIANCE_MIN: f32 = 0.85;
    /// Upper bound of the uniform damage variance roll.
    pub const DAMAGE_VARIANCE_MAX: f32 = 1.15;

    /// Flat damage a confused enemy deals to itself at the start of its
    /// turn. A literal special case, not derived from the damage formula.
    pub const CONFUSION_SELF_HIT: i32 = 20;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TURN_END_DELAY_MS: u64 = 500;
    pub const DEFAULT_ENEMY_TURN_DELAY_MS: u64 = 1500;

    pub fn new() -> Self {
        Self {
            turn_end_delay_ms: Self::DEFAULT_TURN_END_DELAY_MS,
            enemy_turn_delay_ms: Self::DEFAULT_ENEMY_TURN_DELAY_MS,
        }
    }

    /// Config with zero pacing delays, useful for tests and headless runs.
    pub fn immediate() -> Self {
        Self {
            turn_end_delay_ms: 0,
            enemy_turn_delay_ms: 0,
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
