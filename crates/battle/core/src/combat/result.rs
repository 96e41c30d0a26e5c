//! Damage computation result.

use crate::element::EffectLabel;

/// Outcome of a single damage computation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageOutcome {
    /// Final damage, ≥ 1 for formula damage.
    pub amount: i32,
    /// Elemental matchup multiplier that went into the final value.
    pub element_multiplier: f32,
    /// Whether the critical roll (or a guaranteed-crit skill) fired.
    pub critical: bool,
    /// Matchup tier for display.
    pub label: EffectLabel,
}
