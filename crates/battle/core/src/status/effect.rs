//! A single active status-effect instance.

use super::condition::StatusCondition;
use crate::env::RngOracle;
use crate::state::CombatantId;

/// One active affliction on a combatant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub condition: StatusCondition,
    /// Turns left; the instance is removed at the end of the turn this
    /// reaches zero.
    pub remaining_turns: i32,
    /// Stack depth, ≥ 1. Only meaningful for stackable conditions.
    pub stack_count: u32,
    /// Who inflicted the effect; Parasitic heals this side.
    pub source: CombatantId,
    /// Per-instance damage-rate override; 0 uses the condition default.
    pub damage_rate: f32,
}

impl StatusEffect {
    pub fn new(condition: StatusCondition, remaining_turns: i32, source: CombatantId) -> Self {
        Self {
            condition,
            remaining_turns,
            stack_count: 1,
            source,
            damage_rate: 0.0,
        }
    }

    pub fn with_damage_rate(mut self, rate: f32) -> Self {
        self.damage_rate = rate;
        self
    }

    /// End-of-turn damage against a combatant with the given max HP.
    ///
    /// DOT conditions deal `floor(max_hp × rate × stacks)` with a floor
    /// of 1; stacks only multiply for Parasitic. Non-DOT conditions deal
    /// nothing.
    pub fn turn_damage(&self, max_hp: i32) -> i32 {
        if !self.condition.is_damage_over_time() {
            return 0;
        }

        let rate = if self.damage_rate > 0.0 {
            self.damage_rate
        } else {
            self.condition.default_damage_rate()
        };

        let damage = if self.condition == StatusCondition::Parasitic {
            (max_hp as f32 * rate * self.stack_count as f32) as i32
        } else {
            (max_hp as f32 * rate) as i32
        };
        damage.max(1)
    }

    /// Whether this effect blocks the combatant's action this attempt.
    pub fn blocks_action(&self, rng: &mut dyn RngOracle) -> bool {
        match self.condition {
            StatusCondition::Freeze | StatusCondition::Stun => true,
            StatusCondition::Paralyze => rng.next_f32() < StatusCondition::PARALYZE_BLOCK_CHANCE,
            _ => false,
        }
    }

    /// Whether this effect redirects the combatant's attack at itself.
    pub fn triggers_self_attack(&self, rng: &mut dyn RngOracle) -> bool {
        self.condition == StatusCondition::Confusion
            && rng.next_f32() < StatusCondition::CONFUSION_SELF_ATTACK_CHANCE
    }

    /// End-of-turn bookkeeping: count the turn down.
    pub fn tick_turn(&mut self) {
        if self.remaining_turns > 0 {
            self.remaining_turns -= 1;
        }
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_turns <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::rng::testing::ScriptedRng;

    #[test]
    fn dot_damage_floors_at_one() {
        let effect = StatusEffect::new(StatusCondition::Burn, 4, CombatantId::Enemy);
        // 5 × 0.1 = 0.5, truncates to 0, floored to 1.
        assert_eq!(effect.turn_damage(5), 1);
        assert_eq!(effect.turn_damage(100), 10);
    }

    #[test]
    fn parasitic_damage_scales_with_stacks() {
        let mut effect = StatusEffect::new(StatusCondition::Parasitic, 5, CombatantId::Enemy);
        assert_eq!(effect.turn_damage(100), 8);
        effect.stack_count = 3;
        assert_eq!(effect.turn_damage(100), 24);
    }

    #[test]
    fn rate_override_takes_precedence() {
        let effect = StatusEffect::new(StatusCondition::Poison, 5, CombatantId::Enemy)
            .with_damage_rate(0.25);
        assert_eq!(effect.turn_damage(100), 25);
    }

    #[test]
    fn non_dot_conditions_never_tick_damage() {
        let effect = StatusEffect::new(StatusCondition::Blind, 3, CombatantId::Enemy);
        assert_eq!(effect.turn_damage(1000), 0);
    }

    #[test]
    fn freeze_always_blocks_and_paralyze_rolls() {
        let mut rng = ScriptedRng::constant(0.9);
        let freeze = StatusEffect::new(StatusCondition::Freeze, 3, CombatantId::Enemy);
        assert!(freeze.blocks_action(&mut rng));

        let paralyze = StatusEffect::new(StatusCondition::Paralyze, 4, CombatantId::Enemy);
        let mut low = ScriptedRng::constant(0.1);
        let mut high = ScriptedRng::constant(0.6);
        assert!(paralyze.blocks_action(&mut low));
        assert!(!paralyze.blocks_action(&mut high));
    }

    #[test]
    fn expiry_happens_at_zero_turns() {
        let mut effect = StatusEffect::new(StatusCondition::Stun, 2, CombatantId::Player);
        assert!(!effect.is_expired());
        effect.tick_turn();
        effect.tick_turn();
        assert!(effect.is_expired());
        // Ticking past zero stays at zero.
        effect.tick_turn();
        assert_eq!(effect.remaining_turns, 0);
    }
}
