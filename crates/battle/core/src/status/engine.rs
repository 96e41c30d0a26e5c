//! Per-combatant status-effect bookkeeping.
//!
//! The engine owns every active [`StatusEffect`] in a battle, keyed by
//! [`CombatantId`]. Application enforces immunity, stacking, and
//! coexistence rules; the turn hooks drive action prevention and
//! damage-over-time; the aggregators fold per-effect multipliers into the
//! values the damage resolver reads.

use arrayvec::ArrayVec;

use super::condition::StatusCondition;
use super::effect::StatusEffect;
use crate::config::BattleConfig;
use crate::env::RngOracle;
use crate::event::{BattleEvent, EventLog};
use crate::state::{Combatant, CombatantId};

type EffectList = ArrayVec<StatusEffect, { BattleConfig::MAX_STATUS_EFFECTS }>;

/// Active status effects for both sides of a battle.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEngine {
    player: EffectList,
    enemy: EffectList,
}

impl StatusEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn list(&self, id: CombatantId) -> &EffectList {
        match id {
            CombatantId::Player => &self.player,
            CombatantId::Enemy => &self.enemy,
        }
    }

    fn list_mut(&mut self, id: CombatantId) -> &mut EffectList {
        match id {
            CombatantId::Player => &mut self.player,
            CombatantId::Enemy => &mut self.enemy,
        }
    }

    /// Active effects on one combatant, in insertion order.
    pub fn effects(&self, id: CombatantId) -> &[StatusEffect] {
        self.list(id)
    }

    pub fn has(&self, id: CombatantId, condition: StatusCondition) -> bool {
        self.list(id).iter().any(|e| e.condition == condition)
    }

    pub fn stack_count(&self, id: CombatantId, condition: StatusCondition) -> u32 {
        self.list(id)
            .iter()
            .find(|e| e.condition == condition)
            .map(|e| e.stack_count)
            .unwrap_or(0)
    }

    /// Attaches a status effect to `target`.
    ///
    /// Fails on dead or immune targets. If an instance of the same
    /// condition exists, the remaining duration is refreshed to the
    /// longer of the two and an update is signalled, Parasitic included:
    /// re-application refreshes duration without deepening the stack.
    /// Otherwise the new instance must coexist with every active one
    /// before it is appended.
    pub fn add(&mut self, target: &Combatant, effect: StatusEffect, events: &mut EventLog) -> bool {
        if target.is_dead() {
            return false;
        }
        if target.is_immune_to(effect.condition) {
            tracing::debug!(name = %target.name, condition = %effect.condition, "immune to status");
            return false;
        }

        let list = self.list_mut(target.id);

        if let Some(existing) = list.iter_mut().find(|e| e.condition == effect.condition) {
            // Same condition already present: refresh, never duplicate.
            // Stackable conditions also only refresh here; the stack
            // count is left untouched on re-application.
            existing.remaining_turns = existing.remaining_turns.max(effect.remaining_turns);
            events.push(BattleEvent::StatusUpdated {
                id: target.id,
                condition: existing.condition,
                turns: existing.remaining_turns,
            });
            return true;
        }

        // Coexistence check against every active effect. Different
        // conditions always coexist and the same-condition case was
        // handled above, so this can only reject if the rules ever
        // change; kept to mirror the application order of the rules.
        if list
            .iter()
            .any(|e| !e.condition.can_coexist(effect.condition))
        {
            tracing::debug!(name = %target.name, condition = %effect.condition, "status cannot coexist");
            return false;
        }

        let condition = effect.condition;
        let turns = effect.remaining_turns;
        if list.try_push(effect).is_err() {
            tracing::warn!(
                name = %target.name,
                capacity = BattleConfig::MAX_STATUS_EFFECTS,
                "status list full, dropping effect"
            );
            return false;
        }

        events.push(BattleEvent::StatusApplied {
            id: target.id,
            condition,
            turns,
        });
        true
    }

    /// Removes one instance of a condition, signalling its removal.
    pub fn remove(&mut self, id: CombatantId, condition: StatusCondition, events: &mut EventLog) {
        let list = self.list_mut(id);
        if let Some(index) = list.iter().position(|e| e.condition == condition) {
            list.remove(index);
            events.push(BattleEvent::StatusRemoved { id, condition });
        }
    }

    /// Removes every active effect, signalling each removal.
    pub fn clear_all(&mut self, id: CombatantId, events: &mut EventLog) {
        let list = self.list_mut(id);
        for effect in list.take() {
            events.push(BattleEvent::StatusRemoved {
                id,
                condition: effect.condition,
            });
        }
    }

    /// Removes all instances of one condition, signalling each removal.
    pub fn clear_of_condition(
        &mut self,
        id: CombatantId,
        condition: StatusCondition,
        events: &mut EventLog,
    ) {
        let list = self.list_mut(id);
        let before = list.len();
        list.retain(|e| e.condition != condition);
        for _ in 0..before - list.len() {
            events.push(BattleEvent::StatusRemoved { id, condition });
        }
    }

    /// Start-of-turn scan: the first effect whose prevention check fires
    /// blocks the whole turn. Only one prevention is signalled even when
    /// several effects could block.
    pub fn process_turn_start(
        &self,
        pet: &Combatant,
        rng: &mut dyn RngOracle,
        events: &mut EventLog,
    ) -> bool {
        for effect in self.list(pet.id) {
            if effect.blocks_action(rng) {
                tracing::debug!(name = %pet.name, condition = %effect.condition, "action prevented");
                events.push(BattleEvent::ActionPrevented {
                    id: pet.id,
                    condition: effect.condition,
                });
                return true;
            }
        }
        false
    }

    /// End-of-turn sweep over `target`'s effects, in insertion order:
    /// apply DOT damage (Parasitic feeds its source), count durations
    /// down, and only then drop everything that expired.
    pub fn process_turn_end(
        &mut self,
        target: &mut Combatant,
        other: &mut Combatant,
        events: &mut EventLog,
    ) {
        let count = self.list(target.id).len();

        for i in 0..count {
            let effect = self.list(target.id)[i];
            let damage = effect.turn_damage(target.max_hp());

            if damage > 0 {
                target.apply_damage(damage, events);
                events.push(BattleEvent::StatusDamageTick {
                    id: target.id,
                    condition: effect.condition,
                    amount: damage,
                });

                if effect.condition == StatusCondition::Parasitic {
                    let heal_multiplier = self.heal_multiplier(effect.source);
                    let source = if effect.source == target.id {
                        &mut *target
                    } else {
                        &mut *other
                    };
                    if !source.is_dead() {
                        source.apply_heal(damage, heal_multiplier, events);
                    }
                }
            }

            self.list_mut(target.id)[i].tick_turn();
        }

        // Removal happens only after every effect has ticked.
        let expired: Vec<StatusCondition> = self
            .list(target.id)
            .iter()
            .filter(|e| e.is_expired())
            .map(|e| e.condition)
            .collect();
        for condition in expired {
            self.remove(target.id, condition, events);
        }
    }

    /// Product of attack multipliers across all active effects.
    pub fn attack_multiplier(&self, id: CombatantId) -> f32 {
        self.list(id)
            .iter()
            .map(|e| e.condition.attack_multiplier())
            .product()
    }

    /// Product of accuracy multipliers across all active effects.
    pub fn accuracy_multiplier(&self, id: CombatantId) -> f32 {
        self.list(id)
            .iter()
            .map(|e| e.condition.accuracy_multiplier())
            .product()
    }

    /// Product of heal multipliers across all active effects.
    pub fn heal_multiplier(&self, id: CombatantId) -> f32 {
        self.list(id)
            .iter()
            .map(|e| e.condition.heal_multiplier())
            .product()
    }

    /// Whether any active effect compels an attack against the self.
    pub fn should_attack_self(&self, id: CombatantId, rng: &mut dyn RngOracle) -> bool {
        self.list(id).iter().any(|e| e.triggers_self_attack(rng))
    }

    /// Whether every active effect allows acting this attempt.
    pub fn can_act(&self, id: CombatantId, rng: &mut dyn RngOracle) -> bool {
        !self.list(id).iter().any(|e| e.blocks_action(rng))
    }
}
