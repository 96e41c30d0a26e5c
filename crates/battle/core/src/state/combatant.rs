//! Battling entities and their guarded mutators.
//!
//! HP and the dead flag are private so the `0 ≤ hp ≤ max` invariant and
//! the fire-death-once rule cannot be bypassed; everything else is plain
//! data. Mutators append typed events for the UI collaborator instead of
//! talking to any global channel.

use arrayvec::ArrayVec;

use super::skill::{SkillDef, SkillInstance};
use super::stat::{StatKind, StatLevels};
use crate::config::BattleConfig;
use crate::element::Element;
use crate::event::{BattleEvent, EventLog};
use crate::status::StatusCondition;

/// Identifies one of the two sides of a battle.
///
/// Status bookkeeping is keyed by this id rather than by object identity,
/// so state stays addressable across resets and snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatantId {
    Player,
    Enemy,
}

impl CombatantId {
    pub fn opponent(self) -> Self {
        match self {
            CombatantId::Player => CombatantId::Enemy,
            CombatantId::Enemy => CombatantId::Player,
        }
    }
}

/// The five base stats a combatant is created with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub attack: i32,
    pub magic_attack: i32,
    pub defense: i32,
    pub magic_defense: i32,
    pub speed: i32,
}

impl Default for BaseStats {
    fn default() -> Self {
        Self {
            attack: 80,
            magic_attack: 90,
            defense: 70,
            magic_defense: 80,
            speed: 100,
        }
    }
}

/// One battling pet.
///
/// Owned exclusively by the battle session: created at battle start,
/// mutated throughout, and restored by [`Combatant::reset_for_battle`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub element: Element,
    max_hp: i32,
    current_hp: i32,
    pub base: BaseStats,
    pub levels: StatLevels,
    pub skills: ArrayVec<SkillInstance, { BattleConfig::MAX_SKILLS }>,
    /// Passive skill consulted by the damage resolver's passive hook.
    pub passive: Option<SkillDef>,
    dead: bool,
    pub stunned: bool,
    /// Explicit immunities on top of the element-derived ones.
    pub immunities: Vec<StatusCondition>,
}

impl Combatant {
    pub fn new(id: CombatantId, name: impl Into<String>, element: Element, max_hp: i32) -> Self {
        let max_hp = max_hp.max(1);
        Self {
            id,
            name: name.into(),
            element,
            max_hp,
            current_hp: max_hp,
            base: BaseStats::default(),
            levels: StatLevels::default(),
            skills: ArrayVec::new(),
            passive: None,
            dead: false,
            stunned: false,
            immunities: Vec::new(),
        }
    }

    pub fn with_base_stats(mut self, base: BaseStats) -> Self {
        self.base = base;
        self
    }

    pub fn with_skill(mut self, def: SkillDef) -> Self {
        if self.skills.try_push(SkillInstance::new(def)).is_err() {
            tracing::warn!(
                name = %self.name,
                capacity = BattleConfig::MAX_SKILLS,
                "skill loadout full, dropping skill"
            );
        }
        self
    }

    pub fn with_passive(mut self, def: SkillDef) -> Self {
        self.passive = Some(def);
        self
    }

    pub fn with_immunity(mut self, condition: StatusCondition) -> Self {
        self.immunities.push(condition);
        self
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    pub fn current_hp(&self) -> i32 {
        self.current_hp
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Effective attack for the chosen branch: base × (1 + level × 0.1).
    pub fn effective_attack(&self, physical: bool) -> f32 {
        let (base, level) = if physical {
            (self.base.attack, self.levels.attack)
        } else {
            (self.base.magic_attack, self.levels.magic_attack)
        };
        base as f32 * (1.0 + level as f32 * BattleConfig::STAT_LEVEL_MULTIPLIER)
    }

    /// Effective defense for the chosen branch: base × (1 + level × 0.1).
    pub fn effective_defense(&self, physical: bool) -> f32 {
        let (base, level) = if physical {
            (self.base.defense, self.levels.defense)
        } else {
            (self.base.magic_defense, self.levels.magic_defense)
        };
        base as f32 * (1.0 + level as f32 * BattleConfig::STAT_LEVEL_MULTIPLIER)
    }

    /// Subtracts HP, clamped to `[0, max]`. Reaching zero marks the
    /// combatant dead and emits the death event exactly once. No-op on an
    /// already dead combatant.
    pub fn apply_damage(&mut self, amount: i32, events: &mut EventLog) {
        if self.dead {
            return;
        }

        self.current_hp = (self.current_hp - amount).clamp(0, self.max_hp);

        if self.current_hp <= 0 {
            self.current_hp = 0;
            self.dead = true;
            events.push(BattleEvent::Died { id: self.id });
        }

        events.push(BattleEvent::HpChanged {
            id: self.id,
            current: self.current_hp,
            max: self.max_hp,
        });
    }

    /// Adds `round(amount × heal_multiplier)` HP, clamped to max. The
    /// multiplier is the status engine's heal aggregate for this
    /// combatant. No-op when dead.
    pub fn apply_heal(&mut self, amount: i32, heal_multiplier: f32, events: &mut EventLog) {
        if self.dead {
            return;
        }

        let healed = (amount as f32 * heal_multiplier).round() as i32;
        self.current_hp = (self.current_hp + healed).clamp(0, self.max_hp);

        events.push(BattleEvent::HpChanged {
            id: self.id,
            current: self.current_hp,
            max: self.max_hp,
        });
        events.push(BattleEvent::HealReceived {
            id: self.id,
            amount: healed,
        });

        if heal_multiplier < 1.0 {
            tracing::debug!(name = %self.name, healed, "heal reduced by status condition");
        }
    }

    /// Adds `delta` levels to a stat, clamping both the delta and the
    /// resulting level to the [-6, 6] range.
    pub fn modify_stat_level(&mut self, stat: StatKind, delta: i32, events: &mut EventLog) {
        let delta = delta.clamp(BattleConfig::MIN_STAT_LEVEL, BattleConfig::MAX_STAT_LEVEL);
        self.levels.modify(stat, delta);

        events.push(BattleEvent::StatChanged {
            id: self.id,
            stat,
            delta,
        });
    }

    /// Restores HP to max, clears the dead/stunned flags, zeroes all stat
    /// levels, and refills every skill's PP. Status effects are cleared
    /// separately by the status engine.
    pub fn reset_for_battle(&mut self, events: &mut EventLog) {
        self.current_hp = self.max_hp;
        self.dead = false;
        self.stunned = false;
        self.levels.clear();

        for skill in &mut self.skills {
            skill.reset_pp();
        }

        events.push(BattleEvent::HpChanged {
            id: self.id,
            current: self.current_hp,
            max: self.max_hp,
        });
    }

    /// Element-derived immunities unioned with the explicit list.
    pub fn is_immune_to(&self, condition: StatusCondition) -> bool {
        let elemental = match condition {
            StatusCondition::Burn => self.element == Element::Fire,
            StatusCondition::Freeze => self.element == Element::Water,
            StatusCondition::Paralyze => self.element == Element::Electric,
            StatusCondition::Poison => {
                self.element == Element::Poison || self.element == Element::Mech
            }
            _ => false,
        };
        elemental || self.immunities.contains(&condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::skill::SkillCategory;

    fn pet(max_hp: i32) -> Combatant {
        Combatant::new(CombatantId::Player, "Testling", Element::None, max_hp)
    }

    #[test]
    fn damage_clamps_to_zero_and_fires_death_once() {
        let mut events = EventLog::new();
        let mut pet = pet(50);

        pet.apply_damage(80, &mut events);
        assert_eq!(pet.current_hp(), 0);
        assert!(pet.is_dead());

        // Further damage is a no-op and must not re-fire death.
        pet.apply_damage(10, &mut events);

        let deaths = events
            .iter()
            .filter(|e| matches!(e, BattleEvent::Died { .. }))
            .count();
        assert_eq!(deaths, 1);
    }

    #[test]
    fn heal_clamps_to_max_and_ignores_the_dead() {
        let mut events = EventLog::new();
        let mut pet = pet(100);

        pet.apply_damage(30, &mut events);
        pet.apply_heal(1000, 1.0, &mut events);
        assert_eq!(pet.current_hp(), 100);

        pet.apply_damage(200, &mut events);
        assert!(pet.is_dead());
        pet.apply_heal(50, 1.0, &mut events);
        assert_eq!(pet.current_hp(), 0);
    }

    #[test]
    fn heal_multiplier_rounds_the_final_amount() {
        let mut events = EventLog::new();
        let mut pet = pet(100);
        pet.apply_damage(50, &mut events);

        // Poisoned heal: 25 × 0.5 = 12.5, rounds to 13.
        pet.apply_heal(25, 0.5, &mut events);
        assert_eq!(pet.current_hp(), 63);
    }

    #[test]
    fn elemental_immunities_union_with_explicit_list() {
        let fire = Combatant::new(CombatantId::Enemy, "Cinder", Element::Fire, 100);
        assert!(fire.is_immune_to(StatusCondition::Burn));
        assert!(!fire.is_immune_to(StatusCondition::Freeze));

        let mech = Combatant::new(CombatantId::Enemy, "Gear", Element::Mech, 100)
            .with_immunity(StatusCondition::Stun);
        assert!(mech.is_immune_to(StatusCondition::Poison));
        assert!(mech.is_immune_to(StatusCondition::Stun));
        assert!(!mech.is_immune_to(StatusCondition::Confusion));
    }

    #[test]
    fn reset_restores_hp_levels_and_pp() {
        let mut events = EventLog::new();
        let mut pet = pet(100).with_skill(SkillDef::new(
            "Tackle",
            Element::None,
            SkillCategory::Physical,
        ));

        pet.apply_damage(60, &mut events);
        pet.modify_stat_level(StatKind::Attack, 3, &mut events);
        pet.skills[0].current_pp = 0;

        pet.reset_for_battle(&mut events);
        assert_eq!(pet.current_hp(), 100);
        assert!(!pet.is_dead());
        assert_eq!(pet.levels, StatLevels::default());
        assert_eq!(pet.skills[0].current_pp, pet.skills[0].def.max_pp);
    }

    #[test]
    fn effective_stats_scale_ten_percent_per_level() {
        let mut events = EventLog::new();
        let mut pet = pet(100).with_base_stats(BaseStats {
            attack: 100,
            magic_attack: 50,
            defense: 80,
            magic_defense: 60,
            speed: 70,
        });

        assert_eq!(pet.effective_attack(true), 100.0);
        pet.modify_stat_level(StatKind::Attack, 2, &mut events);
        assert!((pet.effective_attack(true) - 120.0).abs() < f32::EPSILON);

        pet.modify_stat_level(StatKind::MagicDefense, -3, &mut events);
        assert!((pet.effective_defense(false) - 42.0).abs() < 1e-3);
    }
}
