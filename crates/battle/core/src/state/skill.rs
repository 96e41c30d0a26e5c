//! Skill definitions.
//!
//! A [`SkillDef`] is immutable once built; the mutable current-PP counter
//! lives in [`SkillInstance`]. Category and element are closed enums;
//! any string-tagged source data is resolved at load time, never during
//! formula evaluation.

use strum::Display;

use super::stat::StatModifier;
use crate::element::Element;
use crate::status::StatusCondition;

/// Skill classification. Decides both the physical/special damage branch
/// and whether a skill resolves through the status path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillCategory {
    /// Attack using the physical attack/defense pair.
    Physical,
    /// Attack using the magic attack/defense pair.
    Special,
    /// Stat and status manipulation, no direct damage.
    Status,
    /// Support moves (heals, cleanses); resolves like `Status`.
    Support,
    /// Passive skills are never cast; carried for the passive hook.
    Passive,
}

impl SkillCategory {
    /// True for skills that resolve through the status path instead of
    /// the damage path.
    pub fn is_status(self) -> bool {
        matches!(self, Self::Status | Self::Support | Self::Passive)
    }

    /// True when damage should read the physical attack/defense pair.
    /// Every non-physical category reads the special pair.
    pub fn is_physical(self) -> bool {
        matches!(self, Self::Physical)
    }
}

/// What a skill does beyond the plain damage formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillEffect {
    /// No additional effect.
    #[default]
    None,
    /// Plain damage through the formula.
    Damage,
    /// Heal the target for `round(power × effect_value)`.
    Heal,
    /// Apply the skill's stat modifiers.
    StatModifier,
    /// Heal the attacker for `round(damage × effect_value)`.
    Drain,
    /// Deal a second hit of `round(target current HP × effect_value)`.
    PercentageDamage,
    /// Deal exactly `round(effect_value)`, ignoring all stats.
    FixedDamage,
    /// Damage that always lands a critical hit.
    GuaranteedCrit,
    /// Apply the skill's status condition.
    ApplyStatus,
    /// Clear status conditions per the skill's clear directive.
    ClearStatus,
}

/// A status condition a skill may inflict.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusApplication {
    pub condition: StatusCondition,
    /// Application chance in percent (0–100).
    pub chance: u32,
    /// Duration override in turns; 0 uses the condition's default.
    pub duration: u32,
    /// Damage-rate override for DOT conditions; 0 uses the default.
    pub damage_rate: f32,
}

impl StatusApplication {
    pub fn new(condition: StatusCondition, chance: u32) -> Self {
        Self {
            condition,
            chance,
            duration: 0,
            damage_rate: 0.0,
        }
    }

    pub fn with_duration(mut self, turns: u32) -> Self {
        self.duration = turns;
        self
    }

    pub fn with_damage_rate(mut self, rate: f32) -> Self {
        self.damage_rate = rate;
        self
    }
}

/// Clear-status directive carried by a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClearStatus {
    /// Remove every active condition from the target.
    All,
    /// Remove all instances of one condition.
    One(StatusCondition),
}

/// Immutable skill definition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDef {
    pub name: String,
    pub element: Element,
    pub category: SkillCategory,
    pub power: i32,
    /// Hit chance in percent; 0 means the skill always hits.
    pub accuracy: i32,
    pub max_pp: u32,
    /// False casts the skill on its user instead of the opponent.
    pub applies_to_target: bool,
    pub effect: SkillEffect,
    /// Effect magnitude; meaning depends on [`SkillEffect`].
    pub effect_value: f32,
    pub stat_modifiers: Vec<StatModifier>,
    pub status: Option<StatusApplication>,
    pub clear_status: Option<ClearStatus>,
}

impl SkillDef {
    pub fn new(name: impl Into<String>, element: Element, category: SkillCategory) -> Self {
        Self {
            name: name.into(),
            element,
            category,
            power: 100,
            accuracy: 100,
            max_pp: 10,
            applies_to_target: true,
            effect: SkillEffect::Damage,
            effect_value: 1.0,
            stat_modifiers: Vec::new(),
            status: None,
            clear_status: None,
        }
    }

    pub fn with_power(mut self, power: i32) -> Self {
        self.power = power;
        self
    }

    pub fn with_accuracy(mut self, accuracy: i32) -> Self {
        self.accuracy = accuracy;
        self
    }

    pub fn with_max_pp(mut self, max_pp: u32) -> Self {
        self.max_pp = max_pp;
        self
    }

    pub fn with_effect(mut self, effect: SkillEffect, value: f32) -> Self {
        self.effect = effect;
        self.effect_value = value;
        self
    }

    pub fn with_stat_modifier(mut self, modifier: StatModifier) -> Self {
        self.stat_modifiers.push(modifier);
        self
    }

    pub fn with_status(mut self, status: StatusApplication) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_clear_status(mut self, clear: ClearStatus) -> Self {
        self.clear_status = Some(clear);
        self
    }

    /// Casts on the user instead of the opponent.
    pub fn self_cast(mut self) -> Self {
        self.applies_to_target = false;
        self
    }

    pub fn has_stat_modifiers(&self) -> bool {
        !self.stat_modifiers.is_empty()
    }
}

/// A skill in a combatant's loadout: the definition plus its PP counter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillInstance {
    pub def: SkillDef,
    pub current_pp: u32,
}

impl SkillInstance {
    pub fn new(def: SkillDef) -> Self {
        let current_pp = def.max_pp;
        Self { def, current_pp }
    }

    pub fn has_pp(&self) -> bool {
        self.current_pp > 0
    }

    pub fn reset_pp(&mut self) {
        self.current_pp = self.def.max_pp;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_starts_at_max_pp() {
        let skill = SkillInstance::new(
            SkillDef::new("Ember", Element::Fire, SkillCategory::Special).with_max_pp(15),
        );
        assert_eq!(skill.current_pp, 15);
        assert!(skill.has_pp());
    }

    #[test]
    fn reset_restores_spent_pp() {
        let mut skill =
            SkillInstance::new(SkillDef::new("Tackle", Element::None, SkillCategory::Physical));
        skill.current_pp = 0;
        assert!(!skill.has_pp());
        skill.reset_pp();
        assert_eq!(skill.current_pp, skill.def.max_pp);
    }

    #[test]
    fn status_categories_resolve_through_status_path() {
        assert!(SkillCategory::Status.is_status());
        assert!(SkillCategory::Support.is_status());
        assert!(SkillCategory::Passive.is_status());
        assert!(!SkillCategory::Physical.is_status());
        assert!(!SkillCategory::Special.is_status());
    }
}
