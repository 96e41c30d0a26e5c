//! Passive-skill hook for the damage formula.
//!
//! The formula asks the rule for a multiplier on every computation. Only
//! one concrete rule exists today (a low-HP damage boost); the trait is
//! the extension point, not a rule table.

use crate::state::{Combatant, SkillDef};

/// Conditional damage bonus granted by a combatant's passive skill.
pub trait PassiveRule {
    /// Multiplier applied to the final damage. Return 1.0 when the rule
    /// does not trigger.
    fn damage_multiplier(&self, attacker: &Combatant, skill: &SkillDef) -> f32;
}

/// No passive rules configured.
pub struct NoPassive;

impl PassiveRule for NoPassive {
    fn damage_multiplier(&self, _attacker: &Combatant, _skill: &SkillDef) -> f32 {
        1.0
    }
}

/// Damage boost while below half HP, keyed to a named passive skill.
pub struct LowHpFrenzy {
    skill_name: String,
}

impl LowHpFrenzy {
    /// Triggers below this fraction of max HP.
    pub const HP_THRESHOLD: f32 = 0.5;
    /// Damage multiplier while triggered.
    pub const MULTIPLIER: f32 = 1.3;

    pub fn for_skill(skill_name: impl Into<String>) -> Self {
        Self {
            skill_name: skill_name.into(),
        }
    }
}

impl PassiveRule for LowHpFrenzy {
    fn damage_multiplier(&self, attacker: &Combatant, _skill: &SkillDef) -> f32 {
        let Some(passive) = &attacker.passive else {
            return 1.0;
        };
        if passive.name != self.skill_name {
            return 1.0;
        }

        let hp_fraction = attacker.current_hp() as f32 / attacker.max_hp() as f32;
        if hp_fraction <= Self::HP_THRESHOLD {
            Self::MULTIPLIER
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::event::EventLog;
    use crate::state::{CombatantId, SkillCategory};

    fn frenzied_pet() -> Combatant {
        Combatant::new(CombatantId::Player, "Maple", Element::Fire, 100).with_passive(
            SkillDef::new("Maple Bloodline", Element::Fire, SkillCategory::Passive),
        )
    }

    #[test]
    fn triggers_only_at_or_below_half_hp() {
        let rule = LowHpFrenzy::for_skill("Maple Bloodline");
        let attack = SkillDef::new("Ember", Element::Fire, SkillCategory::Special);
        let mut events = EventLog::new();

        let mut pet = frenzied_pet();
        assert_eq!(rule.damage_multiplier(&pet, &attack), 1.0);

        pet.apply_damage(50, &mut events);
        assert_eq!(rule.damage_multiplier(&pet, &attack), 1.3);
    }

    #[test]
    fn other_passives_do_not_trigger() {
        let rule = LowHpFrenzy::for_skill("Maple Bloodline");
        let attack = SkillDef::new("Ember", Element::Fire, SkillCategory::Special);
        let mut events = EventLog::new();

        let mut pet = frenzied_pet();
        pet.passive = Some(SkillDef::new("Thick Hide", Element::None, SkillCategory::Passive));
        pet.apply_damage(80, &mut events);
        assert_eq!(rule.damage_multiplier(&pet, &attack), 1.0);
    }
}
