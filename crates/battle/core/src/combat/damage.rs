//! Damage calculation.

use super::result::DamageOutcome;
use crate::config::BattleConfig;
use crate::element::{EffectLabel, element_effect};
use crate::env::BattleEnv;
use crate::state::{Combatant, SkillDef, SkillEffect};
use crate::status::StatusEngine;

/// Calculate the damage of one skill use.
///
/// # Formula
///
/// ```text
/// base  = (attack × power × status_attack_multiplier) / defense
/// final = max(1, round(base × element × crit × uniform(0.85, 1.15) × passive))
/// ```
///
/// Fixed-damage skills bypass the formula entirely and deal
/// `round(effect_value)`. The attack/defense branch follows the skill
/// category (physical reads attack/defense, everything else reads the
/// magic pair), with both sides floored at 1 before the division. The
/// critical chance is `0.05 + critical level × 0.05`; guaranteed-crit
/// skills always crit and consume no roll.
pub fn compute_damage(
    attacker: &Combatant,
    defender: &Combatant,
    skill: &SkillDef,
    statuses: &StatusEngine,
    env: &mut BattleEnv<'_>,
) -> DamageOutcome {
    if skill.effect == SkillEffect::FixedDamage {
        return DamageOutcome {
            amount: skill.effect_value.round() as i32,
            element_multiplier: 1.0,
            critical: false,
            label: EffectLabel::Fixed,
        };
    }

    let physical = skill.category.is_physical();

    let mut attack = attacker.effective_attack(physical);
    let mut defense = defender.effective_defense(physical);
    if defense <= 0.0 {
        defense = 1.0;
    }
    if attack <= 0.0 {
        attack = 1.0;
    }

    let status_attack_multiplier = statuses.attack_multiplier(attacker.id);

    let element = element_effect(skill.element, defender.element);

    let crit_chance = BattleConfig::BASE_CRIT_CHANCE
        + attacker.levels.critical as f32 * BattleConfig::CRIT_CHANCE_PER_LEVEL;
    let critical =
        skill.effect == SkillEffect::GuaranteedCrit || env.rng.next_f32() < crit_chance;
    let crit_multiplier = if critical {
        BattleConfig::CRIT_MULTIPLIER
    } else {
        1.0
    };

    let passive_multiplier = env.passive.damage_multiplier(attacker, skill);

    let base = (attack * skill.power as f32 * status_attack_multiplier) / defense;

    let variance = env.rng.range_f32(
        BattleConfig::DAMAGE_VARIANCE_MIN,
        BattleConfig::DAMAGE_VARIANCE_MAX,
    );
    let amount = (base * element.multiplier * crit_multiplier * variance * passive_multiplier)
        .round() as i32;

    DamageOutcome {
        amount: amount.max(1),
        element_multiplier: element.multiplier,
        critical,
        label: element.label,
    }
}
