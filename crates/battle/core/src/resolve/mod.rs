//! Skill effect resolution pipeline.
//!
//! One skill use resolves in a fixed sequence with no suspension points:
//!
//! 1. Classify the skill (status path vs damage path) by category.
//! 2. Hit check; a miss ends the turn with no further effects.
//! 3. Damage path: confusion may redirect the hit at the attacker
//!    (resolved once, turn over); otherwise damage lands, then exactly
//!    one secondary effect (drain / percentage damage / heal), then the
//!    skill's status application and clear-status directive.
//! 4. Status path: stat modifiers in list order against the resolved
//!    target, then the same status application / clear logic.
//!
//! Presentation pacing (the pause before the turn formally ends) lives in
//! the runtime scheduler, never here.

use crate::combat::{check_hit, compute_damage};
use crate::element::EffectLabel;
use crate::env::BattleEnv;
use crate::event::{BattleEvent, EventLog};
use crate::state::{ClearStatus, Combatant, CombatantId, SkillDef, SkillEffect, StatusApplication};
use crate::status::{StatusEffect, StatusEngine};

/// Resolve one use of `skill` by `attacker` against `defender`.
///
/// All effects are applied before this returns; the caller owns ending
/// the turn afterwards.
pub fn resolve_skill(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    skill: &SkillDef,
    statuses: &mut StatusEngine,
    env: &mut BattleEnv<'_>,
    events: &mut EventLog,
) {
    tracing::debug!(attacker = %attacker.name, skill = %skill.name, "resolving skill");

    if skill.category.is_status() {
        resolve_status_skill(attacker, defender, skill, statuses, env, events);
    } else {
        resolve_damage_skill(attacker, defender, skill, statuses, env, events);
    }
}

fn resolve_damage_skill(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    skill: &SkillDef,
    statuses: &mut StatusEngine,
    env: &mut BattleEnv<'_>,
    events: &mut EventLog,
) {
    if !check_hit(
        skill.accuracy,
        statuses.accuracy_multiplier(attacker.id),
        env.rng,
    ) {
        events.push(BattleEvent::Missed {
            attacker: attacker.id,
            skill: skill.name.clone(),
        });
        return;
    }

    // Confusion check: the attack may turn on its user. Resolved as a
    // single self-hit through the normal formula; nothing else applies.
    if statuses.should_attack_self(attacker.id, env.rng) {
        let outcome = compute_damage(attacker, attacker, skill, statuses, env);
        attacker.apply_damage(outcome.amount, events);
        events.push(BattleEvent::SelfAttack {
            id: attacker.id,
            amount: outcome.amount,
        });
        return;
    }

    let outcome = compute_damage(attacker, defender, skill, statuses, env);
    defender.apply_damage(outcome.amount, events);
    events.push(BattleEvent::DamageDealt {
        attacker: attacker.id,
        defender: defender.id,
        skill: skill.name.clone(),
        amount: outcome.amount,
        label: outcome.label,
        critical: outcome.critical,
    });

    // Exactly one secondary effect, chosen by the skill's effect kind.
    match skill.effect {
        SkillEffect::Drain => {
            let heal = (outcome.amount as f32 * skill.effect_value).round() as i32;
            if heal > 0 {
                let multiplier = statuses.heal_multiplier(attacker.id);
                attacker.apply_heal(heal, multiplier, events);
            }
        }
        SkillEffect::PercentageDamage => {
            let amount = (defender.current_hp() as f32 * skill.effect_value).round() as i32;
            defender.apply_damage(amount, events);
            events.push(BattleEvent::DamageDealt {
                attacker: attacker.id,
                defender: defender.id,
                skill: skill.name.clone(),
                amount,
                label: EffectLabel::Neutral,
                critical: false,
            });
        }
        SkillEffect::Heal => {
            let heal = (skill.power as f32 * skill.effect_value).round() as i32;
            if heal > 0 {
                let multiplier = statuses.heal_multiplier(defender.id);
                defender.apply_heal(heal, multiplier, events);
            }
        }
        _ => {}
    }

    let attacker_id = attacker.id;
    apply_skill_status(attacker_id, defender, skill.status.as_ref(), statuses, env, events);
    apply_clear_status(defender, skill.clear_status, statuses, events);
}

fn resolve_status_skill(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    skill: &SkillDef,
    statuses: &mut StatusEngine,
    env: &mut BattleEnv<'_>,
    events: &mut EventLog,
) {
    if !check_hit(
        skill.accuracy,
        statuses.accuracy_multiplier(attacker.id),
        env.rng,
    ) {
        events.push(BattleEvent::Missed {
            attacker: attacker.id,
            skill: skill.name.clone(),
        });
        return;
    }

    let attacker_id = attacker.id;
    let target = if skill.applies_to_target {
        defender
    } else {
        attacker
    };

    for modifier in &skill.stat_modifiers {
        target.modify_stat_level(modifier.stat, modifier.delta, events);
    }

    apply_skill_status(attacker_id, target, skill.status.as_ref(), statuses, env, events);
    apply_clear_status(target, skill.clear_status, statuses, events);
}

/// Roll the skill's status chance and attach the effect on success.
fn apply_skill_status(
    source: CombatantId,
    target: &Combatant,
    application: Option<&StatusApplication>,
    statuses: &mut StatusEngine,
    env: &mut BattleEnv<'_>,
    events: &mut EventLog,
) {
    let Some(application) = application else {
        return;
    };
    if application.chance == 0 {
        return;
    }
    if env.rng.roll_percent() >= application.chance {
        return;
    }

    let duration = if application.duration > 0 {
        application.duration as i32
    } else {
        application.condition.default_duration()
    };

    let effect = StatusEffect::new(application.condition, duration, source)
        .with_damage_rate(application.damage_rate);
    statuses.add(target, effect, events);
}

fn apply_clear_status(
    target: &Combatant,
    clear: Option<ClearStatus>,
    statuses: &mut StatusEngine,
    events: &mut EventLog,
) {
    match clear {
        Some(ClearStatus::All) => statuses.clear_all(target.id, events),
        Some(ClearStatus::One(condition)) => {
            statuses.clear_of_condition(target.id, condition, events)
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::env::rng::testing::ScriptedRng;
    use crate::state::{BaseStats, SkillCategory, StatKind, StatModifier};
    use crate::status::StatusCondition;

    fn pets() -> (Combatant, Combatant) {
        let base = BaseStats {
            attack: 100,
            magic_attack: 100,
            defense: 100,
            magic_defense: 100,
            speed: 100,
        };
        (
            Combatant::new(CombatantId::Player, "Sprig", Element::Grass, 200)
                .with_base_stats(base),
            Combatant::new(CombatantId::Enemy, "Fang", Element::Dark, 200).with_base_stats(base),
        )
    }

    fn tackle() -> SkillDef {
        SkillDef::new("Tackle", Element::None, SkillCategory::Physical).with_power(100)
    }

    #[test]
    fn miss_ends_the_turn_with_no_effects() {
        let (mut attacker, mut defender) = pets();
        let mut statuses = StatusEngine::new();
        let mut events = EventLog::new();
        // Hit roll of 99 misses a 50-accuracy skill.
        let mut rng = ScriptedRng::constant(0.99);
        let mut env = BattleEnv::without_passives(&mut rng);

        let skill = tackle().with_accuracy(50);
        resolve_skill(&mut attacker, &mut defender, &skill, &mut statuses, &mut env, &mut events);

        assert_eq!(defender.current_hp(), 200);
        let drained = events.drain();
        assert_eq!(drained.len(), 1);
        assert!(matches!(drained[0], BattleEvent::Missed { .. }));
    }

    #[test]
    fn damage_skill_emits_events_in_pipeline_order() {
        let (mut attacker, mut defender) = pets();
        let mut statuses = StatusEngine::new();
        let mut events = EventLog::new();
        // hit, no crit, neutral variance
        let mut rng = ScriptedRng::new(vec![0.0, 0.99, 0.5]);
        let mut env = BattleEnv::without_passives(&mut rng);

        resolve_skill(&mut attacker, &mut defender, &tackle(), &mut statuses, &mut env, &mut events);

        let drained = events.drain();
        assert!(matches!(drained[0], BattleEvent::HpChanged { .. }));
        assert!(matches!(drained[1], BattleEvent::DamageDealt { amount: 100, .. }));
        assert_eq!(defender.current_hp(), 100);
    }

    #[test]
    fn drain_heals_the_attacker_from_damage_dealt() {
        let (mut attacker, mut defender) = pets();
        attacker.apply_damage(100, &mut EventLog::new());
        let mut statuses = StatusEngine::new();
        let mut events = EventLog::new();
        let mut rng = ScriptedRng::new(vec![0.0, 0.99, 0.5]);
        let mut env = BattleEnv::without_passives(&mut rng);

        let skill = tackle().with_effect(SkillEffect::Drain, 0.5);
        resolve_skill(&mut attacker, &mut defender, &skill, &mut statuses, &mut env, &mut events);

        // 100 damage dealt, half drained back.
        assert_eq!(defender.current_hp(), 100);
        assert_eq!(attacker.current_hp(), 150);
    }

    #[test]
    fn percentage_damage_applies_a_second_independent_hit() {
        let (mut attacker, mut defender) = pets();
        let mut statuses = StatusEngine::new();
        let mut events = EventLog::new();
        let mut rng = ScriptedRng::new(vec![0.0, 0.99, 0.5]);
        let mut env = BattleEnv::without_passives(&mut rng);

        let skill = tackle().with_effect(SkillEffect::PercentageDamage, 0.5);
        resolve_skill(&mut attacker, &mut defender, &skill, &mut statuses, &mut env, &mut events);

        // 100 formula damage leaves 100 HP, then half of *current* HP.
        assert_eq!(defender.current_hp(), 50);
        let hits = events
            .iter()
            .filter(|e| matches!(e, BattleEvent::DamageDealt { .. }))
            .count();
        assert_eq!(hits, 2);
    }

    #[test]
    fn heal_effect_heals_the_pipeline_target_after_the_hit() {
        let (mut attacker, mut defender) = pets();
        defender.apply_damage(150, &mut EventLog::new());
        let mut statuses = StatusEngine::new();
        let mut events = EventLog::new();
        let mut rng = ScriptedRng::new(vec![0.0, 0.99, 0.5]);
        let mut env = BattleEnv::without_passives(&mut rng);

        // 40 power: the hit takes 40 (50 → 10), then the heal restores
        // round(40 × 0.5) = 20 (10 → 30).
        let skill = tackle().with_power(40).with_effect(SkillEffect::Heal, 0.5);
        resolve_skill(&mut attacker, &mut defender, &skill, &mut statuses, &mut env, &mut events);

        assert_eq!(defender.current_hp(), 30);
        assert!(events.iter().any(|e| matches!(
            e,
            BattleEvent::HealReceived { id: CombatantId::Enemy, amount: 20 }
        )));
    }

    #[test]
    fn confused_attacker_hits_itself_once() {
        let (mut attacker, mut defender) = pets();
        let mut statuses = StatusEngine::new();
        let mut events = EventLog::new();
        statuses.add(
            &attacker,
            StatusEffect::new(StatusCondition::Confusion, 3, CombatantId::Enemy),
            &mut events,
        );

        // hit roll, confusion roll (0.1 < 0.4 triggers), crit roll, variance
        let mut rng = ScriptedRng::new(vec![0.0, 0.1, 0.99, 0.5]);
        let mut env = BattleEnv::without_passives(&mut rng);
        let mut events = EventLog::new();

        resolve_skill(&mut attacker, &mut defender, &tackle(), &mut statuses, &mut env, &mut events);

        assert_eq!(defender.current_hp(), 200, "defender untouched");
        assert_eq!(attacker.current_hp(), 100, "attacker hit itself");
        assert!(events.iter().any(|e| matches!(e, BattleEvent::SelfAttack { .. })));
        assert!(!events.iter().any(|e| matches!(e, BattleEvent::DamageDealt { .. })));
    }

    #[test]
    fn status_skill_applies_modifiers_to_self_when_not_targeting() {
        let (mut attacker, mut defender) = pets();
        let mut statuses = StatusEngine::new();
        let mut events = EventLog::new();
        let mut rng = ScriptedRng::constant(0.0);
        let mut env = BattleEnv::without_passives(&mut rng);

        let skill = SkillDef::new("Sharpen", Element::None, SkillCategory::Status)
            .self_cast()
            .with_effect(SkillEffect::StatModifier, 0.0)
            .with_stat_modifier(StatModifier::new(StatKind::Attack, 2))
            .with_stat_modifier(StatModifier::new(StatKind::Critical, 1));
        resolve_skill(&mut attacker, &mut defender, &skill, &mut statuses, &mut env, &mut events);

        assert_eq!(attacker.levels.attack, 2);
        assert_eq!(attacker.levels.critical, 1);
        assert_eq!(defender.levels.attack, 0);
    }

    #[test]
    fn status_application_respects_the_chance_roll() {
        let (mut attacker, mut defender) = pets();
        let mut statuses = StatusEngine::new();
        let mut events = EventLog::new();

        let skill = SkillDef::new("Ember", Element::Fire, SkillCategory::Special)
            .with_power(50)
            .with_status(StatusApplication::new(StatusCondition::Burn, 30));

        // hit, no crit, variance, status roll 0.95 → 95 ≥ 30 fails.
        let mut rng = ScriptedRng::new(vec![0.0, 0.99, 0.5, 0.95]);
        let mut env = BattleEnv::without_passives(&mut rng);
        resolve_skill(&mut attacker, &mut defender, &skill, &mut statuses, &mut env, &mut events);
        assert!(!statuses.has(CombatantId::Enemy, StatusCondition::Burn));

        // Same again with a 0.1 → 10 < 30 succeeds.
        let mut rng = ScriptedRng::new(vec![0.0, 0.99, 0.5, 0.1]);
        let mut env = BattleEnv::without_passives(&mut rng);
        resolve_skill(&mut attacker, &mut defender, &skill, &mut statuses, &mut env, &mut events);
        assert!(statuses.has(CombatantId::Enemy, StatusCondition::Burn));
    }

    #[test]
    fn cleanse_clears_statuses_from_the_resolved_target() {
        let (mut attacker, mut defender) = pets();
        let mut statuses = StatusEngine::new();
        let mut events = EventLog::new();
        statuses.add(
            &attacker,
            StatusEffect::new(StatusCondition::Burn, 4, CombatantId::Enemy),
            &mut events,
        );
        statuses.add(
            &attacker,
            StatusEffect::new(StatusCondition::Blind, 3, CombatantId::Enemy),
            &mut events,
        );

        let skill = SkillDef::new("Purify", Element::Light, SkillCategory::Support)
            .self_cast()
            .with_effect(SkillEffect::ClearStatus, 0.0)
            .with_clear_status(ClearStatus::All);

        let mut rng = ScriptedRng::constant(0.0);
        let mut env = BattleEnv::without_passives(&mut rng);
        let mut events = EventLog::new();
        resolve_skill(&mut attacker, &mut defender, &skill, &mut statuses, &mut env, &mut events);

        assert!(statuses.effects(CombatantId::Player).is_empty());
        let removed = events
            .iter()
            .filter(|e| matches!(e, BattleEvent::StatusRemoved { .. }))
            .count();
        assert_eq!(removed, 2);
    }
}
