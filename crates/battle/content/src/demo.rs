//! Built-in demo roster for tests, examples, and headless runs.

use battle_core::{
    BaseStats, ClearStatus, Combatant, CombatantId, Element, SkillCategory, SkillDef, SkillEffect,
    StatKind, StatModifier, StatusApplication, StatusCondition,
};

/// A ready-to-fight pair: a grass attacker with drain and parasitism
/// against a fire bruiser with burns and a cleanse.
pub fn demo_pets() -> (Combatant, Combatant) {
    let player = Combatant::new(CombatantId::Player, "Sprigleaf", Element::Grass, 180)
        .with_base_stats(BaseStats {
            attack: 85,
            magic_attack: 105,
            defense: 80,
            magic_defense: 95,
            speed: 100,
        })
        .with_skill(
            SkillDef::new("Vine Lash", Element::Grass, SkillCategory::Physical)
                .with_power(70)
                .with_max_pp(20),
        )
        .with_skill(
            SkillDef::new("Leech Life", Element::Grass, SkillCategory::Special)
                .with_power(60)
                .with_max_pp(10)
                .with_effect(SkillEffect::Drain, 0.5),
        )
        .with_skill(
            SkillDef::new("Parasitic Seed", Element::Grass, SkillCategory::Status)
                .with_accuracy(90)
                .with_max_pp(10)
                .with_effect(SkillEffect::ApplyStatus, 0.0)
                .with_status(
                    StatusApplication::new(StatusCondition::Parasitic, 100).with_damage_rate(0.08),
                ),
        )
        .with_skill(
            SkillDef::new("Growth", Element::None, SkillCategory::Support)
                .self_cast()
                .with_accuracy(0)
                .with_max_pp(5)
                .with_effect(SkillEffect::StatModifier, 0.0)
                .with_stat_modifier(StatModifier::new(StatKind::Attack, 1))
                .with_stat_modifier(StatModifier::new(StatKind::MagicAttack, 1)),
        )
        .with_passive(SkillDef::new(
            "Maple Bloodline",
            Element::Grass,
            SkillCategory::Passive,
        ));

    let enemy = Combatant::new(CombatantId::Enemy, "Emberfang", Element::Fire, 170)
        .with_base_stats(BaseStats {
            attack: 100,
            magic_attack: 90,
            defense: 85,
            magic_defense: 80,
            speed: 95,
        })
        .with_skill(
            SkillDef::new("Flame Fang", Element::Fire, SkillCategory::Physical)
                .with_power(75)
                .with_max_pp(15)
                .with_status(StatusApplication::new(StatusCondition::Burn, 30)),
        )
        .with_skill(
            SkillDef::new("Scorch", Element::Fire, SkillCategory::Special)
                .with_power(90)
                .with_accuracy(85)
                .with_max_pp(10),
        )
        .with_skill(
            SkillDef::new("Cleansing Flame", Element::Fire, SkillCategory::Support)
                .self_cast()
                .with_accuracy(0)
                .with_max_pp(5)
                .with_effect(SkillEffect::ClearStatus, 0.0)
                .with_clear_status(ClearStatus::All),
        );

    (player, enemy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_pets_are_battle_ready() {
        let (player, enemy) = demo_pets();
        assert_eq!(player.id, CombatantId::Player);
        assert_eq!(enemy.id, CombatantId::Enemy);
        assert!(!player.skills.is_empty());
        assert!(!enemy.skills.is_empty());
        assert!(player.skills.iter().all(|s| s.has_pp()));
        // The fire side cannot be burned by its own element.
        assert!(enemy.is_immune_to(StatusCondition::Burn));
    }
}
