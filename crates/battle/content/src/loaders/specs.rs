//! Serde records for authored pet and skill data.
//!
//! Specs mirror the authoring vocabulary: elements, categories, stats,
//! and conditions are strings (English names or the original Chinese
//! labels) and resolve to the closed core enums when built. Effects use
//! the core enum directly since the authoring tool already wrote them as
//! tagged values.

use serde::{Deserialize, Serialize};

use battle_core::{
    ClearStatus, Combatant, CombatantId, BaseStats, Element, SkillCategory, SkillDef, SkillEffect,
    StatKind, StatModifier, StatusApplication, StatusCondition,
};

use super::LoadResult;

/// Authored skill record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSpec {
    pub name: String,
    #[serde(default)]
    pub element: String,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_power")]
    pub power: i32,
    #[serde(default = "default_accuracy")]
    pub accuracy: i32,
    #[serde(default = "default_max_pp")]
    pub max_pp: u32,
    #[serde(default = "default_true")]
    pub applies_to_target: bool,
    #[serde(default)]
    pub effect: SkillEffect,
    #[serde(default = "default_effect_value")]
    pub effect_value: f32,
    #[serde(default)]
    pub stat_modifiers: Vec<StatModifierSpec>,
    #[serde(default)]
    pub status: Option<StatusSpec>,
    #[serde(default)]
    pub clear_all_status: bool,
    #[serde(default)]
    pub clear_status: Option<String>,
}

/// Authored stat modifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatModifierSpec {
    pub stat: String,
    pub delta: i32,
    #[serde(default)]
    pub percentage: bool,
}

/// Authored status application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSpec {
    pub condition: String,
    #[serde(default = "default_chance")]
    pub chance: u32,
    /// 0 uses the condition's default duration.
    #[serde(default)]
    pub duration: u32,
    /// 0 uses the condition's default damage rate.
    #[serde(default)]
    pub damage_rate: f32,
}

/// Authored pet record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetSpec {
    pub name: String,
    #[serde(default)]
    pub element: String,
    pub max_hp: i32,
    pub attack: i32,
    pub magic_attack: i32,
    pub defense: i32,
    pub magic_defense: i32,
    pub speed: i32,
    #[serde(default)]
    pub skills: Vec<SkillSpec>,
    #[serde(default)]
    pub passive: Option<SkillSpec>,
    #[serde(default)]
    pub immunities: Vec<String>,
}

fn default_power() -> i32 {
    100
}

fn default_accuracy() -> i32 {
    100
}

fn default_max_pp() -> u32 {
    10
}

fn default_effect_value() -> f32 {
    1.0
}

fn default_chance() -> u32 {
    100
}

fn default_true() -> bool {
    true
}

impl SkillSpec {
    /// Resolves the record into an immutable skill definition.
    pub fn build(&self) -> LoadResult<SkillDef> {
        let mut def = SkillDef::new(
            self.name.clone(),
            parse_element(&self.element)?,
            parse_category(&self.category)?,
        )
        .with_power(self.power)
        .with_accuracy(self.accuracy)
        .with_max_pp(self.max_pp)
        .with_effect(self.effect, self.effect_value);

        if !self.applies_to_target {
            def = def.self_cast();
        }

        for modifier in &self.stat_modifiers {
            def = def.with_stat_modifier(StatModifier {
                stat: parse_stat(&modifier.stat)?,
                delta: modifier.delta,
                percentage: modifier.percentage,
            });
        }

        if let Some(status) = &self.status {
            def = def.with_status(
                StatusApplication::new(parse_condition(&status.condition)?, status.chance)
                    .with_duration(status.duration)
                    .with_damage_rate(status.damage_rate),
            );
        }

        if self.clear_all_status {
            def = def.with_clear_status(ClearStatus::All);
        } else if let Some(condition) = &self.clear_status {
            def = def.with_clear_status(ClearStatus::One(parse_condition(condition)?));
        }

        Ok(def)
    }
}

impl PetSpec {
    /// Resolves the record into a combatant for the given side.
    pub fn build(&self, id: CombatantId) -> LoadResult<Combatant> {
        let mut pet = Combatant::new(id, self.name.clone(), parse_element(&self.element)?, self.max_hp)
            .with_base_stats(BaseStats {
                attack: self.attack,
                magic_attack: self.magic_attack,
                defense: self.defense,
                magic_defense: self.magic_defense,
                speed: self.speed,
            });

        for skill in &self.skills {
            pet = pet.with_skill(skill.build()?);
        }
        if let Some(passive) = &self.passive {
            pet = pet.with_passive(passive.build()?);
        }
        for immunity in &self.immunities {
            pet = pet.with_immunity(parse_condition(immunity)?);
        }

        Ok(pet)
    }
}

/// Resolve an element tag. Accepts English names and the original
/// Chinese labels; empty means no affinity.
pub fn parse_element(tag: &str) -> LoadResult<Element> {
    let element = match tag.trim() {
        "" | "无" => Element::None,
        "火" => Element::Fire,
        "水" => Element::Water,
        "草" => Element::Grass,
        "雷" => Element::Electric,
        "岩" => Element::Rock,
        "风" => Element::Wind,
        "毒" => Element::Poison,
        "光" => Element::Light,
        "暗" => Element::Dark,
        "圣灵" => Element::Holy,
        "机械" => Element::Mech,
        other => match other.to_ascii_lowercase().as_str() {
            "none" => Element::None,
            "fire" => Element::Fire,
            "water" => Element::Water,
            "grass" => Element::Grass,
            "electric" => Element::Electric,
            "rock" => Element::Rock,
            "wind" => Element::Wind,
            "poison" => Element::Poison,
            "light" => Element::Light,
            "dark" => Element::Dark,
            "holy" => Element::Holy,
            "mech" => Element::Mech,
            _ => anyhow::bail!("unknown element tag '{tag}'"),
        },
    };
    Ok(element)
}

/// Resolve a category tag. Empty defaults to physical, matching the
/// original data where untagged skills hit with the physical pair.
pub fn parse_category(tag: &str) -> LoadResult<SkillCategory> {
    let category = match tag.trim() {
        "" | "攻击" => SkillCategory::Physical,
        "特攻" => SkillCategory::Special,
        "属性" => SkillCategory::Status,
        "辅助" => SkillCategory::Support,
        "被动" => SkillCategory::Passive,
        other => match other.to_ascii_lowercase().as_str() {
            "physical" => SkillCategory::Physical,
            "special" => SkillCategory::Special,
            "status" => SkillCategory::Status,
            "support" => SkillCategory::Support,
            "passive" => SkillCategory::Passive,
            _ => anyhow::bail!("unknown skill category '{tag}'"),
        },
    };
    Ok(category)
}

/// Resolve a status condition tag.
pub fn parse_condition(tag: &str) -> LoadResult<StatusCondition> {
    let condition = match tag.trim() {
        "烧伤" => StatusCondition::Burn,
        "冰冻" => StatusCondition::Freeze,
        "麻痹" => StatusCondition::Paralyze,
        "中毒" => StatusCondition::Poison,
        "失明" => StatusCondition::Blind,
        "混乱" => StatusCondition::Confusion,
        "寄生" => StatusCondition::Parasitic,
        "眩晕" => StatusCondition::Stun,
        other => match other.to_ascii_lowercase().as_str() {
            "burn" => StatusCondition::Burn,
            "freeze" => StatusCondition::Freeze,
            "paralyze" => StatusCondition::Paralyze,
            "poison" => StatusCondition::Poison,
            "blind" => StatusCondition::Blind,
            "confusion" => StatusCondition::Confusion,
            "parasitic" => StatusCondition::Parasitic,
            "stun" => StatusCondition::Stun,
            _ => anyhow::bail!("unknown status condition '{tag}'"),
        },
    };
    Ok(condition)
}

/// Resolve a stat tag.
pub fn parse_stat(tag: &str) -> LoadResult<StatKind> {
    let stat = match tag.trim() {
        "攻击" => StatKind::Attack,
        "特攻" => StatKind::MagicAttack,
        "防御" => StatKind::Defense,
        "特防" => StatKind::MagicDefense,
        "速度" => StatKind::Speed,
        "暴击" => StatKind::Critical,
        other => match other.to_ascii_lowercase().as_str() {
            "attack" => StatKind::Attack,
            "magicattack" | "magic_attack" => StatKind::MagicAttack,
            "defense" => StatKind::Defense,
            "magicdefense" | "magic_defense" => StatKind::MagicDefense,
            "speed" => StatKind::Speed,
            "critical" => StatKind::Critical,
            _ => anyhow::bail!("unknown stat tag '{tag}'"),
        },
    };
    Ok(stat)
}
