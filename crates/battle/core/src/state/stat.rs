//! Stat kinds, bounded stat levels, and skill-carried stat modifiers.

use strum::{Display, EnumIter};

use crate::config::BattleConfig;

/// The six modifiable stats.
///
/// `Critical` has no base value; its level feeds the crit-chance roll
/// directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatKind {
    Attack,
    MagicAttack,
    Defense,
    MagicDefense,
    Speed,
    Critical,
}

/// Six independent stat levels, each clamped to
/// [[`BattleConfig::MIN_STAT_LEVEL`], [`BattleConfig::MAX_STAT_LEVEL`]].
///
/// A level scales its base stat by 10% per step; see
/// [`Combatant::effective_attack`](super::Combatant::effective_attack).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatLevels {
    pub attack: i32,
    pub magic_attack: i32,
    pub defense: i32,
    pub magic_defense: i32,
    pub speed: i32,
    pub critical: i32,
}

impl StatLevels {
    pub fn get(&self, kind: StatKind) -> i32 {
        match kind {
            StatKind::Attack => self.attack,
            StatKind::MagicAttack => self.magic_attack,
            StatKind::Defense => self.defense,
            StatKind::MagicDefense => self.magic_defense,
            StatKind::Speed => self.speed,
            StatKind::Critical => self.critical,
        }
    }

    /// Adds `delta` to a stat level. The incoming delta is itself clamped
    /// to the level range before addition, and the result is re-clamped.
    pub fn modify(&mut self, kind: StatKind, delta: i32) {
        let delta = delta.clamp(BattleConfig::MIN_STAT_LEVEL, BattleConfig::MAX_STAT_LEVEL);
        let slot = match kind {
            StatKind::Attack => &mut self.attack,
            StatKind::MagicAttack => &mut self.magic_attack,
            StatKind::Defense => &mut self.defense,
            StatKind::MagicDefense => &mut self.magic_defense,
            StatKind::Speed => &mut self.speed,
            StatKind::Critical => &mut self.critical,
        };
        *slot = (*slot + delta).clamp(BattleConfig::MIN_STAT_LEVEL, BattleConfig::MAX_STAT_LEVEL);
    }

    /// Resets every level to zero (battle reset).
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A stat change carried by a skill: kind, signed step delta, and whether
/// the original data marked it as percentage-based. The flag is carried
/// through for display; level arithmetic is identical either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatModifier {
    pub stat: StatKind,
    pub delta: i32,
    pub percentage: bool,
}

impl StatModifier {
    pub fn new(stat: StatKind, delta: i32) -> Self {
        Self {
            stat,
            delta,
            percentage: false,
        }
    }
}
