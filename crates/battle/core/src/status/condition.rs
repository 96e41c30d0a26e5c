//! Status conditions and their static configuration.

use strum::{Display, EnumIter};

/// The closed set of afflictions a combatant can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusCondition {
    /// Damage over time; reduces the victim's attack by 10%.
    Burn,
    /// Blocks every action attempt.
    Freeze,
    /// Blocks each action attempt with 25% probability.
    Paralyze,
    /// Damage over time; halves healing received by the victim.
    Poison,
    /// Halves the victim's accuracy.
    Blind,
    /// 40% chance per attack to strike the victim itself instead.
    Confusion,
    /// Stackable damage over time that feeds the caster.
    Parasitic,
    /// Blocks every action attempt.
    Stun,
}

impl StatusCondition {
    /// Chance that paralysis blocks a single action attempt.
    pub const PARALYZE_BLOCK_CHANCE: f32 = 0.25;
    /// Chance that confusion redirects a single attack at its user.
    pub const CONFUSION_SELF_ATTACK_CHANCE: f32 = 0.4;

    /// Default duration in turns when a skill does not override it.
    pub fn default_duration(self) -> i32 {
        match self {
            StatusCondition::Burn => 4,
            StatusCondition::Freeze => 3,
            StatusCondition::Paralyze => 4,
            StatusCondition::Poison => 5,
            StatusCondition::Blind => 3,
            StatusCondition::Confusion => 3,
            StatusCondition::Parasitic => 5,
            StatusCondition::Stun => 2,
        }
    }

    /// Whether multiple instances of this condition may stack.
    pub fn is_stackable(self) -> bool {
        self == StatusCondition::Parasitic
    }

    /// Whether two conditions may be active on one combatant at once.
    ///
    /// Any two different conditions coexist; the same condition only
    /// coexists with itself when stackable.
    pub fn can_coexist(self, other: StatusCondition) -> bool {
        if self != other {
            return true;
        }
        self.is_stackable()
    }

    /// Whether the condition deals damage at the end of each turn.
    pub fn is_damage_over_time(self) -> bool {
        matches!(
            self,
            StatusCondition::Burn | StatusCondition::Poison | StatusCondition::Parasitic
        )
    }

    /// Default fraction of max HP dealt per turn by DOT conditions.
    pub fn default_damage_rate(self) -> f32 {
        match self {
            StatusCondition::Burn => 0.1,
            StatusCondition::Poison => 0.1,
            StatusCondition::Parasitic => 0.08,
            _ => 0.0,
        }
    }

    /// Accuracy multiplier imposed on the afflicted combatant.
    pub fn accuracy_multiplier(self) -> f32 {
        match self {
            StatusCondition::Blind => 0.5,
            _ => 1.0,
        }
    }

    /// Attack multiplier imposed on the afflicted combatant.
    pub fn attack_multiplier(self) -> f32 {
        match self {
            StatusCondition::Burn => 0.9,
            _ => 1.0,
        }
    }

    /// Multiplier on healing received by the afflicted combatant.
    pub fn heal_multiplier(self) -> f32 {
        match self {
            StatusCondition::Poison => 0.5,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn only_parasitic_stacks() {
        for condition in StatusCondition::iter() {
            assert_eq!(
                condition.is_stackable(),
                condition == StatusCondition::Parasitic
            );
        }
    }

    #[test]
    fn different_conditions_always_coexist() {
        for a in StatusCondition::iter() {
            for b in StatusCondition::iter() {
                if a != b {
                    assert!(a.can_coexist(b), "{a} should coexist with {b}");
                }
            }
            assert_eq!(a.can_coexist(a), a.is_stackable());
        }
    }

    #[test]
    fn dot_conditions_carry_a_rate() {
        for condition in StatusCondition::iter() {
            assert_eq!(
                condition.is_damage_over_time(),
                condition.default_damage_rate() > 0.0
            );
        }
    }
}
