//! Elemental advantage chart.
//!
//! Twelve elements in two advantage tiers: an absolute cycle of eleven
//! ordered pairs worth ×2.0 ("SUPER", reversed ×0.5 "WEAK") and a normal
//! tier where each element is mildly effective against three others at
//! ×1.5 ("EFF", reversed ×1/1.5 "NVE"). Lookups check the absolute table
//! in both directions first, then the normal table in both directions,
//! and fall back to neutral.

use strum::{Display, EnumIter};

/// Elemental affinity of a combatant or skill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    /// No affinity. Neutral against everything.
    #[default]
    None,
    Fire,
    Water,
    Grass,
    Electric,
    Rock,
    Wind,
    Poison,
    Light,
    Dark,
    Holy,
    Mech,
}

/// Tier label attached to a damage computation for display purposes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectLabel {
    /// Neutral matchup (or no elements involved).
    #[default]
    Neutral,
    /// Absolute advantage, ×2.0.
    Super,
    /// On the receiving end of an absolute advantage, ×0.5.
    Weak,
    /// Normal advantage, ×1.5.
    Effective,
    /// On the receiving end of a normal advantage, ×1/1.5.
    NotVeryEffective,
    /// Fixed damage, bypasses the formula entirely.
    Fixed,
}

impl EffectLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectLabel::Neutral => "",
            EffectLabel::Super => "SUPER",
            EffectLabel::Weak => "WEAK",
            EffectLabel::Effective => "EFF",
            EffectLabel::NotVeryEffective => "NVE",
            EffectLabel::Fixed => "固定伤害",
        }
    }
}

/// Outcome of an elemental matchup lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementEffect {
    pub multiplier: f32,
    pub label: EffectLabel,
}

impl ElementEffect {
    const NEUTRAL: Self = Self {
        multiplier: 1.0,
        label: EffectLabel::Neutral,
    };
}

/// Multiplier for an absolute-advantage pairing.
pub const ABSOLUTE_MULTIPLIER: f32 = 2.0;
/// Multiplier for a normal-advantage pairing.
pub const NORMAL_MULTIPLIER: f32 = 1.5;

/// The absolute advantage cycle: (attacker, defender), ×2.0 each.
pub const ABSOLUTE_ADVANTAGES: [(Element, Element); 11] = [
    (Element::Electric, Element::Rock),
    (Element::Rock, Element::Wind),
    (Element::Wind, Element::Poison),
    (Element::Poison, Element::Water),
    (Element::Water, Element::Fire),
    (Element::Fire, Element::Grass),
    (Element::Grass, Element::Light),
    (Element::Light, Element::Dark),
    (Element::Dark, Element::Holy),
    (Element::Holy, Element::Mech),
    (Element::Mech, Element::Electric),
];

/// Normal advantages: each element is mildly effective against three others.
pub const NORMAL_ADVANTAGES: [(Element, [Element; 3]); 11] = [
    (Element::Electric, [Element::Wind, Element::Water, Element::Holy]),
    (Element::Rock, [Element::Poison, Element::Fire, Element::Light]),
    (Element::Wind, [Element::Water, Element::Light, Element::Dark]),
    (Element::Poison, [Element::Grass, Element::Dark, Element::Mech]),
    (Element::Water, [Element::Grass, Element::Holy, Element::Rock]),
    (Element::Fire, [Element::Light, Element::Poison, Element::Wind]),
    (Element::Grass, [Element::Dark, Element::Wind, Element::Rock]),
    (Element::Light, [Element::Holy, Element::Electric, Element::Water]),
    (Element::Dark, [Element::Mech, Element::Rock, Element::Fire]),
    (Element::Holy, [Element::Rock, Element::Wind, Element::Poison]),
    (Element::Mech, [Element::Rock, Element::Water, Element::Grass]),
];

/// Look up the elemental multiplier for an attack.
///
/// Check order: absolute table in both directions, then normal table in
/// both directions, then neutral. [`Element::None`] on either side
/// short-circuits to neutral.
pub fn element_effect(attacker: Element, defender: Element) -> ElementEffect {
    if attacker == Element::None || defender == Element::None {
        return ElementEffect::NEUTRAL;
    }

    for (strong, weak) in ABSOLUTE_ADVANTAGES {
        if strong == attacker && weak == defender {
            return ElementEffect {
                multiplier: ABSOLUTE_MULTIPLIER,
                label: EffectLabel::Super,
            };
        }
        if strong == defender && weak == attacker {
            return ElementEffect {
                multiplier: 1.0 / ABSOLUTE_MULTIPLIER,
                label: EffectLabel::Weak,
            };
        }
    }

    for (strong, targets) in NORMAL_ADVANTAGES {
        if strong == attacker && targets.contains(&defender) {
            return ElementEffect {
                multiplier: NORMAL_MULTIPLIER,
                label: EffectLabel::Effective,
            };
        }
        if strong == defender && targets.contains(&attacker) {
            return ElementEffect {
                multiplier: 1.0 / NORMAL_MULTIPLIER,
                label: EffectLabel::NotVeryEffective,
            };
        }
    }

    ElementEffect::NEUTRAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn absolute_pairs_are_symmetric() {
        for (strong, weak) in ABSOLUTE_ADVANTAGES {
            let forward = element_effect(strong, weak);
            assert_eq!(forward.multiplier, 2.0, "{strong} vs {weak}");
            assert_eq!(forward.label, EffectLabel::Super);

            let reverse = element_effect(weak, strong);
            assert_eq!(reverse.multiplier, 0.5, "{weak} vs {strong}");
            assert_eq!(reverse.label, EffectLabel::Weak);
        }
    }

    #[test]
    fn normal_pairs_are_symmetric() {
        for (strong, targets) in NORMAL_ADVANTAGES {
            for weak in targets {
                // The absolute table wins ties, so only check pairings that
                // are not also absolute pairings (there are none by data,
                // but keep the sweep honest).
                let forward = element_effect(strong, weak);
                assert_eq!(forward.multiplier, 1.5, "{strong} vs {weak}");
                assert_eq!(forward.label, EffectLabel::Effective);

                let reverse = element_effect(weak, strong);
                assert_eq!(reverse.multiplier, 1.0 / 1.5, "{weak} vs {strong}");
                assert_eq!(reverse.label, EffectLabel::NotVeryEffective);
            }
        }
    }

    #[test]
    fn none_short_circuits_to_neutral() {
        for element in Element::iter() {
            assert_eq!(
                element_effect(Element::None, element),
                ElementEffect::NEUTRAL
            );
            assert_eq!(
                element_effect(element, Element::None),
                ElementEffect::NEUTRAL
            );
        }
    }

    #[test]
    fn unrelated_matchup_is_neutral() {
        // Fire vs Water is covered by the absolute table (Water beats
        // Fire); Fire vs Fire is covered by neither tier.
        let effect = element_effect(Element::Fire, Element::Fire);
        assert_eq!(effect.multiplier, 1.0);
        assert_eq!(effect.label, EffectLabel::Neutral);
    }

    #[test]
    fn every_element_appears_in_the_absolute_cycle() {
        for element in Element::iter().filter(|e| *e != Element::None) {
            assert!(
                ABSOLUTE_ADVANTAGES.iter().any(|(a, _)| *a == element),
                "{element} never attacks in the absolute cycle"
            );
            assert!(
                ABSOLUTE_ADVANTAGES.iter().any(|(_, d)| *d == element),
                "{element} never defends in the absolute cycle"
            );
        }
    }
}
