//! Hit and accuracy checks.

use crate::env::RngOracle;

/// Check whether a skill connects.
///
/// An accuracy of 0 (or below) means the skill always hits at a neutral
/// accuracy multiplier. The attacker's status accuracy multiplier (Blind
/// halves it) scales the effective rate, and the hit lands when a uniform
/// draw in `[0, 100)` is at most that rate.
pub fn check_hit(accuracy: i32, accuracy_multiplier: f32, rng: &mut dyn RngOracle) -> bool {
    let base_rate = if accuracy <= 0 { 100.0 } else { accuracy as f32 };
    let effective_rate = base_rate * accuracy_multiplier;

    rng.roll_percent() as f32 <= effective_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::rng::testing::{ScriptedRng, XorShiftRng};

    #[test]
    fn zero_accuracy_always_hits_at_neutral_multiplier() {
        let mut rng = XorShiftRng::seeded(7);
        for _ in 0..1_000 {
            assert!(check_hit(0, 1.0, &mut rng));
        }
    }

    #[test]
    fn full_accuracy_always_hits_at_neutral_multiplier() {
        let mut rng = XorShiftRng::seeded(11);
        for _ in 0..1_000 {
            assert!(check_hit(100, 1.0, &mut rng));
        }
    }

    #[test]
    fn blind_halves_the_effective_rate() {
        // roll_percent derives from next_f32 × 100: 0.49 → 49, 0.51 → 51.
        let mut low = ScriptedRng::constant(0.49);
        assert!(check_hit(100, 0.5, &mut low));

        let mut high = ScriptedRng::constant(0.51);
        assert!(!check_hit(100, 0.5, &mut high));
    }

    #[test]
    fn blinded_zero_accuracy_can_miss() {
        // "Always hits" is only unconditional at multiplier 1.0; Blind
        // scales the 100 base down like any other rate.
        let mut high = ScriptedRng::constant(0.75);
        assert!(!check_hit(0, 0.5, &mut high));
    }
}
