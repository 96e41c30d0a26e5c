//! Injected collaborators for everything non-deterministic.
//!
//! The session itself holds no randomness and no rule tables beyond the
//! static ones; RNG and the passive-skill hook are supplied per call via
//! [`BattleEnv`] so deterministic tests and replays stay trivial.
mod passive;
pub(crate) mod rng;

pub use passive::{LowHpFrenzy, NoPassive, PassiveRule};
pub use rng::RngOracle;

/// Bundles the injected collaborators required by the resolution pipeline.
pub struct BattleEnv<'a> {
    pub rng: &'a mut dyn RngOracle,
    pub passive: &'a dyn PassiveRule,
}

impl<'a> BattleEnv<'a> {
    pub fn new(rng: &'a mut dyn RngOracle, passive: &'a dyn PassiveRule) -> Self {
        Self { rng, passive }
    }

    /// Env without any passive rules; damage gets no passive bonus.
    pub fn without_passives(rng: &'a mut dyn RngOracle) -> Self {
        Self {
            rng,
            passive: &NoPassive,
        }
    }
}
