//! Deterministic battle rules and data types shared across clients.
//!
//! `battle-core` defines the canonical rules (combatants, skills, status
//! effects, the damage formula, and the turn state machine) and exposes pure
//! APIs that can be reused by both the runtime and offline tools. All state
//! mutation flows through [`session::BattleSession`], and supporting crates
//! depend on the types re-exported here.
//!
//! Everything non-deterministic (crit rolls, hit checks, status chances,
//! damage variance, enemy skill choice) goes through the injected
//! [`env::RngOracle`], so a seeded generator reproduces a battle exactly.
pub mod combat;
pub mod config;
pub mod element;
pub mod env;
pub mod error;
pub mod event;
pub mod resolve;
pub mod session;
pub mod state;
pub mod status;

pub use combat::{DamageOutcome, check_hit, compute_damage};
pub use config::BattleConfig;
pub use element::{Element, ElementEffect, EffectLabel, element_effect};
pub use env::{BattleEnv, LowHpFrenzy, NoPassive, PassiveRule, RngOracle};
pub use error::ActionError;
pub use event::{BattleEvent, EventLog};
pub use session::{BattlePhase, BattleSession, EnemyTurnResult, TurnOutcome};
pub use state::{
    BaseStats, Combatant, CombatantId, ClearStatus, SkillCategory, SkillDef, SkillEffect,
    SkillInstance, StatKind, StatLevels, StatModifier, StatusApplication,
};
pub use status::{StatusCondition, StatusEffect, StatusEngine};
