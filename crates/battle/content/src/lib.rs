//! Data-driven pet and skill definitions and loaders.
//!
//! This crate houses battle content and provides loaders for RON data
//! files:
//! - Skill definitions (element, category, power, side effects)
//! - Pet rosters (stats, loadouts, passives, immunities)
//!
//! Source data may carry string element/category/condition tags (the
//! original authoring vocabulary, Chinese labels included); everything is
//! resolved to the closed `battle-core` enums here at load time, so the
//! core never parses a string during formula evaluation.
//!
//! A small built-in demo roster ships for tests and examples.

pub mod demo;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use demo::demo_pets;

#[cfg(feature = "loaders")]
pub use loaders::{PetSpec, RosterLoader, SkillSpec, StatModifierSpec, StatusSpec};
