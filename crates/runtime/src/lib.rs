//! Async battle session driver.
//!
//! The runtime owns a [`battle_core::BattleSession`] inside a background
//! worker, wires up command/event channels, and exposes a builder-based
//! API for clients to drive the battle. Presentation pacing (the pause
//! before the enemy acts, the pause before a turn formally ends) lives
//! here as cancellable scheduled continuations; the core stays pure.
//!
//! Clients interact through a cloneable [`SessionHandle`] and consume
//! state through the topic-based event bus, never by mutating battle
//! state directly.

mod error;
mod handle;
mod rng;
mod runtime;
mod worker;

pub mod events;

pub use error::{Result, RuntimeError};
pub use handle::{BattleSnapshot, SessionHandle};
pub use events::{EventBus, Topic};
pub use rng::SessionRng;
pub use runtime::{BattleRuntime, RuntimeBuilder, RuntimeConfig};
