//! Topic-based event publishing toward UI collaborators.

mod bus;

pub use bus::{EventBus, Topic};
