//! Runtime error types.

use battle_core::ActionError;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Errors surfaced by the session runtime.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// The worker is gone; the runtime was shut down or panicked.
    #[error("command channel closed")]
    CommandChannelClosed,

    /// The worker dropped a reply before answering.
    #[error("reply channel closed: {0}")]
    ReplyChannelClosed(#[from] oneshot::error::RecvError),

    /// The battle session rejected the action; state is unchanged.
    #[error("action rejected: {0}")]
    ActionRejected(#[from] ActionError),

    /// Builder was asked to spawn without both combatants.
    #[error("runtime requires both a player and an enemy combatant")]
    MissingCombatants,
}
