//! Cloneable façade for issuing commands to the runtime.
//!
//! [`SessionHandle`] hides the channel plumbing and offers async helpers
//! for driving the battle or streaming events from specific topics.

use tokio::sync::{broadcast, mpsc, oneshot};

use battle_core::{BattleEvent, BattlePhase, BattleSession, Combatant, CombatantId, StatusEffect};

use crate::error::{Result, RuntimeError};
use crate::events::{EventBus, Topic};
use crate::worker::Command;

/// Read-only view of the battle, answered by the worker.
#[derive(Clone, Debug)]
pub struct BattleSnapshot {
    pub phase: BattlePhase,
    pub player: Combatant,
    pub enemy: Combatant,
    pub player_statuses: Vec<StatusEffect>,
    pub enemy_statuses: Vec<StatusEffect>,
}

impl BattleSnapshot {
    pub(crate) fn of(session: &BattleSession) -> Self {
        Self {
            phase: session.phase(),
            player: session.player().clone(),
            enemy: session.enemy().clone(),
            player_statuses: session.statuses().effects(CombatantId::Player).to_vec(),
            enemy_statuses: session.statuses().effects(CombatantId::Enemy).to_vec(),
        }
    }

    pub fn combatant(&self, id: CombatantId) -> &Combatant {
        match id {
            CombatantId::Player => &self.player,
            CombatantId::Enemy => &self.enemy,
        }
    }
}

/// Client-facing handle to interact with the runtime.
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl SessionHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Player picks a skill by loadout index.
    ///
    /// Rejections ([`RuntimeError::ActionRejected`]) leave the battle
    /// untouched; callers may retry with different input.
    pub async fn use_skill(&self, index: usize) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::UseSkill {
                index,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await?.map_err(RuntimeError::from)
    }

    /// Reset the battle, discarding any pending scheduled enemy action.
    pub async fn reset(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Reset { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::from)
    }

    /// Query a read-only snapshot of the battle state.
    pub async fn snapshot(&self) -> Result<BattleSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Query { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::from)
    }

    /// Subscribe to events from a specific topic.
    ///
    /// # Topics
    ///
    /// - [`Topic::Battle`]: flow, turns, skill outcomes
    /// - [`Topic::Combatant`]: HP, death, stats, heals
    /// - [`Topic::Status`]: status-effect lifecycle and ticks
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<BattleEvent> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage.
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub(crate) async fn send_shutdown(&self) -> Result<()> {
        self.command_tx
            .send(Command::Shutdown)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}
