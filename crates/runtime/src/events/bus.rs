//! Topic-based event bus implementation.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use battle_core::BattleEvent;

/// Topics for event routing.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Battle flow: start/end, turns, skill use and outcomes.
    Battle,
    /// Combatant state: HP, death, stat levels, heals.
    Combatant,
    /// Status-effect lifecycle and ticks.
    Status,
}

impl Topic {
    /// Route an event to its topic.
    pub fn of(event: &BattleEvent) -> Topic {
        match event {
            BattleEvent::BattleStarted
            | BattleEvent::BattleEnded { .. }
            | BattleEvent::TurnStarted { .. }
            | BattleEvent::SkillUsed { .. }
            | BattleEvent::Missed { .. }
            | BattleEvent::DamageDealt { .. }
            | BattleEvent::SelfAttack { .. } => Topic::Battle,

            BattleEvent::HpChanged { .. }
            | BattleEvent::Died { .. }
            | BattleEvent::StatChanged { .. }
            | BattleEvent::HealReceived { .. } => Topic::Combatant,

            BattleEvent::StatusApplied { .. }
            | BattleEvent::StatusUpdated { .. }
            | BattleEvent::StatusRemoved { .. }
            | BattleEvent::ActionPrevented { .. }
            | BattleEvent::StatusDamageTick { .. } => Topic::Status,
        }
    }

    const ALL: [Topic; 3] = [Topic::Battle, Topic::Combatant, Topic::Status];
}

/// Topic-based event bus.
///
/// Consumers subscribe to the topics they care about and only receive
/// those events. Publishing is best-effort: with no subscribers on a
/// topic the event is simply dropped.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<BattleEvent>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic.
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with the given capacity per topic.
    pub fn with_capacity(capacity: usize) -> Self {
        let channels = Topic::ALL
            .into_iter()
            .map(|topic| (topic, broadcast::channel(capacity).0))
            .collect();
        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish an event to its corresponding topic.
    pub fn publish(&self, event: BattleEvent) {
        let topic = Topic::of(&event);
        // Channels for every topic are created up front, so the lookup
        // cannot fail; a send error just means nobody is listening.
        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            tracing::trace!(?topic, "no subscribers for topic");
        }
    }

    /// Subscribe to a specific topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<BattleEvent> {
        self.channels
            .get(&topic)
            .expect("topic channels are created at construction")
            .subscribe()
    }

    /// Subscribe to multiple topics at once.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<BattleEvent>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
