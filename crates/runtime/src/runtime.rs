//! High-level runtime orchestrator.
//!
//! The runtime spawns the session worker, wires up command/event
//! channels, and exposes a builder-based API for clients to drive a
//! battle.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use battle_core::{BattleConfig, BattleSession, Combatant, LowHpFrenzy, NoPassive, PassiveRule};

use crate::error::{Result, RuntimeError};
use crate::events::EventBus;
use crate::handle::SessionHandle;
use crate::rng::SessionRng;
use crate::worker::SessionWorker;

/// Runtime configuration shared across the orchestrator and worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub battle: BattleConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that orchestrates one battle session.
///
/// Design: the runtime owns the worker task; [`SessionHandle`] provides
/// a cloneable façade for clients.
pub struct BattleRuntime {
    handle: SessionHandle,
    worker_handle: JoinHandle<()>,
}

impl BattleRuntime {
    /// Create a new runtime builder.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime.
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully.
    pub async fn shutdown(self) -> Result<()> {
        self.handle.send_shutdown().await?;
        self.worker_handle
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}

/// Builder assembling the combatants, config, RNG seed, and passive rule
/// for a battle runtime.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    player: Option<Combatant>,
    enemy: Option<Combatant>,
    seed: Option<u64>,
    passive: Option<Box<dyn PassiveRule + Send>>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            player: None,
            enemy: None,
            seed: None,
            passive: None,
        }
    }

    pub fn with_config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_battle_config(mut self, battle: BattleConfig) -> Self {
        self.config.battle = battle;
        self
    }

    pub fn with_player(mut self, player: Combatant) -> Self {
        self.player = Some(player);
        self
    }

    pub fn with_enemy(mut self, enemy: Combatant) -> Self {
        self.enemy = Some(enemy);
        self
    }

    /// Seed the session RNG for a reproducible battle.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Install a passive-skill rule consulted by the damage formula.
    pub fn with_passive_rule(mut self, rule: impl PassiveRule + Send + 'static) -> Self {
        self.passive = Some(Box::new(rule));
        self
    }

    /// The stock low-HP damage-boost passive, keyed to a skill name.
    pub fn with_low_hp_frenzy(self, skill_name: impl Into<String>) -> Self {
        self.with_passive_rule(LowHpFrenzy::for_skill(skill_name))
    }

    /// Spawn the worker and return the running runtime.
    ///
    /// The battle initializes immediately and enters the player's turn.
    pub fn spawn(self) -> Result<BattleRuntime> {
        let (Some(player), Some(enemy)) = (self.player, self.enemy) else {
            return Err(RuntimeError::MissingCombatants);
        };

        let session = BattleSession::new(player, enemy, self.config.battle);
        let rng = match self.seed {
            Some(seed) => SessionRng::seeded(seed),
            None => SessionRng::from_entropy(),
        };
        let passive = self.passive.unwrap_or_else(|| Box::new(NoPassive));

        let bus = EventBus::with_capacity(self.config.event_buffer_size);
        let (command_tx, command_rx) = mpsc::channel(self.config.command_buffer_size);

        let worker = SessionWorker::new(
            session,
            rng,
            passive,
            bus.clone(),
            command_rx,
            command_tx.clone(),
        );
        let worker_handle = tokio::spawn(worker.run());

        tracing::info!("battle runtime started");
        Ok(BattleRuntime {
            handle: SessionHandle::new(command_tx, bus),
            worker_handle,
        })
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
