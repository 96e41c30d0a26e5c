//! Background worker owning the battle session.
//!
//! The worker is the single mutator of battle state. Clients talk to it
//! over the command channel; pacing delays are tokio sleeps in a spawned
//! continuation task whose handle the worker keeps, so a reset or battle
//! end can abort a scheduled enemy action before it fires against stale
//! state.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use battle_core::{
    ActionError, BattleEnv, BattleSession, CombatantId, EnemyTurnResult, PassiveRule, TurnOutcome,
};

use crate::events::EventBus;
use crate::handle::BattleSnapshot;
use crate::rng::SessionRng;

/// Commands processed by the session worker.
///
/// `EndTurn` and `EnemyAct` are internal: the worker schedules them to
/// itself after the configured pacing delays.
pub(crate) enum Command {
    UseSkill {
        index: usize,
        reply: oneshot::Sender<Result<(), ActionError>>,
    },
    Reset {
        reply: oneshot::Sender<()>,
    },
    Query {
        reply: oneshot::Sender<BattleSnapshot>,
    },
    EndTurn {
        actor: CombatantId,
    },
    EnemyAct,
    Shutdown,
}

pub(crate) struct SessionWorker {
    session: BattleSession,
    rng: SessionRng,
    passive: Box<dyn PassiveRule + Send>,
    bus: EventBus,
    command_rx: mpsc::Receiver<Command>,
    self_tx: mpsc::Sender<Command>,
    /// The one pending scheduled continuation, if any.
    pending: Option<JoinHandle<()>>,
}

impl SessionWorker {
    pub(crate) fn new(
        session: BattleSession,
        rng: SessionRng,
        passive: Box<dyn PassiveRule + Send>,
        bus: EventBus,
        command_rx: mpsc::Receiver<Command>,
        self_tx: mpsc::Sender<Command>,
    ) -> Self {
        Self {
            session,
            rng,
            passive,
            bus,
            command_rx,
            self_tx,
            pending: None,
        }
    }

    pub(crate) async fn run(mut self) {
        self.session.initialize_battle();
        self.publish_events();

        while let Some(command) = self.command_rx.recv().await {
            match command {
                Command::UseSkill { index, reply } => {
                    let mut env = BattleEnv::new(&mut self.rng, self.passive.as_ref());
                    let result = self.session.player_use_skill(index, &mut env);
                    self.publish_events();

                    if result.is_ok() {
                        let delay = self.session.config().turn_end_delay_ms;
                        self.schedule(
                            Command::EndTurn {
                                actor: CombatantId::Player,
                            },
                            delay,
                        );
                    }
                    let _ = reply.send(result);
                }

                Command::EndTurn { actor } => {
                    let outcome = self.session.end_turn(actor);
                    self.publish_events();
                    self.handle_outcome(outcome);
                }

                Command::EnemyAct => {
                    let mut env = BattleEnv::new(&mut self.rng, self.passive.as_ref());
                    let result = self.session.enemy_act(&mut env);
                    self.publish_events();

                    match result {
                        EnemyTurnResult::Acted => {
                            let delay = self.session.config().turn_end_delay_ms;
                            self.schedule(
                                Command::EndTurn {
                                    actor: CombatantId::Enemy,
                                },
                                delay,
                            );
                        }
                        EnemyTurnResult::Ended(outcome) => self.handle_outcome(outcome),
                        EnemyTurnResult::Cancelled => {}
                    }
                }

                Command::Reset { reply } => {
                    self.cancel_pending();
                    self.session.reset_battle();
                    self.publish_events();
                    let _ = reply.send(());
                }

                Command::Query { reply } => {
                    let _ = reply.send(BattleSnapshot::of(&self.session));
                }

                Command::Shutdown => {
                    tracing::debug!("session worker shutting down");
                    break;
                }
            }
        }

        self.cancel_pending();
    }

    fn handle_outcome(&mut self, outcome: TurnOutcome) {
        match outcome {
            TurnOutcome::EnemyNext => {
                let delay = self.session.config().enemy_turn_delay_ms;
                self.schedule(Command::EnemyAct, delay);
            }
            // The session already moved to the player's turn; input is
            // accepted again on the next UseSkill command.
            TurnOutcome::PlayerNext => {}
            TurnOutcome::Finished => self.cancel_pending(),
        }
    }

    /// Schedule a command to self after a pacing delay, replacing (and
    /// cancelling) whatever was pending.
    fn schedule(&mut self, command: Command, delay_ms: u64) {
        self.cancel_pending();

        let tx = self.self_tx.clone();
        self.pending = Some(tokio::spawn(async move {
            if delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
            if tx.send(command).await.is_err() {
                tracing::debug!("scheduled command dropped: worker gone");
            }
        }));
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    fn publish_events(&mut self) {
        for event in self.session.drain_events() {
            self.bus.publish(event);
        }
    }
}
