//! Battle session: the turn state machine as a pure reducer.
//!
//! The session owns both combatants and the status engine and is the only
//! mutator of battle state. It has no notion of time; the runtime calls
//! [`BattleSession::end_turn`] and [`BattleSession::enemy_act`] after its
//! presentation delays and acts on the returned directives. Resetting the
//! battle is therefore race-free as long as the caller cancels any
//! pending scheduled call, which the runtime does.

use crate::config::BattleConfig;
use crate::env::BattleEnv;
use crate::error::ActionError;
use crate::event::{BattleEvent, EventLog};
use crate::resolve::resolve_skill;
use crate::state::{Combatant, CombatantId};
use crate::status::StatusEngine;

/// Where the battle currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    /// Before the first initialization and after teardown.
    #[default]
    Inactive,
    /// Waiting for player input.
    PlayerTurn,
    /// A skill is resolving; player input is rejected.
    ExecutingSkill,
    /// Waiting for the scheduled enemy action.
    EnemyTurn,
    /// Terminal. Only a reset leaves this state.
    BattleOver,
}

impl BattlePhase {
    /// Whether a battle is running (input may still be rejected by turn).
    pub fn is_active(self) -> bool {
        !matches!(self, BattlePhase::Inactive | BattlePhase::BattleOver)
    }
}

/// Directive returned from [`BattleSession::end_turn`] telling the driver
/// what to schedule next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Control returns to the player; re-enable input.
    PlayerNext,
    /// Schedule the enemy action after the configured delay.
    EnemyNext,
    /// The battle ended (or was never active); schedule nothing.
    Finished,
}

/// Result of driving the scheduled enemy action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyTurnResult {
    /// The enemy resolved a skill; call `end_turn(Enemy)` after pacing.
    Acted,
    /// The turn already ended inline (blocked, confusion self-hit, or an
    /// empty loadout); act on the directive immediately.
    Ended(TurnOutcome),
    /// The action fired against a stale state (reset/battle end won the
    /// race); do nothing.
    Cancelled,
}

/// One battle between the player's pet and an enemy pet.
pub struct BattleSession {
    config: BattleConfig,
    player: Combatant,
    enemy: Combatant,
    statuses: StatusEngine,
    phase: BattlePhase,
    events: EventLog,
}

impl BattleSession {
    /// Creates a session around two combatants. Sides are assigned here;
    /// whatever ids the combatants carried before are overwritten.
    pub fn new(mut player: Combatant, mut enemy: Combatant, config: BattleConfig) -> Self {
        player.id = CombatantId::Player;
        enemy.id = CombatantId::Enemy;
        Self {
            config,
            player,
            enemy,
            statuses: StatusEngine::new(),
            phase: BattlePhase::Inactive,
            events: EventLog::new(),
        }
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    pub fn combatant(&self, id: CombatantId) -> &Combatant {
        match id {
            CombatantId::Player => &self.player,
            CombatantId::Enemy => &self.enemy,
        }
    }

    pub fn statuses(&self) -> &StatusEngine {
        &self.statuses
    }

    /// Removes and returns every event emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        self.events.drain()
    }

    /// Resets both combatants and all status state, then hands the first
    /// turn to the player.
    pub fn initialize_battle(&mut self) {
        self.player.reset_for_battle(&mut self.events);
        self.enemy.reset_for_battle(&mut self.events);
        self.statuses.clear_all(CombatantId::Player, &mut self.events);
        self.statuses.clear_all(CombatantId::Enemy, &mut self.events);

        self.phase = BattlePhase::PlayerTurn;
        self.events.push(BattleEvent::BattleStarted);
        self.events.push(BattleEvent::TurnStarted {
            actor: CombatantId::Player,
        });

        tracing::info!(player = %self.player.name, enemy = %self.enemy.name, "battle initialized");
    }

    /// Re-initializes mid-battle. The caller must cancel any pending
    /// scheduled continuation first.
    pub fn reset_battle(&mut self) {
        tracing::info!("battle reset");
        self.initialize_battle();
    }

    /// Player picks a skill by loadout index.
    ///
    /// Every failure leaves all state untouched and is safe to ignore;
    /// on success PP is spent before anything resolves, the phase moves
    /// to [`BattlePhase::ExecutingSkill`], and the full effect pipeline
    /// runs. The caller schedules `end_turn(Player)` afterwards.
    pub fn player_use_skill(
        &mut self,
        index: usize,
        env: &mut BattleEnv<'_>,
    ) -> Result<(), ActionError> {
        self.validate_player_skill(index, env)
            .inspect_err(|error| tracing::warn!(%error, index, "skill use rejected"))?;

        let skill = {
            let instance = &mut self.player.skills[index];
            instance.current_pp -= 1;
            instance.def.clone()
        };

        self.phase = BattlePhase::ExecutingSkill;
        self.events.push(BattleEvent::SkillUsed {
            actor: CombatantId::Player,
            skill: skill.name.clone(),
        });

        resolve_skill(
            &mut self.player,
            &mut self.enemy,
            &skill,
            &mut self.statuses,
            env,
            &mut self.events,
        );
        Ok(())
    }

    fn validate_player_skill(
        &self,
        index: usize,
        env: &mut BattleEnv<'_>,
    ) -> Result<(), ActionError> {
        if !self.phase.is_active() {
            return Err(ActionError::BattleInactive);
        }
        if self.phase != BattlePhase::PlayerTurn {
            return Err(ActionError::NotPlayerTurn);
        }
        if self.player.is_dead() {
            return Err(ActionError::CombatantDefeated);
        }
        if !self.statuses.can_act(CombatantId::Player, env.rng) {
            return Err(ActionError::UnableToAct);
        }

        let count = self.player.skills.len();
        if index >= count {
            return Err(ActionError::SkillIndexOutOfRange { index, count });
        }
        if !self.player.skills[index].has_pp() {
            return Err(ActionError::OutOfPp {
                name: self.player.skills[index].def.name.clone(),
            });
        }
        Ok(())
    }

    /// Ends `actor`'s turn: run the status sweep (DOT, expiry), check for
    /// a battle end, and report who moves next.
    pub fn end_turn(&mut self, actor: CombatantId) -> TurnOutcome {
        if !self.phase.is_active() {
            tracing::debug!("end_turn ignored: battle not active");
            return TurnOutcome::Finished;
        }

        let (acting, other) = match actor {
            CombatantId::Player => (&mut self.player, &mut self.enemy),
            CombatantId::Enemy => (&mut self.enemy, &mut self.player),
        };
        self.statuses.process_turn_end(acting, other, &mut self.events);

        if self.player.is_dead() || self.enemy.is_dead() {
            return self.end_battle();
        }

        match actor {
            CombatantId::Player => {
                self.phase = BattlePhase::EnemyTurn;
                self.events.push(BattleEvent::TurnStarted {
                    actor: CombatantId::Enemy,
                });
                TurnOutcome::EnemyNext
            }
            CombatantId::Enemy => {
                self.phase = BattlePhase::PlayerTurn;
                self.events.push(BattleEvent::TurnStarted {
                    actor: CombatantId::Player,
                });
                TurnOutcome::PlayerNext
            }
        }
    }

    fn end_battle(&mut self) -> TurnOutcome {
        let winner = match (self.player.is_dead(), self.enemy.is_dead()) {
            (true, true) => None,
            (true, false) => Some(CombatantId::Enemy),
            (false, true) => Some(CombatantId::Player),
            (false, false) => unreachable!("end_battle called with both sides alive"),
        };

        self.phase = BattlePhase::BattleOver;
        self.events.push(BattleEvent::BattleEnded { winner });
        tracing::info!(?winner, "battle over");
        TurnOutcome::Finished
    }

    /// Drives the scripted enemy action.
    ///
    /// Start-of-turn statuses may block the turn outright; confusion
    /// deals a flat self-hit instead of a skill; otherwise the enemy
    /// picks uniformly among skills with PP left, falling back to the
    /// first skill regardless of PP so the state machine never stalls.
    pub fn enemy_act(&mut self, env: &mut BattleEnv<'_>) -> EnemyTurnResult {
        if !self.phase.is_active() || self.enemy.is_dead() {
            tracing::debug!("enemy action cancelled: stale schedule");
            return EnemyTurnResult::Cancelled;
        }

        if self
            .statuses
            .process_turn_start(&self.enemy, env.rng, &mut self.events)
        {
            return EnemyTurnResult::Ended(self.end_turn(CombatantId::Enemy));
        }

        if self
            .statuses
            .should_attack_self(CombatantId::Enemy, env.rng)
        {
            self.enemy
                .apply_damage(BattleConfig::CONFUSION_SELF_HIT, &mut self.events);
            self.events.push(BattleEvent::SelfAttack {
                id: CombatantId::Enemy,
                amount: BattleConfig::CONFUSION_SELF_HIT,
            });
            return EnemyTurnResult::Ended(self.end_turn(CombatantId::Enemy));
        }

        let Some(index) = self.pick_enemy_skill(env) else {
            tracing::warn!("enemy has no skills; ending turn without acting");
            return EnemyTurnResult::Ended(self.end_turn(CombatantId::Enemy));
        };

        let skill = {
            let instance = &mut self.enemy.skills[index];
            instance.current_pp = instance.current_pp.saturating_sub(1);
            instance.def.clone()
        };

        self.phase = BattlePhase::ExecutingSkill;
        self.events.push(BattleEvent::SkillUsed {
            actor: CombatantId::Enemy,
            skill: skill.name.clone(),
        });

        resolve_skill(
            &mut self.enemy,
            &mut self.player,
            &skill,
            &mut self.statuses,
            env,
            &mut self.events,
        );
        EnemyTurnResult::Acted
    }

    /// Uniform choice among PP-positive skills; first skill as the
    /// no-PP fallback.
    fn pick_enemy_skill(&mut self, env: &mut BattleEnv<'_>) -> Option<usize> {
        if self.enemy.skills.is_empty() {
            return None;
        }

        let usable: Vec<usize> = self
            .enemy
            .skills
            .iter()
            .enumerate()
            .filter(|(_, s)| s.has_pp())
            .map(|(i, _)| i)
            .collect();

        if usable.is_empty() {
            tracing::warn!("enemy out of PP on every skill, falling back to the first");
            return Some(0);
        }

        Some(usable[env.rng.pick_index(usable.len())])
    }
}
