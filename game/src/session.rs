//! Battle session management
//!
//! A single [`BattleSession`] value owns everything about the current
//! battle and is advanced only through the controller's transition methods:
//! lobby, matchmaking delay, step-by-step log playback, result, optional
//! on-chain recording. Randomness is injected per call so a session replays
//! identically under a fixed seed.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use gochi_battle::opponents::{generate_opponent, Opponent};
use gochi_battle::outcome::{resolve_outcome, BattleOutcome};
use gochi_battle::rng::BattleRng;
use gochi_battle::script::{script_battle, win_chance_line, BattleLogStep};

use crate::chain::{BattleRecord, ChainClient, TxHandle};
use crate::error::{GameError, GameResult};
use crate::sched::{Scheduler, TaskKind, Tick};

/// Ticks spent in matchmaking before an opponent is revealed
pub const MATCHMAKING_DELAY_TICKS: Tick = 2;
/// Ticks between played log steps
pub const LOG_STEP_DELAY_TICKS: Tick = 1;
/// Ticks between the last played step and the result reveal
pub const RESULT_REVEAL_DELAY_TICKS: Tick = 1;

/// Phase of the current battle session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Lobby,
    Searching,
    InBattle,
    Result,
}

impl SessionState {
    pub fn tag(&self) -> &'static str {
        match self {
            SessionState::Lobby => "lobby",
            SessionState::Searching => "searching",
            SessionState::InBattle => "battle",
            SessionState::Result => "result",
        }
    }
}

/// The single mutable record for the battle in progress
#[derive(Debug)]
pub struct BattleSession {
    pub state: SessionState,
    pub opponent: Option<Opponent>,
    pub outcome: Option<BattleOutcome>,
    pub player_health: u8,
    pub opponent_health: u8,
    pub log: Vec<String>,
    script: Vec<BattleLogStep>,
    next_step: usize,
    pending_tx: Option<TxHandle>,
    recorded: bool,
}

impl BattleSession {
    fn new() -> Self {
        Self {
            state: SessionState::Lobby,
            opponent: None,
            outcome: None,
            player_health: 100,
            opponent_health: 100,
            log: Vec::new(),
            script: Vec::new(),
            next_step: 0,
            pending_tx: None,
            recorded: false,
        }
    }

    /// Whether the record action should currently be offered
    pub fn can_record(&self) -> bool {
        self.state == SessionState::Result && !self.recorded && self.pending_tx.is_none()
    }

    pub fn pending_tx(&self) -> Option<TxHandle> {
        self.pending_tx
    }

    pub fn recorded(&self) -> bool {
        self.recorded
    }
}

/// Sequences a battle from matchmaking through result and recording
#[derive(Debug)]
pub struct BattleController {
    session: BattleSession,
    sched: Scheduler,
    generation: u32,
    player_level: u32,
    needs_leaderboard_refresh: bool,
}

impl BattleController {
    pub fn new() -> Self {
        Self {
            session: BattleSession::new(),
            sched: Scheduler::default(),
            generation: 0,
            player_level: 1,
            needs_leaderboard_refresh: false,
        }
    }

    pub fn session(&self) -> &BattleSession {
        &self.session
    }

    pub fn player_level(&self) -> u32 {
        self.player_level
    }

    /// Enter matchmaking from the lobby
    pub fn start_battle(
        &mut self,
        player_level: u32,
        rng: &mut impl BattleRng,
    ) -> GameResult<()> {
        if self.session.state != SessionState::Lobby {
            return Err(GameError::WrongPhase);
        }

        self.player_level = player_level.max(1);
        self.session = BattleSession::new();
        self.session.state = SessionState::Searching;
        self.session.opponent = Some(generate_opponent(self.player_level, rng));
        self.sched
            .schedule_in(MATCHMAKING_DELAY_TICKS, self.generation, TaskKind::MatchFound);
        log::info!("matchmaking started at level {}", self.player_level);
        Ok(())
    }

    /// Advance the session clock by one tick and run whatever comes due
    pub fn tick(&mut self, rng: &mut impl BattleRng) {
        self.sched.advance();
        for task in self.sched.take_due(self.generation) {
            match task {
                TaskKind::MatchFound => self.on_match_found(rng),
                TaskKind::PlayLogStep => self.on_play_log_step(),
                TaskKind::RevealResult => self.on_reveal_result(),
            }
        }
    }

    fn on_match_found(&mut self, rng: &mut impl BattleRng) {
        if self.session.state != SessionState::Searching {
            return;
        }
        let Some(opponent) = &self.session.opponent else {
            return;
        };

        let outcome = resolve_outcome(self.player_level, opponent.level, rng);
        self.session.script = script_battle(&outcome);
        self.session.log.push(win_chance_line(
            outcome.win_chance,
            self.player_level,
            opponent.level,
        ));
        self.session.outcome = Some(outcome);
        self.session.next_step = 0;
        self.session.state = SessionState::InBattle;
        self.sched
            .schedule_in(LOG_STEP_DELAY_TICKS, self.generation, TaskKind::PlayLogStep);
        log::info!("battle started: {:?}", outcome);
    }

    fn on_play_log_step(&mut self) {
        if self.session.state != SessionState::InBattle {
            return;
        }
        let Some(step) = self.session.script.get(self.session.next_step) else {
            return;
        };

        self.session.log.push(step.message.clone());
        self.session.player_health = self.session.player_health.saturating_sub(step.player_damage);
        self.session.opponent_health = self
            .session
            .opponent_health
            .saturating_sub(step.opponent_damage);
        self.session.next_step += 1;

        let knocked_out =
            self.session.player_health == 0 || self.session.opponent_health == 0;
        if knocked_out || self.session.next_step == self.session.script.len() {
            // Playback may truncate; the engine's result is authoritative
            if let Some(outcome) = &self.session.outcome {
                self.session.player_health = outcome.player_health;
                self.session.opponent_health = outcome.opponent_health;
            }
            self.sched.schedule_in(
                RESULT_REVEAL_DELAY_TICKS,
                self.generation,
                TaskKind::RevealResult,
            );
        } else {
            self.sched
                .schedule_in(LOG_STEP_DELAY_TICKS, self.generation, TaskKind::PlayLogStep);
        }
    }

    fn on_reveal_result(&mut self) {
        if self.session.state != SessionState::InBattle {
            return;
        }
        let Some(outcome) = &self.session.outcome else {
            return;
        };

        if outcome.player_wins {
            self.session.log.push(String::from("Victory! 🎉"));
            self.session.log.push(String::from("You earned +1 Win!"));
        } else {
            self.session.log.push(String::from("Defeat! 💔"));
            self.session
                .log
                .push(String::from("Better luck next time!"));
        }
        self.session.state = SessionState::Result;
    }

    /// Submit the finished battle to the chain collaborator
    ///
    /// Fails closed when no wallet is connected: a log line is emitted and
    /// the session stays in `Result` with the action still on offer. A
    /// rejected write behaves the same way; the outcome is never recomputed.
    pub fn record_on_chain(&mut self, chain: &mut dyn ChainClient) -> GameResult<TxHandle> {
        if self.session.state != SessionState::Result {
            return Err(GameError::WrongPhase);
        }
        let (outcome, opponent_address) = match (&self.session.outcome, &self.session.opponent) {
            (Some(outcome), Some(opponent)) => (*outcome, opponent.address),
            _ => return Err(GameError::NoBattleResult),
        };

        if !chain.is_connected() || chain.current_address().is_none() {
            self.session
                .log
                .push(String::from("⚠️ Please connect wallet first"));
            return Err(GameError::WalletNotConnected);
        }

        let record = BattleRecord {
            opponent: crate::chain::Address(opponent_address),
            player_won: outcome.player_wins,
            player_score: outcome.player_health as u64,
            opponent_score: outcome.opponent_health as u64,
        };

        self.session
            .log
            .push(String::from("Opening wallet for signature..."));
        match chain.write_battle_result(&record) {
            Ok(handle) => {
                self.session.pending_tx = Some(handle);
                Ok(handle)
            }
            Err(err) => {
                self.session
                    .log
                    .push(format!("❌ Transaction failed: {:?}", err));
                Err(err.into())
            }
        }
    }

    /// The host confirmed the pending transaction
    pub fn record_confirmed(&mut self) {
        if self.session.pending_tx.take().is_none() {
            return;
        }
        self.session.recorded = true;
        self.session
            .log
            .push(String::from("✅ Result recorded on-chain!"));
        self.session.log.push(String::from("Check the leaderboard!"));
        self.needs_leaderboard_refresh = true;
    }

    /// The host reported the pending transaction as failed or rejected
    pub fn record_failed(&mut self, reason: &str) {
        self.session.pending_tx = None;
        self.session
            .log
            .push(format!("❌ Transaction failed: {}", reason));
    }

    /// Discard the session and cancel anything still scheduled for it
    pub fn return_to_lobby(&mut self) {
        self.sched.cancel_generation(self.generation);
        self.generation += 1;
        self.session = BattleSession::new();
    }

    /// Consume the refresh flag raised by a confirmed recording
    pub fn take_leaderboard_refresh(&mut self) -> bool {
        core::mem::take(&mut self.needs_leaderboard_refresh)
    }
}

impl Default for BattleController {
    fn default() -> Self {
        Self::new()
    }
}
