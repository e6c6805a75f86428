//! View types for UI serialization
//!
//! This module provides view structs for sending game state to frontends.

use alloc::string::String;
use alloc::vec::Vec;

use gochi_battle::opponents::Opponent;
use gochi_battle::outcome::BattleOutcome;
use serde::{Deserialize, Serialize};

use crate::chain::{Address, PlayerRecord, RawLeaderboard};
use crate::pet::{PetRecord, EXP_PER_LEVEL};
use crate::session::BattleController;

/// Pet panel view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetView {
    pub species: Option<String>,
    pub name: String,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next: u32,
    pub health: u8,
    pub happiness: u8,
    pub hunger: u8,
    pub stage: String,
}

impl From<&PetRecord> for PetView {
    fn from(pet: &PetRecord) -> Self {
        Self {
            species: pet.species.map(|s| String::from(s.tag())),
            name: pet.name.clone(),
            level: pet.level,
            experience: pet.experience,
            experience_to_next: EXP_PER_LEVEL * pet.level,
            health: pet.health,
            happiness: pet.happiness,
            hunger: pet.hunger,
            stage: String::from(pet.stage().tag()),
        }
    }
}

/// Opponent card shown during battle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpponentView {
    pub species: String,
    pub stage: String,
    pub level: u32,
    pub address: String,
}

impl From<&Opponent> for OpponentView {
    fn from(opponent: &Opponent) -> Self {
        Self {
            species: String::from(opponent.species.tag()),
            stage: String::from(opponent.stage.tag()),
            level: opponent.level,
            address: Address(opponent.address).to_hex(),
        }
    }
}

/// Outcome summary exposed once the battle is decided
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeView {
    pub player_wins: bool,
    pub win_chance: u8,
}

impl From<&BattleOutcome> for OutcomeView {
    fn from(outcome: &BattleOutcome) -> Self {
        Self {
            player_wins: outcome.player_wins,
            win_chance: outcome.win_chance,
        }
    }
}

/// The complete battle-screen view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub state: String,
    pub player_level: u32,
    pub player_health: u8,
    pub opponent_health: u8,
    pub log: Vec<String>,
    pub opponent: Option<OpponentView>,
    pub outcome: Option<OutcomeView>,
    pub can_record: bool,
    pub recording: bool,
    pub recorded: bool,
}

impl SessionView {
    pub fn from_controller(controller: &BattleController) -> Self {
        let session = controller.session();
        Self {
            state: String::from(session.state.tag()),
            player_level: controller.player_level(),
            player_health: session.player_health,
            opponent_health: session.opponent_health,
            log: session.log.clone(),
            opponent: session.opponent.as_ref().map(OpponentView::from),
            outcome: session.outcome.as_ref().map(OutcomeView::from),
            can_record: session.can_record(),
            recording: session.pending_tx().is_some(),
            recorded: session.recorded(),
        }
    }
}

/// The player's on-chain record, win rate included
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecordView {
    pub wins: u64,
    pub losses: u64,
    pub total_battles: u64,
    pub win_streak: u64,
    pub highest_win_streak: u64,
    pub win_rate: u32,
}

impl From<&PlayerRecord> for PlayerRecordView {
    fn from(record: &PlayerRecord) -> Self {
        Self {
            wins: record.wins,
            losses: record.losses,
            total_battles: record.total_battles,
            win_streak: record.win_streak,
            highest_win_streak: record.highest_win_streak,
            win_rate: record.win_rate_percent(),
        }
    }
}

/// One ranked leaderboard row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryView {
    pub rank: u32,
    pub address: String,
    pub wins: u64,
    pub is_you: bool,
}

/// Rank the filtered leaderboard entries, flagging the viewer's row
pub fn leaderboard_view(
    raw: &RawLeaderboard,
    you: Option<&Address>,
) -> Vec<LeaderboardEntryView> {
    raw.entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| LeaderboardEntryView {
            rank: index as u32 + 1,
            address: entry.address.to_hex(),
            wins: entry.wins,
            is_you: you == Some(&entry.address),
        })
        .collect()
}
