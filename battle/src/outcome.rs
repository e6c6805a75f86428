//! Battle outcome resolution
//!
//! The outcome engine is a pure function over two combatant levels and an
//! injected RNG. Level difference sets the win probability (5% per level,
//! floored and capped), and the winner's remaining health is drawn from a
//! band sized by how lopsided the match was.

use crate::rng::BattleRng;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Win probability floor; upsets stay possible at any level gap
pub const MIN_WIN_CHANCE: f64 = 0.05;
/// Win probability cap
pub const MAX_WIN_CHANCE: f64 = 0.95;
/// Win probability gained per level of advantage
pub const WIN_CHANCE_PER_LEVEL: f64 = 0.05;

/// Immutable result of a single battle resolution
///
/// The loser's health is exactly 0; the winner's is in [10, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleOutcome {
    pub player_wins: bool,
    pub player_health: u8,
    pub opponent_health: u8,
    /// Integer percent in [5, 95], for display
    pub win_chance: u8,
}

// Math.round for the positive values produced here
fn round_u8(value: f64) -> u8 {
    (value + 0.5) as u8
}

/// Resolve a battle between two levels
///
/// Deterministic given the RNG draw sequence: one draw decides the winner,
/// one draws the winner's remaining health.
pub fn resolve_outcome(
    player_level: u32,
    opponent_level: u32,
    rng: &mut impl BattleRng,
) -> BattleOutcome {
    let level_diff = player_level as i64 - opponent_level as i64;

    let mut win_chance = 0.5 + WIN_CHANCE_PER_LEVEL * level_diff as f64;
    if win_chance < MIN_WIN_CHANCE {
        win_chance = MIN_WIN_CHANCE;
    }
    if win_chance > MAX_WIN_CHANCE {
        win_chance = MAX_WIN_CHANCE;
    }

    let roll = rng.unit_interval();
    let player_wins = roll < win_chance;

    // Level advantage as seen from the winner's side
    let margin = if player_wins { level_diff } else { -level_diff };
    let winner_health = if margin > 10 {
        70.0 + rng.unit_interval() * 30.0
    } else if margin > 0 {
        40.0 + rng.unit_interval() * 40.0
    } else {
        10.0 + rng.unit_interval() * 30.0
    };
    let winner_health = round_u8(winner_health);

    let (player_health, opponent_health) = if player_wins {
        (winner_health, 0)
    } else {
        (0, winner_health)
    };

    let outcome = BattleOutcome {
        player_wins,
        player_health,
        opponent_health,
        win_chance: round_u8(win_chance * 100.0),
    };
    log::debug!(
        "resolved {} vs {}: {:?}",
        player_level,
        opponent_level,
        outcome
    );
    outcome
}
