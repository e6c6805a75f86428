//! Battle log scripting
//!
//! Converts a precomputed outcome into the narrated step sequence the UI
//! plays back. The first six steps are flavor with nominal damage values;
//! the seventh carries exactly the damage still owed so the running totals
//! land on the outcome's health values with no drift. Flavor damage is
//! capped at the amount still owed, which keeps every step non-negative
//! even for a high-health winner.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::outcome::BattleOutcome;
use serde::{Deserialize, Serialize};

/// Steps per battle script, corrective closer included
pub const SCRIPT_LEN: usize = 7;

/// One narrated step of a battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleLogStep {
    pub message: String,
    pub player_damage: u8,
    pub opponent_damage: u8,
}

// (message, damage to player, damage to opponent)
const WIN_SCRIPT: [(&str, u8, u8); 6] = [
    ("Battle Start! ⚔️", 0, 0),
    ("Your pet attacks!", 0, 20),
    ("Opponent strikes back!", 15, 0),
    ("Critical hit from your pet!", 0, 35),
    ("Opponent uses special move!", 20, 0),
    ("Your pet's ultimate attack!", 0, 45),
];
const WIN_CLOSER: &str = "Level advantage shows!";

const LOSE_SCRIPT: [(&str, u8, u8); 6] = [
    ("Battle Start! ⚔️", 0, 0),
    ("Your pet attacks!", 0, 15),
    ("Opponent counter-attacks!", 25, 0),
    ("You try a special move!", 0, 10),
    ("Opponent's critical hit!", 35, 0),
    ("Opponent is too strong!", 20, 0),
];
const LOSE_CLOSER: &str = "Level difference is too much!";

/// The headline logged before playback starts
pub fn win_chance_line(win_chance: u8, player_level: u32, opponent_level: u32) -> String {
    format!(
        "Win chance: {}% (Level {} vs Level {})",
        win_chance, player_level, opponent_level
    )
}

/// Script the narrated steps for an outcome
///
/// Always returns exactly [`SCRIPT_LEN`] steps whose damage columns sum to
/// `100 - player_health` and `100 - opponent_health` respectively.
pub fn script_battle(outcome: &BattleOutcome) -> Vec<BattleLogStep> {
    let (table, closer) = if outcome.player_wins {
        (&WIN_SCRIPT, WIN_CLOSER)
    } else {
        (&LOSE_SCRIPT, LOSE_CLOSER)
    };

    let mut player_owed = 100 - outcome.player_health;
    let mut opponent_owed = 100 - outcome.opponent_health;

    let mut steps = Vec::with_capacity(SCRIPT_LEN);
    for (message, player_damage, opponent_damage) in table {
        let player_damage = (*player_damage).min(player_owed);
        let opponent_damage = (*opponent_damage).min(opponent_owed);
        player_owed -= player_damage;
        opponent_owed -= opponent_damage;
        steps.push(BattleLogStep {
            message: String::from(*message),
            player_damage,
            opponent_damage,
        });
    }

    // Corrective closer: whatever is still owed lands here
    steps.push(BattleLogStep {
        message: String::from(closer),
        player_damage: player_owed,
        opponent_damage: opponent_owed,
    });

    steps
}
