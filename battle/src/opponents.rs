//! Opponent generation for matchmaking
//!
//! Opponents are sampled around the player's level so matches stay winnable,
//! with a cosmetic species and evolution stage for the battle screen.

use crate::rng::BattleRng;
use serde::{Deserialize, Serialize};

/// Half-width of the level window an opponent is sampled from
pub const LEVEL_WINDOW: u32 = 10;

/// The fixed species catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Species {
    BaseBull,
    EthDragon,
    MemeDog,
    CryptoCat,
    DefiPhoenix,
}

impl Species {
    pub const ALL: [Species; 5] = [
        Species::BaseBull,
        Species::EthDragon,
        Species::MemeDog,
        Species::CryptoCat,
        Species::DefiPhoenix,
    ];

    /// Stable tag used for sprite lookup and persistence
    pub fn tag(&self) -> &'static str {
        match self {
            Species::BaseBull => "base-bull",
            Species::EthDragon => "eth-dragon",
            Species::MemeDog => "meme-dog",
            Species::CryptoCat => "crypto-cat",
            Species::DefiPhoenix => "defi-phoenix",
        }
    }

    /// Parse a stable tag back into a species
    pub fn from_tag(tag: &str) -> Option<Species> {
        Species::ALL.into_iter().find(|s| s.tag() == tag)
    }
}

/// Cosmetic evolution bucket shown for an opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OpponentStage {
    Baby,
    Teen,
    Adult,
}

impl OpponentStage {
    pub fn tag(&self) -> &'static str {
        match self {
            OpponentStage::Baby => "baby",
            OpponentStage::Teen => "teen",
            OpponentStage::Adult => "adult",
        }
    }
}

/// Stage thresholds for generated opponents
pub fn stage_for_level(level: u32) -> OpponentStage {
    if level > 20 {
        OpponentStage::Adult
    } else if level > 10 {
        OpponentStage::Teen
    } else {
        OpponentStage::Baby
    }
}

/// A generated opponent
///
/// Only `level` carries gameplay weight; species, stage and the ephemeral
/// address are display/bookkeeping data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opponent {
    pub species: Species,
    pub stage: OpponentStage,
    pub level: u32,
    pub address: [u8; 20],
}

/// Generate a random opponent for a player of the given level
///
/// Level 0 (an unhatched pet) is treated as level 1. The opponent level is
/// uniform in `[max(1, level - 10), level + 10]`.
pub fn generate_opponent(player_level: u32, rng: &mut impl BattleRng) -> Opponent {
    let player_level = player_level.max(1);
    let min_level = player_level.saturating_sub(LEVEL_WINDOW).max(1);
    let max_level = player_level + LEVEL_WINDOW;
    let span = (max_level - min_level + 1) as usize;
    let level = min_level + rng.gen_range(span) as u32;

    let species = Species::ALL[rng.gen_range(Species::ALL.len())];

    let mut address = [0u8; 20];
    rng.fill_bytes(&mut address);

    Opponent {
        species,
        stage: stage_for_level(level),
        level,
        address,
    }
}
