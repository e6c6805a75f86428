//! Chain-client collaborator boundary
//!
//! Wallet connection, contract reads and the battle-result write are owned
//! by the host environment (the browser wallet stack). The game core only
//! sees this trait plus the boundary types below; the record payload is
//! SCALE-encodable so the host can hand it to its submitter as raw bytes.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// A 20-byte account address
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The unranked-slot sentinel returned by the leaderboard read
    pub const ZERO: Address = Address([0u8; 20]);

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Render as 0x-prefixed lowercase hex
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for byte in self.0 {
            out.push_str(&format!("{:02x}", byte));
        }
        out
    }

    /// Parse a 0x-prefixed 40-digit hex string
    pub fn from_hex(hex: &str) -> Option<Address> {
        let digits = hex.strip_prefix("0x").unwrap_or(hex);
        if digits.len() != 40 {
            return None;
        }
        let mut bytes = [0u8; 20];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(digits.get(2 * i..2 * i + 2)?, 16).ok()?;
        }
        Some(Address(bytes))
    }
}

/// Opaque handle for an in-flight battle-result transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
pub struct TxHandle(pub u64);

/// A player's on-chain battle record
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub wins: u64,
    pub losses: u64,
    pub total_battles: u64,
    pub last_battle_time: u64,
    pub win_streak: u64,
    pub highest_win_streak: u64,
}

impl PlayerRecord {
    /// Win percentage rounded to the nearest integer, 0 with no battles
    pub fn win_rate_percent(&self) -> u32 {
        let total = self.wins + self.losses;
        if total == 0 {
            return 0;
        }
        ((self.wins * 100 + total / 2) / total) as u32
    }
}

/// Leaderboard as read from the contract: parallel arrays, zero-address
/// sentinels marking unranked slots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLeaderboard {
    pub addresses: Vec<Address>,
    pub wins: Vec<u64>,
}

/// A ranked leaderboard entry after sentinel filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub address: Address,
    pub wins: u64,
}

impl RawLeaderboard {
    /// Drop the zero-address sentinels, keeping contract order
    pub fn entries(&self) -> Vec<LeaderboardEntry> {
        self.addresses
            .iter()
            .zip(self.wins.iter())
            .filter(|(address, _)| !address.is_zero())
            .map(|(address, wins)| LeaderboardEntry {
                address: *address,
                wins: *wins,
            })
            .collect()
    }
}

/// The battle-result write payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleRecord {
    pub opponent: Address,
    pub player_won: bool,
    pub player_score: u64,
    pub opponent_score: u64,
}

/// Failures reported by the chain collaborator; always recoverable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum ChainError {
    /// Read or write could not reach the contract
    Unavailable,
    /// The write was rejected (user declined, reverted, out of gas)
    Rejected,
}

/// The wallet/contract surface consumed by the game core
pub trait ChainClient {
    fn is_connected(&self) -> bool;

    fn current_address(&self) -> Option<Address>;

    fn read_player_record(&self, player: &Address) -> Result<PlayerRecord, ChainError>;

    fn read_leaderboard(&self, limit: u32) -> Result<RawLeaderboard, ChainError>;

    /// Submit a battle result; resolves or rejects independently of game
    /// state, confirmation is reported back through the session controller
    fn write_battle_result(&mut self, record: &BattleRecord) -> Result<TxHandle, ChainError>;
}
