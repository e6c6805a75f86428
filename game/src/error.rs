//! Error types for game operations
//!
//! This module provides no_std compatible error types using enums
//! instead of String-based errors.

use crate::chain::ChainError;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Game errors that can occur during a battle session
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum GameError {
    /// Action not allowed in the current session state
    WrongPhase,
    /// Recording requires a connected wallet with a session address
    WalletNotConnected,
    /// No finished battle to record
    NoBattleResult,
    /// The chain collaborator reported a failure
    Chain(ChainError),
}

impl From<ChainError> for GameError {
    fn from(err: ChainError) -> Self {
        GameError::Chain(err)
    }
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
