#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod chain;
pub mod error;
pub mod pet;
pub mod sched;
pub mod session;
pub mod store;
pub mod view;

#[cfg(test)]
mod tests;

pub use chain::{
    Address, BattleRecord, ChainClient, ChainError, LeaderboardEntry, PlayerRecord,
    RawLeaderboard, TxHandle,
};
pub use error::{GameError, GameResult};
pub use pet::{PetRecord, PetStage};
pub use sched::Tick;
pub use session::{BattleController, BattleSession, SessionState};
pub use store::{load_pet, save_pet, PetStore, PET_STORE_KEY};
pub use view::{
    leaderboard_view, LeaderboardEntryView, OpponentView, OutcomeView, PetView,
    PlayerRecordView, SessionView,
};
