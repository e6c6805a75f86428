#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod opponents;
pub mod outcome;
pub mod rng;
pub mod script;

#[cfg(test)]
mod tests;

pub use opponents::{generate_opponent, Opponent, OpponentStage, Species};
pub use outcome::{resolve_outcome, BattleOutcome};
pub use rng::{BattleRng, XorShiftRng};
pub use script::{script_battle, win_chance_line, BattleLogStep};
