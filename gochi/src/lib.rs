//! Umbrella crate re-exporting the Gochi Arena game logic

#![cfg_attr(not(feature = "std"), no_std)]

pub use gochi_battle as battle;
pub use gochi_game as game;
