//! Game engine for browser WASM builds
//!
//! This module provides the main engine exposed to JavaScript via
//! wasm-bindgen. JS drives the tick clock (one call per UI time-unit),
//! renders the JSON views, and owns the wallet: the engine hands over the
//! encoded battle-result payload and is told when the transaction settles.

use gochi_battle::opponents::Species;
use gochi_battle::rng::XorShiftRng;
use gochi_game::chain::{Address, ChainClient, PlayerRecord, RawLeaderboard};
use gochi_game::pet::PetRecord;
use gochi_game::session::BattleController;
use gochi_game::store::{load_pet, save_pet};
use gochi_game::view::{leaderboard_view, PetView, PlayerRecordView, SessionView};
use parity_scale_codec::Encode;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::bridge::JsChainBridge;
use crate::storage::LocalStore;

/// Leaderboard depth requested from the contract
const LEADERBOARD_LIMIT: u32 = 100;

fn entropy_seed() -> u64 {
    let mut bytes = [0u8; 8];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => u64::from_le_bytes(bytes),
        Err(err) => {
            log::warn!("entropy unavailable, falling back to fixed seed: {}", err);
            0x9E37_79B9_7F4A_7C15
        }
    }
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    match serde_wasm_bindgen::to_value(value) {
        Ok(val) => val,
        Err(err) => {
            log::error!("view serialization failed: {:?}", err);
            JsValue::NULL
        }
    }
}

/// Leaderboard read as pushed from JS: parallel arrays of hex addresses
/// and win counts
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LeaderboardIn {
    addresses: Vec<String>,
    wins: Vec<u64>,
}

/// The main game engine exposed to WASM
#[wasm_bindgen]
pub struct ArenaEngine {
    pet: PetRecord,
    controller: BattleController,
    bridge: JsChainBridge,
    rng: XorShiftRng,
    store: Option<LocalStore>,
}

#[wasm_bindgen]
impl ArenaEngine {
    /// Create the engine, loading any saved pet
    ///
    /// `seed` pins the battle RNG for reproducible sessions; without one the
    /// engine seeds itself from browser entropy.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>, now_ms: f64) -> ArenaEngine {
        log::info!("=== GOCHI ARENA ENGINE INITIALIZED ===");
        let store = LocalStore::open();
        if store.is_none() {
            log::warn!("localStorage unavailable; pet will not persist");
        }
        let now = now_ms as u64;
        let pet = match &store {
            Some(store) => load_pet(store, now),
            None => PetRecord::new(now),
        };
        let seed = seed.unwrap_or_else(entropy_seed);

        ArenaEngine {
            pet,
            controller: BattleController::new(),
            bridge: JsChainBridge::new(),
            rng: XorShiftRng::seed_from_u64(seed),
            store,
        }
    }

    // ==========================================
    // PET CARE
    // ==========================================

    /// Hatch a fresh pet of the chosen species, replacing any previous one
    pub fn select_species(&mut self, tag: &str, now_ms: f64) -> Result<(), String> {
        let species =
            Species::from_tag(tag).ok_or_else(|| format!("Unknown species: {}", tag))?;
        self.pet = PetRecord::adopt(species, now_ms as u64);
        self.autosave();
        Ok(())
    }

    pub fn set_name(&mut self, name: &str) {
        self.pet.name = name.to_string();
        self.autosave();
    }

    pub fn feed(&mut self, now_ms: f64) {
        self.pet.feed(now_ms as u64);
        self.autosave();
    }

    pub fn play(&mut self, now_ms: f64) {
        self.pet.play(now_ms as u64);
        self.autosave();
    }

    pub fn heal(&mut self) {
        self.pet.heal();
        self.autosave();
    }

    /// One decay period; JS calls this on its degradation interval
    pub fn decay_tick(&mut self) {
        self.pet.decay_tick();
        self.autosave();
    }

    /// Replay decay periods missed while the tab was closed
    pub fn apply_offline_decay(&mut self, now_ms: f64) -> u32 {
        let periods = self.pet.apply_offline_decay(now_ms as u64);
        if periods > 0 {
            self.autosave();
        }
        periods.min(u32::MAX as u64) as u32
    }

    /// Get the pet panel view as JSON
    pub fn get_pet_view(&self) -> JsValue {
        to_js(&PetView::from(&self.pet))
    }

    // ==========================================
    // BATTLE SESSION
    // ==========================================

    /// Enter matchmaking; the opponent reveals after the matchmaking delay
    pub fn start_battle(&mut self) -> Result<(), String> {
        self.controller
            .start_battle(self.pet.battle_level(), &mut self.rng)
            .map_err(|err| format!("Cannot start battle: {:?}", err))
    }

    /// Advance the session clock by one time-unit
    pub fn tick(&mut self) {
        self.controller.tick(&mut self.rng);
    }

    pub fn return_to_lobby(&mut self) {
        self.controller.return_to_lobby();
    }

    /// Get the battle screen view as JSON
    pub fn get_session_view(&self) -> JsValue {
        to_js(&SessionView::from_controller(&self.controller))
    }

    // ==========================================
    // WALLET / CHAIN BRIDGE
    // ==========================================

    pub fn set_wallet(&mut self, address_hex: &str) -> Result<(), String> {
        let address = Address::from_hex(address_hex)
            .ok_or_else(|| format!("Invalid address: {}", address_hex))?;
        self.bridge.set_wallet(Some(address));
        Ok(())
    }

    pub fn clear_wallet(&mut self) {
        self.bridge.set_wallet(None);
    }

    pub fn is_wallet_connected(&self) -> bool {
        self.bridge.is_connected()
    }

    /// Queue the finished battle for on-chain recording
    ///
    /// On success the encoded payload is available from
    /// `record_payload_scale` for the JS submitter; failure surfaces in
    /// the session log and the action stays on offer.
    pub fn record_on_chain(&mut self) -> Result<(), String> {
        self.controller
            .record_on_chain(&mut self.bridge)
            .map(|_| ())
            .map_err(|err| format!("Recording failed: {:?}", err))
    }

    /// Get the queued battle-result payload as SCALE-encoded bytes
    pub fn record_payload_scale(&self) -> Vec<u8> {
        match self.bridge.pending_record() {
            Some(record) => record.encode(),
            None => Vec::new(),
        }
    }

    /// Get the queued battle-result payload as JSON (for debugging/display)
    pub fn record_payload(&self) -> JsValue {
        match self.bridge.pending_record() {
            Some(record) => to_js(record),
            None => JsValue::NULL,
        }
    }

    /// JS confirmed the submitted transaction
    pub fn record_confirmed(&mut self) {
        self.controller.record_confirmed();
        self.bridge.clear_pending();
    }

    /// JS reported the submitted transaction as failed or rejected
    pub fn record_failed(&mut self, reason: &str) {
        self.controller.record_failed(reason);
        self.bridge.clear_pending();
    }

    /// Whether a confirmed recording wants the leaderboard refetched
    pub fn needs_leaderboard_refresh(&mut self) -> bool {
        self.controller.take_leaderboard_refresh()
    }

    // ==========================================
    // CHAIN READS (pushed from JS)
    // ==========================================

    pub fn set_player_record(&mut self, record_js: JsValue) -> Result<(), String> {
        let record: PlayerRecord = serde_wasm_bindgen::from_value(record_js)
            .map_err(|err| format!("Failed to parse player record: {:?}", err))?;
        self.bridge.set_player_record(record);
        Ok(())
    }

    pub fn get_player_record_view(&self) -> JsValue {
        match self.bridge.player_record() {
            Some(record) => to_js(&PlayerRecordView::from(record)),
            None => JsValue::NULL,
        }
    }

    pub fn set_leaderboard(&mut self, leaderboard_js: JsValue) -> Result<(), String> {
        let raw: LeaderboardIn = serde_wasm_bindgen::from_value(leaderboard_js)
            .map_err(|err| format!("Failed to parse leaderboard: {:?}", err))?;

        let mut addresses = Vec::with_capacity(raw.addresses.len());
        for hex in &raw.addresses {
            addresses
                .push(Address::from_hex(hex).ok_or_else(|| format!("Invalid address: {}", hex))?);
        }
        self.bridge.set_leaderboard(RawLeaderboard {
            addresses,
            wins: raw.wins,
        });
        Ok(())
    }

    /// Get the ranked, sentinel-filtered leaderboard as JSON
    ///
    /// NULL while no read has been pushed yet; the UI shows its loading
    /// state and battling is never blocked.
    pub fn get_leaderboard_view(&self) -> JsValue {
        match self.bridge.read_leaderboard(LEADERBOARD_LIMIT) {
            Ok(raw) => {
                let wallet = self.bridge.wallet();
                to_js(&leaderboard_view(&raw, wallet.as_ref()))
            }
            Err(_) => JsValue::NULL,
        }
    }
}

// Private implementation methods
impl ArenaEngine {
    fn autosave(&mut self) {
        if let Some(store) = self.store.as_mut() {
            save_pet(store, &self.pet);
        }
    }
}
