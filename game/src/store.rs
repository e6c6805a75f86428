//! Local-store collaborator boundary
//!
//! Durable persistence is a single JSON blob behind a get/set key-value
//! interface; the browser client backs it with localStorage. Only the pet
//! is persisted here, battle history lives on-chain.

use alloc::string::String;

use crate::pet::PetRecord;

/// Key under which the pet blob is stored
pub const PET_STORE_KEY: &str = "gochi_pet";

/// A durable key-value blob store
pub trait PetStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str);
}

/// Load the saved pet, falling back to a fresh one
///
/// An absent or unreadable blob is not an error: the player simply starts
/// over, and the broken save is logged and overwritten on the next write.
pub fn load_pet(store: &dyn PetStore, now_ms: u64) -> PetRecord {
    match store.get(PET_STORE_KEY) {
        Some(blob) => match serde_json::from_str(&blob) {
            Ok(pet) => pet,
            Err(err) => {
                log::warn!("discarding unreadable pet save: {}", err);
                PetRecord::new(now_ms)
            }
        },
        None => PetRecord::new(now_ms),
    }
}

/// Persist the pet as a JSON blob
pub fn save_pet(store: &mut dyn PetStore, pet: &PetRecord) {
    match serde_json::to_string(pet) {
        Ok(blob) => store.set(PET_STORE_KEY, &blob),
        Err(err) => log::error!("failed to serialize pet save: {}", err),
    }
}
