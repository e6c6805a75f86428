use super::*;
use gochi_battle::opponents::Species;

use crate::pet::PetRecord;
use crate::store::{load_pet, save_pet, PET_STORE_KEY};

const NOW: u64 = 1_700_000_000_000;

#[test]
fn test_missing_blob_yields_fresh_pet() {
    let store = MemoryStore::default();
    let pet = load_pet(&store, NOW);
    assert!(pet.species.is_none());
    assert_eq!(pet.born_ms, NOW);
}

#[test]
fn test_save_load_round_trip() {
    let mut store = MemoryStore::default();
    let mut pet = PetRecord::adopt(Species::MemeDog, NOW);
    pet.name = String::from("Wojak");
    pet.level = 12;
    pet.experience = 340;
    pet.hunger = 55;

    save_pet(&mut store, &pet);
    let loaded = load_pet(&store, NOW + 1000);
    assert_eq!(loaded, pet);
}

#[test]
fn test_corrupt_blob_falls_back_to_fresh_pet() {
    let mut store = MemoryStore::default();
    store.set(PET_STORE_KEY, "{not json");

    let pet = load_pet(&store, NOW);
    assert!(pet.species.is_none());
    assert_eq!(pet.level, 1);
}

#[test]
fn test_saved_blob_is_json() {
    let mut store = MemoryStore::default();
    save_pet(&mut store, &PetRecord::adopt(Species::BaseBull, NOW));

    let blob = store.get(PET_STORE_KEY).unwrap();
    assert!(blob.contains("\"species\":\"base-bull\""));
}
