use gochi_battle::opponents::Species;

use crate::pet::{PetRecord, PetStage, DEGRADE_INTERVAL_MS};

const NOW: u64 = 1_700_000_000_000;

fn hatched() -> PetRecord {
    PetRecord::adopt(Species::CryptoCat, NOW)
}

#[test]
fn test_new_pet_defaults() {
    let pet = PetRecord::new(NOW);
    assert!(pet.species.is_none());
    assert_eq!(pet.level, 1);
    assert_eq!(pet.experience, 0);
    assert_eq!((pet.health, pet.happiness, pet.hunger), (100, 100, 100));
}

#[test]
fn test_feed_caps_hunger_and_grants_exp() {
    let mut pet = hatched();
    pet.hunger = 90;
    pet.feed(NOW + 1);
    assert_eq!(pet.hunger, 100);
    assert_eq!(pet.experience, 5);
    assert_eq!(pet.last_fed_ms, NOW + 1);
}

#[test]
fn test_play_trades_hunger_for_happiness() {
    let mut pet = hatched();
    pet.happiness = 50;
    pet.hunger = 5;
    pet.play(NOW + 2);
    assert_eq!(pet.happiness, 70);
    assert_eq!(pet.hunger, 0);
    assert_eq!(pet.experience, 10);
    assert_eq!(pet.last_played_ms, NOW + 2);
}

#[test]
fn test_heal_trades_happiness_for_health() {
    let mut pet = hatched();
    pet.health = 30;
    pet.happiness = 5;
    pet.heal();
    assert_eq!(pet.health, 80);
    assert_eq!(pet.happiness, 0);
}

#[test]
fn test_level_up_threshold_scales_with_level() {
    let mut pet = hatched();

    // Level 1 needs 100 exp: 20 feeds
    for _ in 0..19 {
        pet.feed(NOW);
    }
    assert_eq!(pet.level, 1);
    pet.feed(NOW);
    assert_eq!(pet.level, 2);
    assert_eq!(pet.experience, 0);

    // Level 2 needs 200 exp: 20 plays
    for _ in 0..19 {
        pet.play(NOW);
    }
    assert_eq!(pet.level, 2);
    pet.play(NOW);
    assert_eq!(pet.level, 3);
}

#[test]
fn test_stage_rules() {
    let mut pet = hatched();
    assert_eq!(pet.stage(), PetStage::Baby);

    pet.level = 5;
    assert_eq!(pet.stage(), PetStage::Baby);
    pet.level = 6;
    assert_eq!(pet.stage(), PetStage::Teen);
    pet.level = 15;
    assert_eq!(pet.stage(), PetStage::Teen);
    pet.level = 16;
    assert_eq!(pet.stage(), PetStage::Adult);

    pet.level = 0;
    assert_eq!(pet.stage(), PetStage::Egg);

    // Death overrides everything
    pet.level = 30;
    pet.health = 0;
    assert_eq!(pet.stage(), PetStage::Ghost);
}

#[test]
fn test_battle_level_clamps_zero() {
    let mut pet = hatched();
    pet.level = 0;
    assert_eq!(pet.battle_level(), 1);
    pet.level = 7;
    assert_eq!(pet.battle_level(), 7);
}

#[test]
fn test_decay_tick_drops_bars() {
    let mut pet = hatched();
    pet.decay_tick();
    assert_eq!(pet.hunger, 99);
    assert_eq!(pet.happiness, 99);
    assert_eq!(pet.health, 100);
}

#[test]
fn test_neglect_costs_health() {
    let mut pet = hatched();
    pet.hunger = 15;
    pet.happiness = 15;
    pet.decay_tick();
    assert_eq!(pet.health, 98);

    pet.happiness = 50;
    pet.decay_tick();
    assert_eq!(pet.health, 97);
}

#[test]
fn test_unhatched_pet_does_not_decay() {
    let mut pet = PetRecord::new(NOW);
    pet.decay_tick();
    assert_eq!((pet.health, pet.happiness, pet.hunger), (100, 100, 100));
}

#[test]
fn test_offline_decay_period_math() {
    let mut pet = hatched();

    // Under one interval: nothing happens
    assert_eq!(pet.apply_offline_decay(NOW + DEGRADE_INTERVAL_MS - 1), 0);
    assert_eq!(pet.hunger, 100);

    // Three intervals and change: three periods
    assert_eq!(
        pet.apply_offline_decay(NOW + 3 * DEGRADE_INTERVAL_MS + 5),
        3
    );
    assert_eq!(pet.hunger, 97);

    // The remainder carries over rather than being lost
    assert_eq!(pet.apply_offline_decay(NOW + 4 * DEGRADE_INTERVAL_MS), 1);
    assert_eq!(pet.hunger, 96);
}

#[test]
fn test_offline_decay_flatlines_after_long_absence() {
    let mut pet = hatched();
    let years = 4 * 365 * 24 * 3_600_000u64;
    pet.apply_offline_decay(NOW + years);
    assert_eq!((pet.health, pet.happiness, pet.hunger), (0, 0, 0));
    assert_eq!(pet.stage(), PetStage::Ghost);
}
