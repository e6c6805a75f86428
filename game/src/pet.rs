//! Pet state model
//!
//! Stats, care actions, leveling and time-based decay. Wall-clock
//! timestamps are injected by the caller so the model stays deterministic;
//! wins and losses live on-chain and are never written back here.

use alloc::string::String;

use gochi_battle::opponents::Species;
use serde::{Deserialize, Serialize};

/// Upper bound for health, happiness and hunger
pub const MAX_STAT: u8 = 100;
/// One decay period: 4 hours
pub const DEGRADE_INTERVAL_MS: u64 = 14_400_000;
/// Experience needed per level is this times the current level
pub const EXP_PER_LEVEL: u32 = 100;
/// Below this, a bar starts costing health every decay tick
pub const LOW_STAT_THRESHOLD: u8 = 20;
/// Highest level still shown as a baby
pub const BABY_MAX_LEVEL: u32 = 5;
/// Highest level still shown as a teen
pub const TEEN_MAX_LEVEL: u32 = 15;

const FEED_HUNGER: u8 = 30;
const FEED_EXP: u32 = 5;
const PLAY_HAPPINESS: u8 = 20;
const PLAY_HUNGER_COST: u8 = 10;
const PLAY_EXP: u32 = 10;
const HEAL_HEALTH: u8 = 50;
const HEAL_HAPPINESS_COST: u8 = 10;

// 300 decay periods flatten every bar; replaying more is a no-op
const MAX_OFFLINE_PERIODS: u64 = 300;

/// Evolution stage of the player's pet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PetStage {
    Egg,
    Baby,
    Teen,
    Adult,
    Ghost,
}

impl PetStage {
    pub fn tag(&self) -> &'static str {
        match self {
            PetStage::Egg => "egg",
            PetStage::Baby => "baby",
            PetStage::Teen => "teen",
            PetStage::Adult => "adult",
            PetStage::Ghost => "ghost",
        }
    }
}

/// The locally persisted pet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetRecord {
    pub species: Option<Species>,
    pub name: String,
    pub level: u32,
    pub experience: u32,
    pub health: u8,
    pub happiness: u8,
    pub hunger: u8,
    pub last_fed_ms: u64,
    pub last_played_ms: u64,
    pub last_decay_ms: u64,
    pub born_ms: u64,
}

impl PetRecord {
    /// A fresh, unhatched pet with full bars
    pub fn new(now_ms: u64) -> Self {
        Self {
            species: None,
            name: String::new(),
            level: 1,
            experience: 0,
            health: MAX_STAT,
            happiness: MAX_STAT,
            hunger: MAX_STAT,
            last_fed_ms: now_ms,
            last_played_ms: now_ms,
            last_decay_ms: now_ms,
            born_ms: now_ms,
        }
    }

    /// Hatch a fresh pet of the chosen species
    pub fn adopt(species: Species, now_ms: u64) -> Self {
        Self {
            species: Some(species),
            born_ms: now_ms,
            ..Self::new(now_ms)
        }
    }

    pub fn stage(&self) -> PetStage {
        if self.health == 0 {
            PetStage::Ghost
        } else if self.level < 1 {
            PetStage::Egg
        } else if self.level <= BABY_MAX_LEVEL {
            PetStage::Baby
        } else if self.level <= TEEN_MAX_LEVEL {
            PetStage::Teen
        } else {
            PetStage::Adult
        }
    }

    /// The level used for matchmaking and outcome resolution, clamped to 1
    pub fn battle_level(&self) -> u32 {
        self.level.max(1)
    }

    pub fn feed(&mut self, now_ms: u64) {
        self.hunger = (self.hunger + FEED_HUNGER).min(MAX_STAT);
        self.experience += FEED_EXP;
        self.last_fed_ms = now_ms;
        self.check_level_up();
    }

    pub fn play(&mut self, now_ms: u64) {
        self.happiness = (self.happiness + PLAY_HAPPINESS).min(MAX_STAT);
        self.hunger = self.hunger.saturating_sub(PLAY_HUNGER_COST);
        self.experience += PLAY_EXP;
        self.last_played_ms = now_ms;
        self.check_level_up();
    }

    pub fn heal(&mut self) {
        self.health = (self.health + HEAL_HEALTH).min(MAX_STAT);
        self.happiness = self.happiness.saturating_sub(HEAL_HAPPINESS_COST);
    }

    fn check_level_up(&mut self) {
        if self.experience >= EXP_PER_LEVEL * self.level {
            self.level += 1;
            self.experience = 0;
        }
    }

    /// One decay period: bars drop, neglect costs health
    ///
    /// No-op before a species is chosen.
    pub fn decay_tick(&mut self) {
        if self.species.is_none() {
            return;
        }
        self.hunger = self.hunger.saturating_sub(1);
        self.happiness = self.happiness.saturating_sub(1);

        let mut health_loss = 0;
        if self.hunger < LOW_STAT_THRESHOLD {
            health_loss += 1;
        }
        if self.happiness < LOW_STAT_THRESHOLD {
            health_loss += 1;
        }
        self.health = self.health.saturating_sub(health_loss);
    }

    /// Replay the decay periods that elapsed while the game was closed
    ///
    /// Returns the number of periods applied.
    pub fn apply_offline_decay(&mut self, now_ms: u64) -> u64 {
        let elapsed = now_ms.saturating_sub(self.last_decay_ms);
        let periods = elapsed / DEGRADE_INTERVAL_MS;
        if periods == 0 {
            return 0;
        }
        for _ in 0..periods.min(MAX_OFFLINE_PERIODS) {
            self.decay_tick();
        }
        self.last_decay_ms += periods * DEGRADE_INTERVAL_MS;
        log::debug!("applied {} offline decay period(s)", periods);
        periods
    }
}
