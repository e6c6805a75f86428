mod pet;
mod store;

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use gochi_battle::rng::XorShiftRng;

use crate::chain::{
    Address, BattleRecord, ChainClient, ChainError, PlayerRecord, RawLeaderboard, TxHandle,
};
use crate::session::{BattleController, SessionState};
use crate::store::PetStore;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

fn rng(seed: u64) -> XorShiftRng {
    XorShiftRng::seed_from_u64(seed)
}

fn addr(last_byte: u8) -> Address {
    let mut bytes = [0u8; 20];
    bytes[19] = last_byte;
    Address(bytes)
}

/// In-memory stand-in for the browser's localStorage
#[derive(Default)]
struct MemoryStore {
    blobs: BTreeMap<String, String>,
}

impl PetStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.blobs.insert(String::from(key), String::from(value));
    }
}

/// Scriptable chain collaborator
struct MockChain {
    connected: bool,
    address: Option<Address>,
    fail_writes: bool,
    writes: Vec<BattleRecord>,
    next_handle: u64,
}

impl MockChain {
    fn connected() -> Self {
        Self {
            connected: true,
            address: Some(addr(0xAA)),
            fail_writes: false,
            writes: Vec::new(),
            next_handle: 1,
        }
    }

    fn disconnected() -> Self {
        Self {
            connected: false,
            address: None,
            fail_writes: false,
            writes: Vec::new(),
            next_handle: 1,
        }
    }
}

impl ChainClient for MockChain {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn current_address(&self) -> Option<Address> {
        self.address
    }

    fn read_player_record(&self, _player: &Address) -> Result<PlayerRecord, ChainError> {
        if !self.connected {
            return Err(ChainError::Unavailable);
        }
        Ok(PlayerRecord::default())
    }

    fn read_leaderboard(&self, _limit: u32) -> Result<RawLeaderboard, ChainError> {
        if !self.connected {
            return Err(ChainError::Unavailable);
        }
        Ok(RawLeaderboard::default())
    }

    fn write_battle_result(&mut self, record: &BattleRecord) -> Result<TxHandle, ChainError> {
        if self.fail_writes {
            return Err(ChainError::Rejected);
        }
        self.writes.push(*record);
        let handle = TxHandle(self.next_handle);
        self.next_handle += 1;
        Ok(handle)
    }
}

/// Start a battle and tick until the session reaches `Result`
fn drive_to_result(seed: u64, player_level: u32) -> (BattleController, XorShiftRng) {
    let mut controller = BattleController::new();
    let mut source = rng(seed);
    controller
        .start_battle(player_level, &mut source)
        .expect("lobby accepts a new battle");

    for _ in 0..50 {
        controller.tick(&mut source);
        if controller.session().state == SessionState::Result {
            return (controller, source);
        }
    }
    panic!("session never reached Result");
}
