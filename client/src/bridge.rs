//! Bridge between the session controller and the JS wallet stack
//!
//! The browser owns the actual wallet connection and contract calls. JS
//! pushes wallet state and refreshed reads into this bridge, and drains the
//! pending battle-result write for submission; the game core only ever sees
//! the [`ChainClient`] trait.

use gochi_game::chain::{
    Address, BattleRecord, ChainClient, ChainError, PlayerRecord, RawLeaderboard, TxHandle,
};

#[derive(Debug, Default)]
pub struct JsChainBridge {
    wallet: Option<Address>,
    player_record: Option<PlayerRecord>,
    leaderboard: Option<RawLeaderboard>,
    pending: Option<(TxHandle, BattleRecord)>,
    next_handle: u64,
}

impl JsChainBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_wallet(&mut self, address: Option<Address>) {
        self.wallet = address;
    }

    pub fn wallet(&self) -> Option<Address> {
        self.wallet
    }

    pub fn set_player_record(&mut self, record: PlayerRecord) {
        self.player_record = Some(record);
    }

    pub fn player_record(&self) -> Option<&PlayerRecord> {
        self.player_record.as_ref()
    }

    pub fn set_leaderboard(&mut self, leaderboard: RawLeaderboard) {
        self.leaderboard = Some(leaderboard);
    }

    pub fn leaderboard(&self) -> Option<&RawLeaderboard> {
        self.leaderboard.as_ref()
    }

    /// The write awaiting submission by the JS side, if any
    pub fn pending_record(&self) -> Option<&BattleRecord> {
        self.pending.as_ref().map(|(_, record)| record)
    }

    /// Forget the pending write once JS reports it settled
    pub fn clear_pending(&mut self) {
        self.pending = None;
    }
}

impl ChainClient for JsChainBridge {
    fn is_connected(&self) -> bool {
        self.wallet.is_some()
    }

    fn current_address(&self) -> Option<Address> {
        self.wallet
    }

    fn read_player_record(&self, _player: &Address) -> Result<PlayerRecord, ChainError> {
        // Reads are served from the cache JS keeps refreshed for the
        // connected wallet
        self.player_record.ok_or(ChainError::Unavailable)
    }

    fn read_leaderboard(&self, limit: u32) -> Result<RawLeaderboard, ChainError> {
        let cached = self.leaderboard.clone().ok_or(ChainError::Unavailable)?;
        let limit = limit as usize;
        if cached.addresses.len() <= limit {
            return Ok(cached);
        }
        Ok(RawLeaderboard {
            addresses: cached.addresses[..limit].to_vec(),
            wins: cached.wins[..limit].to_vec(),
        })
    }

    fn write_battle_result(&mut self, record: &BattleRecord) -> Result<TxHandle, ChainError> {
        if self.pending.is_some() {
            // One signature request at a time
            return Err(ChainError::Rejected);
        }
        self.next_handle += 1;
        let handle = TxHandle(self.next_handle);
        self.pending = Some((handle, *record));
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> BattleRecord {
        BattleRecord {
            opponent: Address([7u8; 20]),
            player_won: true,
            player_score: 64,
            opponent_score: 0,
        }
    }

    #[test]
    fn test_connection_follows_wallet() {
        let mut bridge = JsChainBridge::new();
        assert!(!bridge.is_connected());
        bridge.set_wallet(Some(Address([1u8; 20])));
        assert!(bridge.is_connected());
        bridge.set_wallet(None);
        assert!(!bridge.is_connected());
    }

    #[test]
    fn test_write_queues_single_pending_record() {
        let mut bridge = JsChainBridge::new();
        let handle = bridge.write_battle_result(&record()).unwrap();
        assert_eq!(handle, TxHandle(1));
        assert_eq!(bridge.pending_record(), Some(&record()));

        // A second write while one is in flight is refused
        assert_eq!(
            bridge.write_battle_result(&record()),
            Err(ChainError::Rejected)
        );

        bridge.clear_pending();
        assert_eq!(bridge.write_battle_result(&record()), Ok(TxHandle(2)));
    }

    #[test]
    fn test_reads_unavailable_until_pushed() {
        let bridge = JsChainBridge::new();
        assert_eq!(
            bridge.read_player_record(&Address::ZERO),
            Err(ChainError::Unavailable)
        );
        assert_eq!(bridge.read_leaderboard(10), Err(ChainError::Unavailable));
    }

    #[test]
    fn test_leaderboard_read_respects_limit() {
        let mut bridge = JsChainBridge::new();
        bridge.set_leaderboard(RawLeaderboard {
            addresses: vec![Address([1u8; 20]), Address([2u8; 20]), Address([3u8; 20])],
            wins: vec![5, 4, 3],
        });
        let board = bridge.read_leaderboard(2).unwrap();
        assert_eq!(board.addresses.len(), 2);
        assert_eq!(board.wins, vec![5, 4]);
    }
}
