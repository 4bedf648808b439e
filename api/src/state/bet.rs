use serde::{Deserialize, Serialize};
use steel::*;

use crate::state::bet_pda;

use super::EvenOddAccount;

/// Bet holds a player's wager. There is one account per player, reused from
/// round to round; the record only counts for the round it was placed in.
///
/// PDA: ["bet", authority.to_bytes()]
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Bet {
    /// The player who owns this bet.
    pub authority: Pubkey,

    /// The round this bet was placed in.
    pub round_id: u64,

    /// The staked amount.
    pub amount: u64,

    /// The chosen side (1 = even, 0 = odd).
    pub is_even: u8,

    /// Set once the bet has been paid out or forfeited.
    pub settled: u8,

    /// Padding for alignment.
    pub _padding: [u8; 6],
}

impl Bet {
    pub fn pda(&self) -> (Pubkey, u8) {
        bet_pda(self.authority)
    }

    /// A bet is live only in the round it was placed in and until it is settled.
    pub fn is_active(&self, round_id: u64) -> bool {
        self.round_id == round_id && self.settled == 0 && self.amount > 0
    }

    pub fn is_even(&self) -> bool {
        self.is_even == 1
    }

    pub fn wins(&self, outcome_is_even: bool) -> bool {
        self.is_even() == outcome_is_even
    }

    /// Overwrite the record with a fresh wager.
    pub fn place(&mut self, authority: Pubkey, round_id: u64, is_even: bool, amount: u64) {
        self.authority = authority;
        self.round_id = round_id;
        self.amount = amount;
        self.is_even = is_even as u8;
        self.settled = 0;
    }
}

account!(EvenOddAccount, Bet);
