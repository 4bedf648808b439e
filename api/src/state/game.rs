use serde::{Deserialize, Serialize};
use steel::*;

use crate::consts::{FIRST_ROUND_ID, MAX_BETS_PER_ROUND, PAYOUT_MULTIPLIER};
use crate::dice::verify_reveal;
use crate::error::EvenOddError;
use crate::state::game_pda;

use super::{check_pass, Bet, EvenOddAccount, Pass};

/// Game is a singleton account that tracks the dealer escrow and the
/// current round. Bets are not stored here; each player's `Bet` account
/// records the round it belongs to, so advancing `round_id` retires every
/// outstanding bet at once.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Game {
    /// The privileged key allowed to fund, withdraw and roll.
    pub dealer: Pubkey,

    /// The token mint wagers are denominated in.
    pub mint: Pubkey,

    /// The current round number (starts at 1).
    pub round_id: u64,

    /// Sum of active bet amounts this round.
    pub total_bet_amount: u64,

    /// Tokens the dealer has committed as payout backing.
    pub dealer_balance: u64,

    /// Number of active bets this round.
    pub bet_count: u64,

    /// Keccak commitment to the dealer's seed for the current round.
    pub commitment: [u8; 32],

    /// Total tokens paid out to winners.
    pub total_payouts: u64,

    /// Total tokens collected from losing bets.
    pub total_collected: u64,

    /// The face of the last roll (0 before the first roll).
    pub last_face: u8,

    /// Padding for alignment.
    pub _padding: [u8; 7],
}

impl Game {
    pub fn pda() -> (Pubkey, u8) {
        game_pda()
    }

    /// Set up round 1.
    pub fn open(&mut self, dealer: Pubkey, mint: Pubkey, commitment: [u8; 32]) -> Result<(), EvenOddError> {
        if commitment == [0; 32] {
            return Err(EvenOddError::InvalidCommitment);
        }
        *self = Self::zeroed();
        self.dealer = dealer;
        self.mint = mint;
        self.round_id = FIRST_ROUND_ID;
        self.commitment = commitment;
        Ok(())
    }

    pub fn require_dealer(&self, signer: &Pubkey) -> Result<(), EvenOddError> {
        if self.dealer != *signer {
            return Err(EvenOddError::Unauthorized);
        }
        Ok(())
    }

    pub fn dealer_balance(&self) -> u64 {
        self.dealer_balance
    }

    pub fn current_round_id(&self) -> u64 {
        self.round_id
    }

    pub fn total_bet_amount(&self) -> u64 {
        self.total_bet_amount
    }

    /// Escrow not backing the current round's exposure.
    pub fn free_balance(&self) -> u64 {
        self.dealer_balance.saturating_sub(self.total_bet_amount)
    }

    /// The player's bet if it counts for the current round.
    pub fn active_bet<'a>(&self, bet: Option<&'a Bet>) -> Option<&'a Bet> {
        bet.filter(|bet| bet.is_active(self.round_id))
    }

    pub fn is_already_bet(&self, bet: Option<&Bet>) -> bool {
        self.active_bet(bet).is_some()
    }

    pub fn bet_amount_of(&self, bet: Option<&Bet>) -> u64 {
        self.active_bet(bet).map_or(0, |bet| bet.amount)
    }

    /// The player's side and stake, `(false, 0)` without an active bet.
    pub fn player_info(&self, bet: Option<&Bet>) -> (bool, u64) {
        self.active_bet(bet)
            .map_or((false, 0), |bet| (bet.is_even(), bet.amount))
    }

    /// Add tokens to the escrow.
    pub fn fund(&mut self, amount: u64) -> Result<(), EvenOddError> {
        if amount == 0 {
            return Err(EvenOddError::ZeroAmount);
        }
        self.dealer_balance = self
            .dealer_balance
            .checked_add(amount)
            .ok_or(EvenOddError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Take tokens out of the escrow. Escrow backing live bets stays put.
    pub fn withdraw(&mut self, amount: u64) -> Result<(), EvenOddError> {
        if amount == 0 {
            return Err(EvenOddError::ZeroAmount);
        }
        if amount > self.free_balance() {
            return Err(EvenOddError::InsufficientBalance);
        }
        self.dealer_balance -= amount;
        Ok(())
    }

    /// Admission checks for a bet, in a fixed order: pass held, pass valid,
    /// no bet yet this round, non-zero amount, escrow covers the exposure,
    /// round not full.
    pub fn check_bet(
        &self,
        player: &Pubkey,
        pass: Option<&Pass>,
        bet: Option<&Bet>,
        amount: u64,
        now: i64,
    ) -> Result<(), EvenOddError> {
        check_pass(player, pass, now)?;
        if self.is_already_bet(bet) {
            return Err(EvenOddError::DuplicateBet);
        }
        if amount == 0 {
            return Err(EvenOddError::ZeroAmount);
        }
        match self.total_bet_amount.checked_add(amount) {
            Some(exposure) if exposure <= self.dealer_balance => {}
            _ => return Err(EvenOddError::ExceedsDealerLiquidity),
        }
        if self.bet_count >= MAX_BETS_PER_ROUND {
            return Err(EvenOddError::RoundFull);
        }
        Ok(())
    }

    /// Record a checked bet into the round.
    pub fn admit_bet(
        &mut self,
        bet: &mut Bet,
        player: Pubkey,
        is_even: bool,
        amount: u64,
    ) -> Result<(), EvenOddError> {
        self.total_bet_amount = self
            .total_bet_amount
            .checked_add(amount)
            .ok_or(EvenOddError::ArithmeticOverflow)?;
        self.bet_count = self
            .bet_count
            .checked_add(1)
            .ok_or(EvenOddError::ArithmeticOverflow)?;
        bet.place(player, self.round_id, is_even, amount);
        Ok(())
    }

    /// Preconditions for settling the round with `seed` while supplying
    /// `bets_supplied` bet records.
    pub fn check_roll(
        &self,
        seed: &[u8; 32],
        next_commitment: &[u8; 32],
        bets_supplied: u64,
    ) -> Result<(), EvenOddError> {
        if self.total_bet_amount == 0 {
            return Err(EvenOddError::NoActiveBets);
        }
        if !verify_reveal(&self.commitment, seed) {
            return Err(EvenOddError::InvalidReveal);
        }
        if *next_commitment == [0; 32] {
            return Err(EvenOddError::InvalidCommitment);
        }
        if bets_supplied != self.bet_count {
            return Err(EvenOddError::IncompleteSettlement);
        }
        Ok(())
    }

    /// Settle one bet against the outcome and return the payout owed to the
    /// player. A winner gets the stake back plus a match drawn from escrow; a
    /// losing stake moves into escrow.
    pub fn settle_bet(&mut self, bet: &mut Bet, outcome_is_even: bool) -> Result<u64, EvenOddError> {
        if !bet.is_active(self.round_id) {
            return Err(EvenOddError::StaleBet);
        }
        bet.settled = 1;

        if bet.wins(outcome_is_even) {
            let payout = bet
                .amount
                .checked_mul(PAYOUT_MULTIPLIER)
                .ok_or(EvenOddError::ArithmeticOverflow)?;
            self.dealer_balance = self
                .dealer_balance
                .checked_sub(bet.amount)
                .ok_or(EvenOddError::ArithmeticOverflow)?;
            self.total_payouts = self
                .total_payouts
                .checked_add(payout)
                .ok_or(EvenOddError::ArithmeticOverflow)?;
            Ok(payout)
        } else {
            self.dealer_balance = self
                .dealer_balance
                .checked_add(bet.amount)
                .ok_or(EvenOddError::ArithmeticOverflow)?;
            self.total_collected = self
                .total_collected
                .checked_add(bet.amount)
                .ok_or(EvenOddError::ArithmeticOverflow)?;
            Ok(0)
        }
    }

    /// Close the round and open the next one under a fresh commitment.
    pub fn advance_round(&mut self, next_commitment: [u8; 32], face: u8) -> Result<(), EvenOddError> {
        self.round_id = self
            .round_id
            .checked_add(1)
            .ok_or(EvenOddError::ArithmeticOverflow)?;
        self.total_bet_amount = 0;
        self.bet_count = 0;
        self.commitment = next_commitment;
        self.last_face = face;
        Ok(())
    }
}

account!(EvenOddAccount, Game);
