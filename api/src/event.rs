use steel::*;

/// Emitted when a bet is admitted into the current round.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BetEvent {
    /// The player who placed the bet.
    pub authority: Pubkey,

    /// The round the bet belongs to.
    pub round_id: u64,

    /// The staked amount.
    pub amount: u64,

    /// The round exposure after this bet.
    pub total_bet_amount: u64,

    /// 1 for even, 0 for odd.
    pub is_even: u8,

    pub _padding: [u8; 7],
}

/// Emitted when a round is settled.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct RollEvent {
    /// The round that was settled.
    pub round_id: u64,

    /// The number of bets settled.
    pub bet_count: u64,

    /// The number of winning bets.
    pub winners: u64,

    /// The exposure of the settled round.
    pub total_bet_amount: u64,

    /// Total tokens paid out to winners (stakes plus matches).
    pub total_payout: u64,

    /// The dealer escrow after settlement.
    pub dealer_balance: u64,

    /// The die face rolled (1-6).
    pub face: u8,

    pub _padding: [u8; 7],
}

/// Emitted when a pass is issued or extended.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PassEvent {
    pub holder: Pubkey,
    pub id: u64,
    pub expires_at: i64,
}

event!(BetEvent);
event!(RollEvent);
event!(PassEvent);
