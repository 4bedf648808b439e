use steel::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, TryFromPrimitive)]
pub enum EvenOddInstruction {
    // Dealer
    Initialize = 0,
    Fund = 1,
    Withdraw = 2,
    Roll = 4,
    SetDealer = 7,

    // Player
    PlaceBet = 3,

    // Pass registry
    IssuePass = 5,
    ExtendPass = 6,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Initialize {
    /// Commitment to the dealer's seed for round 1.
    pub commitment: [u8; 32],
    /// Pass lifetime in seconds. Zero selects the default.
    pub pass_duration: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Fund {
    pub amount: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Withdraw {
    pub amount: [u8; 8],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct PlaceBet {
    pub amount: [u8; 8],
    pub is_even: u8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Roll {
    /// The seed committed to for the round being settled.
    pub seed: [u8; 32],
    /// Commitment for the round that opens after this one.
    pub next_commitment: [u8; 32],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct IssuePass {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ExtendPass {}

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SetDealer {
    pub new_dealer: Pubkey,
}

instruction!(EvenOddInstruction, Initialize);
instruction!(EvenOddInstruction, Fund);
instruction!(EvenOddInstruction, Withdraw);
instruction!(EvenOddInstruction, PlaceBet);
instruction!(EvenOddInstruction, Roll);
instruction!(EvenOddInstruction, IssuePass);
instruction!(EvenOddInstruction, ExtendPass);
instruction!(EvenOddInstruction, SetDealer);
