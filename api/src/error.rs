use steel::*;

/// Even/odd program error codes
/// Range 1000-1999: Game errors
/// Range 2000-2999: Validation errors
/// Range 3000-3999: System errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u32)]
pub enum EvenOddError {
    // Game Errors (1000-1999)
    #[error("No one placed a bet this round")]
    NoActiveBets = 1001,

    #[error("Total bet amount exceeds dealer balance")]
    ExceedsDealerLiquidity = 1002,

    #[error("Already bet this round")]
    DuplicateBet = 1003,

    #[error("Amount exceeds balance")]
    InsufficientBalance = 1004,

    #[error("Every active bet of the round must be settled together")]
    IncompleteSettlement = 1005,

    #[error("Bet does not belong to the current round")]
    StaleBet = 1006,

    #[error("Round has no room for another bet")]
    RoundFull = 1007,

    // Validation Errors (2000-2999)
    #[error("Signer is not authorized for this operation")]
    Unauthorized = 2001,

    #[error("An access pass is required to play")]
    AccessDenied = 2002,

    #[error("Access pass is expired")]
    PassExpired = 2003,

    #[error("Amount must be greater than zero")]
    ZeroAmount = 2004,

    #[error("Revealed seed does not match the round commitment")]
    InvalidReveal = 2005,

    #[error("Commitment must not be empty")]
    InvalidCommitment = 2006,

    #[error("Holder already has a valid access pass")]
    PassAlreadyHeld = 2007,

    #[error("Holder does not have an access pass")]
    PassNotHeld = 2008,

    #[error("Access pass is not expired")]
    PassNotExpired = 2009,

    // System Errors (3000-3999)
    #[error("Arithmetic operation overflowed")]
    ArithmeticOverflow = 3001,
}

error!(EvenOddError);
