//! Dealer escrow management

mod fund;
mod withdraw;

pub use fund::*;
pub use withdraw::*;
