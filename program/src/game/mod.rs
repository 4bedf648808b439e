//! Betting and settlement

mod place_bet;
mod roll;

pub use place_bet::*;
pub use roll::*;
