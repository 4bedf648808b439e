mod bet;
mod game;
mod pass;
mod pass_registry;

pub use bet::*;
pub use game::*;
pub use pass::*;
pub use pass_registry::*;

use crate::consts::*;

use steel::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum EvenOddAccount {
    Game = 100,
    Bet = 101,
    Pass = 102,
    PassRegistry = 103,
}

pub fn game_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GAME], &crate::ID)
}

pub fn bet_pda(authority: Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[BET, &authority.to_bytes()], &crate::ID)
}

pub fn pass_pda(holder: Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PASS, &holder.to_bytes()], &crate::ID)
}

pub fn pass_registry_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PASS_REGISTRY], &crate::ID)
}

pub fn vault_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT], &crate::ID)
}
