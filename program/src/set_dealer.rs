use evenodd_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

use crate::utils::reject;

/// Hands the dealer role to a new key.
pub fn process_set_dealer(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse args.
    let args = SetDealer::try_from_bytes(data)?;

    // Load accounts.
    let [signer_info, game_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };
    signer_info.is_signer()?;
    game_info
        .is_writable()?
        .has_seeds(&[GAME], &evenodd_api::ID)?;

    let game = game_info.as_account_mut::<Game>(&evenodd_api::ID)?;
    game.require_dealer(signer_info.key).map_err(reject)?;

    game.dealer = args.new_dealer;

    sol_log(&format!("Dealer is now {}", game.dealer));

    Ok(())
}
