use evenodd_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

use crate::utils::{check_vault_tokens, reject, transfer_from_vault};

/// Returns escrow tokens to the dealer.
pub fn process_withdraw(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = Withdraw::try_from_bytes(data)?;
    let amount = u64::from_le_bytes(args.amount);

    sol_log(&format!("Withdraw: amount={}", amount));

    // Load accounts.
    // Account layout:
    // 0: signer - the dealer
    // 1: game - game state PDA
    // 2: vault - vault PDA (authority for vault token account)
    // 3: vault_tokens - vault's token account
    // 4: signer_tokens - dealer's token account
    // 5: token_program
    let [signer_info, game_info, vault_info, vault_tokens_info, signer_tokens_info, token_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    game_info
        .is_writable()?
        .has_seeds(&[GAME], &evenodd_api::ID)?;
    vault_info.has_address(&VAULT_ADDRESS)?;
    signer_tokens_info.is_writable()?;
    token_program.is_program(&spl_token::ID)?;

    let game = game_info.as_account_mut::<Game>(&evenodd_api::ID)?;
    check_vault_tokens(vault_tokens_info, &game.mint)?;
    game.require_dealer(signer_info.key).map_err(reject)?;

    // Update escrow BEFORE transfer (Check-Effects-Interactions pattern).
    game.withdraw(amount).map_err(reject)?;

    transfer_from_vault(
        vault_info,
        vault_tokens_info,
        signer_tokens_info,
        token_program,
        amount,
    )?;

    sol_log(&format!("Dealer balance is now {}", game.dealer_balance));

    Ok(())
}
