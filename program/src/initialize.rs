use evenodd_api::prelude::*;
use solana_program::log::sol_log;
use spl_associated_token_account::get_associated_token_address;
use steel::*;

use crate::utils::reject;

/// Creates the game, the pass registry and the vault token account.
/// The signer becomes both the dealer and the pass registry authority.
pub fn process_initialize(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = Initialize::try_from_bytes(data)?;
    let pass_duration = i64::from_le_bytes(args.pass_duration);

    // Load accounts.
    // Account layout:
    // 0: signer
    // 1: game - game state PDA
    // 2: pass_registry - pass registry PDA
    // 3: vault - vault PDA (owner of vault token account)
    // 4: vault_tokens - vault's token account
    // 5: mint - wager token mint
    // 6: system_program
    // 7: token_program
    // 8: associated_token_program
    let [signer_info, game_info, registry_info, vault_info, vault_tokens_info, mint_info, system_program, token_program, associated_token_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    game_info
        .is_empty()?
        .is_writable()?
        .has_seeds(&[GAME], &evenodd_api::ID)?;
    registry_info
        .is_empty()?
        .is_writable()?
        .has_seeds(&[PASS_REGISTRY], &evenodd_api::ID)?;
    vault_info.has_address(&VAULT_ADDRESS)?;
    vault_tokens_info
        .is_writable()?
        .has_address(&get_associated_token_address(&VAULT_ADDRESS, mint_info.key))?;
    system_program.is_program(&system_program::ID)?;
    token_program.is_program(&spl_token::ID)?;
    associated_token_program.is_program(&spl_associated_token_account::ID)?;

    if mint_info.owner != &spl_token::ID {
        sol_log("Mint account not owned by token program");
        return Err(ProgramError::IncorrectProgramId);
    }

    sol_log("Initializing even/odd game...");

    // Create Game account
    create_program_account::<Game>(
        game_info,
        system_program,
        signer_info,
        &evenodd_api::ID,
        &[GAME],
    )?;
    let game = game_info.as_account_mut::<Game>(&evenodd_api::ID)?;
    game.open(*signer_info.key, *mint_info.key, args.commitment)
        .map_err(reject)?;
    sol_log(&format!("Game created at {}", game_info.key));

    // Create PassRegistry account
    create_program_account::<PassRegistry>(
        registry_info,
        system_program,
        signer_info,
        &evenodd_api::ID,
        &[PASS_REGISTRY],
    )?;
    let registry = registry_info.as_account_mut::<PassRegistry>(&evenodd_api::ID)?;
    registry.open(*signer_info.key, pass_duration);
    sol_log(&format!(
        "Pass registry created at {} (duration {}s)",
        registry_info.key, registry.duration
    ));

    // Create vault's token account if it doesn't exist.
    if vault_tokens_info.data_is_empty() {
        create_associated_token_account(
            signer_info,
            vault_info,
            vault_tokens_info,
            mint_info,
            system_program,
            token_program,
            associated_token_program,
        )?;
        sol_log("Created vault token account");
    }

    sol_log(&format!("Round {} open, dealer {}", game.round_id, game.dealer));

    Ok(())
}
