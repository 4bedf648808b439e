use evenodd_api::prelude::*;
use solana_program::log::sol_log;
use spl_associated_token_account::get_associated_token_address;
use steel::*;

use crate::utils::{check_vault_tokens, reject, transfer_into_vault};

/// Places an even/odd bet for the signer in the current round.
pub fn process_place_bet(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = PlaceBet::try_from_bytes(data)?;
    let amount = u64::from_le_bytes(args.amount);
    let is_even = args.is_even != 0;

    sol_log(&format!("PlaceBet: is_even={}, amount={}", is_even, amount));

    // Load accounts.
    // Account layout:
    // 0: signer - the player
    // 1: game - game state PDA
    // 2: bet - player bet PDA
    // 3: pass - player access pass PDA (may be empty)
    // 4: signer_tokens - player's associated token account for the game mint
    // 5: vault_tokens - vault's token account
    // 6: system_program
    // 7: token_program
    let [signer_info, game_info, bet_info, pass_info, signer_tokens_info, vault_tokens_info, system_program, token_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    game_info
        .is_writable()?
        .has_seeds(&[GAME], &evenodd_api::ID)?;
    bet_info
        .is_writable()?
        .has_seeds(&[BET, &signer_info.key.to_bytes()], &evenodd_api::ID)?;
    pass_info.has_seeds(&[PASS, &signer_info.key.to_bytes()], &evenodd_api::ID)?;
    system_program.is_program(&system_program::ID)?;
    token_program.is_program(&spl_token::ID)?;

    let game = game_info.as_account_mut::<Game>(&evenodd_api::ID)?;
    check_vault_tokens(vault_tokens_info, &game.mint)?;
    // Stakes come from the account winnings are paid back to.
    signer_tokens_info
        .is_writable()?
        .has_address(&get_associated_token_address(signer_info.key, &game.mint))?;

    // An empty pass account means the signer never held a pass.
    let pass = if pass_info.data_is_empty() {
        None
    } else {
        Some(*pass_info.as_account::<Pass>(&evenodd_api::ID)?)
    };
    let previous = if bet_info.data_is_empty() {
        None
    } else {
        Some(*bet_info.as_account::<Bet>(&evenodd_api::ID)?)
    };

    let clock = Clock::get()?;
    game.check_bet(
        signer_info.key,
        pass.as_ref(),
        previous.as_ref(),
        amount,
        clock.unix_timestamp,
    )
    .map_err(reject)?;

    // Load or create bet account.
    if bet_info.data_is_empty() {
        create_program_account::<Bet>(
            bet_info,
            system_program,
            signer_info,
            &evenodd_api::ID,
            &[BET, &signer_info.key.to_bytes()],
        )?;
    }
    let bet = bet_info.as_account_mut::<Bet>(&evenodd_api::ID)?;

    // Record the bet BEFORE pulling the stake (Check-Effects-Interactions pattern).
    game.admit_bet(bet, *signer_info.key, is_even, amount)
        .map_err(reject)?;

    transfer_into_vault(
        signer_info,
        signer_tokens_info,
        vault_tokens_info,
        token_program,
        amount,
    )?;

    BetEvent {
        authority: *signer_info.key,
        round_id: game.round_id,
        amount,
        total_bet_amount: game.total_bet_amount,
        is_even: is_even as u8,
        _padding: [0; 7],
    }
    .log();

    #[cfg(feature = "debug")]
    sol_log(&format!(
        "Round {}: {} bets, exposure {} of {}",
        game.round_id, game.bet_count, game.total_bet_amount, game.dealer_balance
    ));

    Ok(())
}
