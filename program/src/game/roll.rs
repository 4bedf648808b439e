use evenodd_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

use crate::utils::{
    check_payout_tokens, check_vault_tokens, reject, settlement_pairs, transfer_from_vault,
};

/// Settles every bet of the current round against the revealed die roll and
/// opens the next round.
pub fn process_roll(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = Roll::try_from_bytes(data)?;

    // Load accounts.
    // Account layout:
    // 0: signer - the dealer
    // 1: game - game state PDA
    // 2: vault - vault PDA (authority for vault token account)
    // 3: vault_tokens - vault's token account
    // 4: token_program
    // 5..: (bet PDA, player token account) for every active bet; the token
    //      account is the player's associated token account and must be
    //      writable for winners
    let [signer_info, game_info, vault_info, vault_tokens_info, token_program, bet_accounts @ ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    game_info
        .is_writable()?
        .has_seeds(&[GAME], &evenodd_api::ID)?;
    vault_info.has_address(&VAULT_ADDRESS)?;
    token_program.is_program(&spl_token::ID)?;

    let game = game_info.as_account_mut::<Game>(&evenodd_api::ID)?;
    check_vault_tokens(vault_tokens_info, &game.mint)?;
    game.require_dealer(signer_info.key).map_err(reject)?;

    let pairs = settlement_pairs(bet_accounts).map_err(reject)?;
    game.check_roll(&args.seed, &args.next_commitment, pairs.len() as u64)
        .map_err(reject)?;

    let round_id = game.round_id;
    let bet_count = game.bet_count;
    let total_bet_amount = game.total_bet_amount;
    let face = roll_die(&args.seed, round_id);
    let outcome_is_even = is_even_face(face);

    sol_log(&format!(
        "Roll: round={}, face={}, even={}",
        round_id, face, outcome_is_even
    ));

    // Settle every bet before any tokens leave the vault.
    let mut payouts = Vec::with_capacity(pairs.len());
    for (bet_info, player_tokens_info) in pairs {
        bet_info.is_writable()?;
        let bet = bet_info.as_account_mut::<Bet>(&evenodd_api::ID)?;
        bet_info.has_seeds(&[BET, &bet.authority.to_bytes()], &evenodd_api::ID)?;

        let payout = game.settle_bet(bet, outcome_is_even).map_err(reject)?;
        check_payout_tokens(player_tokens_info, &bet.authority, &game.mint, payout)?;

        #[cfg(feature = "debug")]
        sol_log(&format!(
            "Bet {}: amount={}, payout={}",
            bet.authority, bet.amount, payout
        ));

        if payout > 0 {
            payouts.push((player_tokens_info, payout));
        }
    }

    game.advance_round(args.next_commitment, face)
        .map_err(reject)?;

    // Pay winners.
    let mut total_payout: u64 = 0;
    for (player_tokens_info, payout) in payouts.iter() {
        transfer_from_vault(
            vault_info,
            vault_tokens_info,
            player_tokens_info,
            token_program,
            *payout,
        )?;
        total_payout = total_payout
            .checked_add(*payout)
            .ok_or(ProgramError::ArithmeticOverflow)?;
    }

    RollEvent {
        round_id,
        bet_count,
        winners: payouts.len() as u64,
        total_bet_amount,
        total_payout,
        dealer_balance: game.dealer_balance,
        face,
        _padding: [0; 7],
    }
    .log();

    sol_log(&format!(
        "Round {} settled: {} winners paid {}, dealer balance {}. Round {} open",
        round_id,
        payouts.len(),
        total_payout,
        game.dealer_balance,
        game.round_id
    ));

    Ok(())
}

#[cfg(test)]
mod tests {
    use spl_associated_token_account::get_associated_token_address;

    use super::*;
    use crate::utils::tests::Slot;

    const SEED: [u8; 32] = [7; 32];

    fn game_data(dealer: Pubkey, mint: Pubkey) -> Vec<u8> {
        let mut game = Game::zeroed();
        game.open(dealer, mint, commit(&SEED)).unwrap();
        game.fund(10).unwrap();
        game.total_bet_amount = 1;
        game.bet_count = 1;
        let mut data = vec![0; 8];
        data[0] = EvenOddAccount::Game as u8;
        data.extend_from_slice(bytemuck::bytes_of(&game));
        data
    }

    fn roll_data() -> Vec<u8> {
        bytemuck::bytes_of(&Roll {
            seed: SEED,
            next_commitment: commit(&[8; 32]),
        })
        .to_vec()
    }

    /// Account slots for a roll signed by `signer` against a game run by `dealer`.
    fn roll_slots(signer: Pubkey, dealer: Pubkey) -> Vec<Slot> {
        let mint = Pubkey::new_unique();
        vec![
            Slot::new(signer).signer().writable(),
            Slot::new(GAME_ADDRESS)
                .writable()
                .owned_by(evenodd_api::ID, game_data(dealer, mint)),
            Slot::new(VAULT_ADDRESS),
            Slot::new(get_associated_token_address(&VAULT_ADDRESS, &mint)).writable(),
            Slot::new(spl_token::ID).program(),
        ]
    }

    fn round_id(slots: &[Slot]) -> u64 {
        bytemuck::from_bytes::<Game>(&slots[1].data[8..]).round_id
    }

    #[test]
    fn test_roll_requires_dealer() {
        let dealer = Pubkey::new_unique();
        let mut slots = roll_slots(Pubkey::new_unique(), dealer);
        let infos: Vec<AccountInfo> = slots.iter_mut().map(|slot| slot.info()).collect();
        assert_eq!(
            process_roll(&infos, &roll_data()),
            Err(ProgramError::Custom(EvenOddError::Unauthorized as u32))
        );
        drop(infos);
        assert_eq!(round_id(&slots), FIRST_ROUND_ID);
    }

    #[test]
    fn test_roll_rejects_unpaired_bet_accounts() {
        let dealer = Pubkey::new_unique();
        let mut slots = roll_slots(dealer, dealer);
        slots.push(Slot::new(Pubkey::new_unique()).writable());
        let infos: Vec<AccountInfo> = slots.iter_mut().map(|slot| slot.info()).collect();
        assert_eq!(
            process_roll(&infos, &roll_data()),
            Err(ProgramError::Custom(EvenOddError::IncompleteSettlement as u32))
        );
    }

    #[test]
    fn test_roll_rejects_missing_bets() {
        let dealer = Pubkey::new_unique();
        let mut slots = roll_slots(dealer, dealer);
        let infos: Vec<AccountInfo> = slots.iter_mut().map(|slot| slot.info()).collect();
        assert_eq!(
            process_roll(&infos, &roll_data()),
            Err(ProgramError::Custom(EvenOddError::IncompleteSettlement as u32))
        );
    }
}
