use spl_associated_token_account::get_associated_token_address;
use steel::*;

use crate::{
    consts::*,
    instruction::*,
    state::{bet_pda, pass_pda},
};

pub fn initialize(signer: Pubkey, mint: Pubkey, commitment: [u8; 32], pass_duration: i64) -> Instruction {
    let vault_tokens = get_associated_token_address(&VAULT_ADDRESS, &mint);
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(GAME_ADDRESS, false),
            AccountMeta::new(PASS_REGISTRY_ADDRESS, false),
            AccountMeta::new_readonly(VAULT_ADDRESS, false),
            AccountMeta::new(vault_tokens, false),
            AccountMeta::new_readonly(mint, false),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(spl_token::ID, false),
            AccountMeta::new_readonly(spl_associated_token_account::ID, false),
        ],
        data: Initialize {
            commitment,
            pass_duration: pass_duration.to_le_bytes(),
        }
        .to_bytes(),
    }
}

pub fn fund(signer: Pubkey, mint: Pubkey, amount: u64) -> Instruction {
    let signer_tokens = get_associated_token_address(&signer, &mint);
    let vault_tokens = get_associated_token_address(&VAULT_ADDRESS, &mint);
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(GAME_ADDRESS, false),
            AccountMeta::new(signer_tokens, false),
            AccountMeta::new(vault_tokens, false),
            AccountMeta::new_readonly(spl_token::ID, false),
        ],
        data: Fund {
            amount: amount.to_le_bytes(),
        }
        .to_bytes(),
    }
}

pub fn withdraw(signer: Pubkey, mint: Pubkey, amount: u64) -> Instruction {
    let signer_tokens = get_associated_token_address(&signer, &mint);
    let vault_tokens = get_associated_token_address(&VAULT_ADDRESS, &mint);
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(GAME_ADDRESS, false),
            AccountMeta::new_readonly(VAULT_ADDRESS, false),
            AccountMeta::new(vault_tokens, false),
            AccountMeta::new(signer_tokens, false),
            AccountMeta::new_readonly(spl_token::ID, false),
        ],
        data: Withdraw {
            amount: amount.to_le_bytes(),
        }
        .to_bytes(),
    }
}

pub fn place_bet(signer: Pubkey, mint: Pubkey, is_even: bool, amount: u64) -> Instruction {
    let signer_tokens = get_associated_token_address(&signer, &mint);
    let vault_tokens = get_associated_token_address(&VAULT_ADDRESS, &mint);
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(GAME_ADDRESS, false),
            AccountMeta::new(bet_pda(signer).0, false),
            AccountMeta::new_readonly(pass_pda(signer).0, false),
            AccountMeta::new(signer_tokens, false),
            AccountMeta::new(vault_tokens, false),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(spl_token::ID, false),
        ],
        data: PlaceBet {
            amount: amount.to_le_bytes(),
            is_even: is_even as u8,
        }
        .to_bytes(),
    }
}

/// Settle the round. `players` must list every player with a bet in the
/// current round, at most `MAX_BETS_PER_ROUND` of them.
///
/// Winners are paid into their associated token account, which must exist
/// when the roll lands. If a player may have closed theirs, send
/// `create_associated_token_account_idempotent` for them in an earlier
/// transaction; the roll itself has no room to spare at a full round.
pub fn roll(
    signer: Pubkey,
    mint: Pubkey,
    seed: [u8; 32],
    next_commitment: [u8; 32],
    players: &[Pubkey],
) -> Instruction {
    let vault_tokens = get_associated_token_address(&VAULT_ADDRESS, &mint);
    let mut accounts = vec![
        AccountMeta::new(signer, true),
        AccountMeta::new(GAME_ADDRESS, false),
        AccountMeta::new_readonly(VAULT_ADDRESS, false),
        AccountMeta::new(vault_tokens, false),
        AccountMeta::new_readonly(spl_token::ID, false),
    ];
    for player in players {
        accounts.push(AccountMeta::new(bet_pda(*player).0, false));
        accounts.push(AccountMeta::new(get_associated_token_address(player, &mint), false));
    }
    Instruction {
        program_id: crate::ID,
        accounts,
        data: Roll {
            seed,
            next_commitment,
        }
        .to_bytes(),
    }
}

pub fn issue_pass(signer: Pubkey, holder: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(PASS_REGISTRY_ADDRESS, false),
            AccountMeta::new_readonly(holder, false),
            AccountMeta::new(pass_pda(holder).0, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: IssuePass {}.to_bytes(),
    }
}

pub fn extend_pass(signer: Pubkey, holder: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(PASS_REGISTRY_ADDRESS, false),
            AccountMeta::new_readonly(holder, false),
            AccountMeta::new(pass_pda(holder).0, false),
        ],
        data: ExtendPass {}.to_bytes(),
    }
}

pub fn set_dealer(signer: Pubkey, new_dealer: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(GAME_ADDRESS, false),
        ],
        data: SetDealer { new_dealer }.to_bytes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{game_pda, pass_registry_pda, vault_pda};

    #[test]
    fn test_const_addresses_match_pdas() {
        assert_eq!(GAME_ADDRESS, game_pda().0);
        assert_eq!(PASS_REGISTRY_ADDRESS, pass_registry_pda().0);
        assert_eq!(VAULT_ADDRESS, vault_pda().0);
        assert_eq!(VAULT_BUMP, vault_pda().1);
    }

    #[test]
    fn test_place_bet_data() {
        let signer = Pubkey::new_unique();
        let ix = place_bet(signer, Pubkey::new_unique(), true, 500);
        assert_eq!(ix.data[0], EvenOddInstruction::PlaceBet as u8);
        assert_eq!(&ix.data[1..9], &500u64.to_le_bytes());
        assert_eq!(ix.data[9], 1);
        assert_eq!(ix.accounts[2].pubkey, bet_pda(signer).0);
        assert_eq!(ix.accounts[3].pubkey, pass_pda(signer).0);
        assert!(ix.accounts[0].is_signer);
    }

    #[test]
    fn test_roll_lists_every_player() {
        let mint = Pubkey::new_unique();
        let players = [Pubkey::new_unique(), Pubkey::new_unique()];
        let ix = roll(Pubkey::new_unique(), mint, [1; 32], [2; 32], &players);
        assert_eq!(ix.accounts.len(), 5 + 2 * players.len());
        assert_eq!(ix.accounts[5].pubkey, bet_pda(players[0]).0);
        assert_eq!(
            ix.accounts[8].pubkey,
            get_associated_token_address(&players[1], &mint)
        );
        assert_eq!(ix.data[0], EvenOddInstruction::Roll as u8);
        assert_eq!(ix.data.len(), 1 + 64);
    }

    #[test]
    fn test_full_round_roll_fits_one_transaction() {
        // Legacy packet limit, one signature, room for a compute budget instruction.
        const PACKET: usize = 1232;
        const SIGNATURES: usize = 1 + 64;
        const COMPUTE_BUDGET: usize = 40;

        let dealer = Pubkey::new_unique();
        let players: Vec<Pubkey> = (0..MAX_BETS_PER_ROUND).map(|_| Pubkey::new_unique()).collect();
        let ix = roll(dealer, Pubkey::new_unique(), [1; 32], [2; 32], &players);
        let message = solana_program::message::Message::new(&[ix], Some(&dealer));
        assert!(message.account_keys.len() <= 64);
        assert!(SIGNATURES + message.serialize().len() + COMPUTE_BUDGET <= PACKET);
    }
}
