use evenodd_api::prelude::*;
use solana_program::log::sol_log;
use solana_program::program::{invoke, invoke_signed};
use spl_associated_token_account::get_associated_token_address;
use steel::*;

/// Log a game error and convert it for the runtime.
pub fn reject(err: EvenOddError) -> ProgramError {
    sol_log(&err.to_string());
    err.into()
}

/// The vault token account must be the vault's associated account for the game mint.
pub fn check_vault_tokens(vault_tokens_info: &AccountInfo<'_>, mint: &Pubkey) -> ProgramResult {
    vault_tokens_info
        .is_writable()?
        .has_address(&get_associated_token_address(&VAULT_ADDRESS, mint))?;
    Ok(())
}

/// Split the trailing `Roll` accounts into (bet, player token account) pairs.
pub fn settlement_pairs<'a, 'info>(
    accounts: &'a [AccountInfo<'info>],
) -> Result<Vec<(&'a AccountInfo<'info>, &'a AccountInfo<'info>)>, EvenOddError> {
    if accounts.len() % 2 != 0 {
        return Err(EvenOddError::IncompleteSettlement);
    }
    Ok(accounts
        .chunks_exact(2)
        .map(|pair| (&pair[0], &pair[1]))
        .collect())
}

/// Payouts go to the bettor's associated token account for the game mint.
/// Only a winner's account is written.
pub fn check_payout_tokens(
    player_tokens_info: &AccountInfo<'_>,
    authority: &Pubkey,
    mint: &Pubkey,
    payout: u64,
) -> ProgramResult {
    player_tokens_info.has_address(&get_associated_token_address(authority, mint))?;
    if payout > 0 {
        player_tokens_info.is_writable()?;
    }
    Ok(())
}

/// Pull tokens the signer controls into the vault.
pub fn transfer_into_vault<'a>(
    authority_info: &AccountInfo<'a>,
    from_info: &AccountInfo<'a>,
    vault_tokens_info: &AccountInfo<'a>,
    token_program: &AccountInfo<'a>,
    amount: u64,
) -> ProgramResult {
    invoke(
        &spl_token::instruction::transfer(
            &spl_token::ID,
            from_info.key,
            vault_tokens_info.key,
            authority_info.key,
            &[],
            amount,
        )?,
        &[
            from_info.clone(),
            vault_tokens_info.clone(),
            authority_info.clone(),
            token_program.clone(),
        ],
    )
}

/// Push tokens out of the vault. The vault PDA is the authority for the
/// vault token account.
pub fn transfer_from_vault<'a>(
    vault_info: &AccountInfo<'a>,
    vault_tokens_info: &AccountInfo<'a>,
    to_info: &AccountInfo<'a>,
    token_program: &AccountInfo<'a>,
    amount: u64,
) -> ProgramResult {
    invoke_signed(
        &spl_token::instruction::transfer(
            &spl_token::ID,
            vault_tokens_info.key,
            to_info.key,
            vault_info.key,
            &[],
            amount,
        )?,
        &[
            vault_tokens_info.clone(),
            to_info.clone(),
            vault_info.clone(),
            token_program.clone(),
        ],
        &[&[VAULT, &[VAULT_BUMP]]],
    )
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Backing storage for an `AccountInfo` in processor tests.
    pub(crate) struct Slot {
        pub key: Pubkey,
        pub owner: Pubkey,
        pub lamports: u64,
        pub data: Vec<u8>,
        pub signer: bool,
        pub writable: bool,
        pub executable: bool,
    }

    impl Slot {
        pub fn new(key: Pubkey) -> Self {
            Self {
                key,
                owner: system_program::ID,
                lamports: 0,
                data: vec![],
                signer: false,
                writable: false,
                executable: false,
            }
        }

        pub fn writable(mut self) -> Self {
            self.writable = true;
            self
        }

        pub fn signer(mut self) -> Self {
            self.signer = true;
            self
        }

        pub fn program(mut self) -> Self {
            self.executable = true;
            self
        }

        pub fn owned_by(mut self, owner: Pubkey, data: Vec<u8>) -> Self {
            self.owner = owner;
            self.data = data;
            self
        }

        pub fn info(&mut self) -> AccountInfo<'_> {
            AccountInfo::new(
                &self.key,
                self.signer,
                self.writable,
                &mut self.lamports,
                &mut self.data,
                &self.owner,
                self.executable,
                0,
            )
        }
    }

    #[test]
    fn test_settlement_pairs() {
        let mut slots: Vec<Slot> = (0..5)
            .map(|_| Slot::new(Pubkey::new_unique()).writable())
            .collect();
        let keys: Vec<Pubkey> = slots.iter().map(|slot| slot.key).collect();
        let infos: Vec<AccountInfo> = slots.iter_mut().map(|slot| slot.info()).collect();

        assert_eq!(
            settlement_pairs(&infos).err(),
            Some(EvenOddError::IncompleteSettlement)
        );
        assert_eq!(
            settlement_pairs(&infos[..1]).err(),
            Some(EvenOddError::IncompleteSettlement)
        );
        assert!(settlement_pairs(&[]).unwrap().is_empty());

        let pairs = settlement_pairs(&infos[..4]).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(*pairs[0].0.key, keys[0]);
        assert_eq!(*pairs[0].1.key, keys[1]);
        assert_eq!(*pairs[1].0.key, keys[2]);
        assert_eq!(*pairs[1].1.key, keys[3]);
    }

    #[test]
    fn test_check_payout_tokens() {
        let authority = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let ata = get_associated_token_address(&authority, &mint);

        // A loser's account only has to be the right address.
        let mut readonly = Slot::new(ata);
        let info = readonly.info();
        assert!(check_payout_tokens(&info, &authority, &mint, 0).is_ok());
        assert!(check_payout_tokens(&info, &authority, &mint, 2).is_err());

        let mut writable = Slot::new(ata).writable();
        let info = writable.info();
        assert!(check_payout_tokens(&info, &authority, &mint, 2).is_ok());

        // Any other token account the player owns is refused.
        let mut other = Slot::new(Pubkey::new_unique()).writable();
        let info = other.info();
        assert!(check_payout_tokens(&info, &authority, &mint, 0).is_err());
        assert!(check_payout_tokens(&info, &authority, &mint, 2).is_err());
    }

    #[test]
    fn test_reject_maps_error_code() {
        assert_eq!(
            reject(EvenOddError::DuplicateBet),
            ProgramError::Custom(1003)
        );
        assert_eq!(
            reject(EvenOddError::ExceedsDealerLiquidity),
            ProgramError::Custom(1002)
        );
    }
}
