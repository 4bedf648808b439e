use evenodd_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

use crate::utils::reject;

/// Extends an expired access pass by one registry duration.
pub fn process_extend_pass(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    let [signer_info, registry_info, holder_info, pass_info] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    registry_info.has_seeds(&[PASS_REGISTRY], &evenodd_api::ID)?;
    pass_info
        .is_writable()?
        .has_seeds(&[PASS, &holder_info.key.to_bytes()], &evenodd_api::ID)?;

    let registry = registry_info.as_account::<PassRegistry>(&evenodd_api::ID)?;
    registry.require_authority(signer_info.key).map_err(reject)?;

    let pass = if pass_info.data_is_empty() {
        None
    } else {
        Some(pass_info.as_account_mut::<Pass>(&evenodd_api::ID)?)
    };

    let clock = Clock::get()?;
    registry
        .extend(pass, clock.unix_timestamp)
        .map_err(reject)?;

    let pass = pass_info.as_account::<Pass>(&evenodd_api::ID)?;
    PassEvent {
        holder: pass.holder,
        id: pass.id,
        expires_at: pass.expires_at,
    }
    .log();

    sol_log(&format!("Pass {} extended until {}", pass.id, pass.expires_at));

    Ok(())
}
