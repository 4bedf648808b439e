use evenodd_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

use crate::utils::reject;

/// Issues an access pass to a holder, or re-issues an expired one.
pub fn process_issue_pass(accounts: &[AccountInfo<'_>], _data: &[u8]) -> ProgramResult {
    // Load accounts.
    // Account layout:
    // 0: signer - the registry authority (pays rent)
    // 1: pass_registry - registry PDA
    // 2: holder - the identity receiving the pass
    // 3: pass - holder's pass PDA
    // 4: system_program
    let [signer_info, registry_info, holder_info, pass_info, system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    registry_info
        .is_writable()?
        .has_seeds(&[PASS_REGISTRY], &evenodd_api::ID)?;
    pass_info
        .is_writable()?
        .has_seeds(&[PASS, &holder_info.key.to_bytes()], &evenodd_api::ID)?;
    system_program.is_program(&system_program::ID)?;

    let registry = registry_info.as_account_mut::<PassRegistry>(&evenodd_api::ID)?;
    registry.require_authority(signer_info.key).map_err(reject)?;

    if pass_info.data_is_empty() {
        create_program_account::<Pass>(
            pass_info,
            system_program,
            signer_info,
            &evenodd_api::ID,
            &[PASS, &holder_info.key.to_bytes()],
        )?;
    }
    let pass = pass_info.as_account_mut::<Pass>(&evenodd_api::ID)?;

    let clock = Clock::get()?;
    registry
        .issue(pass, *holder_info.key, clock.unix_timestamp)
        .map_err(reject)?;

    PassEvent {
        holder: pass.holder,
        id: pass.id,
        expires_at: pass.expires_at,
    }
    .log();

    sol_log(&format!(
        "Pass {} issued to {}, valid until {}",
        pass.id, pass.holder, pass.expires_at
    ));

    Ok(())
}
