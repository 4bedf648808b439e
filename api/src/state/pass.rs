use serde::{Deserialize, Serialize};
use steel::*;

use crate::error::EvenOddError;
use crate::state::pass_pda;

use super::EvenOddAccount;

/// Pass is a time-limited permission to bet. A holder keeps the account once
/// it is issued, so an expired pass stays distinguishable from no pass at all.
///
/// PDA: ["pass", holder.to_bytes()]
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Pass {
    /// The identity this pass was issued to.
    pub holder: Pubkey,

    /// Sequential pass number, starting at 1. Zero means never issued.
    pub id: u64,

    /// Unix timestamp of the last issue or extension.
    pub issued_at: i64,

    /// Unix timestamp after which the pass is no longer valid.
    pub expires_at: i64,
}

impl Pass {
    pub fn pda(&self) -> (Pubkey, u8) {
        pass_pda(self.holder)
    }

    /// Check if the pass is still valid. The expiry second itself is inclusive.
    pub fn is_valid(&self, now: i64) -> bool {
        now <= self.expires_at
    }

    pub fn is_expired(&self, now: i64) -> bool {
        !self.is_valid(now)
    }

    pub fn due_date(&self) -> i64 {
        self.expires_at
    }

    pub(crate) fn stamp(&mut self, now: i64, duration: i64) -> Result<(), EvenOddError> {
        self.issued_at = now;
        self.expires_at = now
            .checked_add(duration)
            .ok_or(EvenOddError::ArithmeticOverflow)?;
        Ok(())
    }
}

account!(EvenOddAccount, Pass);

/// Gate for betting: never-held and held-but-expired are reported apart.
pub fn check_pass(holder: &Pubkey, pass: Option<&Pass>, now: i64) -> Result<(), EvenOddError> {
    let pass = match pass {
        Some(pass) if pass.holder == *holder && pass.id != 0 => pass,
        _ => return Err(EvenOddError::AccessDenied),
    };
    if pass.is_expired(now) {
        return Err(EvenOddError::PassExpired);
    }
    Ok(())
}
