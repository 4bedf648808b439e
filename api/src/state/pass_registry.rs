use serde::{Deserialize, Serialize};
use steel::*;

use crate::consts::PASS_DURATION;
use crate::error::EvenOddError;
use crate::state::pass_registry_pda;

use super::{EvenOddAccount, Pass};

/// PassRegistry is a singleton that issues and extends access passes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct PassRegistry {
    /// The only key allowed to issue or extend passes.
    pub authority: Pubkey,

    /// The number of passes ever issued.
    pub total_supply: u64,

    /// Pass lifetime in seconds.
    pub duration: i64,
}

impl PassRegistry {
    pub fn pda() -> (Pubkey, u8) {
        pass_registry_pda()
    }

    pub fn open(&mut self, authority: Pubkey, duration: i64) {
        self.authority = authority;
        self.total_supply = 0;
        self.duration = if duration > 0 { duration } else { PASS_DURATION };
    }

    pub fn require_authority(&self, signer: &Pubkey) -> Result<(), EvenOddError> {
        if self.authority != *signer {
            return Err(EvenOddError::Unauthorized);
        }
        Ok(())
    }

    /// Issue a pass into `pass`. A zeroed record gets the next id; an expired
    /// one keeps its id and is re-stamped.
    pub fn issue(&mut self, pass: &mut Pass, holder: Pubkey, now: i64) -> Result<(), EvenOddError> {
        if pass.id != 0 && pass.is_valid(now) {
            return Err(EvenOddError::PassAlreadyHeld);
        }
        if pass.id == 0 {
            self.total_supply = self
                .total_supply
                .checked_add(1)
                .ok_or(EvenOddError::ArithmeticOverflow)?;
            pass.id = self.total_supply;
        }
        pass.holder = holder;
        pass.stamp(now, self.duration)
    }

    /// Extend an expired pass by one full duration from now.
    pub fn extend(&self, pass: Option<&mut Pass>, now: i64) -> Result<(), EvenOddError> {
        let pass = match pass {
            Some(pass) if pass.id != 0 => pass,
            _ => return Err(EvenOddError::PassNotHeld),
        };
        if pass.is_valid(now) {
            return Err(EvenOddError::PassNotExpired);
        }
        pass.stamp(now, self.duration)
    }
}

account!(EvenOddAccount, PassRegistry);

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn registry() -> PassRegistry {
        let mut registry = PassRegistry::zeroed();
        registry.open(Pubkey::new_unique(), 0);
        registry
    }

    #[test]
    fn test_open_defaults_duration() {
        let registry = registry();
        assert_eq!(registry.duration, PASS_DURATION);
        assert_eq!(registry.total_supply, 0);

        let mut custom = PassRegistry::zeroed();
        custom.open(Pubkey::new_unique(), 3_600);
        assert_eq!(custom.duration, 3_600);
    }

    #[test]
    fn test_issue_assigns_sequential_ids() {
        let mut registry = registry();
        let mut first = Pass::zeroed();
        let mut second = Pass::zeroed();
        registry.issue(&mut first, Pubkey::new_unique(), NOW).unwrap();
        registry.issue(&mut second, Pubkey::new_unique(), NOW).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(registry.total_supply, 2);
        assert_eq!(first.issued_at, NOW);
        assert_eq!(first.due_date(), NOW + PASS_DURATION);
    }

    #[test]
    fn test_issue_rejects_valid_pass() {
        let mut registry = registry();
        let holder = Pubkey::new_unique();
        let mut pass = Pass::zeroed();
        registry.issue(&mut pass, holder, NOW).unwrap();
        assert_eq!(
            registry.issue(&mut pass, holder, NOW + 10),
            Err(EvenOddError::PassAlreadyHeld)
        );
        assert_eq!(registry.total_supply, 1);
    }

    #[test]
    fn test_issue_restamps_expired_pass() {
        let mut registry = registry();
        let holder = Pubkey::new_unique();
        let mut pass = Pass::zeroed();
        registry.issue(&mut pass, holder, NOW).unwrap();

        let later = NOW + PASS_DURATION + 1_999;
        registry.issue(&mut pass, holder, later).unwrap();
        assert_eq!(pass.id, 1);
        assert_eq!(registry.total_supply, 1);
        assert_eq!(pass.due_date(), later + PASS_DURATION);
    }

    #[test]
    fn test_extend() {
        let mut registry = registry();
        assert_eq!(registry.extend(None, NOW), Err(EvenOddError::PassNotHeld));

        let mut pass = Pass::zeroed();
        registry.issue(&mut pass, Pubkey::new_unique(), NOW).unwrap();
        assert_eq!(
            registry.extend(Some(&mut pass), NOW + PASS_DURATION),
            Err(EvenOddError::PassNotExpired)
        );

        let later = NOW + PASS_DURATION + 1_999;
        registry.extend(Some(&mut pass), later).unwrap();
        assert_eq!(pass.due_date(), later + PASS_DURATION);
        assert!(pass.is_valid(later));
    }

    #[test]
    fn test_require_authority() {
        let registry = registry();
        assert_eq!(
            registry.require_authority(&Pubkey::new_unique()),
            Err(EvenOddError::Unauthorized)
        );
        assert!(registry.require_authority(&registry.authority).is_ok());
    }
}
