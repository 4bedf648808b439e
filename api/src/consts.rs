use const_crypto::ed25519;
use solana_program::pubkey::Pubkey;

/// The duration of one minute, in seconds.
pub const ONE_MINUTE: i64 = 60;

/// The duration of one hour, in seconds.
pub const ONE_HOUR: i64 = 60 * ONE_MINUTE;

/// The duration of one day, in seconds.
pub const ONE_DAY: i64 = 24 * ONE_HOUR;

/// How long a freshly issued or extended access pass stays valid.
pub const PASS_DURATION: i64 = 30 * ONE_DAY;

/// The id of the first round after initialization.
pub const FIRST_ROUND_ID: u64 = 1;

/// The number of faces on the die.
pub const DIE_FACES: u64 = 6;

/// Winners get their stake back plus an equal match from the dealer.
pub const PAYOUT_MULTIPLIER: u64 = 2;

/// The most bets one round accepts. Settlement takes every bet of the round
/// in a single `Roll`, which carries a (bet, token account) pair per bet and
/// must still fit a legacy transaction next to a compute budget instruction.
pub const MAX_BETS_PER_ROUND: u64 = 12;

/// The seed of the game account PDA.
pub const GAME: &[u8] = b"game";

/// The seed of the bet account PDA.
pub const BET: &[u8] = b"bet";

/// The seed of the access pass account PDA.
pub const PASS: &[u8] = b"pass";

/// The seed of the pass registry account PDA.
pub const PASS_REGISTRY: &[u8] = b"pass_registry";

/// The seed of the vault PDA (owner of the vault token account).
pub const VAULT: &[u8] = b"vault";

/// Program id for const pda derivations
const PROGRAM_ID: [u8; 32] = unsafe { *(&crate::id() as *const Pubkey as *const [u8; 32]) };

/// The address of the game account.
pub const GAME_ADDRESS: Pubkey =
    Pubkey::new_from_array(ed25519::derive_program_address(&[GAME], &PROGRAM_ID).0);

/// The address of the pass registry account.
pub const PASS_REGISTRY_ADDRESS: Pubkey =
    Pubkey::new_from_array(ed25519::derive_program_address(&[PASS_REGISTRY], &PROGRAM_ID).0);

/// The address of the vault PDA.
pub const VAULT_ADDRESS: Pubkey =
    Pubkey::new_from_array(ed25519::derive_program_address(&[VAULT], &PROGRAM_ID).0);

/// The bump of the vault PDA.
pub const VAULT_BUMP: u8 = ed25519::derive_program_address(&[VAULT], &PROGRAM_ID).1;
