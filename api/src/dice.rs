//! Commit-reveal die roll.
//!
//! The dealer publishes `commit(seed)` before a round takes bets and reveals
//! `seed` when settling it. The face is derived from the seed and the round id,
//! so the same seed reused across rounds still yields independent rolls.

use solana_program::keccak;

use crate::consts::DIE_FACES;

/// Commitment published for a secret seed.
pub fn commit(seed: &[u8; 32]) -> [u8; 32] {
    keccak::hash(seed).to_bytes()
}

/// Check a revealed seed against its commitment.
pub fn verify_reveal(commitment: &[u8; 32], seed: &[u8; 32]) -> bool {
    commit(seed) == *commitment
}

/// Roll the die for a round. Returns a face in 1..=6.
pub fn roll_die(seed: &[u8; 32], round_id: u64) -> u8 {
    let mut hash = keccak::hashv(&[&seed[..], &round_id.to_le_bytes()[..]]).to_bytes();

    // Rejection sampling to eliminate modulo bias
    let max_valid = (u64::MAX / DIE_FACES) * DIE_FACES;
    loop {
        let sample = u64::from_le_bytes(first_word(&hash));
        if sample < max_valid {
            return (sample % DIE_FACES) as u8 + 1;
        }
        hash = keccak::hash(&hash).to_bytes();
    }
}

pub fn is_even_face(face: u8) -> bool {
    face % 2 == 0
}

fn first_word(hash: &[u8; 32]) -> [u8; 8] {
    let mut word = [0u8; 8];
    word.copy_from_slice(&hash[..8]);
    word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_reveal() {
        let seed = [7u8; 32];
        let commitment = commit(&seed);
        assert!(verify_reveal(&commitment, &seed));
        assert!(!verify_reveal(&commitment, &[8u8; 32]));
        assert_ne!(commitment, seed);
    }

    #[test]
    fn test_roll_die_range() {
        for round_id in 1..500 {
            let face = roll_die(&[42u8; 32], round_id);
            assert!((1..=6).contains(&face));
        }
    }

    #[test]
    fn test_roll_die_deterministic() {
        let seed = [3u8; 32];
        assert_eq!(roll_die(&seed, 9), roll_die(&seed, 9));
    }

    #[test]
    fn test_roll_die_covers_both_sides() {
        let seed = [11u8; 32];
        let evens = (1..200)
            .filter(|round_id| is_even_face(roll_die(&seed, *round_id)))
            .count();
        assert!(evens > 50 && evens < 150);
    }

    #[test]
    fn test_is_even_face() {
        assert!(is_even_face(2));
        assert!(is_even_face(4));
        assert!(is_even_face(6));
        assert!(!is_even_face(1));
        assert!(!is_even_face(3));
        assert!(!is_even_face(5));
    }
}
