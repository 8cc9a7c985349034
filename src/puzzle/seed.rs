//! Deterministic seeding
//!
//! The daily seed is a stable polynomial hash of the date key, so the same
//! calendar day produces the same puzzle on every machine with no persisted
//! state. Draws come from SplitMix64, a documented deterministic generator;
//! reproducibility is the requirement here, not statistical strength.

/// Derive a 32-bit seed from a date key (`YYYY-MM-DD`)
///
/// Polynomial rolling hash (`h = h * 31 + byte`) on a wrapping 32-bit
/// accumulator, absolute value taken.
///
/// # Examples
/// ```
/// use spellbee::puzzle::date_seed;
///
/// assert_eq!(date_seed("2024-06-15"), date_seed("2024-06-15"));
/// assert_ne!(date_seed("2024-06-15"), date_seed("2024-06-16"));
/// ```
#[must_use]
pub fn date_seed(date_key: &str) -> u32 {
    let mut hash: i32 = 0;
    for b in date_key.bytes() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(b));
    }
    hash.unsigned_abs()
}

/// SplitMix64: a small, fast, reproducible PRNG
///
/// The same starting seed always yields the same draw sequence, which is the
/// property puzzle generation depends on.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create a generator with the given seed
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit draw
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Next draw in `0..bound`
    ///
    /// Modulo bias is negligible for the alphabet-sized bounds used here.
    pub fn next_below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        (self.next_u64() % bound as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_seed_is_stable() {
        assert_eq!(date_seed("2024-01-01"), date_seed("2024-01-01"));
        assert_eq!(date_seed("1999-12-31"), date_seed("1999-12-31"));
    }

    #[test]
    fn date_seed_varies_by_day() {
        assert_ne!(date_seed("2024-01-01"), date_seed("2024-01-02"));
        assert_ne!(date_seed("2024-01-01"), date_seed("2024-02-01"));
        assert_ne!(date_seed("2024-01-01"), date_seed("2025-01-01"));
    }

    #[test]
    fn splitmix_replays_identically() {
        let mut a = SplitMix64::new(42);
        let mut b = SplitMix64::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn splitmix_diverges_on_different_seeds() {
        let mut a = SplitMix64::new(1);
        let mut b = SplitMix64::new(2);
        let same = (0..16).filter(|_| a.next_u64() == b.next_u64()).count();
        assert_eq!(same, 0);
    }

    #[test]
    fn next_below_stays_in_range() {
        let mut rng = SplitMix64::new(7);
        for _ in 0..1000 {
            assert!(rng.next_below(22) < 22);
        }
    }

    #[test]
    fn next_below_covers_small_ranges() {
        let mut rng = SplitMix64::new(3);
        let mut seen = [false; 5];
        for _ in 0..200 {
            seen[rng.next_below(5)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
