//! Deterministic sequence behind the word of the day
//!
//! A linear congruential generator with modulus 2^31, multiplier 1103515245
//! and increment 12345. Every step is evaluated in IEEE-754 double precision:
//! the product is rounded before the modulus is taken, and the published
//! daily words depend on that rounding.

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

const MODULUS: f64 = 2_147_483_648.0;
const MULTIPLIER: f64 = 1_103_515_245.0;
const INCREMENT: f64 = 12_345.0;

/// Source of uniform indexes used to pick vocabulary entries
pub trait RandomSource {
    /// Index in `0..len`; `len` must be non-zero
    fn next_index(&mut self, len: usize) -> usize;
}

/// Seeded linear congruential generator
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceGenerator {
    current: f64,
}

impl SequenceGenerator {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            current: seed as f64,
        }
    }

    /// Generator seeded from a calendar date, see [`day_seed`]
    #[must_use]
    pub fn for_day(date: NaiveDate) -> Self {
        Self::new(day_seed(date))
    }

    /// Advance the stream and return the new state (always below 2^31)
    pub fn next_value(&mut self) -> u32 {
        self.current = (MULTIPLIER * self.current + INCREMENT) % MODULUS;
        self.current as u32
    }

    /// Advance the stream and reduce it modulo `max`
    ///
    /// A `max` of zero returns the raw state.
    pub fn next_below(&mut self, max: usize) -> usize {
        let value = self.next_value() as usize;
        if max == 0 { value } else { value % max }
    }
}

impl RandomSource for SequenceGenerator {
    fn next_index(&mut self, len: usize) -> usize {
        self.next_below(len)
    }
}

impl RandomSource for ThreadRng {
    fn next_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

impl RandomSource for StdRng {
    fn next_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Seed for a calendar date
///
/// Year, zero-based month and day are concatenated as decimal digits without
/// padding, and the resulting integer is squared. 18 October 2026 gives
/// `2026918²`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_daily::core::day_seed;
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// assert_eq!(day_seed(date), 2_026_918 * 2_026_918);
/// ```
#[must_use]
pub fn day_seed(date: NaiveDate) -> u64 {
    let digits = format!("{}{}{}", date.year(), date.month0(), date.day());
    digits.parse::<u64>().map_or(0, |n| n.saturating_mul(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_seed_uses_zero_based_month_without_padding() {
        assert_eq!(day_seed(date(2026, 10, 18)), 4_108_396_578_724);
        // 2025-02-05 -> "202515"
        assert_eq!(day_seed(date(2025, 2, 5)), 202_515 * 202_515);
        // 2025-12-15 -> "20251115"
        assert_eq!(day_seed(date(2025, 12, 15)), 20_251_115 * 20_251_115);
    }

    #[test]
    fn sequence_matches_double_precision_stream() {
        let mut generator = SequenceGenerator::new(42);
        assert_eq!(generator.next_value(), 1_250_496_027);
        // Exact integer arithmetic would give 1116302264 here
        assert_eq!(generator.next_value(), 1_116_302_080);
        assert_eq!(generator.next_value(), 1_964_818_176);
    }

    #[test]
    fn sequence_for_day_is_reproducible() {
        let mut generator = SequenceGenerator::for_day(date(2026, 10, 18));
        assert_eq!(generator.next_value(), 490_209_280);
        assert_eq!(generator.next_value(), 14_168_128);

        let mut again = SequenceGenerator::for_day(date(2026, 10, 18));
        assert_eq!(again.next_below(72), 490_209_280 % 72);
    }

    #[test]
    fn next_below_zero_returns_raw_value() {
        let mut a = SequenceGenerator::new(42);
        let mut b = SequenceGenerator::new(42);
        assert_eq!(a.next_below(0), b.next_value() as usize);
    }

    #[test]
    fn values_stay_below_modulus() {
        let mut generator = SequenceGenerator::for_day(date(2024, 2, 29));
        for _ in 0..1000 {
            assert!(f64::from(generator.next_value()) < MODULUS);
        }
    }

    #[test]
    fn uniform_sources_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 1..50 {
            assert!(rng.next_index(len) < len);
        }
    }
}
