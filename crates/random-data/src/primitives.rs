//! Digit, letter and numeric primitives.
//!
//! These are the building blocks the postal code rules and the lexicon-backed
//! generators compose. Digit strings are always exactly as wide as requested:
//! the drawn value is left-padded with zeros.

use rand::{Rng, RngCore, seq::IndexedRandom};

use crate::error::RandomError;
use crate::source::RandomSource;

/// Characters used by [`RandomSource::alphanumeric`].
pub const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Widest digit run drawn as a single integer. Wider requests are assembled
/// from several independent runs, which keeps the distribution uniform.
const MAX_DRAW_WIDTH: usize = 18;

/// Largest value representable in `width` decimal digits (`10^width - 1`),
/// or `None` when that exceeds `u64`.
fn max_for_width(width: usize) -> Option<u64> {
    let exponent = u32::try_from(width).ok()?;
    10_u64.checked_pow(exponent).map(|power| power - 1)
}

impl<R: RngCore> RandomSource<R> {
    /// Returns `width` uniform decimal digits, zero-padded.
    ///
    /// # Example
    ///
    /// ```
    /// use random_data::RandomSource;
    ///
    /// let source = RandomSource::from_seed(1);
    /// let code = source.digits(10);
    ///
    /// assert_eq!(code.len(), 10);
    /// assert!(code.chars().all(|c| c.is_ascii_digit()));
    /// ```
    pub fn digits(&self, width: usize) -> String {
        let mut out = String::with_capacity(width);
        let mut remaining = width;
        while remaining > 0 {
            let run = remaining.min(MAX_DRAW_WIDTH);
            let max = max_for_width(run).unwrap_or(u64::MAX);
            let value = self.uniform_inclusive(0, max);
            out.push_str(&format!("{value:0run$}"));
            remaining -= run;
        }
        out
    }

    /// Returns a zero-padded `width`-digit string whose value lies in
    /// `[low, high]`.
    ///
    /// Inverted bounds are swapped. `high` is then clamped to the largest
    /// `width`-digit value; `low` is left as supplied. If `low` is itself too
    /// wide the bounds cross again and are swapped once more, so the value
    /// lands in `[10^width - 1, low]` and the result is wider than `width`.
    ///
    /// # Example
    ///
    /// ```
    /// use random_data::RandomSource;
    ///
    /// let source = RandomSource::from_seed(1);
    /// let value: u64 = source.bounded_digits(4, 9999, 1000).parse().expect("digits");
    ///
    /// assert!((1000..=9999).contains(&value));
    /// ```
    pub fn bounded_digits(&self, width: usize, low: u64, high: u64) -> String {
        let (lower, upper) = if low > high { (high, low) } else { (low, high) };
        let clamped = max_for_width(width).map_or(upper, |max| upper.min(max));
        let value = self.uniform_inclusive(lower, clamped);
        format!("{value:0width$}")
    }

    /// Returns `count` independent uniform letters from `A` to `Z`.
    pub fn letters(&self, count: usize) -> String {
        self.with_rng(|rng| {
            (0..count)
                .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
                .collect()
        })
    }

    /// Returns `len` characters drawn from [`ALPHANUMERIC`].
    pub fn alphanumeric(&self, len: usize) -> String {
        let charset = ALPHANUMERIC.as_bytes();
        self.with_rng(|rng| {
            (0..len)
                .filter_map(|_| charset.choose(rng).copied().map(char::from))
                .collect()
        })
    }

    /// Returns a uniform integer in `[0, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::NonPositiveBound`] when `max <= 0`.
    pub fn number(&self, max: i64) -> Result<i64, RandomError> {
        self.intn(max)
    }

    /// Returns a uniform integer in `[low, high)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::EmptyRange`] when `high <= low`.
    pub fn number_in(&self, low: i64, high: i64) -> Result<i64, RandomError> {
        if high <= low {
            return Err(RandomError::EmptyRange { low, high });
        }
        Ok(self.with_rng(|rng| rng.random_range(low..high)))
    }

    /// Returns a uniform float in `[0, max)`.
    #[expect(clippy::float_arithmetic, reason = "scaling a unit draw")]
    pub fn decimal(&self, max: f64) -> f64 {
        self.float64() * max
    }

    /// Returns a uniform float in `[low, high)`.
    #[expect(clippy::float_arithmetic, reason = "scaling a unit draw")]
    pub fn decimal_in(&self, low: f64, high: f64) -> f64 {
        self.float64().mul_add(high - low, low)
    }

    /// Returns a float in `[low, high]` rounded to `places` decimal places.
    #[expect(clippy::float_arithmetic, reason = "decimal rounding")]
    pub fn decimal_rounded(&self, low: f64, high: f64, places: u8) -> f64 {
        let factor = 10_f64.powi(i32::from(places));
        (self.decimal_in(low, high) * factor).round() / factor
    }

    /// Returns `groups` runs of `digits_per_group` digits joined by
    /// `separator`.
    ///
    /// # Example
    ///
    /// ```
    /// use random_data::RandomSource;
    ///
    /// let source = RandomSource::from_seed(1);
    ///
    /// assert_eq!(source.string_number_ext(3, "/", 3).len(), 11);
    /// assert_eq!(source.string_number_ext(3, "", 3).len(), 9);
    /// ```
    pub fn string_number_ext(
        &self,
        groups: usize,
        separator: &str,
        digits_per_group: usize,
    ) -> String {
        (0..groups)
            .map(|_| self.digits(digits_per_group))
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Returns `groups` two-digit runs joined by `separator`.
    pub fn string_number(&self, groups: usize, separator: &str) -> String {
        self.string_number_ext(groups, separator, 2)
    }
}
