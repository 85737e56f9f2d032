//! Seeded, thread-safe random source.
//!
//! Every generator in the crate draws its entropy from a [`RandomSource`].
//! The source owns one pseudo-random generator behind a mutex; each draw
//! holds the lock only for the duration of that draw, so a source can be
//! shared between threads without two callers ever observing overlapping
//! generator state.

use std::fmt;
use std::sync::LazyLock;

use parking_lot::Mutex;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::RandomError;

/// A mutex-guarded pseudo-random generator.
///
/// Two sources built from the same seed yield identical values for identical
/// call sequences. The type is deliberately not `Clone`: duplicating the
/// generator state would silently fork the stream.
///
/// # Example
///
/// ```
/// use random_data::RandomSource;
///
/// let first = RandomSource::from_seed(1234);
/// let second = RandomSource::from_seed(1234);
///
/// assert_eq!(first.intn(100), second.intn(100));
/// assert_eq!(first.digits(6), second.digits(6));
/// ```
pub struct RandomSource<R = ChaCha8Rng> {
    rng: Mutex<R>,
}

impl RandomSource<ChaCha8Rng> {
    /// Creates a reproducible source from a 64-bit seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a source seeded from the thread-local entropy pool.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_rng(ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    /// Restarts the stream from `seed`, as if the source had just been built
    /// with [`RandomSource::from_seed`].
    pub fn reseed(&self, seed: u64) {
        *self.rng.lock() = ChaCha8Rng::seed_from_u64(seed);
    }
}

impl<R: RngCore> RandomSource<R> {
    /// Wraps a caller-supplied generator, e.g. one owned by a larger seeded
    /// session.
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Returns a uniform integer in `[0, n)`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::NonPositiveBound`] when `n <= 0`; no draw is
    /// made in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use random_data::{RandomError, RandomSource};
    ///
    /// let source = RandomSource::from_seed(7);
    /// assert!((0..10).contains(&source.intn(10).expect("positive bound")));
    /// assert_eq!(
    ///     source.intn(0),
    ///     Err(RandomError::NonPositiveBound { bound: 0 })
    /// );
    /// ```
    pub fn intn(&self, n: i64) -> Result<i64, RandomError> {
        if n <= 0 {
            return Err(RandomError::NonPositiveBound { bound: n });
        }
        Ok(self.with_rng(|rng| rng.random_range(0..n)))
    }

    /// Returns a uniform float in `[0.0, 1.0)`.
    pub fn float64(&self) -> f64 {
        self.with_rng(|rng| rng.random::<f64>())
    }

    /// Returns `true` or `false` with equal probability.
    pub fn boolean(&self) -> bool {
        self.with_rng(|rng| rng.random::<bool>())
    }

    /// Returns a uniform element of `items`, or `""` when `items` is empty.
    pub fn pick<'a>(&self, items: &'a [String]) -> &'a str {
        self.index(items.len())
            .and_then(|index| items.get(index))
            .map_or("", String::as_str)
    }

    /// Consumes the source and returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng.into_inner()
    }

    /// Uniform draw in `[low, high]`; the bounds are swapped when inverted so
    /// the range is never empty.
    pub(crate) fn uniform_inclusive(&self, low: u64, high: u64) -> u64 {
        let (lower, upper) = if low > high { (high, low) } else { (low, high) };
        self.with_rng(|rng| rng.random_range(lower..=upper))
    }

    /// Uniform index into a collection of `len` elements.
    pub(crate) fn index(&self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.with_rng(|rng| rng.random_range(0..len)))
    }

    /// Runs one draw inside the critical section.
    pub(crate) fn with_rng<T>(&self, draw: impl FnOnce(&mut R) -> T) -> T {
        let mut rng = self.rng.lock();
        draw(&mut *rng)
    }
}

impl<R> fmt::Debug for RandomSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomSource").finish_non_exhaustive()
    }
}

static DEFAULT_SOURCE: LazyLock<RandomSource> = LazyLock::new(RandomSource::from_entropy);

/// Returns the process-wide source used by the free functions.
///
/// It is seeded from entropy on first use. Call
/// [`RandomSource::reseed`] on it to make the free functions reproducible;
/// prefer an explicit [`RandomSource`] in tests so suites running in
/// parallel do not share a stream.
#[must_use]
pub fn default_source() -> &'static RandomSource {
    &DEFAULT_SOURCE
}

/// [`RandomSource::postal_code`] on the [`default_source`].
#[must_use]
pub fn postal_code(country_code: &str) -> String {
    default_source().postal_code(country_code)
}

/// [`RandomSource::digits`] on the [`default_source`].
#[must_use]
pub fn digits(width: usize) -> String {
    default_source().digits(width)
}

/// [`RandomSource::bounded_digits`] on the [`default_source`].
#[must_use]
pub fn bounded_digits(width: usize, low: u64, high: u64) -> String {
    default_source().bounded_digits(width, low, high)
}

/// [`RandomSource::letters`] on the [`default_source`].
#[must_use]
pub fn letters(count: usize) -> String {
    default_source().letters(count)
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    use super::*;

    fn draw_sequence<R: RngCore>(source: &RandomSource<R>) -> Vec<i64> {
        (1..=20)
            .map(|n| source.intn(n * 7).expect("positive bound"))
            .collect()
    }

    #[rstest]
    #[case(0)]
    #[case(1234)]
    #[case(u64::MAX)]
    fn same_seed_produces_same_sequence(#[case] seed: u64) {
        let first = RandomSource::from_seed(seed);
        let second = RandomSource::from_seed(seed);

        assert_eq!(draw_sequence(&first), draw_sequence(&second));
        assert_eq!(first.float64().to_bits(), second.float64().to_bits());
    }

    #[test]
    fn different_seeds_diverge() {
        let first = RandomSource::from_seed(1);
        let second = RandomSource::from_seed(2);

        assert_ne!(draw_sequence(&first), draw_sequence(&second));
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i64::MIN)]
    fn intn_rejects_non_positive_bounds(#[case] bound: i64) {
        let source = RandomSource::from_seed(42);
        assert_eq!(
            source.intn(bound),
            Err(RandomError::NonPositiveBound { bound })
        );
    }

    #[test]
    fn intn_of_one_is_always_zero() {
        let source = RandomSource::from_seed(42);
        for _ in 0..100 {
            assert_eq!(source.intn(1), Ok(0));
        }
    }

    #[test]
    fn float64_stays_in_unit_interval() {
        let source = RandomSource::from_seed(42);
        for _ in 0..1_000 {
            let value = source.float64();
            assert!((0.0..1.0).contains(&value), "out of range: {value}");
        }
    }

    #[test]
    fn reseed_restarts_the_stream() {
        let source = RandomSource::from_seed(99);
        let before = draw_sequence(&source);

        source.reseed(99);

        assert_eq!(draw_sequence(&source), before);
    }

    #[test]
    fn wraps_caller_supplied_generator() {
        let wrapped = RandomSource::from_rng(ChaCha8Rng::seed_from_u64(5));
        let seeded = RandomSource::from_seed(5);

        assert_eq!(draw_sequence(&wrapped), draw_sequence(&seeded));
    }

    #[test]
    fn accepts_other_generator_types() {
        let source = RandomSource::from_rng(ChaCha12Rng::seed_from_u64(5));
        let value = source.intn(10).expect("positive bound");
        assert!((0..10).contains(&value));
    }

    #[test]
    fn uniform_inclusive_swaps_inverted_bounds() {
        let source = RandomSource::from_seed(3);
        for _ in 0..200 {
            let value = source.uniform_inclusive(20, 10);
            assert!((10..=20).contains(&value));
        }
    }

    #[test]
    fn pick_returns_empty_for_empty_list() {
        let source = RandomSource::from_seed(3);
        assert_eq!(source.pick(&[]), "");
    }

    #[test]
    fn pick_returns_a_member() {
        let source = RandomSource::from_seed(3);
        let items = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
        for _ in 0..50 {
            assert!(items.iter().any(|item| item == source.pick(&items)));
        }
    }

    #[test]
    fn debug_does_not_expose_state() {
        let source = RandomSource::from_seed(3);
        assert_eq!(format!("{source:?}"), "RandomSource { .. }");
    }

    #[test]
    fn free_functions_use_the_default_source() {
        assert_eq!(digits(4).len(), 4);
        assert_eq!(letters(3).len(), 3);
        assert_eq!(bounded_digits(4, 1000, 9999).len(), 4);
        assert_eq!(postal_code("JP").len(), 8);
    }
}
