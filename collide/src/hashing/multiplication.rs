//! Implementation of the multiplication hashing scheme from [Knuth (1998)]:
//! `h(k) = floor(m * frac(k * A))` with a random constant `0 <= A < 1`.
//!
//! `A` is kept as a 64-bit fixed-point fraction, so `frac(k * A)` is computed exactly by a
//! wrapping multiplication and the slot is extracted from the top bits of a 128-bit product,
//! similar to the multiply-shift scheme.
//!
//! [Knuth (1998)]: https://en.wikipedia.org/wiki/The_Art_of_Computer_Programming
use collide_core::{ChainHasher, CollideError, Key};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// `2 ** 64` as a float.
const FIXED_POINT_ONE: f64 = 18_446_744_073_709_551_616.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiplicationState {
    num_slots: usize,
    factor: f64,
    multiplier: u64,
}

impl MultiplicationState {
    /// Creates a state with the given multiplication `factor` from `[0, 1)`.
    ///
    /// # Panics
    ///
    /// - If `num_slots` is 0 or `factor` is outside of `[0, 1)`.
    pub fn new(num_slots: usize, factor: f64) -> Self {
        assert!(num_slots > 0, r#""num_slots" must be greater than 0"#);
        assert!(
            (0.0..1.0).contains(&factor),
            r#""factor" must be in the range [0, 1)"#
        );

        Self {
            num_slots,
            factor,
            multiplier: (factor * FIXED_POINT_ONE) as u64,
        }
    }

    /// Creates a state with a factor drawn uniformly from `[0, 1)`.
    pub fn from_seed(seed: u64, num_slots: usize) -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        Self::new(num_slots, rng.random::<f64>())
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

/// Computes `floor(num_slots * frac(value * multiplier / 2 ** 64))`.
///
/// # Guarantees
///
/// - The result is always less than `num_slots`.
#[inline]
pub const fn multiplication(value: u64, num_slots: usize, multiplier: u64) -> usize {
    let fraction = value.wrapping_mul(multiplier);
    ((fraction as u128 * num_slots as u128) >> u64::BITS) as usize
}

/// Hashes a key by the fractional part of its product with a random constant.
#[derive(Debug, Clone, Copy)]
pub struct MultiplicationHasher {
    state: MultiplicationState,
}

impl MultiplicationHasher {
    pub fn new(state: MultiplicationState) -> Self {
        Self { state }
    }
}

impl<K: Key> ChainHasher<K> for MultiplicationHasher {
    type State = MultiplicationState;

    fn from_seed(seed: u64, num_slots: usize, _num_values: usize) -> Result<Self, CollideError> {
        Ok(Self {
            state: MultiplicationState::from_seed(seed, num_slots),
        })
    }

    fn from_state(state: Self::State) -> Self {
        Self { state }
    }

    fn state(&self) -> &Self::State {
        &self.state
    }

    fn num_slots(&self) -> usize {
        self.state.num_slots
    }

    #[inline]
    fn hash(&self, key: &K) -> usize {
        multiplication(
            key.low_bits(),
            self.state.num_slots,
            self.state.multiplier,
        )
    }
}
