//! Probe sequences of the open-addressing tables.
//!
//! All of them start at the primary slot `h(k) = k mod m` and differ in the offset added for the
//! `i`-th probe:
//!
//! - Linear: `i`.
//! - Quadratic: `c1 * i + c2 * i ** 2`.
//! - Double hashing: `i * h2(k)`, where `h2(k) = p - (k mod p)` for a prime `p`.
use crate::primes::find_prime;
use collide_core::{CollideError, Key, ProbeHasher};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Primary slot of a key shared by all probe sequences.
#[inline]
pub fn primary<K: Key>(key: &K, num_slots: usize) -> usize {
    key.residue(num_slots)
}

/// Adds `offset` to the primary slot wrapping around `num_slots`.
#[inline]
fn wrap(primary: usize, offset: u128, num_slots: usize) -> usize {
    ((primary as u128 + offset) % num_slots as u128) as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearState {
    num_slots: usize,
}

impl LinearState {
    /// # Panics
    ///
    /// - If `num_slots` is 0.
    pub fn new(num_slots: usize) -> Self {
        assert!(num_slots > 0, r#""num_slots" must be greater than 0"#);

        Self { num_slots }
    }
}

/// Probes consecutive slots.
#[derive(Debug, Clone, Copy)]
pub struct LinearProbingHasher {
    state: LinearState,
}

impl LinearProbingHasher {
    pub fn new(state: LinearState) -> Self {
        Self { state }
    }
}

impl<K: Key> ProbeHasher<K> for LinearProbingHasher {
    type State = LinearState;

    fn from_seed(_seed: u64, num_slots: usize, _num_values: usize) -> Result<Self, CollideError> {
        Ok(Self {
            state: LinearState::new(num_slots),
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
    fn hash(&self, key: &K, probe: usize) -> usize {
        let num_slots = self.state.num_slots;
        wrap(
            primary(key, num_slots),
            (probe % num_slots) as u128,
            num_slots,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadraticState {
    num_slots: usize,
    c1: usize,
    c2: usize,
}

impl QuadraticState {
    pub const C1: usize = 2;
    pub const C2: usize = 3;

    pub fn new(num_slots: usize) -> Self {
        Self::with_coefficients(num_slots, Self::C1, Self::C2)
    }

    /// # Panics
    ///
    /// - If `num_slots` or `c2` is 0.
    pub fn with_coefficients(num_slots: usize, c1: usize, c2: usize) -> Self {
        assert!(num_slots > 0, r#""num_slots" must be greater than 0"#);
        assert!(c2 > 0, r#""c2" must be greater than 0"#);

        Self { num_slots, c1, c2 }
    }
}

/// Probes slots at quadratically growing offsets.
///
/// # Notes
///
/// - For a prime number of slots the sequence visits only about a half of them, so an insert
///   might fail while the table still has empty slots.
#[derive(Debug, Clone, Copy)]
pub struct QuadraticProbingHasher {
    state: QuadraticState,
}

impl QuadraticProbingHasher {
    pub fn new(state: QuadraticState) -> Self {
        Self { state }
    }
}

impl<K: Key> ProbeHasher<K> for QuadraticProbingHasher {
    type State = QuadraticState;

    fn from_seed(_seed: u64, num_slots: usize, _num_values: usize) -> Result<Self, CollideError> {
        Ok(Self {
            state: QuadraticState::new(num_slots),
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
    fn hash(&self, key: &K, probe: usize) -> usize {
        let QuadraticState { num_slots, c1, c2 } = self.state;
        let m = num_slots as u128;

        // The offset only depends on `probe mod m`, reducing early keeps it within `u128`.
        let i = (probe % num_slots) as u128;
        let linear = (c1 as u128 % m) * i % m;
        let square = (c2 as u128 % m) * (i * i % m) % m;
        wrap(primary(key, num_slots), linear + square, num_slots)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleHashingState {
    num_slots: usize,
    secondary_modulus: usize,
}

impl DoubleHashingState {
    /// # Panics
    ///
    /// - If `num_slots` or `secondary_modulus` is 0.
    pub fn new(num_slots: usize, secondary_modulus: usize) -> Self {
        assert!(num_slots > 0, r#""num_slots" must be greater than 0"#);
        assert!(
            secondary_modulus > 0,
            r#""secondary_modulus" must be greater than 0"#
        );

        Self {
            num_slots,
            secondary_modulus,
        }
    }

    /// Creates a state with a random prime secondary modulus sized for a half of `num_values`.
    pub fn from_seed(
        seed: u64,
        num_slots: usize,
        num_values: usize,
    ) -> Result<Self, CollideError> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let secondary_modulus = find_prime((num_values / 2).max(1), &mut rng)?;
        Ok(Self::new(num_slots, secondary_modulus))
    }

    pub fn secondary_modulus(&self) -> usize {
        self.secondary_modulus
    }

    /// The probe step of `key`: `p - (k mod p)` reduced by the number of slots.
    ///
    /// A step divisible by the number of slots would probe the same slot forever, so it's
    /// replaced by 1.
    #[inline]
    pub fn step<K: Key>(&self, key: &K) -> usize {
        let secondary = self.secondary_modulus - key.residue(self.secondary_modulus);
        match secondary % self.num_slots {
            0 => 1,
            step => step,
        }
    }
}

/// Probes slots at a key-dependent step computed by a secondary hash function.
#[derive(Debug, Clone, Copy)]
pub struct DoubleHashingHasher {
    state: DoubleHashingState,
}

impl DoubleHashingHasher {
    pub fn new(state: DoubleHashingState) -> Self {
        Self { state }
    }
}

impl<K: Key> ProbeHasher<K> for DoubleHashingHasher {
    type State = DoubleHashingState;

    fn from_seed(seed: u64, num_slots: usize, num_values: usize) -> Result<Self, CollideError> {
        Ok(Self {
            state: DoubleHashingState::from_seed(seed, num_slots, num_values)?,
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
    fn hash(&self, key: &K, probe: usize) -> usize {
        let num_slots = self.state.num_slots;
        let i = (probe % num_slots) as u128;
        let offset = i * self.state.step(key) as u128 % num_slots as u128;
        wrap(primary(key, num_slots), offset, num_slots)
    }
}
