//! Implementation of the division hashing scheme: `h(k) = k mod m`.
use collide_core::{ChainHasher, CollideError, Key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionState {
    num_slots: usize,
}

impl DivisionState {
    /// # Panics
    ///
    /// - If `num_slots` is 0.
    pub fn new(num_slots: usize) -> Self {
        assert!(num_slots > 0, r#""num_slots" must be greater than 0"#);

        Self { num_slots }
    }
}

/// Hashes a key by taking its remainder of the division by the number of slots.
#[derive(Debug, Clone, Copy)]
pub struct DivisionHasher {
    state: DivisionState,
}

impl DivisionHasher {
    pub fn new(state: DivisionState) -> Self {
        Self { state }
    }
}

impl<K: Key> ChainHasher<K> for DivisionHasher {
    type State = DivisionState;

    fn from_seed(_seed: u64, num_slots: usize, _num_values: usize) -> Result<Self, CollideError> {
        Ok(Self {
            state: DivisionState::new(num_slots),
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
        key.residue(self.state.num_slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_periodicity() {
        let hasher = DivisionHasher::new(DivisionState::new(13));
        for k in -100_i64..100 {
            assert_eq!(
                ChainHasher::<i64>::hash(&hasher, &k),
                ChainHasher::<i64>::hash(&hasher, &(k + 13))
            );
        }
    }

    #[test]
    fn test_division_range() {
        let hasher = DivisionHasher::new(DivisionState::new(7));
        assert_eq!(ChainHasher::<i32>::hash(&hasher, &-1), 6);
        assert_eq!(ChainHasher::<u8>::hash(&hasher, &255), 3);
        assert_eq!(ChainHasher::<i64>::num_slots(&hasher), 7);
    }

    #[test]
    #[should_panic(expected = "must be greater than 0")]
    fn test_division_state_rejects_zero_slots() {
        DivisionState::new(0);
    }
}
