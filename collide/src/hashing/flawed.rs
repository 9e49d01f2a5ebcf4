//! Implements intentionally flawed hashers - negative examples for the table tests.
use collide_core::{ChainHasher, CollideError, Key, ProbeHasher};

/// Returns a slot one past the end of the table.
#[derive(Debug, Clone, Copy)]
pub struct OutOfRangeHasher {
    num_slots: usize,
}

impl OutOfRangeHasher {
    pub fn new(num_slots: usize) -> Self {
        Self { num_slots }
    }
}

impl<K: Key> ChainHasher<K> for OutOfRangeHasher {
    type State = usize;

    fn from_seed(_seed: u64, num_slots: usize, _num_values: usize) -> Result<Self, CollideError> {
        Ok(Self { num_slots })
    }

    fn from_state(state: Self::State) -> Self {
        Self { num_slots: state }
    }

    fn state(&self) -> &Self::State {
        &self.num_slots
    }

    fn num_slots(&self) -> usize {
        self.num_slots
    }

    fn hash(&self, _key: &K) -> usize {
        self.num_slots
    }
}

impl<K: Key> ProbeHasher<K> for OutOfRangeHasher {
    type State = usize;

    fn from_seed(_seed: u64, num_slots: usize, _num_values: usize) -> Result<Self, CollideError> {
        Ok(Self { num_slots })
    }

    fn from_state(state: Self::State) -> Self {
        Self { num_slots: state }
    }

    fn state(&self) -> &Self::State {
        &self.num_slots
    }

    fn num_slots(&self) -> usize {
        self.num_slots
    }

    fn hash(&self, _key: &K, _probe: usize) -> usize {
        self.num_slots
    }
}

/// Probes the primary slot over and over again.
#[derive(Debug, Clone, Copy)]
pub struct StuckProbeHasher {
    num_slots: usize,
}

impl StuckProbeHasher {
    pub fn new(num_slots: usize) -> Self {
        Self { num_slots }
    }
}

impl<K: Key> ProbeHasher<K> for StuckProbeHasher {
    type State = usize;

    fn from_seed(_seed: u64, num_slots: usize, _num_values: usize) -> Result<Self, CollideError> {
        Ok(Self { num_slots })
    }

    fn from_state(state: Self::State) -> Self {
        Self { num_slots: state }
    }

    fn state(&self) -> &Self::State {
        &self.num_slots
    }

    fn num_slots(&self) -> usize {
        self.num_slots
    }

    fn hash(&self, key: &K, _probe: usize) -> usize {
        key.residue(self.num_slots)
    }
}
