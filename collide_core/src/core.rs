//! Core trait and type declarations for the whole project.
use crate::error::CollideError;
use crate::key::Key;
use std::fmt::Debug;

/// Hash function of a separate-chaining table.
///
/// Maps a key to a single slot. Every randomized parameter lives in [`ChainHasher::State`] which
/// is captured once at construction and never re-sampled afterwards.
pub trait ChainHasher<K: Key>: Sized {
    /// State of the hasher instance: number of slots and any parameters of the hash function.
    type State: Clone + Debug;

    /// Create a new hasher for `num_slots` slots with parameters derived from `seed`.
    ///
    /// `num_values` is the number of values the table is going to hold.
    fn from_seed(seed: u64, num_slots: usize, num_values: usize) -> Result<Self, CollideError>;

    /// Create a new hasher from the given `state`.
    fn from_state(state: Self::State) -> Self;

    /// Get the state of the hasher.
    fn state(&self) -> &Self::State;

    /// Get the number of slots (upper bound of the hash value, exclusive).
    fn num_slots(&self) -> usize;

    /// Hash the given `key`.
    fn hash(&self, key: &K) -> usize;
}

/// Hash function of an open-addressing table.
///
/// Maps a key and a probe index to a slot. Probe index `0` is the primary slot of the key.
pub trait ProbeHasher<K: Key>: Sized {
    /// State of the hasher instance.
    type State: Clone + Debug;

    /// Create a new hasher for `num_slots` slots with parameters derived from `seed`.
    fn from_seed(seed: u64, num_slots: usize, num_values: usize) -> Result<Self, CollideError>;

    /// Create a new hasher from the given `state`.
    fn from_state(state: Self::State) -> Self;

    /// Get the state of the hasher.
    fn state(&self) -> &Self::State;

    /// Get the number of slots (upper bound of the hash value, exclusive).
    fn num_slots(&self) -> usize;

    /// Hash the given `key` for the `probe`-th attempt.
    fn hash(&self, key: &K, probe: usize) -> usize;
}

/// A fixed-capacity hash table of integer values.
pub trait HashTable<K: Key> {
    /// Insert the given `value`.
    fn insert(&mut self, value: K) -> Result<(), CollideError>;

    /// Check whether the table contains the given `value`.
    fn search(&self, value: &K) -> bool;

    /// Get the number of collisions produced by the inserted values.
    ///
    /// The exact meaning is specific for the collision resolution scheme.
    fn num_collisions(&self) -> usize;

    /// Get the number of inserted values.
    fn len(&self) -> usize;

    /// Check if the table is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the number of slots of the table.
    fn capacity(&self) -> usize;

    /// Get the load factor of the table.
    fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }
}

/// Inserts every value of `values` into `table` in iteration order.
///
/// Stops at the first failed insert.
pub fn build_table<K, T, I>(table: &mut T, values: I) -> Result<(), CollideError>
where
    K: Key,
    T: HashTable<K> + ?Sized,
    I: IntoIterator<Item = K>,
{
    for value in values {
        table.insert(value)?;
    }
    Ok(())
}
