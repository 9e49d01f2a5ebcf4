//! Declares core types for [`ChainTable`].
use crate::chaining::ChainBucket;
use crate::hashing::{DivisionHasher, MultiplicationHasher};
use collide_core::{ChainHasher, Key};
use std::fmt::{Debug, Formatter};

/// Fixed-capacity hash table resolving collisions by separate chaining.
///
/// # Guarantees
///
/// - Inserts never fail for a hash function that stays within the table.
/// - A lookup scans a single chain.
///
/// # Examples
///
/// ```rust
/// use collide::chaining::ChainTableByDivision;
/// use collide::HashTable;
///
/// let table = ChainTableByDivision::<i64>::new(&[2, 7, 11, 15], 42).unwrap();
///
/// assert!(table.search(&11));
/// assert!(!table.search(&3));
/// ```
pub struct ChainTable<K: Key, H: ChainHasher<K>> {
    pub(super) hasher: H,
    pub(super) buckets: Box<[ChainBucket<K>]>,
    pub(super) len: usize,
}

/// Chaining table hashed by division.
pub type ChainTableByDivision<K> = ChainTable<K, DivisionHasher>;

/// Chaining table hashed by multiplication.
pub type ChainTableByMultiplication<K> = ChainTable<K, MultiplicationHasher>;

impl<K: Key, H: ChainHasher<K>> ChainTable<K, H> {
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Get the chain of the given `slot`.
    pub fn bucket(&self, slot: usize) -> Option<&ChainBucket<K>> {
        self.buckets.get(slot)
    }

    pub fn buckets(&self) -> &[ChainBucket<K>] {
        &self.buckets
    }
}

impl<K, H> Debug for ChainTable<K, H>
where
    K: Key,
    H: ChainHasher<K> + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainTable")
            .field("hasher", &self.hasher)
            .field("num_slots", &self.buckets.len())
            .field("len", &self.len)
            .finish()
    }
}
