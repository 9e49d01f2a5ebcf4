//! Declares core types for [`OpenAddressTable`].
use crate::hashing::{DoubleHashingHasher, LinearProbingHasher, QuadraticProbingHasher};
use collide_core::{CollideError, Key, ProbeHasher};
use std::fmt::{Debug, Formatter};

/// Fixed-capacity hash table resolving collisions by open addressing.
///
/// There is no deletion, so an empty slot always terminates a probe sequence.
///
/// # Examples
///
/// ```rust
/// use collide::open_addressing::OpenAddressTableByLinearProbing;
/// use collide::HashTable;
///
/// let table = OpenAddressTableByLinearProbing::<u32>::new(&[2, 7, 11, 15], 42).unwrap();
///
/// assert!(table.search(&15));
/// assert!(!table.search(&8));
/// ```
pub struct OpenAddressTable<K: Key, H: ProbeHasher<K>> {
    pub(super) hasher: H,
    pub(super) slots: Box<[Option<K>]>,
    pub(super) len: usize,
    pub(super) collisions: usize,
}

/// Open-addressing table with linear probing.
pub type OpenAddressTableByLinearProbing<K> = OpenAddressTable<K, LinearProbingHasher>;

/// Open-addressing table with quadratic probing.
pub type OpenAddressTableByQuadraticProbing<K> = OpenAddressTable<K, QuadraticProbingHasher>;

/// Open-addressing table with double hashing.
pub type OpenAddressTableByDoubleHashing<K> = OpenAddressTable<K, DoubleHashingHasher>;

impl<K: Key, H: ProbeHasher<K>> OpenAddressTable<K, H> {
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    pub fn slots(&self) -> &[Option<K>] {
        &self.slots
    }

    /// Finds the slot holding `value`.
    ///
    /// Visits slots in the order an insert of `value` would try them and stops at the first
    /// empty one.
    pub fn find_slot(&self, value: &K) -> Option<usize> {
        for probe in 0..self.slots.len() {
            let slot = self.hasher.hash(value, probe);
            match self.slots.get(slot) {
                Some(Some(v)) if v == value => return Some(slot),
                Some(Some(_)) => continue,
                _ => return None,
            }
        }
        None
    }

    /// Finds the first empty slot of the probe sequence of `value` with its probe index.
    pub(super) fn find_empty_slot(&self, value: &K) -> Result<(usize, usize), CollideError> {
        let num_slots = self.slots.len();
        for probe in 0..num_slots {
            let slot = self.hasher.hash(value, probe);
            match self.slots.get(slot) {
                Some(None) => return Ok((slot, probe)),
                Some(Some(_)) => continue,
                None => {
                    log::error!(
                        "Hash function mapped {:?} to slot {} of {} slots on probe {}",
                        value,
                        slot,
                        num_slots,
                        probe
                    );
                    return Err(CollideError::TableIntegrityViolation { slot, num_slots });
                }
            }
        }

        log::warn!(
            "No empty slot for {:?} within {} probes, {} of {} slots are occupied",
            value,
            num_slots,
            self.len,
            num_slots
        );
        Err(CollideError::TableOverfilled {
            capacity: num_slots,
        })
    }
}

impl<K, H> Debug for OpenAddressTable<K, H>
where
    K: Key,
    H: ProbeHasher<K> + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAddressTable")
            .field("hasher", &self.hasher)
            .field("num_slots", &self.slots.len())
            .field("len", &self.len)
            .field("collisions", &self.collisions)
            .finish()
    }
}
