//! Implements [`HashTable`] for [`OpenAddressTable`].
use crate::open_addressing::OpenAddressTable;
use collide_core::{CollideError, HashTable, Key, ProbeHasher};

impl<K: Key, H: ProbeHasher<K>> HashTable<K> for OpenAddressTable<K, H> {
    fn insert(&mut self, value: K) -> Result<(), CollideError> {
        let (slot, probe) = self.find_empty_slot(&value)?;
        if probe > 0 {
            log::trace!("Placed {:?} into slot {} after {} probes", value, slot, probe);
        }

        self.slots[slot] = Some(value);
        self.collisions += probe;
        self.len += 1;
        Ok(())
    }

    fn search(&self, value: &K) -> bool {
        self.find_slot(value).is_some()
    }

    /// Sums the probe distances of all inserts.
    fn num_collisions(&self) -> usize {
        self.collisions
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }
}
