//! Implements [`HashTable`] for [`ChainTable`].
use crate::chaining::ChainTable;
use collide_core::{ChainHasher, CollideError, HashTable, Key};

impl<K: Key, H: ChainHasher<K>> HashTable<K> for ChainTable<K, H> {
    fn insert(&mut self, value: K) -> Result<(), CollideError> {
        let slot = self.hasher.hash(&value);
        let num_slots = self.buckets.len();
        let Some(bucket) = self.buckets.get_mut(slot) else {
            log::error!(
                "Hash function mapped {:?} to slot {} of {} slots",
                value,
                slot,
                num_slots
            );
            return Err(CollideError::TableIntegrityViolation { slot, num_slots });
        };

        bucket.push_front(value);
        self.len += 1;
        Ok(())
    }

    fn search(&self, value: &K) -> bool {
        let slot = self.hasher.hash(value);
        self.buckets
            .get(slot)
            .is_some_and(|bucket| bucket.contains(value))
    }

    /// Counts every value of a chain beyond its first one.
    fn num_collisions(&self) -> usize {
        self.buckets
            .iter()
            .map(|b| if b.len() > 1 { b.len() - 1 } else { 0 })
            .sum()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.buckets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chaining::{ChainTableByDivision, ChainTableByMultiplication};
    use crate::hashing::{DivisionHasher, DivisionState, MultiplicationHasher, MultiplicationState};
    use collide_core::build_table;

    fn division_table(num_slots: usize) -> ChainTableByDivision<i64> {
        ChainTableByDivision::with_hasher(DivisionHasher::new(DivisionState::new(num_slots)))
    }

    #[test]
    fn test_insert_prepends_to_chain() {
        let mut table = division_table(7);
        build_table(&mut table, [3, 10, 17]).unwrap();

        let chain: Vec<i64> = table.bucket(3).unwrap().iter().copied().collect();
        assert_eq!(chain, vec![17, 10, 3]);
        assert_eq!(table.num_collisions(), 2);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_collisions_ignore_single_value_chains() {
        let mut table = division_table(7);
        build_table(&mut table, [1, 8, 2, 4, -3]).unwrap();

        // Chains: 1 -> [8, 1], 2 -> [2], 4 -> [-3, 4].
        assert_eq!(table.num_collisions(), 2);
        assert_eq!(table.bucket(4).unwrap().len(), 2);
    }

    #[test]
    fn test_search() {
        let mut table = division_table(11);
        build_table(&mut table, [0, 11, 22, 5, -6]).unwrap();

        for value in [0, 11, 22, 5, -6] {
            assert!(table.search(&value), "Value: {}", value);
        }
        assert!(!table.search(&33));
        assert!(!table.search(&1));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut table = division_table(5);
        build_table(&mut table, [4, 4]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.num_collisions(), 1);
    }

    #[test]
    fn test_multiplication_spreads_division_collisions() {
        // Multiples of the table size all collide under the division scheme.
        let values: Vec<i64> = (0..10).map(|x| x * 13).collect();

        let mut division = division_table(13);
        build_table(&mut division, values.iter().copied()).unwrap();
        assert_eq!(division.num_collisions(), 9);

        let mut multiplication = ChainTableByMultiplication::with_hasher(MultiplicationHasher::new(
            MultiplicationState::new(13, 0.6180339887),
        ));
        build_table(&mut multiplication, values.iter().copied()).unwrap();
        assert!(multiplication.num_collisions() < division.num_collisions());
        for value in &values {
            assert!(multiplication.search(value));
        }
    }

    #[test]
    fn test_debug() {
        let table = division_table(3);
        let repr = format!("{:?}", table);
        assert!(repr.starts_with("ChainTable"));
        assert!(repr.contains("num_slots: 3"));
    }
}
