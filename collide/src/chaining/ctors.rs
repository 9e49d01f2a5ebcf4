//! Implements constructors for [`ChainTable`].
use crate::chaining::{ChainBucket, ChainTable};
use crate::primes::find_prime;
use collide_core::{build_table, ChainHasher, CollideError, HashTable, Key};
use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

impl<K: Key, H: ChainHasher<K>> ChainTable<K, H> {
    /// Creates an empty table with as many slots as the `hasher` produces.
    pub fn with_hasher(hasher: H) -> Self {
        let buckets = (0..hasher.num_slots()).map(|_| ChainBucket::new()).collect();
        Self {
            hasher,
            buckets,
            len: 0,
        }
    }

    /// Creates an empty table sized for `num_values` values.
    ///
    /// The number of slots is a random prime from [`find_prime`], the hash function parameters
    /// are drawn from `rng` once.
    pub fn sized_for<R: Rng + ?Sized>(
        num_values: usize,
        rng: &mut R,
    ) -> Result<Self, CollideError> {
        let num_slots = find_prime(num_values, rng)?;
        let hasher = H::from_seed(rng.next_u64(), num_slots, num_values)?;
        Ok(Self::with_hasher(hasher))
    }

    /// Creates a table holding `values` inserted in order.
    ///
    /// # Parameters
    ///
    /// - `values`: The values to insert, must not be empty.
    /// - `rng`: The source of the table size and of the hash function parameters.
    pub fn from_rng<R: Rng + ?Sized>(values: &[K], rng: &mut R) -> Result<Self, CollideError> {
        if values.is_empty() {
            return Err(CollideError::EmptyInput);
        }

        let mut table = Self::sized_for(values.len(), rng)?;
        build_table(&mut table, values.iter().copied())?;

        log::debug!(
            "Built chaining table: {} values, {} slots, {} collisions",
            table.len(),
            table.capacity(),
            table.num_collisions(),
        );
        Ok(table)
    }

    /// Creates a table holding `values` with randomness derived from `seed`.
    pub fn new(values: &[K], seed: u64) -> Result<Self, CollideError> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        Self::from_rng(values, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chaining::{ChainTableByDivision, ChainTableByMultiplication};
    use crate::hashing::flawed::OutOfRangeHasher;
    use crate::hashing::{DivisionHasher, DivisionState};
    use crate::primes::is_prime;
    use collide_testing::generate_table_tests;

    mod division {
        use super::*;

        generate_table_tests!(ChainTableByDivision);
    }

    mod multiplication {
        use super::*;

        generate_table_tests!(ChainTableByMultiplication);
    }

    #[test]
    fn test_new_rejects_empty_input() {
        assert_eq!(
            ChainTableByDivision::<i64>::new(&[], 0).unwrap_err(),
            CollideError::EmptyInput
        );
        assert_eq!(
            ChainTableByMultiplication::<i64>::new(&[], 0).unwrap_err(),
            CollideError::EmptyInput
        );
    }

    #[test]
    fn test_new_capacity_is_prime() {
        let values: Vec<i64> = (0..100).collect();
        let table = ChainTableByDivision::new(&values, 7).unwrap();
        assert!(is_prime(table.capacity() as u64));
        assert!((150..300).contains(&table.capacity()));
        assert!(table.load_factor() < 1.0);
    }

    #[test]
    fn test_new_is_deterministic_for_seed() {
        let values: Vec<i64> = (0..500).map(|x| x * 37 - 1000).collect();
        let table1 = ChainTableByMultiplication::new(&values, 11).unwrap();
        let table2 = ChainTableByMultiplication::new(&values, 11).unwrap();
        assert_eq!(table1.capacity(), table2.capacity());
        assert_eq!(
            ChainHasher::<i64>::state(table1.hasher()),
            ChainHasher::<i64>::state(table2.hasher())
        );
        assert_eq!(table1.num_collisions(), table2.num_collisions());
    }

    #[test]
    fn test_with_hasher_is_empty() {
        let table =
            ChainTableByDivision::<u32>::with_hasher(DivisionHasher::new(DivisionState::new(5)));
        assert!(table.is_empty());
        assert_eq!(table.capacity(), 5);
        assert_eq!(table.num_collisions(), 0);
        assert!(!table.search(&0));
    }

    #[test]
    fn test_insert_reports_integrity_violation() {
        let mut table = ChainTable::<i64, _>::with_hasher(OutOfRangeHasher::new(7));
        let result = build_table(&mut table, [1, 2, 3]);
        assert_eq!(
            result,
            Err(CollideError::TableIntegrityViolation {
                slot: 7,
                num_slots: 7
            })
        );
        assert!(table.is_empty());
    }
}
