//! A single entry point over all five tables.
//!
//! [`TableFacade`] builds the table of the chosen [`Strategy`] once and answers lookups, including
//! the search of a pair of values summing to a target.
use crate::chaining::{ChainTableByDivision, ChainTableByMultiplication};
use crate::open_addressing::{
    OpenAddressTableByDoubleHashing, OpenAddressTableByLinearProbing,
    OpenAddressTableByQuadraticProbing,
};
use collide_core::{CollideError, HashTable, Key};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::fmt::{Debug, Display, Formatter};

/// Collision resolution strategy, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Strategy {
    ChainByDivision = 1,
    ChainByMultiplication = 2,
    LinearProbing = 3,
    QuadraticProbing = 4,
    DoubleHashing = 5,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::ChainByDivision,
        Strategy::ChainByMultiplication,
        Strategy::LinearProbing,
        Strategy::QuadraticProbing,
        Strategy::DoubleHashing,
    ];

    /// Get the numeric identifier of the strategy.
    pub fn id(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Strategy {
    type Error = CollideError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.id() == id)
            .ok_or(CollideError::UnknownStrategy(id))
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::ChainByDivision => "chaining by division",
            Strategy::ChainByMultiplication => "chaining by multiplication",
            Strategy::LinearProbing => "linear probing",
            Strategy::QuadraticProbing => "quadratic probing",
            Strategy::DoubleHashing => "double hashing",
        };
        f.write_str(name)
    }
}

enum AnyTable<K: Key> {
    ChainByDivision(ChainTableByDivision<K>),
    ChainByMultiplication(ChainTableByMultiplication<K>),
    LinearProbing(OpenAddressTableByLinearProbing<K>),
    QuadraticProbing(OpenAddressTableByQuadraticProbing<K>),
    DoubleHashing(OpenAddressTableByDoubleHashing<K>),
}

impl<K: Key> AnyTable<K> {
    fn from_rng<R: Rng + ?Sized>(
        strategy: Strategy,
        values: &[K],
        rng: &mut R,
    ) -> Result<Self, CollideError> {
        Ok(match strategy {
            Strategy::ChainByDivision => {
                AnyTable::ChainByDivision(ChainTableByDivision::from_rng(values, rng)?)
            }
            Strategy::ChainByMultiplication => {
                AnyTable::ChainByMultiplication(ChainTableByMultiplication::from_rng(values, rng)?)
            }
            Strategy::LinearProbing => {
                AnyTable::LinearProbing(OpenAddressTableByLinearProbing::from_rng(values, rng)?)
            }
            Strategy::QuadraticProbing => AnyTable::QuadraticProbing(
                OpenAddressTableByQuadraticProbing::from_rng(values, rng)?,
            ),
            Strategy::DoubleHashing => {
                AnyTable::DoubleHashing(OpenAddressTableByDoubleHashing::from_rng(values, rng)?)
            }
        })
    }

    fn as_table(&self) -> &dyn HashTable<K> {
        match self {
            AnyTable::ChainByDivision(table) => table,
            AnyTable::ChainByMultiplication(table) => table,
            AnyTable::LinearProbing(table) => table,
            AnyTable::QuadraticProbing(table) => table,
            AnyTable::DoubleHashing(table) => table,
        }
    }
}

/// Hash table of the strategy chosen at construction, keeping the original values.
///
/// # Examples
///
/// ```rust
/// use collide::facade::{Strategy, TableFacade};
///
/// let table = TableFacade::new(Strategy::LinearProbing, vec![2, 7, 11, 15], 42).unwrap();
/// assert_eq!(table.find_sum(9), Some((2, 7)));
///
/// let table = TableFacade::from_id(5, vec![2, 7, 11, 15], 42).unwrap();
///
/// assert_eq!(table.find_sum(9), Some((2, 7)));
/// assert_eq!(table.find_sum(100), None);
/// ```
pub struct TableFacade<K: Key> {
    strategy: Strategy,
    table: AnyTable<K>,
    values: Box<[K]>,
}

impl<K: Key> TableFacade<K> {
    /// Builds the table of `strategy` from `values` using `rng` as the source of randomness.
    pub fn from_rng<R: Rng + ?Sized>(
        strategy: Strategy,
        values: impl Into<Box<[K]>>,
        rng: &mut R,
    ) -> Result<Self, CollideError> {
        let values = values.into();
        let table = AnyTable::from_rng(strategy, &values, rng)?;

        log::debug!(
            "Built {} table of {} values: {} collisions",
            strategy,
            values.len(),
            table.as_table().num_collisions()
        );
        Ok(Self {
            strategy,
            table,
            values,
        })
    }

    /// Builds the table of `strategy` from `values` with randomness derived from `seed`.
    pub fn new(
        strategy: Strategy,
        values: impl Into<Box<[K]>>,
        seed: u64,
    ) -> Result<Self, CollideError> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        Self::from_rng(strategy, values, &mut rng)
    }

    /// Builds the table of the strategy numbered `id` (see [`Strategy`]) from `values`.
    ///
    /// # Errors
    ///
    /// - [`CollideError::UnknownStrategy`] if `id` is outside of `1..=5`.
    pub fn from_id(
        id: u8,
        values: impl Into<Box<[K]>>,
        seed: u64,
    ) -> Result<Self, CollideError> {
        Self::new(Strategy::try_from(id)?, values, seed)
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Get the values the table was built from in their original order.
    pub fn values(&self) -> &[K] {
        &self.values
    }

    pub fn table(&self) -> &dyn HashTable<K> {
        self.table.as_table()
    }

    pub fn num_collisions(&self) -> usize {
        self.table().num_collisions()
    }

    pub fn search(&self, value: &K) -> bool {
        self.table().search(value)
    }

    pub fn capacity(&self) -> usize {
        self.table().capacity()
    }

    pub fn load_factor(&self) -> f64 {
        self.table().load_factor()
    }

    /// Finds a pair of values summing to `target`.
    ///
    /// Returns `(v, target - v)` for the first value `v` in the original order whose complement is
    /// found in the table. The complement might be `v` itself. Values whose complement overflows
    /// the key type are skipped.
    pub fn find_sum(&self, target: K) -> Option<(K, K)> {
        let table = self.table();
        self.values.iter().find_map(|value| {
            let complement = value.complement(&target)?;
            table.search(&complement).then_some((*value, complement))
        })
    }
}

impl<K: Key> Debug for TableFacade<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableFacade")
            .field("strategy", &self.strategy)
            .field("num_values", &self.values.len())
            .field("capacity", &self.capacity())
            .field("collisions", &self.num_collisions())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collide_testing::init_logger;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_strategy_ids() {
        for (i, strategy) in Strategy::ALL.into_iter().enumerate() {
            assert_eq!(strategy.id() as usize, i + 1);
            assert_eq!(Strategy::try_from(strategy.id()), Ok(strategy));
        }
        assert_eq!(Strategy::try_from(0), Err(CollideError::UnknownStrategy(0)));
        assert_eq!(Strategy::try_from(6), Err(CollideError::UnknownStrategy(6)));
    }

    #[test]
    fn test_find_sum() {
        init_logger();
        for strategy in Strategy::ALL {
            let table = TableFacade::new(strategy, vec![2_i64, 7, 11, 15], 0).unwrap();
            assert_eq!(table.find_sum(9), Some((2, 7)), "Strategy: {}", strategy);
            assert_eq!(table.find_sum(26), Some((11, 15)), "Strategy: {}", strategy);
            assert_eq!(table.find_sum(10), None, "Strategy: {}", strategy);
        }
    }

    #[test]
    fn test_find_sum_pairs_value_with_itself() {
        for strategy in Strategy::ALL {
            let table = TableFacade::new(strategy, vec![3_i32, 8], 1).unwrap();
            assert_eq!(table.find_sum(6), Some((3, 3)), "Strategy: {}", strategy);
        }
    }

    #[test]
    fn test_find_sum_order_is_stable() {
        for strategy in Strategy::ALL {
            let table = TableFacade::new(strategy, vec![5_i64, 1, 4, 0], 2).unwrap();
            assert_eq!(table.find_sum(5), Some((5, 0)), "Strategy: {}", strategy);
        }
    }

    #[test]
    fn test_find_sum_skips_overflowing_complements() {
        for strategy in Strategy::ALL {
            let table = TableFacade::new(strategy, vec![200_u8, 10, 20], 3).unwrap();
            assert_eq!(table.find_sum(30), Some((10, 20)), "Strategy: {}", strategy);
            assert_eq!(table.find_sum(5), None, "Strategy: {}", strategy);
        }
    }

    #[test]
    fn test_search_all_values() {
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let values: Vec<i64> = (0..2000).map(|_| rng.random_range(-1_000_000..1_000_000)).collect();
        for strategy in Strategy::ALL {
            let table = TableFacade::from_rng(strategy, values.clone(), &mut rng).unwrap();
            assert_eq!(table.strategy(), strategy);
            assert_eq!(table.values(), values.as_slice());
            assert!(table.load_factor() < 1.0);
            for value in &values {
                assert!(table.search(value), "Strategy: {}, value: {}", strategy, value);
            }
        }
    }

    #[test]
    fn test_collisions_delegate_to_table() {
        let values: Vec<i64> = (0..100).map(|x| x * 17).collect();
        for strategy in Strategy::ALL {
            let table = TableFacade::new(strategy, values.clone(), 5).unwrap();
            assert_eq!(table.num_collisions(), table.table().num_collisions());
            assert_eq!(table.table().len(), values.len());
        }

        let table = TableFacade::new(Strategy::ChainByDivision, values.clone(), 5).unwrap();
        let expected = ChainTableByDivision::new(&values, 5).unwrap().num_collisions();
        assert_eq!(table.num_collisions(), expected);
    }

    #[test]
    fn test_from_id() {
        for id in 1..=5_u8 {
            let table = TableFacade::from_id(id, vec![2_i64, 7, 11, 15], 0).unwrap();
            assert_eq!(table.strategy().id(), id);
            assert_eq!(table.find_sum(9), Some((2, 7)));

            let expected = TableFacade::new(table.strategy(), vec![2_i64, 7, 11, 15], 0).unwrap();
            assert_eq!(table.capacity(), expected.capacity());
            assert_eq!(table.num_collisions(), expected.num_collisions());
        }
    }

    #[test]
    fn test_from_id_rejects_unknown_ids() {
        for id in [0_u8, 6, u8::MAX] {
            let result = TableFacade::from_id(id, vec![1_i64, 2, 3], 0);
            assert_eq!(result.unwrap_err(), CollideError::UnknownStrategy(id));
        }
    }

    #[test]
    fn test_empty_values() {
        for strategy in Strategy::ALL {
            let result = TableFacade::<i64>::new(strategy, Vec::new(), 0);
            assert_eq!(result.unwrap_err(), CollideError::EmptyInput);
        }
    }

    #[test]
    fn test_debug() {
        let table = TableFacade::new(Strategy::DoubleHashing, vec![1_u16, 2, 3], 0).unwrap();
        let repr = format!("{:?}", table);
        assert!(repr.contains("DoubleHashing"));
        assert!(repr.contains("num_values: 3"));
    }
}
