//! Utilities for testing hash table implementations.
use crate::Generate;
use collide_core::{HashTable, Key};
use rand::Rng;
use std::collections::HashSet;
use std::hash::Hash;

/// Tests value lookup for a given table.
///
/// Every value of `values` must be found, randomly generated absent values must not.
pub fn test_search<R, K, T>(rng: &mut R, table: &T, values: &[K])
where
    R: Rng,
    K: Key + Hash + Generate<R>,
    T: HashTable<K> + ?Sized,
{
    let present: HashSet<&K> = values.iter().collect();

    assert_eq!(table.len(), values.len());
    for value in values {
        assert!(table.search(value), "Value: {:?}", value);
    }

    let mut absent = Vec::new();
    for _ in 0..values.len().div_ceil(3) {
        loop {
            let value = K::generate(rng, &<K as Generate<R>>::GenerateParams::default());
            if !present.contains(&value) {
                absent.push(value);
                break;
            }
        }
    }
    for value in absent {
        assert!(!table.search(&value), "Value: {:?}", value);
    }
}

/// Inserts `values` one by one checking that the collision count never decreases.
pub fn test_collisions_non_decreasing<K, T>(table: &mut T, values: &[K])
where
    K: Key,
    T: HashTable<K> + ?Sized,
{
    let mut previous = table.num_collisions();
    for (i, value) in values.iter().enumerate() {
        table.insert(*value).unwrap();
        let current = table.num_collisions();
        assert!(
            current >= previous,
            "Collisions decreased from {} to {} after inserting {:?}",
            previous,
            current,
            value
        );
        assert_eq!(table.len(), i + 1);
        previous = current;
    }
    assert!(table.load_factor() < 1.0);
}

/// Generates tests of a table type for a single integer type.
///
/// The table type must be a type alias generic over the key with `from_rng` and `sized_for`
/// constructors.
#[macro_export]
macro_rules! generate_table_int_tests {
    ($Table:ident, $type:ident) => {
        compose_idents::compose_idents!(
            test_fn = [test_build_search_, $type],
            {
                #[test]
                fn test_fn() {
                    use rand::SeedableRng;
                    use rand_chacha::ChaCha20Rng;

                    $crate::init_logger();
                    let mut rng = ChaCha20Rng::seed_from_u64(42);
                    let values: Box<[$type]> = $crate::generate_values(
                        &mut rng,
                        $crate::table_size_for_bits(<$type>::BITS),
                    );
                    let table = <$Table<$type>>::from_rng(&values, &mut rng).unwrap();
                    $crate::test_search(&mut rng, &table, &values);
                }
            }
        );

        compose_idents::compose_idents!(
            test_fn = [test_collisions_non_decreasing_, $type],
            {
                #[test]
                fn test_fn() {
                    use rand::SeedableRng;
                    use rand_chacha::ChaCha20Rng;

                    $crate::init_logger();
                    let mut rng = ChaCha20Rng::seed_from_u64(43);
                    let values: Box<[$type]> = $crate::generate_values(
                        &mut rng,
                        $crate::incremental_size_for_bits(<$type>::BITS),
                    );
                    let mut table = <$Table<$type>>::sized_for(values.len(), &mut rng).unwrap();
                    $crate::test_collisions_non_decreasing(&mut table, &values);
                }
            }
        );
    };
}

/// Generates tests of a table type for every integer type.
#[macro_export]
macro_rules! generate_table_tests {
    ($Table:ident) => {
        $crate::generate_table_int_tests!($Table, u8);
        $crate::generate_table_int_tests!($Table, i8);
        $crate::generate_table_int_tests!($Table, u16);
        $crate::generate_table_int_tests!($Table, i16);
        $crate::generate_table_int_tests!($Table, u32);
        $crate::generate_table_int_tests!($Table, i32);
        $crate::generate_table_int_tests!($Table, u64);
        $crate::generate_table_int_tests!($Table, i64);
        $crate::generate_table_int_tests!($Table, u128);
        $crate::generate_table_int_tests!($Table, i128);
    };
}
