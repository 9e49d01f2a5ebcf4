//! Implements constructors for [`OpenAddressTable`].
use crate::open_addressing::OpenAddressTable;
use crate::primes::find_prime;
use collide_core::{build_table, CollideError, HashTable, Key, ProbeHasher};
use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

impl<K: Key, H: ProbeHasher<K>> OpenAddressTable<K, H> {
    /// Creates an empty table with as many slots as the `hasher` produces.
    pub fn with_hasher(hasher: H) -> Self {
        let slots = vec![None; hasher.num_slots()].into_boxed_slice();
        Self {
            hasher,
            slots,
            len: 0,
            collisions: 0,
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
    ///
    /// # Errors
    ///
    /// - [`CollideError::TableOverfilled`] if some value exhausts its probe sequence. The whole
    ///   construction fails in this case.
    pub fn from_rng<R: Rng + ?Sized>(values: &[K], rng: &mut R) -> Result<Self, CollideError> {
        if values.is_empty() {
            return Err(CollideError::EmptyInput);
        }

        let mut table = Self::sized_for(values.len(), rng)?;
        build_table(&mut table, values.iter().copied())?;

        log::debug!(
            "Built open-addressing table: {} values, {} slots, {} collisions",
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
