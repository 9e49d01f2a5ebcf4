//! Data generation utilities useful for testing.
use rand::Rng;
use std::collections::HashSet;
use std::hash::Hash;

/// Provides capabilities to generate random values of the implementer-type.
pub trait Generate<R: Rng>: Sized {
    /// Parameters for data-generation specific for the type.
    type GenerateParams: Default;

    /// Generates a single random value of the type.
    fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self;

    /// Generates a slice of **unique** random values of the type in the order of generation.
    fn generate_many(rng: &mut R, params: &Self::GenerateParams, size: usize) -> Box<[Self]>
    where
        Self: Hash + Eq + Copy,
    {
        let mut seen = HashSet::with_capacity(size);
        let mut values = Vec::with_capacity(size);
        while values.len() < size {
            let value = Self::generate(rng, params);
            if seen.insert(value) {
                values.push(value);
            }
        }
        values.into_boxed_slice()
    }
}

/// Parameters for [`Generate`] implementations that generate numeric values.
pub struct NumParams<T> {
    min: T,
    max: T,
}

impl<T> NumParams<T> {
    /// Creates a new instance of [`NumParams`] with the specified minimum and maximum values.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

macro_rules! impl_generate_num {
    ($($type:ty),*) => {
        $(
            impl Default for NumParams<$type> {
                fn default() -> Self {
                    Self { min: <$type>::MIN, max: <$type>::MAX }
                }
            }

            impl<R: Rng> Generate<R> for $type
            {
                type GenerateParams = NumParams<$type>;

                fn generate(rng: &mut R, params: &Self::GenerateParams) -> Self {
                    rng.random_range(params.min..=params.max)
                }
            }
        )*
    };
}

impl_generate_num!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128);

/// Generates `size` unique values spread over the whole range of the type.
pub fn generate_values<R, K>(rng: &mut R, size: usize) -> Box<[K]>
where
    R: Rng,
    K: Generate<R> + Hash + Eq + Copy,
{
    K::generate_many(rng, &K::GenerateParams::default(), size)
}

/// Picks a number of values to build a test table from for an integer type of `bits` width.
///
/// Narrow types get half of their value range, so that absent values always exist.
pub fn table_size_for_bits(bits: u32) -> usize {
    if bits >= u32::BITS {
        9999
    } else {
        (1_usize << bits.min(16)) / 2
    }
}

/// Upper bound of [`incremental_size_for_bits`].
pub const MAX_INCREMENTAL_SIZE: usize = 1024;

/// Picks a number of values for tests that inspect the table after every single insert.
///
/// Such checks may cost `O(capacity)` per insert, so the size is capped by
/// [`MAX_INCREMENTAL_SIZE`].
pub fn incremental_size_for_bits(bits: u32) -> usize {
    table_size_for_bits(bits).min(MAX_INCREMENTAL_SIZE)
}
