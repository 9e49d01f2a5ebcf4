//! Provides [`Key`] - the abstraction over integer values stored in the tables.
use std::fmt::Debug;

/// An integer value that can be stored in a hash table.
///
/// Implemented for all primitive integer types.
pub trait Key: Copy + Eq + Debug {
    /// Non-negative remainder of the division by `modulus` (floor-mod for negative values).
    fn residue(&self, modulus: usize) -> usize;

    /// The value reduced modulo `2 ** 64` in two's complement.
    fn low_bits(&self) -> u64;

    /// Computes `target - self`, returns `None` on overflow.
    fn complement(&self, target: &Self) -> Option<Self>;
}

macro_rules! impl_key_signed {
    ($($type:ty),*) => {
        $(
            impl Key for $type {
                #[inline]
                fn residue(&self, modulus: usize) -> usize {
                    debug_assert!(modulus > 0, r#""modulus" must be greater than 0"#);
                    (*self as i128).rem_euclid(modulus as i128) as usize
                }

                #[inline]
                fn low_bits(&self) -> u64 {
                    *self as u64
                }

                #[inline]
                fn complement(&self, target: &Self) -> Option<Self> {
                    target.checked_sub(*self)
                }
            }
        )*
    };
}

macro_rules! impl_key_unsigned {
    ($($type:ty),*) => {
        $(
            impl Key for $type {
                #[inline]
                fn residue(&self, modulus: usize) -> usize {
                    debug_assert!(modulus > 0, r#""modulus" must be greater than 0"#);
                    (*self as u128 % modulus as u128) as usize
                }

                #[inline]
                fn low_bits(&self) -> u64 {
                    *self as u64
                }

                #[inline]
                fn complement(&self, target: &Self) -> Option<Self> {
                    target.checked_sub(*self)
                }
            }
        )*
    };
}

impl_key_signed!(i8, i16, i32, i64, i128, isize);
impl_key_unsigned!(u8, u16, u32, u64, u128, usize);
