//! Separate-chaining hash tables: every slot holds a chain of the values hashed into it.
mod bucket;
pub use bucket::*;
mod core;
pub use self::core::*;
mod ctors;
mod drop;
mod hash_table;
