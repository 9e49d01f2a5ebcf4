//! Open-addressing hash tables: every slot holds at most one value, collisions are resolved by
//! probing other slots.
mod core;
pub use self::core::*;
mod ctors;
mod hash_table;
