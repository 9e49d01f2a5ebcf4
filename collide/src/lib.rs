//! Fixed-capacity hash tables of integers comparing collision resolution strategies.
//!
//! Two families are provided:
//!
//! - [`chaining`] - separate-chaining tables hashed by division or by multiplication.
//! - [`open_addressing`] - flat tables probed linearly, quadratically or by double hashing.
//!
//! [`facade::TableFacade`] picks one of the five strategies by its numeric identifier.
pub mod chaining;
pub mod facade;
pub mod hashing;
pub mod open_addressing;
pub mod primes;

pub use collide_core::{build_table, CollideError, HashTable, Key};
