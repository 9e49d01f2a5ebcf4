//! Hash functions of both table families.
//!
//! Each function is a standalone hasher with an immutable state captured at construction.
pub mod division;
pub use division::*;
pub mod multiplication;
pub use multiplication::*;
pub mod probing;
pub use probing::*;

#[cfg(test)]
pub(crate) mod flawed;
