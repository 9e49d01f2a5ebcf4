//! Core traits, key abstraction and the error type shared by the `collide` workspace.
pub mod core;
pub use self::core::*;
pub mod error;
pub use error::*;
pub mod key;
pub use key::*;
