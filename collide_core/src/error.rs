//! Error definitions.
use thiserror::Error;

/// Project-wise error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollideError {
    /// Open-addressing insert exhausted its probe sequence without finding an empty slot.
    ///
    /// Fatal to the construction attempt: the table has to be rebuilt from scratch.
    #[error("Table is overfilled: no empty slot found within {capacity} probes.")]
    TableOverfilled { capacity: usize },

    /// A hash function produced a slot outside of the table.
    ///
    /// Means a defect in the hash function implementation rather than a runtime condition.
    #[error("Table integrity violation: slot {slot} is out of range for {num_slots} slots.")]
    TableIntegrityViolation { slot: usize, num_slots: usize },

    /// No prime table size can be derived for the given number of elements.
    #[error("Unable to find a prime table size for {0} elements.")]
    InvalidPrimeBound(usize),

    /// A table can't be built from an empty collection of values.
    #[error("Unable to build a table from an empty collection of values.")]
    EmptyInput,

    /// Strategy identifier is outside of the supported `1..=5` range.
    #[error("Unknown hash table strategy: {0}.")]
    UnknownStrategy(u8),
}
