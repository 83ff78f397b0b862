//! Standard error types for bag construction and mutation.
//!
//! All failures are synchronous return-path errors; nothing is retried
//! internally. A [`BagError::CapacityExceeded`] leaves the bag in a valid,
//! partially-updated state: occurrences added before the failing insertion
//! stand. Callers should read it as "no further additions possible", not as
//! data corruption.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bag::MAX_CAPACITY;

/// Standard error type for all bag operations.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BagError {
    /// Construction was attempted with a capacity outside `1..=MAX_CAPACITY`.
    ///
    /// Non-recoverable for that construction attempt; retry with a valid
    /// capacity.
    #[error("invalid capacity {requested}: must be between 1 and {}", MAX_CAPACITY)]
    InvalidCapacity {
        /// The capacity the caller asked for.
        requested: usize,
    },

    /// An insertion would exceed the bag's distinct-value capacity.
    ///
    /// The capacity bounds distinct values, not total occurrences: adding
    /// another occurrence of a value already present always succeeds.
    #[error("bag is full: already holds {capacity} distinct values")]
    CapacityExceeded {
        /// The capacity of the bag that rejected the insertion.
        capacity: usize,
    },

    /// A string-keyed implementation lookup did not match any [`BagKind`].
    ///
    /// Raised only when parsing an implementation name; building through the
    /// enum directly cannot fail this way.
    ///
    /// [`BagKind`]: crate::config::BagKind
    #[error("unknown bag implementation: {name}")]
    UnknownImplementation {
        /// The name that failed to resolve.
        name: String,
    },
}

impl BagError {
    /// Create a [`BagError::InvalidCapacity`] error.
    pub fn invalid_capacity(requested: usize) -> Self {
        Self::InvalidCapacity { requested }
    }

    /// Create a [`BagError::CapacityExceeded`] error.
    pub fn capacity_exceeded(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }

    /// Create a [`BagError::UnknownImplementation`] error.
    pub fn unknown_implementation(name: impl Into<String>) -> Self {
        Self::UnknownImplementation { name: name.into() }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCapacity { .. } => "INVALID_CAPACITY",
            Self::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            Self::UnknownImplementation { .. } => "UNKNOWN_IMPLEMENTATION",
        }
    }

    /// Whether the failed operation can be retried with different input.
    ///
    /// A full bag rejects every further distinct value, so
    /// `CapacityExceeded` is not recoverable within the same bag; the other
    /// kinds are fixed by correcting the caller's input.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::CapacityExceeded { .. })
    }
}

/// Result type alias for bag operations.
pub type BagResult<T> = Result<T, BagError>;
