//! Construction configuration for bag implementations.
//!
//! Which implementation to build is a closed, compile-time-checked choice:
//! [`BagKind`] enumerates every supported variant, and [`BagConfig`] is an
//! explicit value carrying that choice plus a capacity. There is no
//! process-wide factory state; pass a config to whatever assembles the bag.
//!
//! [`BagKind`] also parses from a string for configuration-file paths, and
//! only that path can fail with
//! [`UnknownImplementation`](crate::errors::BagError::UnknownImplementation).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::array_bag::ArrayBag;
use crate::bag::MAX_CAPACITY;
use crate::errors::{BagError, BagResult};

/// Supported bag implementations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BagKind {
    /// Insertion-ordered array of entries with linear-scan lookup.
    #[default]
    Array,
}

impl BagKind {
    /// The configuration name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Array => "array",
        }
    }
}

impl fmt::Display for BagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BagKind {
    type Err = BagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "array" => Ok(Self::Array),
            other => Err(BagError::unknown_implementation(other)),
        }
    }
}

/// Configuration describing which bag to build and with what capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagConfig {
    /// Implementation to construct.
    #[serde(default)]
    pub kind: BagKind,

    /// Maximum number of distinct values, defaulting to [`MAX_CAPACITY`].
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    MAX_CAPACITY
}

impl Default for BagConfig {
    fn default() -> Self {
        Self {
            kind: BagKind::default(),
            capacity: MAX_CAPACITY,
        }
    }
}

impl BagConfig {
    /// Create a config for `kind` with the default maximum capacity.
    pub fn new(kind: BagKind) -> Self {
        Self {
            kind,
            capacity: MAX_CAPACITY,
        }
    }

    /// Set the capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Build the configured bag.
    ///
    /// Propagates [`BagError::InvalidCapacity`] from the underlying
    /// constructor.
    pub fn build<T: Ord>(&self) -> BagResult<ArrayBag<T>> {
        match self.kind {
            BagKind::Array => ArrayBag::with_capacity(self.capacity),
        }
    }
}
