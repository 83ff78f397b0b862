//! # multibag
//!
//! A bounded bag (multiset) container: each distinct value is stored once,
//! together with a count of how many occurrences of it the bag holds.
//!
//! This crate defines:
//!
//! - **`Bag` trait**: the capability contract — add, remove, membership and
//!   count queries, two merge operators, and two iteration modes
//! - **`ArrayBag`**: the array-backed implementation, insertion-ordered with
//!   linear-scan lookup over at most [`MAX_CAPACITY`] distinct values
//! - **`BagKind` / `BagConfig`**: explicit construction configuration — a
//!   closed enum of implementations plus a builder-style config value, with
//!   no global factory state
//! - **`BagError`**: the error taxonomy (`InvalidCapacity`,
//!   `CapacityExceeded`, `UnknownImplementation`)
//!
//! Bags are single-threaded, purely in-memory values: every operation is
//! synchronous, bounded by the capacity, and never blocks. The capacity
//! limits **distinct** values, not total occurrences, and is fixed at
//! construction.
//!
//! ## Usage
//!
//! ```
//! use multibag::prelude::*;
//!
//! # fn main() -> BagResult<()> {
//! let mut bag = ArrayBag::with_capacity(16)?;
//! bag.add("apple")?;
//! bag.add_with_occurrences("pear", 3)?;
//!
//! assert_eq!(bag.size(), 2);
//! assert_eq!(bag.count_of(&"pear"), 3);
//!
//! // Each distinct value once...
//! assert_eq!(bag.iter().count(), 2);
//! // ...or every occurrence of every value.
//! assert_eq!(bag.all_occurrences_iter().count(), 4);
//! # Ok(())
//! # }
//! ```

pub mod array_bag;
pub mod bag;
pub mod config;
pub mod errors;

// Re-export everything in prelude for convenience
pub mod prelude {
    pub use crate::array_bag::{AllOccurrencesIter, ArrayBag, Iter};
    pub use crate::bag::{Bag, MAX_CAPACITY};
    pub use crate::config::{BagConfig, BagKind};
    pub use crate::errors::{BagError, BagResult};
}

// Also re-export at crate root
pub use prelude::*;
