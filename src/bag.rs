//! The bag capability contract.
//!
//! A bag (multiset) holds a collection of values together with a count of how
//! many copies of each value are in the collection. Each distinct value is
//! stored only once, alongside its occurrence count; the count is decremented
//! when a value is removed, and values with a count of zero are no longer
//! stored.
//!
//! Values are compared with [`Ord::cmp`]: two values belong to the same entry
//! iff the comparison yields `Equal`, mirroring the equality a total order
//! induces. Only equality is used; bags are unordered.

use crate::errors::BagResult;

/// The fixed global maximum capacity of a bag.
///
/// This bounds the number of **distinct** values a bag can hold, not the
/// number of occurrences of each value.
pub const MAX_CAPACITY: usize = 1000;

/// Contract implemented by every bag variant.
///
/// All operations are synchronous and run to completion; the worst case is a
/// linear scan over at most [`MAX_CAPACITY`] entries. Iterators borrow the
/// bag, so the borrow checker statically rules out mutating a bag while an
/// iterator over it is alive.
pub trait Bag<T: Ord> {
    /// Add one occurrence of `value`.
    ///
    /// Increments the count of an equal entry if one exists; otherwise
    /// inserts a new entry with count 1. Fails with
    /// [`CapacityExceeded`](crate::errors::BagError::CapacityExceeded) when
    /// the bag already holds its capacity in distinct values and `value` is
    /// not among them.
    fn add(&mut self, value: T) -> BagResult<()>;

    /// Add `occurrences` occurrences of `value`.
    ///
    /// Equivalent to calling [`add`](Bag::add) exactly `occurrences` times;
    /// `occurrences == 0` has no effect. Failure leaves any occurrences
    /// already added in place rather than rolling them back. In practice the
    /// failure can only happen before the first occurrence lands, because
    /// incrementing an entry already present never exceeds capacity.
    /// Occurrence counts saturate at `usize::MAX`.
    fn add_with_occurrences(&mut self, value: T, occurrences: usize) -> BagResult<()>;

    /// Check whether the bag contains a value equal to `value`.
    fn contains(&self, value: &T) -> bool;

    /// The occurrence count stored for `value`, or 0 if absent.
    fn count_of(&self, value: &T) -> usize;

    /// Remove one occurrence of `value`.
    ///
    /// Deletes the entry entirely when its count reaches zero. Removing a
    /// value that is not in the bag does nothing.
    fn remove(&mut self, value: &T);

    /// The number of distinct values stored.
    ///
    /// Occurrence counts are not taken into account.
    fn size(&self) -> usize;

    /// Check whether the bag holds no values at all.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Create a new bag containing every distinct value from `self` and
    /// `other`, each with a count of exactly 1 regardless of original counts.
    ///
    /// Neither operand is mutated. The new bag is sized with the default
    /// maximum capacity, [`MAX_CAPACITY`]; the merge fails with
    /// [`CapacityExceeded`](crate::errors::BagError::CapacityExceeded) if the
    /// union holds more distinct values than that.
    fn merged_all_unique(&self, other: &Self) -> BagResult<Self>
    where
        Self: Sized,
        T: Clone;

    /// Create a new bag containing every distinct value from `self` and
    /// `other`, each with a count equal to the sum of the two bags' counts
    /// for that value (absent counts as 0).
    ///
    /// Sizing and failure behavior match
    /// [`merged_all_unique`](Bag::merged_all_unique).
    fn merged_all_occurrences(&self, other: &Self) -> BagResult<Self>
    where
        Self: Sized,
        T: Clone;

    /// Iterate over each distinct value exactly once, in entry order.
    ///
    /// Every call produces a fresh iterator.
    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    /// Iterate over every occurrence of every value: each distinct value is
    /// yielded `count` times contiguously before the next entry, in entry
    /// order.
    fn all_occurrences_iter(&self) -> Box<dyn Iterator<Item = &T> + '_>;
}
