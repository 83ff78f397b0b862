//! Array-backed bag implementation.
//!
//! [`ArrayBag`] keeps its entries in an insertion-ordered `Vec` and looks
//! values up with a linear scan using [`Ord::cmp`] (no hashing). Every
//! operation is O(n) in the number of distinct values, which is bounded by
//! the bag's capacity (at most [`MAX_CAPACITY`]).

use std::iter::FusedIterator;

use crate::bag::{Bag, MAX_CAPACITY};
use crate::errors::{BagError, BagResult};

/// One stored value and its occurrence count.
///
/// Private infrastructure of [`ArrayBag`]; never exposed outside this module,
/// so iteration cannot hand out a handle that mutates the bag's bookkeeping.
#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    count: usize,
}

/// A bag backed by an insertion-ordered vector of `(value, count)` entries.
///
/// Invariants:
/// - every entry's count is at least 1 (an entry decremented to 0 is deleted
///   immediately, never retained),
/// - entry values are pairwise distinct under [`Ord::cmp`],
/// - the number of entries never exceeds the capacity fixed at construction.
#[derive(Debug, Clone)]
pub struct ArrayBag<T> {
    capacity: usize,
    entries: Vec<Entry<T>>,
}

impl<T> ArrayBag<T> {
    /// Create an empty bag with the default maximum capacity,
    /// [`MAX_CAPACITY`].
    pub fn new() -> Self {
        Self {
            capacity: MAX_CAPACITY,
            entries: Vec::new(),
        }
    }

    /// Create an empty bag holding at most `capacity` distinct values.
    ///
    /// Fails with [`BagError::InvalidCapacity`] when `capacity` is 0 or
    /// greater than [`MAX_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> BagResult<Self> {
        if capacity < 1 || capacity > MAX_CAPACITY {
            return Err(BagError::invalid_capacity(capacity));
        }
        Ok(Self {
            capacity,
            entries: Vec::new(),
        })
    }

    /// The maximum number of distinct values this bag can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over each distinct value exactly once, in entry order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterate over every occurrence of every value, entry order, each value
    /// repeated `count` times contiguously.
    pub fn all_occurrences_iter(&self) -> AllOccurrencesIter<'_, T> {
        AllOccurrencesIter {
            entries: &self.entries,
            index: 0,
            emitted: 0,
            remaining: self.entries.iter().map(|e| e.count).sum(),
        }
    }
}

impl<T: Ord> ArrayBag<T> {
    fn find_mut(&mut self, value: &T) -> Option<&mut Entry<T>> {
        self.entries.iter_mut().find(|e| e.value.cmp(value).is_eq())
    }

    fn position(&self, value: &T) -> Option<usize> {
        self.entries.iter().position(|e| e.value.cmp(value).is_eq())
    }
}

impl<T> Default for ArrayBag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Bag<T> for ArrayBag<T> {
    fn add(&mut self, value: T) -> BagResult<()> {
        self.add_with_occurrences(value, 1)
    }

    fn add_with_occurrences(&mut self, value: T, occurrences: usize) -> BagResult<()> {
        if occurrences == 0 {
            return Ok(());
        }
        if let Some(entry) = self.find_mut(&value) {
            entry.count = entry.count.saturating_add(occurrences);
            return Ok(());
        }
        if self.entries.len() < self.capacity {
            self.entries.push(Entry {
                value,
                count: occurrences,
            });
            Ok(())
        } else {
            Err(BagError::capacity_exceeded(self.capacity))
        }
    }

    fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    fn count_of(&self, value: &T) -> usize {
        self.position(value).map_or(0, |i| self.entries[i].count)
    }

    fn remove(&mut self, value: &T) {
        if let Some(i) = self.position(value) {
            self.entries[i].count -= 1;
            if self.entries[i].count == 0 {
                self.entries.remove(i);
            }
        }
    }

    fn size(&self) -> usize {
        self.entries.len()
    }

    fn merged_all_unique(&self, other: &Self) -> BagResult<Self>
    where
        T: Clone,
    {
        let mut merged = ArrayBag::new();
        for entry in self.entries.iter().chain(&other.entries) {
            if !merged.contains(&entry.value) {
                merged.add(entry.value.clone())?;
            }
        }
        Ok(merged)
    }

    fn merged_all_occurrences(&self, other: &Self) -> BagResult<Self>
    where
        T: Clone,
    {
        let mut merged = ArrayBag::new();
        for entry in self.entries.iter().chain(&other.entries) {
            merged.add_with_occurrences(entry.value.clone(), entry.count)?;
        }
        Ok(merged)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(ArrayBag::iter(self))
    }

    fn all_occurrences_iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(ArrayBag::all_occurrences_iter(self))
    }
}

impl<'a, T> IntoIterator for &'a ArrayBag<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over each distinct value in an [`ArrayBag`], in entry order.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, Entry<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| &e.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over every occurrence of every value in an [`ArrayBag`].
///
/// Explicit state machine over `(index, emitted)`: while the current entry
/// has unemitted occurrences, yield its value; otherwise advance to the next
/// entry and yield its value as the first emission. The advance step never
/// indexes past the end because `get` resolves a missing next entry to
/// termination.
#[derive(Debug, Clone)]
pub struct AllOccurrencesIter<'a, T> {
    entries: &'a [Entry<T>],
    index: usize,
    emitted: usize,
    remaining: usize,
}

impl<'a, T> Iterator for AllOccurrencesIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.get(self.index)?;
        let entry = if self.emitted < entry.count {
            self.emitted += 1;
            entry
        } else {
            self.index += 1;
            self.emitted = 1;
            self.entries.get(self.index)?
        };
        self.remaining -= 1;
        Some(&entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for AllOccurrencesIter<'_, T> {}
impl<T> FusedIterator for AllOccurrencesIter<'_, T> {}
