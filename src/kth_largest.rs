//! KthLargest keeps track of the k largest values seen so far in a stream,
//! and after every new value reports the k-th largest of them.
//!
//! It holds the k largest values in a min-heap, so the k-th largest is simply
//! the root.  A new value that does not beat the root can never enter the top
//! k, so it is dropped at the cost of one comparison; otherwise it replaces
//! the root and is sifted down.  Either way the heap never grows past k, and
//! each value costs O(log k).
//!
//! Until k values have been seen, the heap holds all of them and the reported
//! value is the smallest seen so far.
//!
//! The heap lives in a `Vec` that grows as values arrive, so a large k costs
//! nothing until it is actually filled.

use crate::error::{HeapError, Result};
use crate::sift::{self, MinFirst, ROOT};
use crate::Key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KthLargest {
    // Min-heap of the k largest values seen, in 1-based position order.
    heap: Vec<Key>,
    // How many of the largest values to keep.
    k: usize,
    // Number of values seen, including the initial ones.
    seen: u64,
}

impl KthLargest {
    /// Returns a tracker for the k-th largest value, primed with `initial`.
    /// Fails if `k` is zero.
    pub fn new<I>(k: usize, initial: I) -> Result<Self>
    where
        I: IntoIterator<Item = Key>,
    {
        if k == 0 {
            return Err(HeapError::InvalidConfiguration("k must be at least 1"));
        }
        let mut heap: Vec<Key> = initial.into_iter().collect();
        let seen = heap.len() as u64;
        sift::build::<MinFirst>(&mut heap);
        let mut tracker = Self { heap, k, seen };
        let mut evicted = 0usize;
        while tracker.heap.len() > k {
            tracker.pop_min();
            evicted += 1;
        }
        log::debug!("new k-th largest tracker, k {k}, {seen} initial values, {evicted} evicted");
        Ok(tracker)
    }

    /// Considers a new value and returns the k-th largest value seen so far,
    /// or the smallest value seen if fewer than k have been seen.
    pub fn add(&mut self, value: Key) -> Key {
        self.seen += 1;
        if self.heap.len() < self.k {
            self.heap.push(value);
            let last = self.heap.len();
            sift::sift_up::<MinFirst>(&mut self.heap, last);
        } else if value > self.heap[0] {
            // Same as pushing and then evicting the minimum.
            log::trace!("{value} evicts {}", self.heap[0]);
            self.heap[0] = value;
            sift::sift_down::<MinFirst>(&mut self.heap, ROOT);
        } else {
            log::trace!("{value} is not in the top {}", self.k);
        }
        self.heap[0]
    }

    // Removes the smallest value; the last leaf takes its place.
    fn pop_min(&mut self) -> Option<Key> {
        if self.heap.is_empty() {
            return None;
        }
        let min = self.heap.swap_remove(0);
        sift::sift_down::<MinFirst>(&mut self.heap, ROOT);
        log::trace!("evicted {min}");
        Some(min)
    }

    /// Returns the current k-th largest value (or the smallest, if fewer
    /// than k have been seen), or None if nothing has been seen.
    #[inline]
    pub fn peek(&self) -> Option<Key> {
        self.heap.first().copied()
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of values currently held; at most k.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of values seen so far, whether or not they were kept.
    #[inline]
    pub fn seen(&self) -> u64 {
        self.seen
    }

    /// The held values, in heap order (smallest first).
    #[inline]
    pub fn as_slice(&self) -> &[Key] {
        &self.heap
    }

    /// Returns the held values in descending order.
    pub fn to_sorted_vec(&self) -> Vec<Key> {
        let mut top = self.heap.clone();
        top.sort_unstable_by(|a, b| b.cmp(a));
        top
    }

    /// Verifies that no value is smaller than its parent.
    pub fn check(&self) -> Result<()> {
        if self.heap.len() > self.k {
            log::warn!("tracker holds {} values, more than k {}", self.heap.len(), self.k);
            return Err(HeapError::InvariantViolated { index: self.k + 1 });
        }
        match sift::first_violation::<MinFirst>(&self.heap) {
            None => Ok(()),
            Some(index) => {
                log::warn!("min-heap invariant violated at position {index}");
                Err(HeapError::InvariantViolated { index })
            }
        }
    }
}

impl Extend<Key> for KthLargest {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}
