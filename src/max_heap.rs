//! BoundedMaxHeap is a binary max-heap living in a buffer whose size is fixed
//! when the heap is created.  The largest key is always at the root, so it can
//! be read in O(1) and removed in O(log n); insertion is also O(log n).
//!
//! The capacity is a hard limit.  Inserting into a full heap is rejected with
//! [`HeapError::CapacityExceeded`] and the heap is left as it was; likewise,
//! extracting from an empty heap is rejected with [`HeapError::EmptyHeap`].
//!
//! The `Display` implementation prints each internal node together with its
//! children, one line per node, which is handy when eyeballing small heaps.

use std::fmt::{self, Debug, Display};

use crate::error::{HeapError, Result};
use crate::sift::{self, MaxFirst, ROOT};
use crate::Key;

#[derive(Clone, PartialEq, Eq)]
pub struct BoundedMaxHeap {
    // Slots 0..size hold the heap, in 1-based position order; the rest are unused.
    slots: Box<[Key]>,
    size: usize,
}

impl BoundedMaxHeap {
    /// Returns an empty heap that can hold up to `capacity` keys.
    pub fn new(capacity: usize) -> Self {
        log::debug!("new max-heap, capacity {capacity}");
        Self {
            slots: vec![0; capacity].into_boxed_slice(),
            size: 0,
        }
    }

    /// Builds a heap from unordered keys in O(n).
    /// Fails if there are more keys than `capacity`.
    pub fn from_slice(capacity: usize, keys: &[Key]) -> Result<Self> {
        if keys.len() > capacity {
            log::warn!("{} keys do not fit in capacity {capacity}", keys.len());
            return Err(HeapError::CapacityExceeded { capacity });
        }
        let mut heap = Self::new(capacity);
        heap.slots[..keys.len()].copy_from_slice(keys);
        heap.size = keys.len();
        sift::build::<MaxFirst>(heap.as_mut_slice());
        Ok(heap)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.size == self.slots.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the largest key without removing it.
    #[inline]
    pub fn peek(&self) -> Option<Key> {
        self.as_slice().first().copied()
    }

    /// The occupied slots, in heap order (root first).
    #[inline]
    pub fn as_slice(&self) -> &[Key] {
        &self.slots[..self.size]
    }

    fn as_mut_slice(&mut self) -> &mut [Key] {
        &mut self.slots[..self.size]
    }

    /// Adds a key as the next leaf and sifts it up to its place.
    pub fn insert(&mut self, key: Key) -> Result<()> {
        if self.is_full() {
            log::warn!("insert of {key} rejected, heap is full");
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        self.slots[self.size] = key;
        self.size += 1;
        let last = self.size;
        let pos = sift::sift_up::<MaxFirst>(self.as_mut_slice(), last);
        log::trace!("inserted {key} at position {pos}, size {last}");
        Ok(())
    }

    /// Removes and returns the largest key.
    /// The last leaf takes the root's place and is sifted down.
    pub fn extract_max(&mut self) -> Result<Key> {
        if self.is_empty() {
            log::warn!("extract from empty heap");
            return Err(HeapError::EmptyHeap);
        }
        let max = self.slots[0];
        self.slots[0] = self.slots[self.size - 1];
        self.size -= 1;
        sift::sift_down::<MaxFirst>(self.as_mut_slice(), ROOT);
        log::trace!("extracted {max}, size {}", self.size);
        Ok(max)
    }

    /// Verifies that no key is larger than its parent.
    pub fn check(&self) -> Result<()> {
        match sift::first_violation::<MaxFirst>(self.as_slice()) {
            None => Ok(()),
            Some(index) => {
                log::warn!("max-heap invariant violated at position {index}");
                Err(HeapError::InvariantViolated { index })
            }
        }
    }

    /// Returns (parent, left child, right child) for every internal node,
    /// root first.  The right child is absent for the last internal node
    /// when the size is even.
    pub fn triples(&self) -> impl Iterator<Item = (Key, Key, Option<Key>)> + '_ {
        let heap = self.as_slice();
        (ROOT..=heap.len() / 2).map(move |pos| {
            (
                heap[pos - 1],
                heap[sift::left(pos) - 1],
                heap.get(sift::right(pos) - 1).copied(),
            )
        })
    }
}

impl Display for BoundedMaxHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (parent, left, right) in self.triples() {
            write!(f, " PARENT : {parent} LEFT CHILD : {left}")?;
            if let Some(right) = right {
                write!(f, " RIGHT CHILD : {right}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// Only the occupied slots are interesting.
impl Debug for BoundedMaxHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundedMaxHeap {{ size: {}, capacity: {}, keys: {:?} }}",
            self.size,
            self.capacity(),
            self.as_slice()
        )
    }
}
