//! The sift procedures shared by both heaps.
//!
//! A heap here is just a slice viewed as a nearly complete binary tree.
//! Positions are 1-based, so the root is at position 1, the parent of `pos`
//! is `pos / 2`, and its children are `2 * pos` and `2 * pos + 1`.
//! Position `pos` lives in slot `pos - 1` of the slice.
//!
//! Which key belongs nearer the root is decided by a [`Polarity`]:
//! [`MaxFirst`] gives a max-heap and [`MinFirst`] a min-heap.
//! There is no sentinel above the root; sifting up stops at [`ROOT`].

use crate::Key;

pub const ROOT: usize = 1;

/// Decides which of two keys belongs nearer the root.
pub trait Polarity {
    /// True if `a` must sit strictly above `b`.
    fn outranks(a: Key, b: Key) -> bool;
}

/// Largest key at the root.
#[derive(Debug, Clone, Copy)]
pub struct MaxFirst;

/// Smallest key at the root.
#[derive(Debug, Clone, Copy)]
pub struct MinFirst;

impl Polarity for MaxFirst {
    #[inline]
    fn outranks(a: Key, b: Key) -> bool {
        a > b
    }
}

impl Polarity for MinFirst {
    #[inline]
    fn outranks(a: Key, b: Key) -> bool {
        a < b
    }
}

#[inline]
pub fn parent(pos: usize) -> usize {
    pos / 2
}

#[inline]
pub fn left(pos: usize) -> usize {
    2 * pos
}

#[inline]
pub fn right(pos: usize) -> usize {
    2 * pos + 1
}

/// A position is a leaf if it is in the heap but has no children.
#[inline]
pub fn is_leaf(pos: usize, size: usize) -> bool {
    pos > size / 2 && pos <= size
}

// Swaps two 1-based positions.
#[inline]
fn swap(heap: &mut [Key], a: usize, b: usize) {
    heap.swap(a - 1, b - 1);
}

#[inline]
fn key(heap: &[Key], pos: usize) -> Key {
    heap[pos - 1]
}

/// Moves the key at `pos` up until its parent outranks it or it reaches the root.
/// Returns the position where it came to rest.
pub fn sift_up<P: Polarity>(heap: &mut [Key], mut pos: usize) -> usize {
    while pos > ROOT {
        let up = parent(pos);
        if !P::outranks(key(heap, pos), key(heap, up)) {
            break;
        }
        swap(heap, pos, up);
        pos = up;
    }
    pos
}

/// Moves the key at `pos` down, always trading places with the child that
/// outranks its sibling, until neither child outranks it.
/// Assumes both subtrees of `pos` already satisfy the invariant.
/// Returns the position where it came to rest.
pub fn sift_down<P: Polarity>(heap: &mut [Key], mut pos: usize) -> usize {
    let size = heap.len();
    while pos >= ROOT && pos <= size && !is_leaf(pos, size) {
        // Not a leaf, so the left child exists; the right one may not.
        let (l, r) = (left(pos), right(pos));
        let best = if r <= size && P::outranks(key(heap, r), key(heap, l)) {
            r
        } else {
            l
        };
        if !P::outranks(key(heap, best), key(heap, pos)) {
            break;
        }
        swap(heap, pos, best);
        pos = best;
    }
    pos
}

/// Rearranges an arbitrary slice into a heap in O(n).
/// Positions past `size / 2` are leaves, so they are already heaps.
pub fn build<P: Polarity>(heap: &mut [Key]) {
    for pos in (ROOT..=heap.len() / 2).rev() {
        sift_down::<P>(heap, pos);
    }
}

/// Returns the first position whose key outranks its parent's, if any.
pub fn first_violation<P: Polarity>(heap: &[Key]) -> Option<usize> {
    (ROOT + 1..=heap.len()).find(|&pos| P::outranks(key(heap, pos), key(heap, parent(pos))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_arithmetic() {
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 1);
        assert_eq!(parent(3), 1);
        assert_eq!(parent(7), 3);
        assert_eq!((left(3), right(3)), (6, 7));
    }

    #[test]
    fn leaves() {
        // 1 2 3 4 5: positions 3, 4 and 5 are leaves.
        let leaves: Vec<usize> = (0..=6).filter(|&p| is_leaf(p, 5)).collect();
        assert_eq!(leaves, [3, 4, 5]);
        assert!(is_leaf(1, 1));
        assert!(!is_leaf(1, 0));
    }

    #[test]
    fn sift_up_stops_at_root() {
        let mut heap = [5, 3, 4, 9];
        assert_eq!(sift_up::<MaxFirst>(&mut heap, 4), ROOT);
        assert_eq!(heap, [9, 5, 4, 3]);
        assert_eq!(first_violation::<MaxFirst>(&heap), None);
    }

    #[test]
    fn sift_down_prefers_larger_child() {
        let mut heap = [1, 7, 8, 2, 3];
        assert_eq!(sift_down::<MaxFirst>(&mut heap, ROOT), 3);
        assert_eq!(heap, [8, 7, 1, 2, 3]);
    }

    #[test]
    fn sift_down_prefers_smaller_child() {
        let mut heap = [9, 4, 2, 5];
        assert_eq!(sift_down::<MinFirst>(&mut heap, ROOT), 3);
        assert_eq!(heap, [2, 4, 9, 5]);
    }

    #[test]
    fn sift_down_ignores_out_of_range() {
        let mut heap = [1, 2];
        assert_eq!(sift_down::<MaxFirst>(&mut heap, 0), 0);
        assert_eq!(sift_down::<MaxFirst>(&mut heap, 5), 5);
        assert_eq!(heap, [1, 2]);
    }

    #[test]
    fn build_both_polarities() {
        let mut heap = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        build::<MaxFirst>(&mut heap);
        assert_eq!(heap[0], 9);
        assert_eq!(first_violation::<MaxFirst>(&heap), None);

        build::<MinFirst>(&mut heap);
        assert_eq!(heap[0], 1);
        assert_eq!(first_violation::<MinFirst>(&heap), None);
    }

    #[test]
    fn detects_violation() {
        assert_eq!(first_violation::<MaxFirst>(&[5, 6, 1]), Some(2));
        assert_eq!(first_violation::<MinFirst>(&[1, 2, 3, 0]), Some(4));
        assert_eq!(first_violation::<MaxFirst>(&[]), None);
    }
}
