//! Two small binary heaps over `i32` keys, sharing one set of sift routines.
//!
//! [`BoundedMaxHeap`] is a max-heap in a buffer whose capacity is fixed when
//! it is created.  You can insert keys until it is full, and extract the
//! largest key until it is empty; both take O(log n).  Running past either
//! end is reported as an error rather than corrupting the heap.
//!
//! [`KthLargest`] is designed for streaming use cases, where you show it
//! values as they come in and it tells you, after each one, the k-th largest
//! value seen so far.  It keeps the k largest values in a min-heap, so the
//! answer is always at the root.  Each value costs O(log k).
//!
//! Both heaps store the tree in a flat slice, with the root at position 1,
//! the parent of position `i` at `i / 2` and its children at `2i` and
//! `2i + 1`.  The max-heap and the min-heap differ only in which of two keys
//! belongs nearer the root; see the [`sift`] module.
//!
//! ```
//! use heap_few::{BoundedMaxHeap, KthLargest};
//!
//! let mut heap = BoundedMaxHeap::new(10);
//! for key in [5, 3, 8, 1, 9] {
//!     heap.insert(key)?;
//! }
//! assert_eq!(heap.extract_max()?, 9);
//! assert_eq!(heap.extract_max()?, 8);
//!
//! let mut third = KthLargest::new(3, [4, 5, 8, 2])?;
//! assert_eq!(third.add(3), 4);
//! assert_eq!(third.add(5), 5);
//! assert_eq!(third.add(10), 5);
//! assert_eq!(third.add(9), 8);
//! # Ok::<(), heap_few::HeapError>(())
//! ```
//!
//! The crate logs through the `log` facade; install a logger to see
//! construction at debug level and each insertion or eviction at trace level.

pub mod error;
pub mod kth_largest;
pub mod max_heap;
pub mod sift;

pub use error::{HeapError, Result};
pub use kth_largest::KthLargest;
pub use max_heap::BoundedMaxHeap;

/// The key type held by both heaps.
pub type Key = i32;
