use thiserror::Error;

/// Errors reported by the heaps in this crate.
/// A failed call never leaves a partial mutation behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("heap is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
    #[error("heap is empty")]
    EmptyHeap,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    /// Only reported by the `check` probes.
    #[error("heap invariant violated at position {index}")]
    InvariantViolated { index: usize },
}

pub type Result<T> = std::result::Result<T, HeapError>;
