//! # Batch Splitting
//!
//! Deterministic, stateless partitioning of the extracted bookmark list into
//! fixed-size contiguous chunks, one classification request per chunk.

/// Splits `items` into contiguous chunks of `chunk_size`, the last chunk
/// holding the remainder.
///
/// Returns plain sub-slices so callers can inspect or replay the batches
/// freely. Panics if `chunk_size` is zero; the builder rejects that
/// configuration before a pipeline is constructed.
pub fn split_into_batches<T>(items: &[T], chunk_size: usize) -> Vec<&[T]> {
    assert!(chunk_size > 0, "chunk_size must be greater than zero");
    items.chunks(chunk_size).collect()
}
