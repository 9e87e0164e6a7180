//! Error types for chunkwise.

/// Errors returned by the strict constructors.
///
/// Chunking itself never fails; these only surface when a configuration is
/// validated up front.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Invalid chunk size (must be > 0).
    #[error("invalid chunk size: {0} words (must be > 0)")]
    InvalidChunkSize(usize),

    /// Overlap reaches or exceeds the chunk size.
    #[error("overlap of {overlap} words must be smaller than chunk size {size}")]
    OverlapExceedsSize {
        /// The target chunk size.
        size: usize,
        /// The overlap that was too large.
        overlap: usize,
    },
}

/// Result type for chunkwise operations.
pub type Result<T> = std::result::Result<T, Error>;
