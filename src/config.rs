//! Chunk size configuration.
//!
//! ## Target, Not Limit
//!
//! The target is a word budget the assembler fills greedily. It is a soft
//! bound: sentences are never split, so a sentence longer than the target
//! still lands whole in its own chunk.
//!
//! ```text
//! target = 8, overlap = 2
//!
//! "One two three. Four five six. Seven eight nine ten."
//!
//! Chunk 0: "One two three. Four five six."            6 words
//! Chunk 1: "five six. Seven eight nine ten."          6 words (2 carried)
//! ```
//!
//! ## Degenerate Values
//!
//! Sizes are `usize`, so negative values cannot be expressed. A zero target
//! has no sensible meaning; the lenient constructors clamp it to one word,
//! the strict ones reject it.

use crate::{Error, Result};

/// Default target chunk size in words.
pub const DEFAULT_TARGET_WORDS: usize = 1000;

/// Default overlap between consecutive chunks in words.
pub const DEFAULT_OVERLAP_WORDS: usize = 100;

/// Word budget for a chunk and the overlap carried into the next one.
///
/// # Examples
///
/// ```rust
/// use chunkwise::ChunkConfig;
///
/// let config = ChunkConfig::default();
/// assert_eq!(config.target_words(), 1000);
/// assert_eq!(config.overlap_words(), 100);
///
/// let config = ChunkConfig::new(500, 50);
/// assert!(config.validate().is_ok());
///
/// // Overlap must stay below the target when validated
/// assert!(ChunkConfig::new(50, 50).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChunkConfig {
    target_words: usize,
    overlap_words: usize,
}

impl ChunkConfig {
    /// Create a configuration with the given target and overlap.
    #[must_use]
    pub const fn new(target_words: usize, overlap_words: usize) -> Self {
        Self {
            target_words,
            overlap_words,
        }
    }

    /// The target number of words per chunk.
    #[must_use]
    pub const fn target_words(&self) -> usize {
        self.target_words
    }

    /// The number of trailing words repeated at the start of the next chunk.
    #[must_use]
    pub const fn overlap_words(&self) -> usize {
        self.overlap_words
    }

    /// Replace the overlap.
    #[must_use]
    pub const fn with_overlap(self, overlap_words: usize) -> Self {
        Self {
            overlap_words,
            ..self
        }
    }

    /// Check the configuration strictly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] if the target is zero, and
    /// [`Error::OverlapExceedsSize`] if the overlap is not smaller than the
    /// target.
    pub fn validate(self) -> Result<Self> {
        if self.target_words == 0 {
            return Err(Error::InvalidChunkSize(0));
        }
        if self.overlap_words >= self.target_words {
            return Err(Error::OverlapExceedsSize {
                size: self.target_words,
                overlap: self.overlap_words,
            });
        }
        Ok(self)
    }

    /// Make the configuration usable without failing.
    ///
    /// A zero target becomes one word. The overlap is kept as given.
    #[must_use]
    pub fn clamped(self) -> Self {
        if self.target_words == 0 {
            tracing::warn!("target chunk size of 0 words clamped to 1");
            return Self {
                target_words: 1,
                ..self
            };
        }
        self
    }

    /// Check if adding `additional` words to a chunk of `current` words
    /// would go past the target.
    #[must_use]
    pub fn would_overflow(&self, current: usize, additional: usize) -> bool {
        current.saturating_add(additional) > self.target_words
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_WORDS, DEFAULT_OVERLAP_WORDS)
    }
}

impl From<(usize, usize)> for ChunkConfig {
    fn from((target_words, overlap_words): (usize, usize)) -> Self {
        Self::new(target_words, overlap_words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChunkConfig::default();
        assert_eq!(config.target_words(), DEFAULT_TARGET_WORDS);
        assert_eq!(config.overlap_words(), DEFAULT_OVERLAP_WORDS);
    }

    #[test]
    fn test_would_overflow() {
        let config = ChunkConfig::new(100, 10);
        assert!(!config.would_overflow(50, 49));
        assert!(!config.would_overflow(50, 50));
        assert!(config.would_overflow(50, 51));
        assert!(config.would_overflow(usize::MAX, 1));
    }

    #[test]
    fn test_zero_target_rejected() {
        assert_eq!(
            ChunkConfig::new(0, 0).validate(),
            Err(Error::InvalidChunkSize(0))
        );
    }

    #[test]
    fn test_overlap_not_below_target_rejected() {
        let result = ChunkConfig::new(10, 10).validate();
        assert_eq!(
            result,
            Err(Error::OverlapExceedsSize {
                size: 10,
                overlap: 10
            })
        );
    }

    #[test]
    fn test_clamped_zero_target() {
        let config = ChunkConfig::new(0, 5).clamped();
        assert_eq!(config.target_words(), 1);
        assert_eq!(config.overlap_words(), 5);
    }

    #[test]
    fn test_tuple_conversion() {
        let config = ChunkConfig::from((300, 30));
        assert_eq!(config, ChunkConfig::new(300, 30));
        assert_eq!(config.with_overlap(0).overlap_words(), 0);
    }
}
