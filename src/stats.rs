//! Chunking statistics.
//!
//! Overlap means the chunks together hold more words than the document.
//! [`ChunkStats`] reports how much more, which is what a caller pays for in
//! downstream model calls.

use std::fmt;

use crate::overlap::word_count;
use crate::ChunkConfig;

/// Summary of a realized chunk sequence.
///
/// ## Example
///
/// ```rust
/// use chunkwise::{chunk_text, ChunkStats};
///
/// let text = "Sentence one. Sentence two. Sentence three.";
/// let chunks: Vec<_> = chunk_text(text, 4, 2).collect();
/// let stats = ChunkStats::compute(&chunks, 6);
///
/// assert_eq!(stats.chunk_sizes, [4, 4]);
/// assert_eq!(stats.total_processed_words, 8);
/// assert_eq!(stats.overlap_words, 2);
/// assert_eq!(stats.average_chunk_size, 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChunkStats {
    /// Word count of each chunk, in order.
    pub chunk_sizes: Vec<usize>,
    /// Sum of `chunk_sizes`, overlap included.
    pub total_processed_words: usize,
    /// `total_processed_words` minus the original word count.
    pub overlap_words: i64,
    /// Mean chunk size, or 0 when there are no chunks.
    pub average_chunk_size: f64,
    /// Number of chunks.
    pub num_chunks: usize,
    /// Word count of the original document.
    pub total_words: usize,
    /// Configuration the chunks were produced with, if known.
    pub config: Option<ChunkConfig>,
}

impl ChunkStats {
    /// Compute statistics for `chunks` of a document of `total_words` words.
    ///
    /// Word counts are recomputed from each chunk's text, so any string
    /// sequence works, not just [`Chunk`](crate::Chunk)s.
    pub fn compute<I>(chunks: I, total_words: usize) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let chunk_sizes: Vec<usize> = chunks
            .into_iter()
            .map(|chunk| word_count(chunk.as_ref()))
            .collect();
        let total_processed_words: usize = chunk_sizes.iter().sum();
        let num_chunks = chunk_sizes.len();
        let average_chunk_size = if num_chunks == 0 {
            0.0
        } else {
            total_processed_words as f64 / num_chunks as f64
        };

        Self {
            overlap_words: signed(total_processed_words) - signed(total_words),
            chunk_sizes,
            total_processed_words,
            average_chunk_size,
            num_chunks,
            total_words,
            config: None,
        }
    }

    /// Record the configuration the chunks were produced with, so the
    /// report includes the target and overlap.
    #[must_use]
    pub fn with_config(self, config: ChunkConfig) -> Self {
        Self {
            config: Some(config),
            ..self
        }
    }
}

fn signed(words: usize) -> i64 {
    i64::try_from(words).unwrap_or(i64::MAX)
}

impl fmt::Display for ChunkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Document has {} words, processed in {} chunks",
            self.total_words, self.num_chunks
        )?;
        if let Some(config) = self.config {
            writeln!(
                f,
                "Chunk size: {} words, Overlap: {} words",
                config.target_words(),
                config.overlap_words()
            )?;
        }
        writeln!(f, "Chunk sizes: {:?}", self.chunk_sizes)?;
        writeln!(f, "Average chunk size: {:.1} words", self.average_chunk_size)?;
        write!(
            f,
            "Total processed: {} words (includes {} overlap words)",
            self.total_processed_words, self.overlap_words
        )
    }
}
