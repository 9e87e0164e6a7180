//! # chunkwise
//!
//! Structure-aware text chunking for per-chunk processing by a language model.
//!
//! ## The Problem
//!
//! A generative model can only look at so much text per call. A long
//! document has to be cut into pieces, and each piece is processed on its
//! own. Where the cuts fall decides what the model sees:
//!
//! - A cut mid-sentence hands the model half a thought
//! - A cut right after a heading strands the heading from its section
//! - A cut with no overlap loses whatever straddles the boundary
//!
//! ## Structural Chunking (default)
//!
//! Text is normalized into paragraphs, with header-like lines promoted to
//! their own paragraph. Paragraphs are packed whole into a chunk until the
//! word target is reached. A paragraph that does not fit is split into
//! sentences, and the chunk is closed at the last sentence that fits. The
//! next chunk starts with the last few words of the previous one.
//!
//! ```text
//! target = 6 words, overlap = 2 words
//!
//! Input:
//!   INTRODUCTION
//!   Cells divide. Each copy grows. Growth stops at maturity.
//!
//! Chunk 0: "INTRODUCTION\n\nCells divide. Each copy grows."
//! Chunk 1: "copy grows. Growth stops at maturity."
//!           ^^^^^^^^^^^
//!           overlap
//! ```
//!
//! Sentences are atomic: a sentence longer than the target becomes an
//! oversized chunk rather than being cut.
//!
//! ## Fixed Windows (fallback)
//!
//! Every N words become a chunk, no overlap, no structure. A baseline for
//! comparison, or for input with no usable structure.
//!
//! ## Quick Start
//!
//! ```rust
//! use chunkwise::{chunk_text, ChunkStats, FixedChunker};
//!
//! let text = "INTRODUCTION\nCells divide. Each copy grows. Growth stops at maturity.";
//!
//! // Structural, lazily: each chunk is built when requested
//! for chunk in chunk_text(text, 6, 2) {
//!     println!("[{}] {} words: {}", chunk.index, chunk.words, chunk.text);
//! }
//!
//! // Statistics over the realized sequence
//! let chunks: Vec<_> = chunk_text(text, 6, 2).collect();
//! let stats = ChunkStats::compute(&chunks, 10);
//! assert_eq!(stats.num_chunks, 2);
//!
//! // Fixed windows over pre-tokenized words
//! let words: Vec<&str> = text.split_whitespace().collect();
//! let windows: Vec<_> = FixedChunker::new(4).windows(&words).collect();
//! assert_eq!(windows.len(), 3);
//! ```
//!
//! ## Failure Model
//!
//! Chunking never fails. Empty or whitespace-only input yields no chunks,
//! and degenerate parameters are clamped by the default constructors. The
//! `try_new` constructors validate instead and return [`Error`].

mod chunk;
mod config;
mod error;
mod fixed;
mod overlap;
mod preprocess;
mod sentence;
mod stats;
mod structural;

pub use chunk::Chunk;
pub use config::{ChunkConfig, DEFAULT_OVERLAP_WORDS, DEFAULT_TARGET_WORDS};
pub use error::{Error, Result};
pub use fixed::{FixedChunker, Windows};
pub use overlap::{overlap_tail, word_count};
pub use preprocess::{
    detect_header, preprocess, HeaderRule, Preprocessor, DEFAULT_MAX_HEADER_CHARS,
};
pub use sentence::{split_sentences, SentenceBoundary};
pub use stats::ChunkStats;
pub use structural::{chunk_text, Chunks, StructuralChunker};

/// A text chunking strategy.
///
/// Both chunkers implement this trait, enabling polymorphic usage:
///
/// ```rust
/// use chunkwise::{Chunker, FixedChunker, StructuralChunker};
///
/// fn chunk_document(chunker: &dyn Chunker, text: &str) -> Vec<chunkwise::Chunk> {
///     chunker.chunk(text)
/// }
///
/// let structural = StructuralChunker::new(100, 20);
/// let fixed = FixedChunker::new(100);
///
/// let text = "Hello world. This is a test.";
/// let chunks1 = chunk_document(&structural, text);
/// let chunks2 = chunk_document(&fixed, text);
/// assert_eq!(chunks1.len(), chunks2.len());
/// ```
pub trait Chunker: Send + Sync {
    /// Lazily split text into chunks.
    ///
    /// The returned iterator is single-pass: each chunk is produced once,
    /// when requested.
    fn chunks<'t>(&self, text: &'t str) -> Box<dyn Iterator<Item = Chunk> + 't>;

    /// Split text into chunks eagerly.
    fn chunk(&self, text: &str) -> Vec<Chunk> {
        self.chunks(text).collect()
    }

    /// Estimate the number of chunks for a document of `word_count` words.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, word_count: usize) -> usize {
        // Conservative default
        (word_count / DEFAULT_TARGET_WORDS).max(1)
    }
}
