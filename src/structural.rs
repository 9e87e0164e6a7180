//! Structure-aware chunking by word count.
//!
//! The default strategy. Paragraphs are packed whole while they fit; a
//! paragraph that does not fit is opened up into sentences, and sentences
//! are packed until the next one would overflow the target.
//!
//! ## The Algorithm
//!
//! ```text
//! for each paragraph:
//!     fits next to the current chunk?  -> append it (blank line between)
//!     otherwise, for each sentence:
//!         fits?                         -> append it
//!         chunk holds new words?        -> emit chunk, reseed with its tail,
//!                                          append sentence
//!         otherwise                     -> append it anyway (sentence-atomic)
//! emit whatever is left
//! ```
//!
//! The same sentence loop handles both a paragraph that overflows a
//! partially filled chunk and a paragraph that is larger than the target on
//! its own, so every emitted chunk stays within the target unless it is an
//! overlap seed plus one sentence that could not fit beside it.
//!
//! ## Laziness
//!
//! [`Chunks`] carries the assembly state between calls to `next`. Each chunk
//! is built only when asked for, which lets a caller send chunk N to a
//! remote model before chunk N+1 exists. The iterator is single-pass.

use std::collections::VecDeque;

use crate::overlap::{overlap_tail, word_count};
use crate::{Chunk, ChunkConfig, Chunker, Preprocessor, Result, SentenceBoundary};

/// Paragraph- and sentence-aware chunker with word overlap.
///
/// ## Example
///
/// ```rust
/// use chunkwise::StructuralChunker;
///
/// let chunker = StructuralChunker::new(4, 2);
/// let chunks: Vec<_> = chunker
///     .split("Sentence one. Sentence two. Sentence three.")
///     .collect();
///
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].text, "Sentence one. Sentence two.");
/// assert_eq!(chunks[1].text, "Sentence two. Sentence three.");
/// assert_eq!(chunks[1].overlap, 2);
/// ```
#[derive(Debug, Clone)]
pub struct StructuralChunker {
    config: ChunkConfig,
    preprocessor: Preprocessor,
    boundary: SentenceBoundary,
}

impl StructuralChunker {
    /// Create a chunker targeting `target_words` per chunk, repeating
    /// `overlap_words` between chunks.
    ///
    /// Never fails: a zero target is clamped to one word.
    #[must_use]
    pub fn new(target_words: usize, overlap_words: usize) -> Self {
        Self::with_config(ChunkConfig::new(target_words, overlap_words))
    }

    /// Create a chunker, rejecting a zero target or an overlap that is not
    /// smaller than the target.
    ///
    /// # Errors
    ///
    /// See [`ChunkConfig::validate`].
    pub fn try_new(target_words: usize, overlap_words: usize) -> Result<Self> {
        let config = ChunkConfig::new(target_words, overlap_words).validate()?;
        Ok(Self::with_config(config))
    }

    /// Create a chunker from a configuration, clamping it if needed.
    #[must_use]
    pub fn with_config(config: ChunkConfig) -> Self {
        Self {
            config: config.clamped(),
            preprocessor: Preprocessor::default(),
            boundary: SentenceBoundary::default(),
        }
    }

    /// Use a different structural preprocessor.
    #[must_use]
    pub fn with_preprocessor(mut self, preprocessor: Preprocessor) -> Self {
        self.preprocessor = preprocessor;
        self
    }

    /// Use a different sentence boundary rule.
    #[must_use]
    pub fn with_sentence_boundary(mut self, boundary: SentenceBoundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// The effective configuration.
    #[must_use]
    pub fn config(&self) -> ChunkConfig {
        self.config
    }

    /// Lazily split `text` into chunks.
    #[must_use]
    pub fn split(&self, text: &str) -> Chunks {
        let normalized = self.preprocessor.preprocess(text);
        let paragraphs: Vec<String> = if normalized.is_empty() {
            Vec::new()
        } else {
            normalized.split("\n\n").map(str::to_owned).collect()
        };

        tracing::debug!(
            target_words = self.config.target_words(),
            overlap_words = self.config.overlap_words(),
            paragraphs = paragraphs.len(),
            "starting structural chunking"
        );

        Chunks {
            config: self.config,
            boundary: self.boundary,
            paragraphs: paragraphs.into_iter(),
            sentences: VecDeque::new(),
            paragraph_start: false,
            current: String::new(),
            current_words: 0,
            seed_words: 0,
            index: 0,
        }
    }
}

impl Default for StructuralChunker {
    fn default() -> Self {
        Self::with_config(ChunkConfig::default())
    }
}

impl Chunker for StructuralChunker {
    fn chunks<'t>(&self, text: &'t str) -> Box<dyn Iterator<Item = Chunk> + 't> {
        Box::new(self.split(text))
    }

    fn estimate_chunks(&self, word_count: usize) -> usize {
        if word_count == 0 {
            return 0;
        }
        let step = self
            .config
            .target_words()
            .saturating_sub(self.config.overlap_words())
            .max(1);
        word_count.div_ceil(step)
    }
}

/// Chunk `text` with the structural strategy.
///
/// ```rust
/// let chunks: Vec<_> = chunkwise::chunk_text("", 1000, 100).collect();
/// assert!(chunks.is_empty());
/// ```
#[must_use]
pub fn chunk_text(text: &str, target_words: usize, overlap_words: usize) -> Chunks {
    StructuralChunker::new(target_words, overlap_words).split(text)
}

/// Lazy sequence of chunks produced by [`StructuralChunker::split`].
#[derive(Debug)]
pub struct Chunks {
    config: ChunkConfig,
    boundary: SentenceBoundary,
    paragraphs: std::vec::IntoIter<String>,
    /// Sentences of an overflowing paragraph not yet placed.
    sentences: VecDeque<String>,
    /// The next sentence opens a paragraph.
    paragraph_start: bool,
    current: String,
    current_words: usize,
    /// Leading words of `current` copied from the previous chunk.
    seed_words: usize,
    index: usize,
}

impl Chunks {
    fn append(&mut self, text: &str, separator: &str, words: usize) {
        if !self.current.is_empty() {
            self.current.push_str(separator);
        }
        self.current.push_str(text);
        self.current_words += words;
    }

    fn has_fresh_words(&self) -> bool {
        self.current_words > self.seed_words
    }

    /// Finish the current chunk and reseed with its tail.
    fn emit(&mut self) -> Chunk {
        let chunk = Chunk::new(
            self.current.trim(),
            self.current_words,
            self.index,
            self.seed_words,
        );
        tracing::debug!(
            index = chunk.index,
            words = chunk.words,
            overlap = chunk.overlap,
            "emitting chunk"
        );
        self.index += 1;

        let seed = overlap_tail(&chunk.text, self.config.overlap_words());
        self.seed_words = word_count(&seed);
        self.current_words = self.seed_words;
        self.current = seed;

        chunk
    }

    /// Place one sentence, emitting a chunk if it does not fit.
    fn place_sentence(&mut self, sentence: &str) -> Option<Chunk> {
        let words = word_count(sentence);
        let separator = if std::mem::take(&mut self.paragraph_start) {
            "\n\n"
        } else {
            " "
        };

        if !self.config.would_overflow(self.current_words, words) {
            self.append(sentence, separator, words);
            return None;
        }

        let emitted = self.has_fresh_words().then(|| self.emit());
        if self.config.would_overflow(self.current_words, words) {
            tracing::debug!(
                words,
                seed_words = self.current_words,
                target_words = self.config.target_words(),
                "sentence exceeds the remaining budget, keeping it whole"
            );
        }
        self.append(sentence, separator, words);
        emitted
    }
}

impl Iterator for Chunks {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        loop {
            if let Some(sentence) = self.sentences.pop_front() {
                if let Some(chunk) = self.place_sentence(&sentence) {
                    return Some(chunk);
                }
                continue;
            }

            let Some(paragraph) = self.paragraphs.next() else {
                return self.has_fresh_words().then(|| self.emit());
            };

            let words = word_count(&paragraph);
            if !self.config.would_overflow(self.current_words, words) {
                self.append(&paragraph, "\n\n", words);
                continue;
            }

            self.sentences = self
                .boundary
                .split(&paragraph)
                .into_iter()
                .map(str::to_owned)
                .collect();
            self.paragraph_start = true;
            tracing::trace!(
                words,
                sentences = self.sentences.len(),
                "paragraph overflows, splitting into sentences"
            );
        }
    }
}

impl std::iter::FusedIterator for Chunks {}
