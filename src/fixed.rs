//! Fixed-size word windows.
//!
//! The structure-oblivious fallback: every `size` words become one chunk,
//! with no overlap and no regard for sentences or paragraphs.
//!
//! ## How It Works
//!
//! ```text
//! size = 4
//!
//! Words: a b c d e f g h i j
//!
//! Chunk 0: "a b c d"
//! Chunk 1: "e f g h"
//! Chunk 2: "i j"        <- final chunk may be shorter
//! ```
//!
//! `n` words always produce exactly `ceil(n / size)` chunks, and every word
//! appears exactly once. Useful as a baseline when comparing against the
//! structural chunker, or when the input has no usable structure.

use crate::{Chunk, Chunker, Error, Result};

/// Fixed-size word window chunker.
///
/// ## Example
///
/// ```rust
/// use chunkwise::FixedChunker;
///
/// let words = ["a", "b", "c", "d", "e"];
/// let chunks: Vec<_> = FixedChunker::new(2).windows(words).collect();
///
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[0].text, "a b");
/// assert_eq!(chunks[2].text, "e");
/// ```
#[derive(Debug, Clone)]
pub struct FixedChunker {
    size: usize,
}

impl FixedChunker {
    /// Create a new fixed-size chunker of `size` words per window.
    ///
    /// A zero size is clamped to one word.
    #[must_use]
    pub fn new(size: usize) -> Self {
        if size == 0 {
            tracing::warn!("fixed window size of 0 words clamped to 1");
        }
        Self { size: size.max(1) }
    }

    /// Create a new fixed-size chunker, rejecting a zero size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] if `size == 0`.
    pub fn try_new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidChunkSize(size));
        }
        Ok(Self { size })
    }

    /// Words per window.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Lazily group pre-tokenized words into windows.
    pub fn windows<I>(&self, words: I) -> Windows<I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Windows {
            words: words.into_iter(),
            size: self.size,
            index: 0,
        }
    }
}

impl Chunker for FixedChunker {
    fn chunks<'t>(&self, text: &'t str) -> Box<dyn Iterator<Item = Chunk> + 't> {
        Box::new(self.windows(text.split_whitespace()))
    }

    fn estimate_chunks(&self, word_count: usize) -> usize {
        word_count.div_ceil(self.size)
    }
}

/// Lazy sequence of windows produced by [`FixedChunker::windows`].
#[derive(Debug, Clone)]
pub struct Windows<I> {
    words: I,
    size: usize,
    index: usize,
}

impl<I> Iterator for Windows<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        let mut text = String::new();
        let mut count = 0;

        for word in self.words.by_ref().take(self.size) {
            if count > 0 {
                text.push(' ');
            }
            text.push_str(word.as_ref());
            count += 1;
        }

        if count == 0 {
            return None;
        }

        let chunk = Chunk::new(text, count, self.index, 0);
        self.index += 1;
        Some(chunk)
    }
}
