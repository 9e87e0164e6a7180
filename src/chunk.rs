//! The Chunk type: a run of words with its place in the sequence.

/// A chunk of text produced by one of the chunkers.
///
/// Chunks are immutable once yielded. The text is whitespace-trimmed and may
/// contain blank lines where whole paragraphs were joined together.
///
/// ## Overlap
///
/// Consecutive chunks from the structural chunker share words at the
/// boundary. `overlap` counts how many leading words of this chunk were
/// carried over from the tail of the previous one:
///
/// ```text
/// Chunk 0: "Sentence one. Sentence two."        words: 4, overlap: 0
/// Chunk 1: "Sentence two. Sentence three."      words: 4, overlap: 2
///           ^^^^^^^^^^^^^
///           carried from chunk 0
/// ```
///
/// ```rust
/// use chunkwise::Chunk;
///
/// let chunk = Chunk::new("Sentence two. Sentence three.", 4, 1, 2);
/// assert_eq!(chunk.fresh_words(), 2);
/// assert_eq!(chunk.as_ref(), "Sentence two. Sentence three.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Chunk {
    /// The chunk text.
    pub text: String,
    /// Number of whitespace-delimited words in `text`.
    pub words: usize,
    /// Zero-based index of this chunk in the sequence.
    pub index: usize,
    /// Leading words repeated from the previous chunk.
    pub overlap: usize,
}

impl Chunk {
    /// Create a new chunk.
    #[must_use]
    pub fn new(text: impl Into<String>, words: usize, index: usize, overlap: usize) -> Self {
        Self {
            text: text.into(),
            words,
            index,
            overlap,
        }
    }

    /// The length of this chunk in words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words
    }

    /// Whether this chunk has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Words that did not come from the previous chunk's overlap.
    #[must_use]
    pub fn fresh_words(&self) -> usize {
        self.words.saturating_sub(self.overlap)
    }
}

impl AsRef<str> for Chunk {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ index: {}, words: {}, overlap: {} }}",
            self.index, self.words, self.overlap
        )
    }
}
