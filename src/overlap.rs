//! Overlap between consecutive chunks.
//!
//! When a chunk is finished, its last few words seed the next one, so a
//! fact straddling the boundary is visible from both sides:
//!
//! ```text
//! overlap = 3
//!
//! Chunk 0: "... the treaty was signed in 1648."
//! Chunk 1: "signed in 1648. It ended the war ..."
//!           ^^^^^^^^^^^^^^^
//!           tail of chunk 0
//! ```
//!
//! Words are whitespace-delimited; the tail is re-joined with single spaces.

/// Number of whitespace-delimited words in `text`.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// The last `overlap` words of `text`, joined by single spaces.
///
/// If `text` has no more than `overlap` words, the whole (trimmed) text is
/// returned. An overlap of zero yields an empty string.
///
/// ```rust
/// use chunkwise::overlap_tail;
///
/// assert_eq!(overlap_tail("one two three four", 2), "three four");
/// assert_eq!(overlap_tail("one two", 5), "one two");
/// assert_eq!(overlap_tail("one two", 0), "");
/// ```
#[must_use]
pub fn overlap_tail(text: &str, overlap: usize) -> String {
    if overlap == 0 {
        return String::new();
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= overlap {
        return text.trim().to_string();
    }
    words[words.len() - overlap..].join(" ")
}
