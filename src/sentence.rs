//! Sentence splitting.
//!
//! Sentences are the atomic unit of the structural chunker: a chunk
//! boundary may fall between two sentences, never inside one.
//!
//! ## Terminal Punctuation (default)
//!
//! A sentence ends right after `.`, `!` or `?` when whitespace follows.
//! This is fast and predictable, but naive:
//!
//! ```text
//! "Dr. Smith paid 3.50 dollars. He left."
//!     ^                       ^
//!     split (abbreviation)    split
//!
//! -> ["Dr.", "Smith paid 3.50 dollars.", "He left."]
//! ```
//!
//! Decimals survive because no whitespace follows the period; abbreviations
//! do not.
//!
//! ## Unicode (UAX #29)
//!
//! [`SentenceBoundary::Unicode`] uses Unicode sentence segmentation
//! instead, which keeps most abbreviations and initials attached.
//!
//! ## Trade-offs
//!
//! | Boundary | Abbreviations | Predictability |
//! |----------|---------------|----------------|
//! | Terminal | Over-splits | Exact, documented rule |
//! | Unicode | Mostly handled | Depends on UAX #29 tables |

use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

static TERMINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("terminal punctuation pattern"));

/// How sentence boundaries are located.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SentenceBoundary {
    /// Split after `.`, `!` or `?` followed by whitespace.
    #[default]
    Terminal,
    /// Unicode Standard Annex #29 sentence boundaries.
    Unicode,
}

impl SentenceBoundary {
    /// Split `text` into trimmed, non-empty sentences in order.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use chunkwise::SentenceBoundary;
    ///
    /// let sentences = SentenceBoundary::Terminal.split("Hello world. How are you? Fine!");
    /// assert_eq!(sentences, ["Hello world.", "How are you?", "Fine!"]);
    /// ```
    #[must_use]
    pub fn split<'a>(self, text: &'a str) -> Vec<&'a str> {
        match self {
            SentenceBoundary::Terminal => split_terminal(text),
            SentenceBoundary::Unicode => text
                .split_sentence_bounds()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}

/// Split `text` on terminal punctuation followed by whitespace.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    split_terminal(text)
}

fn split_terminal(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in TERMINAL.find_iter(text) {
        // Keep the punctuation mark, drop the whitespace after it.
        let end = boundary.start() + 1;
        let sentence = text[start..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = boundary.end();
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_sentences() {
        let sentences = split_sentences("Hello world. How are you? I am fine.");
        assert_eq!(sentences, ["Hello world.", "How are you?", "I am fine."]);
    }

    #[test]
    fn test_no_terminal_punctuation() {
        let sentences = split_sentences("one long run of words with no ending");
        assert_eq!(sentences, ["one long run of words with no ending"]);
    }

    #[test]
    fn test_punctuation_without_whitespace() {
        // Decimals and URLs are not boundaries
        let sentences = split_sentences("Pi is 3.14 and example.com works. Done.");
        assert_eq!(sentences, ["Pi is 3.14 and example.com works.", "Done."]);
    }

    #[test]
    fn test_abbreviations_over_split() {
        let sentences = split_sentences("Dr. Smith went home.");
        assert_eq!(sentences, ["Dr.", "Smith went home."]);
    }

    #[test]
    fn test_repeated_punctuation() {
        let sentences = split_sentences("Really?! Yes... Fine.");
        assert_eq!(sentences, ["Really?!", "Yes...", "Fine."]);
    }

    #[test]
    fn test_unicode_boundary_keeps_words() {
        let text = "Dr. Smith went to Washington. He met Mr. Jones.";
        let sentences = SentenceBoundary::Unicode.split(text);

        assert!(!sentences.is_empty());
        let rejoined: Vec<&str> = sentences.iter().flat_map(|s| s.split_whitespace()).collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn test_empty_text() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \t ").is_empty());
        assert!(SentenceBoundary::Unicode.split("").is_empty());
    }
}
