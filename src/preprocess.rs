//! Structural preprocessing.
//!
//! Text extracted from documents arrives with ragged whitespace and little
//! explicit structure. Before chunking we normalize it into paragraphs
//! separated by exactly one blank line, each paragraph collapsed to single
//! spaces.
//!
//! ## Header Promotion
//!
//! Short lines that look like headings are isolated into their own
//! paragraph, so a heading stays attached to the text that follows it
//! instead of being glued to the end of the previous section:
//!
//! ```text
//! Input:                          Output:
//!
//! ...end of the overview.         ...end of the overview.
//! 2. Methods
//! We sampled three sites          2. Methods
//! across the region.
//!                                 We sampled three sites across the region.
//! ```
//!
//! Detection runs per line, before whitespace is collapsed, and only
//! considers lines shorter than [`DEFAULT_MAX_HEADER_CHARS`] characters.
//! Each heuristic is an independent [`HeaderRule`].

use std::sync::LazyLock;

use regex::Regex;

/// Lines at or above this many characters are never treated as headers.
pub const DEFAULT_MAX_HEADER_CHARS: usize = 100;

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.?\s+[A-Z]").expect("numbered heading pattern"));

static TITLE_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+\s+[A-Z0-9]").expect("title-case heading pattern"));

static SUBSECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+").expect("subsection numeral pattern"));

/// A heuristic that marks a line as a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderRule {
    /// Has at least one cased letter and no lower-case ones: `"INTRODUCTION"`.
    AllCaps,
    /// Digits, optional period, whitespace, capital: `"1. Introduction"`.
    Numbered,
    /// Capitalized word, whitespace, capital or digit: `"Chapter 1"`.
    TitleCase,
    /// Digits, period, digits: `"1.1"`, `"2.3 Results"`.
    SubsectionNumeral,
}

impl HeaderRule {
    /// Every rule, in the order they are tried.
    pub const ALL: [HeaderRule; 4] = [
        HeaderRule::AllCaps,
        HeaderRule::Numbered,
        HeaderRule::TitleCase,
        HeaderRule::SubsectionNumeral,
    ];

    /// Whether `line` (already trimmed) satisfies this rule.
    #[must_use]
    pub fn matches(self, line: &str) -> bool {
        match self {
            HeaderRule::AllCaps => {
                line.chars().any(char::is_uppercase) && !line.chars().any(char::is_lowercase)
            }
            HeaderRule::Numbered => NUMBERED.is_match(line),
            HeaderRule::TitleCase => TITLE_CASE.is_match(line),
            HeaderRule::SubsectionNumeral => SUBSECTION.is_match(line),
        }
    }
}

/// Normalizes whitespace and promotes header-like lines to paragraphs.
///
/// ## Example
///
/// ```rust
/// use chunkwise::Preprocessor;
///
/// let text = "INTRODUCTION\nThis   text\nwraps across lines.";
/// let out = Preprocessor::default().preprocess(text);
/// assert_eq!(out, "INTRODUCTION\n\nThis text wraps across lines.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preprocessor {
    rules: Vec<HeaderRule>,
    max_header_chars: usize,
}

impl Preprocessor {
    /// Create a preprocessor with a custom rule set.
    #[must_use]
    pub fn new(rules: impl IntoIterator<Item = HeaderRule>, max_header_chars: usize) -> Self {
        Self {
            rules: rules.into_iter().collect(),
            max_header_chars,
        }
    }

    /// Whitespace normalization only; no line is promoted.
    #[must_use]
    pub fn plain() -> Self {
        Self::new([], 0)
    }

    /// The rules this preprocessor applies.
    #[must_use]
    pub fn rules(&self) -> &[HeaderRule] {
        &self.rules
    }

    /// The first rule `line` satisfies, if it is short enough to be a header.
    #[must_use]
    pub fn detect_header(&self, line: &str) -> Option<HeaderRule> {
        if line.is_empty() || line.chars().count() >= self.max_header_chars {
            return None;
        }
        self.rules.iter().copied().find(|rule| rule.matches(line))
    }

    /// Normalize `text` into blank-line separated paragraphs.
    ///
    /// The result contains no leading or trailing whitespace and no empty
    /// paragraphs; whitespace-only input produces an empty string.
    #[must_use]
    pub fn preprocess(&self, text: &str) -> String {
        let mut paragraphs: Vec<String> = Vec::new();
        let mut current = String::new();

        for raw in text.lines() {
            let line = collapse_whitespace(raw);

            if line.is_empty() {
                flush(&mut current, &mut paragraphs);
                continue;
            }

            if let Some(rule) = self.detect_header(&line) {
                tracing::trace!(?rule, header = %line, "promoted header line");
                flush(&mut current, &mut paragraphs);
                paragraphs.push(line);
                continue;
            }

            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&line);
        }
        flush(&mut current, &mut paragraphs);

        paragraphs.join("\n\n")
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new(HeaderRule::ALL, DEFAULT_MAX_HEADER_CHARS)
    }
}

/// Preprocess with every header rule enabled.
#[must_use]
pub fn preprocess(text: &str) -> String {
    Preprocessor::default().preprocess(text)
}

/// The first default header rule `line` satisfies.
#[must_use]
pub fn detect_header(line: &str) -> Option<HeaderRule> {
    Preprocessor::default().detect_header(line.trim())
}

fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn flush(current: &mut String, paragraphs: &mut Vec<String>) {
    if !current.is_empty() {
        paragraphs.push(std::mem::take(current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_caps() {
        assert!(HeaderRule::AllCaps.matches("INTRODUCTION"));
        assert!(HeaderRule::AllCaps.matches("PART II: RESULTS"));
        assert!(!HeaderRule::AllCaps.matches("Introduction"));
        // No cased letters at all
        assert!(!HeaderRule::AllCaps.matches("1.2.3"));
    }

    #[test]
    fn test_numbered() {
        assert!(HeaderRule::Numbered.matches("1. Introduction"));
        assert!(HeaderRule::Numbered.matches("12 Methods"));
        assert!(!HeaderRule::Numbered.matches("1. introduction"));
        assert!(!HeaderRule::Numbered.matches("1.Introduction"));
    }

    #[test]
    fn test_title_case() {
        assert!(HeaderRule::TitleCase.matches("Chapter 1"));
        assert!(HeaderRule::TitleCase.matches("Section A"));
        assert!(!HeaderRule::TitleCase.matches("Section one"));
        assert!(!HeaderRule::TitleCase.matches("CHAPTER 1"));
    }

    #[test]
    fn test_subsection_numeral() {
        assert!(HeaderRule::SubsectionNumeral.matches("1.1"));
        assert!(HeaderRule::SubsectionNumeral.matches("2.3 results"));
        assert!(!HeaderRule::SubsectionNumeral.matches("1. Results"));
    }

    #[test]
    fn test_long_lines_are_not_headers() {
        let line = "A".repeat(DEFAULT_MAX_HEADER_CHARS);
        assert_eq!(detect_header(&line), None);
        assert_eq!(detect_header(&line[1..]), Some(HeaderRule::AllCaps));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        assert_eq!(detect_header("1.1 OVERVIEW"), Some(HeaderRule::AllCaps));
        assert_eq!(detect_header("1 Overview"), Some(HeaderRule::Numbered));
        assert_eq!(detect_header("1.1 Overview"), Some(HeaderRule::SubsectionNumeral));
        assert_eq!(detect_header("just some prose"), None);
    }

    #[test]
    fn test_header_isolated_into_paragraph() {
        let text =
            "the overview ends here.\n2. Methods\nwe sampled three sites\nacross the region.";
        assert_eq!(
            preprocess(text),
            "the overview ends here.\n\n2. Methods\n\nwe sampled three sites across the region."
        );
    }

    #[test]
    fn test_whitespace_collapsed() {
        let text = "  lots\tof   space \r\n\n\n\nand\u{000C}more  ";
        assert_eq!(preprocess(text), "lots of space\n\nand more");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(preprocess(""), "");
        assert_eq!(preprocess("  \n\n\t \n"), "");
    }

    #[test]
    fn test_plain_keeps_headers_inline() {
        let text = "INTRODUCTION\nsome text";
        assert_eq!(Preprocessor::plain().preprocess(text), "INTRODUCTION some text");
    }

    #[test]
    fn test_custom_rule_set() {
        let pre = Preprocessor::new([HeaderRule::Numbered], DEFAULT_MAX_HEADER_CHARS);
        assert_eq!(pre.detect_header("INTRODUCTION"), None);
        assert_eq!(pre.detect_header("3 Discussion"), Some(HeaderRule::Numbered));
        assert_eq!(pre.rules(), &[HeaderRule::Numbered]);
    }
}
