//! Separator-based tokenizer for spell checking.
//!
//! Text is split into alternating runs of word characters and single
//! separator characters. Concatenating the segments reproduces the input
//! exactly, except for NUL characters, which are dropped.

use serde::{Deserialize, Serialize};

/// Separators used when none are configured.
pub const DEFAULT_SEPARATORS: &str = ", .!?\n\r\t";

/// A piece of tokenized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// A maximal run of non-separator characters.
    Word(String),
    /// A single separator character, copied to the output verbatim.
    Separator(char),
}

/// Splits text on a fixed set of separator characters.
#[derive(Clone, Debug)]
pub struct SeparatorTokenizer {
    separators: Vec<char>,
}

impl SeparatorTokenizer {
    /// Create a tokenizer splitting on every character of `separators`.
    pub fn new(separators: &str) -> Self {
        SeparatorTokenizer {
            separators: separators.chars().collect(),
        }
    }

    pub fn is_separator(&self, ch: char) -> bool {
        self.separators.contains(&ch)
    }

    /// The configured separators as a string.
    pub fn separators(&self) -> String {
        self.separators.iter().collect()
    }

    /// Tokenize `text` into words and separators.
    pub fn tokenize(&self, text: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut word = String::new();

        for ch in text.chars() {
            if ch == '\0' {
                continue;
            }
            if self.is_separator(ch) {
                if !word.is_empty() {
                    segments.push(Segment::Word(std::mem::take(&mut word)));
                }
                segments.push(Segment::Separator(ch));
            } else {
                word.push(ch);
            }
        }

        if !word.is_empty() {
            segments.push(Segment::Word(word));
        }

        segments
    }
}

impl Default for SeparatorTokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS)
    }
}
