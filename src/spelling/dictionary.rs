//! Sorted word list with binary-search lookup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellfixError};

/// Default upper bound on the number of characters in a word.
pub const DEFAULT_MAX_WORD_LEN: usize = 100;

/// One step of a binary search: the index that was probed and the word found there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Probe<'a> {
    pub index: usize,
    pub word: &'a str,
}

/// Result of a binary search over a sorted word list.
///
/// Probes borrow from the searched words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome<'a> {
    /// Position of the exact match, if any.
    pub index: Option<usize>,
    /// Number of loop iterations (probes) the search ran.
    pub probe_count: usize,
    /// Every probe in the order it was made.
    #[serde(borrow)]
    pub probes: Vec<Probe<'a>>,
}

impl SearchOutcome<'_> {
    /// Whether the target was found.
    pub fn found(&self) -> bool {
        self.index.is_some()
    }
}

/// Binary search for `target` over the closed range `[0, len - 1]` of `words`.
///
/// `words` must be sorted by byte-wise lexicographic order, the same order `str`
/// comparison uses. On an unsorted slice the outcome is unspecified (though never
/// a panic); [`Dictionary`] guarantees the order for you.
pub fn binary_search<'a, S: AsRef<str>>(words: &'a [S], target: &str) -> SearchOutcome<'a> {
    let mut outcome = SearchOutcome {
        index: None,
        probe_count: 0,
        probes: Vec::new(),
    };

    // Half-open bounds so an empty range never needs a negative index.
    let mut start = 0;
    let mut end = words.len();
    while start < end {
        let middle = start + (end - 1 - start) / 2;
        let word = words[middle].as_ref();
        outcome.probe_count += 1;
        outcome.probes.push(Probe {
            index: middle,
            word,
        });
        log::trace!("dict[{middle}] = {word}");

        match word.cmp(target) {
            std::cmp::Ordering::Equal => {
                outcome.index = Some(middle);
                break;
            }
            std::cmp::Ordering::Less => start = middle + 1,
            std::cmp::Ordering::Greater => end = middle,
        }
    }

    outcome
}

/// A read-only, lexicographically sorted collection of lowercase words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from arbitrary words.
    ///
    /// Words are ASCII-lowercased, sorted and deduplicated. Any word longer than
    /// `max_word_len` characters is rejected rather than truncated.
    pub fn from_words<I, S>(words: I, max_word_len: usize) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = words
            .into_iter()
            .map(|word| {
                let word = word.as_ref();
                if word.chars().count() > max_word_len {
                    return Err(SpellfixError::input_too_long(word, max_word_len));
                }
                Ok(word.to_ascii_lowercase())
            })
            .collect::<Result<Vec<_>>>()?;

        words.sort();
        words.dedup();

        Ok(Dictionary { words })
    }

    /// Wrap words that are already sorted, verifying the order.
    pub fn from_sorted(words: Vec<String>) -> Result<Self> {
        if let Some(pair) = words.windows(2).find(|pair| pair[0] > pair[1]) {
            return Err(SpellfixError::UnsortedDictionary {
                previous: pair[0].clone(),
                next: pair[1].clone(),
            });
        }
        Ok(Dictionary { words })
    }

    /// Split dictionary file contents into its entries, in file order.
    ///
    /// The text is a whitespace-separated list of words, optionally preceded by
    /// the number of words that follow. When the count is present, at most that
    /// many words are read; a count of zero is rejected.
    pub fn read_entries(contents: &str) -> Result<Vec<&str>> {
        let mut tokens = contents.split_whitespace().peekable();

        let declared = match tokens.peek().map(|token| token.parse::<usize>()) {
            Some(Ok(count)) => {
                tokens.next();
                Some(count)
            }
            _ => None,
        };

        let entries: Vec<&str> = match declared {
            Some(0) => {
                return Err(SpellfixError::dictionary(
                    "word count header declares an empty dictionary",
                ));
            }
            Some(count) => tokens.take(count).collect(),
            None => tokens.collect(),
        };

        if let Some(count) = declared
            && entries.len() < count
        {
            log::warn!(
                "Dictionary declares {count} words but only {} were found",
                entries.len()
            );
        }

        Ok(entries)
    }

    /// Parse dictionary file contents, see [`Dictionary::read_entries`] for the format.
    pub fn parse(contents: &str, max_word_len: usize) -> Result<Self> {
        let entries = Self::read_entries(contents)?;

        log::debug!("Dictionary as read:");
        for (i, word) in entries.iter().enumerate() {
            log::debug!("{i:4}. {word}");
        }

        let dictionary = Self::from_words(entries, max_word_len)?;

        log::debug!("Sorted dictionary:");
        for (i, word) in dictionary.words.iter().enumerate() {
            log::debug!("{i:4}. {word}");
        }

        Ok(dictionary)
    }

    /// Load a dictionary file, see [`Dictionary::parse`] for the format.
    pub fn load_from_file<P: AsRef<Path>>(path: P, max_word_len: usize) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let dictionary = Self::parse(&contents, max_word_len)?;
        log::info!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Binary search for `target`, which should already be lowercase.
    pub fn search(&self, target: &str) -> SearchOutcome<'_> {
        binary_search(&self.words, target)
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.search(&word.to_ascii_lowercase()).found()
    }

    /// Get all words in sorted order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The middle word, used to seed suggestion searches.
    pub fn middle(&self) -> Option<&str> {
        self.words.get(self.words.len() / 2).map(String::as_str)
    }

    /// Get the total number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
