//! Minimum edit-distance suggestion search.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellfixError};
use crate::spelling::dictionary::Dictionary;
use crate::spelling::levenshtein::levenshtein_distance;

/// How the running minimum distance is initialised before the scan.
///
/// The choice only changes how many distances get computed, never which
/// candidates are returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SeedStrategy {
    /// Start from the distance to the middle dictionary word.
    #[default]
    Middle,
    /// Start with no bound; nothing is pruned until a first distance is known.
    Unbounded,
}

/// The dictionary words at minimum edit distance from a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionSet<'a> {
    /// The minimum distance found.
    pub min_distance: usize,
    /// Words achieving `min_distance`, in dictionary order.
    pub candidates: Vec<&'a str>,
    /// Number of words whose exact distance was computed (pruned words excluded).
    pub compared: usize,
}

impl SuggestionSet<'_> {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }
}

/// Find every word in `words` at minimum edit distance from `token`.
///
/// Words are scanned left to right. A word whose length differs from the
/// token's by more than the current minimum cannot match or beat it, so its
/// distance is never computed and it is not counted in
/// [`SuggestionSet::compared`]. A strictly smaller distance restarts the
/// candidate list; an equal one extends it.
///
/// Returns [`SpellfixError::EmptyDictionary`] when `words` is empty.
pub fn find_suggestions<'a, S: AsRef<str>>(
    token: &str,
    words: &'a [S],
    seed: SeedStrategy,
) -> Result<SuggestionSet<'a>> {
    if words.is_empty() {
        return Err(SpellfixError::EmptyDictionary);
    }

    let token_len = token.chars().count();
    let mut min = match seed {
        SeedStrategy::Middle => {
            let middle = words[words.len() / 2].as_ref();
            Some(levenshtein_distance(token, middle))
        }
        SeedStrategy::Unbounded => None,
    };
    let mut candidates = Vec::new();
    let mut compared = 0;

    for word in words {
        let word = word.as_ref();
        let bias = word.chars().count().abs_diff(token_len);
        if min.is_some_and(|min| bias > min) {
            continue;
        }

        let distance = levenshtein_distance(token, word);
        compared += 1;

        match min {
            Some(current) if distance > current => {}
            Some(current) if distance == current => candidates.push(word),
            _ => {
                min = Some(distance);
                candidates.clear();
                candidates.push(word);
            }
        }
    }

    Ok(SuggestionSet {
        // At least one word is always compared when the scan starts unbounded.
        min_distance: min.unwrap_or_default(),
        candidates,
        compared,
    })
}

/// Suggestion search bound to a dictionary.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionEngine<'a> {
    dictionary: &'a Dictionary,
    seed: SeedStrategy,
}

impl<'a> SuggestionEngine<'a> {
    /// Create a new suggestion engine with the default seed strategy.
    pub fn new(dictionary: &'a Dictionary) -> Self {
        SuggestionEngine {
            dictionary,
            seed: SeedStrategy::default(),
        }
    }

    /// Create a new suggestion engine with an explicit seed strategy.
    pub fn with_seed(dictionary: &'a Dictionary, seed: SeedStrategy) -> Self {
        SuggestionEngine { dictionary, seed }
    }

    /// Suggestions for an already lowercased token.
    pub fn suggest(&self, token: &str) -> Result<SuggestionSet<'a>> {
        let suggestions = find_suggestions(token, self.dictionary.words(), self.seed)?;
        log::debug!(
            "{token}: minimum distance {} over {} comparisons, {} candidate(s)",
            suggestions.min_distance,
            suggestions.compared,
            suggestions.len()
        );
        Ok(suggestions)
    }

    /// Check if a word exists in the dictionary.
    pub fn is_correct(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    pub fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }
}
