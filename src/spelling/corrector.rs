//! Interactive correction of whole texts.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellfixError};
use crate::spelling::dictionary::{DEFAULT_MAX_WORD_LEN, Dictionary};
use crate::spelling::operator::{Decision, Operator, Prompt};
use crate::spelling::suggest::{SeedStrategy, SuggestionEngine};
use crate::spelling::tokenizer::{DEFAULT_SEPARATORS, Segment, SeparatorTokenizer};

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Characters that separate words.
    pub separators: String,
    /// Longest word, in characters, accepted from the dictionary or the text.
    pub max_word_len: usize,
    /// How suggestion searches seed their minimum distance.
    pub seed: SeedStrategy,
    /// Prefix of the corrected file's name.
    pub output_prefix: String,
    /// Give accepted suggestions the capitalization of the word they replace.
    pub match_case: bool,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            separators: DEFAULT_SEPARATORS.to_string(),
            max_word_len: DEFAULT_MAX_WORD_LEN,
            seed: SeedStrategy::default(),
            output_prefix: "out_".to_string(),
            match_case: false,
        }
    }
}

impl CorrectorConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: CorrectorConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no session can run with.
    pub fn validate(&self) -> Result<()> {
        if self.separators.is_empty() {
            return Err(SpellfixError::config("at least one separator is required"));
        }
        if self.max_word_len == 0 {
            return Err(SpellfixError::config("max_word_len must be positive"));
        }
        Ok(())
    }

    /// Where the corrected copy of `input` is written.
    pub fn output_path(&self, input: &Path) -> Result<PathBuf> {
        let name = input.file_name().ok_or_else(|| {
            SpellfixError::invalid_argument(format!("{} has no file name", input.display()))
        })?;
        let mut output_name = self.output_prefix.clone();
        output_name.push_str(&name.to_string_lossy());
        Ok(input.with_file_name(output_name))
    }
}

/// How the bytes of a text file map to characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// One character per byte, used for files that are not valid UTF-8.
    Latin1,
}

impl TextEncoding {
    /// Decode `bytes`, falling back to Latin-1 when they are not valid UTF-8.
    pub fn decode(bytes: Vec<u8>) -> (String, TextEncoding) {
        match String::from_utf8(bytes) {
            Ok(text) => (text, TextEncoding::Utf8),
            Err(err) => {
                let text = err.as_bytes().iter().map(|&byte| char::from(byte)).collect();
                (text, TextEncoding::Latin1)
            }
        }
    }

    /// Encode `text` in this encoding.
    ///
    /// Under Latin-1, characters above U+00FF (only possible in typed
    /// corrections) are written as UTF-8.
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::Latin1 => {
                let mut bytes = Vec::with_capacity(text.len());
                for ch in text.chars() {
                    match u8::try_from(ch) {
                        Ok(byte) => bytes.push(byte),
                        Err(_) => {
                            let mut buf = [0; 4];
                            bytes.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                        }
                    }
                }
                bytes
            }
        }
    }
}

/// One misspelled word and how it was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MisspellingRecord {
    pub token: String,
    pub min_distance: usize,
    pub candidates: Vec<String>,
    pub compared: usize,
    /// Text written to the output.
    pub written: String,
}

/// Summary of a correction run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Words checked.
    pub tokens: usize,
    /// Words found in the dictionary.
    pub known: usize,
    /// Misspelled words replaced by a suggestion or a manual correction.
    pub replaced: usize,
    /// Misspelled words left as they were.
    pub kept: usize,
    /// Binary-search probes over all lookups.
    pub probes: usize,
    /// Edit distances computed over all suggestion searches.
    pub comparisons: usize,
    pub misspellings: Vec<MisspellingRecord>,
    /// Encoding the input file was read in.
    #[serde(default)]
    pub encoding: TextEncoding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl SessionReport {
    pub fn misspelled(&self) -> usize {
        self.misspellings.len()
    }
}

/// Corrected text together with its report.
#[derive(Debug, Clone)]
pub struct Correction {
    pub text: String,
    pub report: SessionReport,
}

/// Walks a text word by word, asking an [`Operator`] about every word not in the dictionary.
pub struct CorrectionSession<'a, O> {
    engine: SuggestionEngine<'a>,
    tokenizer: SeparatorTokenizer,
    config: CorrectorConfig,
    operator: O,
}

impl<'a, O: Operator> CorrectionSession<'a, O> {
    /// Create a session over a non-empty dictionary.
    pub fn new(dictionary: &'a Dictionary, config: CorrectorConfig, operator: O) -> Result<Self> {
        config.validate()?;
        if dictionary.is_empty() {
            return Err(SpellfixError::EmptyDictionary);
        }

        Ok(CorrectionSession {
            engine: SuggestionEngine::with_seed(dictionary, config.seed),
            tokenizer: SeparatorTokenizer::new(&config.separators),
            config,
            operator,
        })
    }

    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Consume the session, returning its operator.
    pub fn into_operator(self) -> O {
        self.operator
    }

    /// Correct `text`, preserving every separator.
    pub fn correct_text(&mut self, text: &str) -> Result<Correction> {
        let mut output = String::with_capacity(text.len());
        let mut report = SessionReport::default();

        for segment in self.tokenizer.tokenize(text) {
            match segment {
                Segment::Separator(ch) => output.push(ch),
                Segment::Word(word) => {
                    let written = self.correct_word(&word, &mut report)?;
                    output.push_str(&written);
                }
            }
        }

        log::info!(
            "Checked {} words: {} misspelled, {} replaced",
            report.tokens,
            report.misspelled(),
            report.replaced
        );

        Ok(Correction {
            text: output,
            report,
        })
    }

    /// Correct the file at `input`, writing the result next to it.
    ///
    /// Files that are not valid UTF-8 are read and written as Latin-1, so
    /// every byte outside a replaced word is copied through unchanged.
    pub fn correct_file<P: AsRef<Path>>(&mut self, input: P) -> Result<SessionReport> {
        let input = input.as_ref();
        let output_path = self.config.output_path(input)?;
        let (text, encoding) = TextEncoding::decode(fs::read(input)?);
        if encoding == TextEncoding::Latin1 {
            log::warn!("{} is not valid UTF-8, reading it as Latin-1", input.display());
        }

        let Correction { text, mut report } = self.correct_text(&text)?;
        fs::write(&output_path, encoding.encode(&text))?;
        log::info!("Wrote {}", output_path.display());

        report.encoding = encoding;
        report.output = Some(output_path);
        Ok(report)
    }

    fn correct_word(&mut self, word: &str, report: &mut SessionReport) -> Result<String> {
        let length = word.chars().count();
        if length > self.config.max_word_len {
            return Err(SpellfixError::input_too_long(word, self.config.max_word_len));
        }

        report.tokens += 1;
        let lowercase = word.to_ascii_lowercase();
        let outcome = self.engine.dictionary().search(&lowercase);
        report.probes += outcome.probe_count;
        self.operator.lookup(word, &outcome)?;

        if outcome.found() {
            report.known += 1;
            return Ok(word.to_string());
        }

        let suggestions = self.engine.suggest(&lowercase)?;
        report.comparisons += suggestions.compared;

        let prompt = Prompt {
            token: word,
            lowercase: &lowercase,
            suggestions: &suggestions,
        };
        let written = match self.operator.decide(&prompt)? {
            Decision::Keep => word.to_string(),
            Decision::Accept(index) => {
                let candidate = suggestions.candidates.get(index).ok_or_else(|| {
                    SpellfixError::invalid_argument(format!(
                        "suggestion {index} out of range for {word:?}"
                    ))
                })?;
                if self.config.match_case {
                    match_case(word, candidate)
                } else {
                    candidate.to_string()
                }
            }
            Decision::Manual(correction) => correction,
        };

        if written == word {
            report.kept += 1;
        } else {
            report.replaced += 1;
            log::debug!("{word} -> {written}");
        }

        report.misspellings.push(MisspellingRecord {
            token: word.to_string(),
            min_distance: suggestions.min_distance,
            candidates: suggestions.candidates.iter().map(|c| c.to_string()).collect(),
            compared: suggestions.compared,
            written: written.clone(),
        });

        Ok(written)
    }
}

/// Apply the capitalization pattern of `original` to `replacement`.
///
/// An all-uppercase original (more than one letter) uppercases the replacement;
/// a leading capital capitalizes its first letter; otherwise it is returned unchanged.
pub fn match_case(original: &str, replacement: &str) -> String {
    let letters = original.chars().filter(|c| c.is_ascii_alphabetic()).count();
    if letters > 1 && !original.chars().any(|c| c.is_ascii_lowercase()) {
        return replacement.to_ascii_uppercase();
    }

    let mut chars = replacement.chars();
    match (original.chars().next(), chars.next()) {
        (Some(first), Some(head)) if first.is_ascii_uppercase() => {
            let mut result = String::with_capacity(replacement.len());
            result.push(head.to_ascii_uppercase());
            result.extend(chars);
            result
        }
        _ => replacement.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::operator::{AcceptFirst, KeepOriginal};

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["the", "cat", "cot", "sat", "on", "mat", "bat"], 100).unwrap()
    }

    #[test]
    fn test_known_words_pass_through() {
        let dict = dictionary();
        let mut session =
            CorrectionSession::new(&dict, CorrectorConfig::default(), KeepOriginal).unwrap();
        let correction = session.correct_text("The cat sat on the mat.").unwrap();

        assert_eq!(correction.text, "The cat sat on the mat.");
        assert_eq!(correction.report.tokens, 6);
        assert_eq!(correction.report.known, 6);
        assert_eq!(correction.report.misspelled(), 0);
        assert_eq!(correction.report.comparisons, 0);
    }

    #[test]
    fn test_accept_first_suggestion() {
        let dict = dictionary();
        let mut session =
            CorrectionSession::new(&dict, CorrectorConfig::default(), AcceptFirst).unwrap();
        let correction = session.correct_text("the cut sat, on teh mat!").unwrap();

        assert_eq!(correction.text, "the cat sat, on the mat!");
        assert_eq!(correction.report.replaced, 2);
        assert_eq!(correction.report.misspelled(), 2);

        let record = &correction.report.misspellings[0];
        assert_eq!(record.token, "cut");
        assert_eq!(record.min_distance, 1);
        assert_eq!(record.candidates, vec!["cat", "cot"]);
        assert_eq!(record.written, "cat");
    }

    #[test]
    fn test_keep_preserves_original_casing() {
        let dict = dictionary();
        let mut session =
            CorrectionSession::new(&dict, CorrectorConfig::default(), KeepOriginal).unwrap();
        let correction = session.correct_text("Teh CUT").unwrap();

        assert_eq!(correction.text, "Teh CUT");
        assert_eq!(correction.report.kept, 2);
        assert_eq!(correction.report.replaced, 0);
    }

    #[test]
    fn test_manual_correction_and_match_case() {
        let dict = dictionary();
        let config = CorrectorConfig {
            match_case: true,
            ..Default::default()
        };
        let operator = |prompt: &Prompt<'_>| match prompt.lowercase {
            "zzz" => Decision::Manual("snore".to_string()),
            _ => Decision::Accept(0),
        };
        let mut session = CorrectionSession::new(&dict, config, operator).unwrap();
        let correction = session.correct_text("Cut MATT zzz").unwrap();

        assert_eq!(correction.text, "Cat MAT snore");
        assert_eq!(correction.report.replaced, 3);
    }

    #[test]
    fn test_out_of_range_decision_is_an_error() {
        let dict = dictionary();
        let operator = |_: &Prompt<'_>| Decision::Accept(99);
        let mut session =
            CorrectionSession::new(&dict, CorrectorConfig::default(), operator).unwrap();
        assert!(session.correct_text("cut").is_err());
    }

    #[test]
    fn test_overlong_token_is_rejected() {
        let dict = dictionary();
        let config = CorrectorConfig {
            max_word_len: 4,
            ..Default::default()
        };
        let mut session = CorrectionSession::new(&dict, config, KeepOriginal).unwrap();
        let err = session.correct_text("cat catalogue").unwrap_err();
        assert!(matches!(err, SpellfixError::InputTooLong { max: 4, .. }));
    }

    #[test]
    fn test_empty_dictionary_rejected() {
        let dict = Dictionary::default();
        let result = CorrectionSession::new(&dict, CorrectorConfig::default(), KeepOriginal);
        assert!(matches!(result, Err(SpellfixError::EmptyDictionary)));
    }

    #[test]
    fn test_config_validation() {
        let config = CorrectorConfig {
            separators: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CorrectorConfig {
            max_word_len: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        assert!(CorrectorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: CorrectorConfig =
            serde_json::from_str(r#"{"separators": " ;", "seed": "unbounded"}"#).unwrap();
        assert_eq!(config.separators, " ;");
        assert_eq!(config.seed, SeedStrategy::Unbounded);
        assert_eq!(config.max_word_len, DEFAULT_MAX_WORD_LEN);
        assert_eq!(config.output_prefix, "out_");
    }

    #[test]
    fn test_output_path() {
        let config = CorrectorConfig::default();
        let path = config.output_path(Path::new("/tmp/texts/essay.txt")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/texts/out_essay.txt"));
        assert!(config.output_path(Path::new("/")).is_err());
    }

    #[test]
    fn test_text_encoding() {
        let (text, encoding) = TextEncoding::decode("café".as_bytes().to_vec());
        assert_eq!(text, "café");
        assert_eq!(encoding, TextEncoding::Utf8);

        let (text, encoding) = TextEncoding::decode(b"caf\xe9".to_vec());
        assert_eq!(text, "café");
        assert_eq!(encoding, TextEncoding::Latin1);

        assert_eq!(TextEncoding::Latin1.encode("café"), b"caf\xe9");
        assert_eq!(
            TextEncoding::Latin1.encode("a\u{263a}"),
            [b"a".as_slice(), "\u{263a}".as_bytes()].concat()
        );
    }

    #[test]
    fn test_match_case() {
        assert_eq!(match_case("Teh", "the"), "The");
        assert_eq!(match_case("TEH", "the"), "THE");
        assert_eq!(match_case("teh", "the"), "the");
        assert_eq!(match_case("I", "a"), "A");
        assert_eq!(match_case("", "the"), "the");
    }
}
