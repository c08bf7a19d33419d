//! Error types for the Spellfix library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SpellfixError`] enum.
//!
//! # Examples
//!
//! ```
//! use spellfix::error::{SpellfixError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellfixError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Spellfix operations.
#[derive(Error, Debug)]
pub enum SpellfixError {
    /// I/O errors (reading the text or dictionary, writing the output file)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed dictionary contents
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// A suggestion search was requested against a dictionary with no words
    #[error("Dictionary is empty")]
    EmptyDictionary,

    /// Words are not in byte-wise lexicographic order
    #[error("Dictionary is not sorted: {previous:?} precedes {next:?}")]
    UnsortedDictionary { previous: String, next: String },

    /// A word or token exceeds the configured maximum length
    #[error("Word too long ({length} > {max} characters): {word:?}")]
    InputTooLong {
        word: String,
        length: usize,
        max: usize,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal prompt failures
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SpellfixError.
pub type Result<T> = std::result::Result<T, SpellfixError>;

impl SpellfixError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        SpellfixError::Dictionary(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SpellfixError::Config(msg.into())
    }

    /// Create a new input-too-long error for `word`.
    pub fn input_too_long<S: Into<String>>(word: S, max: usize) -> Self {
        let word = word.into();
        SpellfixError::InputTooLong {
            length: word.chars().count(),
            word,
            max,
        }
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpellfixError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
