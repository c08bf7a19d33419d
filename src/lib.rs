//! # Spellfix
//!
//! An interactive spell checker built around Levenshtein distance.
//!
//! ## Features
//!
//! - Sorted dictionary with binary-search lookup and probe tracing
//! - Minimum edit-distance suggestions with length-difference pruning
//! - Interactive or scripted correction of whole files, preserving punctuation
//!   and separators
//! - Command line interface

pub mod cli;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::error::{Result, SpellfixError};
    pub use crate::spelling::{
        CorrectionSession, CorrectorConfig, Decision, Dictionary, DistanceMatrix, Operator,
        Prompt, SeedStrategy, SuggestionEngine, SuggestionSet, binary_search, find_suggestions,
        levenshtein_distance,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
