//! Spell checking for Spellfix.
//!
//! This module provides the edit-distance engine, the sorted dictionary with
//! binary-search lookup, minimum-distance suggestion search, and the
//! interactive session that applies corrections to whole texts.

pub mod corrector;
pub mod dictionary;
pub mod levenshtein;
pub mod operator;
pub mod suggest;
pub mod tokenizer;

// Re-export commonly used types
pub use corrector::*;
pub use dictionary::*;
pub use levenshtein::*;
pub use operator::*;
pub use suggest::*;
pub use tokenizer::*;
