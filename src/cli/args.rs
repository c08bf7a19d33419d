//! Command line argument parsing for Spellfix CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::spelling::SeedStrategy;

/// Spellfix - an interactive, edit-distance based spell checker
#[derive(Parser, Debug, Clone)]
#[command(name = "spellfix")]
#[command(about = "An interactive, edit-distance based spell checker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Spellfix Contributors")]
#[command(long_about = None)]
pub struct SpellfixArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellfixArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Spell check a text file, writing the corrected copy next to it
    Check(CheckArgs),

    /// Compute the edit distance between two words
    Distance(DistanceArgs),

    /// Binary search a dictionary for a word
    Lookup(LookupArgs),

    /// List the dictionary words closest to a word
    Suggest(SuggestArgs),
}

/// Dictionary options shared by several commands
#[derive(clap::Args, Debug, Clone)]
pub struct DictionaryArgs {
    /// Dictionary file (optional word count followed by whitespace-separated words)
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,

    /// Longest accepted word, in characters
    #[arg(long, value_name = "CHARS")]
    pub max_word_len: Option<usize>,
}

/// Arguments for checking a file
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Text file to check
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Corrector configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SPELLFIX_CONFIG")]
    pub config_file: Option<PathBuf>,

    /// Characters that separate words
    #[arg(short, long)]
    pub separators: Option<String>,

    /// How misspelled words are resolved
    #[arg(short, long, default_value = "interactive")]
    pub mode: DecisionMode,

    /// How suggestion searches seed their minimum distance
    #[arg(long)]
    pub seed: Option<SeedStrategy>,

    /// Give accepted suggestions the capitalization of the replaced word
    #[arg(long)]
    pub match_case: bool,

    /// Show every binary-search probe
    #[arg(short, long)]
    pub trace: bool,
}

/// How misspelled words are resolved
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionMode {
    /// Ask on the terminal for each word
    Interactive,
    /// Leave every misspelled word as it is
    KeepAll,
    /// Take the first suggestion in dictionary order
    AcceptFirst,
}

/// Arguments for edit distance
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// First word (down the left of the table)
    pub first: String,

    /// Second word (across the top of the table)
    pub second: String,

    /// Print the full distance table
    #[arg(short, long)]
    pub table: bool,
}

/// Arguments for dictionary lookup
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Word to look up
    pub word: String,
}

/// Arguments for suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Word to find suggestions for
    pub word: String,

    /// How the search seeds its minimum distance
    #[arg(long, default_value = "middle")]
    pub seed: SeedStrategy,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_check_command() {
        let args = SpellfixArgs::try_parse_from([
            "spellfix",
            "check",
            "essay.txt",
            "words.txt",
            "--mode",
            "accept-first",
            "--separators",
            " ,;",
            "--trace",
        ])
        .unwrap();

        if let Command::Check(check_args) = args.command {
            assert_eq!(check_args.text_file, PathBuf::from("essay.txt"));
            assert_eq!(check_args.dictionary.dictionary, PathBuf::from("words.txt"));
            assert_eq!(check_args.mode, DecisionMode::AcceptFirst);
            assert_eq!(check_args.separators.as_deref(), Some(" ,;"));
            assert!(check_args.trace);
            assert!(check_args.seed.is_none());
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_check_defaults_to_interactive() {
        let args = SpellfixArgs::try_parse_from(["spellfix", "check", "a.txt", "d.txt"]).unwrap();
        if let Command::Check(check_args) = args.command {
            assert_eq!(check_args.mode, DecisionMode::Interactive);
            assert!(!check_args.match_case);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_distance_command() {
        let args =
            SpellfixArgs::try_parse_from(["spellfix", "distance", "kitten", "sitting", "--table"])
                .unwrap();

        if let Command::Distance(distance_args) = args.command {
            assert_eq!(distance_args.first, "kitten");
            assert_eq!(distance_args.second, "sitting");
            assert!(distance_args.table);
        } else {
            panic!("Expected Distance command");
        }
    }

    #[test]
    fn test_suggest_command() {
        let args = SpellfixArgs::try_parse_from([
            "spellfix",
            "suggest",
            "words.txt",
            "helo",
            "--seed",
            "unbounded",
            "--max-word-len",
            "40",
        ])
        .unwrap();

        if let Command::Suggest(suggest_args) = args.command {
            assert_eq!(suggest_args.word, "helo");
            assert_eq!(suggest_args.seed, SeedStrategy::Unbounded);
            assert_eq!(suggest_args.dictionary.max_word_len, Some(40));
        } else {
            panic!("Expected Suggest command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = SpellfixArgs::try_parse_from(["spellfix", "distance", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = SpellfixArgs::try_parse_from(["spellfix", "-vv", "distance", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            SpellfixArgs::try_parse_from(["spellfix", "--quiet", "distance", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            SpellfixArgs::try_parse_from(["spellfix", "--format", "json", "lookup", "d.txt", "w"])
                .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
