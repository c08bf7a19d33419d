//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpellfixArgs};
use crate::error::Result;
use crate::spelling::{Probe, SessionReport};

/// Result structure for the distance command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DistanceResult {
    pub first: String,
    pub second: String,
    pub distance: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
}

/// Result structure for the lookup command.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult<'a> {
    pub word: String,
    pub index: Option<usize>,
    pub probe_count: usize,
    #[serde(borrow)]
    pub probes: Vec<Probe<'a>>,
}

/// Result structure for the suggest command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestResult {
    pub word: String,
    pub known: bool,
    pub min_distance: usize,
    pub candidates: Vec<String>,
    pub compared: usize,
}

/// Plain-text rendering of a command result.
pub trait HumanReadable {
    fn to_human(&self) -> String;
}

impl HumanReadable for DistanceResult {
    fn to_human(&self) -> String {
        let mut out = String::new();
        if let Some(table) = &self.table {
            out.push_str(table);
            out.push('\n');
        }
        let _ = write!(
            out,
            "Edit distance between {:?} and {:?}: {}",
            self.first, self.second, self.distance
        );
        out
    }
}

impl HumanReadable for LookupResult<'_> {
    fn to_human(&self) -> String {
        let mut out = format!("Binary search for: {}\n", self.word);
        for probe in &self.probes {
            let _ = writeln!(out, "dict[{}] = {}", probe.index, probe.word);
        }
        match self.index {
            Some(index) => {
                let _ = writeln!(out, "Found at index {index}");
            }
            None => out.push_str("Not found\n"),
        }
        let _ = write!(out, "Search ran {} times", self.probe_count);
        out
    }
}

impl HumanReadable for SuggestResult {
    fn to_human(&self) -> String {
        let mut out = String::new();
        if self.known {
            let _ = writeln!(out, "{} is in the dictionary", self.word);
        }
        let _ = writeln!(
            out,
            "Minimum distance: {} (compared edit distances {})",
            self.min_distance, self.compared
        );
        out.push_str("Words that give minimum distance:");
        for (i, candidate) in self.candidates.iter().enumerate() {
            let _ = write!(out, "\n {} - {}", i + 1, candidate);
        }
        out
    }
}

impl HumanReadable for SessionReport {
    fn to_human(&self) -> String {
        let mut out = String::from("Spell Check Summary:\n");
        out.push_str("════════════════════\n");
        let _ = writeln!(out, "Words checked: {}", self.tokens);
        let _ = writeln!(out, "Known words: {}", self.known);
        let _ = writeln!(out, "Misspelled words: {}", self.misspelled());
        let _ = writeln!(out, "Replaced: {}", self.replaced);
        let _ = writeln!(out, "Kept: {}", self.kept);
        let _ = writeln!(out, "Binary search probes: {}", self.probes);
        let _ = write!(out, "Edit distances computed: {}", self.comparisons);

        if !self.misspellings.is_empty() {
            out.push_str("\n\nCorrections:\n────────────");
            for record in &self.misspellings {
                let _ = write!(out, "\n{} -> {}", record.token, record.written);
            }
        }

        if let Some(path) = &self.output {
            let _ = write!(out, "\n\nOutput written to {}", path.display());
        }
        out
    }
}

/// A titled, numbered word listing.
pub fn word_list<S: AsRef<str>>(title: &str, words: &[S]) -> String {
    let mut out = format!("\n{title}");
    for (i, word) in words.iter().enumerate() {
        let _ = write!(out, "\n{i:4}. {}", word.as_ref());
    }
    out
}

/// Output a result in the requested format.
pub fn output_result<T>(message: &str, result: &T, args: &SpellfixArgs) -> Result<()>
where
    T: Serialize + HumanReadable,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanReadable>(message: &str, result: &T, args: &SpellfixArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    println!("{}", result.to_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SpellfixArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
