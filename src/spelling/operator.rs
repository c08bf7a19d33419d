//! Decisions on misspelled words.
//!
//! A [`CorrectionSession`](crate::spelling::corrector::CorrectionSession)
//! hands every misspelled word, together with its suggestions, to an
//! [`Operator`] and applies the returned [`Decision`].

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use dialoguer::{Input, Select};

use crate::error::Result;
use crate::spelling::dictionary::SearchOutcome;
use crate::spelling::suggest::SuggestionSet;

/// A misspelled word awaiting a decision.
#[derive(Debug, Clone, Copy)]
pub struct Prompt<'a> {
    /// The word exactly as it appears in the text.
    pub token: &'a str,
    /// The lowercased form used for lookup and distances.
    pub lowercase: &'a str,
    /// Dictionary words at minimum distance.
    pub suggestions: &'a SuggestionSet<'a>,
}

/// What to write in place of a misspelled word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Leave the word as it is.
    Keep,
    /// Use the suggestion at this position of the candidate list.
    Accept(usize),
    /// Use a correction typed by the operator.
    Manual(String),
}

/// Chooses a replacement for misspelled words.
pub trait Operator {
    /// Decide what to do with a misspelled word.
    fn decide(&mut self, prompt: &Prompt<'_>) -> Result<Decision>;

    /// Called after every dictionary lookup, misspelled or not.
    fn lookup(&mut self, _token: &str, _outcome: &SearchOutcome<'_>) -> Result<()> {
        Ok(())
    }
}

impl<F> Operator for F
where
    F: FnMut(&Prompt<'_>) -> Decision,
{
    fn decide(&mut self, prompt: &Prompt<'_>) -> Result<Decision> {
        Ok(self(prompt))
    }
}

/// Leaves every misspelled word untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepOriginal;

impl Operator for KeepOriginal {
    fn decide(&mut self, _prompt: &Prompt<'_>) -> Result<Decision> {
        Ok(Decision::Keep)
    }
}

/// Takes the first suggestion in dictionary order.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptFirst;

impl Operator for AcceptFirst {
    fn decide(&mut self, prompt: &Prompt<'_>) -> Result<Decision> {
        Ok(if prompt.suggestions.is_empty() {
            Decision::Keep
        } else {
            Decision::Accept(0)
        })
    }
}

/// Print the lookup banner for `token`; with `trace`, every probe as well.
fn write_lookup<W: Write>(
    writer: &mut W,
    trace: bool,
    token: &str,
    outcome: &SearchOutcome<'_>,
) -> Result<()> {
    writeln!(writer, "\n\n---> |{token}|")?;
    if trace {
        writeln!(writer, "Binary search for: {}", token.to_ascii_lowercase())?;
        for probe in &outcome.probes {
            writeln!(writer, "dict[{}] = {}", probe.index, probe.word)?;
        }
        writeln!(
            writer,
            "{}",
            if outcome.found() { "Found" } else { "Not found" }
        )?;
    }
    writeln!(writer, "Search ran {} times", outcome.probe_count)?;
    if outcome.found() {
        writeln!(writer, "   - OK")?;
    }
    Ok(())
}

const MENU_TYPE_CORRECTION: usize = 0;
const MENU_KEEP: usize = 1;
const MENU_FIRST_SUGGESTION: usize = 2;

/// Entries of the terminal menu: type a correction, keep the word, then every suggestion.
pub fn menu_items(suggestions: &SuggestionSet<'_>) -> Vec<String> {
    let mut items = Vec::with_capacity(MENU_FIRST_SUGGESTION + suggestions.len());
    items.push("Type correction".to_string());
    items.push("Leave word as is".to_string());
    items.extend(suggestions.candidates.iter().map(|c| c.to_string()));
    items
}

/// Map a menu selection to a decision. `None` means a correction must be typed.
///
/// A cancelled menu keeps the word.
pub fn menu_decision(selection: Option<usize>) -> Option<Decision> {
    match selection {
        Some(MENU_TYPE_CORRECTION) => None,
        None | Some(MENU_KEEP) => Some(Decision::Keep),
        Some(index) => Some(Decision::Accept(index - MENU_FIRST_SUGGESTION)),
    }
}

/// Arrow-key menu on an interactive terminal.
///
/// Escape or `q` leaves the word as it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalOperator {
    trace: bool,
}

impl TerminalOperator {
    /// With `trace` set, every binary-search probe is shown.
    pub fn new(trace: bool) -> Self {
        TerminalOperator { trace }
    }
}

impl Operator for TerminalOperator {
    fn lookup(&mut self, token: &str, outcome: &SearchOutcome<'_>) -> Result<()> {
        write_lookup(&mut io::stdout().lock(), self.trace, token, outcome)
    }

    fn decide(&mut self, prompt: &Prompt<'_>) -> Result<Decision> {
        let suggestions = prompt.suggestions;
        println!(
            "     Minimum distance: {} (compared edit distances {})",
            suggestions.min_distance, suggestions.compared
        );

        let default = if suggestions.is_empty() {
            MENU_KEEP
        } else {
            MENU_FIRST_SUGGESTION
        };
        let selection = Select::new()
            .with_prompt(format!("Replace \"{}\"", prompt.token))
            .items(&menu_items(suggestions))
            .default(default)
            .interact_opt()?;

        match menu_decision(selection) {
            Some(decision) => Ok(decision),
            None => {
                let word: String = Input::new()
                    .with_prompt("Enter correct word")
                    .interact_text()?;
                Ok(Decision::Manual(word))
            }
        }
    }
}

/// Numbered menu on a reader/writer pair, for piped or scripted input.
///
/// The menu offers `-1` to type a correction, `0` to leave the word and
/// `1..=n` to pick a suggestion; anything else asks again. End of input
/// keeps the word.
pub struct ConsoleOperator<R, W> {
    reader: R,
    writer: W,
    trace: bool,
}

impl ConsoleOperator<StdinLock<'static>, Stdout> {
    /// Operator reading from stdin and writing to stdout.
    pub fn stdio(trace: bool) -> Self {
        ConsoleOperator::new(io::stdin().lock(), io::stdout(), trace)
    }
}

impl<R: BufRead, W: Write> ConsoleOperator<R, W> {
    /// With `trace` set, every binary-search probe is shown.
    pub fn new(reader: R, writer: W, trace: bool) -> Self {
        ConsoleOperator {
            reader,
            writer,
            trace,
        }
    }

    /// Consume the operator, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Read one line without its line terminator; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn read_choice(&mut self, max: usize) -> Result<Option<i64>> {
        loop {
            write!(self.writer, "Enter your choice: ")?;
            self.writer.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Ok(choice) if (-1..=max as i64).contains(&choice) => return Ok(Some(choice)),
                _ => log::debug!("Rejected menu choice {line:?}"),
            }
        }
    }
}

impl<R: BufRead, W: Write> Operator for ConsoleOperator<R, W> {
    fn lookup(&mut self, token: &str, outcome: &SearchOutcome<'_>) -> Result<()> {
        write_lookup(&mut self.writer, self.trace, token, outcome)
    }

    fn decide(&mut self, prompt: &Prompt<'_>) -> Result<Decision> {
        let suggestions = prompt.suggestions;

        writeln!(self.writer, "\n-1 - Type correction")?;
        writeln!(self.writer, " 0 - Leave word as is")?;
        writeln!(
            self.writer,
            "     Minimum distance: {} (compared edit distances {})",
            suggestions.min_distance, suggestions.compared
        )?;
        writeln!(self.writer, "     Words that give minimum distance:")?;
        for (i, candidate) in suggestions.candidates.iter().enumerate() {
            writeln!(self.writer, " {} - {}", i + 1, candidate)?;
        }

        let decision = match self.read_choice(suggestions.len())? {
            None | Some(0) => Decision::Keep,
            Some(-1) => {
                write!(self.writer, "Enter correct word: ")?;
                self.writer.flush()?;
                match self.read_line()? {
                    Some(word) => Decision::Manual(word),
                    None => Decision::Keep,
                }
            }
            Some(choice) => Decision::Accept(choice as usize - 1),
        };
        Ok(decision)
    }
}
