//! Command implementations for Spellfix CLI.

use std::fs;
use std::io::{self, IsTerminal};
use std::path::Path;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::*;

/// Execute a CLI command.
pub fn execute_command(args: SpellfixArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_file(check_args, &args),
        Command::Distance(distance_args) => edit_distance(distance_args, &args),
        Command::Lookup(lookup_args) => lookup_word(lookup_args, &args),
        Command::Suggest(suggest_args) => suggest_words(suggest_args, &args),
    }
}

/// Load the dictionary named on the command line.
fn load_dictionary(args: &DictionaryArgs, default_max_len: usize) -> Result<Dictionary> {
    let max_word_len = args.max_word_len.unwrap_or(default_max_len);
    Dictionary::load_from_file(&args.dictionary, max_word_len)
}

/// Load the dictionary, printing it as read and after sorting.
fn load_dictionary_traced(args: &DictionaryArgs, max_word_len: usize) -> Result<Dictionary> {
    let contents = fs::read_to_string(&args.dictionary)?;
    let entries = Dictionary::read_entries(&contents)?;
    println!("{}", word_list("Dictionary as read:", &entries));

    let dictionary = Dictionary::from_words(entries, max_word_len)?;
    println!("{}", word_list("Sorted dictionary:", dictionary.words()));
    Ok(dictionary)
}

/// Build the corrector configuration: file first, then command line overrides.
fn corrector_config(args: &CheckArgs) -> Result<CorrectorConfig> {
    let mut config = match &args.config_file {
        Some(path) => {
            log::info!("Loading configuration from: {}", path.display());
            CorrectorConfig::load_from_file(path)?
        }
        None => CorrectorConfig::default(),
    };

    if let Some(separators) = &args.separators {
        config.separators = separators.clone();
    }
    if let Some(max_word_len) = args.dictionary.max_word_len {
        config.max_word_len = max_word_len;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.match_case {
        config.match_case = true;
    }

    config.validate()?;
    Ok(config)
}

/// Spell check a file.
fn check_file(args: &CheckArgs, cli_args: &SpellfixArgs) -> Result<()> {
    let config = corrector_config(args)?;
    let dictionary = if args.trace {
        load_dictionary_traced(&args.dictionary, config.max_word_len)?
    } else {
        load_dictionary(&args.dictionary, config.max_word_len)?
    };

    let report = match args.mode {
        DecisionMode::Interactive if io::stdin().is_terminal() => run_session(
            &dictionary,
            config,
            TerminalOperator::new(args.trace),
            &args.text_file,
        )?,
        DecisionMode::Interactive => run_session(
            &dictionary,
            config,
            ConsoleOperator::stdio(args.trace),
            &args.text_file,
        )?,
        DecisionMode::KeepAll => {
            run_session(&dictionary, config, KeepOriginal, &args.text_file)?
        }
        DecisionMode::AcceptFirst => {
            run_session(&dictionary, config, AcceptFirst, &args.text_file)?
        }
    };

    output_result("Spell check finished", &report, cli_args)
}

fn run_session<O: Operator>(
    dictionary: &Dictionary,
    config: CorrectorConfig,
    operator: O,
    text_file: &Path,
) -> Result<SessionReport> {
    let mut session = CorrectionSession::new(dictionary, config, operator)?;
    session.correct_file(text_file)
}

/// Compute an edit distance.
fn edit_distance(args: &DistanceArgs, cli_args: &SpellfixArgs) -> Result<()> {
    let matrix = DistanceMatrix::compute(&args.first, &args.second);

    output_result(
        "Edit distance computed",
        &DistanceResult {
            first: args.first.clone(),
            second: args.second.clone(),
            distance: matrix.distance(),
            table: args.table.then(|| matrix.to_string()),
        },
        cli_args,
    )
}

/// Binary search a dictionary.
fn lookup_word(args: &LookupArgs, cli_args: &SpellfixArgs) -> Result<()> {
    let dictionary = load_dictionary(&args.dictionary, DEFAULT_MAX_WORD_LEN)?;
    let word = args.word.to_ascii_lowercase();
    let outcome = dictionary.search(&word);

    output_result(
        if outcome.found() { "Found" } else { "Not found" },
        &LookupResult {
            word,
            index: outcome.index,
            probe_count: outcome.probe_count,
            probes: outcome.probes,
        },
        cli_args,
    )
}

/// Find the closest dictionary words.
fn suggest_words(args: &SuggestArgs, cli_args: &SpellfixArgs) -> Result<()> {
    let dictionary = load_dictionary(&args.dictionary, DEFAULT_MAX_WORD_LEN)?;
    let engine = SuggestionEngine::with_seed(&dictionary, args.seed);
    let word = args.word.to_ascii_lowercase();
    let suggestions = engine.suggest(&word)?;

    output_result(
        "Suggestions computed",
        &SuggestResult {
            known: engine.is_correct(&word),
            word,
            min_distance: suggestions.min_distance,
            candidates: suggestions.candidates.iter().map(|c| c.to_string()).collect(),
            compared: suggestions.compared,
        },
        cli_args,
    )
}
