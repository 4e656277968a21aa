use crate::emitter::ResultEmitter;
use crate::error::{AnagramError, Result};
use crate::letters::LetterCounts;
use crate::solver::{SearchLimits, SearchSummary, build_working_list, find_anagrams};
use crate::{debug_log, info_log};
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

/// Validated settings for one query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub min_word_length: usize,
    pub limits: SearchLimits,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_word_length: 1,
            limits: SearchLimits::default(),
        }
    }
}

impl SearchConfig {
    pub fn new(min_word_length: usize, limits: SearchLimits) -> Result<Self> {
        if min_word_length == 0 {
            return Err(invalid("min-length", "must be at least 1"));
        }
        if limits.max_words == Some(0) {
            return Err(invalid("max-words", "must be at least 1"));
        }
        if limits.max_results == Some(0) {
            return Err(invalid("max-results", "must be at least 1"));
        }
        Ok(Self {
            min_word_length,
            limits,
        })
    }
}

fn invalid(field: &'static str, reason: &str) -> AnagramError {
    AnagramError::InvalidConfig {
        field,
        reason: reason.to_string(),
    }
}

/// Prompts for the phrase to anagram. Returns `None` at end of input.
pub fn read_phrase<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    eprint!("Enter word or phrase to anagram: ");
    io::stderr().flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Opens the file named by `path`, or stdout when there is none.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| AnagramError::Output {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Runs one phrase against `wordbank`, sending every anagram to `emitter`.
pub fn run_query<E: ResultEmitter + ?Sized>(
    config: &SearchConfig,
    wordbank: &[String],
    phrase: &str,
    emitter: &mut E,
) -> Result<SearchSummary> {
    let counts = LetterCounts::from_text(phrase);
    if counts.is_empty() {
        info_log!("Phrase {:?} has no letters, nothing to search", phrase);
        return Ok(SearchSummary::default());
    }

    let working = build_working_list(wordbank, phrase, config.min_word_length);
    info_log!(
        "Working list: {} of {} words fit {:?} ({} letters)",
        working.len(),
        wordbank.len(),
        phrase,
        counts.total()
    );
    debug_log!("Search limits: {:?}", config.limits);

    let summary = find_anagrams(&working, &counts, config.limits, emitter)?;
    if summary.truncated {
        log::warn!(
            "Stopped after {} anagrams (result cap reached)",
            summary.emitted
        );
    }
    info_log!("Found {} anagrams of {:?}", summary.emitted, phrase);
    Ok(summary)
}
