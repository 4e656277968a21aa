use crate::error::Result;
use crate::session::SearchConfig;
use crate::solver::SearchLimits;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Find every multi-word anagram of a phrase in a word list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Word or phrase to anagram (prompted for when omitted)
    pub phrase: Option<String>,

    /// Path to a newline-delimited dictionary file
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// File to write anagrams to, one per line. When omitted, anagrams go to
    /// stdout and no file name is prompted for
    #[arg(short = 'o', long = "output")]
    pub output_path: Option<PathBuf>,

    /// Minimum number of letters in any word of an anagram
    #[arg(short = 'l', long = "min-length", default_value_t = 1)]
    pub min_word_length: usize,

    /// Maximum number of words in an anagram
    #[arg(short = 'w', long = "max-words")]
    pub max_words: Option<usize>,

    /// Stop after this many anagrams
    #[arg(short = 'n', long = "max-results")]
    pub max_results: Option<usize>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long = "log-level", default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Validated search settings for this invocation.
    pub fn search_config(&self) -> Result<SearchConfig> {
        SearchConfig::new(
            self.min_word_length,
            SearchLimits {
                max_words: self.max_words,
                max_results: self.max_results,
            },
        )
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}
