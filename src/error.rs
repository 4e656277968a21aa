use std::io;
use std::path::PathBuf;

/// Errors surfaced by the anagram solver.
///
/// An empty phrase or a phrase with no anagrams is not an error; those runs
/// simply produce zero results.
#[derive(Debug, thiserror::Error)]
pub enum AnagramError {
    #[error("invalid {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("failed to read dictionary '{}': {source}", .path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open output '{}': {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, AnagramError>;
