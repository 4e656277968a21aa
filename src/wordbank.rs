use crate::error::{AnagramError, Result};
use crate::info_log;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/dictionary.txt");

/// File name looked up in the working directory and the user data directory
/// when no dictionary is given.
pub const DEFAULT_DICTIONARY_NAME: &str = "dictionary.txt";

const DATA_DIR_NAME: &str = "anagram-solver";

/// Trimmed copy of `word` with ASCII letters upper-cased. Other characters
/// are left alone so a word keeps the letter counts its phrase would have.
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.trim().to_ascii_uppercase()
}

/// One word per line. Blank lines are skipped; duplicates are kept.
pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(normalize_word)
        .filter(|word| !word.is_empty())
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let to_err = |source| AnagramError::Dictionary {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(to_err)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = normalize_word(&line.map_err(to_err)?);
        if !word.is_empty() {
            words.push(word);
        }
    }
    Ok(words)
}

/// `<data dir>/anagram-solver/dictionary.txt`, if the platform has a data dir.
#[must_use]
pub fn user_dictionary_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(DATA_DIR_NAME).join(DEFAULT_DICTIONARY_NAME))
}

/// Where the words for a query come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    File(PathBuf),
    Embedded,
}

impl DictionarySource {
    /// An explicit path always wins. Otherwise `./dictionary.txt`, then the
    /// user data dir copy, then the built-in list.
    #[must_use]
    pub fn resolve(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::File(path.to_path_buf());
        }
        let local = PathBuf::from(DEFAULT_DICTIONARY_NAME);
        if local.is_file() {
            return Self::File(local);
        }
        match user_dictionary_path() {
            Some(path) if path.is_file() => Self::File(path),
            _ => Self::Embedded,
        }
    }

    pub fn load(&self) -> Result<Vec<String>> {
        let words = match self {
            Self::File(path) => load_wordbank_from_file(path)?,
            Self::Embedded => load_wordbank_from_str(EMBEDDED_WORDBANK),
        };
        info_log!("Loaded {} words from {}", words.len(), self);
        Ok(words)
    }
}

impl std::fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Embedded => write!(f, "built-in word list"),
        }
    }
}
