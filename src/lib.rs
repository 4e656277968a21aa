// Library interface for anagram-solver
// This allows integration tests to access internal modules

pub mod cli;
pub mod emitter;
pub mod error;
pub mod letters;
pub mod logging;
pub mod session;
pub mod solver;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use emitter::{CollectEmitter, LineEmitter, ResultEmitter};
pub use error::{AnagramError, Result};
pub use letters::{LetterCounts, alpha_length};
pub use session::{SearchConfig, run_query};
pub use solver::{
    SearchLimits, SearchSummary, WordEntry, build_working_list, filter_candidates, find_anagrams,
    order_by_length,
};
pub use wordbank::{DictionarySource, load_wordbank_from_file, load_wordbank_from_str};
