//! Candidate filtering, ordering and the backtracking anagram search.

use crate::debug_log;
use crate::emitter::ResultEmitter;
use crate::error::Result;
use crate::letters::{LetterCounts, alpha_length};
use std::ops::ControlFlow;

/// A dictionary word that survived filtering, with its letter counts cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordEntry {
    text: String,
    alpha_len: usize,
    counts: LetterCounts,
}

impl WordEntry {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            alpha_len: alpha_length(text),
            counts: LetterCounts::from_text(text),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn alpha_len(&self) -> usize {
        self.alpha_len
    }

    #[must_use]
    pub fn counts(&self) -> &LetterCounts {
        &self.counts
    }
}

/// Optional caps on how much work one search may do. Both default to
/// unlimited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Longest anagram, in words, that will be assembled.
    pub max_words: Option<usize>,
    /// Stop the whole search once this many anagrams have been emitted.
    pub max_results: Option<usize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub emitted: usize,
    /// The result cap stopped the search; more anagrams may exist.
    pub truncated: bool,
}

/// Keeps the words that could appear in an anagram of the phrase: no longer
/// than the phrase, at least `min_word_length` letters, and never needing
/// more of a letter than the phrase has. Input order is preserved.
#[must_use]
pub fn filter_candidates(
    words: &[String],
    phrase: &LetterCounts,
    phrase_len: usize,
    min_word_length: usize,
) -> Vec<WordEntry> {
    let mut working = Vec::new();
    for word in words {
        let len = alpha_length(word);
        if len == 0 || len > phrase_len || len < min_word_length {
            continue;
        }
        let entry = WordEntry::new(word);
        if entry.counts.is_submultiset_of(phrase) {
            working.push(entry);
        }
    }
    working
}

/// Longest words first. The sort is stable, so equal-length words keep their
/// dictionary order.
pub fn order_by_length(working: &mut [WordEntry]) {
    working.sort_by(|a, b| b.alpha_len.cmp(&a.alpha_len));
}

/// Filter and order `words` for `phrase` in one step.
#[must_use]
pub fn build_working_list(
    words: &[String],
    phrase: &str,
    min_word_length: usize,
) -> Vec<WordEntry> {
    let counts = LetterCounts::from_text(phrase);
    let mut working = filter_candidates(words, &counts, counts.total(), min_word_length);
    order_by_length(&mut working);
    working
}

/// Emits every combination of working-list entries, taken at strictly
/// increasing positions, whose letters exactly match `phrase`.
///
/// Each combination is found along exactly one path, so nothing is emitted
/// twice. Duplicate dictionary entries are separate positions and may both
/// appear in one anagram.
pub fn find_anagrams<E: ResultEmitter + ?Sized>(
    working: &[WordEntry],
    phrase: &LetterCounts,
    limits: SearchLimits,
    emitter: &mut E,
) -> Result<SearchSummary> {
    let letters = phrase.total();
    if letters == 0 || working.is_empty() || limits.max_results == Some(0) {
        return Ok(SearchSummary::default());
    }

    let mut search = Search {
        working,
        limits,
        emitter,
        summary: SearchSummary::default(),
    };
    let mut chosen = Vec::new();
    // a break only means the result cap was hit, already recorded in the summary
    let _flow = search.descend(&mut chosen, phrase, letters, 0)?;
    Ok(search.summary)
}

struct Search<'a, E: ?Sized> {
    working: &'a [WordEntry],
    limits: SearchLimits,
    emitter: &'a mut E,
    summary: SearchSummary,
}

impl<'a, E: ResultEmitter + ?Sized> Search<'a, E> {
    fn descend(
        &mut self,
        chosen: &mut Vec<&'a str>,
        remaining: &LetterCounts,
        letters_left: usize,
        cursor: usize,
    ) -> Result<ControlFlow<()>> {
        let working = self.working;
        for (i, entry) in working.iter().enumerate().skip(cursor) {
            let Some(rest) = remaining.checked_sub(&entry.counts) else {
                continue;
            };
            // checked_sub succeeded, so the word's letters are all available
            let left = letters_left - entry.alpha_len;
            chosen.push(&entry.text);

            let flow = if left == 0 {
                self.emit(chosen)?
            } else if self.may_extend(chosen.len()) {
                match working[i + 1..]
                    .iter()
                    .position(|next| next.alpha_len <= left)
                {
                    Some(offset) => self.descend(chosen, &rest, left, i + 1 + offset)?,
                    None => ControlFlow::Continue(()),
                }
            } else {
                ControlFlow::Continue(())
            };

            chosen.pop();
            if flow.is_break() {
                return Ok(flow);
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn may_extend(&self, words_chosen: usize) -> bool {
        self.limits.max_words.is_none_or(|max| words_chosen < max)
    }

    fn emit(&mut self, chosen: &[&str]) -> Result<ControlFlow<()>> {
        debug_log!("anagram #{}: {:?}", self.summary.emitted + 1, chosen);
        self.emitter.emit(chosen)?;
        self.summary.emitted += 1;

        if let Some(max) = self.limits.max_results
            && self.summary.emitted >= max
        {
            self.summary.truncated = true;
            return Ok(ControlFlow::Break(()));
        }
        Ok(ControlFlow::Continue(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::CollectEmitter;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_uppercase()).collect()
    }

    fn solve(
        dictionary: &[&str],
        phrase: &str,
        min_len: usize,
        limits: SearchLimits,
    ) -> Vec<String> {
        let working = build_working_list(&words(dictionary), phrase, min_len);
        let mut emitter = CollectEmitter::new();
        find_anagrams(&working, &LetterCounts::from_text(phrase), limits, &mut emitter).unwrap();
        emitter
            .into_results()
            .into_iter()
            .map(|seq| seq.join(" "))
            .collect()
    }

    #[test]
    fn test_filter_drops_words_that_cannot_fit() {
        let phrase = LetterCounts::from_text("listen");
        let dict = words(&["listens", "silent", "lit", "tilt", "zen", "in", "e"]);
        let working = filter_candidates(&dict, &phrase, 6, 2);
        let texts: Vec<&str> = working.iter().map(WordEntry::text).collect();
        // LISTENS is too long, TILT needs two Ts, ZEN needs a Z, E is too short
        assert_eq!(texts, vec!["SILENT", "LIT", "IN"]);
    }

    #[test]
    fn test_filter_skips_words_without_letters() {
        let phrase = LetterCounts::from_text("cat");
        let dict = words(&["--", "", "c-a-t"]);
        let working = filter_candidates(&dict, &phrase, 3, 1);
        assert_eq!(working.len(), 1);
        assert_eq!(working[0].text(), "C-A-T");
        assert_eq!(working[0].alpha_len(), 3);
    }

    #[test]
    fn test_order_by_length_is_stable() {
        let mut working: Vec<WordEntry> = ["ab", "c", "de", "fgh", "i", "jk"]
            .iter()
            .map(|w| WordEntry::new(w))
            .collect();
        order_by_length(&mut working);
        let texts: Vec<&str> = working.iter().map(WordEntry::text).collect();
        assert_eq!(texts, vec!["fgh", "ab", "de", "jk", "c", "i"]);
    }

    #[test]
    fn test_single_word_anagrams() {
        let found = solve(&["cat", "act", "a", "tac"], "cat", 1, SearchLimits::default());
        assert_eq!(found, vec!["CAT", "ACT", "TAC"]);
    }

    #[test]
    fn test_multi_word_anagram_emitted_once() {
        let found = solve(&["dog", "go", "d"], "dog", 1, SearchLimits::default());
        assert_eq!(found, vec!["DOG", "GO D"]);
    }

    #[test]
    fn test_min_length_can_empty_the_working_list() {
        let found = solve(&["cat", "act", "dog", "a"], "cat", 4, SearchLimits::default());
        assert!(found.is_empty());
    }

    #[test]
    fn test_duplicate_entries_are_distinct_positions() {
        let found = solve(&["ab", "ab"], "aabb", 1, SearchLimits::default());
        assert_eq!(found, vec!["AB AB"]);
    }

    #[test]
    fn test_all_combinations_found() {
        let found = solve(&["a", "b", "c", "ab", "abc"], "abc", 1, SearchLimits::default());
        assert_eq!(found, vec!["ABC", "AB C", "A B C"]);
    }

    #[test]
    fn test_phrase_without_letters_yields_nothing() {
        let found = solve(&["a", "b"], "123 !!", 1, SearchLimits::default());
        assert!(found.is_empty());
    }

    #[test]
    fn test_no_anagram_is_not_an_error() {
        let found = solve(&["xyz", "qq"], "abc", 1, SearchLimits::default());
        assert!(found.is_empty());
    }

    #[test]
    fn test_phrase_punctuation_and_case_ignored() {
        let dict = ["dirty", "room", "dormitory"];
        let found = solve(&dict, "Dormitory!", 1, SearchLimits::default());
        assert_eq!(found, vec!["DORMITORY", "DIRTY ROOM"]);
        assert_eq!(solve(&dict, "DIRTY-room", 1, SearchLimits::default()), found);
    }

    #[test]
    fn test_max_words_limits_depth() {
        let dict = ["a", "b", "c", "ab", "abc"];
        let two = SearchLimits {
            max_words: Some(2),
            max_results: None,
        };
        assert_eq!(solve(&dict, "abc", 1, two), vec!["ABC", "AB C"]);

        let one = SearchLimits {
            max_words: Some(1),
            max_results: None,
        };
        assert_eq!(solve(&dict, "abc", 1, one), vec!["ABC"]);
    }

    #[test]
    fn test_max_results_stops_search() {
        let dict = words(&["a", "b", "c", "ab", "abc"]);
        let working = build_working_list(&dict, "abc", 1);
        let limits = SearchLimits {
            max_words: None,
            max_results: Some(2),
        };
        let mut emitter = CollectEmitter::new();
        let summary =
            find_anagrams(&working, &LetterCounts::from_text("abc"), limits, &mut emitter).unwrap();

        assert_eq!(summary, SearchSummary { emitted: 2, truncated: true });
        assert_eq!(emitter.results.len(), 2);
    }

    #[test]
    fn test_summary_counts_results() {
        let dict = words(&["a", "b", "c", "ab", "abc"]);
        let working = build_working_list(&dict, "abc", 1);
        let mut emitter = CollectEmitter::new();
        let summary = find_anagrams(
            &working,
            &LetterCounts::from_text("abc"),
            SearchLimits::default(),
            &mut emitter,
        )
        .unwrap();
        assert_eq!(summary, SearchSummary { emitted: 3, truncated: false });
    }

    #[test]
    fn test_search_is_deterministic() {
        let dict = ["listen", "silent", "enlist", "tin", "sel", "lens", "it", "ti", "net", "lis"];
        let first = solve(&dict, "listen", 1, SearchLimits::default());
        let second = solve(&dict, "listen", 1, SearchLimits::default());
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}
