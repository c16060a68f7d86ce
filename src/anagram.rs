//! Anagram helper: every dictionary word that can be spelled from a pool of tiles.
//!
//! Unlike the grid solver there is no adjacency here. A word qualifies when its
//! letters form a sub-multiset of the pool and its length is within bounds.

use crate::errors::InputError;
use crate::letters::{normalize_letters, LetterCounts};
use crate::scoring::ScoringMode;
use crate::word_list::WordList;
use log::debug;

/// Words shorter than this never count, whatever the caller asks for.
pub const ANAGRAM_MIN_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AnagramEntry {
    pub word: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AnagramResult {
    /// The pool after normalization (lowercase a-z only).
    pub letters: String,
    /// Highest score first, then alphabetical.
    pub entries: Vec<AnagramEntry>,
    pub total_score: u32,
}

/// Find every word in `word_list` spellable from `letters`.
///
/// `letters` is lowercased and stripped of anything outside a-z. Effective length
/// bounds are `max(ANAGRAM_MIN_LEN, min_len) ..= min(max_len, pool size)`, with
/// `max_len` defaulting to the pool size. Empty bounds simply find nothing.
///
/// # Errors
///
/// `InvalidAnagramChars` if no letters remain after normalization.
pub fn find_anagrams(
    letters: &str,
    min_len: usize,
    max_len: Option<usize>,
    word_list: &WordList,
) -> Result<AnagramResult, InputError> {
    let pool = normalize_letters(letters);
    let pool_counts = LetterCounts::from_word(&pool)
        .filter(|_| !pool.is_empty())
        .ok_or_else(|| InputError::InvalidAnagramChars { letters: letters.to_string() })?;

    let lo = min_len.max(ANAGRAM_MIN_LEN);
    let hi = max_len.unwrap_or(pool.len()).min(pool.len());

    let mut entries: Vec<AnagramEntry> = word_list
        .words
        .iter()
        .filter(|w| (lo..=hi).contains(&w.len()))
        .filter(|w| LetterCounts::from_word(w).is_some_and(|counts| counts.fits_within(&pool_counts)))
        .map(|w| AnagramEntry { word: w.clone(), score: ScoringMode::Anagram.points(w.len()) })
        .collect();

    entries.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
    let total_score = entries.iter().map(|e| e.score).sum();
    debug!("{} anagram(s) of \"{pool}\" between {lo} and {hi} letters", entries.len());

    Ok(AnagramResult { letters: pool, entries, total_score })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_list() -> WordList {
        WordList::from_words(["at", "ate", "eat", "tea", "seat", "east", "teas", "tease", "state", "taste", "sat"])
    }

    fn words(result: &AnagramResult) -> Vec<&str> {
        result.entries.iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn test_sub_multiset_words() {
        let result = find_anagrams("SEAT", 3, None, &word_list()).unwrap();
        assert_eq!(result.letters, "seat");
        assert_eq!(words(&result), ["east", "seat", "teas", "ate", "eat", "sat", "tea"]);
        assert_eq!(result.total_score, 3 * 400 + 4 * 100);
    }

    #[test]
    fn test_repeated_letters_need_repeated_tiles() {
        let result = find_anagrams("state", 5, None, &word_list()).unwrap();
        assert_eq!(words(&result), ["state", "taste"]);
        // "tease" needs two e's
        assert!(!words(&result).contains(&"tease"));
    }

    #[test]
    fn test_min_len_never_below_three() {
        let result = find_anagrams("at", 1, None, &word_list()).unwrap();
        assert!(result.entries.is_empty());
    }

    #[test]
    fn test_max_len_caps_results() {
        let result = find_anagrams("seat", 3, Some(3), &word_list()).unwrap();
        assert!(result.entries.iter().all(|e| e.word.len() == 3));
    }

    #[test]
    fn test_normalizes_input() {
        let result = find_anagrams(" S-e a!t ", 4, None, &word_list()).unwrap();
        assert_eq!(result.letters, "seat");
        assert_eq!(words(&result), ["east", "seat", "teas"]);
    }

    #[test]
    fn test_no_letters_is_an_error() {
        assert_eq!(
            find_anagrams("1234", 3, None, &word_list()).unwrap_err(),
            InputError::InvalidAnagramChars { letters: "1234".to_string() }
        );
    }
}
