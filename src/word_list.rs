//! `word_list`: load and preprocess the dictionary used by the local validity filter and the
//! anagram finder.
//!
//! Input comes either from a file or from an in-memory string (the latter is what browser
//! builds use, since there is no file system there).
//!
//! The parsing logic:
//! - One entry per line. A line is either a bare word (`cat`) or `word;score`.
//! - For `word;score` lines, `score` must parse as an integer, and entries scoring below
//!   `min_score` are skipped. Bare words are always kept.
//! - All words are normalized to lowercase; blank lines and words containing anything other
//!   than letters are skipped.
//! - The final list is deduplicated and sorted by length first, then alphabetically.

use std::collections::HashSet;

/// Struct representing a processed, ready-to-use word list.
///
/// `words` holds all valid words (filtered, normalized, deduplicated), sorted by
/// (length, alphabetical).
#[derive(Debug, Clone, Default)]
pub struct WordList {
    /// Example: `["art", "cat", "care", ...]`
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string.
    ///
    /// # Arguments
    /// * `contents` : The raw file contents. Each line is `word` or `word;score`.
    /// * `min_score`: Scored entries lower than this are skipped.
    #[must_use]
    pub fn parse_from_str(contents: &str, min_score: i32) -> WordList {
        let mut words: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() {
                    return None;
                }
                let word_raw = match line.split_once(';') {
                    Some((word_raw, score_raw)) => {
                        // an unparseable score drops the line
                        let score: i32 = score_raw.trim().parse().ok()?;
                        if score < min_score {
                            return None;
                        }
                        word_raw
                    }
                    None => line,
                };
                let word = word_raw.trim().to_lowercase();
                (!word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase())).then_some(word)
            })
            .collect();

        // dedup() only removes adjacent duplicates, so sort alphabetically first
        words.sort();
        words.dedup();
        words.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

        WordList { words }
    }

    /// Build from words already in memory (e.g. handed over from JavaScript).
    pub fn from_words<I, S>(words: I) -> WordList
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = words
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self::parse_from_str(&joined, i32::MIN)
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        min_score: i32,
    ) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e)
            )
        })?;
        Ok(Self::parse_from_str(&data, min_score))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Hash set of the words, for membership checks.
    #[must_use]
    pub fn to_set(&self) -> HashSet<String> {
        self.words.iter().cloned().collect()
    }
}
