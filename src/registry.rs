//! `registry`: the write-once map from candidate string to the path that first spelled it.
//!
//! The first registration of a word wins and every later one is a no-op, so the
//! retained path depends only on enumeration order. Words are also kept in
//! discovery order, which makes the batch sent for validation reproducible.

use crate::errors::InputError;
use crate::grid::Coord;
use crate::path::Path;
use std::collections::HashMap;
use std::sync::Arc;

/// Each word's text is allocated once and shared between `words` and `index`.
#[derive(Debug, Clone, Default)]
pub struct CandidateRegistry {
    words: Vec<Arc<str>>,
    // parallel to `words`
    paths: Vec<Path>,
    index: HashMap<Arc<str>, usize>,
}

impl CandidateRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `word` with `path` unless the word is already known.
    ///
    /// Returns `true` when this call created the entry. The path is only
    /// copied on that first call.
    pub fn register(&mut self, word: &str, path: &[Coord]) -> bool {
        if self.index.contains_key(word) {
            return false;
        }
        let word: Arc<str> = Arc::from(word);
        self.index.insert(Arc::clone(&word), self.words.len());
        self.words.push(word);
        self.paths.push(Path::from(path));
        true
    }

    /// Every registered word, in discovery order.
    #[must_use]
    pub fn words(&self) -> &[Arc<str>] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// The canonical path recorded for `word`.
    ///
    /// # Errors
    ///
    /// `UnregisteredWord` if `word` never came out of [`Self::words`].
    pub fn path_for(&self, word: &str) -> Result<&Path, InputError> {
        self.index
            .get(word)
            .map(|&i| &self.paths[i])
            .ok_or_else(|| InputError::UnregisteredWord { word: word.to_string() })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
