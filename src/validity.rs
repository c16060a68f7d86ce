//! The dictionary oracle the solver consults once per search.
//!
//! The solver never decides on its own whether a string is a word: it hands the
//! whole candidate batch to a [`ValidityFilter`] and trusts the answer. A filter
//! is allowed to suspend (typically it is a remote service) and is all or
//! nothing: it returns the confirmed subset, or fails outright.

use crate::word_list::WordList;
use async_trait::async_trait;
use log::debug;
use std::collections::HashSet;
use std::sync::Arc;

/// Why a validation round-trip produced no answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// The oracle could not be reached or failed while answering. Retrying may help.
    #[error("validity service unavailable: {reason}")]
    Unavailable { reason: String },

    /// The oracle is reachable but cannot give a meaningful answer, e.g. it has
    /// no words loaded. Retrying the same request will not help.
    #[error("validity check refused: {reason}")]
    Rejected { reason: String },
}

/// `validate(candidates) -> confirmed subset`.
///
/// `candidates` holds distinct strings, shared with the registry that produced
/// them. Implementations may return words in any order and may repeat them;
/// the caller deduplicates.
#[async_trait]
pub trait ValidityFilter: Send + Sync {
    async fn validate(&self, candidates: &[Arc<str>]) -> Result<Vec<String>, FilterError>;
}

/// Local oracle backed by an in-memory word list.
///
/// Each candidate is trimmed and lowercased before the lookup, and blank
/// candidates are skipped, so the answer holds normalized words. An empty
/// dictionary refuses to answer rather than confirming nothing.
#[derive(Debug, Clone, Default)]
pub struct DictionaryFilter {
    words: HashSet<String>,
}

impl DictionaryFilter {
    #[must_use]
    pub fn new(word_list: &WordList) -> Self {
        Self { words: word_list.to_set() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl From<WordList> for DictionaryFilter {
    fn from(word_list: WordList) -> Self {
        Self { words: word_list.words.into_iter().collect() }
    }
}

#[async_trait]
impl ValidityFilter for DictionaryFilter {
    async fn validate(&self, candidates: &[Arc<str>]) -> Result<Vec<String>, FilterError> {
        if self.words.is_empty() {
            return Err(FilterError::Rejected { reason: "dictionary has no words".to_string() });
        }
        let valid: Vec<String> = candidates
            .iter()
            .map(|c| c.trim().to_lowercase())
            .filter(|w| !w.is_empty() && self.words.contains(w))
            .collect();
        debug!("dictionary confirmed {}/{} candidates", valid.len(), candidates.len());
        Ok(valid)
    }
}
