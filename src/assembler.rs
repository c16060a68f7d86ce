//! Join validated words back to their recorded paths, score them, and order the list.
//!
//! Ordering: longest first; among words of equal length, lexicographic (byte)
//! order. The second key makes the list independent of the order in which the
//! validity filter answered.

use crate::errors::InputError;
use crate::path::Path;
use crate::registry::CandidateRegistry;
use crate::scoring::ScoringMode;
use std::collections::HashSet;

/// One found word.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ResultEntry {
    pub word: String,
    pub path: Path,
    pub score: u32,
}

/// Build the ordered, duplicate-free result list.
///
/// # Errors
///
/// `UnregisteredWord` if a validated word was never a candidate. That can only
/// happen when the filter answers with something it was not asked about.
pub fn assemble<I, S>(validated: I, registry: &CandidateRegistry) -> Result<Vec<ResultEntry>, InputError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut entries = Vec::new();
    for word in validated {
        let word = word.as_ref();
        if !seen.insert(word.to_string()) {
            continue;
        }
        let path = registry.path_for(word)?.clone();
        entries.push(ResultEntry {
            word: word.to_string(),
            score: ScoringMode::WordHunt.points(word.len()),
            path,
        });
    }

    entries.sort_by(|a, b| b.word.len().cmp(&a.word.len()).then_with(|| a.word.cmp(&b.word)));
    Ok(entries)
}

/// Sum of the entries' scores.
#[must_use]
pub fn total_score(entries: &[ResultEntry]) -> u32 {
    entries.iter().map(|e| e.score).sum()
}
