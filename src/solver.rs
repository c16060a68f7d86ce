//! The grid solver: enumerate, validate once, assemble.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] with three variants:
//!
//! - S001: `InvalidInput` (Grid or configuration rejected before enumeration (wraps [`InputError`]))
//! - S002: `ValidityFilterUnavailable` (The validity round-trip failed; nothing is returned)
//! - S003: `IntegrityFault` (The validity filter confirmed a word that was never submitted)
//!
//! Each error has a `code()`, optional `help()`, and `display_detailed()` method.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use wordhunt::config::SearchConfig;
//! use wordhunt::grid::Grid;
//! use wordhunt::solver;
//! use wordhunt::validity::DictionaryFilter;
//! use wordhunt::word_list::WordList;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let grid: Grid = "cat/ore/sin".parse()?;
//! let filter = DictionaryFilter::from(WordList::from_words(["cat", "care", "rise"]));
//! let result = solver::solve_grid(&grid, &SearchConfig::default(), &filter).await?;
//!
//! for entry in &result.entries {
//!     println!("{} ({} pts) via {}", entry.word, entry.score, entry.path);
//! }
//! println!("total: {}", result.total_score);
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Every call owns its grid snapshot, visited bitmap and candidate registry, so any
//! number of solves may run side by side. To supersede a solve still waiting on
//! its filter, drop its future; to detect results that no longer match the board
//! on screen, use [`SolveResult::is_for`].

use crate::assembler::{assemble, total_score, ResultEntry};
use crate::config::SearchConfig;
use crate::enumerator::{enumerate_candidates, Enumeration};
use crate::errors::InputError;
use crate::grid::Grid;
use crate::validity::{FilterError, ValidityFilter};
use log::{debug, info, warn};
use std::time::Duration;

/// Status of the solver run.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveStatus {
    /// Every walk was explored.
    Complete,

    /// Enumeration stopped because the time budget expired; the entries come
    /// from the candidates found up to that point.
    TimedOut { elapsed: Duration },
}

/// Successful solver run (even if enumeration stopped early).
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Found words, longest first, then alphabetical.
    pub entries: Vec<ResultEntry>,
    pub total_score: u32,
    pub status: SolveStatus,
    /// How many distinct candidates went to the validity filter.
    pub candidates_submitted: usize,
    /// The board these results belong to.
    pub grid: Grid,
}

impl SolveResult {
    /// True if this result was computed for exactly this board.
    ///
    /// After a resize or an edit the answer is `false` and the result should be discarded.
    #[must_use]
    pub fn is_for(&self, grid: &Grid) -> bool {
        &self.grid == grid
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for SolveResult {
    type Item = ResultEntry;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Unified error type for the solver pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The grid or configuration was rejected before any enumeration work.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] Box<InputError>),

    /// The validity filter failed. No partial list is produced.
    #[error("validity filter unavailable: {source}")]
    ValidityFilterUnavailable {
        #[source]
        source: FilterError,
    },

    /// The filter confirmed a word that was never submitted.
    #[error("integrity fault: validity filter returned \"{word}\", which was never a candidate")]
    IntegrityFault { word: String },
}

impl From<InputError> for SolverError {
    fn from(e: InputError) -> Self {
        SolverError::InvalidInput(Box::new(e))
    }
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::InvalidInput(_) => "S001",
            SolverError::ValidityFilterUnavailable { .. } => "S002",
            SolverError::IntegrityFault { .. } => "S003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::InvalidInput(_) => "Grid or configuration rejected",
            SolverError::ValidityFilterUnavailable { .. } => "Word validation failed",
            SolverError::IntegrityFault { .. } => "Validity filter returned an unknown word",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::InvalidInput(_) => "The grid or search configuration failed a precondition, so the search never started. This wraps an underlying InputError (see Input Errors section for specific error codes).",
            SolverError::ValidityFilterUnavailable { .. } => "The dictionary service could not confirm the candidate words. The whole search is discarded; no partial results are returned.",
            SolverError::IntegrityFault { .. } => "Every validated word must be one of the submitted candidates. The filter answered with a word it was never asked about, which means its answer cannot be trusted.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::ValidityFilterUnavailable { .. } => Some("Check that the dictionary service is reachable, then retry the same grid"),
            SolverError::IntegrityFault { .. } => Some("This points at a faulty dictionary service. Please report this issue."),
            SolverError::InvalidInput(_) => None, // InputError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::InvalidInput(ie) => {
                format!("{}\n  caused by: {}", self.code(), ie.display_detailed())
            }
            _ => {
                crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
            }
        }
    }
}

/// Synchronous half of the pipeline: check inputs, then enumerate candidates.
///
/// # Errors
///
/// `SolverError::InvalidInput` for an incomplete/unsupported grid or bad bounds.
pub fn find_candidates(grid: &Grid, config: &SearchConfig) -> Result<Enumeration, SolverError> {
    Ok(enumerate_candidates(grid, config)?)
}

/// Solve a grid: enumerate every candidate, validate them in a single call to
/// `filter`, and assemble the scored, ordered result list.
///
/// # Errors
///
/// - `InvalidInput`: the grid or config failed a precondition (nothing was enumerated).
/// - `ValidityFilterUnavailable`: the filter failed; no entries are returned.
/// - `IntegrityFault`: the filter answered with a word that was not submitted.
pub async fn solve_grid(
    grid: &Grid,
    config: &SearchConfig,
    filter: &dyn ValidityFilter,
) -> Result<SolveResult, SolverError> {
    // Snapshot so later edits by the caller cannot reach this search
    let grid = grid.clone();

    let enumeration = find_candidates(&grid, config)?;
    let status = if enumeration.timed_out {
        SolveStatus::TimedOut { elapsed: enumeration.elapsed }
    } else {
        SolveStatus::Complete
    };

    let registry = enumeration.registry;
    let candidates = registry.words();
    info!("submitting {} candidates for validation", candidates.len());

    let validated = if candidates.is_empty() {
        Vec::new()
    } else {
        filter.validate(candidates).await.map_err(|source| {
            warn!("validity filter failed: {source}");
            SolverError::ValidityFilterUnavailable { source }
        })?
    };
    debug!("validity filter confirmed {} words", validated.len());

    let entries = assemble(&validated, &registry).map_err(|e| match e {
        InputError::UnregisteredWord { word } => SolverError::IntegrityFault { word },
        other => SolverError::from(other),
    })?;

    // Postcondition: every entry is a real walk of the right length
    debug_assert!(
        entries.iter().all(|e| e.path.is_walk() && e.path.len() == e.word.len()),
        "every entry must carry a walk spelling its word"
    );
    debug_assert!(
        entries.iter().all(|e| (config.min_len..=config.max_len).contains(&e.word.len())),
        "every entry must respect the length bounds"
    );

    let total_score = total_score(&entries);
    info!("found {} words worth {} points", entries.len(), total_score);

    Ok(SolveResult {
        entries,
        total_score,
        status,
        candidates_submitted: registry.len(),
        grid,
    })
}
