//! Backtracking walk over the grid that produces every candidate string and
//! the first path spelling it.
//!
//! # Order
//!
//! Start cells are taken in row-major order, and from each cell the eight
//! neighbours are tried in [`NEIGHBOR_OFFSETS`] order. Because the registry
//! keeps the first path per word, this order fully determines which path a
//! word ends up with.
//!
//! # State
//!
//! All mutable state (visited bitmap, the word and path being built, the
//! registry) lives in one [`Walk`] owned by a single call, so independent
//! searches never share anything. A cell is marked right before its frame is
//! entered and unmarked right after it returns, so the bitmap always mirrors
//! the cells of the current path.

use crate::config::SearchConfig;
use crate::errors::InputError;
use crate::grid::{Coord, Grid};
use crate::registry::CandidateRegistry;
use instant::Instant;
use log::{debug, warn};
use std::ops::ControlFlow;
use std::time::Duration;

/// Neighbour offsets `(Δrow, Δcol)`, tried in exactly this order.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

// How many walk steps between two looks at the clock
const BUDGET_CHECK_INTERVAL: u64 = 1 << 12;

/// Simple helper to enforce a wall-clock time limit.
pub(crate) struct TimeBudget {
    start: Instant,   // when the budget began
    limit: Duration,  // maximum allowed elapsed time
}

impl TimeBudget {
    pub(crate) fn new(limit: Duration) -> Self {
        Self { start: Instant::now(), limit }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub(crate) fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }
}

/// Everything one enumeration produced.
#[derive(Debug, Clone)]
pub struct Enumeration {
    /// Candidates and their canonical paths.
    pub registry: CandidateRegistry,
    /// Number of walk frames entered (one per path prefix visited).
    pub walks_explored: u64,
    pub elapsed: Duration,
    /// The time budget ran out before every walk was explored.
    pub timed_out: bool,
}

/// Enumerate all candidates of the grid under `config`.
///
/// Both the configuration and the grid are checked before any walking starts.
///
/// # Errors
///
/// `InvalidLengthBounds`/`ContradictoryBounds` for bad length bounds,
/// `UnsupportedGridSize`/`IncompleteGrid` for a grid that cannot be searched.
pub fn enumerate_candidates(grid: &Grid, config: &SearchConfig) -> Result<Enumeration, InputError> {
    config.validate()?;
    grid.ensure_searchable()?;

    let budget = TimeBudget::new(config.time_budget);
    let mut walk = Walk {
        grid,
        min_len: config.min_len,
        max_len: config.max_len,
        budget: &budget,
        visited: 0,
        word: String::with_capacity(config.max_len),
        path: Vec::with_capacity(config.max_len),
        registry: CandidateRegistry::new(),
        walks_explored: 0,
    };

    let mut timed_out = false;
    for start in grid.coords() {
        if grid.letter(start).is_none() {
            continue;
        }
        walk.mark(start);
        let flow = walk.enter(start);
        walk.unmark(start);
        if flow.is_break() {
            timed_out = true;
            break;
        }
    }
    debug_assert_eq!(walk.visited, 0, "every mark must be matched by an unmark");

    let elapsed = budget.elapsed();
    if timed_out {
        warn!(
            "enumeration stopped after {:.1}s ({} walks); candidate list is partial",
            elapsed.as_secs_f64(),
            walk.walks_explored
        );
    }
    debug!(
        "enumerated {} walks into {} candidates on a {}x{} grid in {:.3}s",
        walk.walks_explored,
        walk.registry.len(),
        grid.size(),
        grid.size(),
        elapsed.as_secs_f64()
    );

    Ok(Enumeration {
        registry: walk.registry,
        walks_explored: walk.walks_explored,
        elapsed,
        timed_out,
    })
}

/// Per-call search state.
struct Walk<'a> {
    grid: &'a Grid,
    min_len: usize,
    max_len: usize,
    budget: &'a TimeBudget,
    // bit `row * size + col`; boards are at most 6x6 so 36 bits suffice
    visited: u64,
    word: String,
    path: Vec<Coord>,
    registry: CandidateRegistry,
    walks_explored: u64,
}

impl Walk<'_> {
    fn bit(&self, at: Coord) -> u64 {
        1u64 << (at.row * self.grid.size() + at.col)
    }

    fn mark(&mut self, at: Coord) {
        self.visited |= self.bit(at);
    }

    fn unmark(&mut self, at: Coord) {
        self.visited &= !self.bit(at);
    }

    fn is_visited(&self, at: Coord) -> bool {
        self.visited & self.bit(at) != 0
    }

    /// Step onto `at` (already marked), explore from it, then step back off.
    fn enter(&mut self, at: Coord) -> ControlFlow<()> {
        self.walks_explored += 1;
        if self.walks_explored % BUDGET_CHECK_INTERVAL == 0 && self.budget.expired() {
            return ControlFlow::Break(());
        }
        let Some(letter) = self.grid.letter(at) else {
            return ControlFlow::Continue(());
        };

        self.word.push(letter);
        self.path.push(at);
        let flow = self.explore(at);
        self.path.pop();
        self.word.pop();
        flow
    }

    fn explore(&mut self, at: Coord) -> ControlFlow<()> {
        // one letter per cell, so the path length is the word length
        let len = self.path.len();
        if len >= self.min_len {
            self.registry.register(&self.word, &self.path);
        }
        if len >= self.max_len {
            return ControlFlow::Continue(());
        }

        for offset in NEIGHBOR_OFFSETS {
            let Some(next) = at.offset(offset, self.grid.size()) else {
                continue;
            };
            if self.is_visited(next) || self.grid.letter(next).is_none() {
                continue;
            }
            self.mark(next);
            let flow = self.enter(next);
            self.unmark(next);
            if flow.is_break() {
                return flow;
            }
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Path;

    fn cat_grid() -> Grid {
        "cat/ore/sin".parse().unwrap()
    }

    fn path(cells: &[(usize, usize)]) -> Path {
        Path::new(cells.iter().map(|&(r, c)| Coord::new(r, c)).collect())
    }

    #[test]
    fn test_cat_uses_top_row() {
        let result = enumerate_candidates(&cat_grid(), &SearchConfig::default()).unwrap();
        assert!(!result.timed_out);
        assert_eq!(result.registry.path_for("cat").unwrap(), &path(&[(0, 0), (0, 1), (0, 2)]));
    }

    #[test]
    fn test_care_follows_adjacency() {
        let result = enumerate_candidates(&cat_grid(), &SearchConfig::default()).unwrap();
        assert_eq!(
            result.registry.path_for("care").unwrap(),
            &path(&[(0, 0), (0, 1), (1, 1), (1, 2)])
        );
        // 't' (0,2) and 's' (2,0) are not neighbours
        assert!(!result.registry.contains("cats"));
        // 't' (0,2) and 'o' (1,0) are not neighbours
        assert!(!result.registry.contains("tore"));
    }

    #[test]
    fn test_every_path_spells_its_word() {
        let grid = cat_grid();
        let config = SearchConfig::default();
        let result = enumerate_candidates(&grid, &config).unwrap();
        assert!(!result.registry.is_empty());
        for word in result.registry.words() {
            let p = result.registry.path_for(word).unwrap();
            assert!(p.is_walk(), "{word}: {p} is not a walk");
            assert_eq!(p.spell(&grid).unwrap(), &**word);
            assert!((config.min_len..=config.max_len).contains(&word.len()));
        }
    }

    #[test]
    fn test_first_registered_word_is_from_first_start_cell() {
        let result = enumerate_candidates(&cat_grid(), &SearchConfig::default()).unwrap();
        // c → a (first in-bounds neighbour is (0,1)) → t
        assert_eq!(&*result.registry.words()[0], "cat");
    }

    #[test]
    fn test_uniform_grid_terminates_without_reuse() {
        let grid: Grid = "aaa/aaa/aaa".parse().unwrap();
        let config = SearchConfig::default();
        let result = enumerate_candidates(&grid, &config).unwrap();

        let words: Vec<&str> = result.registry.words().iter().map(|w| &**w).collect();
        assert_eq!(words, ["aaa", "aaaa", "aaaaa", "aaaaaa", "aaaaaaa", "aaaaaaaa"]);
        for word in result.registry.words() {
            assert!(result.registry.path_for(word).unwrap().is_walk());
        }
        // every word has many paths; the first one walked from (0,0) is kept
        assert_eq!(result.registry.path_for("aaa").unwrap(), &path(&[(0, 0), (0, 1), (0, 2)]));
        assert_eq!(
            result.registry.path_for("aaaaa").unwrap(),
            &path(&[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0)])
        );
        let bound = 9 * 8u64.pow(u32::try_from(config.max_len - 1).unwrap());
        assert!(result.walks_explored <= bound);
    }

    #[test]
    fn test_single_letter_bounds() {
        let result = enumerate_candidates(&cat_grid(), &SearchConfig::with_lengths(1, 1)).unwrap();
        assert_eq!(result.registry.len(), 9);
        // nothing beyond the start cells is ever entered
        assert_eq!(result.walks_explored, 9);
    }

    #[test]
    fn test_zero_min_len_behaves_like_one() {
        let zero = enumerate_candidates(&cat_grid(), &SearchConfig::with_lengths(0, 3)).unwrap();
        let one = enumerate_candidates(&cat_grid(), &SearchConfig::with_lengths(1, 3)).unwrap();
        assert_eq!(zero.registry.words(), one.registry.words());
        assert_eq!(zero.walks_explored, one.walks_explored);
    }

    #[test]
    fn test_max_len_bounds_every_word() {
        let grid: Grid = "abcd/efgh/ijkl/mnop".parse().unwrap();
        let result = enumerate_candidates(&grid, &SearchConfig::with_lengths(2, 4)).unwrap();
        assert!(result.registry.words().iter().all(|w| (2..=4).contains(&w.len())));
        assert!(result.registry.contains("abcd"));
        assert!(!result.registry.contains("abcdh"));
    }

    #[test]
    fn test_rejects_incomplete_grid() {
        let mut grid = cat_grid();
        grid.clear_cell(2, 2).unwrap();
        assert_eq!(
            enumerate_candidates(&grid, &SearchConfig::default()).unwrap_err(),
            InputError::IncompleteGrid { missing: 1 }
        );
    }

    #[test]
    fn test_rejects_bad_config() {
        assert_eq!(
            enumerate_candidates(&cat_grid(), &SearchConfig::with_lengths(5, 3)).unwrap_err(),
            InputError::ContradictoryBounds { min: 5, max: 3 }
        );
    }

    #[test]
    fn test_repeatable() {
        let grid: Grid = "stre/aple/gnid/oues".parse().unwrap();
        let config = SearchConfig::with_lengths(3, 6);
        let a = enumerate_candidates(&grid, &config).unwrap();
        let b = enumerate_candidates(&grid, &config).unwrap();
        assert_eq!(a.registry.words(), b.registry.words());
        for word in a.registry.words() {
            assert_eq!(a.registry.path_for(word), b.registry.path_for(word));
        }
    }

    #[test]
    fn test_zero_budget_times_out() {
        let grid: Grid = "abcde/fghij/klmno/pqrst/uvwxy".parse().unwrap();
        let config = SearchConfig::default().time_budget(Duration::ZERO);
        let result = enumerate_candidates(&grid, &config).unwrap();
        assert!(result.timed_out);
        assert_eq!(result.walks_explored, BUDGET_CHECK_INTERVAL);
    }
}
