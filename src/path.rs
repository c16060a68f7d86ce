//! Walks over the grid: the record of how a word was spelled.

use crate::errors::InputError;
use crate::grid::{Coord, Grid};
use std::collections::HashSet;
use std::fmt;

/// Ordered cells spelling a word. Once captured for a word it is never changed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, serde::Serialize)]
#[serde(transparent)]
pub struct Path(Vec<Coord>);

impl Path {
    #[must_use]
    pub fn new(coords: Vec<Coord>) -> Self {
        Path(coords)
    }

    #[must_use]
    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Non-empty, pairwise distinct, and every consecutive pair 8-adjacent.
    #[must_use]
    pub fn is_walk(&self) -> bool {
        let distinct = self.0.iter().collect::<HashSet<_>>().len() == self.0.len();
        !self.0.is_empty() && distinct && self.0.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    /// Concatenate the letters under the path.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if a coordinate is off the board, `IncompleteGrid` if it
    /// crosses an empty cell.
    pub fn spell(&self, grid: &Grid) -> Result<String, InputError> {
        self.0
            .iter()
            .map(|c| grid.cell_at(c.row, c.col)?.ok_or(InputError::IncompleteGrid { missing: grid.missing_cells() }))
            .collect()
    }
}

impl From<&[Coord]> for Path {
    fn from(coords: &[Coord]) -> Self {
        Path(coords.to_vec())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(cells: &[(usize, usize)]) -> Path {
        Path::new(cells.iter().map(|&(r, c)| Coord::new(r, c)).collect())
    }

    #[test]
    fn test_valid_walk() {
        assert!(path(&[(0, 0), (0, 1), (1, 1), (1, 2)]).is_walk());
        assert!(path(&[(2, 2)]).is_walk());
    }

    #[test]
    fn test_rejects_gaps_and_repeats() {
        assert!(!path(&[(0, 0), (0, 2)]).is_walk());
        assert!(!path(&[(0, 0), (0, 1), (0, 0)]).is_walk());
        assert!(!path(&[(1, 1), (1, 1)]).is_walk());
        assert!(!Path::default().is_walk());
    }

    #[test]
    fn test_spell() {
        let grid: Grid = "cat/ore/sin".parse().unwrap();
        assert_eq!(path(&[(0, 0), (0, 1), (0, 2)]).spell(&grid).unwrap(), "cat");
        assert_eq!(path(&[(2, 0), (2, 1), (2, 2)]).spell(&grid).unwrap(), "sin");
        assert!(matches!(
            path(&[(0, 0), (3, 3)]).spell(&grid),
            Err(InputError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(path(&[(0, 0), (1, 1)]).to_string(), "(0, 0) → (1, 1)");
    }
}
