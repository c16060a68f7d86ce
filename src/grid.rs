//! The square letter board a search runs over.
//!
//! A [`Grid`] is edited cell by cell (or parsed in one go from a string such as
//! `"cat/ore/sin"`) and is only searchable once [`Grid::is_complete`] holds. The
//! solver takes its own snapshot, so edits made while a solve is in flight never
//! reach that solve.

use crate::errors::InputError;
use crate::letters::GridChar;
use std::fmt;
use std::str::FromStr;

/// Smallest supported board (3x3).
pub const MIN_GRID_SIZE: usize = 3;
/// Largest supported board (6x6).
pub const MAX_GRID_SIZE: usize = 6;
/// Board size used when nothing else is asked for.
pub const DEFAULT_GRID_SIZE: usize = 4;

/// A `(row, column)` position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// 8-directional adjacency: both deltas at most 1, and not the same cell.
    #[must_use]
    pub fn is_adjacent(self, other: Coord) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    }

    /// Step by a signed offset, returning `None` when that leaves the `size`x`size` board.
    #[must_use]
    pub fn offset(self, (dr, dc): (isize, isize), size: usize) -> Option<Coord> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < size && col < size).then_some(Coord { row, col })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An NxN board of optional lowercase letters, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::blank(DEFAULT_GRID_SIZE)
    }
}

impl Grid {
    /// An empty board of the given size.
    ///
    /// # Errors
    ///
    /// `UnsupportedGridSize` if `size` is outside `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
    pub fn new(size: usize) -> Result<Self, InputError> {
        check_size(size)?;
        Ok(Self::blank(size))
    }

    fn blank(size: usize) -> Self {
        Self { size, cells: vec![None; size * size] }
    }

    /// Build a full board from rows of letters.
    ///
    /// # Errors
    ///
    /// `UnsupportedGridSize` when the number of rows is out of range, `RaggedGrid`
    /// when a row has the wrong length, `InvalidCell` for non-letters.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, InputError> {
        let mut grid = Self::new(rows.len())?;
        for (row, letters) in rows.iter().enumerate() {
            let letters = letters.as_ref();
            let found = letters.chars().count();
            if found != grid.size {
                return Err(InputError::RaggedGrid { row, expected: grid.size, found });
            }
            for (col, letter) in letters.chars().enumerate() {
                grid.set_cell(row, col, letter)?;
            }
        }
        Ok(grid)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, InputError> {
        if row < self.size && col < self.size {
            Ok(row * self.size + col)
        } else {
            Err(InputError::OutOfBounds { row, col, size: self.size })
        }
    }

    /// Put a letter in a cell; uppercase input is lowercased.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` for a bad coordinate, `InvalidCell` for anything that is not a letter.
    pub fn set_cell(&mut self, row: usize, col: usize, letter: char) -> Result<(), InputError> {
        let i = self.index(row, col)?;
        if !letter.is_grid_letter() {
            return Err(InputError::InvalidCell { row, col, value: letter.to_string() });
        }
        self.cells[i] = Some(letter.to_ascii_lowercase());
        Ok(())
    }

    /// Empty a cell.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` for a bad coordinate.
    pub fn clear_cell(&mut self, row: usize, col: usize) -> Result<(), InputError> {
        let i = self.index(row, col)?;
        self.cells[i] = None;
        Ok(())
    }

    /// The letter at `(row, col)`, or `None` if the cell is still empty.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if either index is outside `[0, size)`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Option<char>, InputError> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Letter at a coordinate already known to be on the board.
    pub(crate) fn letter(&self, at: Coord) -> Option<char> {
        self.cells.get(at.row * self.size + at.col).copied().flatten()
    }

    /// True iff every cell holds a letter.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of cells still empty.
    #[must_use]
    pub fn missing_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Precondition for a search.
    ///
    /// # Errors
    ///
    /// `UnsupportedGridSize` or `IncompleteGrid`.
    pub fn ensure_searchable(&self) -> Result<(), InputError> {
        check_size(self.size)?;
        match self.missing_cells() {
            0 => Ok(()),
            missing => Err(InputError::IncompleteGrid { missing }),
        }
    }

    /// Replace the board with an empty one of a new size.
    ///
    /// Results computed for the old board no longer apply; see
    /// [`crate::solver::SolveResult::is_for`].
    ///
    /// # Errors
    ///
    /// `UnsupportedGridSize`, in which case the board is left untouched.
    pub fn resize(&mut self, size: usize) -> Result<(), InputError> {
        *self = Self::new(size)?;
        Ok(())
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Coord { row, col }))
    }
}

fn check_size(size: usize) -> Result<(), InputError> {
    if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(InputError::UnsupportedGridSize { size })
    }
}

/// Rows separated by `/`, `,` or whitespace: `"cat/ore/sin"`, `"cat ore sin"`.
impl FromStr for Grid {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c == ',' || c.is_whitespace())
            .filter(|r| !r.is_empty())
            .collect();
        Grid::from_rows(&rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.map_or('.', |c| c.to_ascii_uppercase()))?;
            }
        }
        Ok(())
    }
}
