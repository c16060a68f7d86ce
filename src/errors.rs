//! Error types for grid and search-configuration input, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E009) for documentation lookup:
//!
//! - E001: `OutOfBounds` (Coordinate outside the grid)
//! - E002: `IncompleteGrid` (Search requested before every cell holds a letter)
//! - E003: `UnsupportedGridSize` (Grid size outside 3..=6)
//! - E004: `InvalidCell` (Cell value is not a single letter)
//! - E005: `RaggedGrid` (Row length does not match the grid size)
//! - E006: `ContradictoryBounds` (Minimum word length exceeds maximum)
//! - E007: `InvalidLengthBounds` (Maximum word length of zero)
//! - E008: `UnregisteredWord` (Path requested for a word that was never registered)
//! - E009: `InvalidAnagramChars` (No usable letters in an anagram query)
//!
//! # Examples
//!
//! ```
//! use wordhunt::errors::InputError;
//! use wordhunt::grid::Grid;
//!
//! match "cat/ore/si".parse::<Grid>() {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! # let _ = InputError::IncompleteGrid { missing: 1 };
//! ```

use std::io;

/// Custom error type for grid and configuration input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("coordinate ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("grid is incomplete: {missing} cell(s) still empty")]
    IncompleteGrid { missing: usize },

    #[error("unsupported grid size: {size}")]
    UnsupportedGridSize { size: usize },

    #[error("invalid cell value {value:?} at ({row}, {col})")]
    InvalidCell { row: usize, col: usize, value: String },

    #[error("row {row} has {found} cell(s), expected {expected}")]
    RaggedGrid { row: usize, expected: usize, found: usize },

    #[error("contradictory bounds: min={min}, max={max}")]
    ContradictoryBounds { min: usize, max: usize },

    #[error("invalid word-length bounds: min={min}, max={max}")]
    InvalidLengthBounds { min: usize, max: usize },

    #[error("no path registered for word \"{word}\"")]
    UnregisteredWord { word: String },

    #[error("no usable letters in \"{letters}\" (only a-z are kept)")]
    InvalidAnagramChars { letters: String },
}

impl From<InputError> for io::Error {
    fn from(ie: InputError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, ie.to_string())
    }
}

impl InputError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            InputError::OutOfBounds { .. } => "E001",
            InputError::IncompleteGrid { .. } => "E002",
            InputError::UnsupportedGridSize { .. } => "E003",
            InputError::InvalidCell { .. } => "E004",
            InputError::RaggedGrid { .. } => "E005",
            InputError::ContradictoryBounds { .. } => "E006",
            InputError::InvalidLengthBounds { .. } => "E007",
            InputError::UnregisteredWord { .. } => "E008",
            InputError::InvalidAnagramChars { .. } => "E009",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            InputError::OutOfBounds { .. } => "Coordinate outside the grid",
            InputError::IncompleteGrid { .. } => "Search requested before every cell holds a letter",
            InputError::UnsupportedGridSize { .. } => "Grid size outside the supported range",
            InputError::InvalidCell { .. } => "Cell value is not a single letter",
            InputError::RaggedGrid { .. } => "Row length does not match the grid size",
            InputError::ContradictoryBounds { .. } => "Minimum word length exceeds maximum",
            InputError::InvalidLengthBounds { .. } => "Maximum word length of zero",
            InputError::UnregisteredWord { .. } => "Path requested for an unregistered word",
            InputError::InvalidAnagramChars { .. } => "No usable letters in an anagram query",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            InputError::OutOfBounds { .. } => "A row or column index was not in [0, size). The search never produces such coordinates itself, so seeing this from a solve indicates an internal bug.",
            InputError::IncompleteGrid { .. } => "Every cell must hold exactly one letter before a search can run. The request was rejected before any enumeration work was done.",
            InputError::UnsupportedGridSize { .. } => "Grids are square and between 3x3 and 6x6. Larger boards make the exhaustive walk impractically slow.",
            InputError::InvalidCell { .. } => "Cells hold exactly one ASCII letter a-z (uppercase input is lowercased).",
            InputError::RaggedGrid { .. } => "When a grid is built from rows, every row must contain exactly as many letters as there are rows.",
            InputError::ContradictoryBounds { .. } => "The minimum word length is greater than the maximum, so no word could ever qualify.",
            InputError::InvalidLengthBounds { .. } => "A maximum length of zero admits no word at all. A minimum of zero is accepted and behaves like 1, since every walk covers at least one cell.",
            InputError::UnregisteredWord { .. } => "Only words returned by the candidate registry have a recorded path. Asking for any other word is a caller error.",
            InputError::InvalidAnagramChars { .. } => "Anagram input is normalised to lowercase a-z; nothing was left after removing other characters.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            InputError::IncompleteGrid { .. } => Some("Fill in every cell before solving (e.g., 'cat/ore/sin' for a 3x3 grid)"),
            InputError::UnsupportedGridSize { .. } => Some("Use a grid size between 3 and 6"),
            InputError::InvalidCell { .. } => Some("Only the letters a-z are allowed in grid cells"),
            InputError::RaggedGrid { .. } => Some("Each row must have as many letters as there are rows (e.g., 'abcd/efgh/ijkl/mnop')"),
            InputError::ContradictoryBounds { .. } => Some("The minimum length cannot exceed the maximum length"),
            InputError::InvalidLengthBounds { .. } => Some("Use a maximum word length of at least 1 (the default range is 3-8)"),
            InputError::InvalidAnagramChars { .. } => Some("Provide at least one letter a-z (e.g., 'gamepigeon')"),
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
