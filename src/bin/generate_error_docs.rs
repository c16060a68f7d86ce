//! Error code reference, rendered from the error enums themselves.
//!
//! Errors come in two levels: `InputError` (E codes) is raised by grid editing,
//! search settings and anagram queries, while `SolverError` (S codes) is what a
//! solve returns. `S001` only ever wraps an input error, so the page records for
//! every E code whether a solve can hand it back and under which S code.
//!
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::{self, Write};

use wordhunt::errors::InputError;
use wordhunt::solver::SolverError;
use wordhunt::validity::FilterError;

/// Where an input error comes from, and what a solve turns it into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    /// Editing or parsing a grid; a solve never sees it.
    Editing,
    /// Checked at the start of a solve and returned inside `S001`.
    SolveCheck,
    /// Joining filter output to paths; a solve reports it as `S003`.
    Assembly,
    /// Anagram queries only.
    Anagram,
}

impl Origin {
    fn raised_by(self) -> &'static str {
        match self {
            Origin::Editing => "`Grid::new`, `Grid::set_cell`, `Grid::clear_cell`, `Grid::resize`, grid parsing",
            Origin::SolveCheck => "`SearchConfig::validate`, `Grid::ensure_searchable`",
            Origin::Assembly => "`CandidateRegistry::path_for`, `assemble`",
            Origin::Anagram => "`find_anagrams`",
        }
    }

    fn in_a_solve(self) -> &'static str {
        match self {
            Origin::Editing | Origin::Anagram => "never returned by a solve",
            Origin::SolveCheck => "returned by a solve wrapped in `S001`",
            Origin::Assembly => "reported by a solve as `S003`",
        }
    }
}

fn input_errors() -> Vec<(InputError, Origin)> {
    vec![
        (InputError::OutOfBounds { row: 4, col: 1, size: 4 }, Origin::Editing),
        (InputError::IncompleteGrid { missing: 2 }, Origin::SolveCheck),
        (InputError::UnsupportedGridSize { size: 8 }, Origin::Editing),
        (InputError::InvalidCell { row: 1, col: 2, value: "7".to_string() }, Origin::Editing),
        (InputError::RaggedGrid { row: 2, expected: 4, found: 3 }, Origin::Editing),
        (InputError::ContradictoryBounds { min: 6, max: 4 }, Origin::SolveCheck),
        (InputError::InvalidLengthBounds { min: 3, max: 0 }, Origin::SolveCheck),
        (InputError::UnregisteredWord { word: "zebra".to_string() }, Origin::Assembly),
        (InputError::InvalidAnagramChars { letters: "1234".to_string() }, Origin::Anagram),
    ]
}

fn solver_errors() -> Vec<SolverError> {
    vec![
        SolverError::from(InputError::IncompleteGrid { missing: 2 }),
        SolverError::ValidityFilterUnavailable {
            source: FilterError::Unavailable { reason: "HTTP 503".to_string() },
        },
        SolverError::IntegrityFault { word: "zebra".to_string() },
    ]
}

/// E codes a solve can return inside `S001`, in code order.
fn wrapped_codes() -> Vec<&'static str> {
    input_errors()
        .iter()
        .filter(|(_, origin)| *origin == Origin::SolveCheck)
        .map(|(e, _)| e.code())
        .collect()
}

fn write_example(out: &mut String, detailed: &str) -> fmt::Result {
    writeln!(out, "```text\n{detailed}\n```\n")
}

fn render() -> Result<String, fmt::Error> {
    let inputs = input_errors();
    let solvers = solver_errors();
    let mut out = String::new();

    writeln!(out, "# Error Code Reference\n")?;
    writeln!(out, "_Generated by `generate_error_docs`; edit the error enums, not this file._\n")?;

    writeln!(out, "| Code | Meaning | Seen from a solve |")?;
    writeln!(out, "|------|---------|-------------------|")?;
    for e in &solvers {
        writeln!(out, "| {} | {} | yes |", e.code(), e.description())?;
    }
    for (e, origin) in &inputs {
        writeln!(out, "| {} | {} | {} |", e.code(), e.description(), origin.in_a_solve())?;
    }
    writeln!(out)?;

    writeln!(out, "## Solver errors\n")?;
    for e in &solvers {
        writeln!(out, "### {}: {}\n", e.code(), e.description())?;
        writeln!(out, "{}\n", e.details())?;
        if matches!(e, SolverError::InvalidInput(_)) {
            writeln!(out, "**Wraps:** {}\n", wrapped_codes().join(", "))?;
        }
        if let Some(help) = e.help() {
            writeln!(out, "**Fix:** {help}\n")?;
        }
        write_example(&mut out, &e.display_detailed())?;
    }

    writeln!(out, "## Input errors\n")?;
    for (e, origin) in &inputs {
        writeln!(out, "### {}: {}\n", e.code(), e.description())?;
        writeln!(out, "{}\n", e.details())?;
        writeln!(out, "**Raised by:** {}  ", origin.raised_by())?;
        writeln!(out, "**In a solve:** {}\n", origin.in_a_solve())?;
        if let Some(help) = e.help() {
            writeln!(out, "**Fix:** {help}\n")?;
        }
        write_example(&mut out, &e.display_detailed())?;
    }

    Ok(out)
}

fn main() -> Result<(), fmt::Error> {
    print!("{}", render()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordhunt::config::SearchConfig;
    use wordhunt::grid::Grid;
    use wordhunt::solver::find_candidates;

    #[test]
    fn test_every_code_has_one_section_and_one_row() {
        let doc = render().unwrap();
        let codes = solver_errors()
            .iter()
            .map(SolverError::code)
            .chain(input_errors().iter().map(|(e, _)| e.code()))
            .collect::<Vec<_>>();
        assert_eq!(codes.len(), 12);
        for code in codes {
            assert_eq!(doc.matches(&format!("### {code}: ")).count(), 1, "{code} heading");
            assert_eq!(doc.matches(&format!("| {code} |")).count(), 1, "{code} table row");
        }
    }

    #[test]
    fn test_invalid_input_lists_what_it_wraps() {
        let doc = render().unwrap();
        assert_eq!(wrapped_codes(), ["E002", "E006", "E007"]);
        let s001 = doc.split("### S001: ").nth(1).unwrap().split("### ").next().unwrap();
        assert!(s001.contains("**Wraps:** E002, E006, E007"));
        assert!(s001.contains("caused by"), "example shows the nested input error");
    }

    #[test]
    fn test_code_fences_are_balanced() {
        let doc = render().unwrap();
        assert_eq!(doc.matches("```text").count(), 12);
        assert_eq!(doc.matches("```").count(), 24);
    }

    #[test]
    fn test_solve_checks_really_come_back_as_s001() {
        let blank = Grid::new(3).unwrap();
        let full: Grid = "cat/ore/sin".parse().unwrap();
        let failures = [
            find_candidates(&blank, &SearchConfig::default()),
            find_candidates(&full, &SearchConfig::with_lengths(6, 4)),
            find_candidates(&full, &SearchConfig::with_lengths(3, 0)),
        ];
        let mut seen = Vec::new();
        for failure in failures {
            match failure {
                Err(SolverError::InvalidInput(ie)) => seen.push(ie.code()),
                other => panic!("expected S001, got {other:?}"),
            }
        }
        assert_eq!(seen, wrapped_codes());
    }
}
