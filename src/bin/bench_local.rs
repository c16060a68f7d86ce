//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of the grid walk for a handful of boards on *your* machine.
//! - Runs each board several times and reports the median.
//! - Only the synchronous enumeration phase is timed; no dictionary is involved.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Longer words:                   `cargo run --bin bench_local --release -- --max-len 9`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - Use the same machine and `--release` for more comparable numbers.
//! - Boards live in `get_cases()` below.
//! - One warm-up run per board is done (not included in timing).
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use std::hint::black_box;
use std::time::{Duration, Instant};
use wordhunt::config::{SearchConfig, DEFAULT_MAX_LEN, DEFAULT_MIN_LEN};
use wordhunt::grid::Grid;
use wordhunt::solver;

/// Simple local benchmark runner: time the candidate walk on several boards.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of repeats per board (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,

    /// Shortest candidate length
    #[arg(long, default_value_t = DEFAULT_MIN_LEN)]
    min_len: usize,

    /// Longest candidate length
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    max_len: usize,
}

/// A benchmark case: a label and the board rows.
#[derive(Clone)]
struct Case {
    name: &'static str,
    rows: &'static str,
}

/// Edit/add new boards here.
fn get_cases() -> Vec<Case> {
    vec![
        Case { name: "3x3 mixed", rows: "cat/ore/sin" },
        Case { name: "3x3 uniform", rows: "aaa/aaa/aaa" },
        Case { name: "4x4 mixed", rows: "stre/aple/gnid/oues" },
        Case { name: "4x4 uniform", rows: "eeee/eeee/eeee/eeee" },
        Case { name: "5x5 mixed", rows: "abcde/fghij/klmno/pqrst/uvwxy" },
    ]
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// One row in the benchmark summary: (board name, median seconds, walks, candidates).
    type SummaryRow = (&'static str, f64, u64, usize);

    let cli = Cli::parse();
    // generous budget: a bench that times out measures nothing useful
    let config = SearchConfig::with_lengths(cli.min_len, cli.max_len).time_budget(Duration::from_secs(600));
    config.validate()?;

    let cases = get_cases();
    let mut summary: Vec<SummaryRow> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        eprintln!("\n[{:02}] {} ({})", idx + 1, case.name, case.rows);
        let grid: Grid = case.rows.parse()?;

        // One *warm-up* execution per board; its timing is ignored.
        let warmup = solver::find_candidates(&grid, &config)?;

        let mut times = Vec::with_capacity(cli.num_repeats);
        for rep in 0..cli.num_repeats {
            let t_walk = Instant::now();
            let enumeration = solver::find_candidates(black_box(&grid), &config)?;
            let walk_secs = t_walk.elapsed().as_secs_f64();
            let _keep = black_box(enumeration.registry.len());
            times.push(walk_secs);

            eprintln!(
                "  run {:>2}/{:>2}: {:.3}s ({} walks, {} candidates)",
                rep + 1,
                cli.num_repeats,
                walk_secs,
                enumeration.walks_explored,
                enumeration.registry.len()
            );
        }

        let med = median(times);
        eprintln!("  → median {:.3}s over {} run(s)", med, cli.num_repeats);
        summary.push((case.name, med, warmup.walks_explored, warmup.registry.len()));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<14} | {:>10} | {:>12} | {:>10}", "board", "median (s)", "walks", "candidates");
    eprintln!("{:-<14}-+-{:-<10}-+-{:-<12}-+-{:-<10}", "", "", "", "");
    for (name, med, walks, candidates) in &summary {
        eprintln!("{name:<14} | {med:>10.3} | {walks:>12} | {candidates:>10}");
    }

    Ok(())
}
