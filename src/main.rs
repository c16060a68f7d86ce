use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use wordhunt::anagram;
use wordhunt::config::{SearchConfig, DEFAULT_MAX_LEN, DEFAULT_MIN_LEN, DEFAULT_TIME_BUDGET_SECS};
use wordhunt::errors::InputError;
use wordhunt::grid::Grid;
use wordhunt::solver::{self, SolveStatus};
use wordhunt::validity::DictionaryFilter;
use wordhunt::word_list::WordList;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");
const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\ncommit ", env!("GIT_HASH_FULL"));

/// Word Hunt / Anagrams solver
#[derive(Parser, Debug)]
#[command(author, version = VERSION, long_version = LONG_VERSION, about, long_about = None)]
struct Cli {
    /// Path to the word list file (one word, or word;score, per line)
    #[arg(
        short,
        long,
        global = true,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/dictionary.txt")
    )]
    word_list: String,

    /// Minimum score filter for scored word-list lines
    #[arg(short = 's', long, global = true, default_value_t = 0)]
    min_score: i32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find every word hidden in a letter grid (e.g. `grid cat/ore/sin`)
    Grid {
        /// Rows of the grid, separated by '/', ',' or spaces
        #[arg(required = true, num_args = 1..)]
        rows: Vec<String>,

        /// Shortest word to report
        #[arg(long, default_value_t = DEFAULT_MIN_LEN)]
        min_len: usize,

        /// Longest word to report (walks stop growing here)
        #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
        max_len: usize,

        /// Seconds the walk may run before reporting what it has
        #[arg(long, default_value_t = DEFAULT_TIME_BUDGET_SECS)]
        time_budget: u64,

        /// Print the cell path of each word
        #[arg(short = 'p', long)]
        show_paths: bool,
    },

    /// Find every word that can be made from a set of letters
    Anagram {
        /// The available letters (non-letters are ignored)
        letters: String,

        /// Shortest word to report (never below 3)
        #[arg(long, default_value_t = anagram::ANAGRAM_MIN_LEN)]
        min_len: usize,

        /// Longest word to report (defaults to the number of letters)
        #[arg(long)]
        max_len: Option<usize>,
    },
}

/// Entry point of the CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
#[tokio::main]
async fn main() -> ExitCode {
    let debug_enabled = std::env::var(wordhunt::log::DEBUG_ENV_VAR).is_ok();
    wordhunt::log::init_logger(debug_enabled);

    if let Err(e) = try_main().await {
        if let Some(solver_err) = e.downcast_ref::<solver::SolverError>() {
            eprintln!("Error: {}", solver_err.display_detailed());
        } else if let Some(input_err) = e.downcast_ref::<InputError>() {
            eprintln!("Error: {}", input_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the word list from disk.
/// 3. Run the requested solver.
/// 4. Print each word on stdout and timings on stderr.
async fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list, cli.min_score)?;
    let load_secs = t_load.elapsed().as_secs_f64();
    log::info!("Loaded {} words from {}", word_list.len(), cli.word_list);

    match cli.command {
        Command::Grid { rows, min_len, max_len, time_budget, show_paths } => {
            let grid: Grid = rows.join("/").parse()?;
            let config = SearchConfig::with_lengths(min_len, max_len)
                .time_budget(Duration::from_secs(time_budget));
            let filter = DictionaryFilter::from(word_list);

            let t_solve = Instant::now();
            let result = solver::solve_grid(&grid, &config, &filter).await?;
            let solve_secs = t_solve.elapsed().as_secs_f64();

            println!("{grid}\n");
            for entry in &result.entries {
                if show_paths {
                    println!("{:<10} {:>3} pts  {}", entry.word.to_ascii_uppercase(), entry.score, entry.path);
                } else {
                    println!("{:<10} {:>3} pts", entry.word.to_ascii_uppercase(), entry.score);
                }
            }

            if let SolveStatus::TimedOut { elapsed } = result.status {
                eprintln!("⚠️  Timed out after {:.1}s; some words may be missing", elapsed.as_secs_f64());
            }
            eprintln!(
                "Loaded word list in {:.3}s; checked {} candidates in {:.3}s; {} words, {} points.",
                load_secs,
                result.candidates_submitted,
                solve_secs,
                result.len(),
                result.total_score
            );
        }
        Command::Anagram { letters, min_len, max_len } => {
            let result = anagram::find_anagrams(&letters, min_len, max_len, &word_list)?;
            for entry in &result.entries {
                println!("{:<10} {:>5} pts", entry.word.to_ascii_uppercase(), entry.score);
            }
            eprintln!(
                "Loaded word list in {:.3}s; {} words from \"{}\", {} points.",
                load_secs,
                result.entries.len(),
                result.letters,
                result.total_score
            );
        }
    }

    Ok(())
}
