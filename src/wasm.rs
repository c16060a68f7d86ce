use crate::anagram::find_anagrams;
use crate::config::SearchConfig;
use crate::errors::InputError;
use crate::grid::Grid;
use crate::log::init_logger;
use crate::solver::{solve_grid, SolveStatus, SolverError};
use crate::validity::DictionaryFilter;
use crate::word_list::WordList;
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E002", "S002")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<InputError> for WasmError {
    fn from(e: InputError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(ToString::to_string),
        }
    }
}

impl From<SolverError> for WasmError {
    fn from(e: SolverError) -> Self {
        // For InvalidInput, surface the nested InputError details
        match e {
            SolverError::InvalidInput(ie) => WasmError::from(*ie),
            _ => WasmError {
                code: e.code().to_string(),
                message: e.to_string(),
                description: e.description().to_string(),
                details: e.details().to_string(),
                help: e.help().map(ToString::to_string),
            },
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(what: &str, e: &serde_wasm_bindgen::Error) -> JsValue {
    WasmError {
        code: "WASM002".to_string(),
        message: format!("serialization failed: {e}"),
        description: format!("Failed to serialize {what}"),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
    .into()
}

fn word_list_from_js(word_list: JsValue) -> Result<WordList, JsValue> {
    let words: Vec<String> = serde_wasm_bindgen::from_value(word_list).map_err(|e| {
        JsValue::from(WasmError {
            code: "WASM001".to_string(),
            message: format!("word_list must be string[]: {e}"),
            description: "Invalid word-list format".to_string(),
            details: "The word_list parameter must be a JavaScript array of strings.".to_string(),
            help: Some("Ensure you're passing a valid string array, e.g., ['cat', 'care', 'core']".to_string()),
        })
    })?;
    Ok(WordList::from_words(words))
}

/// Initialize logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmSolveResult {
    entries: Vec<crate::assembler::ResultEntry>,
    total_score: u32,
    status: String,
    candidates_submitted: usize,
}

/// JS entry: (grid: string, word_list: string[], min_len: number, max_len: number, time_budget_ms?: number)
/// resolves to `{ entries: [{word, path: [{row, col}], score}], total_score, status, candidates_submitted }`.
/// Without `time_budget_ms` the default budget applies.
#[wasm_bindgen]
pub async fn solve_grid_wasm(
    grid: String,
    word_list: JsValue,
    min_len: usize,
    max_len: usize,
    time_budget_ms: Option<u32>,
) -> Result<JsValue, JsValue> {
    let grid: Grid = grid.parse().map_err(WasmError::from)?;
    let filter = DictionaryFilter::from(word_list_from_js(word_list)?);
    let config = SearchConfig::with_lengths(min_len, max_len).time_budget_millis(time_budget_ms);

    let result = solve_grid(&grid, &config, &filter).await.map_err(WasmError::from)?;

    let status = match result.status {
        SolveStatus::Complete => "complete".to_string(),
        SolveStatus::TimedOut { .. } => "timed_out".to_string(),
    };
    let wasm_result = WasmSolveResult {
        entries: result.entries,
        total_score: result.total_score,
        status,
        candidates_submitted: result.candidates_submitted,
    };

    to_value(&wasm_result).map_err(|e| serialization_error("solve result", &e))
}

/// Parse a newline-separated word list (`word` or `word;score` per line).
///
/// Returns the surviving words as a `JsValue` array of strings.
///
/// # Errors
/// Returns a `JsValue` error if the list cannot be serialized.
#[wasm_bindgen]
pub fn parse_word_list(text: &str, min_score: i32) -> Result<JsValue, JsValue> {
    let word_list = WordList::parse_from_str(text, min_score);
    to_value(&word_list.words).map_err(|e| serialization_error("word list", &e))
}

/// JS entry: (letters: string, word_list: string[], min_len: number, max_len?: number)
#[wasm_bindgen]
pub fn find_anagrams_wasm(
    letters: &str,
    word_list: JsValue,
    min_len: usize,
    max_len: Option<usize>,
) -> Result<JsValue, JsValue> {
    let word_list = word_list_from_js(word_list)?;
    let result = find_anagrams(letters, min_len, max_len, &word_list).map_err(WasmError::from)?;
    to_value(&result).map_err(|e| serialization_error("anagram result", &e))
}

/// Append a `## title` section followed by a blank line.
fn push_section(report: &mut String, title: &str, lines: &[String]) {
    report.push_str("## ");
    report.push_str(title);
    report.push('\n');
    for line in lines {
        report.push_str(line);
        report.push('\n');
    }
    report.push('\n');
}

/// Plain-text report for bug reports: build info, the failing grid and the browser.
#[wasm_bindgen]
pub fn get_debug_info(
    grid: &str,
    error_message: &str,
    word_list_size: usize,
    min_len: usize,
    max_len: usize,
) -> String {
    let generated = js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string());
    let mut report = format!(
        "=== WORDHUNT DEBUG REPORT ===\nVersion: {} ({})\nGenerated: {generated}\n\n",
        env!("CARGO_PKG_VERSION"),
        crate::GIT_HASH
    );

    push_section(&mut report, "Error", &[error_message.to_string()]);
    push_section(
        &mut report,
        "Input",
        &[
            format!("Grid: {grid}"),
            format!("Word List Size: {word_list_size}"),
            format!("Length Bounds: {min_len}-{max_len}"),
        ],
    );

    let mut environment = Vec::new();
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            environment.push(format!("User Agent: {user_agent}"));
        }
        if let Ok(href) = window.location().href() {
            environment.push(format!("Location: {href}"));
        }
    }
    push_section(&mut report, "Environment", &environment);

    report.push_str("=== END DEBUG REPORT ===\n");
    report
}
