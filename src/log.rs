//! Logger setup shared by the CLI and the wasm module.
//!
//! Only this crate's own records are raised to `Debug`; dependencies stay at
//! `Warn` so a debug run is not drowned in runtime noise.

use log::LevelFilter;

/// Environment variable that switches the CLI to debug logging.
pub const DEBUG_ENV_VAR: &str = "WORDHUNT_DEBUG";

/// Level for this crate's records.
#[must_use]
pub fn crate_level(debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the logger. A second call keeps the first logger.
///
/// - Native: `env_logger`, with `RUST_LOG` (when set) overriding the defaults.
/// - WASM: `console_log`, at the crate level for every target.
pub fn init_logger(debug_enabled: bool) {
    let level = crate_level(debug_enabled);
    #[cfg(target_arch = "wasm32")]
    init_console(level);
    #[cfg(not(target_arch = "wasm32"))]
    init_native(level);
}

#[cfg(target_arch = "wasm32")]
fn init_console(level: LevelFilter) {
    let Some(level) = level.to_level() else {
        return;
    };
    if let Err(e) = console_log::init_with_level(level) {
        // no logger to report through, so go straight to the console
        let msg = format!("wordhunt: console logging unavailable: {e}");
        web_sys::console::error_1(&msg.into());
        return;
    }
    log::info!("console logger ready at {level:?}");
}

#[cfg(not(target_arch = "wasm32"))]
fn init_native(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_CRATE_NAME"), level)
        .format_timestamp(None)
        .format_target(false);

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_ok() {
        log::debug!("native logger ready at {level:?}");
    }
}
