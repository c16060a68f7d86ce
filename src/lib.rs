// Reusable library API, visible to both CLI and WASM builds
pub mod anagram;
pub mod assembler;
pub mod config;
pub mod enumerator;
pub mod errors;
pub mod grid;
mod letters;
pub mod log;
pub mod path;
pub mod registry;
pub mod scoring;
pub mod solver;
pub mod validity;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

/// Short git hash captured at build time ("unknown" outside a checkout).
pub const GIT_HASH: &str = env!("GIT_HASH");
