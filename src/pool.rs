//! Word-pool loading.
//!
//! The pool is a JSON array of strings, the same shape the browser versions
//! fetched. Any failure here is fatal to the game instance only: the caller
//! shows the inline error screen and never builds a grid or starts a timer.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use tui_wordsearch::core::sanitize_pool;
use tui_wordsearch::types::GRID_SIZE;

pub const DEFAULT_POOL_PATH: &str = "words.json";

/// Read and sanitize the word pool.
pub fn load_pool(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let entries: Vec<String> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of strings", path.display()))?;
    let pool = sanitize_pool(entries, GRID_SIZE)
        .with_context(|| format!("{} has no usable words", path.display()))?;
    Ok(pool)
}
