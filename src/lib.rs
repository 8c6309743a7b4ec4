//! TUI word search (workspace facade crate).
//!
//! This package keeps a stable `tui_wordsearch::{core,input,reporter,term,types}`
//! public API while the implementation lives in dedicated crates under `crates/`.

pub use tui_wordsearch_core as core;
pub use tui_wordsearch_input as input;
pub use tui_wordsearch_reporter as reporter;
pub use tui_wordsearch_term as term;
pub use tui_wordsearch_types as types;
