//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` events into the normalized shapes the core understands:
//! pointer press/drag/release over grid cells become
//! [`tui_wordsearch_types::SelectEvent`]s (hit-tested through the current
//! [`tui_wordsearch_types::GridLayout`]), and a handful of keys become
//! [`tui_wordsearch_types::AppAction`]s. Mouse and touch-translated pointer
//! input arrive through the same crossterm event type, so one mapping serves
//! every device.

pub mod map;

pub use tui_wordsearch_types as types;

pub use map::{map_event, should_quit, InputSignal};
