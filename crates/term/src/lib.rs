//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: [`renderer::TerminalRenderer`]
//! owns the terminal session (raw mode, alternate screen, mouse capture) and
//! flushes queued commands per frame; [`view`] computes the grid layout for
//! the current viewport and draws the game or the inline error screen.
//!
//! Layout math and text formatting are pure and unit-tested; only the final
//! flush touches the terminal.

pub mod renderer;
pub mod view;

pub use tui_wordsearch_core as core;
pub use tui_wordsearch_types as types;

pub use renderer::TerminalRenderer;
pub use view::{draw_error, draw_frame, format_clock, layout_for, Viewport};
