//! Core game logic - pure, deterministic, and testable
//!
//! Everything a word-search game instance needs, with **zero dependencies**
//! on terminal IO, networking, or rendering:
//!
//! - **Deterministic**: the same seed generates the same puzzle
//! - **Testable**: placement, selection, and scoring are plain functions
//!   over plain values
//! - **Portable**: the same engine drives the TUI front-end and the tests
//!
//! # Module Structure
//!
//! - [`grid`]: square letter matrix with bounds-checked access
//! - [`rng`]: seeded LCG driving every random decision
//! - [`words`]: diacritic folding and word-pool sanitization
//! - [`placement`]: randomized constrained placement, hidden word, noise fill
//! - [`selection`]: press/drag/release gesture state machine
//! - [`session`]: match evaluation, time-tiered scoring, completion
//! - [`crossword`]: intersection-driven crossword layout (fill-in variant)
//!
//! # Example
//!
//! ```
//! use tui_wordsearch_core::{generate, GameSession, PuzzleConfig, SimpleRng};
//!
//! let pool: Vec<String> = ["GATO", "PERRO", "SOL"].iter().map(|w| w.to_string()).collect();
//! let mut rng = SimpleRng::new(42);
//! let puzzle = generate(&pool, &PuzzleConfig::default(), &mut rng);
//!
//! let mut session = GameSession::word_search(puzzle);
//! session.tick(1_000);
//! assert_eq!(session.elapsed_seconds(), 1);
//! assert!(!session.is_completed());
//! ```

pub mod crossword;
pub mod grid;
pub mod placement;
pub mod rng;
pub mod selection;
pub mod session;
pub mod words;

pub use tui_wordsearch_types as types;

// Re-export commonly used items for convenience
pub use crossword::CrosswordLayout;
pub use grid::Grid;
pub use placement::{can_place, generate, PlacedWord, Puzzle, PuzzleConfig};
pub use rng::SimpleRng;
pub use selection::{SelectionPath, SelectionState};
pub use session::{GameSession, MatchOutcome, ScorePolicy, ScoreSchedule};
pub use words::{normalize, sanitize_pool, PoolError};
