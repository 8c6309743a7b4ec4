//! Word placement engine - builds a playable puzzle from a word pool
//!
//! Selection is a shuffle-and-take: the pool is shuffled and the first K
//! words become the visible set. Each word then gets a bounded number of
//! randomized placement attempts; a word that never fits is silently left
//! out (soft degradation, the game simply has fewer words). At most one
//! hidden bonus word is injected with a single unretried attempt, and every
//! cell still empty afterwards is filled with a noise letter.

use tui_wordsearch_types::{
    Coord, Direction, GRID_SIZE, HIDDEN_WORD_PERCENT, PLACEMENT_ATTEMPTS, WORDS_PER_GAME,
};

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::words::normalize;

/// A word committed to the grid. Created during placement, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    /// Normalized word text (unaccented uppercase).
    pub word: String,
    /// Cell of the first letter.
    pub origin: Coord,
    pub direction: Direction,
    /// Ordered cells of the word, origin first.
    pub path: Vec<Coord>,
}

/// Generation parameters. `Default` matches the word-search constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    pub grid_size: usize,
    pub words_per_game: usize,
    pub placement_attempts: u32,
    /// Percent chance of injecting a hidden word; 0 disables the mechanic.
    pub hidden_word_percent: u32,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            words_per_game: WORDS_PER_GAME,
            placement_attempts: PLACEMENT_ATTEMPTS,
            hidden_word_percent: HIDDEN_WORD_PERCENT,
        }
    }
}

/// A fully generated puzzle: noise-filled grid, visible words, and at most
/// one hidden word that never appears in the visible list.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub grid: Grid,
    pub placed: Vec<PlacedWord>,
    pub hidden: Option<PlacedWord>,
}

/// The cells `word` would occupy starting at `origin` going `direction`.
fn path_for(word: &str, origin: Coord, direction: Direction) -> Vec<Coord> {
    let (dr, dc) = direction.delta();
    (0..word.len() as i8)
        .map(|i| origin.step(dr * i, dc * i))
        .collect()
}

/// Placement validity rule: every cell in bounds and either empty or already
/// holding the letter the word needs there (overlap on matching letters only).
pub fn can_place(grid: &Grid, word: &str, origin: Coord, direction: Direction) -> bool {
    let (dr, dc) = direction.delta();
    word.chars().enumerate().all(|(i, letter)| {
        let cell = origin.step(dr * i as i8, dc * i as i8);
        grid.in_bounds(cell) && (grid.is_empty_cell(cell) || grid.get(cell) == Some(letter))
    })
}

/// Write a word onto the grid and record where it went. Callers must have
/// checked `can_place` first.
fn commit(grid: &mut Grid, word: &str, origin: Coord, direction: Direction) -> PlacedWord {
    let path = path_for(word, origin, direction);
    for (cell, letter) in path.iter().zip(word.chars()) {
        grid.set(*cell, letter);
    }
    PlacedWord {
        word: word.to_string(),
        origin,
        direction,
        path,
    }
}

/// Try up to the configured attempt bound of random (direction, row, col)
/// candidates. Returns None when the bound is exhausted: the word is skipped.
fn try_place_word(
    grid: &mut Grid,
    word: &str,
    attempts: u32,
    rng: &mut SimpleRng,
) -> Option<PlacedWord> {
    let size = grid.size() as u32;
    for _ in 0..attempts {
        let direction = Direction::from_index(rng.next_range(4));
        let origin = Coord::new(rng.next_range(size) as i8, rng.next_range(size) as i8);
        if can_place(grid, word, origin, direction) {
            return Some(commit(grid, word, origin, direction));
        }
    }
    None
}

/// With the configured probability, pick one pool word outside the visible
/// set and give it exactly one unretried placement attempt.
fn try_place_hidden(
    grid: &mut Grid,
    pool: &[String],
    visible: &[String],
    config: &PuzzleConfig,
    rng: &mut SimpleRng,
) -> Option<PlacedWord> {
    if config.hidden_word_percent == 0 || !rng.chance_percent(config.hidden_word_percent) {
        return None;
    }

    let candidates: Vec<String> = pool
        .iter()
        .map(|w| normalize(w))
        .filter(|w| !w.is_empty() && !visible.contains(w))
        .collect();
    if candidates.is_empty() {
        return None;
    }

    let word = &candidates[rng.next_range(candidates.len() as u32) as usize];
    let size = grid.size() as u32;
    let direction = Direction::from_index(rng.next_range(4));
    let origin = Coord::new(rng.next_range(size) as i8, rng.next_range(size) as i8);

    // One shot only: if it does not fit, this game has no hidden word.
    if can_place(grid, word, origin, direction) {
        Some(commit(grid, word, origin, direction))
    } else {
        None
    }
}

/// Build a puzzle from a word pool.
///
/// The pool is expected to be sanitized (see [`crate::words::sanitize_pool`]);
/// entries are still normalized here so raw pools degrade instead of placing
/// accented letters on the grid.
pub fn generate(pool: &[String], config: &PuzzleConfig, rng: &mut SimpleRng) -> Puzzle {
    let mut grid = Grid::new(config.grid_size);

    // Shuffle and take the first K. No weighting; duplicates survive if the
    // pool carries them.
    let mut shuffled: Vec<String> = pool.iter().map(|w| normalize(w)).collect();
    rng.shuffle(&mut shuffled);
    let selected: Vec<String> = shuffled
        .into_iter()
        .filter(|w| !w.is_empty())
        .take(config.words_per_game)
        .collect();

    let mut placed = Vec::with_capacity(selected.len());
    for word in &selected {
        if let Some(record) = try_place_word(&mut grid, word, config.placement_attempts, rng) {
            placed.push(record);
        }
    }

    let hidden = try_place_hidden(&mut grid, pool, &selected, config, rng);

    // Fill pass: every remaining empty cell gets a uniform noise letter.
    for coord in grid.coords().collect::<Vec<_>>() {
        if grid.is_empty_cell(coord) {
            let letter = rng.noise_letter();
            grid.set(coord, letter);
        }
    }

    Puzzle {
        grid,
        placed,
        hidden,
    }
}
