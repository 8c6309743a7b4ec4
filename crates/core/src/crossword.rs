//! Crossword layout engine - intersection-driven fill-in generation
//!
//! The lower-complexity sibling of the word-search placement engine. The
//! first word is seeded horizontally at the center of a working grid; every
//! later word must cross an already-placed letter, with a one-cell margin
//! kept around word ends so entries stay visually separated. The layout is
//! trimmed to its bounding box for display.

use tui_wordsearch_types::{
    Coord, Direction, CROSSWORD_ATTEMPTS, CROSSWORD_GRID_SIZE, WORDS_PER_GAME,
};

use crate::grid::Grid;
use crate::placement::PlacedWord;
use crate::rng::SimpleRng;
use crate::words::normalize;

/// Tight bounding box of all placed cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Coord,
    pub max: Coord,
}

/// A generated crossword: working grid plus numbered entries
/// (entry `i` is clue number `i + 1`, in placement order).
#[derive(Debug, Clone)]
pub struct CrosswordLayout {
    pub grid: Grid,
    pub entries: Vec<PlacedWord>,
}

/// Margin rule for crossword placement: the word keeps one empty row/column
/// of border, fits inside the trimmed working area, agrees with every letter
/// it crosses, and has empty cells immediately before and after it.
fn can_place(grid: &Grid, word: &str, origin: Coord, direction: Direction) -> bool {
    let size = grid.size() as i8;
    let len = word.len() as i8;
    let (dr, dc) = direction.delta();

    if origin.row < 1 || origin.col < 1 {
        return false;
    }
    match direction {
        Direction::Right if origin.col + len > size - 2 => return false,
        Direction::Down if origin.row + len > size - 2 => return false,
        _ => {}
    }

    for (i, letter) in word.chars().enumerate() {
        let cell = origin.step(dr * i as i8, dc * i as i8);
        if !grid.is_empty_cell(cell) && grid.get(cell) != Some(letter) {
            return false;
        }
    }

    // One empty cell before the first letter and after the last.
    let before = origin.step(-dr, -dc);
    let after = origin.step(dr * len, dc * len);
    grid.get(before).is_none() && grid.get(after).is_none()
}

fn commit(grid: &mut Grid, word: &str, origin: Coord, direction: Direction) -> PlacedWord {
    let (dr, dc) = direction.delta();
    let path: Vec<Coord> = (0..word.len() as i8)
        .map(|i| origin.step(dr * i, dc * i))
        .collect();
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

/// Seed placement: centered horizontally in the middle row.
fn seed_origin(grid: &Grid, word: &str) -> Coord {
    let size = grid.size() as i8;
    Coord::new(size / 2, size / 2 - (word.len() as i8) / 2)
}

/// Try to cross `word` over the letters already on the grid, up to the
/// attempt bound. Each try picks a random letter of the word, a random
/// matching placed cell, and a random orientation.
fn try_cross(
    grid: &mut Grid,
    entries: &[PlacedWord],
    word: &str,
    rng: &mut SimpleRng,
) -> Option<PlacedWord> {
    let letters: Vec<char> = word.chars().collect();
    let placed_cells: Vec<(Coord, char)> = entries
        .iter()
        .flat_map(|e| e.path.iter().copied().zip(e.word.chars()))
        .collect();

    for _ in 0..CROSSWORD_ATTEMPTS {
        let i = rng.next_range(letters.len() as u32) as usize;
        let letter = letters[i];

        let matches: Vec<Coord> = placed_cells
            .iter()
            .filter(|(_, ch)| *ch == letter)
            .map(|(cell, _)| *cell)
            .collect();
        if matches.is_empty() {
            continue;
        }
        let cross = matches[rng.next_range(matches.len() as u32) as usize];

        let direction = if rng.chance_percent(50) {
            Direction::Right
        } else {
            Direction::Down
        };
        let origin = match direction {
            Direction::Right => Coord::new(cross.row, cross.col - i as i8),
            _ => Coord::new(cross.row - i as i8, cross.col),
        };

        if can_place(grid, word, origin, direction) {
            return Some(commit(grid, word, origin, direction));
        }
    }
    None
}

/// Generate a crossword from a word pool. Words that never find a crossing
/// are skipped, same soft-degradation policy as the word search. A pool with
/// no placeable word yields an empty layout; callers treat that as the error
/// state.
pub fn generate(pool: &[String], rng: &mut SimpleRng) -> CrosswordLayout {
    let mut grid = Grid::new(CROSSWORD_GRID_SIZE);
    let mut entries: Vec<PlacedWord> = Vec::new();

    let mut shuffled: Vec<String> = pool.iter().map(|w| normalize(w)).collect();
    rng.shuffle(&mut shuffled);
    let selected: Vec<String> = shuffled
        .into_iter()
        .filter(|w| !w.is_empty())
        .take(WORDS_PER_GAME)
        .collect();

    for word in &selected {
        if entries.is_empty() {
            let origin = seed_origin(&grid, word);
            if can_place(&grid, word, origin, Direction::Right) {
                entries.push(commit(&mut grid, word, origin, Direction::Right));
            }
            continue;
        }
        if let Some(entry) = try_cross(&mut grid, &entries, word, rng) {
            entries.push(entry);
        }
    }

    CrosswordLayout { grid, entries }
}

impl CrosswordLayout {
    /// Tight bounding box of all placed cells; None for an empty layout.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut cells = self.entries.iter().flat_map(|e| e.path.iter());
        let first = *cells.next()?;
        let mut min = first;
        let mut max = first;
        for cell in cells {
            min.row = min.row.min(cell.row);
            min.col = min.col.min(cell.col);
            max.row = max.row.max(cell.row);
            max.col = max.col.max(cell.col);
        }
        Some(Bounds { min, max })
    }

    /// Compare a player's answer against an entry, normalized the same way
    /// the entry itself was.
    pub fn check_entry(entry: &PlacedWord, answer: &str) -> bool {
        normalize(answer) == entry.word
    }

    /// All entries answered correctly?
    pub fn is_solved(&self, answers: &[String]) -> bool {
        !self.entries.is_empty()
            && self.entries.len() == answers.len()
            && self
                .entries
                .iter()
                .zip(answers)
                .all(|(entry, answer)| Self::check_entry(entry, answer))
    }
}
