//! Game session - match evaluation, scoring, and completion tracking
//!
//! A session owns everything one game instance needs: the generated puzzle,
//! per-word found flags, the score, and its own elapsed clock. Starting a
//! new game replaces the whole value, so timers and found-state from a
//! previous session can never leak into the current one.
//!
//! Scoring follows the time-tier rule: a visible word found inside the bonus
//! window scores the bonus amount, later finds score the normal amount, and
//! the hidden word scores its own flat bonus at any time. Bonuses are only
//! honored for a completed puzzle when the policy says so; an incomplete
//! flush recomputes the reported score from the normal amount alone.

use std::collections::HashSet;

use tui_wordsearch_types::{
    CellVisual, Coord, GameKind, ResultSummary, BONUS_POINTS, BONUS_WINDOW_MS,
    CROSSWORD_BONUS_WINDOW_MS, HIDDEN_WORD_POINTS, NORMAL_POINTS,
};

use crate::placement::{PlacedWord, Puzzle};

/// Point values and the bonus window for one game variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSchedule {
    pub bonus_window_ms: u64,
    pub bonus_points: u32,
    pub normal_points: u32,
    pub hidden_points: u32,
}

impl ScoreSchedule {
    /// Word-search schedule: 15 s window, 15/10 points, 20-point hidden word.
    pub fn word_search() -> Self {
        Self {
            bonus_window_ms: BONUS_WINDOW_MS,
            bonus_points: BONUS_POINTS,
            normal_points: NORMAL_POINTS,
            hidden_points: HIDDEN_WORD_POINTS,
        }
    }

    /// Crossword schedule: same points, 30 s window.
    pub fn crossword() -> Self {
        Self {
            bonus_window_ms: CROSSWORD_BONUS_WINDOW_MS,
            ..Self::word_search()
        }
    }
}

/// Whether bonuses survive an incomplete flush.
///
/// With `bonus_requires_completion` set, a session reported before
/// completion recomputes its score as `found x normal_points`, discarding
/// time and hidden bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorePolicy {
    pub bonus_requires_completion: bool,
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self {
            bonus_requires_completion: true,
        }
    }
}

/// Result of evaluating one completed selection path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The path named a word that had not been found yet.
    Matched {
        word: String,
        points: u32,
        hidden: bool,
        /// True on the match that completes the puzzle; the caller reports
        /// the session exactly once when it sees this.
        completed_now: bool,
    },
    /// The path named a word that was already found; nothing changes.
    AlreadyFound { word: String },
    /// The path named nothing; selection visuals revert.
    NoMatch,
}

#[derive(Debug, Clone)]
struct VisibleWord {
    record: PlacedWord,
    found: bool,
}

/// One game instance. Created at game start, finalized once completed.
#[derive(Debug, Clone)]
pub struct GameSession {
    kind: GameKind,
    puzzle_grid: crate::grid::Grid,
    visible: Vec<VisibleWord>,
    hidden: Option<PlacedWord>,
    hidden_found: bool,
    found_cells: HashSet<Coord>,
    elapsed_ms: u64,
    score: u32,
    found_count: usize,
    completed: bool,
    schedule: ScoreSchedule,
    policy: ScorePolicy,
}

impl GameSession {
    pub fn new(kind: GameKind, puzzle: Puzzle, schedule: ScoreSchedule, policy: ScorePolicy) -> Self {
        let Puzzle {
            grid,
            placed,
            hidden,
        } = puzzle;
        Self {
            kind,
            puzzle_grid: grid,
            visible: placed
                .into_iter()
                .map(|record| VisibleWord {
                    record,
                    found: false,
                })
                .collect(),
            hidden,
            hidden_found: false,
            found_cells: HashSet::new(),
            elapsed_ms: 0,
            score: 0,
            found_count: 0,
            completed: false,
            schedule,
            policy,
        }
    }

    /// Word-search session with the default schedule and policy.
    pub fn word_search(puzzle: Puzzle) -> Self {
        Self::new(
            GameKind::WordSearch,
            puzzle,
            ScoreSchedule::word_search(),
            ScorePolicy::default(),
        )
    }

    /// Advance the session clock. No-op once the puzzle is completed.
    pub fn tick(&mut self, elapsed_ms: u64) {
        if !self.completed {
            self.elapsed_ms += elapsed_ms;
        }
    }

    pub fn kind(&self) -> GameKind {
        self.kind
    }

    pub fn grid(&self) -> &crate::grid::Grid {
        &self.puzzle_grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn found_count(&self) -> usize {
        self.found_count
    }

    /// Number of visible words to find (the completion denominator).
    pub fn word_total(&self) -> usize {
        self.visible.len()
    }

    pub fn hidden_found(&self) -> bool {
        self.hidden_found
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn elapsed_seconds(&self) -> u32 {
        (self.elapsed_ms / 1000) as u32
    }

    /// Visible word list in placement order with found flags, for rendering.
    pub fn visible_words(&self) -> impl Iterator<Item = (&str, bool)> {
        self.visible.iter().map(|w| (w.record.word.as_str(), w.found))
    }

    /// Per-cell visual state. The live gesture path wins over found state so
    /// drags stay visible; found cells keep their marking otherwise.
    pub fn cell_visual(&self, coord: Coord, live_path: &[Coord]) -> CellVisual {
        if live_path.contains(&coord) {
            CellVisual::Selected
        } else if self.found_cells.contains(&coord) {
            CellVisual::Found
        } else {
            CellVisual::Unselected
        }
    }

    /// Points a visible word earns at the current elapsed time.
    fn visible_points(&self) -> u32 {
        if self.elapsed_ms <= self.schedule.bonus_window_ms {
            self.schedule.bonus_points
        } else {
            self.schedule.normal_points
        }
    }

    /// Evaluate a terminated selection path: match-check, state mutation,
    /// completion-check, in that order, all within this single call.
    pub fn evaluate(&mut self, path: &[Coord]) -> MatchOutcome {
        if self.completed || path.is_empty() {
            return MatchOutcome::NoMatch;
        }

        let forward = self.puzzle_grid.text_along(path);
        if forward.is_empty() {
            return MatchOutcome::NoMatch;
        }
        let reverse: String = forward.chars().rev().collect();

        // Match priority: forward against the visible set, then reverse,
        // then the hidden word. First match wins.
        if let Some(idx) = self.find_visible(&forward).or_else(|| self.find_visible(&reverse)) {
            if self.visible[idx].found {
                return MatchOutcome::AlreadyFound {
                    word: self.visible[idx].record.word.clone(),
                };
            }
            let points = self.visible_points();
            self.visible[idx].found = true;
            self.found_cells.extend(self.visible[idx].record.path.iter().copied());
            self.score += points;
            self.found_count += 1;

            let completed_now = self.found_count == self.visible.len();
            if completed_now {
                self.completed = true;
            }
            return MatchOutcome::Matched {
                word: self.visible[idx].record.word.clone(),
                points,
                hidden: false,
                completed_now,
            };
        }

        if let Some(hidden) = &self.hidden {
            if hidden.word == forward || hidden.word == reverse {
                if self.hidden_found {
                    return MatchOutcome::AlreadyFound {
                        word: hidden.word.clone(),
                    };
                }
                let word = hidden.word.clone();
                let cells: Vec<Coord> = hidden.path.clone();
                self.hidden_found = true;
                self.found_cells.extend(cells);
                self.score += self.schedule.hidden_points;
                // The hidden word never counts toward completion.
                return MatchOutcome::Matched {
                    word,
                    points: self.schedule.hidden_points,
                    hidden: true,
                    completed_now: false,
                };
            }
        }

        MatchOutcome::NoMatch
    }

    /// First visible word matching `text` that is not yet found; falls back
    /// to a found one so re-selections resolve to `AlreadyFound`.
    fn find_visible(&self, text: &str) -> Option<usize> {
        let mut found_idx = None;
        for (idx, word) in self.visible.iter().enumerate() {
            if word.record.word == text {
                if !word.found {
                    return Some(idx);
                }
                found_idx.get_or_insert(idx);
            }
        }
        found_idx
    }

    /// Final score and elapsed time for the reporter boundary.
    ///
    /// A completed session reports its accrued score. An incomplete flush
    /// under `bonus_requires_completion` recomputes from the normal amount
    /// only; with the flag off the accrued score is reported as-is.
    pub fn final_summary(&self) -> ResultSummary {
        let score = if self.completed || !self.policy.bonus_requires_completion {
            self.score
        } else {
            self.found_count as u32 * self.schedule.normal_points
        };
        ResultSummary {
            kind: self.kind,
            score,
            elapsed_seconds: self.elapsed_seconds(),
        }
    }
}
