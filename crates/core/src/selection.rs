//! Selection state machine - turns drag gestures into cell paths
//!
//! One press-to-release interaction produces exactly one path. The machine
//! has two phases, `Idle` and `Selecting`; the input layer feeds it
//! normalized [`SelectEvent`]s and the event loop evaluates whatever
//! `Release` hands back. Movement that never hits a grid cell is filtered
//! out before it gets here, so a drag wandering off the grid neither aborts
//! nor extends the gesture.

use arrayvec::ArrayVec;

use tui_wordsearch_types::{Coord, SelectEvent, MAX_SELECTION};

/// Ordered, duplicate-free cells of one gesture.
pub type SelectionPath = ArrayVec<Coord, MAX_SELECTION>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Selecting,
}

/// Gesture tracker. Owned by the event loop alongside the session; replaced
/// wholesale when a new game starts.
#[derive(Debug, Clone)]
pub struct SelectionState {
    phase: Phase,
    path: SelectionPath,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            path: SelectionPath::new(),
        }
    }

    /// Whether a gesture is in progress.
    pub fn is_selecting(&self) -> bool {
        self.phase == Phase::Selecting
    }

    /// Cells of the gesture in progress (for live highlight rendering).
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// Advance the machine. Returns the completed path exactly once per
    /// gesture, on the `Release` that terminates it; the caller evaluates it
    /// and the machine is already back in `Idle`.
    pub fn apply(&mut self, event: SelectEvent) -> Option<SelectionPath> {
        match (self.phase, event) {
            (Phase::Idle, SelectEvent::Press(cell)) => {
                self.phase = Phase::Selecting;
                self.path.clear();
                let _ = self.path.try_push(cell);
                None
            }
            // A press mid-gesture is not expected input; treat it as a fresh
            // start without corrupting anything.
            (Phase::Selecting, SelectEvent::Press(cell)) => {
                self.path.clear();
                let _ = self.path.try_push(cell);
                None
            }
            (Phase::Selecting, SelectEvent::Drag(cell)) => {
                // Order preserved; a cell already in the path is skipped.
                // A saturated path stops growing, which is harmless: paths
                // longer than any word cannot match.
                if !self.path.contains(&cell) {
                    let _ = self.path.try_push(cell);
                }
                None
            }
            (Phase::Selecting, SelectEvent::Release) => {
                self.phase = Phase::Idle;
                let path = std::mem::take(&mut self.path);
                Some(path)
            }
            // Drag or release with no gesture active: ignore.
            (Phase::Idle, SelectEvent::Drag(_)) | (Phase::Idle, SelectEvent::Release) => None,
        }
    }

    /// Abandon any gesture in progress (new game, error screen).
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.path.clear();
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
