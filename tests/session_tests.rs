//! Match & scoring engine tests - time tiers, idempotence, completion,
//! hidden word, and the retroactive flush rule.

use tui_wordsearch::core::{
    GameSession, Grid, MatchOutcome, PlacedWord, Puzzle, ScorePolicy, ScoreSchedule,
};
use tui_wordsearch::types::{CellVisual, Coord, Direction, GameKind, GRID_SIZE};

/// Lay a word onto the grid by hand and return its record.
fn lay(grid: &mut Grid, word: &str, origin: Coord, direction: Direction) -> PlacedWord {
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

/// A puzzle with known word positions, one word per row, noise-filled.
fn fixed_puzzle(words: &[&str], hidden: Option<&str>) -> Puzzle {
    let mut grid = Grid::new(GRID_SIZE);
    let placed: Vec<PlacedWord> = words
        .iter()
        .enumerate()
        .map(|(row, word)| lay(&mut grid, word, Coord::new(row as i8, 0), Direction::Right))
        .collect();

    // Hidden word on the bottom row, well away from the visible ones.
    let hidden = hidden.map(|word| {
        lay(
            &mut grid,
            word,
            Coord::new(GRID_SIZE as i8 - 1, 0),
            Direction::Right,
        )
    });

    for coord in grid.coords().collect::<Vec<_>>() {
        if grid.is_empty_cell(coord) {
            grid.set(coord, 'X');
        }
    }

    Puzzle {
        grid,
        placed,
        hidden,
    }
}

fn session(words: &[&str], hidden: Option<&str>) -> GameSession {
    GameSession::word_search(fixed_puzzle(words, hidden))
}

fn path_of(row: i8, len: usize) -> Vec<Coord> {
    (0..len as i8).map(|col| Coord::new(row, col)).collect()
}

#[test]
fn test_forward_and_reverse_selection_both_match() {
    let mut game = session(&["GATO", "PERRO"], None);
    let forward = path_of(0, 4);

    // Reverse traversal of the same cells names the same word.
    let reverse: Vec<Coord> = forward.iter().rev().copied().collect();
    match game.evaluate(&reverse) {
        MatchOutcome::Matched { word, hidden, .. } => {
            assert_eq!(word, "GATO");
            assert!(!hidden);
        }
        other => panic!("expected match, got {other:?}"),
    }
}

#[test]
fn test_bonus_window_tiers() {
    // 100 ms inside the 15 s window: bonus amount.
    let mut game = session(&["GATO", "PERRO"], None);
    game.tick(14_900);
    match game.evaluate(&path_of(0, 4)) {
        MatchOutcome::Matched { points, .. } => assert_eq!(points, 15),
        other => panic!("expected match, got {other:?}"),
    }

    // 100 ms past the window: normal amount.
    let mut game = session(&["GATO", "PERRO"], None);
    game.tick(15_100);
    match game.evaluate(&path_of(0, 4)) {
        MatchOutcome::Matched { points, .. } => assert_eq!(points, 10),
        other => panic!("expected match, got {other:?}"),
    }
}

#[test]
fn test_refinding_a_word_changes_nothing() {
    let mut game = session(&["GATO", "PERRO"], None);
    let path = path_of(0, 4);

    assert!(matches!(
        game.evaluate(&path),
        MatchOutcome::Matched { .. }
    ));
    let score = game.score();
    let found = game.found_count();

    // Same path again, and its reverse: silent no-ops.
    assert!(matches!(
        game.evaluate(&path),
        MatchOutcome::AlreadyFound { .. }
    ));
    let reverse: Vec<Coord> = path.iter().rev().copied().collect();
    assert!(matches!(
        game.evaluate(&reverse),
        MatchOutcome::AlreadyFound { .. }
    ));

    assert_eq!(game.score(), score);
    assert_eq!(game.found_count(), found);
    // The cells still render as found.
    assert_eq!(
        game.cell_visual(Coord::new(0, 0), &[]),
        CellVisual::Found
    );
}

#[test]
fn test_nonsense_selection_is_a_no_op() {
    let mut game = session(&["GATO"], None);
    let junk = vec![Coord::new(5, 5), Coord::new(5, 6), Coord::new(5, 7)];

    assert_eq!(game.evaluate(&junk), MatchOutcome::NoMatch);
    assert_eq!(game.evaluate(&[]), MatchOutcome::NoMatch);
    assert_eq!(game.score(), 0);
    assert_eq!(game.found_count(), 0);
    // No residue: the junk cells render unselected once the path is gone.
    assert_eq!(
        game.cell_visual(Coord::new(5, 5), &[]),
        CellVisual::Unselected
    );
}

#[test]
fn test_completion_requires_every_visible_word() {
    let mut game = session(&["GATO", "SOL"], None);

    match game.evaluate(&path_of(0, 4)) {
        MatchOutcome::Matched { completed_now, .. } => assert!(!completed_now),
        other => panic!("expected match, got {other:?}"),
    }
    assert!(!game.is_completed());

    match game.evaluate(&path_of(1, 3)) {
        MatchOutcome::Matched { completed_now, .. } => assert!(completed_now),
        other => panic!("expected match, got {other:?}"),
    }
    assert!(game.is_completed());

    // Completed sessions are finalized: the clock stops and further
    // selections do nothing.
    let before = game.elapsed_ms();
    game.tick(5_000);
    assert_eq!(game.elapsed_ms(), before);
    assert_eq!(game.evaluate(&path_of(0, 4)), MatchOutcome::NoMatch);
}

#[test]
fn test_hidden_word_scores_flat_bonus_any_time() {
    let mut game = session(&["GATO"], Some("SOPA"));
    // Far past the bonus window; the hidden bonus does not care.
    game.tick(60_000);

    let hidden_path = path_of(GRID_SIZE as i8 - 1, 4);
    match game.evaluate(&hidden_path) {
        MatchOutcome::Matched {
            word,
            points,
            hidden,
            completed_now,
        } => {
            assert_eq!(word, "SOPA");
            assert_eq!(points, 20);
            assert!(hidden);
            assert!(!completed_now);
        }
        other => panic!("expected hidden match, got {other:?}"),
    }

    assert!(game.hidden_found());
    // Re-finding the hidden word is also idempotent.
    assert!(matches!(
        game.evaluate(&hidden_path),
        MatchOutcome::AlreadyFound { .. }
    ));
    assert_eq!(game.score(), 20);
}

#[test]
fn test_hidden_word_never_completes_the_puzzle() {
    let mut game = session(&["GATO", "SOL"], Some("SOPA"));

    game.evaluate(&path_of(GRID_SIZE as i8 - 1, 4));
    game.evaluate(&path_of(0, 4));
    // Hidden found plus one of two visible words: not completed.
    assert!(game.hidden_found());
    assert_eq!(game.found_count(), 1);
    assert!(!game.is_completed());
}

#[test]
fn test_incomplete_flush_recomputes_from_normal_points() {
    let mut game = session(
        &[
            "GATO", "PERRO", "SOL", "LUNA", "MAR", "CIELO", "NUBE", "FLOR", "CASA", "PLAYA",
        ],
        Some("SOPA"),
    );

    // Three quick finds (bonus amounts) plus the hidden word.
    game.evaluate(&path_of(0, 4));
    game.evaluate(&path_of(1, 5));
    game.evaluate(&path_of(2, 3));
    game.evaluate(&path_of(GRID_SIZE as i8 - 1, 4));
    assert_eq!(game.score(), 15 + 15 + 15 + 20);

    // Abandoned incomplete: 3 x 10, every bonus discarded.
    let summary = game.final_summary();
    assert_eq!(summary.kind, GameKind::WordSearch);
    assert_eq!(summary.score, 30);
}

#[test]
fn test_completed_session_reports_accrued_score() {
    let mut game = session(&["GATO", "SOL"], Some("SOPA"));
    game.evaluate(&path_of(GRID_SIZE as i8 - 1, 4));
    game.evaluate(&path_of(0, 4));
    game.tick(20_000);
    game.evaluate(&path_of(1, 3));

    assert!(game.is_completed());
    // 15 (fast) + 10 (slow) + 20 (hidden): completion keeps bonuses.
    let summary = game.final_summary();
    assert_eq!(summary.score, 45);
    assert_eq!(summary.elapsed_seconds, 20);
}

#[test]
fn test_policy_flag_keeps_bonuses_without_completion() {
    let puzzle = fixed_puzzle(&["GATO", "SOL"], None);
    let mut game = GameSession::new(
        GameKind::WordSearch,
        puzzle,
        ScoreSchedule::word_search(),
        ScorePolicy {
            bonus_requires_completion: false,
        },
    );

    game.evaluate(&(0..4).map(|col| Coord::new(0, col)).collect::<Vec<_>>());
    assert_eq!(game.score(), 15);

    // With the fairness rule off, the accrued score survives the flush.
    assert_eq!(game.final_summary().score, 15);
}

#[test]
fn test_crossword_schedule_widens_the_bonus_window() {
    // Same mechanics, 30 s window: a find at 20 s still earns the bonus.
    let puzzle = fixed_puzzle(&["GATO", "SOL"], None);
    let mut game = GameSession::new(
        GameKind::Crossword,
        puzzle,
        ScoreSchedule::crossword(),
        ScorePolicy::default(),
    );

    game.tick(20_000);
    match game.evaluate(&path_of(0, 4)) {
        MatchOutcome::Matched { points, .. } => assert_eq!(points, 15),
        other => panic!("expected match, got {other:?}"),
    }

    game.tick(11_000);
    match game.evaluate(&path_of(1, 3)) {
        MatchOutcome::Matched { points, .. } => assert_eq!(points, 10),
        other => panic!("expected match, got {other:?}"),
    }

    assert_eq!(game.final_summary().kind, GameKind::Crossword);
}

#[test]
fn test_live_selection_renders_over_found_cells() {
    let mut game = session(&["GATO"], None);
    let path = path_of(0, 4);
    game.evaluate(&path);

    // Dragging over a found cell shows the live highlight.
    assert_eq!(
        game.cell_visual(Coord::new(0, 0), &path),
        CellVisual::Selected
    );
    assert_eq!(game.cell_visual(Coord::new(0, 0), &[]), CellVisual::Found);
}
