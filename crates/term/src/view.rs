//! Game view: lays out and draws the session into a frame buffer.
//!
//! Layout math (`layout_for`) is pure; the same `GridLayout` it returns is
//! used for drawing and for hit-testing pointer input back to cells, so the
//! two can never disagree.

use anyhow::Result;

use crossterm::{
    cursor::MoveTo,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    QueueableCommand,
};

use crate::core::{GameSession, SelectionState};
use crate::types::{CellVisual, Coord, GridLayout, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Board cell width in terminal columns (2x1 compensates for the typical
/// terminal glyph aspect ratio).
const CELL_W: u16 = 2;
const CELL_H: u16 = 1;

/// Columns reserved right of the grid for the word list.
const SIDEBAR_W: u16 = 26;

/// Compute where the grid sits for this viewport. Centered, with one header
/// row kept above and the sidebar to the right.
pub fn layout_for(viewport: Viewport) -> GridLayout {
    let grid_w = GRID_SIZE as u16 * CELL_W;
    let grid_h = GRID_SIZE as u16 * CELL_H;
    let total_w = grid_w + SIDEBAR_W;

    let origin_x = (viewport.width.saturating_sub(total_w) / 2).max(1);
    let origin_y = (viewport.height.saturating_sub(grid_h) / 2).max(2);

    GridLayout {
        origin_x,
        origin_y,
        cell_w: CELL_W,
        cell_h: CELL_H,
        size: GRID_SIZE,
    }
}

/// "MM:SS" clock, zero-padded.
pub fn format_clock(elapsed_seconds: u32) -> String {
    format!("{:02}:{:02}", elapsed_seconds / 60, elapsed_seconds % 60)
}

/// Draw one game frame into the buffer.
pub fn draw_frame(
    buf: &mut Vec<u8>,
    session: &GameSession,
    selection: &SelectionState,
    layout: &GridLayout,
) -> Result<()> {
    draw_header(buf, session, layout)?;
    draw_grid(buf, session, selection.path(), layout)?;
    draw_word_list(buf, session, layout)?;
    draw_footer(buf, session, layout)?;
    Ok(())
}

fn draw_header(buf: &mut Vec<u8>, session: &GameSession, layout: &GridLayout) -> Result<()> {
    buf.queue(MoveTo(layout.origin_x, layout.origin_y - 2))?;
    buf.queue(SetAttribute(Attribute::Bold))?;
    buf.queue(Print("WORD SEARCH"))?;
    buf.queue(SetAttribute(Attribute::Reset))?;
    buf.queue(Print(format!(
        "   {}   score {}",
        format_clock(session.elapsed_seconds()),
        session.score()
    )))?;
    Ok(())
}

fn draw_grid(
    buf: &mut Vec<u8>,
    session: &GameSession,
    live_path: &[Coord],
    layout: &GridLayout,
) -> Result<()> {
    for coord in session.grid().coords() {
        let (x, y) = layout.cell_origin(coord);
        let letter = session.grid().get(coord).unwrap_or(' ');

        buf.queue(MoveTo(x, y))?;
        match session.cell_visual(coord, live_path) {
            CellVisual::Selected => {
                buf.queue(SetBackgroundColor(Color::Yellow))?;
                buf.queue(SetForegroundColor(Color::Black))?;
            }
            CellVisual::Found => {
                buf.queue(SetForegroundColor(Color::Green))?;
                buf.queue(SetAttribute(Attribute::Bold))?;
            }
            CellVisual::Unselected => {}
        }
        buf.queue(Print(letter))?;
        buf.queue(ResetColor)?;
        buf.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn draw_word_list(buf: &mut Vec<u8>, session: &GameSession, layout: &GridLayout) -> Result<()> {
    let x = layout.origin_x + layout.size as u16 * layout.cell_w + 3;
    let mut y = layout.origin_y;

    buf.queue(MoveTo(x, y))?;
    buf.queue(SetAttribute(Attribute::Bold))?;
    buf.queue(Print(format!(
        "Words {}/{}",
        session.found_count(),
        session.word_total()
    )))?;
    buf.queue(SetAttribute(Attribute::Reset))?;
    y += 1;

    for (word, found) in session.visible_words() {
        y += 1;
        buf.queue(MoveTo(x, y))?;
        if found {
            buf.queue(SetForegroundColor(Color::DarkGrey))?;
            buf.queue(SetAttribute(Attribute::CrossedOut))?;
        }
        buf.queue(Print(word))?;
        buf.queue(ResetColor)?;
        buf.queue(SetAttribute(Attribute::Reset))?;
    }

    if session.hidden_found() {
        y += 2;
        buf.queue(MoveTo(x, y))?;
        buf.queue(SetForegroundColor(Color::Magenta))?;
        buf.queue(Print("hidden word found!"))?;
        buf.queue(ResetColor)?;
    }
    Ok(())
}

fn draw_footer(buf: &mut Vec<u8>, session: &GameSession, layout: &GridLayout) -> Result<()> {
    let y = layout.origin_y + layout.size as u16 * layout.cell_h + 1;
    buf.queue(MoveTo(layout.origin_x, y))?;

    if session.is_completed() {
        buf.queue(SetForegroundColor(Color::Green))?;
        buf.queue(SetAttribute(Attribute::Bold))?;
        buf.queue(Print(format!(
            "Puzzle complete! Final score {} in {}",
            session.score(),
            format_clock(session.elapsed_seconds())
        )))?;
        buf.queue(SetAttribute(Attribute::Reset))?;
        buf.queue(ResetColor)?;
        buf.queue(MoveTo(layout.origin_x, y + 1))?;
    }

    buf.queue(SetForegroundColor(Color::DarkGrey))?;
    buf.queue(Print("drag to select - n new game - q quit"))?;
    buf.queue(ResetColor)?;
    Ok(())
}

/// Inline error screen for pool load failures: no grid, no timer, just the
/// message and a way out.
pub fn draw_error(buf: &mut Vec<u8>, message: &str, viewport: Viewport) -> Result<()> {
    let x = viewport.width.saturating_sub(40) / 2 + 1;
    let y = (viewport.height / 2).saturating_sub(1).max(1);

    buf.queue(MoveTo(x, y))?;
    buf.queue(SetForegroundColor(Color::Red))?;
    buf.queue(SetAttribute(Attribute::Bold))?;
    buf.queue(Print("Could not load the word list"))?;
    buf.queue(SetAttribute(Attribute::Reset))?;

    buf.queue(MoveTo(x, y + 1))?;
    buf.queue(Print(message))?;
    buf.queue(ResetColor)?;

    buf.queue(MoveTo(x, y + 3))?;
    buf.queue(SetForegroundColor(Color::DarkGrey))?;
    buf.queue(Print("n retry - q quit"))?;
    buf.queue(ResetColor)?;
    Ok(())
}
