//! Event mapping from terminal input to gesture and app signals.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::types::{AppAction, GridLayout, SelectEvent};

/// A mapped input: either part of a selection gesture or an app control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSignal {
    Gesture(SelectEvent),
    App(AppAction),
}

/// Map a terminal event against the current grid layout.
///
/// Press and drag positions are hit-tested to cells; positions outside the
/// grid produce nothing (a drag wandering off the grid is ignored, it does
/// not abort the gesture). Release maps unconditionally - the gesture ends
/// wherever the button comes up.
pub fn map_event(event: &Event, layout: &GridLayout) -> Option<InputSignal> {
    match event {
        Event::Mouse(mouse) => map_mouse(mouse, layout).map(InputSignal::Gesture),
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            map_key(*key).map(InputSignal::App)
        }
        _ => None,
    }
}

fn map_mouse(mouse: &MouseEvent, layout: &GridLayout) -> Option<SelectEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => layout
            .cell_at(mouse.column, mouse.row)
            .map(SelectEvent::Press),
        MouseEventKind::Drag(MouseButton::Left) => layout
            .cell_at(mouse.column, mouse.row)
            .map(SelectEvent::Drag),
        MouseEventKind::Up(MouseButton::Left) => Some(SelectEvent::Release),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppAction> {
    if should_quit(key) {
        return Some(AppAction::Quit);
    }
    match key.code {
        KeyCode::Char('n') | KeyCode::Char('N') => Some(AppAction::NewGame),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coord;

    fn layout() -> GridLayout {
        GridLayout {
            origin_x: 10,
            origin_y: 2,
            cell_w: 2,
            cell_h: 1,
            size: 15,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_press_on_grid_cell_maps_to_press() {
        let event = mouse(MouseEventKind::Down(MouseButton::Left), 14, 5);
        assert_eq!(
            map_event(&event, &layout()),
            Some(InputSignal::Gesture(SelectEvent::Press(Coord::new(3, 2))))
        );
    }

    #[test]
    fn test_press_off_grid_maps_to_nothing() {
        let event = mouse(MouseEventKind::Down(MouseButton::Left), 0, 0);
        assert_eq!(map_event(&event, &layout()), None);
    }

    #[test]
    fn test_drag_off_grid_is_ignored_not_release() {
        // Off-grid drag must not terminate or abort the gesture.
        let event = mouse(MouseEventKind::Drag(MouseButton::Left), 200, 0);
        assert_eq!(map_event(&event, &layout()), None);
    }

    #[test]
    fn test_release_maps_anywhere() {
        let on_grid = mouse(MouseEventKind::Up(MouseButton::Left), 14, 5);
        let off_grid = mouse(MouseEventKind::Up(MouseButton::Left), 0, 0);
        for event in [on_grid, off_grid] {
            assert_eq!(
                map_event(&event, &layout()),
                Some(InputSignal::Gesture(SelectEvent::Release))
            );
        }
    }

    #[test]
    fn test_non_left_buttons_are_ignored() {
        let event = mouse(MouseEventKind::Down(MouseButton::Right), 14, 5);
        assert_eq!(map_event(&event, &layout()), None);
        let event = mouse(MouseEventKind::ScrollDown, 14, 5);
        assert_eq!(map_event(&event, &layout()), None);
    }

    #[test]
    fn test_app_keys() {
        let new_game = Event::Key(KeyEvent::from(KeyCode::Char('n')));
        assert_eq!(
            map_event(&new_game, &layout()),
            Some(InputSignal::App(AppAction::NewGame))
        );

        let quit = Event::Key(KeyEvent::from(KeyCode::Char('q')));
        assert_eq!(
            map_event(&quit, &layout()),
            Some(InputSignal::App(AppAction::Quit))
        );

        let other = Event::Key(KeyEvent::from(KeyCode::Char('x')));
        assert_eq!(map_event(&other, &layout()), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(should_quit(key));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
