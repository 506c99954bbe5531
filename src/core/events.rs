// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Select the tab left of the current one
    SelectPrevious,

    /// Select the tab right of the current one
    SelectNext,

    /// Select a tab by index
    SelectIndex(usize),

    /// Clear the selection through the host assignment path
    ClearSelection,

    /// Double the animation speed
    SpeedUp,

    /// Halve the animation speed
    SlowDown,

    /// Switch to the next tint
    CycleTint,

    /// Left click at terminal coordinates
    Tap { column: u16, row: u16 },

    /// Terminal resized
    Resize,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            Event::Resize(_, _) => AppEvent::Resize,
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            KeyCode::Char('q') => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            KeyCode::Left | KeyCode::Char('h') => AppEvent::SelectPrevious,
            KeyCode::Right | KeyCode::Char('l') => AppEvent::SelectNext,
            // Digits are 1-based on screen
            KeyCode::Char(c @ '1'..='9') => AppEvent::SelectIndex(c as usize - '1' as usize),

            KeyCode::Char('c') | KeyCode::Esc => AppEvent::ClearSelection,
            KeyCode::Char('+') | KeyCode::Char('=') => AppEvent::SpeedUp,
            KeyCode::Char('-') => AppEvent::SlowDown,
            KeyCode::Char('t') => AppEvent::CycleTint,

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => AppEvent::Tap {
                column: mouse.column,
                row: mouse.row,
            },
            _ => AppEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_digit_keys_map_to_zero_based_index() {
        assert_eq!(EventHandler::handle(press(KeyCode::Char('1'))), AppEvent::SelectIndex(0));
        assert_eq!(EventHandler::handle(press(KeyCode::Char('9'))), AppEvent::SelectIndex(8));
        assert_eq!(EventHandler::handle(press(KeyCode::Char('0'))), AppEvent::None);
    }

    #[test]
    fn test_ctrl_c_quits_plain_c_clears() {
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(EventHandler::handle(ctrl_c), AppEvent::Quit);
        assert_eq!(EventHandler::handle(press(KeyCode::Char('c'))), AppEvent::ClearSelection);
    }

    #[test]
    fn test_left_click_becomes_tap() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(EventHandler::handle(click), AppEvent::Tap { column: 12, row: 3 });
    }

    #[test]
    fn test_key_release_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(EventHandler::handle(Event::Key(key)), AppEvent::None);
    }
}
