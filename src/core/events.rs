// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Move keyboard focus to the previous row
    PreviousRow,

    /// Move keyboard focus to the next row
    NextRow,

    /// Focus the chip left of the current one
    FocusLeft,

    /// Focus the chip right of the current one
    FocusRight,

    /// Press the focused chip
    Press,

    /// Scroll the focused row towards its start
    ScrollLeft,

    /// Scroll the focused row towards its end
    ScrollRight,

    /// Mouse input, routed to the row under the cursor
    Mouse(MouseEvent),

    /// Terminal resized; redraw happens on the next frame
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
            Event::Mouse(mouse) => AppEvent::Mouse(mouse),
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
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // Row navigation
            KeyCode::Up | KeyCode::BackTab => AppEvent::PreviousRow,
            KeyCode::Down | KeyCode::Tab => AppEvent::NextRow,

            // Chip navigation
            KeyCode::Left | KeyCode::Char('h') => AppEvent::FocusLeft,
            KeyCode::Right | KeyCode::Char('l') => AppEvent::FocusRight,

            // Activation
            KeyCode::Enter | KeyCode::Char(' ') => AppEvent::Press,

            // Scrolling
            KeyCode::Char('[') => AppEvent::ScrollLeft,
            KeyCode::Char(']') => AppEvent::ScrollRight,

            _ => AppEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEventKind};

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn press(code: KeyCode) -> Event {
        key(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(EventHandler::handle(press(KeyCode::Char('q'))), AppEvent::Quit);
        assert_eq!(
            EventHandler::handle(key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press)),
            AppEvent::Quit
        );
        assert_eq!(EventHandler::handle(press(KeyCode::Tab)), AppEvent::NextRow);
        assert_eq!(EventHandler::handle(press(KeyCode::Up)), AppEvent::PreviousRow);
        assert_eq!(EventHandler::handle(press(KeyCode::Right)), AppEvent::FocusRight);
        assert_eq!(EventHandler::handle(press(KeyCode::Char(' '))), AppEvent::Press);
        assert_eq!(EventHandler::handle(press(KeyCode::Char(']'))), AppEvent::ScrollRight);
        assert_eq!(EventHandler::handle(press(KeyCode::Char('x'))), AppEvent::None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        assert_eq!(
            EventHandler::handle(key(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release)),
            AppEvent::None
        );
    }

    #[test]
    fn test_mouse_passthrough() {
        let mouse = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(EventHandler::handle(Event::Mouse(mouse)), AppEvent::Mouse(mouse));
        assert_eq!(EventHandler::handle(Event::Resize(80, 24)), AppEvent::Resize);
    }
}
