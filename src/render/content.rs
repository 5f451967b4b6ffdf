// Content rendering
// Title line, one bordered lane per filter row, status bar

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_components::{get_border_style, FilterRowManager};

use crate::core::App;

/// Height of a row including its border
pub fn row_block_height(row: &FilterRowManager) -> u16 {
    row.height().saturating_add(2)
}

/// Render the whole screen
pub fn render_app(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let mut constraints = Vec::with_capacity(app.rows.len() + 3);
    constraints.push(Constraint::Length(1));
    constraints.extend(app.rows.iter().map(|row| Constraint::Length(row_block_height(row))));
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));
    let chunks = Layout::vertical(constraints).split(area);

    render_title(f, chunks[0], &app.title);

    let focused_row = app.focused_row;
    for (index, row) in app.rows.iter_mut().enumerate() {
        render_row(f, chunks[index + 1], row, index == focused_row);
    }

    render_status_bar(f, chunks[chunks.len() - 1], app);
}

fn render_title(f: &mut Frame, area: Rect, title: &str) {
    let title = Paragraph::new(Line::from(title).centered()).style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(title, area);
}

fn render_row(f: &mut Frame, area: Rect, row: &mut FilterRowManager, is_active: bool) {
    let (border_style, border_type) = get_border_style(is_active);
    let caption = format!(" {} ({} selected) ", row.title(), row.state().selected_ids().len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .title(caption);

    let inner = block.inner(area);
    f.render_widget(block, area);
    row.render(f, inner, is_active);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    // Feedback first; bindings fill whatever width is left
    let mut spans = vec![
        Span::styled(app.status_text().to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" │ "),
    ];
    for binding in &app.bindings {
        spans.push(Span::styled(binding.key.clone(), Style::default().add_modifier(Modifier::BOLD)));
        spans.push(Span::raw(format!(" {}  ", binding.description)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use crate::core::{AppConfig, AppEvent};
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        let file_config = load_config(None).unwrap();
        App::from_config(AppConfig::default(), &file_config).unwrap()
    }

    fn line(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_layout() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        terminal.draw(|f| render_app(f, &mut app)).unwrap();

        assert!(line(&terminal, 0).contains("Filter Chips"));
        assert!(line(&terminal, 1).contains(" Removable (0 selected) "));
        assert!(line(&terminal, 3).contains("Test1"));
        assert!(line(&terminal, 6).contains(" Toggle (0 selected) "));
        assert!(line(&terminal, 13).contains("Click a chip or use the keyboard"));

        // Lanes are recorded for hit testing
        assert_eq!(app.rows[0].state().viewport.last_area, Some(Rect::new(1, 2, 58, 3)));
        assert_eq!(app.rows[1].state().viewport.last_area, Some(Rect::new(1, 7, 58, 3)));
    }

    #[test]
    fn test_click_removes_chip() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        terminal.draw(|f| render_app(f, &mut app)).unwrap();

        app.handle_event(AppEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 3,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(app.status_text(), "Removable: removed removable-1");

        terminal.draw(|f| render_app(f, &mut app)).unwrap();
        assert!(line(&terminal, 13).starts_with("Removable: removed removable-1 │ "));
        assert!(!line(&terminal, 3).contains("Test1"));
        assert!(line(&terminal, 3).contains("Test2"));
    }

    #[test]
    fn test_click_selects_toggle_chip() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        terminal.draw(|f| render_app(f, &mut app)).unwrap();

        app.handle_event(AppEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 2,
            row: 7,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(app.focused_row, 1);
        assert_eq!(app.rows[1].state().selected_ids(), vec!["toggle-1"]);

        terminal.draw(|f| render_app(f, &mut app)).unwrap();
        assert!(line(&terminal, 6).contains(" Toggle (1 selected) "));
    }
}
