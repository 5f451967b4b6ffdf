// Application State
// Main application state management and event dispatch

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};
use tui_components::{FilterChange, FilterRowManager};

use super::{AppConfig, AppEvent};
use crate::config::{AppConfig as FileConfig, BindingConfigYaml};
use crate::config_validation::load_and_validate_config;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration (built-in defaults)
    pub config: AppConfig,

    /// Window title
    pub title: String,

    /// Key bindings shown in the status bar
    pub bindings: Vec<BindingConfigYaml>,

    /// Status bar text when nothing has happened yet
    pub default_status: String,

    /// Filter rows, top to bottom
    pub rows: Vec<FilterRowManager>,

    /// Row that owns keyboard focus
    pub focused_row: usize,

    /// Description of the most recent change
    pub last_change: Option<String>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance from a config file (defaults to src/config.yaml)
    pub fn new(config_path: Option<PathBuf>) -> Result<Self> {
        let file_config = load_and_validate_config(config_path)?;
        Self::from_config(AppConfig::default(), &file_config)
    }

    pub fn from_config(config: AppConfig, file_config: &FileConfig) -> Result<Self> {
        let mut rows = Vec::with_capacity(file_config.filter_rows.len());
        for row_config in &file_config.filter_rows {
            let mut row = FilterRowManager::create(row_config)
                .with_context(|| format!("failed to create filter row '{}'", row_config.hwnd))?;

            let hwnd = row_config.hwnd.clone();
            row.state_mut().subscribe(move |change| {
                info!(row = %hwnd, ?change, "filter changed");
            });
            rows.push(row);
        }

        let mut app = Self {
            config,
            title: file_config.application.title.clone(),
            bindings: file_config.application.bindings.clone(),
            default_status: file_config.application.status_bar.default_text.clone(),
            rows,
            focused_row: 0,
            last_change: None,
            should_quit: false,
        };
        if let Some(row) = app.rows.first_mut() {
            row.ensure_focus();
        }
        Ok(app)
    }

    pub fn focused_row_mut(&mut self) -> Option<&mut FilterRowManager> {
        self.rows.get_mut(self.focused_row)
    }

    /// Text shown on the status bar
    pub fn status_text(&self) -> &str {
        self.last_change.as_deref().unwrap_or(&self.default_status)
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        let step = self.config.ui.scroll_step;
        match event {
            AppEvent::Quit => self.quit(),
            AppEvent::NextRow => self.move_row_focus(1),
            AppEvent::PreviousRow => self.move_row_focus(-1),
            AppEvent::FocusLeft => {
                if let Some(row) = self.focused_row_mut() {
                    row.focus_previous();
                }
            }
            AppEvent::FocusRight => {
                if let Some(row) = self.focused_row_mut() {
                    row.focus_next();
                }
            }
            AppEvent::Press => {
                let change = self.focused_row_mut().and_then(|row| {
                    row.ensure_focus();
                    row.press_focused()
                });
                self.record(self.focused_row, change);
            }
            AppEvent::ScrollLeft => {
                if let Some(row) = self.focused_row_mut() {
                    row.scroll_left(step);
                }
            }
            AppEvent::ScrollRight => {
                if let Some(row) = self.focused_row_mut() {
                    row.scroll_right(step);
                }
            }
            AppEvent::Mouse(mouse) => {
                if !self.config.ui.mouse_enabled {
                    return;
                }
                let Some(index) = self.rows.iter().position(|row| row.contains(mouse.column, mouse.row)) else {
                    return;
                };
                self.focused_row = index;
                let change = self.rows[index].handle_mouse(&mouse, step);
                self.record(index, change);
            }
            AppEvent::Resize | AppEvent::None => {}
        }
    }

    fn move_row_focus(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let count = self.rows.len() as isize;
        self.focused_row = (self.focused_row as isize + delta).rem_euclid(count) as usize;
        if let Some(row) = self.focused_row_mut() {
            row.ensure_focus();
        }
        debug!(row = self.focused_row, "row focus moved");
    }

    fn record(&mut self, row_index: usize, change: Option<FilterChange>) {
        let (Some(change), Some(row)) = (change, self.rows.get(row_index)) else {
            return;
        };
        let message = match &change {
            FilterChange::Toggled { id, selected } => {
                let title = row.state().get(id).map(|item| item.title()).unwrap_or(id.as_str());
                format!("{}: {} {}", row.title(), title, if *selected { "selected" } else { "deselected" })
            }
            FilterChange::Removed { id, .. } => format!("{}: removed {}", row.title(), id),
        };
        self.last_change = Some(message);
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
