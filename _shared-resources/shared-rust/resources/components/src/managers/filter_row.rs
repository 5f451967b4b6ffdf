// Filter Row Manager
// Provides YAML configuration helpers and OOP-style filter row manager wrapper

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};
use serde::Deserialize;
use tracing::{debug, warn};
use crate::core::{
    FilterChange, FilterItem, FilterRowConfig, FilterRowState, FilterStateError, GridRow,
    RoundButtonConfig, DEFAULT_CHIP_IMAGE,
};
use crate::elements::filter_row::FilterRow;
use crate::utilities::parse_color;

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Configuration Structures                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Filter row configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct FilterRowConfigYaml {
    /// Handle name (HWND)
    pub hwnd: String,
    /// Caption shown by the host above the row (optional)
    pub title: Option<String>,
    /// Button theme: "blue" or "green" (defaults to "blue")
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Height of every chip in cells
    #[serde(default = "default_row_element_size")]
    pub row_element_size: u16,
    /// Gap between rows in cells
    #[serde(default)]
    pub vertical_padding: u16,
    /// Row template; defaults to a single row
    #[serde(default)]
    pub rows: Vec<GridRowYaml>,
    /// Icon name for every chip; "none" disables it
    pub image_name: Option<String>,
    /// Background color overrides
    pub colors: Option<ButtonColorsYaml>,
    /// Chips, in display order
    #[serde(default)]
    pub items: Vec<FilterItemYaml>,
}

fn default_theme() -> String {
    "blue".to_string()
}

fn default_row_element_size() -> u16 {
    1
}

/// Row template entry from YAML
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GridRowYaml {
    #[serde(default)]
    pub spacing: u16,
}

/// Button background colors from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ButtonColorsYaml {
    pub selected: Option<String>,
    pub deselected: Option<String>,
}

/// Chip configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct FilterItemYaml {
    /// Chip ID; generated from the row hwnd and position when omitted
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub removable: bool,
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Configuration Conversion Functions                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Convert YAML filter row configuration to the immutable row configuration
pub fn convert_filter_row_config(config: &FilterRowConfigYaml) -> FilterRowConfig {
    let size = config.row_element_size;
    let mut button = match config.theme.to_lowercase().as_str() {
        "blue" => RoundButtonConfig::default_blue(size),
        "green" => RoundButtonConfig::default_green(size),
        other => {
            warn!(hwnd = %config.hwnd, theme = other, "unknown filter row theme, using blue");
            RoundButtonConfig::default_blue(size)
        }
    };

    if let Some(colors) = &config.colors {
        if let Some(color) = colors.selected.as_deref() {
            match parse_color(color) {
                Some(parsed) => button.background_colors.selected = parsed,
                None => warn!(hwnd = %config.hwnd, color, "ignoring unparseable selected color"),
            }
        }
        if let Some(color) = colors.deselected.as_deref() {
            match parse_color(color) {
                Some(parsed) => button.background_colors.deselected = parsed,
                None => warn!(hwnd = %config.hwnd, color, "ignoring unparseable deselected color"),
            }
        }
    }

    let rows = if config.rows.is_empty() {
        vec![GridRow::default()]
    } else {
        config.rows.iter().map(|row| GridRow::new(row.spacing)).collect()
    };

    let image_name = match config.image_name.as_deref() {
        None => Some(DEFAULT_CHIP_IMAGE.to_string()),
        Some(name) if name.eq_ignore_ascii_case("none") => None,
        Some(name) => Some(name.to_string()),
    };

    FilterRowConfig::new(size, config.vertical_padding, rows, button).with_image_name(image_name)
}

/// Convert YAML chip configurations to filter items
pub fn create_filter_items(config: &FilterRowConfigYaml) -> Vec<FilterItem> {
    config
        .items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let id = item
                .id
                .clone()
                .unwrap_or_else(|| format!("{}-{}", config.hwnd, idx));
            FilterItem::new(id, item.title.clone())
                .selected(item.selected)
                .removable(item.removable)
        })
        .collect()
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                          Filter Row Manager - OOP Style Row Operations                         │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Filter Row Manager wrapper for OOP-style filter row operations
/// Owns the row configuration together with its state
#[derive(Debug)]
pub struct FilterRowManager {
    name: String,
    title: Option<String>,
    config: FilterRowConfig,
    state: FilterRowState,
}

impl FilterRowManager {
    /// Create a filter row from config
    pub fn create(config: &FilterRowConfigYaml) -> Result<Self, FilterStateError> {
        let state = FilterRowState::try_new(create_filter_items(config))?;
        let mut manager = Self::from_parts(&config.hwnd, convert_filter_row_config(config), state);
        manager.title = config.title.clone();
        debug!(hwnd = %config.hwnd, chips = manager.state.len(), "filter row created");
        Ok(manager)
    }

    pub fn from_parts(name: &str, config: FilterRowConfig, state: FilterRowState) -> Self {
        Self {
            name: name.to_string(),
            title: None,
            config,
            state,
        }
    }

    /// Get the handle name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Caption, falling back to the handle name
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    pub fn config(&self) -> &FilterRowConfig {
        &self.config
    }

    pub fn state(&self) -> &FilterRowState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FilterRowState {
        &mut self.state
    }

    /// Height of the lane in cells
    pub fn height(&self) -> u16 {
        self.config.calculated_height()
    }

    /// Render the row into `area`
    pub fn render(&mut self, f: &mut Frame, area: Rect, focused: bool) {
        let row = FilterRow::new(&self.config).focused(focused);
        f.render_stateful_widget(row, area, &mut self.state);
    }

    /// Handle a mouse click at screen coordinates; returns the resulting change
    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<FilterChange> {
        FilterRow::new(&self.config).press_at(&mut self.state, column, row)
    }

    /// Route a mouse event that landed on this row
    /// Left click presses the chip under the cursor, the wheel scrolls by `scroll_step`
    pub fn handle_mouse(&mut self, event: &MouseEvent, scroll_step: u16) -> Option<FilterChange> {
        if !self.contains(event.column, event.row) {
            return None;
        }
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(event.column, event.row),
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
                self.scroll_left(scroll_step);
                None
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
                self.scroll_right(scroll_step);
                None
            }
            _ => None,
        }
    }

    /// Whether the screen position is inside the last rendered lane
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.state
            .viewport
            .last_area
            .map(|area| area.contains(ratatui::layout::Position::new(column, row)))
            .unwrap_or(false)
    }

    /// Press the focused chip
    pub fn press_focused(&mut self) -> Option<FilterChange> {
        FilterRow::new(&self.config).press_focused(&mut self.state)
    }

    /// Navigate to the next chip
    pub fn focus_next(&mut self) -> bool {
        FilterRow::new(&self.config).focus_next(&mut self.state)
    }

    /// Navigate to the previous chip
    pub fn focus_previous(&mut self) -> bool {
        FilterRow::new(&self.config).focus_previous(&mut self.state)
    }

    /// Make sure some chip owns focus (first one when none does)
    pub fn ensure_focus(&mut self) {
        if self.state.focused().is_none() {
            self.focus_next();
        }
    }

    pub fn scroll_left(&mut self, step: u16) {
        FilterRow::new(&self.config).scroll_by(&mut self.state, -i32::from(step));
    }

    pub fn scroll_right(&mut self, step: u16) {
        FilterRow::new(&self.config).scroll_by(&mut self.state, i32::from(step));
    }
}
