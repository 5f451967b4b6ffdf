// Filter Row Component
// Horizontally scrolling lane of round toggle chips backed by FilterRowState

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::{StatefulWidget, Widget},
};
use tracing::debug;
use crate::core::{FilterChange, FilterItem, FilterRowConfig, FilterRowState};
use crate::elements::lazy_grid::{GridCell, GridLayout};
use crate::elements::round_button::{RoundButton, RoundButtonModel};

pub struct FilterRow<'a> {
    config: &'a FilterRowConfig,
    /// Whether this row owns keyboard focus (focused chip is highlighted)
    focused: bool,
}

impl<'a> FilterRow<'a> {
    pub fn new(config: &'a FilterRowConfig) -> Self {
        Self {
            config,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn button(&self, item: &FilterItem, focused: bool) -> RoundButton<'a> {
        let model = RoundButtonModel::new(item.title(), item.is_selected())
            .with_image_name(self.config.image_name().map(str::to_string));
        RoundButton::new(model, self.config.round_button_config()).focused(focused)
    }

    /// Lay out every chip of the row (positions relative to the lane origin)
    pub fn layout(&self, state: &FilterRowState) -> GridLayout {
        let height = self.config.row_element_size();
        let widths: Vec<u16> = state
            .items()
            .iter()
            .map(|item| self.button(item, false).width(height))
            .collect();
        GridLayout::compute(&widths, self.config)
    }

    /// Screen area of the visible part of a cell, plus how many of its
    /// leading columns are scrolled off the left edge
    fn cell_area(lane: Rect, cell: &GridCell, offset: u16) -> Option<(Rect, u16)> {
        let hidden = offset.saturating_sub(cell.x);
        if hidden >= cell.width {
            return None;
        }
        let x = lane.x.saturating_add(cell.x.saturating_sub(offset));
        let y = lane.y.saturating_add(cell.y);
        if x >= lane.right() || y >= lane.bottom() {
            return None;
        }
        let area = Rect {
            x,
            y,
            width: (cell.width - hidden).min(lane.right() - x),
            height: cell.height.min(lane.bottom() - y),
        };
        Some((area, hidden))
    }

    /// Index of the chip rendered at the given screen position, if any
    pub fn index_at(&self, state: &FilterRowState, column: u16, row: u16) -> Option<usize> {
        let lane = state.viewport.last_area?;
        let position = Position::new(column, row);
        if !lane.contains(position) {
            return None;
        }

        let offset = state.viewport.scroll_offset;
        self.layout(state)
            .visible(offset, lane.width)
            .find(|cell| {
                Self::cell_area(lane, cell, offset)
                    .map(|(area, _)| area.contains(position))
                    .unwrap_or(false)
            })
            .map(|cell| cell.index)
    }

    /// Id of the chip rendered at the given screen position, if any
    pub fn chip_at(&self, state: &FilterRowState, column: u16, row: u16) -> Option<String> {
        let index = self.index_at(state, column, row)?;
        state.items().get(index).map(|item| item.id().to_string())
    }

    /// Press the chip under the given screen position
    pub fn press_at(&self, state: &mut FilterRowState, column: u16, row: u16) -> Option<FilterChange> {
        let index = self.index_at(state, column, row)?;
        let id = state.items().get(index)?.id().to_string();
        state.focus(&id);
        self.press_index(state, index)
    }

    /// Press the chip that owns focus
    pub fn press_focused(&self, state: &mut FilterRowState) -> Option<FilterChange> {
        let id = state.focused()?.to_string();
        let change = self.press(state, &id);
        self.reveal_focused(state);
        change
    }

    /// Press a chip by id
    pub fn press(&self, state: &mut FilterRowState, id: &str) -> Option<FilterChange> {
        let Some(index) = state.position(id) else {
            debug!(id, "ignoring press for a chip that is no longer present");
            return None;
        };
        self.press_index(state, index)
    }

    /// Press the chip at `index` through its button's tap action
    pub fn press_index(&self, state: &mut FilterRowState, index: usize) -> Option<FilterChange> {
        let Some((title, selected)) = state
            .items()
            .get(index)
            .map(|item| (item.title().to_string(), item.is_selected()))
        else {
            debug!(index, "ignoring press for a stale chip index");
            return None;
        };

        let mut change = None;
        {
            let model = RoundButtonModel::new(title, selected)
                .with_image_name(self.config.image_name().map(str::to_string))
                .on_tap(|| change = state.tap_index(index));
            let mut button = RoundButton::new(model, self.config.round_button_config());
            button.press();
        }
        change
    }

    pub fn focus_next(&self, state: &mut FilterRowState) -> bool {
        let moved = state.focus_next();
        self.reveal_focused(state);
        moved
    }

    pub fn focus_previous(&self, state: &mut FilterRowState) -> bool {
        let moved = state.focus_previous();
        self.reveal_focused(state);
        moved
    }

    /// Adjust the scroll offset so the focused chip is fully visible
    pub fn reveal_focused(&self, state: &mut FilterRowState) {
        let Some(lane) = state.viewport.last_area else {
            return;
        };
        let Some(index) = state.focused().and_then(|id| state.position(id)) else {
            return;
        };
        let layout = self.layout(state);
        state.viewport.scroll_offset = layout.reveal(index, state.viewport.scroll_offset, lane.width);
    }

    /// Scroll horizontally by `delta` cells, clamped to the content
    pub fn scroll_by(&self, state: &mut FilterRowState, delta: i32) {
        let offset = i32::from(state.viewport.scroll_offset).saturating_add(delta).max(0);
        let max = match state.viewport.last_area {
            Some(lane) => i32::from(self.layout(state).max_offset(lane.width)),
            None => i32::from(u16::MAX),
        };
        state.viewport.scroll_offset = offset.min(max) as u16;
    }
}

impl StatefulWidget for FilterRow<'_> {
    type State = FilterRowState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let lane = Rect {
            height: area.height.min(self.config.calculated_height()),
            ..area
        };
        state.viewport.last_area = Some(lane);
        if lane.width == 0 || lane.height == 0 {
            return;
        }

        let layout = self.layout(state);
        let offset = state.viewport.scroll_offset.min(layout.max_offset(lane.width));
        state.viewport.scroll_offset = offset;

        let focused_id = if self.focused { state.focused() } else { None };
        for cell in layout.visible(offset, lane.width) {
            let (Some(item), Some((area, hidden))) = (state.items().get(cell.index), Self::cell_area(lane, cell, offset)) else {
                continue;
            };
            let button = self.button(item, focused_id == Some(item.id()));
            if hidden == 0 && area.width == cell.width && area.height == cell.height {
                (&button).render(area, buf);
                continue;
            }

            // Clipped by the lane: draw the whole chip off-screen, copy the visible part
            let mut scratch = Buffer::empty(Rect::new(0, 0, cell.width, cell.height));
            (&button).render(scratch.area, &mut scratch);
            for dy in 0..area.height {
                for dx in 0..area.width {
                    buf[(area.x + dx, area.y + dy)] = scratch[(hidden + dx, dy)].clone();
                }
            }
        }
    }
}
