// Filter Row State
// Ordered, observable list of filter chips and the tap policy applied to it
//
// Usage:
//   let mut state = FilterRowState::new(vec![
//       FilterItem::new("a", "A").removable(true),
//       FilterItem::new("b", "B"),
//   ]);
//   state.subscribe(|change| tracing::debug!(?change, "filter changed"));
//   state.tap("b"); // toggles b
//   state.tap("a"); // removes a

use ratatui::layout::Rect;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// A single filter chip
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilterItem {
    id: String,
    title: String,
    #[serde(default)]
    selected: bool,
    #[serde(default)]
    removable: bool,
}

impl FilterItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            selected: false,
            removable: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn removable(mut self, removable: bool) -> Self {
        self.removable = removable;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_removable(&self) -> bool {
        self.removable
    }
}

/// What a tap did to the row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    /// A non-removable chip flipped its selection
    Toggled { id: String, selected: bool },
    /// A removable chip left the list; `index` is where it used to be
    Removed { id: String, index: usize },
}

impl FilterChange {
    pub fn id(&self) -> &str {
        match self {
            FilterChange::Toggled { id, .. } | FilterChange::Removed { id, .. } => id,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterStateError {
    #[error("no filter items have been provided")]
    Empty,
    #[error("duplicate filter item id '{0}'")]
    DuplicateId(String),
}

/// Handle returned by `FilterRowState::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&FilterChange)>;

/// Scroll and focus bookkeeping for the widget that renders the row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowViewport {
    /// Horizontal scroll position in cells
    pub scroll_offset: u16,
    /// Chip that owns keyboard focus
    pub focused: Option<String>,
    /// Area of the last render (used for hit testing)
    pub last_area: Option<Rect>,
}

/// State holder of a filter row
///
/// Owns the items exclusively. Every mutation bumps `revision` and is
/// delivered to subscribers in subscription order.
pub struct FilterRowState {
    items: Vec<FilterItem>,
    revision: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    pub viewport: RowViewport,
}

impl fmt::Debug for FilterRowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterRowState")
            .field("items", &self.items)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .field("viewport", &self.viewport)
            .finish()
    }
}

impl FilterRowState {
    /// Create the state for a row
    ///
    /// # Panics
    /// Panics when `items` is empty. A row without chips is a programming error.
    pub fn new(items: Vec<FilterItem>) -> Self {
        assert!(!items.is_empty(), "No filter items have been provided");
        Self::from_items(items)
    }

    /// Checked constructor for data-driven rows (config files)
    pub fn try_new(items: Vec<FilterItem>) -> Result<Self, FilterStateError> {
        if items.is_empty() {
            return Err(FilterStateError::Empty);
        }
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(FilterStateError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self::from_items(items))
    }

    fn from_items(items: Vec<FilterItem>) -> Self {
        Self {
            items,
            revision: 0,
            subscribers: Vec::new(),
            next_subscription: 0,
            viewport: RowViewport::default(),
        }
    }

    pub fn items(&self) -> &[FilterItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&FilterItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn selected_ids(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.selected)
            .map(|item| item.id.as_str())
            .collect()
    }

    /// Incremented on every change; hosts that poll compare against their last seen value
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&FilterChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Apply a tap to the chip with the given id
    ///
    /// Removable chips are removed, all others flip `selected`.
    /// Taps for ids that are no longer in the list are dropped.
    pub fn tap(&mut self, id: &str) -> Option<FilterChange> {
        let Some(index) = self.position(id) else {
            debug!(id, "dropping tap for a chip that is no longer present");
            return None;
        };
        Some(self.apply_at(index))
    }

    /// Index-based tap; out-of-range indices are dropped
    pub fn tap_index(&mut self, index: usize) -> Option<FilterChange> {
        if index >= self.items.len() {
            debug!(index, len = self.items.len(), "dropping tap for a stale index");
            return None;
        }
        Some(self.apply_at(index))
    }

    /// `index` must be in bounds
    fn apply_at(&mut self, index: usize) -> FilterChange {
        let change = if self.items[index].removable {
            let item = self.items.remove(index);
            self.refocus_after_removal(&item.id, index);
            FilterChange::Removed { id: item.id, index }
        } else {
            let item = &mut self.items[index];
            item.selected = !item.selected;
            FilterChange::Toggled {
                id: item.id.clone(),
                selected: item.selected,
            }
        };

        debug!(?change, remaining = self.items.len(), "filter chip tapped");
        self.publish(&change);
        change
    }

    fn publish(&mut self, change: &FilterChange) {
        self.revision += 1;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(change);
        }
    }

    // ┌────────────────────────────────────────────────────────────────────────────────────────────┐
    // │                                           Focus                                            │
    // └────────────────────────────────────────────────────────────────────────────────────────────┘

    pub fn focused(&self) -> Option<&str> {
        self.viewport.focused.as_deref()
    }

    /// Focus a chip by id; unknown ids leave focus untouched
    pub fn focus(&mut self, id: &str) -> bool {
        if self.position(id).is_some() {
            self.viewport.focused = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn clear_focus(&mut self) {
        self.viewport.focused = None;
    }

    pub fn focus_next(&mut self) -> bool {
        self.move_focus(1)
    }

    pub fn focus_previous(&mut self) -> bool {
        self.move_focus(-1)
    }

    fn move_focus(&mut self, delta: isize) -> bool {
        if self.items.is_empty() {
            self.viewport.focused = None;
            return false;
        }

        let target = match self.focused().and_then(|id| self.position(id)) {
            Some(current) => {
                let last = self.items.len() as isize - 1;
                (current as isize + delta).clamp(0, last) as usize
            }
            None => {
                if delta >= 0 {
                    0
                } else {
                    self.items.len() - 1
                }
            }
        };

        let id = self.items[target].id.clone();
        let changed = self.focused() != Some(id.as_str());
        self.viewport.focused = Some(id);
        changed
    }

    fn refocus_after_removal(&mut self, removed_id: &str, index: usize) {
        if self.focused() != Some(removed_id) {
            return;
        }
        self.viewport.focused = if self.items.is_empty() {
            None
        } else {
            let next = index.min(self.items.len() - 1);
            Some(self.items[next].id.clone())
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample() -> FilterRowState {
        FilterRowState::new(vec![
            FilterItem::new("a", "A").removable(true),
            FilterItem::new("b", "B"),
        ])
    }

    fn snapshot(state: &FilterRowState) -> Vec<(&str, bool)> {
        state.items().iter().map(|i| (i.id(), i.is_selected())).collect()
    }

    #[test]
    #[should_panic(expected = "No filter items have been provided")]
    fn test_new_panics_on_empty() {
        let _ = FilterRowState::new(Vec::new());
    }

    #[test]
    fn test_try_new_rejects_empty_and_duplicates() {
        assert_eq!(FilterRowState::try_new(Vec::new()).unwrap_err(), FilterStateError::Empty);
        let err = FilterRowState::try_new(vec![FilterItem::new("x", "1"), FilterItem::new("x", "2")]).unwrap_err();
        assert_eq!(err, FilterStateError::DuplicateId("x".to_string()));
    }

    #[test]
    fn test_new_preserves_order() {
        let state = FilterRowState::new(vec![
            FilterItem::new("c", "C"),
            FilterItem::new("a", "A"),
            FilterItem::new("b", "B"),
        ]);
        let ids: Vec<&str> = state.items().iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_item_defaults() {
        let item = FilterItem::new("id", "Title");
        assert!(!item.is_selected());
        assert!(!item.is_removable());
        assert_eq!(item.title(), "Title");
    }

    #[test]
    fn test_toggle_only_affects_tapped_item() {
        let mut state = FilterRowState::new(vec![
            FilterItem::new("a", "A"),
            FilterItem::new("b", "B").selected(true),
            FilterItem::new("c", "C"),
        ]);
        let change = state.tap("a");
        assert_eq!(change, Some(FilterChange::Toggled { id: "a".into(), selected: true }));
        assert_eq!(snapshot(&state), vec![("a", true), ("b", true), ("c", false)]);
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn test_double_toggle_restores_flag() {
        let mut state = sample();
        state.tap("b");
        state.tap("b");
        assert!(!state.get("b").unwrap().is_selected());
        assert_eq!(state.revision(), 2);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut state = FilterRowState::new(vec![
            FilterItem::new("a", "A"),
            FilterItem::new("b", "B").removable(true),
            FilterItem::new("c", "C"),
        ]);
        let change = state.tap("b");
        assert_eq!(change, Some(FilterChange::Removed { id: "b".into(), index: 1 }));
        assert_eq!(snapshot(&state), vec![("a", false), ("c", false)]);
    }

    #[test]
    fn test_scenario_toggle_then_remove() {
        let mut state = sample();
        state.tap("b");
        assert_eq!(snapshot(&state), vec![("a", false), ("b", true)]);
        state.tap("a");
        assert_eq!(snapshot(&state), vec![("b", true)]);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_stale_taps_by_id_hit_the_right_item() {
        let mut state = sample();
        // Both taps were captured against the original layout: a at 0, b at 1
        let first = state.items()[0].id().to_string();
        let second = state.items()[1].id().to_string();
        state.tap(&first);
        let change = state.tap(&second);
        assert_eq!(change, Some(FilterChange::Toggled { id: "b".into(), selected: true }));
        assert_eq!(snapshot(&state), vec![("b", true)]);
    }

    #[test]
    fn test_stale_index_is_dropped() {
        let mut state = sample();
        state.tap_index(0);
        assert_eq!(state.tap_index(1), None);
        assert_eq!(snapshot(&state), vec![("b", false)]);
        assert_eq!(state.revision(), 1);
    }

    #[test]
    fn test_unknown_id_is_dropped() {
        let mut state = sample();
        assert_eq!(state.tap("zzz"), None);
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn test_removing_everything_leaves_empty_row() {
        let mut state = FilterRowState::new(vec![FilterItem::new("a", "A").removable(true)]);
        state.tap("a");
        assert!(state.is_empty());
        assert_eq!(state.tap_index(0), None);
    }

    #[test]
    fn test_subscribers_receive_changes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut state = sample();
        let sink = Rc::clone(&seen);
        let sub = state.subscribe(move |change| sink.borrow_mut().push(change.clone()));

        state.tap("b");
        state.tap("a");
        assert!(state.unsubscribe(sub));
        assert!(!state.unsubscribe(sub));
        state.tap("b");

        assert_eq!(
            *seen.borrow(),
            vec![
                FilterChange::Toggled { id: "b".into(), selected: true },
                FilterChange::Removed { id: "a".into(), index: 0 },
            ]
        );
        assert_eq!(state.revision(), 3);
    }

    #[test]
    fn test_selected_ids() {
        let mut state = FilterRowState::new(vec![
            FilterItem::new("a", "A"),
            FilterItem::new("b", "B"),
            FilterItem::new("c", "C"),
        ]);
        state.tap("a");
        state.tap("c");
        assert_eq!(state.selected_ids(), vec!["a", "c"]);
    }

    #[test]
    fn test_focus_navigation_clamps() {
        let mut state = sample();
        assert!(state.focus_next());
        assert_eq!(state.focused(), Some("a"));
        assert!(state.focus_next());
        assert_eq!(state.focused(), Some("b"));
        assert!(!state.focus_next());
        assert!(state.focus_previous());
        assert_eq!(state.focused(), Some("a"));
        assert!(!state.focus("nope"));
    }

    #[test]
    fn test_focus_moves_to_neighbour_after_removal() {
        let mut state = FilterRowState::new(vec![
            FilterItem::new("a", "A"),
            FilterItem::new("b", "B").removable(true),
            FilterItem::new("c", "C"),
        ]);
        state.focus("b");
        state.tap("b");
        assert_eq!(state.focused(), Some("c"));

        let mut last = FilterRowState::new(vec![FilterItem::new("a", "A").removable(true)]);
        last.focus("a");
        last.tap("a");
        assert_eq!(last.focused(), None);
    }

    #[test]
    fn test_tap_index_hits_the_item_at_that_position() {
        // `new` does not reject duplicate ids, so position is the only reliable key
        let mut state = FilterRowState::new(vec![
            FilterItem::new("x", "First"),
            FilterItem::new("x", "Second"),
        ]);
        state.tap_index(1);

        let titles: Vec<(&str, bool)> = state.items().iter().map(|i| (i.title(), i.is_selected())).collect();
        assert_eq!(titles, vec![("First", false), ("Second", true)]);
    }

    #[test]
    fn test_clear_focus() {
        let mut state = sample();
        state.focus("b");
        state.clear_focus();
        assert_eq!(state.focused(), None);
        // Next navigation starts over from the first chip
        state.focus_next();
        assert_eq!(state.focused(), Some("a"));
    }

    #[test]
    fn test_item_deserialize_defaults() {
        let item: FilterItem = serde_yaml::from_str("id: x\ntitle: X\n").unwrap();
        assert_eq!(item, FilterItem::new("x", "X"));
    }
}
