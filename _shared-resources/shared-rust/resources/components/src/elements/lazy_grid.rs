// Lazy horizontal grid
// Places chips into a fixed number of rows and yields only the visible cells

use crate::core::FilterRowConfig;

/// Position of one chip inside the lane, relative to the lane origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Index into the item list
    pub index: usize,
    pub row: usize,
    pub column: usize,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl GridCell {
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }
}

/// Computed layout of a lane
///
/// Items fill the rows top to bottom, then move to the next column:
/// item `i` lands in row `i % rows`, column `i / rows`. Every column is as
/// wide as its widest chip and narrower chips are centred in it. Columns
/// are separated by the widest row spacing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLayout {
    cells: Vec<GridCell>,
    content_width: u16,
}

impl GridLayout {
    pub fn compute(widths: &[u16], config: &FilterRowConfig) -> Self {
        let rows = config.rows();
        if rows.is_empty() {
            return Self::default();
        }

        let height = config.row_element_size();
        let pitch = height.saturating_add(config.vertical_padding());
        let gap = rows.iter().map(|row| row.spacing).max().unwrap_or(0);

        let columns = widths.len().div_ceil(rows.len());
        let mut column_widths = vec![0u16; columns];
        for (index, &width) in widths.iter().enumerate() {
            let column = index / rows.len();
            column_widths[column] = column_widths[column].max(width);
        }

        let mut column_x = Vec::with_capacity(columns);
        let mut cursor = 0u16;
        for &width in &column_widths {
            column_x.push(cursor);
            cursor = cursor.saturating_add(width).saturating_add(gap);
        }

        let cells: Vec<GridCell> = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let row = index % rows.len();
                let column = index / rows.len();
                let centring = (column_widths[column] - width) / 2;
                GridCell {
                    index,
                    row,
                    column,
                    x: column_x[column].saturating_add(centring),
                    y: pitch.saturating_mul(row as u16),
                    width,
                    height,
                }
            })
            .collect();

        let content_width = cells.iter().map(GridCell::right).max().unwrap_or(0);
        Self { cells, content_width }
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&GridCell> {
        self.cells.get(index)
    }

    /// Rightmost edge of any chip
    pub fn content_width(&self) -> u16 {
        self.content_width
    }

    /// Largest scroll offset that still fills the viewport
    pub fn max_offset(&self, viewport_width: u16) -> u16 {
        self.content_width.saturating_sub(viewport_width)
    }

    /// Cells that overlap `[offset, offset + viewport_width)`, including partly scrolled ones
    pub fn visible(&self, offset: u16, viewport_width: u16) -> impl Iterator<Item = &GridCell> {
        let end = offset.saturating_add(viewport_width);
        self.cells
            .iter()
            .filter(move |cell| cell.x < end && cell.right() > offset)
    }

    /// Scroll offset that shows the whole cell, moving as little as possible
    pub fn reveal(&self, index: usize, offset: u16, viewport_width: u16) -> u16 {
        let Some(cell) = self.cells.get(index) else {
            return offset;
        };
        if cell.x < offset {
            cell.x
        } else if cell.right() > offset.saturating_add(viewport_width) {
            // Never scroll past the left edge of the cell, even if it is wider than the viewport
            cell.right().saturating_sub(viewport_width).min(cell.x)
        } else {
            offset
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GridRow, RoundButtonConfig};
    use pretty_assertions::assert_eq;

    fn config(rows: usize, spacing: u16) -> FilterRowConfig {
        FilterRowConfig::new(1, 1, vec![GridRow::new(spacing); rows], RoundButtonConfig::default_green(1))
    }

    fn positions(layout: &GridLayout) -> Vec<(usize, usize, u16, u16)> {
        layout.cells().iter().map(|c| (c.row, c.column, c.x, c.y)).collect()
    }

    #[test]
    fn test_single_row_packs_left_to_right() {
        let layout = GridLayout::compute(&[5, 3, 4], &config(1, 2));
        assert_eq!(positions(&layout), vec![(0, 0, 0, 0), (0, 1, 7, 0), (0, 2, 12, 0)]);
        assert_eq!(layout.content_width(), 16);
    }

    #[test]
    fn test_two_rows_fill_down_then_across() {
        let layout = GridLayout::compute(&[4, 6, 4, 6], &config(2, 1));
        // Both columns are 6 wide; the 4-wide chips are centred
        assert_eq!(
            positions(&layout),
            vec![(0, 0, 1, 0), (1, 0, 0, 2), (0, 1, 8, 0), (1, 1, 7, 2)]
        );
        assert_eq!(layout.content_width(), 13);
    }

    #[test]
    fn test_columns_use_widest_row_spacing() {
        let config = FilterRowConfig::new(
            1,
            0,
            vec![GridRow::new(1), GridRow::new(3)],
            RoundButtonConfig::default_green(1),
        );
        let layout = GridLayout::compute(&[2, 2, 2], &config);
        assert_eq!(layout.cell(2).map(|c| (c.row, c.column, c.x)), Some((0, 1, 5)));
        assert_eq!(layout.cell(3), None);
    }

    #[test]
    fn test_no_rows_means_no_cells() {
        let config = FilterRowConfig::new(1, 1, Vec::new(), RoundButtonConfig::default_green(1));
        let layout = GridLayout::compute(&[3, 3], &config);
        assert!(layout.cells().is_empty());
        assert_eq!(layout.content_width(), 0);
    }

    #[test]
    fn test_visible_skips_offscreen_cells() {
        let layout = GridLayout::compute(&[5, 5, 5, 5], &config(1, 1));
        // x: 0, 6, 12, 18
        let visible: Vec<usize> = layout.visible(6, 10).map(|c| c.index).collect();
        assert_eq!(visible, vec![1, 2]);
        let visible: Vec<usize> = layout.visible(0, 100).map(|c| c.index).collect();
        assert_eq!(visible, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_visible_keeps_partly_scrolled_cells() {
        let layout = GridLayout::compute(&[5, 5, 5, 5], &config(1, 1));
        // Cell 0 spans 0..5 and cell 2 starts at 12, both overlap 3..13
        let visible: Vec<usize> = layout.visible(3, 10).map(|c| c.index).collect();
        assert_eq!(visible, vec![0, 1, 2]);
        let visible: Vec<usize> = layout.visible(5, 10).map(|c| c.index).collect();
        assert_eq!(visible, vec![1, 2]);
    }

    #[test]
    fn test_reveal_scrolls_minimally() {
        let layout = GridLayout::compute(&[5, 5, 5, 5], &config(1, 1));
        assert_eq!(layout.reveal(0, 6, 10), 0);
        assert_eq!(layout.reveal(1, 0, 10), 1);
        assert_eq!(layout.reveal(3, 0, 10), 13);
        assert_eq!(layout.reveal(9, 4, 10), 4);
    }

    #[test]
    fn test_reveal_wide_cell_aligns_left_edge() {
        let layout = GridLayout::compute(&[3, 20], &config(1, 1));
        assert_eq!(layout.reveal(1, 0, 10), 4);
    }

    #[test]
    fn test_max_offset() {
        let layout = GridLayout::compute(&[5, 5], &config(1, 1));
        assert_eq!(layout.max_offset(4), 7);
        assert_eq!(layout.max_offset(40), 0);
    }
}
