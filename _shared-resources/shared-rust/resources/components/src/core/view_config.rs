// View Configuration
// Immutable style values for round buttons and filter rows

use ratatui::style::{Color, Modifier};

/// Icon name used by filter rows when none is configured
pub const DEFAULT_CHIP_IMAGE: &str = "x.circle.fill";

/// Insets in terminal cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeInsets {
    pub top: u16,
    pub leading: u16,
    pub bottom: u16,
    pub trailing: u16,
}

impl EdgeInsets {
    pub const fn new(top: u16, leading: u16, bottom: u16, trailing: u16) -> Self {
        Self { top, leading, bottom, trailing }
    }

    /// Horizontal-only insets
    pub const fn horizontal(leading: u16, trailing: u16) -> Self {
        Self::new(0, leading, 0, trailing)
    }

    pub fn horizontal_sum(&self) -> u16 {
        self.leading.saturating_add(self.trailing)
    }
}

/// Which side of the title the icon sits on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconAlignment {
    Leading,
    #[default]
    Trailing,
}

/// Icon footprint in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize {
    pub width: u16,
    pub height: u16,
}

impl IconSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageConfig {
    pub foreground_color: Color,
    pub size: IconSize,
    pub alignment: IconAlignment,
    /// true: the image name is a symbol name resolved through `system_glyph`
    /// false: the image name is drawn as-is
    pub is_system: bool,
}

impl ImageConfig {
    pub fn new(size: IconSize) -> Self {
        Self {
            foreground_color: Color::White,
            size,
            alignment: IconAlignment::default(),
            is_system: false,
        }
    }

    pub fn with_alignment(mut self, alignment: IconAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.foreground_color = color;
        self
    }

    pub fn system(mut self, is_system: bool) -> Self {
        self.is_system = is_system;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextConfig {
    /// Terminal "font": the text modifiers applied to the title
    pub font: Modifier,
    pub foreground_color: Color,
    pub padding: EdgeInsets,
}

impl TextConfig {
    pub fn new(font: Modifier, foreground_color: Color) -> Self {
        Self {
            font,
            foreground_color,
            padding: EdgeInsets::default(),
        }
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundColors {
    pub selected: Color,
    pub deselected: Color,
}

impl BackgroundColors {
    pub const fn new(selected: Color, deselected: Color) -> Self {
        Self { selected, deselected }
    }

    pub fn for_state(&self, selected: bool) -> Color {
        if selected {
            self.selected
        } else {
            self.deselected
        }
    }
}

/// Style of a single round toggle button
#[derive(Debug, Clone, PartialEq)]
pub struct RoundButtonConfig {
    pub image_config: Option<ImageConfig>,
    pub selected_title: TextConfig,
    pub deselected_title: TextConfig,
    /// Any non-zero radius rounds the chip once it is tall enough to carry a border
    pub corner_radius: u16,
    pub background_colors: BackgroundColors,
    /// Space between the title (or icon) and the chip edge
    pub padding: EdgeInsets,
    pub image_to_text_padding: u16,
}

impl RoundButtonConfig {
    pub fn title_for_state(&self, selected: bool) -> &TextConfig {
        if selected {
            &self.selected_title
        } else {
            &self.deselected_title
        }
    }

    /// Blue theme with a trailing system icon
    pub fn default_blue(row_element_size: u16) -> Self {
        Self::preset(
            row_element_size,
            Some(ImageConfig::new(IconSize::new(1, 1)).system(true)),
            BackgroundColors::new(Color::Blue, Color::Gray),
        )
    }

    /// Green theme without an icon
    pub fn default_green(row_element_size: u16) -> Self {
        Self::preset(
            row_element_size,
            None,
            BackgroundColors::new(Color::Green, Color::Gray),
        )
    }

    fn preset(row_element_size: u16, image_config: Option<ImageConfig>, background_colors: BackgroundColors) -> Self {
        let side = (row_element_size / 2).max(1);
        Self {
            image_config,
            selected_title: TextConfig::new(Modifier::empty(), Color::White),
            deselected_title: TextConfig::new(Modifier::empty(), Color::Black),
            corner_radius: row_element_size,
            background_colors,
            padding: EdgeInsets::horizontal(side, side),
            image_to_text_padding: 1,
        }
    }
}

/// One row of a filter lane
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridRow {
    /// Horizontal gap after chips in this row; columns are separated by the widest row gap
    pub spacing: u16,
}

impl GridRow {
    pub const fn new(spacing: u16) -> Self {
        Self { spacing }
    }
}

/// Layout and style of a filter row
///
/// `calculated_height` is derived once from the element size, the row count
/// and the inter-row padding, and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterRowConfig {
    row_element_size: u16,
    vertical_padding: u16,
    rows: Vec<GridRow>,
    calculated_height: u16,
    round_button_config: RoundButtonConfig,
    image_name: Option<String>,
}

impl FilterRowConfig {
    pub fn new(
        row_element_size: u16,
        vertical_padding: u16,
        rows: Vec<GridRow>,
        round_button_config: RoundButtonConfig,
    ) -> Self {
        let calculated_height = calculate_height(row_element_size, vertical_padding, rows.len());
        Self {
            row_element_size,
            vertical_padding,
            rows,
            calculated_height,
            round_button_config,
            image_name: Some(DEFAULT_CHIP_IMAGE.to_string()),
        }
    }

    /// Icon shown on every chip (only drawn when the button style has an image config)
    pub fn with_image_name(mut self, image_name: Option<String>) -> Self {
        self.image_name = image_name;
        self
    }

    pub fn row_element_size(&self) -> u16 {
        self.row_element_size
    }

    pub fn vertical_padding(&self) -> u16 {
        self.vertical_padding
    }

    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn calculated_height(&self) -> u16 {
        self.calculated_height
    }

    pub fn round_button_config(&self) -> &RoundButtonConfig {
        &self.round_button_config
    }

    pub fn image_name(&self) -> Option<&str> {
        self.image_name.as_deref()
    }
}

/// `size * rows + padding * (rows - 1)`, saturating; no rows means no height
pub fn calculate_height(row_element_size: u16, vertical_padding: u16, row_count: usize) -> u16 {
    if row_count == 0 {
        return 0;
    }
    let rows = u16::try_from(row_count).unwrap_or(u16::MAX);
    row_element_size
        .saturating_mul(rows)
        .saturating_add(vertical_padding.saturating_mul(rows - 1))
}
