// Helper utilities for TUI components
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::BorderType;

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Parse color from string: a named color or "#rrggbb"
pub fn parse_color(color: &str) -> Option<Color> {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() == 6 {
            return u32::from_str_radix(hex, 16).ok().map(hex_color);
        }
        return None;
    }

    let parsed = match color.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "darkgray" | "dark_grey" => Color::DarkGray,
        // Dark colors using RGB values (ratatui doesn't have Dark* variants)
        "dark_red" | "darkred" => Color::Rgb(139, 0, 0),
        "dark_green" | "darkgreen" => Color::Rgb(0, 100, 0),
        "dark_blue" | "darkblue" => Color::Rgb(0, 0, 139),
        "dark_cyan" | "darkcyan" => Color::Rgb(0, 139, 139),
        _ => return None,
    };
    Some(parsed)
}

/// Resolve a system symbol name to a terminal glyph
pub fn system_glyph(name: &str) -> &'static str {
    match name {
        "x.circle.fill" | "x.circle" => "⊗",
        "xmark" | "multiply" => "✕",
        "checkmark" | "checkmark.circle.fill" => "✓",
        "plus" | "plus.circle.fill" => "+",
        "minus" | "minus.circle.fill" => "−",
        "star" => "☆",
        "star.fill" => "★",
        "heart.fill" => "♥",
        "chevron.left" => "‹",
        "chevron.right" => "›",
        _ => "•",
    }
}

/// Longest prefix of `text` that fits in `max_width` terminal cells
pub fn truncate_to_width(text: &str, max_width: u16) -> &str {
    let mut used = 0u16;
    for (offset, ch) in text.char_indices() {
        let mut encoded = [0u8; 4];
        let width = Span::raw(&*ch.encode_utf8(&mut encoded)).width() as u16;
        if used.saturating_add(width) > max_width {
            return &text[..offset];
        }
        used += width;
    }
    text
}

/// Border style and type for a focusable container
pub fn get_border_style(is_active: bool) -> (Style, BorderType) {
    if is_active {
        (Style::default().fg(Color::White), BorderType::Thick)
    } else {
        (Style::default().fg(hex_color(0x333333)), BorderType::Plain)
    }
}
