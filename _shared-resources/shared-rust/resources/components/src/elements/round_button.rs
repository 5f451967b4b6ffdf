// Round Button Component
// Stateless toggle chip: label, optional icon, selected/deselected colors

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Widget},
};
use crate::core::{IconAlignment, ImageConfig, RoundButtonConfig};
use crate::utilities::{system_glyph, truncate_to_width};

/// Content of a round button
///
/// `selected` is the current value read from the owner; `action` is how the
/// button asks the owner to change it. The button never stores the value.
pub struct RoundButtonModel<'a> {
    pub image_name: Option<String>,
    pub title_name: String,
    pub selected: bool,
    action: Box<dyn FnMut() + 'a>,
}

impl<'a> RoundButtonModel<'a> {
    pub fn new(title_name: impl Into<String>, selected: bool) -> Self {
        Self {
            image_name: None,
            title_name: title_name.into(),
            selected,
            action: Box::new(|| {}),
        }
    }

    pub fn with_image_name(mut self, image_name: Option<String>) -> Self {
        self.image_name = image_name;
        self
    }

    pub fn on_tap(mut self, action: impl FnMut() + 'a) -> Self {
        self.action = Box::new(action);
        self
    }
}

pub struct RoundButton<'a> {
    model: RoundButtonModel<'a>,
    config: &'a RoundButtonConfig,
    focused: bool,
}

impl<'a> RoundButton<'a> {
    pub fn new(model: RoundButtonModel<'a>, config: &'a RoundButtonConfig) -> Self {
        Self {
            model,
            config,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn is_selected(&self) -> bool {
        self.model.selected
    }

    pub fn title(&self) -> &str {
        &self.model.title_name
    }

    /// Invoke the tap action
    pub fn press(&mut self) {
        (self.model.action)();
    }

    /// Width the chip needs at the given height
    pub fn width(&self, height: u16) -> u16 {
        let border = if self.is_rounded(height) { 2 } else { 0 };
        self.content_width().saturating_add(border)
    }

    fn is_rounded(&self, height: u16) -> bool {
        self.config.corner_radius > 0 && height >= 3
    }

    fn icon(&self) -> Option<(&ImageConfig, &str)> {
        let name = self.model.image_name.as_deref()?;
        let image_config = self.config.image_config.as_ref()?;
        let glyph = if image_config.is_system {
            system_glyph(name)
        } else {
            name
        };
        Some((image_config, glyph))
    }

    fn content_width(&self) -> u16 {
        let title = self.config.title_for_state(self.model.selected);
        let title_width = Span::raw(self.model.title_name.as_str()).width() as u16;
        let icon_width = self
            .icon()
            .map(|(image_config, _)| image_config.size.width.saturating_add(self.config.image_to_text_padding))
            .unwrap_or(0);

        self.config
            .padding
            .horizontal_sum()
            .saturating_add(title.padding.horizontal_sum())
            .saturating_add(title_width)
            .saturating_add(icon_width)
    }

    fn content_line(&self) -> Line<'static> {
        let title_config = self.config.title_for_state(self.model.selected);
        let mut title_style = Style::default()
            .fg(title_config.foreground_color)
            .add_modifier(title_config.font);
        if self.focused {
            title_style = title_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }

        let spaces = |count: u16| Span::raw(" ".repeat(count as usize));
        let icon_span = |image_config: &ImageConfig, glyph: &str| {
            // Only `size.width` cells are budgeted for the icon
            let glyph = truncate_to_width(glyph, image_config.size.width);
            let glyph_width = Span::raw(glyph).width() as u16;
            let pad = image_config.size.width.saturating_sub(glyph_width) as usize;
            Span::styled(
                format!("{}{}", glyph, " ".repeat(pad)),
                Style::default().fg(image_config.foreground_color),
            )
        };

        let mut spans = vec![spaces(self.config.padding.leading)];

        if let Some((image_config, glyph)) = self.icon() {
            if image_config.alignment == IconAlignment::Leading {
                spans.push(icon_span(image_config, glyph));
                spans.push(spaces(self.config.image_to_text_padding));
            }
        }

        spans.push(spaces(title_config.padding.leading));
        spans.push(Span::styled(self.model.title_name.clone(), title_style));
        spans.push(spaces(title_config.padding.trailing));

        if let Some((image_config, glyph)) = self.icon() {
            if image_config.alignment == IconAlignment::Trailing {
                spans.push(spaces(self.config.image_to_text_padding));
                spans.push(icon_span(image_config, glyph));
            }
        }

        spans.push(spaces(self.config.padding.trailing));
        Line::from(spans)
    }
}

impl Widget for &RoundButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let background = self.config.background_colors.for_state(self.model.selected);

        let inner = if self.is_rounded(area.height) {
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(background));
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };
        buf.set_style(inner, Style::default().bg(background));

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let line = self.content_line();
        let line_width = line.width() as u16;
        let x = inner.x + inner.width.saturating_sub(line_width) / 2;
        let y = inner.y + inner.height.saturating_sub(1) / 2;
        let max_width = inner.right().saturating_sub(x);
        buf.set_line(x, y, &line, max_width);
    }
}
