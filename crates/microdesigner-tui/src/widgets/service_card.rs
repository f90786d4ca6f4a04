//! A service card on the canvas

use microdesigner_core::ServiceRecord;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

/// Card size in cells, borders included
pub const CARD_WIDTH: u16 = 24;
pub const CARD_HEIGHT: u16 = 4;

pub struct ServiceCard<'a> {
    service: &'a ServiceRecord,
    focused: bool,
    icons: IconSet,
}

impl<'a> ServiceCard<'a> {
    pub fn new(service: &'a ServiceRecord, icons: IconSet) -> Self {
        Self {
            service,
            focused: false,
            icons,
        }
    }

    /// Highlight the card as having keyboard focus
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ServiceCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_type, border_style) = if self.focused {
            (BorderType::Thick, styles::border_active())
        } else {
            (BorderType::Rounded, Style::default().fg(palette::CARD_BORDER))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let name = Line::from(Span::styled(
            self.service.name.as_str(),
            Style::default()
                .fg(palette::TEXT_BRIGHT)
                .add_modifier(Modifier::BOLD),
        ));
        buf.set_line(inner.x + 1, inner.y, &name, inner.width.saturating_sub(1));

        if inner.height > 1 {
            let status = self.service.status;
            let status_line = Line::from(vec![
                Span::styled(
                    self.icons.status(status),
                    Style::default().fg(styles::status_color(status)),
                ),
                Span::raw(" "),
                Span::styled(status.label(), styles::text_secondary()),
            ]);
            buf.set_line(
                inner.x + 1,
                inner.y + 1,
                &status_line,
                inner.width.saturating_sub(1),
            );
        }
    }
}
