//! Toolbox panel listing the component kinds that could be placed

use microdesigner_core::ToolboxEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, palette, styles};

pub struct Toolbox<'a> {
    entries: &'a [ToolboxEntry],
    icons: IconSet,
}

impl<'a> Toolbox<'a> {
    pub fn new(entries: &'a [ToolboxEntry], icons: IconSet) -> Self {
        Self { entries, icons }
    }
}

impl Widget for Toolbox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Line::styled(" Toolbox ", styles::accent_bold()))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        // One entry every other row, starting after a blank row
        for (i, entry) in self.entries.iter().enumerate() {
            let y = inner.y + 1 + (i as u16) * 2;
            if y >= inner.bottom() {
                break;
            }
            let color = styles::category_color(entry.category);
            let line = Line::from(vec![
                Span::raw(" "),
                Span::styled(self.icons.category(entry.category), Style::default().fg(color)),
                Span::raw(" "),
                Span::styled(entry.label, styles::text_primary()),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
