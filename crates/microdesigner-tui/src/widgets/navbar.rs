//! Navbar with the brand and the (inert) Sign In button

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, palette, styles};

const SIGN_IN_LABEL: &str = "[ Sign In ]";

/// Cells taken by " <icon> MicroDesigner"
const BRAND_WIDTH: u16 = 16;

/// Top bar: brand on the left, Sign In on the right
pub struct Navbar {
    icons: IconSet,
}

impl Navbar {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    /// Where the Sign In button lands when the navbar occupies `area`
    pub fn sign_in_area(area: Rect) -> Option<Rect> {
        let inner = styles::glass_block(false).inner(area);
        let width = SIGN_IN_LABEL.len() as u16;
        if inner.height == 0 || inner.width < BRAND_WIDTH + width + 2 {
            return None;
        }
        Some(Rect::new(inner.right() - width - 1, inner.y, width, 1))
    }
}

impl Widget for Navbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let brand = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.cpu(), Style::default().fg(palette::CATEGORY_SERVICE)),
            Span::raw(" "),
            Span::styled("MicroDesigner", styles::accent_bold()),
        ]);
        buf.set_line(inner.x, inner.y, &brand, inner.width);

        if let Some(button) = Self::sign_in_area(area) {
            buf.set_string(
                button.x,
                button.y,
                SIGN_IN_LABEL,
                styles::button(palette::BUTTON_PRIMARY, false),
            );
        }
    }
}
