//! Canvas holding service cards at fixed positions

use microdesigner_app::AppState;
use microdesigner_core::canvas_position;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use super::service_card::{ServiceCard, CARD_HEIGHT, CARD_WIDTH};
use crate::theme::{icons::IconSet, palette, styles};

/// Interior of the canvas border
pub fn canvas_inner(area: Rect) -> Rect {
    styles::glass_block(false).inner(area)
}

/// Screen rect of the card for `id`, clipped to the canvas interior.
///
/// `None` when the card falls entirely outside the canvas.
pub fn card_area(canvas: Rect, id: &str) -> Option<Rect> {
    let inner = canvas_inner(canvas);
    let pos = canvas_position(id);
    let card = Rect::new(
        inner.x.saturating_add(pos.x),
        inner.y.saturating_add(pos.y),
        CARD_WIDTH,
        CARD_HEIGHT,
    );
    let visible = card.intersection(inner);
    (!visible.is_empty()).then_some(visible)
}

pub struct Canvas<'a> {
    state: &'a AppState,
    icons: IconSet,
    show_hints: bool,
}

impl<'a> Canvas<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self {
            state,
            icons,
            show_hints: state.settings.ui.show_key_hints,
        }
    }

    fn hint_line() -> Line<'static> {
        Line::from(vec![
            Span::styled(" Tab", styles::keybinding()),
            Span::styled(" focus  ", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" open  ", styles::text_muted()),
            Span::styled("/", styles::keybinding()),
            Span::styled(" command  ", styles::text_muted()),
            Span::styled("q", styles::keybinding()),
            Span::styled(" quit", styles::text_muted()),
        ])
    }
}

impl Widget for Canvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Line::styled(" Canvas ", styles::accent_bold()))
            .style(Style::default().bg(palette::DEEPEST_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.is_empty() {
            return;
        }

        let mut cards_bottom = inner.y;
        for service in self.state.catalog().iter() {
            if let Some(card) = card_area(area, &service.id) {
                ServiceCard::new(service, self.icons)
                    .focused(self.state.is_focused(&service.id))
                    .render(card, buf);
                cards_bottom = cards_bottom.max(card.bottom());
            }
        }

        // The hint never covers a card
        let hint_y = inner.bottom() - 1;
        if self.show_hints && hint_y >= cards_bottom {
            buf.set_line(inner.x, hint_y, &Self::hint_line(), inner.width);
        }
    }
}
