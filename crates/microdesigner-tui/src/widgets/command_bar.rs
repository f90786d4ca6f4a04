//! Command input with a Send button
//!
//! Text can be typed and edited, but submitting it does nothing.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthChar;

use crate::theme::{palette, styles};

const PLACEHOLDER: &str = "Enter microservice command...";
const SEND_LABEL: &str = "[ Send ]";
const CURSOR: &str = "▏";

pub struct CommandBar<'a> {
    text: &'a str,
    focused: bool,
}

impl<'a> CommandBar<'a> {
    pub fn new(text: &'a str, focused: bool) -> Self {
        Self { text, focused }
    }

    /// Where the Send button lands when the bar occupies `area`
    pub fn send_area(area: Rect) -> Option<Rect> {
        let inner = styles::glass_block(false).inner(area);
        let width = SEND_LABEL.len() as u16;
        if inner.height == 0 || inner.width < width + 4 {
            return None;
        }
        Some(Rect::new(inner.right() - width - 1, inner.y, width, 1))
    }

    /// The text field, left of the Send button
    pub fn input_area(area: Rect) -> Rect {
        let inner = styles::glass_block(false).inner(area);
        match Self::send_area(area) {
            Some(send) => Rect::new(
                inner.x + 1,
                inner.y,
                send.x.saturating_sub(inner.x + 3),
                inner.height.min(1),
            ),
            None => Rect::new(
                inner.x,
                inner.y,
                inner.width,
                inner.height.min(1),
            ),
        }
    }
}

/// Keep the end of `text` that fits in `width` cells
fn visible_tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).style(Style::default().bg(palette::CARD_BG));
        block.render(area, buf);

        let input = Self::input_area(area);
        if input.width == 0 || input.height == 0 {
            return;
        }

        let line = if self.text.is_empty() {
            let mut spans = Vec::new();
            if self.focused {
                spans.push(Span::styled(CURSOR, styles::accent_bold()));
            }
            spans.push(Span::styled(PLACEHOLDER, styles::text_muted()));
            Line::from(spans)
        } else {
            // Reserve a cell for the cursor while typing
            let room = input.width as usize - usize::from(self.focused);
            let mut spans = vec![Span::styled(
                visible_tail(self.text, room),
                styles::text_primary(),
            )];
            if self.focused {
                spans.push(Span::styled(CURSOR, styles::accent_bold()));
            }
            Line::from(spans)
        };
        buf.set_line(input.x, input.y, &line, input.width);

        if let Some(send) = Self::send_area(area) {
            buf.set_string(
                send.x,
                send.y,
                SEND_LABEL,
                styles::button(palette::BUTTON_PRIMARY, false),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn bar_area() -> Rect {
        Rect::new(0, 0, 80, 3)
    }

    #[test]
    fn test_placeholder_when_empty() {
        let mut term = TestTerminal::new();
        term.render_widget(CommandBar::new("", false), bar_area());

        assert!(term.line_contains(1, "Enter microservice command..."));
        assert!(term.line_contains(1, "[ Send ]"));
    }

    #[test]
    fn test_typed_text_replaces_placeholder() {
        let mut term = TestTerminal::new();
        term.render_widget(CommandBar::new("deploy auth", true), bar_area());

        assert!(term.line_contains(1, "deploy auth▏"));
        assert!(!term.buffer_contains("Enter microservice"));
    }

    #[test]
    fn test_long_text_shows_tail() {
        let mut term = TestTerminal::with_size(30, 3);
        let text = "a-very-long-command-that-cannot-fit-END";
        term.render_widget(CommandBar::new(text, true), Rect::new(0, 0, 30, 3));

        assert!(term.buffer_contains("END▏"));
    }

    #[test]
    fn test_send_area_right_aligned() {
        let send = CommandBar::send_area(bar_area()).unwrap();
        assert_eq!(send.right(), 78);
        assert_eq!(send.y, 1);
    }

    #[test]
    fn test_input_area_left_of_send() {
        let send = CommandBar::send_area(bar_area()).unwrap();
        let input = CommandBar::input_area(bar_area());
        assert!(input.right() < send.x);
        assert_eq!(input.y, send.y);
    }

    #[test]
    fn test_visible_tail() {
        assert_eq!(visible_tail("abcdef", 3), "def");
        assert_eq!(visible_tail("abc", 10), "abc");
        assert_eq!(visible_tail("abc", 0), "");
    }
}
