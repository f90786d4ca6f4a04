//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the navbar (border + title row + border)
pub const NAVBAR_HEIGHT: u16 = 3;

/// Height of the command bar (border + input row + border)
pub const COMMAND_BAR_HEIGHT: u16 = 3;

/// Width of the toolbox panel
pub const TOOLBOX_WIDTH: u16 = 22;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub navbar: Rect,
    pub command_bar: Rect,
    pub toolbox: Rect,
    pub canvas: Rect,
}

/// Create the main screen layout
///
/// Navbar and command bar stack on top; the rest is split into a fixed-width
/// toolbox on the left and the canvas on the right.
pub fn create(area: Rect) -> ScreenAreas {
    let [navbar, command_bar, body] = Layout::vertical([
        Constraint::Length(NAVBAR_HEIGHT),
        Constraint::Length(COMMAND_BAR_HEIGHT),
        Constraint::Min(3),
    ])
    .areas(area);

    let [toolbox, canvas] =
        Layout::horizontal([Constraint::Length(TOOLBOX_WIDTH), Constraint::Min(10)]).areas(body);

    ScreenAreas {
        navbar,
        command_bar,
        toolbox,
        canvas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard_terminal() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.navbar.height, 3);
        assert_eq!(layout.command_bar.y, 3);
        assert_eq!(layout.toolbox.y, 6);
        assert_eq!(layout.toolbox.width, TOOLBOX_WIDTH);
        assert_eq!(layout.canvas.x, TOOLBOX_WIDTH);
        assert_eq!(layout.canvas.width, 80 - TOOLBOX_WIDTH);
        assert_eq!(layout.canvas.height, 18);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create(area);

        assert_eq!(
            layout.navbar.height + layout.command_bar.height + layout.canvas.height,
            area.height
        );
        assert_eq!(layout.toolbox.width + layout.canvas.width, area.width);
        assert_eq!(layout.toolbox.height, layout.canvas.height);
    }
}
