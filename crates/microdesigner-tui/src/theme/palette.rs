//! Color palette.
//!
//! Named colors approximate the light web mockup on a dark terminal.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43); // Modal background
pub const SURFACE: Color = Color::Rgb(22, 27, 34); // Metric boxes, endpoint list

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders
pub const CARD_BORDER: Color = Color::Blue; // Service cards

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;
/// Foreground on colored backgrounds (badges, focused buttons)
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Running
pub const STATUS_RED: Color = Color::Red; // Stopped
pub const STATUS_YELLOW: Color = Color::Yellow; // Key hints

// --- Categories (toolbox and badges) ---
pub const CATEGORY_SERVICE: Color = Color::Blue;
pub const CATEGORY_DATABASE: Color = Color::Green;
pub const CATEGORY_GATEWAY: Color = Color::Magenta;

// --- Buttons ---
pub const BUTTON_PRIMARY: Color = Color::Blue;
pub const BUTTON_NEUTRAL: Color = Color::Gray;

// --- Effects ---
pub const SHADOW: Color = Color::Black;
