//! Semantic style builders.

use microdesigner_core::{ServiceCategory, ServiceStatus};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

/// Section headings inside the details modal
pub fn heading() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Domain mappings ---

/// Color for a service status (green running, red stopped)
pub fn status_color(status: ServiceStatus) -> Color {
    match status {
        ServiceStatus::Running => palette::STATUS_GREEN,
        ServiceStatus::Stopped => palette::STATUS_RED,
    }
}

pub fn category_color(category: ServiceCategory) -> Color {
    match category {
        ServiceCategory::Service => palette::CATEGORY_SERVICE,
        ServiceCategory::Database => palette::CATEGORY_DATABASE,
        ServiceCategory::Gateway => palette::CATEGORY_GATEWAY,
    }
}

/// Pill-shaped badge on a colored background
pub fn badge(color: Color) -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(color)
        .add_modifier(Modifier::BOLD)
}

/// Button text: colored when idle, inverted when focused
pub fn button(color: Color, focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    }
}
