//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` - safe single-width characters that work in all terminals
//! - `IconMode::NerdFonts` - Nerd Font glyphs (requires Nerd Font installed)

use microdesigner_app::config::IconMode;
use microdesigner_core::{ServiceCategory, ServiceStatus};

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn cpu(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f2db}", // nf-fa-microchip
            IconMode::Unicode => "\u{25c8}",   // ◈
        }
    }

    pub fn database(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f1c0}", // nf-fa-database
            IconMode::Unicode => "\u{224b}",   // ≋
        }
    }

    pub fn network(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0e8}", // nf-fa-sitemap
            IconMode::Unicode => "\u{21c4}",   // ⇄
        }
    }

    pub fn play(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f144}", // nf-fa-play_circle
            IconMode::Unicode => "\u{25b6}",   // ▶
        }
    }

    pub fn stop(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f28d}", // nf-fa-stop_circle
            IconMode::Unicode => "\u{25a0}",   // ■
        }
    }

    /// Icon for a service category (toolbox entries)
    pub fn category(&self, category: ServiceCategory) -> &'static str {
        match category {
            ServiceCategory::Service => self.cpu(),
            ServiceCategory::Database => self.database(),
            ServiceCategory::Gateway => self.network(),
        }
    }

    /// Icon for a service status (canvas cards)
    pub fn status(&self, status: ServiceStatus) -> &'static str {
        match status {
            ServiceStatus::Running => self.play(),
            ServiceStatus::Stopped => self.stop(),
        }
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::Unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_unicode_icons_are_single_width() {
        let icons = IconSet::new(IconMode::Unicode);
        for icon in [
            icons.cpu(),
            icons.database(),
            icons.network(),
            icons.play(),
            icons.stop(),
        ] {
            assert_eq!(icon.width(), 1, "icon {icon:?} should be one cell");
        }
    }

    #[test]
    fn test_modes_differ() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.cpu(), nerd.cpu());
        assert_ne!(unicode.play(), nerd.play());
    }

    #[test]
    fn test_category_and_status_mapping() {
        let icons = IconSet::default();
        assert_eq!(icons.category(ServiceCategory::Database), icons.database());
        assert_eq!(icons.status(ServiceStatus::Stopped), icons.stop());
    }
}
