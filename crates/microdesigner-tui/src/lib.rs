//! microdesigner-tui - Terminal UI for MicroDesigner
//!
//! This crate provides the ratatui-based board: navbar, command bar, toolbox,
//! canvas of service cards and the service details modal. It drives the
//! [`microdesigner_app`] update loop from terminal key and mouse events.

pub mod event;
pub mod hit_regions;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use hit_regions::HitRegions;
pub use render::view;
pub use runner::run;
