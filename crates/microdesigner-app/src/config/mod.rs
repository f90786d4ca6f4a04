//! Configuration file parsing for MicroDesigner
//!
//! Supports `.microdesigner/config.toml` (per directory) and
//! `<config dir>/microdesigner/config.toml` (per user).

pub mod settings;
pub mod types;

pub use settings::{find_settings_file, load_settings, read_settings, CONFIG_DIR, CONFIG_FILENAME};
pub use types::*;
