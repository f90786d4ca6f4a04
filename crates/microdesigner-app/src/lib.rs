//! microdesigner-app - Application state and update logic for MicroDesigner
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the model ([`AppState`]), the [`Message`] vocabulary, and the
//! [`handler::update`] function. It also owns configuration loading and OS
//! signal handling. Nothing here depends on a terminal library.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::{DetailsAction, Message};
pub use process::process_message;
pub use state::{AppState, UiMode};
