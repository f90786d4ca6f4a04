//! Error type shared by the MicroDesigner crates

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while loading settings, driving the
/// terminal or looking up catalog entries
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal side effects other than setup and teardown (signal handlers)
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    #[error("Failed to restore terminal: {0}")]
    TerminalRestore(String),

    #[error("Settings file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid settings: {message}")]
    ConfigInvalid { message: String },

    #[error("No service with id '{id}' in the catalog")]
    UnknownService { id: String },
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn unknown_service(id: impl Into<String>) -> Self {
        Self::UnknownService { id: id.into() }
    }

    /// The board keeps running: settings fall back to defaults and
    /// unknown ids leave the selection alone
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::ConfigNotFound { .. }
                | Error::ConfigInvalid { .. }
                | Error::UnknownService { .. }
        )
    }

    /// The terminal is unusable, so the app must exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_) | Error::TerminalRestore(_))
    }
}

/// Log-and-convert helpers for fallible calls
///
/// The context string goes to the log file only; the returned error keeps
/// its original variant so callers can still match on it.
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Like [`ResultExt::context`], but only builds the message on failure
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::terminal("raw mode unavailable");
        assert_eq!(err.to_string(), "Terminal error: raw mode unavailable");

        let err = Error::unknown_service("42");
        assert_eq!(err.to_string(), "No service with id '42' in the catalog");

        let err = Error::config_invalid("icons = 3");
        assert_eq!(err.to_string(), "Invalid settings: icons = 3");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_terminal_setup_failures_are_fatal() {
        assert!(Error::TerminalInit("no tty".into()).is_fatal());
        assert!(Error::TerminalRestore("stdout closed".into()).is_fatal());
        assert!(!Error::terminal("no SIGTERM").is_fatal());
        assert!(!Error::unknown_service("9").is_fatal());
    }

    #[test]
    fn test_settings_and_lookup_failures_are_recoverable() {
        assert!(Error::config_not_found("/tmp/md.toml").is_recoverable());
        assert!(Error::config_invalid("icons = 3").is_recoverable());
        assert!(Error::unknown_service("9").is_recoverable());
        assert!(!Error::TerminalInit("no tty".into()).is_recoverable());
    }

    #[test]
    fn test_config_not_found_mentions_path() {
        let err = Error::config_not_found("/tmp/missing.toml");
        assert!(err.to_string().contains("/tmp/missing.toml"));
    }

    #[test]
    fn test_context_preserves_error_variant() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("Failed to create log directory").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_with_context_is_lazy_on_success() {
        let res: std::result::Result<u8, Error> = Ok(7);
        let value = res
            .with_context(|| panic!("context closure must not run on Ok"))
            .unwrap();
        assert_eq!(value, 7);
    }
}
