//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// Buttons along the bottom of the service details modal.
///
/// None of them do anything; they exist to be focused and pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailsAction {
    /// "Start Service" or "Stop Service" depending on status
    #[default]
    ToggleRunning,
    ViewLogs,
    Configure,
}

impl DetailsAction {
    pub const ALL: [DetailsAction; 3] = [
        DetailsAction::ToggleRunning,
        DetailsAction::ViewLogs,
        DetailsAction::Configure,
    ];

    pub fn next(self) -> Self {
        match self {
            DetailsAction::ToggleRunning => DetailsAction::ViewLogs,
            DetailsAction::ViewLogs => DetailsAction::Configure,
            DetailsAction::Configure => DetailsAction::ToggleRunning,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            DetailsAction::ToggleRunning => DetailsAction::Configure,
            DetailsAction::ViewLogs => DetailsAction::ToggleRunning,
            DetailsAction::Configure => DetailsAction::ViewLogs,
        }
    }
}

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Canvas Messages
    // ─────────────────────────────────────────────────────────
    /// A card was clicked: show its details
    SelectService { id: String },
    /// Select whichever card has keyboard focus
    SelectFocusedService,
    /// Move keyboard focus to the next card
    FocusNextService,
    /// Move keyboard focus to the previous card
    FocusPreviousService,

    // ─────────────────────────────────────────────────────────
    // Service Details Messages
    // ─────────────────────────────────────────────────────────
    /// Dismiss the details modal
    CloseServiceDetails,
    /// Move focus to the next action button
    FocusNextAction,
    /// Move focus to the previous action button
    FocusPreviousAction,
    /// Press the focused action button
    PressFocusedAction,
    /// Press a specific action button (mouse)
    PressAction(DetailsAction),

    // ─────────────────────────────────────────────────────────
    // Command Bar Messages
    // ─────────────────────────────────────────────────────────
    /// Give the command bar keyboard focus
    StartCommandInput,
    /// Replace the command bar text
    CommandInput { text: String },
    /// The "Send" button
    SubmitCommand,
    /// Leave the command bar
    CancelCommandInput,

    // ─────────────────────────────────────────────────────────
    // Navbar Messages
    // ─────────────────────────────────────────────────────────
    /// The "Sign In" button
    SignIn,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_action_cycles_forward() {
        let mut action = DetailsAction::default();
        for expected in [
            DetailsAction::ViewLogs,
            DetailsAction::Configure,
            DetailsAction::ToggleRunning,
        ] {
            action = action.next();
            assert_eq!(action, expected);
        }
    }

    #[test]
    fn test_details_action_prev_inverts_next() {
        for action in DetailsAction::ALL {
            assert_eq!(action.next().prev(), action);
        }
    }
}
