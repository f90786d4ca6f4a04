//! Main update function - handles state transitions (TEA pattern)

use crate::message::{DetailsAction, Message};
use crate::state::{AppState, UiMode};
use microdesigner_core::prelude::*;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            info!("Quit requested");
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        // Nothing animates
        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Canvas Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectService { id } => {
            if state.select_service(&id) {
                debug!("Selected service {}", id);
            } else {
                warn!("{}", Error::unknown_service(id));
            }
            UpdateResult::none()
        }

        Message::SelectFocusedService => match state.focused_service() {
            Some(service) => UpdateResult::message(Message::SelectService {
                id: service.id.clone(),
            }),
            None => UpdateResult::none(),
        },

        Message::FocusNextService => {
            state.focus_next_service();
            UpdateResult::none()
        }

        Message::FocusPreviousService => {
            state.focus_previous_service();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Service Details Messages
        // ─────────────────────────────────────────────────────────
        Message::CloseServiceDetails => {
            state.clear_selection();
            UpdateResult::none()
        }

        Message::FocusNextAction => {
            if state.ui_mode == UiMode::ServiceDetails {
                state.focused_action = state.focused_action.next();
            }
            UpdateResult::none()
        }

        Message::FocusPreviousAction => {
            if state.ui_mode == UiMode::ServiceDetails {
                state.focused_action = state.focused_action.prev();
            }
            UpdateResult::none()
        }

        Message::PressFocusedAction => {
            UpdateResult::message(Message::PressAction(state.focused_action))
        }

        Message::PressAction(action) => {
            press_action(state, action);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Command Bar Messages
        // ─────────────────────────────────────────────────────────
        Message::StartCommandInput => {
            if state.ui_mode == UiMode::Board {
                state.ui_mode = UiMode::CommandInput;
            }
            UpdateResult::none()
        }

        Message::CommandInput { text } => {
            state.command_input = text;
            UpdateResult::none()
        }

        Message::SubmitCommand => {
            debug!(
                "Send pressed with command {:?}; command execution is not available",
                state.command_input
            );
            UpdateResult::none()
        }

        Message::CancelCommandInput => {
            if state.ui_mode == UiMode::CommandInput {
                state.ui_mode = UiMode::Board;
            }
            UpdateResult::none()
        }

        Message::SignIn => {
            debug!("Sign In pressed; accounts are not available");
            UpdateResult::none()
        }
    }
}

/// Action buttons are placeholders: log and leave state untouched
fn press_action(state: &AppState, action: DetailsAction) {
    let Some(service) = state.selected_service() else {
        return;
    };

    let label = match action {
        DetailsAction::ToggleRunning => service.status.toggle_label(),
        DetailsAction::ViewLogs => "View Logs",
        DetailsAction::Configure => "Configure",
    };
    debug!("'{}' pressed for {}; no action is wired", label, service.name);
}
