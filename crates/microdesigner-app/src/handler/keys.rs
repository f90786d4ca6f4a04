//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Board => handle_key_board(state, key),
        UiMode::CommandInput => handle_key_command_input(state, key),
        UiMode::ServiceDetails => handle_key_service_details(key),
    }
}

/// Handle key events on the board (no modal open)
fn handle_key_board(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),

        InputKey::Tab | InputKey::Right | InputKey::Down => Some(Message::FocusNextService),
        InputKey::BackTab | InputKey::Left | InputKey::Up => Some(Message::FocusPreviousService),

        InputKey::Enter | InputKey::Char(' ') => Some(Message::SelectFocusedService),

        InputKey::Char('/' | 'i') => Some(Message::StartCommandInput),

        // Digit shortcut selects the card with that id
        InputKey::Char(c) if c.is_ascii_digit() => {
            let id = c.to_string();
            state
                .catalog()
                .find(&id)
                .map(|_| Message::SelectService { id })
        }

        _ => None,
    }
}

/// Handle key events while the command bar has focus
fn handle_key_command_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelCommandInput),

        // "Send" keeps the text; nothing executes it
        InputKey::Enter => Some(Message::SubmitCommand),

        InputKey::Backspace => {
            let mut text = state.command_input.clone();
            text.pop();
            Some(Message::CommandInput { text })
        }

        InputKey::CharCtrl('u') => Some(Message::CommandInput {
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut text = state.command_input.clone();
            text.push(c);
            Some(Message::CommandInput { text })
        }

        _ => None,
    }
}

/// Handle key events while the details modal is open
fn handle_key_service_details(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('x') => Some(Message::CloseServiceDetails),

        InputKey::Right | InputKey::Tab => Some(Message::FocusNextAction),
        InputKey::Left | InputKey::BackTab => Some(Message::FocusPreviousAction),

        InputKey::Enter | InputKey::Char(' ') => Some(Message::PressFocusedAction),

        InputKey::Char('q') => Some(Message::Quit),

        _ => None,
    }
}
