//! Clickable screen regions recorded while drawing a frame
//!
//! The view returns a [`HitRegions`] describing where each interactive
//! element landed. Mouse clicks are resolved against the regions of the most
//! recent frame, so the app crate never sees screen coordinates.

use microdesigner_app::{DetailsAction, Message};
use ratatui::layout::{Position, Rect};

/// Regions of the details modal; while present it captures every click
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalRegions {
    pub area: Rect,
    pub close: Option<Rect>,
    pub actions: Vec<(DetailsAction, Rect)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitRegions {
    pub cards: Vec<(String, Rect)>,
    pub sign_in: Option<Rect>,
    pub send: Option<Rect>,
    pub command_field: Option<Rect>,
    pub modal: Option<ModalRegions>,
}

impl HitRegions {
    /// Message for a left click at (`column`, `row`), if the cell is interactive
    pub fn message_at(&self, column: u16, row: u16) -> Option<Message> {
        let pos = Position::new(column, row);

        // The modal blocks the board underneath, backdrop included
        if let Some(modal) = &self.modal {
            if modal.close.as_ref().is_some_and(|r| r.contains(pos)) {
                return Some(Message::CloseServiceDetails);
            }
            return modal
                .actions
                .iter()
                .find(|(_, rect)| rect.contains(pos))
                .map(|(action, _)| Message::PressAction(*action));
        }

        if let Some((id, _)) = self.cards.iter().find(|(_, rect)| rect.contains(pos)) {
            return Some(Message::SelectService { id: id.clone() });
        }
        if self.sign_in.as_ref().is_some_and(|r| r.contains(pos)) {
            return Some(Message::SignIn);
        }
        if self.send.as_ref().is_some_and(|r| r.contains(pos)) {
            return Some(Message::SubmitCommand);
        }
        if self.command_field.as_ref().is_some_and(|r| r.contains(pos)) {
            return Some(Message::StartCommandInput);
        }
        None
    }
}
