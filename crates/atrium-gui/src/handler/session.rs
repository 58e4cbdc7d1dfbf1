//! User menu and session message handling.

use iced::Task;

use super::MessageHandler;
use crate::message::{Message, SessionMessage};
use crate::state::AppState;

/// Handles the header user menu, appearance toggle, and logout.
pub struct SessionHandler;

impl MessageHandler<SessionMessage> for SessionHandler {
    fn handle(&self, state: &mut AppState, message: SessionMessage) -> Task<Message> {
        match message {
            SessionMessage::MenuToggled => {
                state.user_menu_open = !state.user_menu_open;
            }
            SessionMessage::MenuDismissed => {
                state.user_menu_open = false;
            }
            SessionMessage::AppearanceToggled => {
                state.appearance = state.appearance.toggled();
                tracing::debug!(mode = ?state.appearance, "appearance changed");
            }
            SessionMessage::LoggedOut => {
                state.session.logout();
                state.user_menu_open = false;
            }
        }
        Task::none()
    }
}
