//! Navigation chrome message handling.

use iced::Task;

use super::MessageHandler;
use crate::message::{Message, NavMessage};
use crate::state::AppState;

/// Handles sidebar, drawer, and overflow sheet interactions.
///
/// Every transition is total; there is nothing to fail and nothing async to
/// schedule.
pub struct NavHandler;

impl MessageHandler<NavMessage> for NavHandler {
    fn handle(&self, state: &mut AppState, message: NavMessage) -> Task<Message> {
        match message {
            NavMessage::SidebarEntered => state.nav.sidebar.pointer_entered(),
            NavMessage::SidebarExited => state.nav.sidebar.pointer_left(),
            NavMessage::DrawerOpened => state.nav.drawer.open(),
            NavMessage::DrawerDismissed => state.nav.drawer.close(),
            NavMessage::OverflowOpened => state.nav.overflow.open(),
            NavMessage::OverflowDismissed => state.nav.overflow.close(),
        }
        Task::none()
    }
}
