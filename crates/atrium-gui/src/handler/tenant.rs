//! Tenant context message handling.

use iced::Task;

use super::MessageHandler;
use crate::error::ShellError;
use crate::message::{Message, TenantMessage};
use crate::state::AppState;

/// Handles tenant switching.
pub struct TenantHandler;

impl MessageHandler<TenantMessage> for TenantHandler {
    fn handle(&self, state: &mut AppState, message: TenantMessage) -> Task<Message> {
        match message {
            TenantMessage::Switched(id) => {
                if id == state.tenant.id {
                    state.user_menu_open = false;
                } else if let Some(tenant) = state.directory.tenant(&id).cloned() {
                    state.activate_tenant(tenant);
                } else {
                    let err = ShellError::tenant_not_found(id);
                    tracing::warn!(error = %err, "tenant switch ignored");
                }
            }
        }
        Task::none()
    }
}
