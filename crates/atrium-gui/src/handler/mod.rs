//! Message handler architecture.
//!
//! Trait-based handler dispatch that keeps message handling logic out of the
//! main `App` struct: each handler owns one message sub-enum and receives
//! the full application state.

mod nav;
mod session;
mod tenant;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use nav::NavHandler;
pub use session::SessionHandler;
pub use tenant::TenantHandler;

/// Trait for handling messages in the Iced architecture.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Process a message, mutating state and optionally scheduling tasks.
    fn handle(&self, state: &mut AppState, message: M) -> Task<Message>;
}
