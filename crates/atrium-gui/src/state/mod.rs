//! Application state.
//!
//! - [`AppState`]: root of all state
//! - [`LayoutMode`]: window-width breakpoint between the wide and compact
//!   navigation frames

mod app_state;
mod layout;

pub use app_state::AppState;
pub use layout::{COMPACT_BREAKPOINT, LayoutMode};
