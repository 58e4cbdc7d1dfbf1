//! Reusable UI components for the Atrium shell.
//!
//! Components are plain functions returning `Element<M>`; all state lives in
//! `AppState` and all styling reads `ShellColors`.

pub mod badge;
pub mod icon;
pub mod logo;

pub use badge::count_badge;
pub use icon::module_icon;
pub use logo::tenant_logo;

// Icons: Use iced_fonts::lucide via the icon module's name table.
// Re-export font bytes for convenience (load in main.rs)
pub use iced_fonts::LUCIDE_FONT_BYTES;
