//! Theme module for the Atrium shell.
//!
//! Tenant brand colors are not configured here: they are read back from the
//! process-wide presentation scope that the theme injector maintains (see
//! `atrium_core::scope`). This module bridges those variables to Iced:
//!
//! - Pre-resolved color struct (`resolved`) built fresh at render time
//! - Light/dark appearance of the neutral, non-tenant surfaces
//! - Spacing constants (`spacing`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::theme::ShellColors;
//!
//! let c = ShellColors::resolve(state.appearance);
//! text("Hello").color(c.text_primary)
//! ```

pub mod resolved;
pub mod spacing;

pub use resolved::ShellColors;

pub use spacing::{
    AVATAR_SIZE, BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM,
    DRAWER_WIDTH, HEADER_HEIGHT, ICON_SIZE_MD, ICON_SIZE_SM, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XL, SPACING_XS, USER_MENU_WIDTH,
};

use iced::Theme;
use iced::theme::Palette;

// =============================================================================
// APPEARANCE MODE
// =============================================================================

/// Light/dark appearance of the neutral surfaces.
///
/// Tenant brand colors are unaffected; only text, surfaces, and borders
/// switch. Session-local, never persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum AppearanceMode {
    #[default]
    Light,
    Dark,
}

impl AppearanceMode {
    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether dark mode is active.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

// =============================================================================
// THEME CREATION
// =============================================================================

/// Build the Iced theme from the active tenant's presentation variables.
///
/// Called on every `App::theme` invocation, so a tenant switch is reflected
/// without any cached theme to invalidate.
pub fn shell_theme(mode: AppearanceMode) -> Theme {
    let c = ShellColors::resolve(mode);
    let name = format!("{} ({})", c.app_name, mode.label());

    Theme::custom(
        name,
        Palette {
            background: c.surface,
            text: c.text_primary,
            primary: c.primary,
            success: c.success,
            warning: c.warning,
            danger: c.danger,
        },
    )
}
