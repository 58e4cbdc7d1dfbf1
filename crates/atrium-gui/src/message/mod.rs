//! Message module for the Atrium shell.
//!
//! This module defines the message hierarchy for the Elm-style architecture.
//! All user interactions and events flow through these message types.

use atrium_core::tenant::TenantDirectory;
use iced::Size;
use iced::keyboard;

/// Root message enum for the application.
///
/// All user interactions and system events are represented as variants of
/// this enum. The `update` function processes these messages to modify
/// application state.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Navigate to a route path. Dismisses any open overlay.
    Navigate(String),

    /// Navigation chrome interactions (sidebar, drawer, overflow sheet)
    Nav(NavMessage),

    // =========================================================================
    // Tenant context
    // =========================================================================
    /// Tenant context interactions
    Tenant(TenantMessage),

    // =========================================================================
    // Session / header
    // =========================================================================
    /// User menu and session interactions
    Session(SessionMessage),

    // =========================================================================
    // Background task results
    // =========================================================================
    /// Tenant directory loading completed
    TenantsLoaded(Result<TenantDirectory, String>),

    // =========================================================================
    // Global events
    // =========================================================================
    /// Keyboard event
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// The window was resized; drives the layout breakpoint
    WindowResized(Size),

    /// No operation - used for placeholder actions
    Noop,
}

/// Interactions with the navigation chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMessage {
    /// Pointer entered the sidebar region (expands it).
    SidebarEntered,
    /// Pointer left the sidebar region (collapses it).
    SidebarExited,
    /// Menu button pressed; opens the drawer.
    DrawerOpened,
    /// Backdrop pressed or close requested; closes the drawer.
    DrawerDismissed,
    /// "More" trigger pressed; opens the overflow sheet.
    OverflowOpened,
    /// Backdrop pressed or close requested; closes the overflow sheet.
    OverflowDismissed,
}

/// Tenant context changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenantMessage {
    /// A tenant was selected in the user menu.
    Switched(String),
}

/// User menu and session actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMessage {
    /// Avatar pressed; toggles the user menu.
    MenuToggled,
    /// Backdrop pressed; closes the user menu.
    MenuDismissed,
    /// Light/dark appearance toggle pressed.
    AppearanceToggled,
    /// Sign-out selected in the user menu.
    LoggedOut,
}
