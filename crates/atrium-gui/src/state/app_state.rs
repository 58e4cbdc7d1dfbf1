//! Application-level state.
//!
//! This module contains `AppState` which is the root of all state.

use atrium_core::nav::{ModuleEntry, NavigationUiState, enabled_entries, first_enabled_path};
use atrium_core::scope::ThemeInjector;
use atrium_core::tenant::{TenantConfig, TenantDirectory, TenantTheme};

use super::LayoutMode;
use crate::registry;
use crate::session::UserSession;
use crate::theme::AppearanceMode;

/// Top-level application state.
///
/// Navigation UI state lives for the shell's mounted lifetime: path changes
/// never reset it. The theme injector is owned here so that dropping the
/// state (shell teardown) retracts the presentation variables on every exit
/// path.
pub struct AppState {
    /// All tenants known to the shell.
    pub directory: TenantDirectory,
    /// The active tenant.
    pub tenant: TenantConfig,
    /// Presentation scope injector for the active tenant's theme.
    pub injector: ThemeInjector,
    /// Modules the active tenant has enabled, in registry order.
    pub entries: Vec<ModuleEntry>,
    /// Current route path.
    pub current_path: String,
    /// Navigation chrome interaction state.
    pub nav: NavigationUiState,
    /// Wide or compact frame, derived from the window width.
    pub layout: LayoutMode,
    /// Light/dark appearance of the neutral surfaces.
    pub appearance: AppearanceMode,
    /// Signed-in user display data.
    pub session: UserSession,
    /// Whether the header user menu is open.
    pub user_menu_open: bool,
    /// Unread notification count shown on the bell (0 hides the badge).
    pub notifications: u32,
}

impl AppState {
    /// Create the initial state from a tenant directory.
    ///
    /// Activates the directory's default tenant immediately so the first
    /// frame renders fully themed.
    pub fn bootstrap(directory: TenantDirectory) -> Self {
        let tenant = directory
            .default_tenant()
            .cloned()
            .unwrap_or_else(|| TenantConfig::new("default", "Default", TenantTheme::default()));

        let mut state = Self {
            directory,
            tenant: tenant.clone(),
            injector: ThemeInjector::new(),
            entries: Vec::new(),
            current_path: String::new(),
            nav: NavigationUiState::new(),
            layout: LayoutMode::default(),
            appearance: AppearanceMode::default(),
            // Display data normally comes from the auth collaborator; a
            // fixed session stands in for it.
            session: UserSession::new("Maria Gonzalez", "maria@example.com"),
            user_menu_open: false,
            notifications: 0,
        };
        state.activate_tenant(tenant);
        state
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Navigate to a path.
    ///
    /// Selecting a destination dismisses whichever overlay hosted it, in the
    /// same logical step as the route change.
    pub fn navigate(&mut self, path: String) {
        tracing::debug!(%path, "navigate");
        self.current_path = path;
        self.nav.dismiss_overlays();
        self.user_menu_open = false;
    }

    /// The enabled entry matching the current path, if any.
    pub fn active_entry(&self) -> Option<&ModuleEntry> {
        self.entries.iter().find(|e| e.is_active(&self.current_path))
    }

    /// Re-derive the layout mode after a window resize.
    ///
    /// Overlays belong to the compact frame; leaving it dismisses them.
    pub fn set_layout_from_width(&mut self, width: f32) {
        let mode = LayoutMode::from_width(width);
        if mode != self.layout {
            tracing::debug!(?mode, width, "layout mode changed");
            self.layout = mode;
            if !mode.is_compact() {
                self.nav.dismiss_overlays();
            }
        }
    }

    // ========================================================================
    // Tenant context
    // ========================================================================

    /// Make `tenant` the active tenant.
    ///
    /// Re-runs the theme injector (old variables are retracted before the
    /// new set is written), recomputes the enabled module list, and moves to
    /// the tenant's landing path when the current one is not available.
    pub fn activate_tenant(&mut self, tenant: TenantConfig) {
        tracing::info!(tenant = %tenant.id, "activating tenant");
        self.injector.activate(&tenant.theme);

        let all = registry::modules();
        self.entries = enabled_entries(&all, &tenant);

        let current_available = self
            .entries
            .iter()
            .any(|e| e.is_active(&self.current_path))
            || self.current_path == registry::PROFILE_PATH;
        if !current_available {
            self.current_path = first_enabled_path(&all, &tenant);
        }

        self.tenant = tenant;
        self.user_menu_open = false;
    }

    /// Replace the tenant directory (after the on-disk file finished
    /// loading), keeping the active tenant when it still exists.
    pub fn adopt_directory(&mut self, directory: TenantDirectory) {
        let next = directory
            .tenant(&self.tenant.id)
            .or_else(|| directory.default_tenant())
            .cloned();
        self.directory = directory;
        if let Some(tenant) = next {
            self.activate_tenant(tenant);
        }
    }
}
