//! Navigation entries and interaction state machines.
//!
//! Three independent binary state machines govern the shell's navigation
//! surfaces: sidebar hover-expansion, the slide-over drawer, and the tab
//! bar's overflow sheet. Every transition is a total function over a finite
//! state space; none of them can fail.
//!
//! Which entry is *active* is never part of this state: it is recomputed
//! from the current path on every render (see [`crate::route::is_active`]),
//! so the highlight cannot diverge from the path.

use crate::route::is_active;
use crate::tenant::TenantConfig;

/// Sidebar width while collapsed, in logical pixels.
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 72.0;

/// Sidebar width while hover-expanded, in logical pixels.
pub const SIDEBAR_EXPANDED_WIDTH: f32 = 256.0;

/// Tab slots in the bounded-width tab bar, including the "More" trigger.
pub const MAX_VISIBLE_TABS: usize = 5;

/// Entries rendered directly when the tab bar overflows.
pub const MAX_DIRECT_TABS: usize = 4;

// =============================================================================
// MODULE ENTRIES
// =============================================================================

/// Classification of a registry module.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    /// Part of the base product.
    #[default]
    Core,
    /// Optional add-on module.
    Addon,
}

/// One navigable destination supplied by the module registry.
///
/// Registry order is significant: it defines sidebar order and tab-bar
/// priority. Paths are unique within the registry and carry no trailing
/// separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEntry {
    /// Stable module key, referenced by tenant `enabled_modules`.
    pub key: String,
    /// Route path for this module.
    pub path: String,
    /// Display label.
    pub label: String,
    /// Icon name, resolved by the rendering surface's icon table.
    pub icon: String,
    /// Optional count badge; rendered only when greater than zero.
    pub badge: Option<u32>,
    /// Module classification.
    pub kind: ModuleKind,
}

impl ModuleEntry {
    /// Create a core module entry without a badge.
    pub fn new(
        key: impl Into<String>,
        path: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
            label: label.into(),
            icon: icon.into(),
            badge: None,
            kind: ModuleKind::Core,
        }
    }

    /// Attach a count badge.
    pub fn with_badge(mut self, badge: u32) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Mark the entry as an add-on module.
    pub fn addon(mut self) -> Self {
        self.kind = ModuleKind::Addon;
        self
    }

    /// Whether this entry is highlighted for the current path.
    pub fn is_active(&self, current_path: &str) -> bool {
        is_active(current_path, &self.path)
    }
}

/// Entries from `registry` that `tenant` has enabled, in registry order.
///
/// Unknown keys in the tenant configuration are ignored; an empty
/// enabled-module list enables everything.
pub fn enabled_entries(registry: &[ModuleEntry], tenant: &TenantConfig) -> Vec<ModuleEntry> {
    registry
        .iter()
        .filter(|entry| tenant.module_enabled(&entry.key))
        .cloned()
        .collect()
}

/// The landing path for a tenant: its first enabled module, falling back to
/// the registry's first entry, then `/`.
pub fn first_enabled_path(registry: &[ModuleEntry], tenant: &TenantConfig) -> String {
    registry
        .iter()
        .find(|entry| tenant.module_enabled(&entry.key))
        .or_else(|| registry.first())
        .map(|entry| entry.path.clone())
        .unwrap_or_else(|| "/".to_string())
}

// =============================================================================
// SIDEBAR HOVER-EXPANSION
// =============================================================================

/// Desktop sidebar expansion state.
///
/// Driven purely by pointer enter/leave over the sidebar region; no other
/// event changes it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SidebarState {
    /// Narrow rail showing icons only.
    #[default]
    Collapsed,
    /// Wide rail showing icons and labels.
    Expanded,
}

impl SidebarState {
    /// Pointer entered the sidebar region.
    pub fn pointer_entered(&mut self) {
        *self = Self::Expanded;
    }

    /// Pointer left the sidebar region.
    pub fn pointer_left(&mut self) {
        *self = Self::Collapsed;
    }

    /// Whether the sidebar is currently expanded.
    pub fn is_expanded(&self) -> bool {
        matches!(self, Self::Expanded)
    }

    /// Sidebar width for the current state.
    pub fn width(&self) -> f32 {
        match self {
            Self::Collapsed => SIDEBAR_COLLAPSED_WIDTH,
            Self::Expanded => SIDEBAR_EXPANDED_WIDTH,
        }
    }
}

// =============================================================================
// DRAWER
// =============================================================================

/// Slide-over drawer state for narrow layouts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    /// Open the drawer (menu trigger).
    pub fn open(&mut self) {
        *self = Self::Open;
    }

    /// Close the drawer (backdrop, escape key, or navigation).
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Whether the drawer is open.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

// =============================================================================
// OVERFLOW SHEET
// =============================================================================

/// Overflow sheet state for the bounded-width tab bar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OverflowState {
    #[default]
    Closed,
    Open,
}

impl OverflowState {
    /// Open the sheet ("More" trigger).
    pub fn open(&mut self) {
        *self = Self::Open;
    }

    /// Close the sheet (dismissal or navigation).
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Whether the sheet is open.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

// =============================================================================
// COMBINED NAVIGATION STATE
// =============================================================================

/// All interaction state owned by the navigation frame.
///
/// Created when the shell mounts and discarded with it. Path changes do not
/// reset it; the axes are independent of each other and of the route.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavigationUiState {
    /// Sidebar hover-expansion (wide layout).
    pub sidebar: SidebarState,
    /// Slide-over drawer (narrow layout).
    pub drawer: DrawerState,
    /// Tab-bar overflow sheet (narrow layout).
    pub overflow: OverflowState,
}

impl NavigationUiState {
    /// Fresh state: collapsed sidebar, everything closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Dismiss any open overlay.
    ///
    /// Selecting a destination dismisses whichever overlay hosted it; drawer
    /// and overflow sheet share this single transition so the two cannot
    /// drift apart.
    pub fn dismiss_overlays(&mut self) {
        self.drawer.close();
        self.overflow.close();
    }

    /// Whether any overlay is currently open.
    pub fn has_open_overlay(&self) -> bool {
        self.drawer.is_open() || self.overflow.is_open()
    }
}

// =============================================================================
// TAB BAR LAYOUT
// =============================================================================

/// Partition of the entry list for the bounded-width tab bar.
///
/// With [`MAX_VISIBLE_TABS`] or fewer entries everything renders directly
/// and no "More" trigger exists. Beyond that, the first [`MAX_DIRECT_TABS`]
/// entries render directly and the rest move to the overflow sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabLayout<'a> {
    /// Entries rendered directly in the tab bar.
    pub direct: &'a [ModuleEntry],
    /// Entries placed in the overflow sheet.
    pub overflow: &'a [ModuleEntry],
}

impl<'a> TabLayout<'a> {
    /// Split an entry list into direct and overflowed entries.
    pub fn split(entries: &'a [ModuleEntry]) -> Self {
        if entries.len() > MAX_VISIBLE_TABS {
            Self {
                direct: &entries[..MAX_DIRECT_TABS],
                overflow: &entries[MAX_DIRECT_TABS..],
            }
        } else {
            Self {
                direct: entries,
                overflow: &[],
            }
        }
    }

    /// Whether a "More" trigger is needed.
    pub fn has_overflow(&self) -> bool {
        !self.overflow.is_empty()
    }

    /// Whether the "More" trigger shows the active indicator.
    ///
    /// True when any overflowed entry matches the current path, even though
    /// none of their labels is directly visible.
    pub fn overflow_active(&self, current_path: &str) -> bool {
        self.overflow.iter().any(|e| e.is_active(current_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tenant::TenantTheme;

    fn entries(count: usize) -> Vec<ModuleEntry> {
        (0..count)
            .map(|i| {
                ModuleEntry::new(
                    format!("mod{i}"),
                    format!("/mod{i}"),
                    format!("Module {i}"),
                    "circle",
                )
            })
            .collect()
    }

    #[test]
    fn test_sidebar_starts_collapsed_and_follows_pointer() {
        let mut sidebar = SidebarState::default();
        assert!(!sidebar.is_expanded());
        assert_eq!(sidebar.width(), SIDEBAR_COLLAPSED_WIDTH);

        sidebar.pointer_entered();
        assert!(sidebar.is_expanded());
        assert_eq!(sidebar.width(), SIDEBAR_EXPANDED_WIDTH);

        sidebar.pointer_left();
        assert!(!sidebar.is_expanded());
    }

    #[test]
    fn test_sidebar_transitions_are_idempotent() {
        let mut sidebar = SidebarState::default();
        sidebar.pointer_entered();
        sidebar.pointer_entered();
        assert!(sidebar.is_expanded());
        sidebar.pointer_left();
        sidebar.pointer_left();
        assert!(!sidebar.is_expanded());
    }

    #[test]
    fn test_dismiss_overlays_closes_both_in_one_step() {
        let mut nav = NavigationUiState::new();
        nav.drawer.open();
        nav.overflow.open();
        assert!(nav.has_open_overlay());

        nav.dismiss_overlays();
        assert!(!nav.drawer.is_open());
        assert!(!nav.overflow.is_open());
        assert!(!nav.has_open_overlay());
    }

    #[test]
    fn test_tab_layout_no_overflow_at_five_entries() {
        let list = entries(5);
        let layout = TabLayout::split(&list);
        assert_eq!(layout.direct.len(), 5);
        assert!(!layout.has_overflow());
    }

    #[test]
    fn test_tab_layout_overflow_above_five_entries() {
        let list = entries(13);
        let layout = TabLayout::split(&list);
        assert_eq!(layout.direct.len(), 4);
        assert_eq!(layout.overflow.len(), 9);
        assert!(layout.has_overflow());
    }

    #[test]
    fn test_empty_entry_list_renders_nothing() {
        let layout = TabLayout::split(&[]);
        assert!(layout.direct.is_empty());
        assert!(!layout.has_overflow());
        assert!(!layout.overflow_active("/anything"));
    }

    #[test]
    fn test_enabled_entries_preserve_registry_order() {
        let registry = entries(4);
        let tenant = TenantConfig::new("t", "T", TenantTheme::default())
            .with_modules(["mod3", "mod1", "unknown"]);
        let enabled = enabled_entries(&registry, &tenant);
        let keys: Vec<&str> = enabled.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["mod1", "mod3"]);
    }

    #[test]
    fn test_first_enabled_path_falls_back() {
        let registry = entries(3);
        let restricted =
            TenantConfig::new("t", "T", TenantTheme::default()).with_modules(["mod2"]);
        assert_eq!(first_enabled_path(&registry, &restricted), "/mod2");

        let unrestricted = TenantConfig::new("t", "T", TenantTheme::default());
        assert_eq!(first_enabled_path(&registry, &unrestricted), "/mod0");

        assert_eq!(first_enabled_path(&[], &unrestricted), "/");
    }
}
