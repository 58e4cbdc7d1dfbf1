//! The process-wide presentation scope and its injector.
//!
//! The scope is a thread-local key→value store of style variables, read by
//! every visual surface at render time. Exactly nine variables exist while a
//! tenant theme is active; they are written by [`ThemeInjector`] and removed
//! again when the injector deactivates or is dropped.
//!
//! Writes are synchronous and complete before the triggering event handler
//! returns, so readers on the owning thread never observe a partially
//! updated variable set.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::tenant::TenantTheme;
use crate::theme::DerivedPresentation;

// =============================================================================
// VARIABLE NAMES
// =============================================================================

/// Primary brand color token.
pub const VAR_PRIMARY: &str = "primary";
/// Secondary brand color token.
pub const VAR_SECONDARY: &str = "secondary";
/// Accent color token.
pub const VAR_ACCENT: &str = "accent";
/// Content background color token.
pub const VAR_BACKGROUND: &str = "background";
/// Primary color as decimal RGB triplet.
pub const VAR_PRIMARY_RGB: &str = "primary-rgb";
/// Secondary color as decimal RGB triplet.
pub const VAR_SECONDARY_RGB: &str = "secondary-rgb";
/// Glow shadow composed from the primary triplet.
pub const VAR_GLOW_SHADOW: &str = "glow-shadow-primary";
/// Logo reference (`none` or `url(...)`).
pub const VAR_LOGO_URL: &str = "logo-url";
/// Quoted application display name.
pub const VAR_APP_NAME: &str = "app-name";

/// All presentation variable names, the complete wire format of the scope.
pub const PRESENTATION_VARS: [&str; 9] = [
    VAR_PRIMARY,
    VAR_SECONDARY,
    VAR_ACCENT,
    VAR_BACKGROUND,
    VAR_PRIMARY_RGB,
    VAR_SECONDARY_RGB,
    VAR_GLOW_SHADOW,
    VAR_LOGO_URL,
    VAR_APP_NAME,
];

thread_local! {
    /// The presentation scope. Empty until an injector activates a theme.
    static SCOPE: RefCell<BTreeMap<String, String>> = RefCell::new(BTreeMap::new());
}

/// Read a presentation variable.
pub fn var(name: &str) -> Option<String> {
    SCOPE.with(|scope| scope.borrow().get(name).cloned())
}

/// Names of all variables currently present, in sorted order.
pub fn active_names() -> Vec<String> {
    SCOPE.with(|scope| scope.borrow().keys().cloned().collect())
}

fn set(name: &str, value: String) {
    SCOPE.with(|scope| {
        scope.borrow_mut().insert(name.to_string(), value);
    });
}

fn remove(name: &str) {
    SCOPE.with(|scope| {
        scope.borrow_mut().remove(name);
    });
}

// =============================================================================
// THEME INJECTOR
// =============================================================================

/// Owns the lifecycle of the nine presentation variables.
///
/// Activation retracts the full variable set before writing the new values,
/// so a variable defined by the previous theme never survives into the next
/// one. Deactivation retracts unconditionally; dropping the injector does
/// the same, which makes the scope mutation a scoped resource released on
/// every exit path.
#[derive(Debug, Default)]
pub struct ThemeInjector {
    active: bool,
}

impl ThemeInjector {
    /// Create an inactive injector. The scope is untouched until
    /// [`activate`](Self::activate) is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a tenant theme to the presentation scope.
    ///
    /// Retraction of the previous variable set always completes before the
    /// first new value is written; there is no interleaving.
    pub fn activate(&mut self, theme: &TenantTheme) {
        for name in PRESENTATION_VARS {
            remove(name);
        }

        let derived = DerivedPresentation::from_theme(theme);
        set(VAR_PRIMARY, theme.primary.clone());
        set(VAR_SECONDARY, theme.secondary.clone());
        set(VAR_ACCENT, theme.accent.clone());
        set(VAR_BACKGROUND, theme.background.clone());
        set(VAR_PRIMARY_RGB, derived.primary_rgb.to_string());
        set(VAR_SECONDARY_RGB, derived.secondary_rgb.to_string());
        set(VAR_GLOW_SHADOW, derived.glow_shadow);
        set(VAR_LOGO_URL, derived.logo.to_string());
        set(VAR_APP_NAME, derived.app_name_literal);

        self.active = true;
        tracing::debug!(app_name = %theme.app_name, "presentation variables injected");
    }

    /// Remove all nine variables from the scope.
    pub fn deactivate(&mut self) {
        for name in PRESENTATION_VARS {
            remove(name);
        }
        if self.active {
            tracing::debug!("presentation variables retracted");
        }
        self.active = false;
    }

    /// Whether a theme is currently applied.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for ThemeInjector {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_empty_without_activation() {
        let injector = ThemeInjector::new();
        assert!(!injector.is_active());
        assert!(var(VAR_PRIMARY).is_none());
    }

    #[test]
    fn test_activate_publishes_all_nine_variables() {
        let mut injector = ThemeInjector::new();
        injector.activate(&TenantTheme::default());

        let names = active_names();
        let mut expected: Vec<String> =
            PRESENTATION_VARS.iter().map(|n| (*n).to_string()).collect();
        expected.sort();
        assert_eq!(names, expected);

        injector.deactivate();
        assert!(active_names().is_empty());
    }
}
