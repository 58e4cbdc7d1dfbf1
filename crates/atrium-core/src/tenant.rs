//! Tenant configuration model.
//!
//! A tenant supplies branding (colors, logo, display name) and the set of
//! modules it has enabled. Tenant values are immutable: switching tenants
//! replaces the whole configuration, there are no partial updates.

use serde::{Deserialize, Serialize};

// =============================================================================
// TENANT THEME
// =============================================================================

/// Branding tokens for a single tenant.
///
/// Color tokens are opaque strings (typically 6-hex-digit codes). They are
/// never validated here; derivation applies a fixed fallback for tokens that
/// do not parse (see [`crate::theme::derive_rgb`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantTheme {
    /// Primary brand color token.
    pub primary: String,
    /// Secondary brand color token.
    pub secondary: String,
    /// Accent color token.
    pub accent: String,
    /// Content background color token.
    pub background: String,
    /// Optional logo resource reference (URL or path).
    pub logo_url: Option<String>,
    /// Display name shown in the shell chrome.
    pub app_name: String,
}

impl Default for TenantTheme {
    fn default() -> Self {
        Self {
            primary: "#1b4f72".to_string(),
            secondary: "#2874a6".to_string(),
            accent: "#d4ac0d".to_string(),
            background: "#f4f6f7".to_string(),
            logo_url: None,
            app_name: "Atrium".to_string(),
        }
    }
}

// =============================================================================
// TENANT CONFIGURATION
// =============================================================================

/// One configured tenant: identity, branding, and enabled modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantConfig {
    /// Stable identifier used to select the tenant.
    pub id: String,
    /// Human-readable tenant name.
    pub name: String,
    /// Branding for this tenant.
    #[serde(default)]
    pub theme: TenantTheme,
    /// Module keys this tenant has enabled. Empty means all modules.
    #[serde(default)]
    pub enabled_modules: Vec<String>,
}

impl TenantConfig {
    /// Create a tenant with the given identity and theme, all modules enabled.
    pub fn new(id: impl Into<String>, name: impl Into<String>, theme: TenantTheme) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            theme,
            enabled_modules: Vec::new(),
        }
    }

    /// Restrict the tenant to the given module keys.
    pub fn with_modules<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enabled_modules = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the module with `key` is enabled for this tenant.
    pub fn module_enabled(&self, key: &str) -> bool {
        self.enabled_modules.is_empty() || self.enabled_modules.iter().any(|k| k == key)
    }
}

// =============================================================================
// TENANT DIRECTORY
// =============================================================================

/// The full set of tenants known to the shell.
///
/// Deserialized from TOML. The directory is read-only input: the shell never
/// writes tenant configuration back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantDirectory {
    /// All configured tenants, in declaration order.
    pub tenants: Vec<TenantConfig>,
    /// Identifier of the tenant to activate at startup.
    pub default: Option<String>,
}

impl TenantDirectory {
    /// Look up a tenant by identifier.
    pub fn tenant(&self, id: &str) -> Option<&TenantConfig> {
        self.tenants.iter().find(|t| t.id == id)
    }

    /// The tenant to activate at startup: the configured default if it
    /// resolves, otherwise the first declared tenant.
    pub fn default_tenant(&self) -> Option<&TenantConfig> {
        self.default
            .as_deref()
            .and_then(|id| self.tenant(id))
            .or_else(|| self.tenants.first())
    }

    /// Whether the directory declares no tenants at all.
    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_enabled_empty_list_means_all() {
        let tenant = TenantConfig::new("acme", "Acme", TenantTheme::default());
        assert!(tenant.module_enabled("inventory"));
        assert!(tenant.module_enabled("anything"));
    }

    #[test]
    fn test_module_enabled_respects_list() {
        let tenant = TenantConfig::new("acme", "Acme", TenantTheme::default())
            .with_modules(["inventory", "sales"]);
        assert!(tenant.module_enabled("inventory"));
        assert!(!tenant.module_enabled("analytics"));
    }

    #[test]
    fn test_default_tenant_prefers_configured_id() {
        let directory = TenantDirectory {
            tenants: vec![
                TenantConfig::new("first", "First", TenantTheme::default()),
                TenantConfig::new("second", "Second", TenantTheme::default()),
            ],
            default: Some("second".to_string()),
        };
        assert_eq!(directory.default_tenant().map(|t| t.id.as_str()), Some("second"));
    }

    #[test]
    fn test_default_tenant_falls_back_to_first() {
        let directory = TenantDirectory {
            tenants: vec![TenantConfig::new("only", "Only", TenantTheme::default())],
            default: Some("missing".to_string()),
        };
        assert_eq!(directory.default_tenant().map(|t| t.id.as_str()), Some("only"));
        assert!(TenantDirectory::default().default_tenant().is_none());
    }
}
