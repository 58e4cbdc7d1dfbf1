//! GUI-specific error types.
//!
//! The shell core itself is total (malformed branding degrades through the
//! deriver fallback), so errors only arise at its edges: reading the tenant
//! directory from disk and resolving tenant identifiers.

use std::path::Path;

use thiserror::Error;

/// Shell errors.
///
/// None of these abort the application: configuration errors degrade to the
/// bundled tenant directory, and unknown tenant ids leave the active tenant
/// unchanged. They exist to be logged with context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShellError {
    /// Tenant directory file could not be read.
    #[error("Failed to read tenant directory {path}: {reason}")]
    ConfigRead {
        /// Path that was read.
        path: String,
        /// Description of what went wrong.
        reason: String,
    },

    /// Tenant directory file is not valid TOML for the expected schema.
    #[error("Failed to parse tenant directory {path}: {reason}")]
    ConfigParse {
        /// Path that was parsed.
        path: String,
        /// Description of what went wrong.
        reason: String,
    },

    /// Tenant directory parsed but declares no tenants.
    #[error("Tenant directory {path} declares no tenants")]
    ConfigEmpty {
        /// Path that was loaded.
        path: String,
    },

    /// A tenant id did not resolve against the loaded directory.
    #[error("Unknown tenant: {id}")]
    TenantNotFound {
        /// Identifier that failed to resolve.
        id: String,
    },

    /// Internal error (should not normally occur).
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl ShellError {
    /// Check if this error leaves the shell fully usable.
    ///
    /// Transient errors are logged and otherwise ignored; the shell keeps
    /// its current (or bundled) configuration.
    pub fn is_transient(&self) -> bool {
        !matches!(self, Self::Internal { .. })
    }

    /// Get a user-facing suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ConfigRead { .. } => {
                Some("Check that the tenant directory file exists and is readable.")
            }
            Self::ConfigParse { .. } => {
                Some("Fix the TOML syntax; the bundled tenants are used until then.")
            }
            Self::ConfigEmpty { .. } => Some("Declare at least one [[tenants]] entry."),
            Self::TenantNotFound { .. } => {
                Some("Check the tenant id against the loaded directory.")
            }
            Self::Internal { .. } => None,
        }
    }

    // =========================================================================
    // FACTORY METHODS
    // =========================================================================

    /// Create a config read error from any error source.
    pub fn config_read(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::ConfigRead {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Create a config parse error from any error source.
    pub fn config_parse(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::ConfigParse {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Create an empty-directory error.
    pub fn config_empty(path: &Path) -> Self {
        Self::ConfigEmpty {
            path: path.display().to_string(),
        }
    }

    /// Create an unknown-tenant error.
    pub fn tenant_not_found(id: impl Into<String>) -> Self {
        Self::TenantNotFound { id: id.into() }
    }
}
