//! Application identity constants.
//!
//! Centralized constants for application metadata used across the codebase.
//! Tenant-facing naming comes from the presentation scope instead; these are
//! the shell's own identity.

/// Application display name (shown when no tenant is active).
pub const APP_NAME: &str = "Atrium";

/// Application identifier (reverse domain notation).
pub const APP_ID: &str = "com.atrium.admin";

/// Application author.
pub const APP_AUTHOR: &str = "Atrium Contributors";

/// Application version from Cargo.toml.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Copyright notice.
pub fn copyright() -> String {
    let year = chrono::Utc::now().format("%Y");
    format!("Copyright {} {}", year, APP_AUTHOR)
}
