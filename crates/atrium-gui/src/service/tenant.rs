//! Tenant directory loading.
//!
//! The directory is read from TOML in the user's config directory (or an
//! explicit override path). A bundled directory is compiled in so the shell
//! always has tenants to start with; disk configuration replaces it once
//! loaded.

use std::path::PathBuf;

use atrium_core::tenant::TenantDirectory;

use crate::constants;
use crate::error::ShellError;

/// Environment variable overriding the tenant directory path.
pub const TENANTS_PATH_ENV: &str = "ATRIUM_TENANTS";

/// Compiled-in tenant directory used until (or instead of) disk config.
const BUNDLED_TENANTS: &str = include_str!("../../assets/tenants.toml");

/// The bundled tenant directory.
pub fn bundled_directory() -> TenantDirectory {
    match toml::from_str(BUNDLED_TENANTS) {
        Ok(directory) => directory,
        Err(err) => {
            // The bundled file ships with the binary; failing to parse it is
            // a build defect, not a runtime condition.
            tracing::error!(error = %err, "bundled tenant directory is invalid");
            TenantDirectory::default()
        }
    }
}

/// Path of the on-disk tenant directory file.
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(TENANTS_PATH_ENV) {
        return PathBuf::from(path);
    }
    directories::ProjectDirs::from("com", "Atrium", constants::APP_NAME)
        .map(|dirs| dirs.config_dir().join("tenants.toml"))
        .unwrap_or_else(|| PathBuf::from("tenants.toml"))
}

/// Load the tenant directory from disk.
///
/// Spawned through `Task::perform` at startup; the result message replaces
/// the bundled directory on success and is logged on failure.
pub async fn load_directory() -> Result<TenantDirectory, ShellError> {
    let path = config_path();

    let content = std::fs::read_to_string(&path)
        .map_err(|err| ShellError::config_read(&path, err))?;

    let directory: TenantDirectory =
        toml::from_str(&content).map_err(|err| ShellError::config_parse(&path, err))?;

    if directory.is_empty() {
        return Err(ShellError::config_empty(&path));
    }

    tracing::info!(
        path = %path.display(),
        tenants = directory.tenants.len(),
        "tenant directory loaded"
    );
    Ok(directory)
}
