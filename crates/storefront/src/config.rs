//! Widget configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SCHOOL_MART_DATA_DIR` - Directory holding the persisted cart (default: `.school-mart`)
//! - `SCHOOL_MART_PAGE` - Page manifest describing the storefront markup (default: `page.yaml`)

use std::path::PathBuf;

use thiserror::Error;

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = ".school-mart";

/// Default page manifest path.
pub const DEFAULT_PAGE: &str = "page.yaml";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Widget configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Where the file-backed store keeps its entries
    pub data_dir: PathBuf,
    /// Page manifest path
    pub page: PathBuf,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            page: PathBuf::from(DEFAULT_PAGE),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = get_path_or_default(&lookup, "SCHOOL_MART_DATA_DIR", DEFAULT_DATA_DIR)?;
        let page = get_path_or_default(&lookup, "SCHOOL_MART_PAGE", DEFAULT_PAGE)?;
        Ok(Self { data_dir, page })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a path variable with a default value. Set-but-blank is an error.
fn get_path_or_default(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<PathBuf, ConfigError> {
    match lookup(key) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be empty".to_string(),
        )),
        Some(value) => Ok(PathBuf::from(value)),
        None => Ok(PathBuf::from(default)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.data_dir, PathBuf::from(".school-mart"));
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("SCHOOL_MART_DATA_DIR", "/var/lib/mart"),
            ("SCHOOL_MART_PAGE", "pages/home.yaml"),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/mart"));
        assert_eq!(config.page, PathBuf::from("pages/home.yaml"));
    }

    #[test]
    fn test_blank_value_rejected() {
        let err = StorefrontConfig::from_lookup(lookup(&[("SCHOOL_MART_PAGE", "  ")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnvVar("SCHOOL_MART_PAGE".to_string(), "must not be empty".to_string())
        );
    }
}
