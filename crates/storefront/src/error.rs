//! Unified error handling.
//!
//! Runtime failures inside the widget never reach the shopper: corrupt
//! storage becomes an empty cart, missing regions are skipped, unknown items
//! are no-ops. `AppError` covers what can go wrong while setting the widget
//! up, and is what front ends report.

use thiserror::Error;

use crate::config::ConfigError;
use crate::page::{BindingError, ManifestError};

/// Application-level error type for the storefront widget.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The page manifest could not be read or parsed.
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// The page manifest describes an inconsistent page.
    #[error("Binding error: {0}")]
    Binding(#[from] BindingError),

    /// A control or item named by the caller does not exist on the page.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Marker;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("add-to-cart control for pen".to_string());
        assert_eq!(err.to_string(), "Not found: add-to-cart control for pen");

        let err = AppError::from(BindingError::IncompleteRegion {
            region: "drawer",
            missing: Marker::Overlay,
        });
        assert_eq!(
            err.to_string(),
            "Binding error: drawer is present but data-overlay is missing"
        );
    }
}
