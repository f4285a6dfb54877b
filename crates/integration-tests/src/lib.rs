//! Integration tests for the School Mart cart widget.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p school-mart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `page_reload` - Persistence across widget boots over real files
//! - `cart_scenarios` - Shopper flows driven through UI events
//! - `demo_page` - The shipped page manifest boots cleanly

use std::path::Path;

use school_mart_storefront::CartWidget;
use school_mart_storefront::page::PageManifest;
use school_mart_storefront::store::FileStore;
use tempfile::TempDir;

/// The page manifest shipped at the repository root.
pub const DEMO_PAGE: &str = include_str!("../../../page.yaml");

/// A throwaway data directory plus the page a widget boots on.
pub struct TestPage {
    pub dir: TempDir,
    pub manifest: PageManifest,
}

impl TestPage {
    /// A fresh page over an empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temp dir cannot be created or `yaml` is invalid.
    #[must_use]
    pub fn new(yaml: &str) -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
            manifest: PageManifest::from_yaml(yaml).expect("valid manifest"),
        }
    }

    /// The shipped demo page.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(DEMO_PAGE)
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Simulate a page load: boot a new widget over the same data directory.
    ///
    /// # Panics
    ///
    /// Panics if the manifest fails to bind.
    #[must_use]
    pub fn load(&self) -> CartWidget<FileStore> {
        CartWidget::boot(&self.manifest, FileStore::new(self.data_dir())).expect("page binds")
    }
}
