//! CLI commands.
//!
//! - `cart` - Single interactions (add, inc, dec, remove, clear, show, quick view)
//! - `replay` - Scripted sessions

pub mod cart;
pub mod replay;

use std::path::PathBuf;

use school_mart_storefront::config::StorefrontConfig;
use school_mart_storefront::page::{PageManifest, Surface};
use school_mart_storefront::store::FileStore;
use school_mart_storefront::{AppError, CartWidget};

/// One page load: a widget booted over the file-backed store.
pub struct PageSession {
    pub widget: CartWidget<FileStore>,
}

impl PageSession {
    /// Load config, read the manifest and boot the widget.
    ///
    /// # Errors
    ///
    /// Returns `AppError` if configuration, the manifest or its bindings are
    /// invalid.
    pub fn open(page: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<Self, AppError> {
        let mut config = StorefrontConfig::from_env()?;
        if let Some(page) = page {
            config.page = page;
        }
        if let Some(data_dir) = data_dir {
            config.data_dir = data_dir;
        }
        tracing::debug!(?config, "Loaded configuration");

        let manifest = PageManifest::from_file(&config.page)?;
        let widget = CartWidget::boot(&manifest, FileStore::new(config.data_dir.clone()))?;
        Ok(Self { widget })
    }

    /// Print the page state to stdout.
    pub fn print(&self) {
        print_surface(self.widget.surface());
    }
}

#[allow(clippy::print_stdout)]
fn print_surface(surface: &Surface) {
    println!("badges: {}", surface.badges.join(" "));
    println!(
        "drawer: {}",
        if surface.drawer_open { "open" } else { "closed" }
    );
    if let Some(dropdown) = &surface.open_dropdown {
        println!("dropdown: {dropdown}");
    }
    if surface.modal.shown {
        println!("quick view: {} ({})", surface.modal.title, surface.modal.price);
        if !surface.modal.description.is_empty() {
            println!("  {}", surface.modal.description);
        }
        println!("  background-image: {}", surface.modal.image);
    }
    if surface.drawer_open {
        println!("total: {}", surface.cart_total);
        println!("{}", surface.cart_body.trim());
    }
}
