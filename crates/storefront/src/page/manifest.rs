//! Page manifest: what the storefront markup carries.
//!
//! The widget never parses markup. The page describes itself with a YAML
//! manifest listing the marker attributes present and the data each
//! add-to-cart and quick-view control supplies:
//!
//! ```yaml
//! markers: [overlay, cart, cart-body, cart-total, cart-count, open-cart]
//! add_to_cart:
//!   - { id: pen, name: Pen, price: 0.5 }
//! quick_view:
//!   - { id: book, title: Book, price: 2.0, desc: Ruled, img: img/book.jpg }
//! dropdowns: [community]
//! ```

use std::path::Path;

use school_mart_core::{DropdownId, ItemId, Price};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read page manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid page manifest: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Marker attributes the widget reads from or writes into.
///
/// Each marker maps onto one `data-*` attribute of the storefront markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Marker {
    /// Backdrop shown behind the open drawer.
    Overlay,
    /// The drawer panel.
    Cart,
    /// Container the line items are rendered into.
    CartBody,
    /// Grand total text.
    CartTotal,
    /// Item count badge. Repeatable.
    CartCount,
    /// Opens the drawer. Repeatable.
    OpenCart,
    CloseCart,
    ClearCart,
    /// Quick-view modal backdrop.
    Modal,
    ModalTitle,
    ModalDesc,
    ModalPrice,
    ModalImg,
    /// The modal's add-to-cart button.
    ModalAdd,
    /// Closes the modal. Repeatable.
    ModalClose,
}

impl Marker {
    /// The `data-*` attribute this marker stands for.
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Overlay => "data-overlay",
            Self::Cart => "data-cart",
            Self::CartBody => "data-cart-body",
            Self::CartTotal => "data-cart-total",
            Self::CartCount => "data-cart-count",
            Self::OpenCart => "data-open-cart",
            Self::CloseCart => "data-close-cart",
            Self::ClearCart => "data-clear-cart",
            Self::Modal => "data-modal",
            Self::ModalTitle => "data-modal-title",
            Self::ModalDesc => "data-modal-desc",
            Self::ModalPrice => "data-modal-price",
            Self::ModalImg => "data-modal-img",
            Self::ModalAdd => "data-modal-add",
            Self::ModalClose => "data-modal-close",
        }
    }
}

/// A static "add to cart" control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCartControl {
    pub id: ItemId,
    pub name: String,
    pub price: Price,
}

/// A static "quick view" control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickViewControl {
    pub id: ItemId,
    pub title: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

/// Everything the page declares about itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageManifest {
    #[serde(default)]
    pub markers: Vec<Marker>,
    #[serde(default)]
    pub add_to_cart: Vec<AddToCartControl>,
    #[serde(default)]
    pub quick_view: Vec<QuickViewControl>,
    #[serde(default)]
    pub dropdowns: Vec<DropdownId>,
}

impl PageManifest {
    /// Parse a manifest from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Yaml` if the text does not match the schema.
    pub fn from_yaml(yaml: &str) -> Result<Self, ManifestError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a manifest file.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Io` if the file cannot be read and
    /// `ManifestError::Yaml` if it does not parse.
    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    /// How many times `marker` appears on the page.
    #[must_use]
    pub fn occurrences(&self, marker: Marker) -> usize {
        self.markers.iter().filter(|m| **m == marker).count()
    }

    /// Whether `marker` appears at least once.
    #[must_use]
    pub fn has(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_parse_full_manifest() {
        let manifest = PageManifest::from_yaml(
            r"
markers: [overlay, cart, cart-body, cart-total, cart-count, cart-count, open-cart]
add_to_cart:
  - { id: pen, name: Pen, price: 0.5 }
quick_view:
  - { id: book, title: Book, price: 2.0, desc: Ruled pages, img: img/book.jpg }
  - { id: ruler, title: Ruler, price: 1 }
dropdowns: [community]
",
        )
        .unwrap();

        assert_eq!(manifest.occurrences(Marker::CartCount), 2);
        assert!(manifest.has(Marker::CartBody));
        assert!(!manifest.has(Marker::Modal));
        assert_eq!(manifest.add_to_cart[0].price.amount(), Decimal::new(5, 1));
        assert_eq!(manifest.quick_view[1].desc, None);
        assert_eq!(manifest.dropdowns, [DropdownId::new("community")]);
    }

    #[test]
    fn test_empty_manifest_is_default() {
        assert_eq!(PageManifest::from_yaml("{}").unwrap(), PageManifest::default());
    }

    #[test]
    fn test_unknown_marker_rejected() {
        let err = PageManifest::from_yaml("markers: [cart-drawer]").unwrap_err();
        assert!(matches!(err, ManifestError::Yaml(_)));
    }

    #[test]
    fn test_marker_attributes() {
        assert_eq!(Marker::CartBody.attribute(), "data-cart-body");
        assert_eq!(Marker::ModalClose.attribute(), "data-modal-close");
    }

    #[test]
    fn test_missing_file() {
        let err = PageManifest::from_file(Path::new("/nonexistent/page.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/page.yaml"));
    }
}
