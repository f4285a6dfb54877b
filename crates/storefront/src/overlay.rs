//! Quick-view overlay: a single-product modal.
//!
//! Two states, `Closed` and `Open(product)`. Opening while already open
//! replaces the product in place.

use school_mart_core::{ItemId, Price};
use serde::{Deserialize, Serialize};

use crate::page::{ModalSurface, QuickViewControl};

/// The product shown in the modal. Lives only while displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ItemId,
    pub title: String,
    pub price: Price,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl From<&QuickViewControl> for Product {
    fn from(control: &QuickViewControl) -> Self {
        Self {
            id: control.id.clone(),
            title: control.title.clone(),
            price: control.price,
            description: control.desc.clone(),
            image_url: control.img.clone(),
        }
    }
}

/// Where a click on the modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModalClick {
    /// The dimmed backdrop around the content.
    Backdrop,
    /// Anywhere inside the content area.
    Content,
}

/// Overlay state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuickView {
    #[default]
    Closed,
    Open(Product),
}

impl QuickView {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// The product on display, if any.
    #[must_use]
    pub const fn product(&self) -> Option<&Product> {
        match self {
            Self::Open(product) => Some(product),
            Self::Closed => None,
        }
    }

    /// Show `product`, filling the modal fields.
    ///
    /// Returns `false` and leaves everything untouched when there is no
    /// product or no modal on the page.
    pub fn open(
        &mut self,
        product: Option<Product>,
        modal_bound: bool,
        surface: &mut ModalSurface,
    ) -> bool {
        let Some(product) = product else {
            return false;
        };
        if !modal_bound {
            tracing::debug!(item_id = %product.id, "No modal on page, skipping quick view");
            return false;
        }

        surface.title.clone_from(&product.title);
        surface.description = product.description.clone().unwrap_or_default();
        surface.price = product.price.display_raw();
        surface.image = format!("url('{}')", product.image_url.as_deref().unwrap_or_default());
        surface.shown = true;

        tracing::debug!(item_id = %product.id, "Opened quick view");
        *self = Self::Open(product);
        true
    }

    /// Hide the modal. The product is discarded.
    pub fn close(&mut self, surface: &mut ModalSurface) {
        surface.shown = false;
        *self = Self::Closed;
    }

    /// Handle a click on the modal. Only backdrop clicks close it.
    pub fn click(&mut self, target: ModalClick, surface: &mut ModalSurface) {
        if target == ModalClick::Backdrop {
            self.close(surface);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: &str, title: &str) -> Product {
        Product {
            id: ItemId::new(id),
            title: title.to_string(),
            price: Price::new(Decimal::new(25, 1)).unwrap(),
            description: Some("Ruled pages".to_string()),
            image_url: Some("img/book.jpg".to_string()),
        }
    }

    #[test]
    fn test_starts_closed() {
        assert_eq!(QuickView::default(), QuickView::Closed);
    }

    #[test]
    fn test_open_fills_fields() {
        let mut overlay = QuickView::default();
        let mut surface = ModalSurface::default();
        assert!(overlay.open(Some(product("book", "Book")), true, &mut surface));
        assert!(overlay.is_open());
        assert!(surface.shown);
        assert_eq!(surface.title, "Book");
        assert_eq!(surface.description, "Ruled pages");
        assert_eq!(surface.price, "ر.ع 2.5");
        assert_eq!(surface.image, "url('img/book.jpg')");
    }

    #[test]
    fn test_open_without_optional_fields() {
        let mut overlay = QuickView::default();
        let mut surface = ModalSurface::default();
        let mut bare = product("ruler", "Ruler");
        bare.description = None;
        bare.image_url = None;
        overlay.open(Some(bare), true, &mut surface);
        assert_eq!(surface.description, "");
        assert_eq!(surface.image, "url('')");
    }

    #[test]
    fn test_open_is_noop_without_product_or_modal() {
        let mut overlay = QuickView::default();
        let mut surface = ModalSurface::default();
        assert!(!overlay.open(None, true, &mut surface));
        assert!(!overlay.open(Some(product("book", "Book")), false, &mut surface));
        assert_eq!(overlay, QuickView::Closed);
        assert_eq!(surface, ModalSurface::default());
    }

    #[test]
    fn test_open_replaces_current_product() {
        let mut overlay = QuickView::default();
        let mut surface = ModalSurface::default();
        overlay.open(Some(product("book", "Book")), true, &mut surface);
        overlay.open(Some(product("pen", "Pen")), true, &mut surface);
        assert_eq!(overlay.product().unwrap().id, ItemId::new("pen"));
        assert_eq!(surface.title, "Pen");
        assert!(surface.shown);
    }

    #[test]
    fn test_content_click_keeps_open_backdrop_click_closes() {
        let mut overlay = QuickView::default();
        let mut surface = ModalSurface::default();
        overlay.open(Some(product("book", "Book")), true, &mut surface);

        overlay.click(ModalClick::Content, &mut surface);
        assert!(overlay.is_open());
        assert!(surface.shown);

        overlay.click(ModalClick::Backdrop, &mut surface);
        assert!(!overlay.is_open());
        assert!(!surface.shown);
    }
}
