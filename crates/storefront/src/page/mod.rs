//! The page the widget lives on.
//!
//! - [`manifest`] - What the markup declares (markers and control data)
//! - [`bindings`] - The manifest resolved into a typed table at boot
//! - [`surface`] - What the widget has written to the page

pub mod bindings;
pub mod manifest;
pub mod surface;

pub use bindings::{BindingError, Bindings, DrawerBinding, ListingBinding, ModalBinding};
pub use manifest::{AddToCartControl, ManifestError, Marker, PageManifest, QuickViewControl};
pub use surface::{ModalSurface, RowAction, RowControl, Surface};
