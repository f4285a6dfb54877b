//! Typed binding table resolved once at boot.
//!
//! A region that is entirely absent from the page resolves to `None` and the
//! operations touching it skip silently. A region that is present but
//! missing one of its parts is a configuration error surfaced at boot.

use std::collections::HashSet;

use school_mart_core::{DropdownId, ItemId};
use thiserror::Error;

use super::manifest::{AddToCartControl, Marker, PageManifest, QuickViewControl};

/// Configuration errors found while resolving bindings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    /// A region is on the page but lacks one of its required parts.
    #[error("{region} is present but {} is missing", .missing.attribute())]
    IncompleteRegion {
        region: &'static str,
        missing: Marker,
    },

    /// A control carries an empty identifier.
    #[error("{control} control #{index} has an empty id")]
    EmptyId { control: &'static str, index: usize },

    /// A control carries an empty display name or title.
    #[error("{control} control for {id} has an empty name")]
    EmptyName { control: &'static str, id: ItemId },

    /// A control carries a negative price.
    #[error("{control} control for {id} has a negative price")]
    NegativePrice { control: &'static str, id: ItemId },

    /// Two dropdowns share a name.
    #[error("dropdown {0} is declared more than once")]
    DuplicateDropdown(DropdownId),
}

/// Backdrop + drawer panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerBinding;

/// Cart body + total containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingBinding;

/// Quick-view modal and its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalBinding {
    /// Number of close controls inside the modal.
    pub close_controls: usize,
}

/// The resolved page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    pub drawer: Option<DrawerBinding>,
    pub listing: Option<ListingBinding>,
    pub modal: Option<ModalBinding>,
    /// Number of badge slots.
    pub badges: usize,
    pub open_cart_triggers: usize,
    pub close_cart: bool,
    pub clear_cart: bool,
    pub add_to_cart: Vec<AddToCartControl>,
    pub quick_view: Vec<QuickViewControl>,
    pub dropdowns: Vec<DropdownId>,
}

impl Bindings {
    /// Resolve the manifest into a binding table.
    ///
    /// # Errors
    ///
    /// Returns the first `BindingError` found.
    pub fn resolve(manifest: &PageManifest) -> Result<Self, BindingError> {
        let drawer = resolve_region(manifest, "drawer", &[Marker::Overlay, Marker::Cart])?
            .then_some(DrawerBinding);
        let listing = resolve_region(manifest, "cart listing", &[
            Marker::CartBody,
            Marker::CartTotal,
        ])?
        .then_some(ListingBinding);
        let modal = resolve_region(manifest, "modal", &[
            Marker::Modal,
            Marker::ModalTitle,
            Marker::ModalDesc,
            Marker::ModalPrice,
            Marker::ModalImg,
            Marker::ModalAdd,
        ])?
        .then(|| ModalBinding {
            close_controls: manifest.occurrences(Marker::ModalClose),
        });

        for (index, control) in manifest.add_to_cart.iter().enumerate() {
            check_control("add-to-cart", index, &control.id, &control.name, control.price.is_valid())?;
        }
        for (index, control) in manifest.quick_view.iter().enumerate() {
            check_control("quick-view", index, &control.id, &control.title, control.price.is_valid())?;
        }

        let mut seen = HashSet::new();
        for dropdown in &manifest.dropdowns {
            if !seen.insert(dropdown) {
                return Err(BindingError::DuplicateDropdown(dropdown.clone()));
            }
        }

        let bindings = Self {
            drawer,
            listing,
            modal,
            badges: manifest.occurrences(Marker::CartCount),
            open_cart_triggers: manifest.occurrences(Marker::OpenCart),
            close_cart: manifest.has(Marker::CloseCart),
            clear_cart: manifest.has(Marker::ClearCart),
            add_to_cart: manifest.add_to_cart.clone(),
            quick_view: manifest.quick_view.clone(),
            dropdowns: manifest.dropdowns.clone(),
        };

        tracing::debug!(
            drawer = bindings.drawer.is_some(),
            listing = bindings.listing.is_some(),
            modal = bindings.modal.is_some(),
            badges = bindings.badges,
            add_to_cart = bindings.add_to_cart.len(),
            quick_view = bindings.quick_view.len(),
            dropdowns = bindings.dropdowns.len(),
            "Resolved page bindings"
        );

        Ok(bindings)
    }
}

/// `true` if every part is present, `false` if none is, an error if the
/// region is partial.
fn resolve_region(
    manifest: &PageManifest,
    region: &'static str,
    parts: &[Marker],
) -> Result<bool, BindingError> {
    if !parts.iter().any(|m| manifest.has(*m)) {
        return Ok(false);
    }
    match parts.iter().find(|m| !manifest.has(**m)) {
        Some(missing) => Err(BindingError::IncompleteRegion {
            region,
            missing: *missing,
        }),
        None => Ok(true),
    }
}

fn check_control(
    control: &'static str,
    index: usize,
    id: &ItemId,
    name: &str,
    price_ok: bool,
) -> Result<(), BindingError> {
    if id.is_empty() {
        return Err(BindingError::EmptyId { control, index });
    }
    if name.trim().is_empty() {
        return Err(BindingError::EmptyName {
            control,
            id: id.clone(),
        });
    }
    if !price_ok {
        return Err(BindingError::NegativePrice {
            control,
            id: id.clone(),
        });
    }
    Ok(())
}
