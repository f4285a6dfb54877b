//! Event binder: the widget as a whole.
//!
//! [`CartWidget::boot`] resolves the page bindings, loads the persisted cart
//! and fills the badges. [`CartWidget::dispatch`] then handles one UI event
//! at a time, running mutation, persistence, badge refresh and render to
//! completion before returning.

use school_mart_core::{Cart, DropdownId, ItemId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::cart::CartModel;
use crate::overlay::{ModalClick, Product, QuickView};
use crate::page::{BindingError, Bindings, PageManifest, RowAction, Surface};
use crate::store::KeyValueStore;
use crate::view;

/// A user interaction with a bound control.
///
/// Controls are addressed by their position in the page manifest (static
/// controls) or in the last render (row controls).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum UiEvent {
    /// Any open-cart trigger.
    OpenCart,
    /// The close-cart trigger.
    CloseCart,
    /// The backdrop behind the drawer.
    BackdropClick,
    ClearCart,
    AddToCart { control: usize },
    /// An increment, decrement or delete button from the last render.
    RowControl { control: usize },
    ToggleDropdown { dropdown: DropdownId },
    /// A click that reached the document without hitting a bound control.
    DocumentClick,
    QuickView { control: usize },
    /// The modal's add-to-cart button.
    ModalAdd,
    /// Any modal close control.
    ModalClose,
    ModalClick { target: ModalClick },
}

impl UiEvent {
    /// Whether the click propagates to the document-level listener that
    /// closes open dropdown menus.
    #[must_use]
    pub const fn reaches_document(&self) -> bool {
        !matches!(
            self,
            Self::ToggleDropdown { .. }
                | Self::ModalClick {
                    target: ModalClick::Content
                }
        )
    }
}

/// The cart widget bound to one page.
#[derive(Debug)]
pub struct CartWidget<S> {
    bindings: Bindings,
    model: CartModel<S>,
    overlay: QuickView,
    surface: Surface,
}

impl<S: KeyValueStore> CartWidget<S> {
    /// Wire the widget onto the page described by `manifest`.
    ///
    /// # Errors
    ///
    /// Returns `BindingError` if the manifest describes an incomplete region
    /// or an invalid control.
    #[instrument(skip_all)]
    pub fn boot(manifest: &PageManifest, store: S) -> Result<Self, BindingError> {
        let bindings = Bindings::resolve(manifest)?;
        let model = CartModel::load(store);
        let mut surface = Surface::new(bindings.badges);
        view::update_badges(model.cart(), &mut surface);

        tracing::info!(
            items = model.cart().len(),
            count = model.count(),
            "Cart widget ready"
        );

        Ok(Self {
            bindings,
            model,
            overlay: QuickView::default(),
            surface,
        })
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        self.model.cart()
    }

    #[must_use]
    pub const fn model(&self) -> &CartModel<S> {
        &self.model
    }

    #[must_use]
    pub const fn surface(&self) -> &Surface {
        &self.surface
    }

    #[must_use]
    pub const fn overlay(&self) -> &QuickView {
        &self.overlay
    }

    #[must_use]
    pub const fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Position of the add-to-cart control for `id`.
    #[must_use]
    pub fn add_to_cart_control(&self, id: &ItemId) -> Option<usize> {
        self.bindings.add_to_cart.iter().position(|c| &c.id == id)
    }

    /// Position of the quick-view control for `id`.
    #[must_use]
    pub fn quick_view_control(&self, id: &ItemId) -> Option<usize> {
        self.bindings.quick_view.iter().position(|c| &c.id == id)
    }

    /// Handle one event. Returns `false` if no bound control answered it.
    pub fn dispatch(&mut self, event: &UiEvent) -> bool {
        if event.reaches_document() {
            self.close_dropdowns();
        }

        let handled = match event {
            UiEvent::OpenCart => self.bindings.open_cart_triggers > 0 && self.open_cart(),
            UiEvent::CloseCart => self.bindings.close_cart && self.close_cart(),
            UiEvent::BackdropClick => self.close_cart(),
            UiEvent::ClearCart => self.bindings.clear_cart && self.clear_cart(),
            UiEvent::AddToCart { control } => self.click_add_to_cart(*control),
            UiEvent::RowControl { control } => self.click_row_control(*control),
            UiEvent::ToggleDropdown { dropdown } => self.toggle_dropdown(dropdown),
            UiEvent::DocumentClick => true,
            UiEvent::QuickView { control } => self.click_quick_view(*control),
            UiEvent::ModalAdd => self.click_modal_add(),
            UiEvent::ModalClose => self.click_modal_close(),
            UiEvent::ModalClick { target } => self.click_modal(*target),
        };

        if !handled {
            tracing::debug!(?event, "Event not handled by any bound control");
        }
        handled
    }

    /// Show the backdrop, open the drawer and render the cart.
    fn open_cart(&mut self) -> bool {
        if self.bindings.drawer.is_none() {
            return false;
        }
        self.surface.backdrop_shown = true;
        self.surface.drawer_open = true;
        self.render();
        true
    }

    fn close_cart(&mut self) -> bool {
        if self.bindings.drawer.is_none() {
            return false;
        }
        self.surface.backdrop_shown = false;
        self.surface.drawer_open = false;
        true
    }

    fn clear_cart(&mut self) -> bool {
        self.model.clear_cart();
        self.refresh();
        true
    }

    fn click_add_to_cart(&mut self, control: usize) -> bool {
        let Some(control) = self.bindings.add_to_cart.get(control) else {
            return false;
        };
        let (id, name, price) = (control.id.clone(), control.name.clone(), control.price);
        self.model.add_to_cart(&id, &name, price);
        view::update_badges(self.model.cart(), &mut self.surface);
        self.open_cart();
        true
    }

    fn click_row_control(&mut self, control: usize) -> bool {
        let Some(control) = self.surface.row_controls.get(control).cloned() else {
            return false;
        };
        match control.action {
            RowAction::Increment => self.model.change_qty(&control.id, 1),
            RowAction::Decrement => self.model.change_qty(&control.id, -1),
            RowAction::Remove => self.model.remove_item(&control.id),
        };
        self.refresh();
        true
    }

    /// Toggle one menu; every other menu closes.
    fn toggle_dropdown(&mut self, dropdown: &DropdownId) -> bool {
        if !self.bindings.dropdowns.contains(dropdown) {
            return false;
        }
        self.surface.open_dropdown = if self.surface.open_dropdown.as_ref() == Some(dropdown) {
            None
        } else {
            Some(dropdown.clone())
        };
        true
    }

    fn close_dropdowns(&mut self) {
        self.surface.open_dropdown = None;
    }

    fn click_quick_view(&mut self, control: usize) -> bool {
        let Some(control) = self.bindings.quick_view.get(control) else {
            return false;
        };
        let product = Product::from(control);
        self.overlay.open(
            Some(product),
            self.bindings.modal.is_some(),
            &mut self.surface.modal,
        )
    }

    /// Add the displayed product and open the drawer.
    fn click_modal_add(&mut self) -> bool {
        if self.bindings.modal.is_none() {
            return false;
        }
        let Some(product) = self.overlay.product().cloned() else {
            return false;
        };
        self.model
            .add_to_cart(&product.id, &product.title, product.price);
        view::update_badges(self.model.cart(), &mut self.surface);
        self.open_cart();
        true
    }

    fn click_modal_close(&mut self) -> bool {
        match self.bindings.modal {
            Some(modal) if modal.close_controls > 0 => {
                self.overlay.close(&mut self.surface.modal);
                true
            }
            _ => false,
        }
    }

    fn click_modal(&mut self, target: ModalClick) -> bool {
        if self.bindings.modal.is_none() {
            return false;
        }
        self.overlay.click(target, &mut self.surface.modal);
        true
    }

    /// Badges then drawer, after a mutation.
    fn refresh(&mut self) {
        view::update_badges(self.model.cart(), &mut self.surface);
        self.render();
    }

    fn render(&mut self) {
        if self.bindings.listing.is_none() {
            return;
        }
        match view::render(self.model.cart()) {
            Ok(rendered) => view::apply(rendered, &mut self.surface),
            Err(e) => tracing::error!(error = %e, "Failed to render cart"),
        }
    }
}
