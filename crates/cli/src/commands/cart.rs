//! Single-interaction commands.
//!
//! Each command dispatches the same event the matching page control would.

use school_mart_core::ItemId;
use school_mart_storefront::page::RowAction;
use school_mart_storefront::{AppError, UiEvent};

use super::PageSession;

/// Open the drawer and print it.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the page has no open-cart trigger.
pub fn show(session: &mut PageSession) -> Result<(), AppError> {
    if !session.widget.dispatch(&UiEvent::OpenCart) {
        return Err(AppError::NotFound("open-cart trigger with drawer".to_string()));
    }
    session.print();
    Ok(())
}

/// Print the badge count.
#[allow(clippy::print_stdout)]
pub fn count(session: &PageSession) {
    println!("{}", session.widget.cart().count());
}

/// Click the add-to-cart control for `id`.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the page has no such control.
pub fn add(session: &mut PageSession, id: &str) -> Result<(), AppError> {
    let id = ItemId::new(id);
    let control = session
        .widget
        .add_to_cart_control(&id)
        .ok_or_else(|| AppError::NotFound(format!("add-to-cart control for {id}")))?;
    session.widget.dispatch(&UiEvent::AddToCart { control });
    tracing::info!(item_id = %id, count = session.widget.cart().count(), "Added to cart");
    session.print();
    Ok(())
}

/// Open the drawer and click one of `id`'s row controls.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the drawer cannot be opened or `id` has
/// no row in it.
pub fn row(session: &mut PageSession, id: &str, action: RowAction) -> Result<(), AppError> {
    let id = ItemId::new(id);
    session.widget.dispatch(&UiEvent::OpenCart);
    let control = session
        .widget
        .surface()
        .find_row_control(action, &id)
        .ok_or_else(|| AppError::NotFound(format!("{} control for {id}", action.attribute())))?;
    session.widget.dispatch(&UiEvent::RowControl { control });
    tracing::info!(item_id = %id, ?action, count = session.widget.cart().count(), "Updated cart");
    session.print();
    Ok(())
}

/// Click clear-cart.
pub fn clear(session: &mut PageSession) {
    if session.widget.dispatch(&UiEvent::ClearCart) {
        tracing::info!("Cart cleared");
    } else {
        tracing::warn!("Page has no clear-cart control");
    }
    session.print();
}

/// Open the quick view for `id`, optionally clicking its add button.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the page has no quick-view control for
/// `id` or no modal.
pub fn quick_view(session: &mut PageSession, id: &str, add: bool) -> Result<(), AppError> {
    let id = ItemId::new(id);
    let control = session
        .widget
        .quick_view_control(&id)
        .ok_or_else(|| AppError::NotFound(format!("quick-view control for {id}")))?;
    if !session.widget.dispatch(&UiEvent::QuickView { control }) {
        return Err(AppError::NotFound("quick-view modal".to_string()));
    }
    if add {
        session.widget.dispatch(&UiEvent::ModalAdd);
        tracing::info!(item_id = %id, count = session.widget.cart().count(), "Added from quick view");
    }
    session.print();
    Ok(())
}
