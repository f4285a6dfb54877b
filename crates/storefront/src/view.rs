//! Cart view: renders the cart into the drawer and keeps badges current.
//!
//! Rendering is a pure function of the cart. It produces the drawer markup,
//! the grand total text and the row controls the markup carries; the binder
//! writes all three onto the [`Surface`].

use askama::Template;
use school_mart_core::{Cart, LineItem, format_amount};

use crate::page::{RowAction, RowControl, Surface};

/// Heading shown when the cart has no items.
pub const EMPTY_CART_TITLE: &str = "السلة فاضية";

/// Hint shown under the empty-cart heading.
pub const EMPTY_CART_HINT: &str = "أضف منتجات من المتجر وستظهر هنا.";

/// Line item display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u64,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .iter()
                .map(|(id, line)| CartItemView::new(id.as_str(), line))
                .collect(),
            total: format_amount(cart.total()),
            item_count: cart.count(),
        }
    }
}

impl CartItemView {
    fn new(id: &str, line: &LineItem) -> Self {
        Self {
            id: id.to_string(),
            name: line.name.clone(),
            quantity: line.qty,
            price: line.price.display(),
            line_price: format_amount(line.subtotal()),
        }
    }
}

/// Cart items fragment rendered into the cart body.
#[derive(Template)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate<'a> {
    pub cart: &'a CartView,
    pub empty_title: &'static str,
    pub empty_hint: &'static str,
}

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCart {
    /// Markup for the cart body container.
    pub body: String,
    /// Text for the cart total container.
    pub total: String,
    /// Controls present in `body`, in document order.
    pub controls: Vec<RowControl>,
}

/// Render `cart` into drawer markup.
///
/// # Errors
///
/// Returns `askama::Error` if the template fails to render.
pub fn render(cart: &Cart) -> Result<RenderedCart, askama::Error> {
    let view = CartView::from(cart);
    let body = CartItemsTemplate {
        cart: &view,
        empty_title: EMPTY_CART_TITLE,
        empty_hint: EMPTY_CART_HINT,
    }
    .render()?;

    let controls = cart
        .iter()
        .flat_map(|(id, _)| {
            [RowAction::Remove, RowAction::Decrement, RowAction::Increment]
                .into_iter()
                .map(|action| RowControl {
                    action,
                    id: id.clone(),
                })
        })
        .collect();

    Ok(RenderedCart {
        body,
        total: view.total,
        controls,
    })
}

/// Write a render pass onto the surface, replacing the previous controls.
pub fn apply(rendered: RenderedCart, surface: &mut Surface) {
    surface.cart_body = rendered.body;
    surface.cart_total = rendered.total;
    surface.row_controls = rendered.controls;
}

/// Push the current item count into every badge slot.
pub fn update_badges(cart: &Cart, surface: &mut Surface) {
    let count = cart.count().to_string();
    for badge in &mut surface.badges {
        badge.clone_from(&count);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use school_mart_core::{ItemId, Price};

    fn price(units: i64, scale: u32) -> Price {
        Price::new(Decimal::new(units, scale)).unwrap()
    }

    #[test]
    fn test_empty_cart_render() {
        let rendered = render(&Cart::new()).unwrap();
        assert!(rendered.body.contains(EMPTY_CART_TITLE));
        assert!(rendered.body.contains(EMPTY_CART_HINT));
        assert_eq!(rendered.total, "ر.ع 0.0");
        assert!(rendered.controls.is_empty());
    }

    #[test]
    fn test_rows_show_price_subtotal_and_quantity() {
        let mut cart = Cart::new();
        cart.add(&ItemId::new("book"), "Book", price(2, 0));
        cart.add(&ItemId::new("pen"), "Pen", price(5, 1));
        cart.add(&ItemId::new("pen"), "Pen", price(5, 1));

        let rendered = render(&cart).unwrap();
        assert!(!rendered.body.contains(EMPTY_CART_TITLE));
        assert!(rendered.body.contains("<strong>Pen</strong>"));
        assert!(rendered.body.contains("ر.ع 0.5 للقطعة"));
        assert!(rendered.body.contains("<strong>ر.ع 1.0</strong>"));
        assert!(rendered.body.contains("<strong>2</strong>"));
        assert!(rendered.body.contains(r#"data-inc="pen""#));
        assert!(rendered.body.contains(r#"data-dec="book""#));
        assert_eq!(rendered.total, "ر.ع 3.0");
    }

    #[test]
    fn test_rows_follow_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&ItemId::new("pen"), "Pen", price(5, 1));
        cart.add(&ItemId::new("book"), "Book", price(2, 0));
        let body = render(&cart).unwrap().body;
        let pen = body.find("Pen").unwrap();
        let book = body.find("Book").unwrap();
        assert!(pen < book);
    }

    #[test]
    fn test_controls_cover_every_row() {
        let mut cart = Cart::new();
        cart.add(&ItemId::new("pen"), "Pen", price(5, 1));
        cart.add(&ItemId::new("book"), "Book", price(2, 0));
        let controls = render(&cart).unwrap().controls;
        assert_eq!(controls.len(), 6);
        for action in [RowAction::Increment, RowAction::Decrement, RowAction::Remove] {
            assert!(controls.contains(&RowControl {
                action,
                id: ItemId::new("book"),
            }));
        }
    }

    #[test]
    fn test_names_are_escaped() {
        let mut cart = Cart::new();
        cart.add(&ItemId::new("x\"y"), "<script>alert(1)</script>", price(1, 0));
        let body = render(&cart).unwrap().body;
        assert!(!body.contains("<script>"));
        assert!(!body.contains("x\"y"));
    }

    #[test]
    fn test_update_badges_fills_every_slot() {
        let mut cart = Cart::new();
        cart.add(&ItemId::new("pen"), "Pen", price(5, 1));
        cart.add(&ItemId::new("pen"), "Pen", price(5, 1));
        let mut surface = Surface::new(3);
        update_badges(&cart, &mut surface);
        assert_eq!(surface.badges, ["2", "2", "2"]);
    }

    #[test]
    fn test_apply_replaces_controls() {
        let mut cart = Cart::new();
        cart.add(&ItemId::new("pen"), "Pen", price(5, 1));
        let mut surface = Surface::new(0);
        apply(render(&cart).unwrap(), &mut surface);
        assert_eq!(surface.row_controls.len(), 3);

        cart.clear();
        apply(render(&cart).unwrap(), &mut surface);
        assert!(surface.row_controls.is_empty());
        assert_eq!(surface.cart_total, "ر.ع 0.0");
    }

    #[test]
    fn test_cart_view_of_empty_cart() {
        let view = CartView::from(&Cart::new());
        assert!(view.items.is_empty());
        assert_eq!(view.item_count, 0);
    }
}
