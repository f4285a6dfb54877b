//! The display surface: everything the widget writes to the page.
//!
//! Holding the written state in a plain struct keeps rendering testable
//! without a live document. Front ends (the CLI, tests) read it back.

use school_mart_core::{DropdownId, ItemId};

/// Per-row action wired onto a rendered line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Increment,
    Decrement,
    Remove,
}

impl RowAction {
    /// The `data-*` attribute carrying the item id on the rendered button.
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::Increment => "data-inc",
            Self::Decrement => "data-dec",
            Self::Remove => "data-remove",
        }
    }
}

/// A row control created by the last render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowControl {
    pub action: RowAction,
    pub id: ItemId,
}

/// Contents of the quick-view modal fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalSurface {
    pub shown: bool,
    pub title: String,
    pub description: String,
    pub price: String,
    /// Inline `background-image` value of the image field.
    pub image: String,
}

/// State of every widget-owned part of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Surface {
    /// Markup inside the cart body container.
    pub cart_body: String,
    /// Text of the cart total container.
    pub cart_total: String,
    /// Text of each badge slot.
    pub badges: Vec<String>,
    pub drawer_open: bool,
    pub backdrop_shown: bool,
    pub modal: ModalSurface,
    /// The dropdown whose menu is shown, if any.
    pub open_dropdown: Option<DropdownId>,
    /// Controls created by the last render, replaced on every render.
    pub row_controls: Vec<RowControl>,
}

impl Surface {
    /// A blank surface with `badges` badge slots.
    #[must_use]
    pub fn new(badges: usize) -> Self {
        Self {
            badges: vec![String::new(); badges],
            ..Self::default()
        }
    }

    /// Index of the row control for `(action, id)` in the current render.
    #[must_use]
    pub fn find_row_control(&self, action: RowAction, id: &ItemId) -> Option<usize> {
        self.row_controls
            .iter()
            .position(|c| c.action == action && &c.id == id)
    }
}
