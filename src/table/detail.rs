//! Detail-view hook invoked when a cell is activated.

use crate::data::Element;

/// Receives the full element record of an activated cell.
///
/// Implemented for any `Fn(&Element)` closure, so callers can pass a
/// closure straight to [`TableBuilder::new`](super::TableBuilder::new).
pub trait DetailView {
    /// Shows the element.
    fn show(&self, element: &Element);
}

impl<F> DetailView for F
where
    F: Fn(&Element),
{
    fn show(&self, element: &Element) {
        self(element);
    }
}
