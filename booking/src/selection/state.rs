//! State for the ticket selection feature.

use crate::catalog::Catalog;
use crate::types::{LineItem, Money, TicketTypeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// User-visible message for a checkout attempt with nothing selected
pub const EMPTY_SELECTION_MESSAGE: &str = "Please select at least one ticket";

/// The booking view's selection state
///
/// Holds the session catalog (fixed after construction) and the current
/// quantity per ticket type. Only positive quantities are stored: "none
/// selected" is represented by absence, never by a zero-valued entry.
///
/// # Invariants
///
/// - every stored quantity `q` satisfies `1 <= q <= available` for the
///   corresponding catalog entry
/// - no entry exists for an id outside the catalog
///
/// Both invariants are upheld by [`SelectionReducer`], the only mutation
/// path; the fields are private so external code cannot bypass it.
///
/// [`SelectionReducer`]: crate::selection::SelectionReducer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    catalog: Catalog,
    quantities: HashMap<TicketTypeId, u32>,
    /// Last user-visible rejection (cleared by any successful transition)
    pub last_error: Option<String>,
}

impl SelectionState {
    /// Creates an empty selection over the given catalog
    ///
    /// Called when the booking view opens. The selection is discarded, not
    /// persisted, when the view is left or a checkout is confirmed.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            quantities: HashMap::new(),
            last_error: None,
        }
    }

    /// The session catalog, in display order
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Currently selected quantity for a ticket type (0 when absent)
    #[must_use]
    pub fn quantity(&self, id: &TicketTypeId) -> u32 {
        self.quantities.get(id).copied().unwrap_or(0)
    }

    /// Checks whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Total number of tickets across all selected types
    #[must_use]
    pub fn total_tickets(&self) -> u32 {
        self.quantities.values().sum()
    }

    /// Total price of the selection
    ///
    /// Recomputed fresh on every call; nothing is cached.
    ///
    /// # Panics
    ///
    /// Panics if the total would overflow `u64` rupiah, which no realistic
    /// catalog can produce.
    #[must_use]
    pub fn total_price(&self) -> Money {
        self.line_items()
            .iter()
            .fold(Money::ZERO, |total, item| total.add(item.subtotal))
    }

    /// The order summary: one row per selected type, in catalog order
    ///
    /// Catalog order - not insertion order - determines display order.
    /// Finite, re-derivable on demand, safe to call repeatedly.
    ///
    /// # Panics
    ///
    /// Panics if a subtotal would overflow `u64` rupiah, which no realistic
    /// catalog can produce.
    #[must_use]
    pub fn line_items(&self) -> Vec<LineItem> {
        self.catalog
            .iter()
            .filter_map(|ticket_type| {
                let quantity = self.quantity(&ticket_type.id);
                (quantity > 0).then(|| LineItem {
                    ticket_type: ticket_type.clone(),
                    quantity,
                    subtotal: ticket_type.unit_price.multiply(quantity),
                })
            })
            .collect()
    }

    /// Whether a checkout attempt would be accepted
    ///
    /// `true` iff at least one ticket is selected. The caller surfaces a
    /// rejected checkout as a user-visible message, never as an error.
    #[must_use]
    pub fn can_checkout(&self) -> bool {
        self.total_tickets() > 0
    }

    /// Store the clamped quantity for a known catalog id (reducer-internal)
    pub(crate) fn set_clamped(&mut self, id: TicketTypeId, clamped: u32) {
        if clamped == 0 {
            self.quantities.remove(&id);
        } else {
            self.quantities.insert(id, clamped);
        }
    }

    /// Drop every selected quantity (reducer-internal)
    pub(crate) fn clear_quantities(&mut self) {
        self.quantities.clear();
    }
}
