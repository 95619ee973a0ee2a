//! Actions for the ticket selection feature.

use crate::types::TicketTypeId;
use serde::{Deserialize, Serialize};

/// All inputs the booking view can feed into the selection reducer
///
/// The quantity controls dispatch `SetQuantity` with the current value plus
/// or minus one; the reducer clamps whatever arrives, so the controls never
/// need their own bounds logic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionAction {
    /// Request a quantity for a ticket type
    ///
    /// The requested value may be negative, zero, or above availability; it
    /// is clamped into `[0, available]`. A clamped result of zero removes
    /// the entry. The id must belong to the session catalog.
    SetQuantity {
        /// Catalog id of the ticket type
        ticket_type: TicketTypeId,
        /// Requested quantity (typically current value plus or minus one)
        quantity: i64,
    },

    /// Attempt to proceed to checkout
    ///
    /// Rejected with a user-visible message when nothing is selected;
    /// otherwise the selection is confirmed and cleared.
    Checkout,

    /// Reset the selection (view-left lifecycle event)
    ClearSelection,
}
