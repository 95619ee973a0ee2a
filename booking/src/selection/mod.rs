//! Ticket selection and order summary for the booking view.
//!
//! This module is the domain core of the booking page: it keeps the user's
//! chosen quantity per ticket type, clamps every requested change into the
//! valid range, and derives the order summary (line items, totals, checkout
//! eligibility) fresh on every read.
//!
//! # Design
//!
//! Clamping is the single source of truth. The presentation layer never
//! re-implements the bounds check - it merely disables a +/- control when the
//! already-computed next value would be a no-op, so the UI guard and the
//! domain rule cannot drift apart.
//!
//! State lives in [`SelectionState`] and is mutated only through
//! [`SelectionAction`]s dispatched into [`SelectionReducer`]; all reads go
//! through the derived queries. There are no phases, no terminal state, and
//! no async steps - every transition is a pure, synchronous function.

pub mod actions;
pub mod reducer;
pub mod state;
#[cfg(test)]
mod tests;

pub use actions::SelectionAction;
pub use reducer::{SelectionEnvironment, SelectionReducer};
pub use state::{EMPTY_SELECTION_MESSAGE, SelectionState};
