//! Reducer implementing the selection business logic.
//!
//! Out-of-range quantities are clamped, never rejected: "decrement below
//! zero" and "increment above availability" are silently absorbed. The only
//! user-visible failure is a checkout attempt with nothing selected, which
//! lands in `state.last_error` rather than an error type.

use crate::selection::state::EMPTY_SELECTION_MESSAGE;
use crate::selection::{SelectionAction, SelectionState};
use boxoffice_core::{
    SmallVec, effect::Effect, environment::Clock, reducer::Reducer, smallvec,
};

/// Environment for the selection reducer
///
/// The clock stamps confirmed checkouts in the log. No other dependencies
/// are needed; the feature is a pure state machine.
#[derive(Debug, Clone)]
pub struct SelectionEnvironment<C: Clock> {
    /// Clock for timestamping confirmed checkouts
    pub clock: C,
}

impl<C: Clock> SelectionEnvironment<C> {
    /// Create a new selection environment with the given clock
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }
}

/// Reducer for the ticket selection feature
///
/// Generic over the Clock type `C` to work with any clock implementation.
///
/// # Panics
///
/// `reduce` panics if a `SetQuantity` action references an id outside the
/// session catalog. That is a caller contract violation (the view rendered a
/// control for a ticket type it was never given), not a recoverable runtime
/// condition.
#[derive(Debug, Clone, Copy)]
pub struct SelectionReducer<C> {
    _phantom: std::marker::PhantomData<C>,
}

impl<C> SelectionReducer<C> {
    /// Create a new selection reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<C> Default for SelectionReducer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Reducer for SelectionReducer<C> {
    type State = SelectionState;
    type Action = SelectionAction;
    type Environment = SelectionEnvironment<C>;

    #[allow(clippy::panic)] // Unknown catalog id is a contract violation, documented above
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            SelectionAction::SetQuantity {
                ticket_type,
                quantity,
            } => {
                let Some(ticket) = state.catalog().get(&ticket_type) else {
                    panic!("unknown ticket type id: {ticket_type}");
                };

                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                // Clamped into [0, available], so the cast cannot lose value
                let clamped = quantity.clamp(0, i64::from(ticket.available)) as u32;

                if i64::from(clamped) != quantity {
                    tracing::debug!(
                        ticket_type = %ticket_type,
                        requested = quantity,
                        clamped,
                        "quantity clamped"
                    );
                }

                state.set_clamped(ticket_type, clamped);
                smallvec![Effect::None]
            },

            SelectionAction::Checkout => {
                if state.can_checkout() {
                    tracing::info!(
                        tickets = state.total_tickets(),
                        total = %state.total_price(),
                        at = %environment.clock.now(),
                        "checkout confirmed"
                    );
                    state.clear_quantities();
                    state.last_error = None;
                } else {
                    tracing::warn!("checkout rejected: empty selection");
                    state.last_error = Some(EMPTY_SELECTION_MESSAGE.to_string());
                }
                smallvec![Effect::None]
            },

            SelectionAction::ClearSelection => {
                state.clear_quantities();
                state.last_error = None;
                smallvec![Effect::None]
            },
        }
    }
}
