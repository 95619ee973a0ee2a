//! Unit tests for the selection reducer and its derived queries.
//!
//! These cover the clamping policy (below zero, above availability),
//! idempotence, the derived order summary, checkout acceptance and
//! rejection, and the view-left lifecycle reset.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code

use super::*;
use crate::catalog::Catalog;
use crate::types::{Money, TicketType, TicketTypeId};
use boxoffice_core::reducer::Reducer;
use boxoffice_testing::{FixedClock, ReducerTest, assertions, test_clock};

/// Helper to build a catalog entry.
fn ticket(id: &str, name: &str, price: u64, available: u32) -> TicketType {
    TicketType::new(
        TicketTypeId::new(id),
        name.to_string(),
        String::new(),
        Money::from_rupiah(price),
        available,
    )
}

/// The catalog the booking page ships with.
fn concert_catalog() -> Catalog {
    Catalog::new(vec![
        ticket("vip", "VIP Package", 2_500_000, 50),
        ticket("premium", "Premium Seat", 1_500_000, 200),
        ticket("regular", "Regular Seat", 750_000, 500),
        ticket("balcony", "Balcony Seat", 400_000, 300),
    ])
    .expect("catalog ids are unique")
}

fn test_env() -> SelectionEnvironment<FixedClock> {
    SelectionEnvironment::new(test_clock())
}

fn set(id: &str, quantity: i64) -> SelectionAction {
    SelectionAction::SetQuantity {
        ticket_type: TicketTypeId::new(id),
        quantity,
    }
}

/// Run a sequence of actions over a fresh state and return it.
fn reduce_all(actions: Vec<SelectionAction>) -> SelectionState {
    let reducer = SelectionReducer::new();
    let env = test_env();
    let mut state = SelectionState::new(concert_catalog());
    for action in actions {
        reducer.reduce(&mut state, action, &env);
    }
    state
}

// ============================================================================
// Clamping
// ============================================================================

#[test]
fn decrement_below_zero_leaves_selection_empty() {
    let state = reduce_all(vec![set("vip", -1)]);

    assert!(state.is_empty());
    assert_eq!(state.total_tickets(), 0);
    assert_eq!(state.quantity(&TicketTypeId::new("vip")), 0);
}

#[test]
fn exceeding_availability_clamps_at_the_ceiling() {
    let state = reduce_all(vec![set("balcony", 9999)]);

    assert_eq!(state.quantity(&TicketTypeId::new("balcony")), 300);
}

#[test]
fn setting_zero_removes_the_entry() {
    let state = reduce_all(vec![set("vip", 3), set("vip", 0)]);

    assert!(state.is_empty());
    assert!(state.line_items().is_empty());
}

#[test]
fn quantities_stay_within_bounds_after_any_sequence() {
    let state = reduce_all(vec![
        set("vip", 80),
        set("premium", -5),
        set("vip", 12),
        set("balcony", 301),
        set("regular", 1),
        set("regular", 0),
    ]);

    for ticket_type in state.catalog().iter() {
        let quantity = state.quantity(&ticket_type.id);
        assert!(
            quantity <= ticket_type.available,
            "{} exceeds availability: {quantity}",
            ticket_type.id
        );
    }
    assert_eq!(state.quantity(&TicketTypeId::new("vip")), 12);
    assert_eq!(state.quantity(&TicketTypeId::new("premium")), 0);
    assert_eq!(state.quantity(&TicketTypeId::new("balcony")), 300);
    assert_eq!(state.quantity(&TicketTypeId::new("regular")), 0);
}

#[test]
fn set_quantity_is_idempotent() {
    let once = reduce_all(vec![set("premium", 4)]);
    let twice = reduce_all(vec![set("premium", 4), set("premium", 4)]);

    assert_eq!(once, twice);
}

#[test]
#[should_panic(expected = "unknown ticket type id")]
fn unknown_ticket_type_is_a_contract_violation() {
    let _ = reduce_all(vec![set("lawn", 1)]);
}

// ============================================================================
// Derived queries
// ============================================================================

#[test]
fn empty_selection_derives_zeroes() {
    let state = SelectionState::new(concert_catalog());

    assert_eq!(state.total_tickets(), 0);
    assert_eq!(state.total_price(), Money::ZERO);
    assert!(state.line_items().is_empty());
    assert!(!state.can_checkout());
}

#[test]
fn order_summary_end_to_end() {
    let state = reduce_all(vec![set("vip", 1), set("premium", 2)]);

    assert_eq!(state.total_tickets(), 3);
    assert_eq!(state.total_price(), Money::from_rupiah(5_500_000));

    let items = state.line_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].ticket_type.id.as_str(), "vip");
    assert_eq!(items[0].quantity, 1);
    assert_eq!(items[0].subtotal, Money::from_rupiah(2_500_000));
    assert_eq!(items[1].ticket_type.id.as_str(), "premium");
    assert_eq!(items[1].quantity, 2);
    assert_eq!(items[1].subtotal, Money::from_rupiah(3_000_000));
}

#[test]
fn removing_a_selection_shrinks_the_summary() {
    let state = reduce_all(vec![set("vip", 1), set("premium", 2), set("vip", 0)]);

    let items = state.line_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].ticket_type.id.as_str(), "premium");
    assert_eq!(state.total_price(), Money::from_rupiah(3_000_000));
}

#[test]
fn line_items_follow_catalog_order_not_insertion_order() {
    // Select back-to-front; the summary still reads front-to-back
    let state = reduce_all(vec![set("balcony", 1), set("regular", 1), set("vip", 1)]);

    let items = state.line_items();
    let ids: Vec<&str> = items
        .iter()
        .map(|item| item.ticket_type.id.as_str())
        .collect();
    assert_eq!(ids, vec!["vip", "regular", "balcony"]);
}

#[test]
fn total_price_matches_line_item_subtotals() {
    let state = reduce_all(vec![set("vip", 2), set("balcony", 5), set("regular", 1)]);

    let from_items = state
        .line_items()
        .iter()
        .fold(Money::ZERO, |sum, item| sum.add(item.subtotal));
    assert_eq!(state.total_price(), from_items);
}

#[test]
fn can_checkout_tracks_total_tickets() {
    let mut state = SelectionState::new(concert_catalog());
    let reducer = SelectionReducer::new();
    let env = test_env();

    assert_eq!(state.can_checkout(), state.total_tickets() > 0);

    reducer.reduce(&mut state, set("regular", 1), &env);
    assert!(state.can_checkout());

    reducer.reduce(&mut state, set("regular", 0), &env);
    assert!(!state.can_checkout());
}

// ============================================================================
// Checkout and lifecycle
// ============================================================================

#[test]
fn checkout_with_empty_selection_surfaces_message() {
    ReducerTest::new(SelectionReducer::new())
        .with_env(test_env())
        .given_state(SelectionState::new(concert_catalog()))
        .when_action(SelectionAction::Checkout)
        .then_state(|state| {
            assert_eq!(state.last_error.as_deref(), Some(EMPTY_SELECTION_MESSAGE));
            assert!(state.is_empty());
        })
        .then_effects(|effects| {
            assertions::assert_no_effects(effects);
        })
        .run();
}

#[test]
fn confirmed_checkout_clears_the_selection() {
    ReducerTest::new(SelectionReducer::new())
        .with_env(test_env())
        .given_state(SelectionState::new(concert_catalog()))
        .when_action(set("vip", 1))
        .when_action(SelectionAction::Checkout)
        .then_state(|state| {
            assert!(state.is_empty());
            assert_eq!(state.last_error, None);
            assert!(!state.can_checkout());
        })
        .run();
}

#[test]
fn successful_selection_clears_earlier_rejection() {
    let state = reduce_all(vec![
        SelectionAction::Checkout, // rejected, sets the message
        set("vip", 1),
        SelectionAction::Checkout, // confirmed, clears it
    ]);

    assert_eq!(state.last_error, None);
    assert!(state.is_empty());
}

#[test]
fn clear_selection_resets_everything() {
    let state = reduce_all(vec![
        set("vip", 2),
        set("premium", 1),
        SelectionAction::ClearSelection,
    ]);

    assert!(state.is_empty());
    assert_eq!(state.last_error, None);
    assert_eq!(state.total_price(), Money::ZERO);
}
