//! Concert Booking - ticket selection and order summary for a box office view
//!
//! This crate holds the domain logic behind the booking page of a concert
//! box office: the visitor picks quantities per ticket type, watches the
//! order summary update, and proceeds to checkout once at least one ticket
//! is selected. It is built on the Boxoffice reducer architecture:
//!
//! - **State**: owned data mutated only through reducer dispatch
//! - **Action**: every input the page can produce
//! - **Reducer**: pure transitions, `(State, Action, Environment) → Effects`
//! - **Store**: the runtime that owns state for a hosting view
//!
//! # Features
//!
//! - [`selection`] - quantity selection with clamping, derived order
//!   summary (line items in catalog order, totals, checkout eligibility)
//! - [`catalog`] - the ordered, session-fixed set of ticket types
//! - [`listings`] - the resale listing browser (price band and tier
//!   filters, sort tabs, party size)
//! - [`validation`] - form-field validators for the login/register pages
//!
//! # Example
//!
//! ```
//! use boxoffice_booking::catalog::Catalog;
//! use boxoffice_booking::selection::{
//!     SelectionAction, SelectionEnvironment, SelectionReducer, SelectionState,
//! };
//! use boxoffice_booking::types::{Money, TicketType, TicketTypeId};
//! use boxoffice_core::{environment::SystemClock, reducer::Reducer};
//!
//! let catalog = Catalog::new(vec![TicketType::new(
//!     TicketTypeId::new("vip"),
//!     "VIP Package".to_string(),
//!     "Premium seating".to_string(),
//!     Money::from_rupiah(2_500_000),
//!     50,
//! )])
//! .unwrap();
//!
//! let reducer = SelectionReducer::new();
//! let env = SelectionEnvironment::new(SystemClock);
//! let mut state = SelectionState::new(catalog);
//!
//! reducer.reduce(
//!     &mut state,
//!     SelectionAction::SetQuantity {
//!         ticket_type: TicketTypeId::new("vip"),
//!         quantity: 2,
//!     },
//!     &env,
//! );
//!
//! assert_eq!(state.total_tickets(), 2);
//! assert_eq!(state.total_price(), Money::from_rupiah(5_000_000));
//! ```

pub mod catalog;
pub mod config;
pub mod listings;
pub mod selection;
pub mod types;
pub mod validation;

pub use catalog::{Catalog, CatalogError};
pub use config::Config;
pub use selection::{
    EMPTY_SELECTION_MESSAGE, SelectionAction, SelectionEnvironment, SelectionReducer,
    SelectionState,
};
pub use types::{EventDetails, LineItem, Money, TicketType, TicketTypeId};
