//! Domain types for the concert booking view.
//!
//! This module contains the value objects shared by the booking features:
//! ticket type identifiers, rupiah amounts, catalog entries, order summary
//! rows, and the event header shown above the ticket list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a ticket type (catalog slug, e.g. `"vip"`)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TicketTypeId(String);

impl TicketTypeId {
    /// Creates a `TicketTypeId` from a catalog slug
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Money Value Object (whole rupiah; IDR carries no fraction digits)
// ============================================================================

/// Represents an amount of Indonesian rupiah
///
/// Stored as a whole number of rupiah - the smallest unit of the currency -
/// so all arithmetic stays in integers. Formatting into the localized
/// `Rp 2.500.000` form is a display concern handled by the `Display` impl;
/// domain computations only ever see the raw amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// The zero amount
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from a whole number of rupiah
    #[must_use]
    pub const fn from_rupiah(amount: u64) -> Self {
        Self(amount)
    }

    /// Returns the amount in rupiah
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two amounts with overflow checking
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Adds two amounts
    ///
    /// # Panics
    ///
    /// Panics if the addition would overflow.
    /// Use `checked_add` for non-panicking addition.
    #[must_use]
    #[allow(clippy::panic)]
    pub const fn add(self, other: Self) -> Self {
        match self.checked_add(other) {
            Some(result) => result,
            None => panic!("Money::add overflow"),
        }
    }

    /// Multiplies the amount by a quantity with overflow checking
    #[must_use]
    pub const fn checked_multiply(self, quantity: u32) -> Option<Self> {
        match self.0.checked_mul(quantity as u64) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Multiplies the amount by a quantity
    ///
    /// # Panics
    ///
    /// Panics if the multiplication would overflow.
    /// Use `checked_multiply` for non-panicking multiplication.
    #[must_use]
    #[allow(clippy::panic)]
    pub const fn multiply(self, quantity: u32) -> Self {
        match self.checked_multiply(quantity) {
            Some(result) => result,
            None => panic!("Money::multiply overflow"),
        }
    }
}

impl fmt::Display for Money {
    /// Formats in the id-ID convention with dot thousands separators and no
    /// fraction digits, e.g. `Rp 2.500.000`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / 3);
        for (i, c) in digits.chars().enumerate() {
            if i != 0 && (len - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        write!(f, "Rp {grouped}")
    }
}

// ============================================================================
// Catalog Entries
// ============================================================================

/// A purchasable category of admission (static catalog entry)
///
/// Immutable for the session: the catalog is supplied once when the booking
/// view opens and never changes while a selection is in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketType {
    /// Unique catalog identifier
    pub id: TicketTypeId,
    /// Display name (e.g. "VIP Package")
    pub name: String,
    /// Display blurb shown under the name
    pub description: String,
    /// Price per ticket
    pub unit_price: Money,
    /// Upper bound on the quantity selectable for this type
    pub available: u32,
}

impl TicketType {
    /// Creates a new `TicketType`
    #[must_use]
    pub const fn new(
        id: TicketTypeId,
        name: String,
        description: String,
        unit_price: Money,
        available: u32,
    ) -> Self {
        Self {
            id,
            name,
            description,
            unit_price,
            available,
        }
    }
}

/// One row of the order summary
///
/// Derived on demand from the current selection; never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The selected ticket type
    pub ticket_type: TicketType,
    /// Chosen quantity (always positive)
    pub quantity: u32,
    /// `quantity x unit_price`
    pub subtotal: Money,
}

// ============================================================================
// Event Header
// ============================================================================

/// The concert being booked, as shown in the page header
///
/// Display-only data; no operations depend on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    /// Event title (e.g. "60 Years of Pet Sounds")
    pub title: String,
    /// Performing artist
    pub artist: String,
    /// Venue name
    pub venue: String,
    /// Venue city
    pub city: String,
    /// Scheduled start time
    pub starts_at: DateTime<Utc>,
}

impl EventDetails {
    /// Creates a new `EventDetails`
    #[must_use]
    pub const fn new(
        title: String,
        artist: String,
        venue: String,
        city: String,
        starts_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            artist,
            venue,
            city,
            starts_at,
        }
    }
}

impl fmt::Display for EventDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) \u{2022} {}, {}", self.title, self.artist, self.venue, self.city)
    }
}
