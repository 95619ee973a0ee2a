//! Resale listing browser for the seat-map page.
//!
//! A second pure reducer: browse state (party size, price band, ticket tier,
//! sort tab) over a fixed set of listings, with the visible rows derived on
//! demand. Filters and sorting never mutate the listing data.

use crate::types::Money;
use boxoffice_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a resale listing
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(String);

impl ListingId {
    /// Creates a `ListingId` from a string
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

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One resale listing row (section, row, tier label, price per ticket)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketListing {
    /// Listing identifier
    pub id: ListingId,
    /// Section label (e.g. "CAT 1 A")
    pub section: String,
    /// Row label (e.g. "Row K")
    pub row: String,
    /// Tier label shown under the section (e.g. "VIP")
    pub tier: String,
    /// Price per ticket
    pub price_each: Money,
}

/// Sort tab above the listing column
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortTab {
    /// Ascending by price, stable within equal prices
    #[default]
    LowestPrice,
    /// The curated input order
    BestSeats,
}

/// Price band filter (rupiah)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceBand {
    /// No price restriction
    #[default]
    All,
    /// Strictly below Rp 1.000.000
    UnderOneMillion,
    /// Between Rp 1.000.000 and Rp 2.000.000, both inclusive
    OneToTwoMillion,
    /// Strictly above Rp 2.000.000
    OverTwoMillion,
}

impl PriceBand {
    /// Checks whether a price falls inside the band
    #[must_use]
    pub const fn matches(self, price: Money) -> bool {
        let amount = price.amount();
        match self {
            Self::All => true,
            Self::UnderOneMillion => amount < 1_000_000,
            Self::OneToTwoMillion => amount >= 1_000_000 && amount <= 2_000_000,
            Self::OverTwoMillion => amount > 2_000_000,
        }
    }
}

/// Ticket tier filter
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TierFilter {
    /// No tier restriction
    #[default]
    All,
    /// Only listings whose tier label matches exactly
    Tier(String),
}

impl TierFilter {
    /// Checks whether a listing's tier label passes the filter
    #[must_use]
    pub fn matches(&self, tier: &str) -> bool {
        match self {
            Self::All => true,
            Self::Tier(label) => label.as_str() == tier,
        }
    }
}

/// Browse state for the listing column
///
/// The listings themselves are fixed for the session; only the filters,
/// sort tab, and party size change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingBrowserState {
    listings: Vec<TicketListing>,
    /// How many tickets the visitor is shopping for
    ///
    /// Forwarded to the seat map; it does not filter the listing rows.
    pub party_size: u32,
    /// Active price band filter
    pub price_band: PriceBand,
    /// Active tier filter
    pub tier_filter: TierFilter,
    /// Active sort tab
    pub sort: SortTab,
}

impl ListingBrowserState {
    /// Default party size when the page opens
    pub const DEFAULT_PARTY_SIZE: u32 = 2;

    /// Creates browse state over a fixed set of listings
    #[must_use]
    pub fn new(listings: Vec<TicketListing>) -> Self {
        Self {
            listings,
            party_size: Self::DEFAULT_PARTY_SIZE,
            price_band: PriceBand::default(),
            tier_filter: TierFilter::default(),
            sort: SortTab::default(),
        }
    }

    /// All listings, in curated order, ignoring filters
    #[must_use]
    pub fn listings(&self) -> &[TicketListing] {
        &self.listings
    }

    /// The rows currently visible: both filters applied, then the sort tab
    ///
    /// `LowestPrice` sorts ascending by price and is stable, so equal-priced
    /// listings keep their curated order. `BestSeats` keeps the curated
    /// order untouched.
    #[must_use]
    pub fn visible(&self) -> Vec<&TicketListing> {
        let mut rows: Vec<&TicketListing> = self
            .listings
            .iter()
            .filter(|listing| {
                self.price_band.matches(listing.price_each)
                    && self.tier_filter.matches(&listing.tier)
            })
            .collect();

        match self.sort {
            SortTab::LowestPrice => rows.sort_by_key(|listing| listing.price_each),
            SortTab::BestSeats => {},
        }

        rows
    }
}

/// Actions for the listing browser
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingAction {
    /// Choose how many tickets are being shopped for
    ///
    /// Clamped into `[1, max_party_size]` from the environment.
    SetPartySize(u32),
    /// Switch the price band filter
    SetPriceBand(PriceBand),
    /// Switch the tier filter
    SetTierFilter(TierFilter),
    /// Switch the sort tab
    SetSortTab(SortTab),
}

/// Environment for the listing browser
#[derive(Debug, Clone, Copy)]
pub struct ListingBrowserEnvironment {
    /// Largest party size the dropdown offers
    pub max_party_size: u32,
}

impl ListingBrowserEnvironment {
    /// Create a new listing browser environment
    #[must_use]
    pub const fn new(max_party_size: u32) -> Self {
        Self { max_party_size }
    }
}

/// Reducer for the listing browser
///
/// A pure state machine: every action rewrites one field and produces no
/// effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingBrowserReducer;

impl ListingBrowserReducer {
    /// Create a new listing browser reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for ListingBrowserReducer {
    type State = ListingBrowserState;
    type Action = ListingAction;
    type Environment = ListingBrowserEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            ListingAction::SetPartySize(size) => {
                state.party_size = size.clamp(1, environment.max_party_size);
            },
            ListingAction::SetPriceBand(band) => {
                state.price_band = band;
            },
            ListingAction::SetTierFilter(filter) => {
                state.tier_filter = filter;
            },
            ListingAction::SetSortTab(tab) => {
                state.sort = tab;
            },
        }

        smallvec![Effect::None]
    }
}
