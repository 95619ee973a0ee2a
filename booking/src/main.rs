//! Booking demo binary
//!
//! Walks the booking page's domain logic end to end: rejected checkout on an
//! empty selection, quantity changes with clamping, the derived order
//! summary, a confirmed checkout, and a pass over the listing browser.

use anyhow::Result;
use boxoffice_booking::catalog::Catalog;
use boxoffice_booking::config::Config;
use boxoffice_booking::listings::{
    ListingAction, ListingBrowserEnvironment, ListingBrowserReducer, ListingBrowserState,
    ListingId, PriceBand, TicketListing,
};
use boxoffice_booking::selection::{
    SelectionAction, SelectionEnvironment, SelectionReducer, SelectionState,
};
use boxoffice_booking::types::{EventDetails, Money, TicketType, TicketTypeId};
use boxoffice_core::environment::SystemClock;
use boxoffice_runtime::Store;
use chrono::DateTime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// The catalog the booking page is configured with
fn concert_catalog() -> Result<Catalog> {
    let ticket_types = vec![
        TicketType::new(
            TicketTypeId::new("vip"),
            "VIP Package".to_string(),
            "Premium seating, meet & greet, exclusive merchandise, backstage access".to_string(),
            Money::from_rupiah(2_500_000),
            50,
        ),
        TicketType::new(
            TicketTypeId::new("premium"),
            "Premium Seat".to_string(),
            "Front section seating, complimentary drink, event poster".to_string(),
            Money::from_rupiah(1_500_000),
            200,
        ),
        TicketType::new(
            TicketTypeId::new("regular"),
            "Regular Seat".to_string(),
            "Standard seating with great view of the stage".to_string(),
            Money::from_rupiah(750_000),
            500,
        ),
        TicketType::new(
            TicketTypeId::new("balcony"),
            "Balcony Seat".to_string(),
            "Upper level seating, full stage view".to_string(),
            Money::from_rupiah(400_000),
            300,
        ),
    ];

    Ok(Catalog::new(ticket_types)?)
}

/// The concert shown in the page header
fn concert_details() -> Result<EventDetails> {
    let starts_at = DateTime::parse_from_rfc3339("2026-08-17T19:00:00+07:00")?;
    Ok(EventDetails::new(
        "60 Years of Pet Sounds".to_string(),
        "The Beach Boys".to_string(),
        "Gelora Bung Karno".to_string(),
        "Jakarta".to_string(),
        starts_at.to_utc(),
    ))
}

/// Resale listings shown on the seat-map page
fn resale_listings() -> Vec<TicketListing> {
    let listing = |id: &str, section: &str, row: &str, tier: &str, price: u64| TicketListing {
        id: ListingId::new(id),
        section: section.to_string(),
        row: row.to_string(),
        tier: tier.to_string(),
        price_each: Money::from_rupiah(price),
    };

    vec![
        listing("1", "P2-504", "Row O", "General", 950_000),
        listing("2", "P2-504", "Row P", "General", 950_000),
        listing("3", "P2-505", "Row N", "General", 1_100_000),
        listing("4", "CAT 1 A", "Row A", "VIP", 2_500_000),
        listing("5", "CAT 1 B", "Row B", "VIP", 2_500_000),
        listing("6", "CAT 2 I", "Row K", "Premium", 1_500_000),
    ]
}

async fn print_summary(
    store: &Store<
        SelectionState,
        SelectionAction,
        SelectionEnvironment<SystemClock>,
        SelectionReducer<SystemClock>,
    >,
) {
    let snapshot = store.snapshot().await;
    if snapshot.is_empty() {
        println!("   (no tickets selected)");
        return;
    }
    for item in snapshot.line_items() {
        println!(
            "   {} x {} = {}",
            item.ticket_type.name, item.quantity, item.subtotal
        );
    }
    println!(
        "   Total: {} tickets, {}",
        snapshot.total_tickets(),
        snapshot.total_price()
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let details = concert_details()?;
    println!("=== Booking Demo: {details} ===\n");

    // The booking view owns a store over an empty selection
    let store = Store::new(
        SelectionState::new(concert_catalog()?),
        SelectionReducer::new(),
        SelectionEnvironment::new(SystemClock),
    );

    println!("1. Checkout with nothing selected");
    store.send(SelectionAction::Checkout).await;
    if let Some(message) = store.state(|s| s.last_error.clone()).await {
        println!("   Rejected: {message}\n");
    }

    println!("2. Select 1 VIP and 2 Premium");
    store
        .send(SelectionAction::SetQuantity {
            ticket_type: TicketTypeId::new("vip"),
            quantity: 1,
        })
        .await;
    store
        .send(SelectionAction::SetQuantity {
            ticket_type: TicketTypeId::new("premium"),
            quantity: 2,
        })
        .await;
    print_summary(&store).await;

    println!("\n3. Ask for 9999 balcony seats (clamped to availability)");
    store
        .send(SelectionAction::SetQuantity {
            ticket_type: TicketTypeId::new("balcony"),
            quantity: 9999,
        })
        .await;
    println!(
        "   Balcony quantity: {}",
        store
            .state(|s| s.quantity(&TicketTypeId::new("balcony")))
            .await
    );

    println!("\n4. Drop the balcony seats again and check out");
    store
        .send(SelectionAction::SetQuantity {
            ticket_type: TicketTypeId::new("balcony"),
            quantity: 0,
        })
        .await;
    print_summary(&store).await;
    store.send(SelectionAction::Checkout).await;
    println!(
        "   Selection after checkout is empty: {}",
        store.state(SelectionState::is_empty).await
    );

    println!("\n5. Browse resale listings under Rp 1.000.000");
    let browser_store = Store::new(
        ListingBrowserState::new(resale_listings()),
        ListingBrowserReducer::new(),
        ListingBrowserEnvironment::new(config.max_party_size),
    );
    browser_store
        .send(ListingAction::SetPriceBand(PriceBand::UnderOneMillion))
        .await;
    let visible = browser_store
        .state(|s| {
            s.visible()
                .iter()
                .map(|l| format!("Section {} {} ({}) {} each", l.section, l.row, l.tier, l.price_each))
                .collect::<Vec<_>>()
        })
        .await;
    for line in visible {
        println!("   {line}");
    }

    println!("\n=== Demo complete ===");
    Ok(())
}
