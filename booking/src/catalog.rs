//! The ticket catalog: an ordered, session-fixed sequence of ticket types.
//!
//! Catalog order is load-bearing: the order summary lists line items in
//! catalog order regardless of the order in which the user selected them.

use crate::types::{TicketType, TicketTypeId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised when constructing a catalog from configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two catalog entries share the same identifier
    #[error("duplicate ticket type id: {0}")]
    DuplicateId(TicketTypeId),
}

/// Ordered collection of the ticket types on sale for the session
///
/// Supplied once by the hosting view when the booking page opens (static
/// configuration, not user input) and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    ticket_types: Vec<TicketType>,
}

impl Catalog {
    /// Creates a catalog, validating that every id is unique
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two entries share an id.
    pub fn new(ticket_types: Vec<TicketType>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for ticket_type in &ticket_types {
            if !seen.insert(ticket_type.id.clone()) {
                return Err(CatalogError::DuplicateId(ticket_type.id.clone()));
            }
        }
        Ok(Self { ticket_types })
    }

    /// Looks up a ticket type by id
    #[must_use]
    pub fn get(&self, id: &TicketTypeId) -> Option<&TicketType> {
        self.ticket_types.iter().find(|t| &t.id == id)
    }

    /// Checks whether an id belongs to the catalog
    #[must_use]
    pub fn contains(&self, id: &TicketTypeId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates the ticket types in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, TicketType> {
        self.ticket_types.iter()
    }

    /// Returns the number of ticket types
    #[must_use]
    pub fn len(&self) -> usize {
        self.ticket_types.len()
    }

    /// Checks if the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticket_types.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a TicketType;
    type IntoIter = std::slice::Iter<'a, TicketType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)] // Test code
mod tests {
    use super::*;
    use crate::types::Money;

    fn ticket(id: &str, price: u64, available: u32) -> TicketType {
        TicketType::new(
            TicketTypeId::new(id),
            id.to_uppercase(),
            String::new(),
            Money::from_rupiah(price),
            available,
        )
    }

    #[test]
    fn catalog_preserves_order() {
        let catalog = Catalog::new(vec![
            ticket("vip", 2_500_000, 50),
            ticket("premium", 1_500_000, 200),
            ticket("regular", 750_000, 500),
        ])
        .expect("unique ids");

        let ids: Vec<&str> = catalog.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["vip", "premium", "regular"]);
    }

    #[test]
    fn catalog_rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            ticket("vip", 2_500_000, 50),
            ticket("vip", 1_500_000, 200),
        ]);

        assert_eq!(result, Err(CatalogError::DuplicateId(TicketTypeId::new("vip"))));
    }

    #[test]
    fn catalog_lookup() {
        let catalog = Catalog::new(vec![ticket("balcony", 400_000, 300)]).expect("unique ids");

        assert!(catalog.contains(&TicketTypeId::new("balcony")));
        assert!(!catalog.contains(&TicketTypeId::new("vip")));
        assert_eq!(
            catalog.get(&TicketTypeId::new("balcony")).map(|t| t.available),
            Some(300)
        );
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = Catalog::new(Vec::new()).expect("empty is fine");
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
