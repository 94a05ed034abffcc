//! Authoritative per-flavor stock.
//!
//! The page displays quantities but does not own them: orders change the
//! [`Inventory`] first and the new value is then projected into the flavor's
//! `.quantity` node. Quantities are unsigned, and a decrement that would go
//! below zero is refused without touching the stored value.

use crate::dom::{listing, Document, DocumentError, NodeId};
use crate::model::FlavorRecord;
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
struct Stock {
    quantity: u32,
    element: Option<NodeId>,
}

/// Keyed by flavor name, in listing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    stock: IndexMap<String, Stock>,
}

impl Inventory {
    /// Record names are assumed unique; the extractor guarantees it.
    pub fn from_records(records: &[FlavorRecord]) -> Self {
        let stock = records
            .iter()
            .map(|record| {
                (
                    record.name.clone(),
                    Stock {
                        quantity: record.quantity,
                        element: record.element,
                    },
                )
            })
            .collect();
        Self { stock }
    }

    pub fn len(&self) -> usize {
        self.stock.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stock.contains_key(name)
    }

    pub fn quantity(&self, name: &str) -> Option<u32> {
        self.stock.get(name).map(|s| s.quantity)
    }

    /// The `.flavor` node the entry was read from.
    pub fn element(&self, name: &str) -> Option<NodeId> {
        self.stock.get(name).and_then(|s| s.element)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stock.keys().map(String::as_str)
    }

    /// Subtracts `amount` and returns the remainder.
    ///
    /// `None` when the flavor is unknown or holds less than `amount`; the
    /// stored quantity is unchanged in both cases.
    pub fn decrement(&mut self, name: &str, amount: u32) -> Option<u32> {
        let stock = self.stock.get_mut(name)?;
        let remaining = stock.quantity.checked_sub(amount)?;
        stock.quantity = remaining;
        Some(remaining)
    }

    /// The `.quantity` node displaying `name`, or `None` for unknown names
    /// and entries without a backing element.
    pub fn counter(&self, doc: &Document, name: &str) -> Result<Option<NodeId>, DocumentError> {
        let Some(element) = self.element(name) else {
            return Ok(None);
        };
        doc.first_by_class(element, listing::QUANTITY)?
            .map(Some)
            .ok_or(DocumentError::Missing(".quantity"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> Inventory {
        Inventory::from_records(&[
            FlavorRecord::new("Mint Chip", "", "$1.45", 5),
            FlavorRecord::new("Pistachio", "", "$2.25", 0),
        ])
    }

    #[test]
    fn test_decrement_within_stock() {
        let mut inventory = inventory();
        assert_eq!(inventory.decrement("Mint Chip", 3), Some(2));
        assert_eq!(inventory.quantity("Mint Chip"), Some(2));
        assert_eq!(inventory.decrement("Mint Chip", 2), Some(0));
        assert_eq!(inventory.quantity("Mint Chip"), Some(0));
    }

    #[test]
    fn test_overdraw_leaves_stock_untouched() {
        let mut inventory = inventory();
        assert_eq!(inventory.decrement("Mint Chip", 6), None);
        assert_eq!(inventory.quantity("Mint Chip"), Some(5));
        assert_eq!(inventory.decrement("Pistachio", 1), None);
        assert_eq!(inventory.quantity("Pistachio"), Some(0));
    }

    #[test]
    fn test_unknown_flavor() {
        let mut inventory = inventory();
        assert_eq!(inventory.quantity("Rocky Road"), None);
        assert_eq!(inventory.decrement("Rocky Road", 1), None);
        assert!(!inventory.contains("Rocky Road"));
    }

    #[test]
    fn test_counter_needs_backing_element() {
        let doc = Document::new();
        assert_eq!(inventory().counter(&doc, "Mint Chip"), Ok(None));
        assert_eq!(inventory().counter(&doc, "Rocky Road"), Ok(None));
    }

    #[test]
    fn test_names_keep_listing_order() {
        let inventory = inventory();
        let names: Vec<&str> = inventory.names().collect();
        assert_eq!(names, ["Mint Chip", "Pistachio"]);
    }
}
