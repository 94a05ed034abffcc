//! Quantity initialization: every flavor gets a fresh `.quantity` counter.
//!
//! Runs before layout, since the new counters change how tall each flavor
//! card is.

use crate::config::ConfigError;
use crate::dom::{listing, Document, DocumentError, Element};
use rand::Rng;
use tracing::{debug, info};

/// Inclusive range random quantities are drawn from. Always `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityRange {
    min: u32,
    max: u32,
}

impl Default for QuantityRange {
    fn default() -> Self {
        Self { min: 1, max: 20 }
    }
}

impl QuantityRange {
    pub fn new(min: u32, max: u32) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, quantity: u32) -> bool {
        (self.min..=self.max).contains(&quantity)
    }

    /// Draws uniformly from `[min, max]`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Inserts a `span.quantity` holding a random value as the first child of
/// each flavor's `.meta` region.
///
/// Returns the assigned values in document order. A flavor without a `.meta`
/// region is skipped here and reported later by the extractor.
pub fn set_quantities<R: Rng + ?Sized>(
    doc: &mut Document,
    range: QuantityRange,
    rng: &mut R,
) -> Result<Vec<u32>, DocumentError> {
    let mut assigned = Vec::new();
    for flavor in doc.find_by_class(doc.root(), listing::FLAVOR)? {
        let Some(meta) = doc.first_by_class(flavor, listing::META)? else {
            debug!(%flavor, "Flavor has no meta region");
            continue;
        };
        let quantity = range.sample(rng);
        let counter = doc.create(
            Element::new("span")
                .with_class(listing::QUANTITY)
                .with_text(quantity.to_string()),
        );
        doc.prepend_child(meta, counter)?;
        assigned.push(quantity);
    }
    info!(flavors = assigned.len(), "Quantities initialized");
    Ok(assigned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::listing::build_listing;
    use crate::model::{Menu, MenuItem};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn two_flavor_page() -> Document {
        build_listing(&Menu::new(vec![
            MenuItem::new("Mint Chip", "Cool.", "$1.45"),
            MenuItem::new("Pistachio", "Nutty.", "$2.25"),
        ]))
        .unwrap()
    }

    #[test]
    fn test_counter_is_first_child_of_meta() {
        let mut doc = two_flavor_page();
        let mut rng = StdRng::seed_from_u64(7);
        let assigned = set_quantities(&mut doc, QuantityRange::default(), &mut rng).unwrap();
        assert_eq!(assigned.len(), 2);

        for (meta, expected) in doc
            .find_by_class(doc.root(), listing::META)
            .unwrap()
            .into_iter()
            .zip(assigned)
        {
            let first = doc.children(meta).unwrap()[0];
            assert!(doc.element(first).unwrap().has_class(listing::QUANTITY));
            assert_eq!(doc.text(first).unwrap(), expected.to_string());
        }
    }

    #[test]
    fn test_same_seed_same_quantities() {
        let mut a = two_flavor_page();
        let mut b = two_flavor_page();
        let range = QuantityRange::default();
        let first = set_quantities(&mut a, range, &mut StdRng::seed_from_u64(99)).unwrap();
        let second = set_quantities(&mut b, range, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        assert_eq!(
            QuantityRange::new(5, 4),
            Err(ConfigError::InvertedRange { min: 5, max: 4 })
        );
        assert!(QuantityRange::new(3, 3).unwrap().contains(3));
    }

    proptest! {
        #[test]
        fn assigned_quantities_stay_in_range(seed in any::<u64>(), min in 0u32..30, span in 0u32..30) {
            let range = QuantityRange::new(min, min + span).unwrap();
            let mut doc = two_flavor_page();
            let mut rng = StdRng::seed_from_u64(seed);
            for quantity in set_quantities(&mut doc, range, &mut rng).unwrap() {
                prop_assert!(range.contains(quantity));
            }
        }
    }
}
