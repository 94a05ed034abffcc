//! # Menu Page
//!
//! The page component: the presentation tree, the inventory behind it and
//! the records extracted at boot. A [`MenuPage`] is owned by a single
//! [`EventDispatcher`](page_runtime::EventDispatcher); every interaction
//! arrives as a [`PageEvent`] and runs to completion before the next one.
//!
//! ## Structure
//!
//! - [`events`]: [`PageEvent`] and [`PageOutcome`]
//! - [`component`]: the [`PageComponent`](page_runtime::PageComponent) implementation
//! - [`error`]: [`MenuError`]
//! - [`MenuPage::boot`]: startup sequence
//! - [`new()`]: creates the dispatcher and its first handle
//!
//! ## Startup
//!
//! [`MenuPage::boot`] runs the steps in a fixed order:
//!
//! 1. random quantities are inserted into every flavor card
//! 2. the layout arranger places the cards
//! 3. the records are extracted, once
//! 4. the inventory is keyed from the records
//! 5. average price and cheap flavors are computed and logged
//! 6. the order selector is filled
//!
//! ```rust
//! use flavor_menu::config::MenuConfig;
//! use flavor_menu::dom::build_listing;
//! use flavor_menu::layout::ColumnLayout;
//! use flavor_menu::model::Menu;
//! use flavor_menu::page::MenuPage;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let document = build_listing(&Menu::demo().unwrap()).unwrap();
//! let (page, stats) = MenuPage::boot(
//!     document,
//!     &MenuConfig::default(),
//!     &mut StdRng::seed_from_u64(1),
//!     &ColumnLayout::new(3),
//! )
//! .unwrap();
//!
//! assert_eq!(page.records().len(), 8);
//! assert!(stats.is_some());
//! ```

pub mod component;
pub mod error;
pub mod events;

pub use error::*;
pub use events::*;

use crate::config::MenuConfig;
use crate::dom::{listing, Document, NodeId};
use crate::extract::extract_flavors;
use crate::inventory::Inventory;
use crate::layout::LayoutArranger;
use crate::model::FlavorRecord;
use crate::options::populate_options;
use crate::quantity::set_quantities;
use crate::stats::MenuStatistics;
use page_runtime::{EventDispatcher, PageHandle};
use rand::Rng;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct MenuPage {
    document: Document,
    inventory: Inventory,
    records: Vec<FlavorRecord>,
}

impl MenuPage {
    /// Brings a freshly built listing to its interactive state.
    ///
    /// Statistics are `None` when the listing has no flavors.
    pub fn boot<R, L>(
        mut document: Document,
        config: &MenuConfig,
        rng: &mut R,
        layout: &L,
    ) -> Result<(Self, Option<MenuStatistics>), MenuError>
    where
        R: Rng + ?Sized,
        L: LayoutArranger + ?Sized,
    {
        set_quantities(&mut document, config.quantity, rng)?;

        let container = listing::container(&document)?;
        layout.arrange(&mut document, container)?;

        let records = extract_flavors(&document)?;
        let inventory = Inventory::from_records(&records);

        let statistics = if records.is_empty() {
            warn!("Menu has no flavors, skipping statistics");
            None
        } else {
            let stats = MenuStatistics::compute(&records, config.cheap_threshold)?;
            info!(average = %stats.average_price, "Average price");
            info!(cheap = ?stats.cheap_flavors, "Cheap flavors");
            Some(stats)
        };

        populate_options(&mut document, &records)?;

        Ok((
            Self {
                document,
                inventory,
                records,
            },
            statistics,
        ))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Records as extracted at boot. Quantities here go stale after the
    /// first order; use [`MenuPage::inventory`] for live values.
    pub fn records(&self) -> &[FlavorRecord] {
        &self.records
    }

    fn flavor_at(&self, card: NodeId) -> String {
        self.records
            .iter()
            .find(|r| r.element == Some(card))
            .map(|r| r.name.clone())
            .unwrap_or_else(|| card.to_string())
    }
}

/// Creates the dispatcher for `page` and the first handle to it.
pub fn new(page: MenuPage) -> (EventDispatcher<MenuPage>, PageHandle<MenuPage>) {
    EventDispatcher::new(page, 32)
}
