//! # Flavor Menu
//!
//! An ice-cream menu page with live inventory. A static listing is rendered
//! into an in-memory presentation tree, stocked with random quantities,
//! summarized (average price, cheap flavors) and then driven by form and
//! click events through a single page dispatcher.
//!
//! - [`dom`]: the presentation tree, the listing builder and HTML output
//! - [`quantity`], [`layout`], [`extract`], [`stats`], [`options`]: boot steps
//! - [`inventory`], [`order`]: keyed stock and the order binder
//! - [`favorite`]: click-to-highlight
//! - [`page`]: the [`MenuPage`](page::MenuPage) component
//! - [`clients`]: [`MenuClient`](clients::MenuClient)
//! - [`lifecycle`]: [`MenuSystem`](lifecycle::MenuSystem) start and shutdown
//! - [`config`], [`model`]: configuration and menu files
//!
//! See [`page_runtime::mock`] for testing clients without a running page.

pub mod clients;
pub mod config;
pub mod dom;
pub mod extract;
pub mod favorite;
pub mod inventory;
pub mod layout;
pub mod lifecycle;
pub mod model;
pub mod options;
pub mod order;
pub mod page;
pub mod quantity;
pub mod stats;
