//! In-memory presentation tree the page components read and mutate.

pub mod document;
pub mod error;
pub mod listing;
pub mod render;

pub use document::{Document, Element, NodeId};
pub use error::DocumentError;
pub use listing::build_listing;
pub use render::to_html;
