//! Layout arrangement of the flavor cards.
//!
//! Startup hands the `#container` region to a [`LayoutArranger`] once every
//! card carries its quantity counter. The arranger may only touch layout
//! attributes; it never reorders or removes cards, so extraction order is
//! unaffected.

use crate::dom::{listing, Document, DocumentError, NodeId};
use tracing::debug;

pub const COLUMN_ATTRIBUTE: &str = "data-column";

pub trait LayoutArranger: Send {
    fn arrange(&self, doc: &mut Document, container: NodeId) -> Result<(), DocumentError>;
}

/// Masonry-style columns: each card goes into the currently shortest column.
///
/// Card height is estimated by the number of nodes it contains. Ties go to
/// the leftmost column, so equally sized cards fill columns round-robin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    columns: usize,
}

impl ColumnLayout {
    /// A zero column count is treated as one.
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
}

impl LayoutArranger for ColumnLayout {
    fn arrange(&self, doc: &mut Document, container: NodeId) -> Result<(), DocumentError> {
        let mut heights = vec![0usize; self.columns];
        for card in doc.find_by_class(container, listing::FLAVOR)? {
            let height = doc.descendants(card)?.len() + 1;
            let column = shortest(&heights);
            heights[column] += height;
            doc.set_attribute(card, COLUMN_ATTRIBUTE, column.to_string())?;
        }
        debug!(columns = self.columns, ?heights, "Layout arranged");
        Ok(())
    }
}

fn shortest(heights: &[usize]) -> usize {
    heights
        .iter()
        .enumerate()
        .min_by_key(|(index, height)| (**height, *index))
        .map(|(index, _)| index)
        .unwrap_or(0)
}
