//! Click-to-favorite: a click anywhere inside a flavor card toggles the
//! `highlighted` class on that card alone.

use crate::dom::{listing, Document, DocumentError, NodeId};

/// Toggles the card containing `target`. Returns the card and whether it is
/// now highlighted, or `None` when the click landed outside every card.
pub fn click(doc: &mut Document, target: NodeId) -> Result<Option<(NodeId, bool)>, DocumentError> {
    let Some(card) = doc.closest_with_class(target, listing::FLAVOR)? else {
        return Ok(None);
    };
    let highlighted = doc.toggle_class(card, listing::HIGHLIGHTED)?;
    Ok(Some((card, highlighted)))
}

pub fn is_highlighted(doc: &Document, card: NodeId) -> Result<bool, DocumentError> {
    Ok(doc.element(card)?.has_class(listing::HIGHLIGHTED))
}
