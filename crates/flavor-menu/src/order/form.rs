//! Form state kept in the tree: the selected option and the amount text.

use super::{OrderError, OrderRequest};
use crate::dom::{listing, Document};

const SELECTED: &str = "selected";

/// Marks the option at `index` as the only selected one.
pub fn select_flavor(doc: &mut Document, index: usize) -> Result<(), OrderError> {
    let select = listing::order_select(doc)?;
    let options = doc.children(select)?.to_vec();
    if index >= options.len() {
        return Err(OrderError::NoSuchOption(index));
    }
    for option in &options {
        doc.remove_attribute(*option, SELECTED)?;
    }
    doc.set_attribute(options[index], SELECTED, SELECTED)?;
    Ok(())
}

/// Replaces the raw text of the amount input.
pub fn enter_amount(doc: &mut Document, text: &str) -> Result<(), OrderError> {
    let input = listing::amount_input(doc)?;
    doc.set_attribute(input, "value", text)?;
    Ok(())
}

/// Reads the current submission: the selected option's label (the first
/// option when none is marked) and the amount text as typed.
pub fn read_order_form(doc: &Document) -> Result<OrderRequest, OrderError> {
    let select = listing::order_select(doc)?;
    let options = doc.children(select)?;

    let mut chosen = options.first().copied();
    for option in options {
        if doc.attribute(*option, SELECTED)?.is_some() {
            chosen = Some(*option);
            break;
        }
    }
    let chosen = chosen.ok_or(OrderError::NoSelection)?;

    let input = listing::amount_input(doc)?;
    Ok(OrderRequest {
        flavor: doc.text(chosen)?.to_string(),
        amount: doc.attribute(input, "value")?.unwrap_or_default().to_string(),
    })
}
