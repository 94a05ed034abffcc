//! Reads the flavor listing back out of the page.

mod error;

pub use error::ExtractError;

use crate::dom::{listing, Document, NodeId};
use crate::model::{parse_price, FlavorRecord};
use std::collections::HashSet;
use tracing::debug;

/// Scans every `.flavor` node in document order and returns one record per
/// node. Fails on the first node that violates the listing layout.
pub fn extract_flavors(doc: &Document) -> Result<Vec<FlavorRecord>, ExtractError> {
    let mut records = Vec::new();
    let mut seen = HashSet::new();

    for (position, flavor) in doc
        .find_by_class(doc.root(), listing::FLAVOR)?
        .into_iter()
        .enumerate()
    {
        let record = read_record(doc, position, flavor)?;
        if !seen.insert(record.name.clone()) {
            return Err(ExtractError::DuplicateName(record.name));
        }
        records.push(record);
    }

    debug!(count = records.len(), "Flavors extracted");
    Ok(records)
}

fn read_record(
    doc: &Document,
    position: usize,
    flavor: NodeId,
) -> Result<FlavorRecord, ExtractError> {
    let missing = |part| ExtractError::MissingPart { position, part };

    let description = doc
        .first_by_class(flavor, listing::DESCRIPTION)?
        .ok_or_else(|| missing("description"))?;
    let name_node = doc
        .first_by_tag(description, "h2")?
        .ok_or_else(|| missing("name"))?;
    let text_node = doc
        .first_by_tag(description, "p")?
        .ok_or_else(|| missing("description text"))?;
    let price_node = doc
        .first_by_class(flavor, listing::PRICE)?
        .ok_or_else(|| missing("price"))?;
    let quantity_node = doc
        .first_by_class(flavor, listing::QUANTITY)?
        .ok_or_else(|| missing("quantity"))?;

    let name = doc.text(name_node)?.trim().to_string();
    let price = doc.text(price_node)?.trim().to_string();
    let quantity_text = doc.text(quantity_node)?.trim();

    if parse_price(&price).is_none() {
        return Err(ExtractError::MalformedRecord {
            name,
            field: "price",
            text: price,
        });
    }
    let quantity = quantity_text
        .parse::<u32>()
        .map_err(|_| ExtractError::MalformedRecord {
            name: name.clone(),
            field: "quantity",
            text: quantity_text.to_string(),
        })?;

    Ok(FlavorRecord {
        element: Some(flavor),
        description: doc.text(text_node)?.trim().to_string(),
        name,
        price,
        quantity,
    })
}
