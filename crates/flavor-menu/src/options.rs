//! Fills the order selector from the extracted records.

use crate::dom::{listing, Document, DocumentError, Element, NodeId};
use crate::model::FlavorRecord;
use tracing::debug;

/// Drops the selector's placeholder (its first option) and appends one
/// option per record, text and value set to the flavor name. Returns the
/// selector node.
pub fn populate_options(
    doc: &mut Document,
    records: &[FlavorRecord],
) -> Result<NodeId, DocumentError> {
    let select = listing::order_select(doc)?;
    doc.remove_child_at(select, 0)?;
    for record in records {
        doc.append(
            select,
            Element::new("option")
                .with_attribute("value", &record.name)
                .with_text(&record.name),
        )?;
    }
    debug!(options = records.len(), "Order options populated");
    Ok(select)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::build_listing;
    use crate::model::Menu;

    #[test]
    fn test_one_option_per_record_in_order() {
        let mut doc = build_listing(&Menu::default()).unwrap();
        let records = vec![
            FlavorRecord::new("Mint Chip", "", "$1.45", 3),
            FlavorRecord::new("Pistachio", "", "$2.25", 9),
        ];
        let select = populate_options(&mut doc, &records).unwrap();

        let labels: Vec<&str> = doc
            .children(select)
            .unwrap()
            .iter()
            .map(|option| doc.text(*option).unwrap())
            .collect();
        assert_eq!(labels, ["Mint Chip", "Pistachio"]);
    }

    #[test]
    fn test_missing_selector_is_an_error() {
        let mut doc = Document::new();
        assert_eq!(
            populate_options(&mut doc, &[]),
            Err(DocumentError::Missing("#footer"))
        );
    }
}
