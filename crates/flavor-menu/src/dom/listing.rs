//! The page skeleton every other component reads from.
//!
//! ```text
//! body
//! ├── div#container
//! │   └── div.flavor            (one per menu item)
//! │       ├── div.description
//! │       │   ├── h2            name
//! │       │   └── p             description
//! │       └── div.meta
//! │           └── span.price    "$1.50"
//! └── div#footer
//!     └── form
//!         ├── select            placeholder option first
//!         ├── input[name=amount]
//!         └── button
//! ```

use super::{Document, DocumentError, Element};
use crate::model::Menu;

pub const FLAVOR: &str = "flavor";
pub const DESCRIPTION: &str = "description";
pub const PRICE: &str = "price";
pub const QUANTITY: &str = "quantity";
pub const META: &str = "meta";
pub const HIGHLIGHTED: &str = "highlighted";

pub const CONTAINER_ID: &str = "container";
pub const FOOTER_ID: &str = "footer";
pub const AMOUNT_INPUT: &str = "amount";
pub const PLACEHOLDER_OPTION: &str = "Choose a flavor";

/// Renders `menu` into a fresh document. Quantities are not part of the
/// static listing; see [`set_quantities`](crate::quantity::set_quantities).
pub fn build_listing(menu: &Menu) -> Result<Document, DocumentError> {
    let mut doc = Document::new();
    let body = doc.root();

    let container = doc.append(body, Element::new("div").with_id(CONTAINER_ID))?;
    for item in &menu.flavors {
        let flavor = doc.append(container, Element::new("div").with_class(FLAVOR))?;

        let description = doc.append(flavor, Element::new("div").with_class(DESCRIPTION))?;
        doc.append(description, Element::new("h2").with_text(&item.name))?;
        doc.append(description, Element::new("p").with_text(&item.description))?;

        let meta = doc.append(flavor, Element::new("div").with_class(META))?;
        doc.append(
            meta,
            Element::new("span").with_class(PRICE).with_text(&item.price),
        )?;
    }

    let footer = doc.append(body, Element::new("div").with_id(FOOTER_ID))?;
    let form = doc.append(footer, Element::new("form"))?;
    let select = doc.append(form, Element::new("select"))?;
    doc.append(
        select,
        Element::new("option")
            .with_attribute("value", "")
            .with_text(PLACEHOLDER_OPTION),
    )?;
    doc.append(
        form,
        Element::new("input")
            .with_attribute("type", "number")
            .with_attribute("name", AMOUNT_INPUT)
            .with_attribute("value", ""),
    )?;
    doc.append(
        form,
        Element::new("button")
            .with_attribute("type", "submit")
            .with_text("Order"),
    )?;

    Ok(doc)
}

/// The `#container` region.
pub fn container(doc: &Document) -> Result<super::NodeId, DocumentError> {
    doc.find_by_id(CONTAINER_ID)
        .ok_or(DocumentError::Missing("#container"))
}

/// The order `select` inside `#footer`.
pub fn order_select(doc: &Document) -> Result<super::NodeId, DocumentError> {
    let footer = doc
        .find_by_id(FOOTER_ID)
        .ok_or(DocumentError::Missing("#footer"))?;
    doc.first_by_tag(footer, "select")?
        .ok_or(DocumentError::Missing("#footer select"))
}

/// The `input[name=amount]` inside `#footer`.
pub fn amount_input(doc: &Document) -> Result<super::NodeId, DocumentError> {
    let footer = doc
        .find_by_id(FOOTER_ID)
        .ok_or(DocumentError::Missing("#footer"))?;
    for input in doc.find_by_tag(footer, "input")? {
        if doc.attribute(input, "name")? == Some(AMOUNT_INPUT) {
            return Ok(input);
        }
    }
    Err(DocumentError::Missing("#footer input[name=amount]"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuItem;

    #[test]
    fn test_listing_shape() {
        let menu = Menu::new(vec![
            MenuItem::new("Vanilla Bean", "Classic.", "$1.25"),
            MenuItem::new("Lemon Sorbet", "Tart.", "$1.10"),
        ]);
        let doc = build_listing(&menu).unwrap();

        let container = container(&doc).unwrap();
        let flavors = doc.find_by_class(container, FLAVOR).unwrap();
        assert_eq!(flavors.len(), 2);

        let h2 = doc.first_by_tag(flavors[1], "h2").unwrap().unwrap();
        assert_eq!(doc.text(h2).unwrap(), "Lemon Sorbet");
        let price = doc.first_by_class(flavors[0], PRICE).unwrap().unwrap();
        assert_eq!(doc.text(price).unwrap(), "$1.25");

        let select = order_select(&doc).unwrap();
        assert_eq!(doc.children(select).unwrap().len(), 1);
        assert!(amount_input(&doc).is_ok());
    }

    #[test]
    fn test_missing_footer_is_reported() {
        let doc = Document::new();
        assert_eq!(order_select(&doc), Err(DocumentError::Missing("#footer")));
        assert_eq!(container(&doc), Err(DocumentError::Missing("#container")));
    }
}
