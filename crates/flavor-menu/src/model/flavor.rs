use crate::dom::NodeId;

/// The fixed currency symbol every displayed price starts with.
pub const CURRENCY_PREFIX: char = '$';

/// One flavor as read from the page.
///
/// A record is a snapshot: the live quantity is owned by the
/// [`Inventory`](crate::inventory::Inventory) and the page, and a record
/// taken before an order keeps the old value.
#[derive(Debug, Clone, PartialEq)]
pub struct FlavorRecord {
    /// The `.flavor` node this record was read from; `None` for records
    /// built by hand.
    pub element: Option<NodeId>,
    pub name: String,
    pub description: String,
    /// Price text as displayed, e.g. `"$1.50"`.
    pub price: String,
    pub quantity: u32,
}

impl FlavorRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            element: None,
            name: name.into(),
            description: description.into(),
            price: price.into(),
            quantity,
        }
    }

    /// The numeric price, if the text is well formed.
    pub fn price_value(&self) -> Option<f64> {
        parse_price(&self.price)
    }
}

/// Parses `"$<decimal>"` into a non-negative finite number.
pub fn parse_price(text: &str) -> Option<f64> {
    let value: f64 = text.trim().strip_prefix(CURRENCY_PREFIX)?.parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("$1.50"), Some(1.5));
        assert_eq!(parse_price(" $2 "), Some(2.0));
        assert_eq!(parse_price("1.50"), None);
        assert_eq!(parse_price("$"), None);
        assert_eq!(parse_price("$abc"), None);
        assert_eq!(parse_price("$-1.00"), None);
        assert_eq!(parse_price("$NaN"), None);
        assert_eq!(parse_price("$inf"), None);
    }
}
