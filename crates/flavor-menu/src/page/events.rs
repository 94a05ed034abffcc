use crate::dom::NodeId;
use crate::order::OrderOutcome;

/// Interactions the page reacts to, one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Choose the order option at this index.
    SelectFlavor(usize),
    /// Replace the text of the amount input.
    EnterAmount(String),
    /// Submit the form as it currently stands.
    SubmitOrder,
    /// Submit an order without going through the form controls.
    PlaceOrder { flavor: String, amount: String },
    /// A click on any node; only clicks inside a flavor card matter.
    Click(NodeId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    FormUpdated,
    Order(OrderOutcome),
    Highlight { flavor: String, highlighted: bool },
    Ignored,
}
