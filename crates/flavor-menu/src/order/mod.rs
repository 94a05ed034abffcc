//! # Order processing
//!
//! One submission runs through four steps and always ends back at idle:
//!
//! 1. **Validate**: the amount text is trimmed. Empty text ends the
//!    submission silently with [`OrderOutcome::EmptyAmount`]; anything that is
//!    not a non-negative whole number is [`OrderError::InvalidAmount`].
//! 2. **Lookup**: the flavor is found by exact name in the [`Inventory`].
//!    An unknown name is [`OrderError::FlavorNotFound`].
//! 3. **Decrement**: if the stock covers the amount the inventory is updated,
//!    otherwise the submission ends with [`OrderOutcome::Insufficient`].
//! 4. **Project**: the new quantity is written into the flavor's `.quantity`
//!    node, which was located before the decrement.
//!
//! No step before the decrement mutates anything, so every rejection leaves
//! both the inventory and the page as they were.

mod error;
mod form;

pub use error::OrderError;
pub use form::{enter_amount, read_order_form, select_flavor};

use crate::dom::Document;
use crate::inventory::Inventory;
use tracing::{debug, info};

/// A submission as read from the form: flavor label and raw amount text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub flavor: String,
    pub amount: String,
}

impl OrderRequest {
    pub fn new(flavor: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            flavor: flavor.into(),
            amount: amount.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    Applied { flavor: String, remaining: u32 },
    /// Nothing was typed; ignored.
    EmptyAmount,
    /// Not enough stock; ignored.
    Insufficient {
        flavor: String,
        requested: u32,
        available: u32,
    },
}

/// `Ok(None)` for blank text, `Ok(Some(n))` for a whole number.
///
/// Whole numbers too large for a `u32` saturate to `u32::MAX`; no stock can
/// cover them, so the order ends as insufficient rather than invalid.
pub fn parse_amount(text: &str) -> Result<Option<u32>, OrderError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(OrderError::InvalidAmount(trimmed.to_string()));
    }
    Ok(Some(trimmed.parse::<u32>().unwrap_or(u32::MAX)))
}

pub fn process_order(
    doc: &mut Document,
    inventory: &mut Inventory,
    request: &OrderRequest,
) -> Result<OrderOutcome, OrderError> {
    let Some(amount) = parse_amount(&request.amount)? else {
        debug!(flavor = %request.flavor, "Empty amount, order ignored");
        return Ok(OrderOutcome::EmptyAmount);
    };

    let available = inventory
        .quantity(&request.flavor)
        .ok_or_else(|| OrderError::FlavorNotFound(request.flavor.clone()))?;

    // Resolve the display node first so a broken card fails before the
    // inventory changes.
    let counter = inventory.counter(doc, &request.flavor)?;

    let Some(remaining) = inventory.decrement(&request.flavor, amount) else {
        debug!(
            flavor = %request.flavor,
            requested = amount,
            available,
            "Insufficient stock, order ignored"
        );
        return Ok(OrderOutcome::Insufficient {
            flavor: request.flavor.clone(),
            requested: amount,
            available,
        });
    };

    if let Some(counter) = counter {
        doc.set_text(counter, remaining.to_string())?;
    }
    info!(flavor = %request.flavor, amount, remaining, "Order applied");
    Ok(OrderOutcome::Applied {
        flavor: request.flavor.clone(),
        remaining,
    })
}
