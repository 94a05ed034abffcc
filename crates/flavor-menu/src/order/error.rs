use crate::dom::DocumentError;
use thiserror::Error;

/// Explicit order failures. Silent rejections (empty amount, short stock)
/// are [`OrderOutcome`](super::OrderOutcome) values, not errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Flavor not found: {0}")]
    FlavorNotFound(String),

    #[error("Invalid amount: '{0}' is not a non-negative whole number")]
    InvalidAmount(String),

    #[error("No flavor is selected")]
    NoSelection,

    #[error("No option at index {0}")]
    NoSuchOption(usize),

    #[error(transparent)]
    Document(#[from] DocumentError),
}
