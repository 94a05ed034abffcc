use crate::config::ConfigError;
use crate::dom::DocumentError;
use crate::extract::ExtractError;
use crate::order::OrderError;
use crate::stats::StatsError;
use thiserror::Error;

/// Everything that can go wrong on the menu page, from boot to the last event.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The dispatcher could not be reached.
    #[error("Page communication error: {0}")]
    Runtime(String),
}
