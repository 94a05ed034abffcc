//! # Runtime Errors
//!
//! Failures that belong to the dispatch plumbing rather than to a component.
//! Component failures travel inside [`RuntimeError::ComponentError`] so that
//! handle wrappers can recover the concrete type with `downcast`.

/// Errors that can occur between a [`PageHandle`](crate::PageHandle) and its dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("Dispatcher closed")]
    DispatcherClosed,
    #[error("Dispatcher dropped response channel")]
    DispatcherDropped,
    #[error("Component error: {0}")]
    ComponentError(Box<dyn std::error::Error + Send + Sync>),
}
