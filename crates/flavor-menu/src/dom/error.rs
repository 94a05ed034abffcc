//! Error types for the document model.

use super::NodeId;
use thiserror::Error;

/// Errors raised while querying or mutating a [`Document`](super::Document).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DocumentError {
    /// The id does not belong to this document.
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    /// The node already has a parent and cannot be inserted again.
    #[error("Node already attached: {0}")]
    AlreadyAttached(NodeId),

    /// Inserting the node would make it its own ancestor.
    #[error("Node would become its own ancestor: {0}")]
    WouldCycle(NodeId),

    /// A required part of the page layout is absent.
    #[error("Missing element: {0}")]
    Missing(&'static str),
}
