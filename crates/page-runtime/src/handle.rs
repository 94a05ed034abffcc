//! # Page Handle
//!
//! The sending side of a dispatcher queue.

use crate::component::PageComponent;
use crate::error::RuntimeError;
use crate::message::PageRequest;
use tokio::sync::{mpsc, oneshot};

/// A cloneable, type-safe handle to a running [`EventDispatcher`](crate::EventDispatcher).
///
/// Holds only a sender, so cloning is cheap. Dropping the last handle closes
/// the queue and lets the dispatcher shut down.
pub struct PageHandle<T: PageComponent> {
    sender: mpsc::Sender<PageRequest<T>>,
}

impl<T: PageComponent> Clone for PageHandle<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: PageComponent> PageHandle<T> {
    pub fn new(sender: mpsc::Sender<PageRequest<T>>) -> Self {
        Self { sender }
    }

    /// Delivers `event` and waits for the handler to finish.
    pub async fn dispatch(&self, event: T::Event) -> Result<T::Outcome, RuntimeError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(PageRequest::Dispatch { event, respond_to })
            .await
            .map_err(|_| RuntimeError::DispatcherClosed)?;
        response.await.map_err(|_| RuntimeError::DispatcherDropped)?
    }

    /// Returns a copy of the component state as of this point in the queue.
    pub async fn snapshot(&self) -> Result<T, RuntimeError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(PageRequest::Snapshot { respond_to })
            .await
            .map_err(|_| RuntimeError::DispatcherClosed)?;
        response.await.map_err(|_| RuntimeError::DispatcherDropped)?
    }
}
