//! # Event Dispatcher
//!
//! The single writer for a page. An `EventDispatcher` owns one
//! [`PageComponent`] and the receiving end of its queue, and runs every
//! event handler to completion before looking at the next message.

use crate::component::PageComponent;
use crate::error::RuntimeError;
use crate::handle::PageHandle;
use crate::message::PageRequest;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Drives a [`PageComponent`] from a message queue.
///
/// # Concurrency Model
/// Handles may be cloned into any number of tasks, but all of them feed the
/// same queue. The dispatcher pops one request at a time and awaits the
/// handler before popping the next, so the component state never sees two
/// handlers interleave and needs no `Mutex`.
///
/// # Usage Pattern
///
/// ```rust
/// use async_trait::async_trait;
/// use page_runtime::{EventDispatcher, PageComponent};
///
/// #[derive(Clone, Debug, Default)]
/// struct Counter { clicks: u32 }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("counter error")]
/// struct CounterError;
///
/// #[async_trait]
/// impl PageComponent for Counter {
///     type Event = ();
///     type Outcome = u32;
///     type Context = ();
///     type Error = CounterError;
///
///     async fn handle_event(&mut self, _: (), _: &()) -> Result<u32, CounterError> {
///         self.clicks += 1;
///         Ok(self.clicks)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (dispatcher, handle) = EventDispatcher::new(Counter::default(), 8);
///     tokio::spawn(dispatcher.run(()));
///
///     assert_eq!(handle.dispatch(()).await.unwrap(), 1);
///     assert_eq!(handle.dispatch(()).await.unwrap(), 2);
///     assert_eq!(handle.snapshot().await.unwrap().clicks, 2);
/// }
/// ```
pub struct EventDispatcher<T: PageComponent> {
    receiver: mpsc::Receiver<PageRequest<T>>,
    component: T,
}

impl<T: PageComponent> EventDispatcher<T> {
    /// Creates a dispatcher around `component` and the first handle to it.
    ///
    /// `buffer_size` is the queue capacity; senders wait once it is full.
    pub fn new(component: T, buffer_size: usize) -> (Self, PageHandle<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let dispatcher = Self {
            receiver,
            component,
        };
        (dispatcher, PageHandle::new(sender))
    }

    /// Runs the dispatch loop until every handle has been dropped.
    ///
    /// # Context Injection
    /// `context` is passed to every hook of the component.
    pub async fn run(mut self, context: T::Context) {
        // e.g. "MenuPage" instead of "flavor_menu::page::MenuPage"
        let component = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");

        if let Err(e) = self.component.on_mount(&context).await {
            error!(component, error = %e, "on_mount failed");
            return;
        }
        info!(component, "Dispatcher started");

        let mut handled: u64 = 0;
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                PageRequest::Dispatch { event, respond_to } => {
                    debug!(component, ?event, "Dispatch");
                    handled += 1;
                    let result = self
                        .component
                        .handle_event(event, &context)
                        .await
                        .map_err(|e| RuntimeError::ComponentError(Box::new(e)));
                    match &result {
                        Ok(outcome) => info!(component, ?outcome, "Event handled"),
                        Err(e) => warn!(component, error = %e, "Event failed"),
                    }
                    let _ = respond_to.send(result);
                }
                PageRequest::Snapshot { respond_to } => {
                    debug!(component, "Snapshot");
                    let _ = respond_to.send(Ok(self.component.clone()));
                }
            }
        }

        if let Err(e) = self.component.on_unmount(&context).await {
            warn!(component, error = %e, "on_unmount failed");
        }
        info!(component, handled, "Shutdown");
    }
}
