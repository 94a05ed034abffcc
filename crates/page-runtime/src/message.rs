//! # Dispatch Messages
//!
//! The messages exchanged between a [`PageHandle`](crate::PageHandle) and an
//! [`EventDispatcher`](crate::EventDispatcher).

use crate::component::PageComponent;
use crate::error::RuntimeError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the dispatcher.
pub type Response<T> = oneshot::Sender<Result<T, RuntimeError>>;

/// Internal message type sent to the dispatcher.
///
/// - **Dispatch**: deliver one [`PageComponent::Event`] and wait for its outcome.
/// - **Snapshot**: read a copy of the component state between two events.
///
/// Both variants are queued on the same channel, so a snapshot always
/// observes the state left behind by every event sent before it.
#[derive(Debug)]
pub enum PageRequest<T: PageComponent> {
    Dispatch {
        event: T::Event,
        respond_to: Response<T::Outcome>,
    },
    Snapshot {
        respond_to: Response<T>,
    },
}
