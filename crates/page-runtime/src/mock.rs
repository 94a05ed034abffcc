//! # Mock Handles
//!
//! `MockHandle<T>` hands out a real [`PageHandle<T>`] whose requests are
//! answered from a queue of expectations instead of by a dispatcher. Use it
//! to test wrappers such as a domain client without building the component.
//!
//! | | MockHandle | Real dispatcher |
//! |---|---|---|
//! | **State** | None, canned responses | Real component state |
//! | **Error injection** | `return_err` | Requires crafting bad state |
//! | **Use case** | Logic *around* the handle | The component itself |
//!
//! ```rust
//! use async_trait::async_trait;
//! use page_runtime::mock::MockHandle;
//! use page_runtime::{PageComponent, RuntimeError};
//!
//! #[derive(Clone, Debug)] struct Toggle { on: bool }
//! #[derive(Debug, thiserror::Error)] #[error("toggle")] struct ToggleError;
//!
//! #[async_trait]
//! impl PageComponent for Toggle {
//!     type Event = (); type Outcome = bool; type Context = (); type Error = ToggleError;
//!     async fn handle_event(&mut self, _: (), _: &()) -> Result<bool, ToggleError> {
//!         self.on = !self.on;
//!         Ok(self.on)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockHandle::<Toggle>::new();
//!     mock.expect_dispatch().return_ok(true);
//!     mock.expect_snapshot().return_err(RuntimeError::DispatcherClosed);
//!
//!     let handle = mock.handle();
//!     assert!(handle.dispatch(()).await.unwrap());
//!     assert!(matches!(handle.snapshot().await, Err(RuntimeError::DispatcherClosed)));
//!
//!     mock.verify();
//!     assert_eq!(mock.take_events().len(), 1);
//! }
//! ```
//!
//! For step-by-step control there is also [`create_mock_handle`], which
//! returns the raw receiver, and the [`expect_dispatch`] / [`expect_snapshot`]
//! helpers that pop the next request off it.

use crate::component::PageComponent;
use crate::error::RuntimeError;
use crate::handle::PageHandle;
use crate::message::PageRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

enum Expectation<T: PageComponent> {
    Dispatch {
        response: Result<T::Outcome, RuntimeError>,
    },
    Snapshot {
        response: Result<T, RuntimeError>,
    },
}

/// A handle backed by canned responses.
///
/// Requests are matched against expectations in FIFO order; a request that
/// does not match the next expectation panics the responder task, which the
/// caller observes as [`RuntimeError::DispatcherDropped`].
pub struct MockHandle<T: PageComponent> {
    handle: PageHandle<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    events: Arc<Mutex<Vec<T::Event>>>,
    _task: tokio::task::JoinHandle<()>,
}

impl<T: PageComponent> Default for MockHandle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PageComponent> MockHandle<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<PageRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let events = Arc::new(Mutex::new(Vec::new()));
        let pending = expectations.clone();
        let seen = events.clone();

        let task = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = pending.lock().expect("mock expectations poisoned").pop_front();
                match (request, next) {
                    (
                        PageRequest::Dispatch { event, respond_to },
                        Some(Expectation::Dispatch { response }),
                    ) => {
                        seen.lock().expect("mock events poisoned").push(event);
                        let _ = respond_to.send(response);
                    }
                    (PageRequest::Snapshot { respond_to }, Some(Expectation::Snapshot { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            handle: PageHandle::new(sender),
            expectations,
            events,
            _task: task,
        }
    }

    /// Returns a handle wired to this mock.
    pub fn handle(&self) -> PageHandle<T> {
        self.handle.clone()
    }

    /// Expects a `dispatch`.
    pub fn expect_dispatch(&mut self) -> DispatchExpectationBuilder<T> {
        DispatchExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `snapshot`.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<T> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Drains the events received so far, in arrival order.
    pub fn take_events(&self) -> Vec<T::Event> {
        std::mem::take(&mut *self.events.lock().expect("mock events poisoned"))
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().expect("mock expectations poisoned").len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder for `dispatch` expectations.
pub struct DispatchExpectationBuilder<T: PageComponent> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: PageComponent> DispatchExpectationBuilder<T> {
    pub fn return_ok(self, outcome: T::Outcome) {
        self.push(Ok(outcome));
    }

    pub fn return_err(self, error: RuntimeError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::Outcome, RuntimeError>) {
        self.expectations
            .lock()
            .expect("mock expectations poisoned")
            .push_back(Expectation::Dispatch { response });
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<T: PageComponent> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: PageComponent> SnapshotExpectationBuilder<T> {
    pub fn return_ok(self, state: T) {
        self.push(Ok(state));
    }

    pub fn return_err(self, error: RuntimeError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, RuntimeError>) {
        self.expectations
            .lock()
            .expect("mock expectations poisoned")
            .push_back(Expectation::Snapshot { response });
    }
}

/// Creates a handle and the receiver its requests land on.
pub fn create_mock_handle<T: PageComponent>(
    buffer_size: usize,
) -> (PageHandle<T>, mpsc::Receiver<PageRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (PageHandle::new(sender), receiver)
}

/// Pops the next request if it is a dispatch.
pub async fn expect_dispatch<T: PageComponent>(
    receiver: &mut mpsc::Receiver<PageRequest<T>>,
) -> Option<(T::Event, oneshot::Sender<Result<T::Outcome, RuntimeError>>)> {
    match receiver.recv().await {
        Some(PageRequest::Dispatch { event, respond_to }) => Some((event, respond_to)),
        _ => None,
    }
}

/// Pops the next request if it is a snapshot.
pub async fn expect_snapshot<T: PageComponent>(
    receiver: &mut mpsc::Receiver<PageRequest<T>>,
) -> Option<oneshot::Sender<Result<T, RuntimeError>>> {
    match receiver.recv().await {
        Some(PageRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Tally {
        count: u32,
    }

    #[derive(Debug)]
    enum TallyEvent {
        Add(u32),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Tally error")]
    struct TallyError;

    #[async_trait]
    impl PageComponent for Tally {
        type Event = TallyEvent;
        type Outcome = u32;
        type Context = ();
        type Error = TallyError;

        async fn handle_event(&mut self, event: TallyEvent, _ctx: &()) -> Result<u32, TallyError> {
            match event {
                TallyEvent::Add(n) => {
                    self.count += n;
                    Ok(self.count)
                }
            }
        }
    }

    #[tokio::test]
    async fn test_raw_mock_handle() {
        let (handle, mut receiver) = create_mock_handle::<Tally>(4);

        let task = tokio::spawn(async move { handle.dispatch(TallyEvent::Add(3)).await });

        let (event, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        assert!(matches!(event, TallyEvent::Add(3)));
        responder.send(Ok(3)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_mock_handle_with_expectations() {
        let mut mock = MockHandle::<Tally>::new();
        mock.expect_dispatch().return_ok(7);
        mock.expect_snapshot().return_ok(Tally { count: 7 });

        let handle = mock.handle();
        assert_eq!(handle.dispatch(TallyEvent::Add(7)).await.unwrap(), 7);
        assert_eq!(handle.snapshot().await.unwrap(), Tally { count: 7 });

        mock.verify();
        let events = mock.take_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], TallyEvent::Add(7)));
    }

    #[tokio::test]
    async fn test_mismatched_request_drops_responder() {
        let mut mock = MockHandle::<Tally>::new();
        mock.expect_snapshot().return_ok(Tally { count: 0 });

        let result = mock.handle().dispatch(TallyEvent::Add(1)).await;
        assert!(matches!(result, Err(RuntimeError::DispatcherDropped)));
    }
}
