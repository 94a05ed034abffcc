//! # Page Runtime
//!
//! A single-writer event runtime for interactive pages. A page's state lives
//! inside one [`PageComponent`]; an [`EventDispatcher`] owns that component
//! and runs each incoming event to completion before taking the next one;
//! any number of cloned [`PageHandle`]s can feed it.
//!
//! ## Why a dispatcher?
//!
//! An interactive page has exactly one mutable resource (its document) and
//! several writers (form submissions, clicks). Browsers avoid races by
//! serializing interaction handlers on one thread. This crate gives the same
//! guarantee with a Tokio task and an mpsc queue:
//!
//! - **No locks**: the component is owned by the dispatcher task.
//! - **Ordered**: events are handled in the order they were queued.
//! - **Typed**: a handle for `MenuPage` only accepts `MenuPage` events.
//!
//! ## Layers
//!
//! 1. **Component** ([`PageComponent`]) - the page state and its handlers.
//! 2. **Runtime** ([`EventDispatcher`]) - the queue and the dispatch loop.
//! 3. **Interface** ([`PageHandle`], [`ComponentHandle`]) - typed senders.
//!
//! ## Lifecycle
//!
//! ```text
//! EventDispatcher::new(component) -> (dispatcher, handle)
//! tokio::spawn(dispatcher.run(context))    on_mount
//! handle.dispatch(event) ...               handle_event, one at a time
//! drop every handle                        queue drains, on_unmount, task ends
//! ```
//!
//! ## Testing
//!
//! [`mock::MockHandle`] answers handle requests from canned expectations so
//! that client wrappers can be tested without a component.

pub mod component;
pub mod dispatcher;
pub mod error;
pub mod handle;
pub mod handle_trait;
pub mod message;
pub mod mock;
pub mod tracing;

pub use component::PageComponent;
pub use dispatcher::EventDispatcher;
pub use error::RuntimeError;
pub use handle::PageHandle;
pub use handle_trait::ComponentHandle;
pub use message::{PageRequest, Response};
