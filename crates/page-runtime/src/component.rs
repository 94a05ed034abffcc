//! # PageComponent Trait
//!
//! The contract a piece of page state must satisfy to be driven by an
//! [`EventDispatcher`](crate::EventDispatcher). The component owns its state
//! outright; the dispatcher feeds it one event at a time and hands back
//! whatever the handler returned.
//!
//! # Provided Methods (Hooks)
//! - [`PageComponent::on_mount`] runs once before the first event.
//! - [`PageComponent::on_unmount`] runs once after the last handle is dropped.
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::Debug;

/// State that reacts to page events.
///
/// # Associated Types
/// `Event` is what the host delivers (a click, a form submission), `Outcome`
/// is what the handler reports back to whoever dispatched the event. Each
/// component picks a single `Error` type for all of its handlers.
///
/// # Context
/// `Context` is injected into every hook by [`EventDispatcher::run`](crate::EventDispatcher::run),
/// so dependencies can be wired after the component itself was built.
/// Use `()` when there are none.
#[async_trait]
pub trait PageComponent: Clone + Send + Sync + 'static {
    /// An interaction delivered to the component.
    type Event: Send + Sync + Debug;

    /// The result of handling one event.
    type Outcome: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the component.
    type Context: Send + Sync;

    /// The error type shared by every hook of this component.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once, before the dispatcher accepts any event.
    async fn on_mount(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a single event to completion.
    async fn handle_event(
        &mut self,
        event: Self::Event,
        ctx: &Self::Context,
    ) -> Result<Self::Outcome, Self::Error>;

    /// Called once, after the last handle is gone and the queue is drained.
    async fn on_unmount(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
