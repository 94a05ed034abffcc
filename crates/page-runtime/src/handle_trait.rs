//! # ComponentHandle Trait
//!
//! Shared plumbing for domain-specific wrappers around a [`PageHandle`].
use crate::{PageComponent, PageHandle, RuntimeError};
use async_trait::async_trait;

/// Trait for component-specific clients.
///
/// A wrapper supplies the inner [`PageHandle`] and a way to turn a
/// [`RuntimeError`] into its own error type; `send` and `snapshot` come for
/// free.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use page_runtime::{ComponentHandle, PageComponent, PageHandle, RuntimeError};
///
/// #[derive(Clone, Debug)]
/// struct Banner { text: String }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("banner: {0}")]
/// struct BannerError(String);
///
/// #[async_trait]
/// impl PageComponent for Banner {
///     type Event = String;
///     type Outcome = ();
///     type Context = ();
///     type Error = BannerError;
///
///     async fn handle_event(&mut self, text: String, _: &()) -> Result<(), BannerError> {
///         self.text = text;
///         Ok(())
///     }
/// }
///
/// struct BannerClient { inner: PageHandle<Banner> }
///
/// impl ComponentHandle<Banner> for BannerClient {
///     type Error = BannerError;
///
///     fn inner(&self) -> &PageHandle<Banner> { &self.inner }
///
///     fn map_error(e: RuntimeError) -> BannerError { BannerError(e.to_string()) }
/// }
///
/// async fn usage(client: BannerClient) {
///     let _ = client.send("Closed on Mondays".to_string()).await;
///     let _ = client.snapshot().await;
/// }
/// ```
#[async_trait]
pub trait ComponentHandle<T: PageComponent>: Send + Sync {
    /// The component-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic handle.
    fn inner(&self) -> &PageHandle<T>;

    /// Map runtime errors to the component-specific error type.
    fn map_error(e: RuntimeError) -> Self::Error;

    /// Deliver an event and wait for its outcome.
    #[tracing::instrument(skip(self))]
    async fn send(&self, event: T::Event) -> Result<T::Outcome, Self::Error> {
        tracing::debug!("Sending event");
        self.inner().dispatch(event).await.map_err(Self::map_error)
    }

    /// Fetch a copy of the component state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<T, Self::Error> {
        tracing::debug!("Requesting snapshot");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
