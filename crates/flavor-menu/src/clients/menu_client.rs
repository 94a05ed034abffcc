//! # Menu Client
//!
//! Domain-level API over a `PageHandle<MenuPage>`. Every method turns into
//! one or two messages to the page dispatcher; runtime failures come back as
//! [`MenuError`].

use crate::dom::{to_html, NodeId};
use crate::extract::extract_flavors;
use crate::model::FlavorRecord;
use crate::order::{OrderError, OrderOutcome};
use crate::page::{MenuError, MenuPage, PageEvent, PageOutcome};
use async_trait::async_trait;
use page_runtime::{ComponentHandle, PageHandle, RuntimeError};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct MenuClient {
    inner: PageHandle<MenuPage>,
}

impl MenuClient {
    pub fn new(inner: PageHandle<MenuPage>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ComponentHandle<MenuPage> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &PageHandle<MenuPage> {
        &self.inner
    }

    /// Page errors travel boxed through the runtime and are unboxed here;
    /// anything else is a communication failure.
    fn map_error(e: RuntimeError) -> Self::Error {
        match e {
            RuntimeError::ComponentError(inner) => match inner.downcast::<MenuError>() {
                Ok(menu_error) => *menu_error,
                Err(other) => MenuError::Runtime(other.to_string()),
            },
            other => MenuError::Runtime(other.to_string()),
        }
    }
}

impl MenuClient {
    #[instrument(skip(self))]
    pub async fn select_flavor(&self, index: usize) -> Result<(), MenuError> {
        self.send(PageEvent::SelectFlavor(index)).await.map(|_| ())
    }

    #[instrument(skip(self))]
    pub async fn enter_amount(&self, text: &str) -> Result<(), MenuError> {
        self.send(PageEvent::EnterAmount(text.to_string()))
            .await
            .map(|_| ())
    }

    /// Submits the form as currently selected and typed.
    #[instrument(skip(self))]
    pub async fn submit(&self) -> Result<OrderOutcome, MenuError> {
        match self.send(PageEvent::SubmitOrder).await? {
            PageOutcome::Order(outcome) => Ok(outcome),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn place_order(&self, flavor: &str, amount: &str) -> Result<OrderOutcome, MenuError> {
        debug!("Placing order");
        let event = PageEvent::PlaceOrder {
            flavor: flavor.to_string(),
            amount: amount.to_string(),
        };
        match self.send(event).await? {
            PageOutcome::Order(outcome) => Ok(outcome),
            other => Err(unexpected(other)),
        }
    }

    /// Clicks the named flavor's card. Returns whether it is now highlighted.
    #[instrument(skip(self))]
    pub async fn favorite(&self, flavor: &str) -> Result<bool, MenuError> {
        let card = self.card_of(flavor).await?;
        self.click(card).await?.ok_or_else(|| {
            MenuError::Runtime(format!("Card of '{}' is no longer a flavor", flavor))
        })
    }

    /// Clicks an arbitrary node. `None` when the click hit no flavor card.
    #[instrument(skip(self))]
    pub async fn click(&self, target: NodeId) -> Result<Option<bool>, MenuError> {
        match self.send(PageEvent::Click(target)).await? {
            PageOutcome::Highlight { highlighted, .. } => Ok(Some(highlighted)),
            PageOutcome::Ignored => Ok(None),
            other => Err(unexpected(other)),
        }
    }

    /// Live quantity of `flavor`.
    #[instrument(skip(self))]
    pub async fn quantity_of(&self, flavor: &str) -> Result<u32, MenuError> {
        let page = self.snapshot().await?;
        page.inventory()
            .quantity(flavor)
            .ok_or_else(|| OrderError::FlavorNotFound(flavor.to_string()).into())
    }

    /// Fresh records read from the current page, quantities included.
    #[instrument(skip(self))]
    pub async fn records(&self) -> Result<Vec<FlavorRecord>, MenuError> {
        let page = self.snapshot().await?;
        Ok(extract_flavors(page.document())?)
    }

    #[instrument(skip(self))]
    pub async fn render_html(&self) -> Result<String, MenuError> {
        let page = self.snapshot().await?;
        Ok(to_html(page.document())?)
    }

    async fn card_of(&self, flavor: &str) -> Result<NodeId, MenuError> {
        let page = self.snapshot().await?;
        page.inventory()
            .element(flavor)
            .ok_or_else(|| OrderError::FlavorNotFound(flavor.to_string()).into())
    }
}

fn unexpected(outcome: PageOutcome) -> MenuError {
    MenuError::Runtime(format!("Unexpected page outcome: {:?}", outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_runtime::mock::{create_mock_handle, expect_dispatch};

    #[tokio::test]
    async fn test_place_order_sends_event() {
        let (handle, mut receiver) = create_mock_handle::<MenuPage>(10);
        let client = MenuClient::new(handle);

        let task = tokio::spawn(async move { client.place_order("Mint Chip", "2").await });

        let (event, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        assert_eq!(
            event,
            PageEvent::PlaceOrder {
                flavor: "Mint Chip".into(),
                amount: "2".into()
            }
        );
        responder
            .send(Ok(PageOutcome::Order(OrderOutcome::Applied {
                flavor: "Mint Chip".into(),
                remaining: 7,
            })))
            .unwrap();

        let outcome = task.await.unwrap().unwrap();
        assert_eq!(
            outcome,
            OrderOutcome::Applied {
                flavor: "Mint Chip".into(),
                remaining: 7
            }
        );
    }

    #[tokio::test]
    async fn test_component_error_is_unboxed() {
        let (handle, mut receiver) = create_mock_handle::<MenuPage>(10);
        let client = MenuClient::new(handle);

        let task = tokio::spawn(async move { client.submit().await });

        let (event, responder) = expect_dispatch(&mut receiver).await.unwrap();
        assert_eq!(event, PageEvent::SubmitOrder);
        let err = MenuError::Order(OrderError::InvalidAmount("x".into()));
        responder
            .send(Err(RuntimeError::ComponentError(Box::new(err.clone()))))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap_err(), err);
    }

    #[tokio::test]
    async fn test_closed_dispatcher_maps_to_runtime_error() {
        let (handle, receiver) = create_mock_handle::<MenuPage>(10);
        drop(receiver);
        let client = MenuClient::new(handle);

        let err = client.select_flavor(0).await.unwrap_err();
        assert!(matches!(err, MenuError::Runtime(_)));
    }
}
