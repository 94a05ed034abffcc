use super::{MenuError, MenuPage, PageEvent, PageOutcome};
use crate::favorite;
use crate::order::{self, OrderRequest};
use async_trait::async_trait;
use page_runtime::PageComponent;
use tracing::{debug, info};

#[async_trait]
impl PageComponent for MenuPage {
    type Event = PageEvent;
    type Outcome = PageOutcome;
    type Context = ();
    type Error = MenuError;

    async fn on_mount(&mut self, _ctx: &()) -> Result<(), MenuError> {
        info!(flavors = self.inventory.len(), "Menu page mounted");
        Ok(())
    }

    async fn handle_event(&mut self, event: PageEvent, _ctx: &()) -> Result<PageOutcome, MenuError> {
        match event {
            PageEvent::SelectFlavor(index) => {
                order::select_flavor(&mut self.document, index)?;
                Ok(PageOutcome::FormUpdated)
            }
            PageEvent::EnterAmount(text) => {
                order::enter_amount(&mut self.document, &text)?;
                Ok(PageOutcome::FormUpdated)
            }
            PageEvent::SubmitOrder => {
                let request = order::read_order_form(&self.document)?;
                let outcome =
                    order::process_order(&mut self.document, &mut self.inventory, &request)?;
                Ok(PageOutcome::Order(outcome))
            }
            PageEvent::PlaceOrder { flavor, amount } => {
                let request = OrderRequest { flavor, amount };
                let outcome =
                    order::process_order(&mut self.document, &mut self.inventory, &request)?;
                Ok(PageOutcome::Order(outcome))
            }
            PageEvent::Click(target) => match favorite::click(&mut self.document, target)? {
                Some((card, highlighted)) => {
                    let flavor = self.flavor_at(card);
                    debug!(%flavor, highlighted, "Favorite toggled");
                    Ok(PageOutcome::Highlight {
                        flavor,
                        highlighted,
                    })
                }
                None => Ok(PageOutcome::Ignored),
            },
        }
    }
}
