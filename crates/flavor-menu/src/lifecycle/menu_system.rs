use crate::clients::MenuClient;
use crate::config::MenuConfig;
use crate::dom::{build_listing, Document};
use crate::layout::{ColumnLayout, LayoutArranger};
use crate::model::Menu;
use crate::page::{self, MenuError, MenuPage};
use crate::stats::MenuStatistics;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, info};

/// A booted menu page running behind its dispatcher.
///
/// # Example
///
/// ```ignore
/// let system = MenuSystem::start(&Menu::demo()?, &MenuConfig::default())?;
///
/// system.client.place_order("Mint Chip", "2").await?;
/// system.client.favorite("Pistachio").await?;
///
/// system.shutdown().await?;
/// ```
pub struct MenuSystem {
    pub client: MenuClient,

    /// Startup statistics; `None` for an empty menu.
    pub statistics: Option<MenuStatistics>,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl MenuSystem {
    /// Renders `menu`, boots it with a [`ColumnLayout`] and starts the
    /// dispatcher. The quantity RNG is seeded from `config.seed` when set.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(menu: &Menu, config: &MenuConfig) -> Result<Self, MenuError> {
        let document = build_listing(menu)?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::start_with(
            document,
            config,
            &mut rng,
            &ColumnLayout::new(config.columns),
        )
    }

    /// Like [`MenuSystem::start`], for an already built document and a
    /// caller-chosen RNG and arranger.
    pub fn start_with<R, L>(
        document: Document,
        config: &MenuConfig,
        rng: &mut R,
        layout: &L,
    ) -> Result<Self, MenuError>
    where
        R: Rng + ?Sized,
        L: LayoutArranger + ?Sized,
    {
        let (menu_page, statistics) = MenuPage::boot(document, config, rng, layout)?;

        let (dispatcher, handle) = page::new(menu_page);
        let page_handle = tokio::spawn(dispatcher.run(()));

        Ok(Self {
            client: MenuClient::new(handle),
            statistics,
            handles: vec![page_handle],
        })
    }

    /// Drops the client and waits for the dispatcher to drain.
    ///
    /// Clones of the client held elsewhere keep the page alive; shutdown
    /// only completes once they are gone too.
    pub async fn shutdown(self) -> Result<(), MenuError> {
        info!("Shutting down menu page...");
        drop(self.client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Page task failed: {:?}", e);
                return Err(MenuError::Runtime(format!("Page task failed: {:?}", e)));
            }
        }

        info!("Menu page shutdown complete.");
        Ok(())
    }
}
