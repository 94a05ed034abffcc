//! The static listing a page is built from.
//!
//! Loaded from TOML, one `[[flavor]]` table per entry:
//!
//! ```toml
//! [[flavor]]
//! name = "Mint Chip"
//! description = "Cool peppermint with chocolate shards."
//! price = "$1.45"
//! ```
//!
//! The price stays text here; it is only checked once it has been rendered
//! into the page and read back by the extractor.

use crate::config::ConfigError;
use serde::Deserialize;
use std::path::Path;

const DEMO_MENU: &str = include_str!("../../menu/flavors.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: String,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: price.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Menu {
    #[serde(rename = "flavor", default)]
    pub flavors: Vec<MenuItem>,
}

impl Menu {
    pub fn new(flavors: Vec<MenuItem>) -> Self {
        Self { flavors }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            origin: "menu".to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read(path, &e))?;
        Self::from_toml_str(&contents)
    }

    /// The listing bundled with the crate.
    pub fn demo() -> Result<Self, ConfigError> {
        Self::from_toml_str(DEMO_MENU)
    }
}
