//! # Configuration
//!
//! The page has a few tunables: the range random quantities are drawn
//! from, the price below which a flavor counts as cheap, an optional RNG
//! seed and the number of layout columns. They are read from TOML; every
//! section is optional and falls back to [`MenuConfig::default`].
//!
//! ```toml
//! [quantity]
//! min = 1
//! max = 20
//!
//! [pricing]
//! cheap_threshold = 1.50
//!
//! [random]
//! seed = 42
//!
//! [layout]
//! columns = 3
//! ```

use crate::quantity::QuantityRange;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CHEAP_THRESHOLD: f64 = 1.50;
pub const DEFAULT_COLUMNS: usize = 3;

/// Errors raised while loading configuration or menu files.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Cannot read {path}: {message}")]
    Read {
        path: String,
        kind: ErrorKind,
        message: String,
    },

    #[error("Cannot parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid quantity range: min {min} is greater than max {max}")]
    InvertedRange { min: u32, max: u32 },

    #[error("Invalid cheap threshold: {0}")]
    InvalidThreshold(f64),

    #[error("Layout needs at least one column")]
    ZeroColumns,
}

impl ConfigError {
    /// Keeps the I/O error kind so callers can tell a missing file from a
    /// permission problem.
    pub(crate) fn read(path: &Path, e: &std::io::Error) -> Self {
        Self::Read {
            path: path.display().to_string(),
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuConfig {
    pub quantity: QuantityRange,
    pub cheap_threshold: f64,
    /// Seed for the quantity RNG; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub columns: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            quantity: QuantityRange::default(),
            cheap_threshold: DEFAULT_CHEAP_THRESHOLD,
            seed: None,
            columns: DEFAULT_COLUMNS,
        }
    }
}

// On-disk shape, every section optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    quantity: Option<QuantitySection>,
    pricing: Option<PricingSection>,
    random: Option<RandomSection>,
    layout: Option<LayoutSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QuantitySection {
    min: Option<u32>,
    max: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PricingSection {
    cheap_threshold: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RandomSection {
    seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LayoutSection {
    columns: Option<usize>,
}

impl MenuConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            origin: "config".to_string(),
            source,
        })?;
        Self::from_file_config(file)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read(path, &e))?;
        Self::from_toml_str(&contents)
    }

    /// Returns a copy with the RNG seed replaced.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn from_file_config(file: FileConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let quantity = match file.quantity {
            Some(section) => QuantityRange::new(
                section.min.unwrap_or(defaults.quantity.min()),
                section.max.unwrap_or(defaults.quantity.max()),
            )?,
            None => defaults.quantity,
        };

        let cheap_threshold = file
            .pricing
            .and_then(|p| p.cheap_threshold)
            .unwrap_or(defaults.cheap_threshold);
        if !cheap_threshold.is_finite() || cheap_threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(cheap_threshold));
        }

        let columns = file
            .layout
            .and_then(|l| l.columns)
            .unwrap_or(defaults.columns);
        if columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }

        Ok(Self {
            quantity,
            cheap_threshold,
            seed: file.random.and_then(|r| r.seed),
            columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = MenuConfig::from_toml_str("").unwrap();
        assert_eq!(config, MenuConfig::default());
        assert_eq!(config.quantity.min(), 1);
        assert_eq!(config.quantity.max(), 20);
        assert_eq!(config.cheap_threshold, 1.50);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = MenuConfig::from_toml_str(
            "[quantity]\nmax = 5\n\n[random]\nseed = 7\n",
        )
        .unwrap();
        assert_eq!(config.quantity.min(), 1);
        assert_eq!(config.quantity.max(), 5);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.columns, DEFAULT_COLUMNS);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert_eq!(
            MenuConfig::from_toml_str("[quantity]\nmin = 9\nmax = 3\n"),
            Err(ConfigError::InvertedRange { min: 9, max: 3 })
        );
        assert_eq!(
            MenuConfig::from_toml_str("[pricing]\ncheap_threshold = 0.0\n"),
            Err(ConfigError::InvalidThreshold(0.0))
        );
        assert_eq!(
            MenuConfig::from_toml_str("[layout]\ncolumns = 0\n"),
            Err(ConfigError::ZeroColumns)
        );
        assert!(matches!(
            MenuConfig::from_toml_str("[pricing]\ncheap = 1.0\n"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = MenuConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Read {
                kind: ErrorKind::NotFound,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_error_keeps_its_source() {
        use std::error::Error as _;

        let err = MenuConfig::from_toml_str("[layout]\ncolumns = \"three\"\n").unwrap_err();
        let source = err.source().expect("parse errors carry the toml error");
        assert!(source.downcast_ref::<toml::de::Error>().is_some());
        assert!(err.to_string().starts_with("Cannot parse config: "));
    }
}
