//! Optional TOML configuration file.
//!
//! ```toml
//! [data]
//! path = "district_data.csv"
//! skip_rows = 2
//! delimiter = ","
//!
//! [labels]
//! "Solid Waste (TPD)" = "waste_generated_tpd"
//!
//! [[vehicles]]
//! id = "compactor"
//! name = "Compactor"
//! capacity_tonnes = 8.0
//! daily_cost = 3100.0
//! ```
//!
//! Every section is optional. Without `[[vehicles]]` the embedded deployment
//! catalog is used; `[labels]` entries are added on top of the default
//! pivot-sheet labels.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use waste_map_district::{CsvOptions, DistrictError, LabelMapping};
use waste_map_fleet::FleetError;
use waste_map_fleet_models::{FleetCatalog, VehicleType};

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        /// Config file path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`Config`].
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The delimiter is not a single ASCII character.
    #[error("Delimiter must be a single ASCII character, got {0:?}")]
    Delimiter(char),

    /// A label override is invalid.
    #[error(transparent)]
    Labels(#[from] DistrictError),

    /// The vehicle catalog override is invalid.
    #[error(transparent)]
    Catalog(#[from] FleetError),
}

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source table settings.
    pub data: DataConfig,
    /// Extra source label -> canonical field mappings.
    pub labels: BTreeMap<String, String>,
    /// Vehicle catalog override.
    pub vehicles: Vec<VehicleType>,
}

/// `[data]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Default CSV path when `--data` is not given.
    pub path: Option<PathBuf>,
    /// Title rows before the header row.
    pub skip_rows: usize,
    /// Field delimiter.
    pub delimiter: char,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: None,
            skip_rows: 2,
            delimiter: ',',
        }
    }
}

impl Config {
    /// Loads the config file at `path`, or the defaults when `path` is
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Self::parse(&text)
    }

    /// Parses a config document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// CSV loading options derived from `[data]` and `[labels]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on a bad delimiter or label override.
    pub fn csv_options(&self) -> Result<CsvOptions, ConfigError> {
        let delimiter = self.data.delimiter;
        if !delimiter.is_ascii() {
            return Err(ConfigError::Delimiter(delimiter));
        }
        #[allow(clippy::cast_possible_truncation)]
        let delimiter = delimiter as u8;

        let mut labels = LabelMapping::default();
        for (label, field) in &self.labels {
            labels.insert_named(label, field)?;
        }

        Ok(CsvOptions {
            skip_rows: self.data.skip_rows,
            delimiter,
            labels,
        })
    }

    /// The vehicle catalog: the configured override if any, otherwise the
    /// embedded deployment catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Catalog`] if the override fails validation.
    pub fn catalog(&self) -> Result<FleetCatalog, ConfigError> {
        if self.vehicles.is_empty() {
            return Ok(waste_map_fleet::default_catalog());
        }
        waste_map_fleet::validate_catalog(&self.vehicles)?;
        Ok(FleetCatalog {
            vehicles: self.vehicles.clone(),
        })
    }
}
