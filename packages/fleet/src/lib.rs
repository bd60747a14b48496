#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Collection fleet sizing.
//!
//! Chooses how many vehicles of each catalog type to procure so that their
//! combined daily capacity covers a district's requirement at minimum daily
//! cost. The problem has one covering constraint and a handful of integer
//! variables, so it is solved exactly by an explicit branch-and-bound
//! search instead of a general MILP solver.

pub mod catalog;
pub mod optimizer;

pub use catalog::{default_catalog, parse_catalog, validate_catalog};
pub use optimizer::{Optimizer, optimize};

use thiserror::Error;

/// Errors that can occur while loading a catalog or sizing a fleet.
#[derive(Debug, Error)]
pub enum FleetError {
    /// The catalog is empty or contains an unusable vehicle type.
    #[error("Invalid vehicle catalog: {message}")]
    InvalidCatalog {
        /// Description of what is wrong.
        message: String,
    },

    /// The required capacity is NaN or infinite.
    #[error("Invalid required capacity: {value}")]
    InvalidRequirement {
        /// The rejected value.
        value: f64,
    },

    /// A catalog TOML document could not be parsed.
    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] toml::de::Error),
}
