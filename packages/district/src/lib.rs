#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District attribute resolution.
//!
//! Turns loosely-typed source rows into validated
//! [`DistrictAttributes`](waste_map_district_models::DistrictAttributes)
//! snapshots. The loaded [`RawDataset`] is always passed in explicitly;
//! nothing in this crate holds global state between district queries.

pub mod coerce;
pub mod dataset;
pub mod labels;
pub mod resolver;

pub use dataset::{CsvOptions, RawDataset};
pub use labels::LabelMapping;
pub use resolver::resolve;

use thiserror::Error;

/// Errors that can occur while loading or resolving district data.
#[derive(Debug, Error)]
pub enum DistrictError {
    /// No row in the dataset matches the requested district.
    #[error("No data for district '{district}'")]
    NotFound {
        /// The district name that was looked up.
        district: String,
    },

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Reading the source file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source table has no header row after the skipped rows.
    #[error("Source table has no header row (skipped {skipped} rows)")]
    MissingHeader {
        /// Number of leading rows that were skipped.
        skipped: usize,
    },

    /// A label override names a field that does not exist.
    #[error("Label '{label}' maps to unknown field '{field}'")]
    UnknownField {
        /// Source column label.
        label: String,
        /// The unrecognized canonical field name.
        field: String,
    },
}
