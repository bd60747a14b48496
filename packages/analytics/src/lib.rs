#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District metrics engine.
//!
//! Derives the population forecast and waste ratios for a district and
//! assembles them, together with a sized collection fleet, into a
//! [`DistrictReport`](waste_map_analytics_models::DistrictReport).
//!
//! Every function here is pure and synchronous. Reports for different
//! districts share nothing mutable and can be built in parallel.

pub mod forecast;
pub mod ratios;
pub mod report;
pub mod summary;

pub use forecast::forecast;
pub use ratios::ratios;
pub use report::DistrictReportBuilder;

use thiserror::Error;
use waste_map_district::DistrictError;
use waste_map_fleet::FleetError;

/// Errors that can occur while building a district report.
///
/// [`NotFound`](Self::NotFound) and [`Infeasible`](Self::Infeasible) are
/// deliberately separate so that "no data" and "planning failed" can be
/// presented differently.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The district has no row in the dataset.
    #[error("No data for district '{district}'")]
    NotFound {
        /// The requested district name.
        district: String,
    },

    /// No vehicle combination covers the district's requirement.
    #[error("No vehicle fleet can cover {required_tpd:.2} TPD for district '{district}'")]
    Infeasible {
        /// District name.
        district: String,
        /// Required capacity in tonnes/day.
        required_tpd: f64,
    },

    /// Fleet optimizer rejected its input.
    #[error("Fleet error: {0}")]
    Fleet(#[from] FleetError),

    /// Any other district data error.
    #[error("District data error: {0}")]
    District(DistrictError),
}

impl From<DistrictError> for ReportError {
    fn from(err: DistrictError) -> Self {
        match err {
            DistrictError::NotFound { district } => Self::NotFound { district },
            other => Self::District(other),
        }
    }
}
