#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District report types.
//!
//! A [`DistrictReport`] bundles everything the dashboard shows for one
//! district: the population forecast, current waste metrics and ratios,
//! the waste-type summary and the vehicle plan. All values are unrounded;
//! rounding is left to whoever renders them.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use waste_map_fleet_models::VehiclePlan;

/// Projected population for a sequence of years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSeries {
    /// Year the projection is anchored on.
    pub base_year: i32,
    /// Compound annual growth rate used for the projection.
    pub cagr: f64,
    /// Projected years.
    pub years: Vec<i32>,
    /// Projected population, aligned with [`years`](Self::years).
    pub values: Vec<f64>,
}

impl ForecastSeries {
    /// Iterates `(year, population)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.years.iter().copied().zip(self.values.iter().copied())
    }

    /// Projected population for `year`, if it is part of the series.
    #[must_use]
    pub fn value_for(&self, year: i32) -> Option<f64> {
        self.points().find(|(y, _)| *y == year).map(|(_, v)| v)
    }
}

/// Current solid-waste flows, as reported by the source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteMetrics {
    /// Generated, tonnes/day.
    pub generated_tpd: f64,
    /// Processed, tonnes/day.
    pub processed_tpd: f64,
    /// Collection gap as reported, tonnes/day.
    pub gap_tpd: f64,
}

/// Derived processing ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteRatios {
    /// Percent of generated waste that is processed, in `[0, 100]`.
    pub processed_percent: f64,
    /// Processed share for a processed/gap pie, never above generated.
    pub processed_for_pie: f64,
    /// Remainder of generated waste for the pie.
    pub gap_for_pie: f64,
    /// Whether the raw percentage exceeded 100 and was capped.
    pub percent_capped: bool,
}

/// Unit of a summary value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SummaryUnit {
    /// Tonnes per day.
    Tpd,
    /// Million litres per day.
    Mld,
}

/// Display color tag of a summary item. Purely informational.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SummaryColor {
    Blue,
    Green,
    Orange,
    Red,
    Brown,
}

/// One entry of the waste-type summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteSummaryItem {
    /// Display title (e.g. "Plastic Waste").
    pub title: String,
    /// Quantity in [`unit`](Self::unit).
    pub value: f64,
    /// Unit of `value`.
    pub unit: SummaryUnit,
    /// Color tag.
    pub color: SummaryColor,
}

/// Everything computed for one district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictReport {
    /// District name as written in the source data.
    pub district: String,
    /// Census 2011 population.
    pub population_census: f64,
    /// Decadal growth rate from the source, informational only.
    pub growth_rate_pct: f64,
    /// Population forecast.
    pub forecast: ForecastSeries,
    /// Current waste flows.
    pub waste: WasteMetrics,
    /// Derived waste ratios.
    pub ratios: WasteRatios,
    /// Five-item waste-type summary.
    pub summary: Vec<WasteSummaryItem>,
    /// Vehicle plan covering the district's requirement.
    pub fleet: VehiclePlan,
}
