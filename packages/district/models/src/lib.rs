#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District attribute types.
//!
//! A district is the administrative unit every metric in the waste map is
//! computed for. Raw source rows arrive as loosely-typed key/value records
//! ([`RawRecord`]) and are resolved into a validated [`DistrictAttributes`]
//! snapshot before any analytics run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Days per year used to convert yearly tonnages to daily ones.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// A raw attribute record for one district, keyed by canonical field name
/// (see [`DistrictField`]).
///
/// Values are kept as [`serde_json::Value`] so that whatever the data
/// collaborator produced (numbers, numeric strings, blanks, nulls) survives
/// until resolution.
pub type RawRecord = BTreeMap<String, serde_json::Value>;

/// Canonical numeric fields of a district record.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DistrictField {
    /// Census 2011 population.
    PopulationCensus,
    /// Projected population for 2025.
    #[serde(rename = "population_projected_2025")]
    #[strum(to_string = "population_projected_2025")]
    PopulationProjected2025,
    /// Solid waste generated, tonnes/day.
    WasteGeneratedTpd,
    /// Solid waste processed, tonnes/day.
    WasteProcessedTpd,
    /// Solid waste collection gap, tonnes/day.
    WasteGapTpd,
    /// Sewage generated, million litres/day.
    SewageGeneratedMld,
    /// Plastic waste generated, tonnes/day.
    PlasticWasteTpd,
    /// Construction & demolition waste generated, tonnes/day.
    CdWasteTpd,
    /// E-waste generated, tonnes/year.
    EwasteTpa,
    /// Decadal growth rate in percent (informational).
    GrowthRatePct,
}

impl DistrictField {
    /// Whether the field is a quantity that can never be negative.
    ///
    /// The growth rate is the only signed field.
    #[must_use]
    pub const fn is_quantity(self) -> bool {
        !matches!(self, Self::GrowthRatePct)
    }
}

/// Validated, read-only attribute snapshot for a single district.
///
/// Every numeric field is finite. All fields except
/// [`growth_rate_pct`](Self::growth_rate_pct) are non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictAttributes {
    /// District name as it appears in the source data.
    pub identifier: String,
    /// Census 2011 population.
    pub population_census: f64,
    /// Projected 2025 population.
    pub population_projected_2025: f64,
    /// Solid waste generated (TPD).
    pub waste_generated_tpd: f64,
    /// Solid waste processed (TPD).
    pub waste_processed_tpd: f64,
    /// Solid waste collection gap (TPD).
    pub waste_gap_tpd: f64,
    /// Sewage generated (MLD).
    pub sewage_generated_mld: f64,
    /// Plastic waste generated (TPD).
    pub plastic_waste_tpd: f64,
    /// C&D waste generated (TPD).
    pub cd_waste_tpd: f64,
    /// E-waste generated (tonnes/year).
    pub ewaste_tpa: f64,
    /// Decadal growth rate in percent. Not required to agree with the
    /// CAGR derived from the population figures.
    pub growth_rate_pct: f64,
}

impl DistrictAttributes {
    /// Creates a record with every numeric field set to `0.0`.
    #[must_use]
    pub fn zeroed(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            population_census: 0.0,
            population_projected_2025: 0.0,
            waste_generated_tpd: 0.0,
            waste_processed_tpd: 0.0,
            waste_gap_tpd: 0.0,
            sewage_generated_mld: 0.0,
            plastic_waste_tpd: 0.0,
            cd_waste_tpd: 0.0,
            ewaste_tpa: 0.0,
            growth_rate_pct: 0.0,
        }
    }

    /// Returns the value of a single field.
    #[must_use]
    pub const fn get(&self, field: DistrictField) -> f64 {
        match field {
            DistrictField::PopulationCensus => self.population_census,
            DistrictField::PopulationProjected2025 => self.population_projected_2025,
            DistrictField::WasteGeneratedTpd => self.waste_generated_tpd,
            DistrictField::WasteProcessedTpd => self.waste_processed_tpd,
            DistrictField::WasteGapTpd => self.waste_gap_tpd,
            DistrictField::SewageGeneratedMld => self.sewage_generated_mld,
            DistrictField::PlasticWasteTpd => self.plastic_waste_tpd,
            DistrictField::CdWasteTpd => self.cd_waste_tpd,
            DistrictField::EwasteTpa => self.ewaste_tpa,
            DistrictField::GrowthRatePct => self.growth_rate_pct,
        }
    }

    /// Sets the value of a single field.
    pub const fn set(&mut self, field: DistrictField, value: f64) {
        match field {
            DistrictField::PopulationCensus => self.population_census = value,
            DistrictField::PopulationProjected2025 => self.population_projected_2025 = value,
            DistrictField::WasteGeneratedTpd => self.waste_generated_tpd = value,
            DistrictField::WasteProcessedTpd => self.waste_processed_tpd = value,
            DistrictField::WasteGapTpd => self.waste_gap_tpd = value,
            DistrictField::SewageGeneratedMld => self.sewage_generated_mld = value,
            DistrictField::PlasticWasteTpd => self.plastic_waste_tpd = value,
            DistrictField::CdWasteTpd => self.cd_waste_tpd = value,
            DistrictField::EwasteTpa => self.ewaste_tpa = value,
            DistrictField::GrowthRatePct => self.growth_rate_pct = value,
        }
    }

    /// E-waste converted from tonnes/year to tonnes/day.
    #[must_use]
    pub fn ewaste_tpd(&self) -> f64 {
        self.ewaste_tpa / DAYS_PER_YEAR
    }
}
