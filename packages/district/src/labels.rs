//! Source column label mapping.
//!
//! Maps the column labels of the district statistics sheet to canonical
//! [`DistrictField`]s. The sheet is a pivot export, so its labels carry
//! aggregation prefixes ("Sum of", "Average of") and inconsistent unit
//! suffixes. Labels are compared after trimming and lowercasing, and the
//! canonical snake-case field names are always accepted as well.

use std::collections::BTreeMap;
use std::str::FromStr as _;

use strum::IntoEnumIterator as _;
use waste_map_district_models::DistrictField;

use crate::DistrictError;

/// Labels used by the district statistics pivot sheet.
pub const DEFAULT_LABELS: &[(&str, DistrictField)] = &[
    (
        "Sum of Census 2011 Population",
        DistrictField::PopulationCensus,
    ),
    (
        "Sum of Projected Population by 2025",
        DistrictField::PopulationProjected2025,
    ),
    ("Sum of SW_Generation (TPD)", DistrictField::WasteGeneratedTpd),
    ("Sum of SW_Processed_ (TPD)", DistrictField::WasteProcessedTpd),
    (
        "Sum of SW Collection Gap (in TPD)",
        DistrictField::WasteGapTpd,
    ),
    (
        "Sum of Sewage Generation (in MLD)",
        DistrictField::SewageGeneratedMld,
    ),
    (
        "Sum of Estimated PW Generation in TPD",
        DistrictField::PlasticWasteTpd,
    ),
    (
        "Sum of C&D Waste Generation in TPD - 2025",
        DistrictField::CdWasteTpd,
    ),
    ("Sum of e-waste Generation (TPA)", DistrictField::EwasteTpa),
    (
        "Average of Decadal Grouth Rate in % (During 2001-2011)",
        DistrictField::GrowthRatePct,
    ),
];

/// Lookup table from source column label to canonical field.
#[derive(Debug, Clone)]
pub struct LabelMapping {
    labels: BTreeMap<String, DistrictField>,
}

impl Default for LabelMapping {
    fn default() -> Self {
        let mut mapping = Self::canonical_only();
        for (label, field) in DEFAULT_LABELS {
            mapping.insert(label, *field);
        }
        mapping
    }
}

impl LabelMapping {
    /// A mapping that only recognizes canonical field names.
    #[must_use]
    pub fn canonical_only() -> Self {
        let mut mapping = Self {
            labels: BTreeMap::new(),
        };
        for field in DistrictField::iter() {
            mapping.insert(field.as_ref(), field);
        }
        mapping
    }

    /// Adds (or replaces) a label.
    pub fn insert(&mut self, label: &str, field: DistrictField) {
        self.labels.insert(normalize_label(label), field);
    }

    /// Adds a label whose target is given by canonical field name, as it
    /// appears in configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`DistrictError::UnknownField`] if `field` is not a
    /// canonical field name.
    pub fn insert_named(&mut self, label: &str, field: &str) -> Result<(), DistrictError> {
        let parsed =
            DistrictField::from_str(field.trim()).map_err(|_| DistrictError::UnknownField {
                label: label.to_owned(),
                field: field.to_owned(),
            })?;
        self.insert(label, parsed);
        Ok(())
    }

    /// Maps a source label to its canonical field, if known.
    #[must_use]
    pub fn field_for(&self, label: &str) -> Option<DistrictField> {
        self.labels.get(&normalize_label(label)).copied()
    }
}

fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}
