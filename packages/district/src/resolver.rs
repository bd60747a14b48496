//! Resolves a district name into a validated attribute snapshot.

use strum::IntoEnumIterator as _;
use waste_map_district_models::{DistrictAttributes, DistrictField, RawRecord};

use crate::coerce::{safe_number, safe_quantity};
use crate::{DistrictError, RawDataset};

/// Looks up `district` in `dataset` and resolves its raw record.
///
/// # Errors
///
/// Returns [`DistrictError::NotFound`] if no district matches. A missing
/// district is never turned into a zero-filled record, since that would be
/// indistinguishable from real zeros.
pub fn resolve(district: &str, dataset: &RawDataset) -> Result<DistrictAttributes, DistrictError> {
    let (name, record) = dataset.find(district).ok_or_else(|| DistrictError::NotFound {
        district: district.trim().to_owned(),
    })?;

    Ok(resolve_record(name, record))
}

/// Resolves a single raw record. Never fails: absent or non-numeric values
/// become `0.0`.
#[must_use]
pub fn resolve_record(identifier: &str, record: &RawRecord) -> DistrictAttributes {
    let mut attrs = DistrictAttributes::zeroed(identifier);

    for field in DistrictField::iter() {
        let raw = record.get(field.as_ref());
        let value = if field.is_quantity() {
            safe_quantity(raw)
        } else {
            safe_number(raw)
        };
        attrs.set(field, value);
    }

    attrs
}
