//! Five-item waste-type summary.

use waste_map_analytics_models::{SummaryColor, SummaryUnit, WasteSummaryItem};
use waste_map_district_models::DistrictAttributes;

/// Builds the waste-type summary shown on the composition panel.
///
/// Order and colors are fixed. E-waste is reported per year in the source
/// and converted to tonnes per day here.
#[must_use]
pub fn waste_summary(attrs: &DistrictAttributes) -> Vec<WasteSummaryItem> {
    [
        (
            "Total Solid Waste Generated",
            attrs.waste_generated_tpd,
            SummaryUnit::Tpd,
            SummaryColor::Blue,
        ),
        (
            "Plastic Waste",
            attrs.plastic_waste_tpd,
            SummaryUnit::Tpd,
            SummaryColor::Green,
        ),
        (
            "C&D Waste",
            attrs.cd_waste_tpd,
            SummaryUnit::Tpd,
            SummaryColor::Orange,
        ),
        ("E-waste", attrs.ewaste_tpd(), SummaryUnit::Tpd, SummaryColor::Red),
        (
            "Sewage Waste",
            attrs.sewage_generated_mld,
            SummaryUnit::Mld,
            SummaryColor::Brown,
        ),
    ]
    .into_iter()
    .map(|(title, value, unit, color)| WasteSummaryItem {
        title: title.to_owned(),
        value,
        unit,
        color,
    })
    .collect()
}
