//! Plain-text rendering of reports and plans.
//!
//! All rounding happens here: populations to whole people, tonnages to two
//! decimals, the processed share to one decimal.

use std::fmt::Write as _;

use waste_map_analytics::ReportError;
use waste_map_analytics_models::DistrictReport;
use waste_map_fleet_models::{FleetCatalog, VehiclePlan};

/// Shown when the selected district has no row in the dataset.
pub const NO_DATA: &str = "No data for selected district";

/// Formats a quantity rounded to an integer with thousands separators
/// (`1234567.4` -> `"1,234,567"`).
#[must_use]
pub fn thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = group_digits(&format!("{:.0}", rounded.abs()));
    if rounded < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Renders a full district report.
#[must_use]
pub fn render_report(report: &DistrictReport) -> String {
    let mut out = String::new();

    writeln!(out, "District: {}", report.district).unwrap();
    writeln!(out).unwrap();

    writeln!(out, "== Population Forecast ==").unwrap();
    writeln!(
        out,
        "Census 2011 population: {}",
        thousands(report.population_census)
    )
    .unwrap();
    writeln!(
        out,
        "Decadal growth rate (2001-2011): {:.2}%",
        report.growth_rate_pct
    )
    .unwrap();
    writeln!(out, "CAGR: {:.4}%", report.forecast.cagr * 100.0).unwrap();
    for (year, value) in report.forecast.points() {
        writeln!(out, "  {year}: {:>14}", thousands(value)).unwrap();
    }
    writeln!(out).unwrap();

    writeln!(out, "== Waste Characteristics ==").unwrap();
    writeln!(out, "Generated: {:.2} TPD", report.waste.generated_tpd).unwrap();
    writeln!(out, "Processed: {:.2} TPD", report.waste.processed_tpd).unwrap();
    writeln!(out, "Gap:       {:.2} TPD", report.waste.gap_tpd).unwrap();
    writeln!(
        out,
        "% Waste Processed: {:.1}%",
        report.ratios.processed_percent
    )
    .unwrap();
    writeln!(
        out,
        "Processed vs gap: {:.2} / {:.2} TPD",
        report.ratios.processed_for_pie, report.ratios.gap_for_pie
    )
    .unwrap();
    writeln!(out).unwrap();

    writeln!(out, "== Vehicle Requirement to Process Generated Waste ==").unwrap();
    out.push_str(&render_plan(&report.fleet));
    writeln!(out).unwrap();

    writeln!(out, "== Waste Composition ==").unwrap();
    for item in &report.summary {
        writeln!(
            out,
            "  {:<28} {:>10.2} {} ({})",
            item.title, item.value, item.unit, item.color
        )
        .unwrap();
    }

    out
}

/// Renders a vehicle plan, one line per vehicle type.
#[must_use]
pub fn render_plan(plan: &VehiclePlan) -> String {
    let mut out = String::new();
    for allocation in &plan.allocations {
        writeln!(
            out,
            "  New {} required ({}T): {}",
            allocation.vehicle.name,
            allocation.vehicle.capacity_tonnes,
            group_digits(&allocation.count.to_string())
        )
        .unwrap();
    }
    writeln!(
        out,
        "  Capacity {:.2} T for {:.2} TPD required, daily cost {}",
        plan.total_capacity(),
        plan.required_tpd,
        thousands(plan.total_cost)
    )
    .unwrap();
    out
}

/// Renders the vehicle catalog.
#[must_use]
pub fn render_catalog(catalog: &FleetCatalog) -> String {
    let mut out = String::new();
    writeln!(out, "{:<20} {:<20} {:>10} {:>10}", "ID", "NAME", "TONNES", "COST/DAY").unwrap();
    writeln!(out, "{}", "-".repeat(63)).unwrap();
    for v in &catalog.vehicles {
        writeln!(
            out,
            "{:<20} {:<20} {:>10} {:>10}",
            v.id, v.name, v.capacity_tonnes, v.daily_cost
        )
        .unwrap();
    }
    out
}

/// Renders a failed report build. "No data" and "planning failed" get
/// distinct messages.
#[must_use]
pub fn render_error(err: &ReportError) -> String {
    match err {
        ReportError::NotFound { district } => format!("{NO_DATA} ({district})"),
        ReportError::Infeasible {
            district,
            required_tpd,
        } => format!(
            "Vehicle planning failed for {district}: no fleet covers {required_tpd:.2} TPD"
        ),
        other => format!("Report failed: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use waste_map_analytics::DistrictReportBuilder;
    use waste_map_district::RawDataset;
    use waste_map_district_models::RawRecord;

    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(thousands(0.0), "0");
        assert_eq!(thousands(999.4), "999");
        assert_eq!(thousands(1000.0), "1,000");
        assert_eq!(thousands(128_073.79), "128,074");
        assert_eq!(thousands(2_371_061.0), "2,371,061");
        assert_eq!(thousands(-4321.0), "-4,321");
        assert_eq!(group_digits("1250"), "1,250");
    }

    fn sample_report() -> DistrictReport {
        let mut record = RawRecord::new();
        record.insert("population_census".to_owned(), 100_000.into());
        record.insert("population_projected_2025".to_owned(), 120_000.into());
        record.insert("waste_generated_tpd".to_owned(), 43.6.into());
        record.insert("waste_processed_tpd".to_owned(), 30.0.into());
        let dataset: RawDataset = [("Sehore".to_owned(), record)].into_iter().collect();
        let catalog = waste_map_fleet::default_catalog();
        DistrictReportBuilder::new(&dataset, &catalog)
            .build("Sehore")
            .unwrap()
    }

    #[test]
    fn report_shows_every_section() {
        let text = render_report(&sample_report());
        assert!(text.contains("District: Sehore"));
        assert!(text.contains("Census 2011 population: 100,000"));
        assert!(text.contains("2030:"));
        assert!(text.contains("128,074"));
        assert!(text.contains("Generated: 43.60 TPD"));
        assert!(text.contains("% Waste Processed: 68.8%"));
        assert!(text.contains("New Bulk truck required (20T): 2"));
        assert!(text.contains("New Mini LCV required (3.8T): 1"));
        assert!(text.contains("New Tri-cycle trolley required (0.5T): 0"));
        assert!(text.contains("daily cost 6,634"));
        assert!(text.contains("Sewage Waste"));
    }

    #[test]
    fn not_found_and_infeasible_render_differently() {
        let not_found = render_error(&ReportError::NotFound {
            district: "Gwalior".to_owned(),
        });
        let infeasible = render_error(&ReportError::Infeasible {
            district: "Gwalior".to_owned(),
            required_tpd: 12.0,
        });
        assert!(not_found.starts_with(NO_DATA));
        assert!(infeasible.starts_with("Vehicle planning failed"));
        assert_ne!(not_found, infeasible);
    }

    #[test]
    fn catalog_table() {
        let text = render_catalog(&waste_map_fleet::default_catalog());
        assert!(text.contains("bulk_truck"));
        assert!(text.contains("Tri-cycle trolley"));
    }
}
