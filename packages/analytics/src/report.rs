//! Per-district report assembly.

use waste_map_analytics_models::DistrictReport;
use waste_map_district::RawDataset;
use waste_map_district_models::DistrictAttributes;
use waste_map_fleet::Optimizer;
use waste_map_fleet_models::FleetCatalog;

use crate::ReportError;
use crate::forecast::{default_horizon, forecast};
use crate::ratios::{metrics, ratios};
use crate::summary::waste_summary;

/// Daily capacity the fleet must cover for a district.
///
/// This is the full generation figure, not the reported gap: existing
/// processing capacity is not credited.
#[must_use]
pub const fn required_capacity(attrs: &DistrictAttributes) -> f64 {
    attrs.waste_generated_tpd
}

/// Builds [`DistrictReport`]s from a loaded dataset and a vehicle catalog.
///
/// The builder only borrows immutable data, so a single instance can be
/// shared across threads to build reports for several districts at once.
#[derive(Debug, Clone)]
pub struct DistrictReportBuilder<'a> {
    dataset: &'a RawDataset,
    catalog: &'a FleetCatalog,
    optimizer: Optimizer,
    horizon: Vec<i32>,
}

impl<'a> DistrictReportBuilder<'a> {
    /// Creates a builder with the default optimizer and forecast horizon.
    #[must_use]
    pub fn new(dataset: &'a RawDataset, catalog: &'a FleetCatalog) -> Self {
        Self {
            dataset,
            catalog,
            optimizer: Optimizer::new(),
            horizon: default_horizon(),
        }
    }

    /// Replaces the fleet optimizer (e.g. to change its node budget).
    #[must_use]
    pub const fn with_optimizer(mut self, optimizer: Optimizer) -> Self {
        self.optimizer = optimizer;
        self
    }

    /// Builds the report for `district`.
    ///
    /// # Errors
    ///
    /// * [`ReportError::NotFound`] if the district is not in the dataset.
    /// * [`ReportError::Infeasible`] if no fleet covers the requirement.
    /// * [`ReportError::Fleet`] if the catalog is invalid.
    pub fn build(&self, district: &str) -> Result<DistrictReport, ReportError> {
        let attrs = waste_map_district::resolve(district, self.dataset)?;
        self.build_from_attributes(&attrs)
    }

    /// Builds a report from an already resolved attribute snapshot.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build), minus `NotFound`.
    pub fn build_from_attributes(
        &self,
        attrs: &DistrictAttributes,
    ) -> Result<DistrictReport, ReportError> {
        log::debug!("Building report for {}", attrs.identifier);

        let forecast = forecast(
            attrs.population_census,
            attrs.population_projected_2025,
            &self.horizon,
        );

        let waste = metrics(
            attrs.waste_generated_tpd,
            attrs.waste_processed_tpd,
            attrs.waste_gap_tpd,
        );
        let ratios = ratios(waste.generated_tpd, waste.processed_tpd, waste.gap_tpd);

        let required_tpd = required_capacity(attrs);
        let fleet = self
            .optimizer
            .optimize(required_tpd, &self.catalog.vehicles)?;
        if !fleet.feasible {
            return Err(ReportError::Infeasible {
                district: attrs.identifier.clone(),
                required_tpd,
            });
        }

        Ok(DistrictReport {
            district: attrs.identifier.clone(),
            population_census: attrs.population_census,
            growth_rate_pct: attrs.growth_rate_pct,
            forecast,
            waste,
            ratios,
            summary: waste_summary(attrs),
            fleet,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use waste_map_district_models::RawRecord;
    use waste_map_fleet::default_catalog;
    use waste_map_fleet_models::VehicleType;

    use super::*;

    fn record(pairs: &[(&str, serde_json::Value)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect()
    }

    fn dataset() -> RawDataset {
        [
            (
                "Bhopal".to_owned(),
                record(&[
                    ("population_census", json!(100_000)),
                    ("population_projected_2025", json!(120_000)),
                    ("waste_generated_tpd", json!(43.6)),
                    ("waste_processed_tpd", json!(30.0)),
                    ("waste_gap_tpd", json!(13.6)),
                    ("sewage_generated_mld", json!("12.5")),
                    ("plastic_waste_tpd", json!(4.2)),
                    ("cd_waste_tpd", json!(6.0)),
                    ("ewaste_tpa", json!(73.0)),
                    ("growth_rate_pct", json!(28.5)),
                ]),
            ),
            (
                "Harda".to_owned(),
                record(&[
                    ("waste_generated_tpd", json!(10.0)),
                    ("waste_processed_tpd", json!(25.0)),
                ]),
            ),
            ("Niwari".to_owned(), RawRecord::new()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn builds_full_report() {
        let dataset = dataset();
        let catalog = default_catalog();
        let report = DistrictReportBuilder::new(&dataset, &catalog)
            .build(" bhopal ")
            .unwrap();

        assert_eq!(report.district, "Bhopal");
        assert_eq!(report.forecast.years, default_horizon());
        assert!((report.forecast.values[0] - 120_000.0).abs() < f64::EPSILON);
        assert!((report.ratios.processed_percent - 30.0 / 43.6 * 100.0).abs() < 1e-9);
        assert_eq!(report.summary.len(), 5);
        assert!((report.summary[3].value - 0.2).abs() < 1e-12);
        assert!(report.fleet.feasible);
        assert_eq!(report.fleet.counts(), vec![2, 1, 0]);
        assert!((report.fleet.total_cost - 6634.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fleet_is_sized_to_generation_not_gap() {
        let dataset = dataset();
        let catalog = default_catalog();
        let report = DistrictReportBuilder::new(&dataset, &catalog)
            .build("Bhopal")
            .unwrap();

        assert!((report.fleet.required_tpd - report.waste.generated_tpd).abs() < f64::EPSILON);
        assert!((report.fleet.required_tpd - 43.6).abs() < f64::EPSILON);
        assert!(report.fleet.total_capacity() >= 43.6);

        let attrs = waste_map_district::resolve("Bhopal", &dataset).unwrap();
        assert!((required_capacity(&attrs) - attrs.waste_generated_tpd).abs() < f64::EPSILON);
    }

    #[test]
    fn over_processing_is_capped() {
        let dataset = dataset();
        let catalog = default_catalog();
        let report = DistrictReportBuilder::new(&dataset, &catalog)
            .build("Harda")
            .unwrap();

        assert!((report.ratios.processed_percent - 100.0).abs() < f64::EPSILON);
        assert!(report.ratios.percent_capped);
        assert!(report.ratios.gap_for_pie == 0.0);
        assert!(report.forecast.cagr == 0.0);
    }

    #[test]
    fn empty_record_gives_zero_plan() {
        let dataset = dataset();
        let catalog = default_catalog();
        let report = DistrictReportBuilder::new(&dataset, &catalog)
            .build("Niwari")
            .unwrap();

        assert_eq!(report.fleet.counts(), vec![0, 0, 0]);
        assert!(report.fleet.total_cost == 0.0);
        assert!(report.forecast.values.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn unknown_district_is_not_found() {
        let dataset = dataset();
        let catalog = default_catalog();
        let err = DistrictReportBuilder::new(&dataset, &catalog)
            .build("Gwalior")
            .unwrap_err();
        assert!(matches!(err, ReportError::NotFound { district } if district == "Gwalior"));
    }

    #[test]
    fn uncoverable_requirement_is_infeasible() {
        let dataset = dataset();
        let catalog = FleetCatalog {
            vehicles: vec![VehicleType::new("cart", "Cart", 0.0, 100.0)],
        };
        let err = DistrictReportBuilder::new(&dataset, &catalog)
            .build("Bhopal")
            .unwrap_err();
        match err {
            ReportError::Infeasible {
                district,
                required_tpd,
            } => {
                assert_eq!(district, "Bhopal");
                assert!((required_tpd - 43.6).abs() < f64::EPSILON);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn exhausted_search_is_infeasible() {
        let dataset = dataset();
        let catalog = default_catalog();
        let err = DistrictReportBuilder::new(&dataset, &catalog)
            .with_optimizer(Optimizer::new().with_node_budget(1))
            .build("Bhopal")
            .unwrap_err();
        assert!(matches!(err, ReportError::Infeasible { .. }));
    }

    #[test]
    fn builds_in_parallel() {
        let dataset = dataset();
        let catalog = default_catalog();
        let builder = DistrictReportBuilder::new(&dataset, &catalog);

        let reports: Vec<DistrictReport> = std::thread::scope(|s| {
            let handles: Vec<_> = ["Bhopal", "Harda", "Niwari"]
                .into_iter()
                .map(|d| {
                    let builder = &builder;
                    s.spawn(move || builder.build(d).unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let sequential = builder.build("Bhopal").unwrap();
        assert_eq!(reports[0], sequential);
        assert_eq!(reports.len(), 3);
    }

    #[test]
    fn building_does_not_mutate_inputs() {
        let dataset = dataset();
        let catalog = default_catalog();
        let before = format!("{dataset:?}{catalog:?}");
        let builder = DistrictReportBuilder::new(&dataset, &catalog);
        builder.build("Bhopal").unwrap();
        builder.build("Harda").unwrap();
        assert_eq!(before, format!("{dataset:?}{catalog:?}"));
    }
}
