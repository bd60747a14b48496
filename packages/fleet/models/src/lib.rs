#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Vehicle catalog and fleet plan types.
//!
//! A [`FleetCatalog`] lists the vehicle types that can be procured, each
//! with a carrying capacity and a daily running cost. A [`VehiclePlan`] is
//! the optimizer's answer for one district: how many of each type to buy.

use serde::{Deserialize, Serialize};

/// A procurable collection vehicle type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleType {
    /// Stable identifier (e.g. `"bulk_truck"`).
    pub id: String,
    /// Human-readable name (e.g. `"Bulk truck"`).
    pub name: String,
    /// Tonnes carried per day.
    pub capacity_tonnes: f64,
    /// Running cost per day.
    pub daily_cost: f64,
}

impl VehicleType {
    /// Creates a vehicle type.
    #[must_use]
    pub fn new(id: &str, name: &str, capacity_tonnes: f64, daily_cost: f64) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            capacity_tonnes,
            daily_cost,
        }
    }
}

/// Ordered list of vehicle types available to the optimizer.
///
/// The order is significant: it is the enumeration order of the search
/// and therefore decides ties between equally cheap fleets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetCatalog {
    /// Vehicle types in enumeration order.
    pub vehicles: Vec<VehicleType>,
}

/// Number of vehicles of one type in a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleAllocation {
    /// The vehicle type.
    pub vehicle: VehicleType,
    /// Number of vehicles to procure.
    pub count: u64,
}

impl VehicleAllocation {
    /// Daily cost of this allocation.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn cost(&self) -> f64 {
        self.vehicle.daily_cost * self.count as f64
    }

    /// Daily capacity of this allocation in tonnes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn capacity(&self) -> f64 {
        self.vehicle.capacity_tonnes * self.count as f64
    }
}

/// Result of sizing a fleet against a required daily capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePlan {
    /// Capacity the plan had to cover, in tonnes/day.
    pub required_tpd: f64,
    /// One entry per catalog vehicle type, in catalog order.
    pub allocations: Vec<VehicleAllocation>,
    /// Sum of daily cost times count over all allocations.
    pub total_cost: f64,
    /// `false` when no covering fleet was found. An infeasible plan must
    /// never be presented as a real plan.
    pub feasible: bool,
}

impl VehiclePlan {
    /// Builds a plan from per-type counts aligned with `vehicles`.
    ///
    /// The total cost is the exact dot product of counts and daily costs.
    #[must_use]
    pub fn from_counts(
        required_tpd: f64,
        vehicles: &[VehicleType],
        counts: &[u64],
        feasible: bool,
    ) -> Self {
        let allocations: Vec<VehicleAllocation> = vehicles
            .iter()
            .zip(counts)
            .map(|(vehicle, &count)| VehicleAllocation {
                vehicle: vehicle.clone(),
                count,
            })
            .collect();
        let total_cost = allocations.iter().map(VehicleAllocation::cost).sum();

        Self {
            required_tpd,
            allocations,
            total_cost,
            feasible,
        }
    }

    /// Counts in catalog order.
    #[must_use]
    pub fn counts(&self) -> Vec<u64> {
        self.allocations.iter().map(|a| a.count).collect()
    }

    /// Total daily capacity of the plan in tonnes.
    #[must_use]
    pub fn total_capacity(&self) -> f64 {
        self.allocations.iter().map(VehicleAllocation::capacity).sum()
    }
}
