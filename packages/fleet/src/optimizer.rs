//! Minimum-cost covering fleet search.
//!
//! Decision variables are one non-negative integer count per catalog
//! vehicle type. The objective is the total daily cost and the single
//! constraint is that combined capacity covers the requirement.
//!
//! The search is a depth-first enumeration in catalog order. Each count
//! runs from `0` up to the number of vehicles of that type that would cover
//! the remaining requirement on their own; the last type takes the smallest
//! count that covers whatever is left. Branches are pruned with the bound
//! `cost_so_far + remaining * cheapest_cost_per_tonne(remaining types)`.
//!
//! Ties are broken deterministically: among fleets of equal minimum cost,
//! the count tuple that is lexicographically smallest in catalog order (the
//! one the enumeration reaches first) wins.

use waste_map_fleet_models::{FleetCatalog, VehiclePlan, VehicleType};

use crate::FleetError;
use crate::catalog::validate_catalog;

/// Tolerance for capacity coverage and cost comparisons.
const EPSILON: f64 = 1e-9;

/// Default cap on the number of search nodes visited per solve.
pub const DEFAULT_NODE_BUDGET: u64 = 2_000_000;

/// Sizes a fleet for `required_tpd` using the default node budget.
///
/// # Errors
///
/// See [`Optimizer::optimize`].
pub fn optimize(required_tpd: f64, catalog: &FleetCatalog) -> Result<VehiclePlan, FleetError> {
    Optimizer::new().optimize(required_tpd, &catalog.vehicles)
}

/// Branch-and-bound fleet optimizer.
#[derive(Debug, Clone, Copy)]
pub struct Optimizer {
    node_budget: u64,
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Optimizer {
    /// Creates an optimizer with [`DEFAULT_NODE_BUDGET`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            node_budget: DEFAULT_NODE_BUDGET,
        }
    }

    /// Caps the number of search nodes. A search that hits the cap gives up
    /// and reports an infeasible plan instead of running unbounded.
    #[must_use]
    pub const fn with_node_budget(mut self, node_budget: u64) -> Self {
        self.node_budget = node_budget;
        self
    }

    /// Finds the cheapest fleet whose capacity covers `required_tpd`.
    ///
    /// A non-positive requirement yields the all-zero plan without
    /// searching. If no covering fleet exists (no type has positive
    /// capacity) or the node budget runs out, the returned plan has
    /// `feasible == false` and carries the counts last explored; callers
    /// must treat that as a planning failure.
    ///
    /// # Errors
    ///
    /// Returns [`FleetError::InvalidRequirement`] if `required_tpd` is not
    /// finite, or [`FleetError::InvalidCatalog`] if the catalog fails
    /// validation.
    pub fn optimize(
        &self,
        required_tpd: f64,
        vehicles: &[VehicleType],
    ) -> Result<VehiclePlan, FleetError> {
        validate_catalog(vehicles)?;
        if !required_tpd.is_finite() {
            return Err(FleetError::InvalidRequirement {
                value: required_tpd,
            });
        }

        if required_tpd <= 0.0 {
            return Ok(VehiclePlan::from_counts(
                required_tpd,
                vehicles,
                &vec![0; vehicles.len()],
                true,
            ));
        }

        let mut search = Search::new(vehicles, self.node_budget);
        search.seed(required_tpd);
        search.descend(0, required_tpd, 0.0);

        log::debug!(
            "Fleet search for {required_tpd:.2} TPD visited {} nodes",
            search.nodes
        );

        if search.exhausted {
            log::warn!(
                "Fleet search for {required_tpd:.2} TPD exceeded its budget of {} nodes",
                self.node_budget
            );
            return Ok(VehiclePlan::from_counts(
                required_tpd,
                vehicles,
                &search.counts,
                false,
            ));
        }

        Ok(match search.best {
            Some((_, counts)) => VehiclePlan::from_counts(required_tpd, vehicles, &counts, true),
            None => {
                log::warn!("No vehicle type can cover {required_tpd:.2} TPD");
                VehiclePlan::from_counts(required_tpd, vehicles, &search.counts, false)
            }
        })
    }
}

/// Smallest number of vehicles of `capacity` that covers `remaining`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn units_to_cover(remaining: f64, capacity: f64) -> u64 {
    ((remaining - EPSILON) / capacity).ceil().max(0.0) as u64
}

struct Search<'a> {
    vehicles: &'a [VehicleType],
    /// Cheapest cost per tonne among `vehicles[i..]` with positive
    /// capacity, or `None` if none of them can carry anything.
    suffix_rate: Vec<Option<f64>>,
    counts: Vec<u64>,
    best: Option<(f64, Vec<u64>)>,
    nodes: u64,
    budget: u64,
    exhausted: bool,
}

impl<'a> Search<'a> {
    fn new(vehicles: &'a [VehicleType], budget: u64) -> Self {
        let mut suffix_rate = vec![None; vehicles.len()];
        let mut rate: Option<f64> = None;
        for (i, vehicle) in vehicles.iter().enumerate().rev() {
            if vehicle.capacity_tonnes > 0.0 {
                let r = vehicle.daily_cost / vehicle.capacity_tonnes;
                rate = Some(rate.map_or(r, |current| current.min(r)));
            }
            suffix_rate[i] = rate;
        }

        Self {
            vehicles,
            suffix_rate,
            counts: vec![0; vehicles.len()],
            best: None,
            nodes: 0,
            budget,
            exhausted: false,
        }
    }

    /// Offers every single-type fleet as an initial incumbent so the bound
    /// prunes from the first branch on.
    fn seed(&mut self, required: f64) {
        for (i, vehicle) in self.vehicles.iter().enumerate() {
            if vehicle.capacity_tonnes <= 0.0 {
                continue;
            }
            let mut counts = vec![0; self.vehicles.len()];
            counts[i] = units_to_cover(required, vehicle.capacity_tonnes);
            self.offer(&counts);
        }
    }

    fn descend(&mut self, index: usize, remaining: f64, cost: f64) {
        self.nodes += 1;
        if self.nodes > self.budget {
            self.exhausted = true;
            return;
        }

        if remaining <= EPSILON {
            self.counts[index..].fill(0);
            let counts = self.counts.clone();
            self.offer(&counts);
            return;
        }

        let Some(rate) = self.suffix_rate[index] else {
            return;
        };
        if let Some((best_cost, _)) = &self.best
            && cost + remaining * rate > best_cost + EPSILON
        {
            return;
        }

        let vehicle = &self.vehicles[index];
        let capacity = vehicle.capacity_tonnes;
        let daily_cost = vehicle.daily_cost;

        if index + 1 == self.vehicles.len() {
            // A positive suffix rate on the last type implies capacity > 0.
            self.counts[index] = units_to_cover(remaining, capacity);
            let counts = self.counts.clone();
            self.offer(&counts);
            return;
        }

        let max = if capacity > 0.0 {
            units_to_cover(remaining, capacity)
        } else {
            0
        };

        for n in 0..=max {
            self.counts[index] = n;
            #[allow(clippy::cast_precision_loss)]
            let n = n as f64;
            self.descend(index + 1, n.mul_add(-capacity, remaining), n.mul_add(daily_cost, cost));
            if self.exhausted {
                return;
            }
        }
    }

    /// Records `counts` if it is strictly cheaper than the incumbent, or
    /// equally cheap and lexicographically smaller.
    fn offer(&mut self, counts: &[u64]) {
        let cost = dot_cost(self.vehicles, counts);
        let better = match &self.best {
            None => true,
            Some((best_cost, best_counts)) => {
                cost < best_cost - EPSILON
                    || ((cost - best_cost).abs() <= EPSILON && counts < best_counts.as_slice())
            }
        };
        if better {
            self.best = Some((cost, counts.to_vec()));
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn dot_cost(vehicles: &[VehicleType], counts: &[u64]) -> f64 {
    vehicles
        .iter()
        .zip(counts)
        .map(|(v, &n)| v.daily_cost * n as f64)
        .sum()
}
