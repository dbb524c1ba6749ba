use bon::Builder;
use serde::Serialize;

use crate::{
    core::{
        model::CostModel,
        tier::{Contract, Tier},
    },
    prelude::*,
    quantity::{cost::Cost, power::Kilowatts},
};

/// Block coordinate descent over the four capacity tiers.
///
/// Every pass scans each tier in priority order over the grid `0, step, 2·step, …, search_range`
/// while holding the other tiers fixed, and keeps the cheapest value. The scan is exhaustive
/// because overage penalties make the annual cost piecewise-linear and non-convex.
#[derive(Copy, Clone, Debug, Builder)]
pub struct CoordinateDescent {
    #[builder(default = Kilowatts::from(5))]
    step: Kilowatts,

    #[builder(default = Kilowatts::from(800))]
    search_range: Kilowatts,

    #[builder(default = 10)]
    max_passes: usize,

    /// Stop once a full pass improves the annual cost by less than this.
    #[builder(default = Cost::from(1))]
    tolerance: Cost,
}

impl Default for CoordinateDescent {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl CoordinateDescent {
    /// Descend from the seed contract.
    ///
    /// The result never costs more than the seed, but it is only a local minimum.
    pub fn optimize(&self, model: CostModel<'_>, seed: Contract) -> Solution {
        let mut contract = seed;
        let mut cost = model.annual_cost(&contract);
        let mut last_cost = cost;
        let mut n_passes = 0;

        while n_passes < self.max_passes {
            n_passes += 1;
            for tier in Tier::all() {
                let mut best_capacity = contract[tier];
                for capacity in self.grid() {
                    let candidate_cost = model.annual_cost(&contract.with(tier, capacity));
                    if candidate_cost < cost {
                        cost = candidate_cost;
                        best_capacity = capacity;
                    }
                }
                contract[tier] = best_capacity;
                trace!(n_passes, %tier, capacity = ?best_capacity, ?cost, "axis updated");
            }
            debug!(n_passes, ?contract, ?cost, "pass completed");
            if (cost - last_cost).abs() < self.tolerance {
                break;
            }
            last_cost = cost;
        }

        Solution { contract, cost, n_passes }
    }

    /// Candidate capacities along a single axis.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn grid(&self) -> impl Iterator<Item = Kilowatts> + use<> {
        let step = self.step;
        let n_steps = if step.is_finite()
            && step.is_positive()
            && self.search_range.is_finite()
            && self.search_range.is_positive()
        {
            (self.search_range / step).floor() as usize
        } else {
            0
        };
        (0..=n_steps).map(move |index| step * index as f64)
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Solution {
    pub contract: Contract,

    /// Annual cost of the contract.
    pub cost: Cost,

    /// Number of passes until convergence or the pass limit.
    pub n_passes: usize,
}
