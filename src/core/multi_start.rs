use std::{
    fmt::{Display, Formatter},
    time::Instant,
};

use serde::Serialize;

use crate::{
    core::{
        model::CostModel,
        optimizer::{CoordinateDescent, Solution},
        tier::Contract,
    },
    prelude::*,
    quantity::{cost::Cost, power::Kilowatts},
};

/// Empirically tuned starting contract, kept as-is without a derivation.
pub const EMPIRICAL_SEED: Contract = Contract {
    peak: Kilowatts::new(434.0),
    semi_peak: Kilowatts::new(41.0),
    saturday_semi_peak: Kilowatts::ZERO,
    off_peak: Kilowatts::ZERO,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Seed {
    /// The contract currently in force.
    Current,

    /// See [`EMPIRICAL_SEED`].
    Empirical,

    /// Per-tier maximum monthly demand.
    MaxDemand,

    /// Per-tier mean monthly demand.
    MeanDemand,
}

impl Seed {
    pub const ALL: [Self; 4] = [Self::Current, Self::Empirical, Self::MaxDemand, Self::MeanDemand];

    pub fn contract(self, current: &Contract, model: &CostModel<'_>) -> Contract {
        match self {
            Self::Current => *current,
            Self::Empirical => EMPIRICAL_SEED,
            Self::MaxDemand => model.max_demand(),
            Self::MeanDemand => model.mean_demand(),
        }
    }
}

impl Display for Seed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Current => write!(f, "Current"),
            Self::Empirical => write!(f, "Empirical"),
            Self::MaxDemand => write!(f, "Max demand"),
            Self::MeanDemand => write!(f, "Mean demand"),
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct SeedOutcome {
    pub seed: Seed,
    pub start: Contract,
    pub start_cost: Cost,
    pub solution: Solution,
}

#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct Optimization {
    /// Best contract found across all seeds.
    pub contract: Contract,

    /// Annual cost of [`Optimization::contract`].
    pub cost: Cost,

    /// Annual cost of the current contract.
    pub baseline_cost: Cost,

    /// Baseline minus optimized annual cost.
    pub savings: Cost,

    /// Seed that produced the best contract.
    pub best_seed: Seed,

    pub outcomes: [SeedOutcome; 4],
}

impl Optimization {
    /// Savings relative to the baseline, zero when the baseline costs nothing.
    pub fn savings_ratio(&self) -> f64 {
        if self.baseline_cost.is_positive() { self.savings / self.baseline_cost } else { 0.0 }
    }
}

impl CoordinateDescent {
    /// Descend from every [`Seed`] and keep the cheapest result.
    #[instrument(skip_all)]
    pub fn optimize_multi_start(&self, model: CostModel<'_>, current: &Contract) -> Optimization {
        let start_instant = Instant::now();
        let baseline_cost = model.annual_cost(current);
        info!(?baseline_cost, "optimizing…");

        let outcomes = Seed::ALL.map(|seed| {
            let start = seed.contract(current, &model);
            let solution = self.optimize(model, start);
            info!(%seed, contract = ?solution.contract, cost = ?solution.cost, "seed done");
            SeedOutcome { seed, start, start_cost: model.annual_cost(&start), solution }
        });

        // Ties go to the earlier seed:
        let mut best = outcomes[0];
        for outcome in &outcomes[1..] {
            if outcome.solution.cost < best.solution.cost {
                best = *outcome;
            }
        }

        let optimization = Optimization {
            contract: best.solution.contract,
            cost: best.solution.cost,
            baseline_cost,
            savings: baseline_cost - best.solution.cost,
            best_seed: best.seed,
            outcomes,
        };
        info!(
            best_seed = %optimization.best_seed,
            cost = ?optimization.cost,
            savings = ?optimization.savings,
            elapsed = ?start_instant.elapsed(),
            "optimized"
        );
        optimization
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        core::{rates::RateSchedule, tier::Demand},
        profile::Profile,
    };

    #[test]
    fn test_seed_contracts() {
        let profile = Profile::reference();
        let model = profile.cost_model();
        let current = profile.current_contract;
        assert_eq!(Seed::Current.contract(&current, &model), current);
        assert_eq!(Seed::Empirical.contract(&current, &model), Contract::new(434.0, 41.0, 0.0, 0.0));
        assert_eq!(Seed::MaxDemand.contract(&current, &model), model.max_demand());
        assert_eq!(Seed::MeanDemand.contract(&current, &model), model.mean_demand());
    }

    #[test]
    fn test_multi_start_dominance() {
        let profile = Profile::reference();
        let model = profile.cost_model();
        let optimization =
            CoordinateDescent::default().optimize_multi_start(model, &profile.current_contract);

        for seed in Seed::ALL {
            let start = seed.contract(&profile.current_contract, &model);
            assert!(optimization.cost <= model.annual_cost(&start), "{seed}");
        }
        for outcome in &optimization.outcomes {
            assert!(optimization.cost <= outcome.solution.cost);
            assert!(outcome.solution.cost <= outcome.start_cost);
        }
        assert_eq!(optimization.outcomes.map(|outcome| outcome.seed), Seed::ALL);
        assert_abs_diff_eq!(
            optimization.cost.get(),
            model.annual_cost(&optimization.contract).get(),
            epsilon = 1e-6,
        );
        assert_abs_diff_eq!(
            optimization.savings.get(),
            optimization.baseline_cost.get() - optimization.cost.get(),
            epsilon = 1e-6,
        );
        assert_eq!(optimization.best_seed, Seed::Empirical);
        assert_eq!(optimization.contract, Contract::new(430.0, 41.0, 0.0, 0.0));
        assert_abs_diff_eq!(optimization.cost.get(), 1_278_420.9, epsilon = 1e-3);
        assert_abs_diff_eq!(optimization.baseline_cost.get(), 1_383_486.8, epsilon = 1e-3);
        assert!(optimization.savings_ratio() > 0.0 && optimization.savings_ratio() < 1.0);
    }

    #[test]
    fn test_zero_baseline_savings_ratio() {
        let demands = [Demand::default(); 12];
        let rates = RateSchedule::default();
        let optimization = CoordinateDescent::default()
            .optimize_multi_start(CostModel::new(&demands, &rates), &Contract::default());
        assert_eq!(optimization.baseline_cost, Cost::ZERO);
        assert_eq!(optimization.savings, Cost::ZERO);
        assert_abs_diff_eq!(optimization.savings_ratio(), 0.0);
    }

    #[test]
    fn test_ties_go_to_current_contract() {
        // Free capacity: no seed can improve on the current contract.
        let demands = [Demand::default(); 12];
        let rates = RateSchedule::default();
        let current = Contract::new(100.0, 0.0, 0.0, 0.0);
        let optimization = CoordinateDescent::default()
            .optimize_multi_start(CostModel::new(&demands, &rates), &current);
        assert_eq!(optimization.best_seed, Seed::Current);
        assert_eq!(optimization.contract, current);
    }
}
