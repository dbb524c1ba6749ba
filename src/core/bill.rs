use chrono::Month;
use serde::Serialize;

use crate::{
    core::{
        rates::RateSchedule,
        tier::{Contract, Demand, Tier, TierMap},
    },
    quantity::{Quantity, cost::Cost, power::Kilowatts, rate::KilowattRate},
};

/// Share of the contracted peak capacity that is billed at the lower overage multiplier.
const ALLOWANCE_RATIO: f64 = 0.1;

/// Overage multiplier within the allowance.
const WITHIN_ALLOWANCE_MULTIPLIER: f64 = 2.0;

/// Overage multiplier beyond the allowance.
const OVER_ALLOWANCE_MULTIPLIER: f64 = 3.0;

/// Demand charges of one month under one contract.
#[derive(Copy, Clone, Debug, Serialize)]
#[must_use]
pub struct MonthlyBill {
    pub month: Month,

    /// Contracted capacity times the blended rates.
    pub basic_cost: Cost,

    /// Overage penalties.
    pub excess_cost: Cost,

    pub total_cost: Cost,

    /// Overage per tier.
    pub excess: TierMap<Kilowatts>,
}

impl MonthlyBill {
    pub fn calculate(
        month: Month,
        contract: &Contract,
        demand: &Demand,
        rates: &RateSchedule,
    ) -> Self {
        let rates = rates.monthly(month);
        let basic_cost: Cost =
            contract.iter().map(|(tier, capacity)| *capacity * rates[tier]).sum();
        let excess = excess(contract, demand);
        let allowance = allowance(contract);
        let excess_cost: Cost = excess
            .iter()
            .map(|(tier, excess)| penalty(*excess, allowance, rates[tier.penalty_rate_tier()]))
            .sum();
        Self { month, basic_cost, excess_cost, total_cost: basic_cost + excess_cost, excess }
    }
}

/// Overage per tier.
///
/// Each tier has to clear the cumulative capacity of itself and all higher-priority tiers,
/// and then also the largest overage already attributed to those tiers.
fn excess(contract: &Contract, demand: &Demand) -> TierMap<Kilowatts> {
    let mut excess = TierMap::<Kilowatts>::default();
    let mut cumulative_capacity = Kilowatts::ZERO;
    let mut previous_excess = Kilowatts::ZERO;

    for tier in Tier::all() {
        cumulative_capacity += contract[tier];
        excess[tier] = (demand[tier] - cumulative_capacity - previous_excess).max(Quantity::ZERO);
        previous_excess = previous_excess.max(excess[tier]);
    }

    excess
}

/// Grace allowance that every tier's overage gets independently.
fn allowance(contract: &Contract) -> Kilowatts {
    if contract.peak.is_positive() { contract.peak * ALLOWANCE_RATIO } else { Kilowatts::ZERO }
}

fn penalty(excess: Kilowatts, allowance: Kilowatts, rate: KilowattRate) -> Cost {
    if !excess.is_positive() {
        return Cost::ZERO;
    }
    let within_allowance = excess.min(allowance);
    let over_allowance = excess - within_allowance;
    within_allowance * rate * WITHIN_ALLOWANCE_MULTIPLIER
        + over_allowance * rate * OVER_ALLOWANCE_MULTIPLIER
}
