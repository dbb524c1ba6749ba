use crate::{
    core::{
        bill::MonthlyBill,
        rates::RateSchedule,
        season::MONTHS,
        tier::{Contract, Demand, TierMap},
    },
    quantity::{Quantity, cost::Cost, power::Kilowatts},
};

/// Monthly demands, January first.
pub type AnnualDemand = [Demand; 12];

/// Annual demand charges of a contract against a fixed demand profile and rate schedule.
#[derive(Copy, Clone)]
pub struct CostModel<'a> {
    pub demands: &'a AnnualDemand,
    pub rates: &'a RateSchedule,
}

impl<'a> CostModel<'a> {
    pub const fn new(demands: &'a AnnualDemand, rates: &'a RateSchedule) -> Self {
        Self { demands, rates }
    }

    pub fn bills(&self, contract: &Contract) -> impl Iterator<Item = MonthlyBill> {
        MONTHS
            .into_iter()
            .zip(self.demands)
            .map(move |(month, demand)| MonthlyBill::calculate(month, contract, demand, self.rates))
    }

    pub fn annual_cost(&self, contract: &Contract) -> Cost {
        self.bills(contract).map(|bill| bill.total_cost).sum()
    }

    /// Annual totals of the basic and excess charges.
    pub fn annual_summary(&self, contract: &Contract) -> AnnualSummary {
        self.bills(contract).fold(AnnualSummary::default(), |summary, bill| AnnualSummary {
            basic_cost: summary.basic_cost + bill.basic_cost,
            excess_cost: summary.excess_cost + bill.excess_cost,
        })
    }

    /// Highest monthly demand per tier.
    pub fn max_demand(&self) -> TierMap<Kilowatts> {
        TierMap::from_fn(|tier| {
            self.demands.iter().map(|demand| demand[tier]).max().unwrap_or(Quantity::ZERO)
        })
    }

    /// Mean monthly demand per tier.
    #[expect(clippy::cast_precision_loss)]
    pub fn mean_demand(&self) -> TierMap<Kilowatts> {
        TierMap::from_fn(|tier| {
            self.demands.iter().map(|demand| demand[tier]).sum::<Kilowatts>()
                / self.demands.len() as f64
        })
    }
}

#[derive(Copy, Clone, Debug, Default, serde::Serialize)]
pub struct AnnualSummary {
    pub basic_cost: Cost,
    pub excess_cost: Cost,
}

impl AnnualSummary {
    pub fn total_cost(&self) -> Cost {
        self.basic_cost + self.excess_cost
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::profile::Profile;

    #[test]
    fn test_annual_cost_is_sum_of_bills() {
        let profile = Profile::reference();
        let model = profile.cost_model();
        let contract = profile.current_contract;
        let annual_cost = model.annual_cost(&contract);
        let by_month: f64 = model.bills(&contract).map(|bill| bill.total_cost.get()).sum();
        assert_abs_diff_eq!(annual_cost.get(), by_month, epsilon = 1e-6);
        assert_abs_diff_eq!(
            model.annual_summary(&contract).total_cost().get(),
            annual_cost.get(),
            epsilon = 1e-6,
        );
        assert_eq!(model.bills(&contract).count(), 12);
    }

    #[test]
    fn test_max_and_mean_demand() {
        let profile = Profile::reference();
        let model = profile.cost_model();
        assert_eq!(model.max_demand(), Contract::new(527.0, 623.0, 389.0, 604.0));
        assert_abs_diff_eq!(model.mean_demand().peak.get(), 2558.0 / 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_profile() {
        let demands = [Demand::default(); 12];
        let rates = RateSchedule::default();
        let model = CostModel::new(&demands, &rates);
        assert_eq!(model.annual_cost(&Contract::new(434.0, 41.0, 0.0, 0.0)), Cost::ZERO);
        assert_eq!(model.max_demand(), Contract::default());
        assert_eq!(model.mean_demand(), Contract::default());
    }
}
