use clap::Parser;
use itertools::Itertools;

use crate::{
    cli::profile::ProfileArgs,
    core::tier::{Contract, Tier},
    prelude::*,
    quantity::power::Kilowatts,
    tables::build_bills_table,
};

#[derive(Parser)]
pub struct EvaluateArgs {
    #[clap(flatten)]
    profile: ProfileArgs,

    #[clap(flatten)]
    contract: ContractArgs,
}

/// Per-tier overrides of the current contract.
#[derive(Copy, Clone, Parser)]
pub struct ContractArgs {
    #[clap(long = "peak")]
    peak: Option<Kilowatts>,

    #[clap(long = "semi-peak")]
    semi_peak: Option<Kilowatts>,

    #[clap(long = "saturday-semi-peak")]
    saturday_semi_peak: Option<Kilowatts>,

    #[clap(long = "off-peak")]
    off_peak: Option<Kilowatts>,
}

impl ContractArgs {
    fn apply(self, mut contract: Contract) -> Contract {
        let overrides = [
            (Tier::Peak, self.peak),
            (Tier::SemiPeak, self.semi_peak),
            (Tier::SaturdaySemiPeak, self.saturday_semi_peak),
            (Tier::OffPeak, self.off_peak),
        ];
        for (tier, capacity) in overrides {
            if let Some(capacity) = capacity {
                if capacity.or_zero() != capacity {
                    warn!(%tier, ?capacity, "coerced to zero");
                }
                contract[tier] = capacity.or_zero();
            }
        }
        contract
    }
}

impl EvaluateArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let profile = self.profile.read()?;
        let contract = self.contract.apply(profile.current_contract);
        let model = profile.cost_model();
        let bills = model.bills(&contract).collect_vec();
        let summary = model.annual_summary(&contract);
        info!(
            ?contract,
            basic_cost = ?summary.basic_cost,
            excess_cost = ?summary.excess_cost,
            total_cost = ?summary.total_cost(),
            "evaluated"
        );
        println!("{}", build_bills_table(&bills));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let args = EvaluateArgs::try_parse_from([
            "evaluate",
            "--semi-peak",
            "41",
            "--off-peak=-5",
        ])
        .unwrap();
        let contract = args.contract.apply(Contract::new(600.0, 0.0, 10.0, 20.0));
        assert_eq!(contract, Contract::new(600.0, 41.0, 10.0, 0.0));
    }
}
