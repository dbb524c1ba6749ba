use clap::Parser;
use itertools::Itertools;
use serde::Serialize;

use crate::{
    cli::{profile::ProfileArgs, search::SearchArgs},
    core::{bill::MonthlyBill, model::AnnualSummary, multi_start::Optimization, tier::Tier},
    prelude::*,
    profile::Profile,
    tables::{
        build_comparison_table,
        build_contract_table,
        build_demand_table,
        build_seeds_table,
        build_summary_table,
    },
};

#[derive(Parser)]
pub struct OptimizeArgs {
    #[clap(flatten)]
    profile: ProfileArgs,

    #[clap(flatten)]
    search: SearchArgs,

    /// Tier to compare the monthly demand against the contracted capacity for.
    #[clap(long, value_enum, default_value = "peak", env = "DEMAND_TIER")]
    tier: Tier,

    /// Print a JSON report instead of the tables.
    #[clap(long)]
    json: bool,
}

impl OptimizeArgs {
    #[instrument(skip_all)]
    pub async fn run(self) -> Result {
        let optimizer = self.search.build()?;
        let profile = self.profile.read()?;

        // The search is CPU-bound and runs to completion once started:
        let optimization = {
            let profile = profile.clone();
            tokio::task::spawn_blocking(move || {
                optimizer.optimize_multi_start(profile.cost_model(), &profile.current_contract)
            })
            .await
            .context("the optimization task has failed")?
        };

        let report = Report::new(&profile, optimization);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            report.print(&profile, self.tier);
        }
        Ok(())
    }
}

#[must_use]
#[derive(Serialize)]
struct Report {
    optimization: Optimization,
    current: AnnualSummary,
    optimized: AnnualSummary,
    current_bills: Vec<MonthlyBill>,
    optimized_bills: Vec<MonthlyBill>,
}

impl Report {
    fn new(profile: &Profile, optimization: Optimization) -> Self {
        let model = profile.cost_model();
        Self {
            current: model.annual_summary(&profile.current_contract),
            optimized: model.annual_summary(&optimization.contract),
            current_bills: model.bills(&profile.current_contract).collect_vec(),
            optimized_bills: model.bills(&optimization.contract).collect_vec(),
            optimization,
        }
    }

    fn print(&self, profile: &Profile, tier: Tier) {
        println!("{}", build_summary_table(&self.optimization, self.current, self.optimized));
        println!(
            "{}",
            build_contract_table(&profile.current_contract, &self.optimization.contract)
        );
        println!("{}", build_seeds_table(&self.optimization));
        println!("{}", build_comparison_table(&self.current_bills, &self.optimized_bills));
        println!(
            "{}",
            build_demand_table(
                tier,
                &profile.demands,
                &self.current_bills,
                &self.optimized_bills,
                &profile.current_contract,
                &self.optimization.contract,
            )
        );
    }
}
