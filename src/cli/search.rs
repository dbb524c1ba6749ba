use clap::Parser;

use crate::{
    core::optimizer::CoordinateDescent,
    prelude::*,
    quantity::{cost::Cost, power::Kilowatts},
};

#[derive(Copy, Clone, Parser)]
pub struct SearchArgs {
    /// Capacity grid step.
    #[clap(long = "step-kilowatts", default_value = "5", env = "STEP_KILOWATTS")]
    step: Kilowatts,

    /// Largest capacity considered per tier.
    #[clap(
        long = "search-range-kilowatts",
        default_value = "800",
        env = "SEARCH_RANGE_KILOWATTS"
    )]
    search_range: Kilowatts,

    /// Maximum number of passes over all tiers.
    #[clap(long, default_value = "10", env = "MAX_PASSES")]
    max_passes: usize,

    /// Stop once a pass improves the annual cost by less than this.
    #[clap(long, default_value = "1", env = "TOLERANCE")]
    tolerance: Cost,
}

impl SearchArgs {
    pub fn build(self) -> Result<CoordinateDescent> {
        ensure!(
            self.step.is_finite() && self.step.is_positive(),
            "the step must be positive and finite, got {}",
            self.step,
        );
        ensure!(
            self.search_range.is_finite() && self.search_range >= Kilowatts::ZERO,
            "the search range must be finite and not negative, got {}",
            self.search_range,
        );
        ensure!(self.max_passes >= 1, "at least one pass is required");
        ensure!(
            self.tolerance.is_finite() && self.tolerance >= Cost::ZERO,
            "the tolerance must be finite and not negative",
        );
        Ok(CoordinateDescent::builder()
            .step(self.step)
            .search_range(self.search_range)
            .max_passes(self.max_passes)
            .tolerance(self.tolerance)
            .build())
    }
}
