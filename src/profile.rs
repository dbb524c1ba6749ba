use std::{fmt::Display, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    core::{
        model::{AnnualDemand, CostModel},
        rates::{RateSchedule, SeasonalRate},
        season::MONTHS,
        tier::{Contract, Demand},
    },
    prelude::*,
    quantity::Quantity,
};

/// Everything the optimizer needs: the tariff, the contract in force, and a year of demand.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub current_contract: Contract,
    pub rates: RateSchedule,

    /// Monthly peak demands, January first.
    pub demands: AnnualDemand,
}

impl Profile {
    /// Sample tariff and a year of demand readings of a mid-sized site.
    pub fn reference() -> Self {
        Self {
            current_contract: Contract::new(600.0, 0.0, 0.0, 0.0),
            rates: RateSchedule {
                peak: SeasonalRate::new(223.6, 166.9),
                semi_peak: SeasonalRate::new(166.9, 166.9),
                saturday_semi_peak: SeasonalRate::new(44.7, 33.3),
                off_peak: SeasonalRate::new(44.7, 33.3),
            },
            demands: [
                Demand::new(0.0, 325.0, 326.0, 342.0),
                Demand::new(0.0, 353.0, 310.0, 349.0),
                Demand::new(0.0, 359.0, 318.0, 363.0),
                Demand::new(0.0, 403.0, 346.0, 400.0),
                Demand::new(361.0, 401.0, 329.0, 395.0),
                Demand::new(418.0, 591.0, 360.0, 604.0),
                Demand::new(406.0, 434.0, 349.0, 417.0),
                Demand::new(412.0, 611.0, 389.0, 584.0),
                Demand::new(527.0, 623.0, 366.0, 602.0),
                Demand::new(434.0, 519.0, 349.0, 527.0),
                Demand::new(0.0, 469.0, 313.0, 441.0),
                Demand::new(0.0, 348.0, 296.0, 342.0),
            ],
        }
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read the profile from `{}`", path.display()))?;
        let profile = Self::from_toml(&contents)
            .with_context(|| format!("failed to parse the profile `{}`", path.display()))?;
        info!("loaded the profile");
        Ok(profile)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut profile: Self = toml::from_str(contents)?;
        profile.sanitize();
        Ok(profile)
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result {
        let path = path.as_ref();
        std::fs::write(path, toml::to_string_pretty(self)?)
            .with_context(|| format!("failed to write the profile to `{}`", path.display()))
    }

    pub const fn cost_model(&self) -> CostModel<'_> {
        CostModel::new(&self.demands, &self.rates)
    }

    /// Coerce negative and non-finite inputs to zero, the core only accepts non-negative values.
    ///
    /// Returns the number of coerced values.
    pub fn sanitize(&mut self) -> usize {
        let mut n_coerced = 0;
        for (tier, capacity) in self.current_contract.iter_mut() {
            n_coerced += usize::from(coerce(format_args!("{tier} contract"), capacity));
        }
        for (tier, rate) in self.rates.iter_mut() {
            n_coerced += usize::from(coerce(format_args!("{tier} summer rate"), &mut rate.summer));
            n_coerced +=
                usize::from(coerce(format_args!("{tier} non-summer rate"), &mut rate.non_summer));
        }
        for (month, demand) in MONTHS.into_iter().zip(&mut self.demands) {
            for (tier, value) in demand.iter_mut() {
                n_coerced += usize::from(coerce(
                    format_args!("{tier} demand in {}", month.name()),
                    value,
                ));
            }
        }
        n_coerced
    }
}

fn coerce<const POWER: isize, const COST: isize>(
    what: impl Display,
    value: &mut Quantity<POWER, COST>,
) -> bool {
    let sanitized = value.or_zero();
    if sanitized == *value {
        return false;
    }
    warn!(%what, original = value.get(), "coerced to zero");
    *value = sanitized;
    true
}
