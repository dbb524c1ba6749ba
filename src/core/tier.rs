use std::{
    fmt::{Display, Formatter},
    ops::{Index, IndexMut},
};

use enumset::EnumSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::quantity::power::Kilowatts;

/// Demand-charge tier, declared in overage priority order.
#[derive(Debug, clap::ValueEnum, enumset::EnumSetType)]
pub enum Tier {
    Peak,
    SemiPeak,
    SaturdaySemiPeak,
    OffPeak,
}

impl Tier {
    pub fn all() -> impl Iterator<Item = Self> {
        EnumSet::<Self>::all().iter()
    }

    /// Tier whose blended rate prices this tier's overage.
    ///
    /// Saturday semi-peak overage is billed at the semi-peak rate,
    /// and off-peak overage is billed at the Saturday semi-peak rate.
    pub const fn penalty_rate_tier(self) -> Self {
        match self {
            Self::Peak => Self::Peak,
            Self::SemiPeak | Self::SaturdaySemiPeak => Self::SemiPeak,
            Self::OffPeak => Self::SaturdaySemiPeak,
        }
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Peak => write!(f, "Peak"),
            Self::SemiPeak => write!(f, "Semi-peak"),
            Self::SaturdaySemiPeak => write!(f, "Saturday semi-peak"),
            Self::OffPeak => write!(f, "Off-peak"),
        }
    }
}

/// One value per tier.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierMap<T> {
    pub peak: T,
    pub semi_peak: T,
    pub saturday_semi_peak: T,
    pub off_peak: T,
}

/// Contracted capacity per tier, the decision variable.
pub type Contract = TierMap<Kilowatts>;

/// Monthly peak demand per tier.
pub type Demand = TierMap<Kilowatts>;

impl<T> TierMap<T> {
    pub fn from_fn(mut f: impl FnMut(Tier) -> T) -> Self {
        Self {
            peak: f(Tier::Peak),
            semi_peak: f(Tier::SemiPeak),
            saturday_semi_peak: f(Tier::SaturdaySemiPeak),
            off_peak: f(Tier::OffPeak),
        }
    }

    pub fn map<R>(&self, mut f: impl FnMut(&T) -> R) -> TierMap<R> {
        TierMap::from_fn(|tier| f(&self[tier]))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tier, &T)> {
        Tier::all().map(move |tier| (tier, &self[tier]))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Tier, &mut T)> {
        [
            (Tier::Peak, &mut self.peak),
            (Tier::SemiPeak, &mut self.semi_peak),
            (Tier::SaturdaySemiPeak, &mut self.saturday_semi_peak),
            (Tier::OffPeak, &mut self.off_peak),
        ]
        .into_iter()
    }

    /// Copy of the map with a single tier replaced.
    #[must_use]
    pub fn with(mut self, tier: Tier, value: T) -> Self {
        self[tier] = value;
        self
    }
}

impl<T> Index<Tier> for TierMap<T> {
    type Output = T;

    fn index(&self, tier: Tier) -> &Self::Output {
        match tier {
            Tier::Peak => &self.peak,
            Tier::SemiPeak => &self.semi_peak,
            Tier::SaturdaySemiPeak => &self.saturday_semi_peak,
            Tier::OffPeak => &self.off_peak,
        }
    }
}

impl<T> IndexMut<Tier> for TierMap<T> {
    fn index_mut(&mut self, tier: Tier) -> &mut Self::Output {
        match tier {
            Tier::Peak => &mut self.peak,
            Tier::SemiPeak => &mut self.semi_peak,
            Tier::SaturdaySemiPeak => &mut self.saturday_semi_peak,
            Tier::OffPeak => &mut self.off_peak,
        }
    }
}

impl TierMap<Kilowatts> {
    pub fn new(peak: f64, semi_peak: f64, saturday_semi_peak: f64, off_peak: f64) -> Self {
        Self {
            peak: Kilowatts::new(peak),
            semi_peak: Kilowatts::new(semi_peak),
            saturday_semi_peak: Kilowatts::new(saturday_semi_peak),
            off_peak: Kilowatts::new(off_peak),
        }
    }

    /// Sum over the tier and all higher-priority tiers.
    pub fn cumulative(&self, tier: Tier) -> Kilowatts {
        self.iter()
            .take_while_inclusive(|(other, _)| *other != tier)
            .map(|(_, value)| *value)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert_eq!(
            Tier::all().collect_vec(),
            [Tier::Peak, Tier::SemiPeak, Tier::SaturdaySemiPeak, Tier::OffPeak],
        );
    }

    #[test]
    fn test_penalty_rate_tier() {
        assert_eq!(Tier::Peak.penalty_rate_tier(), Tier::Peak);
        assert_eq!(Tier::SemiPeak.penalty_rate_tier(), Tier::SemiPeak);
        assert_eq!(Tier::SaturdaySemiPeak.penalty_rate_tier(), Tier::SemiPeak);
        assert_eq!(Tier::OffPeak.penalty_rate_tier(), Tier::SaturdaySemiPeak);
    }

    #[test]
    fn test_with() {
        let contract = Contract::new(1.0, 2.0, 3.0, 4.0).with(Tier::SaturdaySemiPeak, 9.into());
        assert_eq!(contract, Contract::new(1.0, 2.0, 9.0, 4.0));
        assert_eq!(contract.cumulative(Tier::Peak), Kilowatts::from(1));
        assert_eq!(contract.cumulative(Tier::SemiPeak), Kilowatts::from(3));
        assert_eq!(contract.cumulative(Tier::OffPeak), Kilowatts::from(16));
    }

    #[test]
    fn test_deserialize_missing_tiers_as_zero() {
        let contract: Contract = toml::from_str("peak = 600").unwrap();
        assert_eq!(contract, Contract::new(600.0, 0.0, 0.0, 0.0));
    }
}
