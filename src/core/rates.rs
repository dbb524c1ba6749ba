use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::{
    core::{season::Season, tier::TierMap},
    quantity::rate::KilowattRate,
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalRate {
    pub summer: KilowattRate,
    pub non_summer: KilowattRate,
}

impl SeasonalRate {
    pub const fn new(summer: f64, non_summer: f64) -> Self {
        Self { summer: KilowattRate::new(summer), non_summer: KilowattRate::new(non_summer) }
    }

    pub fn in_season(self, season: Season) -> KilowattRate {
        match season {
            Season::Summer => self.summer,
            Season::Shoulder => (self.summer + self.non_summer) / 2.0,
            Season::NonSummer => self.non_summer,
        }
    }
}

/// Summer and non-summer demand charges per tier.
pub type RateSchedule = TierMap<SeasonalRate>;

impl RateSchedule {
    /// Blended rate per tier for the month.
    pub fn monthly(&self, month: Month) -> TierMap<KilowattRate> {
        let season = Season::from(month);
        self.map(|rate| rate.in_season(season))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::{season::MONTHS, tier::Tier};

    #[test]
    fn test_shoulder_blending() {
        let rates = RateSchedule {
            peak: SeasonalRate::new(223.6, 166.9),
            semi_peak: SeasonalRate::new(166.9, 166.9),
            saturday_semi_peak: SeasonalRate::new(44.7, 33.3),
            off_peak: SeasonalRate::new(44.7, 33.3),
        };
        for tier in Tier::all() {
            let SeasonalRate { summer, non_summer } = rates[tier];
            let mean = (summer.get() + non_summer.get()) / 2.0;
            for month in MONTHS {
                let expected = match month.number_from_month() {
                    5 | 10 => mean,
                    6..=9 => summer.get(),
                    _ => non_summer.get(),
                };
                assert_abs_diff_eq!(rates.monthly(month)[tier].get(), expected);
            }
        }
    }

    #[test]
    fn test_june_peak_rate() {
        let rates = RateSchedule { peak: SeasonalRate::new(223.6, 166.9), ..Default::default() };
        assert_eq!(rates.monthly(Month::June).peak, KilowattRate::from(223.6));
        assert_abs_diff_eq!(rates.monthly(Month::May).peak.get(), 195.25);
        assert_eq!(rates.monthly(Month::December).peak, KilowattRate::from(166.9));
    }
}
