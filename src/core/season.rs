use chrono::Month;

/// Billing season of a calendar month.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Season {
    /// June through September.
    Summer,

    /// May and October, billed at the mean of the summer and non-summer rates.
    Shoulder,

    NonSummer,
}

impl From<Month> for Season {
    fn from(month: Month) -> Self {
        match month {
            Month::June | Month::July | Month::August | Month::September => Self::Summer,
            Month::May | Month::October => Self::Shoulder,
            _ => Self::NonSummer,
        }
    }
}

/// Calendar months in billing order.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season() {
        let seasons: Vec<_> = MONTHS.into_iter().map(Season::from).collect();
        assert_eq!(
            seasons,
            [
                Season::NonSummer,
                Season::NonSummer,
                Season::NonSummer,
                Season::NonSummer,
                Season::Shoulder,
                Season::Summer,
                Season::Summer,
                Season::Summer,
                Season::Summer,
                Season::Shoulder,
                Season::NonSummer,
                Season::NonSummer,
            ]
        );
    }

    #[test]
    fn test_months_are_in_calendar_order() {
        for (index, month) in MONTHS.into_iter().enumerate() {
            assert_eq!(month.number_from_month() as usize, index + 1);
        }
    }
}
