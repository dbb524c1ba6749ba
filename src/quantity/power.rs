use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, cost::Cost, rate::KilowattRate};

pub type Kilowatts = Quantity<1, 0>;

impl Display for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} kW", self.0)
    }
}

impl Debug for Kilowatts {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}kW", self.0)
    }
}

impl Mul<KilowattRate> for Kilowatts {
    type Output = Cost;

    fn mul(self, rate: KilowattRate) -> Self::Output {
        Quantity(self.0 * rate.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_mul_rate() {
        let cost = Kilowatts::from(600) * KilowattRate::from(223.6);
        assert_abs_diff_eq!(cost.get(), 134_160.0, epsilon = 1e-6);
    }

    #[test]
    fn test_display() {
        assert_eq!(Kilowatts::from(434).to_string(), "434.0 kW");
    }
}
