pub mod cost;
pub mod power;
pub mod rate;

use std::ops::{Div, Mul};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Dimensioned value, the dimensions are exponents of kilowatts and currency.
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[from(i32, f64, OrderedFloat<f64>)]
#[serde(transparent)]
#[must_use]
pub struct Quantity<const POWER: isize, const COST: isize>(pub OrderedFloat<f64>);

impl<const POWER: isize, const COST: isize> Quantity<POWER, COST> {
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    pub const fn new(value: f64) -> Self {
        Self(OrderedFloat(value))
    }

    pub const fn get(self) -> f64 {
        self.0.0
    }

    pub const fn abs(self) -> Self {
        Self(OrderedFloat(self.0.0.abs()))
    }

    pub fn is_positive(self) -> bool {
        self.0.0 > 0.0
    }

    pub const fn is_finite(self) -> bool {
        self.0.0.is_finite()
    }

    /// Clamp negative and non-finite values to zero.
    pub fn or_zero(self) -> Self {
        if self.is_finite() && self >= Self::ZERO { self } else { Self::ZERO }
    }
}

impl<const POWER: isize, const COST: isize> Mul<f64> for Quantity<POWER, COST> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<const POWER: isize, const COST: isize> Div<f64> for Quantity<POWER, COST> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl<const POWER: isize, const COST: isize> Div<Self> for Quantity<POWER, COST> {
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.get() / rhs.get()
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::{Debug, Formatter};

    use super::*;

    pub type Bare = Quantity<0, 0>;

    impl Debug for Bare {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }

    #[test]
    fn test_min() {
        assert_eq!(Bare::from(1).min(Bare::from(2)), Bare::from(1));
        assert_eq!(Bare::from(2).min(Bare::from(1)), Bare::from(1));
    }

    #[test]
    fn test_max() {
        assert_eq!(Bare::from(1).max(Bare::from(2)), Bare::from(2));
        assert_eq!(Bare::from(2).max(Bare::from(1)), Bare::from(2));
    }

    #[test]
    fn test_or_zero() {
        assert_eq!(Bare::from(-1).or_zero(), Bare::ZERO);
        assert_eq!(Bare::from(f64::NAN).or_zero(), Bare::ZERO);
        assert_eq!(Bare::from(f64::INFINITY).or_zero(), Bare::ZERO);
        assert_eq!(Bare::from(2.5).or_zero(), Bare::from(2.5));
    }

    #[test]
    fn test_is_finite() {
        assert!(Bare::from(-1).is_finite());
        assert!(!Bare::from(f64::NAN).is_finite());
        assert!(!Bare::from(f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_sum() {
        let total: Bare = [Bare::from(1), Bare::from(2.5)].into_iter().sum();
        assert_eq!(total, Bare::from(3.5));
    }
}
