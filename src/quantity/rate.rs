use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Monthly demand charge per contracted kilowatt.
pub type KilowattRate = Quantity<-1, 1>;

impl Display for KilowattRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}/kW", self.0)
    }
}

impl Debug for KilowattRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}/kW", self.0)
    }
}
