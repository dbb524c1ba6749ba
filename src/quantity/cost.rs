use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

pub type Cost = Quantity<0, 1>;

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.0}", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rounds_to_whole_units() {
        assert_eq!(Cost::from(72_446.4).to_string(), "$72446");
    }
}
