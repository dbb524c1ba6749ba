use std::fmt::{Display, Formatter};

/// Ratio rendered as a percentage, one decimal unless the formatter asks for more.
#[derive(Copy, Clone, Debug)]
pub struct Percentage(pub f64);

impl Display for Percentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.0.is_finite() {
            return write!(f, "n/a");
        }
        let precision = f.precision().unwrap_or(1);
        write!(f, "{:.*}%", precision, self.0 * 100.0)
    }
}
