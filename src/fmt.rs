use std::fmt::{Debug, Display, Formatter};

/// Percentage that is already multiplied by 100.
pub struct FormattedPercentage(pub f64);

impl Debug for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

/// CO₂e amount with its unit.
pub struct FormattedEmission<'a>(pub f64, pub &'a str);

impl Display for FormattedEmission<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} {} CO₂e", self.0, self.1)
    }
}
