use std::fmt::{Debug, Display, Formatter};

use crate::quantity::{Quantity, rate::UnitRate};

/// Price-weighted sum over slots: one whole slot at some rate contributes exactly that rate.
pub type Cost = Quantity<1, 0>;

impl Cost {
    /// Spread the cost evenly over `n_slots` slots.
    pub fn per_slot(self, n_slots: f64) -> UnitRate {
        Quantity(self.0 / n_slots)
    }

    /// Whether the cost is lower than `other` by more than the float summation error.
    ///
    /// Pro-rated sums of equal true value may differ in the last bits.
    #[must_use]
    pub fn undercuts(self, other: Self) -> bool {
        self.0.0 < other.0.0 - Self::RELATIVE_TOLERANCE * other.0.0.abs().max(1.0)
    }

    const RELATIVE_TOLERANCE: f64 = 1e-9;
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_over_slots_and_back() {
        let cost = UnitRate::from(12.0).over_slots(1.5);
        assert_abs_diff_eq!(cost.0.0, 18.0);
        assert_abs_diff_eq!(cost.per_slot(1.5).0.0, 12.0);
    }

    #[test]
    fn test_undercuts() {
        assert!(Cost::from(19.0).undercuts(Cost::from(20.0)));
        assert!(!Cost::from(20.0).undercuts(Cost::from(20.0)));
        assert!(!Cost::from(20.000_000_000_000_004).undercuts(Cost::from(20.0)));
        assert!(!Cost::from(19.999_999_999_999_996).undercuts(Cost::from(20.0)));
        assert!(Cost::from(-2.0).undercuts(Cost::from(-1.0)));
    }
}
