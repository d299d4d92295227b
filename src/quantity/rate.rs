use std::fmt::{Debug, Display, Formatter};

use crate::quantity::{Quantity, cost::Cost};

/// Price per unit of energy, as published for a single price slot.
pub type UnitRate = Quantity<1, -1>;

impl UnitRate {
    /// Cost of drawing one unit of power for `n_slots` slots at this rate.
    pub fn over_slots(self, n_slots: f64) -> Cost {
        Quantity(self.0 * n_slots)
    }
}

impl Display for UnitRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}/kWh", self.0)
    }
}

impl Debug for UnitRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}/kWh", self.0.0)
    }
}
