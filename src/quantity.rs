pub mod cost;
pub mod rate;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Float quantity tagged with its cost and energy dimensions.
#[derive(
    Clone,
    Copy,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::From,
    derive_more::Sum,
)]
#[from(i32, f64, OrderedFloat<f64>)]
#[serde(transparent)]
#[must_use]
pub struct Quantity<const COST: isize, const ENERGY: isize>(pub OrderedFloat<f64>);

impl<const COST: isize, const ENERGY: isize> Quantity<COST, ENERGY> {
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    /// Round to the given number of significant digits, halves away from zero.
    #[expect(clippy::cast_possible_truncation)]
    pub fn round_to_significant_digits(self, n_digits: u8) -> Self {
        let value = self.0.0;
        if !value.is_normal() {
            return self;
        }
        let exponent = i32::from(n_digits) - 1 - value.abs().log10().floor() as i32;
        let scale = 10.0_f64.powi(exponent.abs());

        let scaled = if exponent >= 0 { value * scale } else { value / scale };
        // Snap to 1e-6 of the last digit first, otherwise `12.345` would round down:
        let rounded = ((scaled * 1e6).round() / 1e6).round();

        Self(OrderedFloat(if exponent >= 0 { rounded / scale } else { rounded * scale }))
    }
}
