use std::iter::Sum;

use crate::quantity::percentage::Percentage;

quantity!(
    KilowattHours,
    "kWh",
    derive(::derive_more::Add, ::derive_more::Sub, ::derive_more::FromStr),
);

/// Empty sum is the positive zero.
impl Sum for KilowattHours {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, value| total + value)
    }
}

impl KilowattHours {
    pub const fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Express `self` as a share of `base`.
    ///
    /// A zero base yields zero rather than an infinite or undefined share.
    pub fn percentage_of(self, base: Self) -> Percentage {
        if base == Self::ZERO { Percentage::ZERO } else { Percentage(self.0 * 100.0 / base.0) }
    }
}
