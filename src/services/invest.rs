//! Investment planner
//!
//! Holds the amount the user plans to invest out of what remains this month.
//! The amount is kept in whole euros and always inside `[0, max(remaining, 0)]`.

use crate::models::Money;

/// Coarse slider step (PageUp/PageDown)
pub const COARSE_STEP: Money = Money::from_euros(100);

/// Slider state for the planned investment amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvestmentPlanner {
    amount: Money,
    step: Money,
}

impl InvestmentPlanner {
    /// Create a planner with an initial amount, clamped against `remaining`
    pub fn new(initial: Money, step: Money, remaining: Money) -> Self {
        let step = if step.is_positive() {
            step
        } else {
            Money::from_euros(1)
        };
        let mut planner = Self {
            amount: Money::zero(),
            step,
        };
        planner.set(initial, remaining);
        planner
    }

    /// Currently planned amount
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Fine slider step
    pub fn step(&self) -> Money {
        self.step
    }

    /// Upper bound of the slider for the given remaining balance
    ///
    /// Negative balances collapse the range to zero. The bound is rounded down
    /// to whole euros.
    pub fn upper_bound(remaining: Money) -> Money {
        if remaining.is_positive() {
            Money::from_euros(remaining.euros())
        } else {
            Money::zero()
        }
    }

    /// Set the amount, clamping to the slider range
    pub fn set(&mut self, amount: Money, remaining: Money) {
        let whole = Money::from_euros(amount.euros());
        self.amount = whole.clamp(Money::zero(), Self::upper_bound(remaining));
    }

    /// Re-clamp after `remaining` changed; returns true if the amount moved
    pub fn clamp_to(&mut self, remaining: Money) -> bool {
        let before = self.amount;
        self.set(before, remaining);
        self.amount != before
    }

    /// Move up by the fine step, or the coarse step
    pub fn increase(&mut self, remaining: Money, coarse: bool) {
        let step = if coarse { COARSE_STEP } else { self.step };
        self.set(self.amount + step, remaining);
    }

    /// Move down by the fine step, or the coarse step
    pub fn decrease(&mut self, remaining: Money, coarse: bool) {
        let step = if coarse { COARSE_STEP } else { self.step };
        self.set(self.amount - step, remaining);
    }

    /// Jump to the upper bound
    pub fn to_max(&mut self, remaining: Money) {
        self.amount = Self::upper_bound(remaining);
    }

    /// Jump to zero
    pub fn to_zero(&mut self) {
        self.amount = Money::zero();
    }

    /// Fraction of the range currently selected (0.0 to 1.0), for the gauge
    pub fn ratio(&self, remaining: Money) -> f64 {
        let max = Self::upper_bound(remaining);
        if max.is_zero() {
            0.0
        } else {
            (self.amount.as_f64() / max.as_f64()).clamp(0.0, 1.0)
        }
    }
}
