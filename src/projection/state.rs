//! Running totals carried from one projection month to the next

use rust_decimal::Decimal;

/// Accumulator threaded through the monthly projection loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionState {
    /// Current month index (0 = start)
    pub month: u32,

    /// Sum of all contributions made through `month`
    pub cumulative_contribution: Decimal,
}

impl ProjectionState {
    /// State at month 0: nothing contributed yet
    pub fn start() -> Self {
        Self {
            month: 0,
            cumulative_contribution: Decimal::ZERO,
        }
    }

    /// Advance one month, depositing `contribution` at month end.
    /// Returns `None` if the running total overflows.
    pub fn advance(&mut self, contribution: Decimal) -> Option<()> {
        self.cumulative_contribution = self.cumulative_contribution.checked_add(contribution)?;
        self.month += 1;
        Some(())
    }

    /// Principal put in so far: starting amount plus contributions
    pub fn principal(&self, starting_amount: Decimal) -> Option<Decimal> {
        starting_amount.checked_add(self.cumulative_contribution)
    }
}
