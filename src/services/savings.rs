//! Savings evaluation
//!
//! Compares what is left of the monthly balance after logged expenses with
//! the user's minimum balance goal.

use crate::models::savings::ALERT_MARGIN_UNITS;
use crate::models::{Money, SavingsReport, SavingsStatus};

/// Classifies savings against a minimum balance goal
pub struct SavingsEvaluator;

impl SavingsEvaluator {
    /// Savings left this month after logged expenses; may be negative
    pub fn savings(monthly_balance: Money, total_expenses: Money) -> Money {
        monthly_balance - total_expenses
    }

    /// Evaluate savings against the goal
    ///
    /// Branches are checked in order and the first match wins. Anything at or
    /// below `goal + 1000` is an alert, which includes every value below the
    /// goal, so the `Warning` branch is never taken.
    pub fn evaluate(monthly_balance: Money, total_expenses: Money, goal: Money) -> SavingsReport {
        let savings = Self::savings(monthly_balance, total_expenses);

        // A goal too close to the maximum has no room for the margin
        let near_limit = goal
            .checked_add(Money::from_units(ALERT_MARGIN_UNITS))
            .map_or(true, |limit| savings <= limit);

        let status = if near_limit {
            SavingsStatus::Alert
        } else if savings < goal {
            SavingsStatus::Warning
        } else {
            SavingsStatus::Safe
        };

        tracing::debug!(%status, savings = %savings.to_plain_string(), "Evaluated savings");

        SavingsReport {
            goal,
            savings,
            status,
        }
    }
}
