//! Savings goal and status models

use std::fmt;

use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// Margin above the goal within which savings are reported as near the limit
pub const ALERT_MARGIN_UNITS: i64 = 1000;

/// The user's minimum balance goal
///
/// Unset until the user supplies one. A goal of exactly zero is a valid,
/// set goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SavingsGoal {
    min_balance: Option<Money>,
}

impl SavingsGoal {
    /// A goal that has not been set yet
    pub fn unset() -> Self {
        Self::default()
    }

    /// Set the minimum balance
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the goal is negative; the previous goal is kept.
    pub fn set(&mut self, min_balance: Money) -> TrackerResult<()> {
        if min_balance.is_negative() {
            return Err(TrackerError::negative("Minimum balance goal"));
        }
        self.min_balance = Some(min_balance);
        Ok(())
    }

    pub fn get(&self) -> Option<Money> {
        self.min_balance
    }

    pub fn is_set(&self) -> bool {
        self.min_balance.is_some()
    }
}

/// Savings classification relative to the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsStatus {
    /// At or within the alert margin above the goal
    Alert,
    /// Below the goal
    Warning,
    /// Comfortably above the goal
    Safe,
}

impl SavingsStatus {
    /// Message shown to the user for this status
    pub fn message(&self) -> &'static str {
        match self {
            Self::Alert => "Alert: You are near your minimum balance limit!",
            Self::Warning => "Warning: You have fallen below your minimum balance!",
            Self::Safe => "Status: Savings are in a safe range.",
        }
    }
}

impl fmt::Display for SavingsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alert => write!(f, "ALERT"),
            Self::Warning => write!(f, "WARNING"),
            Self::Safe => write!(f, "SAFE"),
        }
    }
}

/// Outcome of a savings evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavingsReport {
    pub goal: Money,
    pub savings: Money,
    pub status: SavingsStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_starts_unset() {
        let goal = SavingsGoal::unset();
        assert!(!goal.is_set());
        assert_eq!(goal.get(), None);
    }

    #[test]
    fn test_zero_goal_is_set() {
        let mut goal = SavingsGoal::unset();
        goal.set(Money::zero()).unwrap();
        assert!(goal.is_set());
        assert_eq!(goal.get(), Some(Money::zero()));
    }

    #[test]
    fn test_negative_goal_keeps_previous() {
        let mut goal = SavingsGoal::unset();
        goal.set(Money::from_units(5000)).unwrap();

        let err = goal.set(Money::from_units(-1)).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(goal.get(), Some(Money::from_units(5000)));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(SavingsStatus::Alert.to_string(), "ALERT");
        assert_eq!(SavingsStatus::Warning.to_string(), "WARNING");
        assert_eq!(SavingsStatus::Safe.to_string(), "SAFE");
        assert!(SavingsStatus::Safe.message().contains("safe range"));
    }
}
