//! Expense model
//!
//! A single discretionary expense logged by the user. Expenses are
//! immutable once created.

use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// Date format the user is asked to type
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// A logged expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    name: String,
    category: String,
    amount: Money,
    /// Free-form, usually "dd/mm/yyyy"
    date: String,
}

impl Expense {
    /// Create a new expense
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the amount is negative.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        date: impl Into<String>,
    ) -> TrackerResult<Self> {
        if amount.is_negative() {
            return Err(TrackerError::negative("Expense amount"));
        }

        Ok(Self {
            name: name.into(),
            category: category.into(),
            amount,
            date: date.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}

/// Today's date in the format expenses are logged with
pub fn today() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_expense() {
        let e = Expense::new("Lunch", "Food", Money::new(dec!(250)), "01/02/2024").unwrap();
        assert_eq!(e.name(), "Lunch");
        assert_eq!(e.category(), "Food");
        assert_eq!(e.amount().value(), dec!(250));
        assert_eq!(e.date(), "01/02/2024");
    }

    #[test]
    fn test_zero_amount_allowed() {
        assert!(Expense::new("Free", "Misc", Money::zero(), "").is_ok());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = Expense::new("Refund", "Misc", Money::from_units(-5), "").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_today_format() {
        let date = today();
        assert!(chrono::NaiveDate::parse_from_str(&date, DATE_FORMAT).is_ok());
    }
}
