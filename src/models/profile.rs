//! Financial profile
//!
//! The salary breakdown computed once at the start of a session: tax,
//! fixed expenses and the annual and monthly disposable balance.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::money::Money;
use crate::error::{TrackerError, TrackerResult};
use crate::services::TaxTable;

/// Share of post-tax salary set aside for fixed expenses
pub const FIXED_EXPENSE_SHARE: Decimal = dec!(0.10);

/// Salary breakdown, frozen at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinancialProfile {
    salary: Money,
    tax_rate_percent: Decimal,
    tax: Money,
    after_tax: Money,
    fixed_expenses: Money,
    annual_balance: Money,
    monthly_balance: Money,
}

impl FinancialProfile {
    /// Derive the breakdown for an annual salary
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the salary is negative, or too large for
    /// the breakdown to be computed.
    pub fn create(salary: Money) -> TrackerResult<Self> {
        if salary.is_negative() {
            return Err(TrackerError::negative("Salary"));
        }

        let too_large = || TrackerError::too_large("Salary");

        let tax_rate_percent = TaxTable::rate_for(salary.value());
        let tax = salary
            .checked_percent(tax_rate_percent)
            .ok_or_else(too_large)?;
        let after_tax = salary.checked_sub(tax).ok_or_else(too_large)?;
        let fixed_expenses = after_tax
            .checked_scale(FIXED_EXPENSE_SHARE)
            .ok_or_else(too_large)?;
        let annual_balance = after_tax
            .checked_sub(fixed_expenses)
            .ok_or_else(too_large)?;
        let monthly_balance = annual_balance.divide(12);

        tracing::debug!(
            salary = %salary.to_plain_string(),
            rate = %tax_rate_percent,
            monthly = %monthly_balance.to_plain_string(),
            "Computed financial profile"
        );

        Ok(Self {
            salary,
            tax_rate_percent,
            tax,
            after_tax,
            fixed_expenses,
            annual_balance,
            monthly_balance,
        })
    }

    pub fn salary(&self) -> Money {
        self.salary
    }

    /// One of 0, 5, 10, 15, 20, 25 or 30
    pub fn tax_rate_percent(&self) -> Decimal {
        self.tax_rate_percent
    }

    pub fn tax(&self) -> Money {
        self.tax
    }

    /// Salary after tax, before fixed expenses
    pub fn after_tax(&self) -> Money {
        self.after_tax
    }

    pub fn fixed_expenses(&self) -> Money {
        self.fixed_expenses
    }

    pub fn annual_balance(&self) -> Money {
        self.annual_balance
    }

    pub fn monthly_balance(&self) -> Money {
        self.monthly_balance
    }
}
