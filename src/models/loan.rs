//! Loan range model

use super::money::Money;

/// Minimum and maximum eligible loan amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanRange {
    pub min: Money,
    pub max: Money,
}

impl LoanRange {
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }
}
