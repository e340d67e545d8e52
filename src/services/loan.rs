//! Home loan eligibility brackets
//!
//! Maps the monthly disposable balance to a minimum and maximum loan amount.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::brackets::BracketTable;
use crate::models::{LoanRange, Money};

const LOAN_BRACKETS: &[(Decimal, (Decimal, Decimal))] = &[
    (dec!(25000), (dec!(700000), dec!(1400000))),
    (dec!(50000), (dec!(1700000), dec!(3300000))),
    (dec!(70000), (dec!(3000000), dec!(5800000))),
];

const TOP_RANGE: (Decimal, Decimal) = (dec!(4000000), dec!(7500000));

/// Monthly balance to loan range lookup
pub struct LoanTable;

impl LoanTable {
    const TABLE: BracketTable<(Decimal, Decimal)> = BracketTable::new(LOAN_BRACKETS, TOP_RANGE);

    /// Eligible loan range for a monthly disposable balance
    pub fn range_for(monthly_balance: Money) -> LoanRange {
        let (min, max) = Self::TABLE.lookup(monthly_balance.value());
        LoanRange::new(Money::new(min), Money::new(max))
    }
}
