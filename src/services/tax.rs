//! Income tax brackets
//!
//! Maps an annual salary to a flat tax rate percentage.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::brackets::BracketTable;

const TAX_BRACKETS: &[(Decimal, Decimal)] = &[
    (dec!(400000), dec!(0)),
    (dec!(800000), dec!(5)),
    (dec!(1200000), dec!(10)),
    (dec!(1600000), dec!(15)),
    (dec!(2000000), dec!(20)),
    (dec!(2400000), dec!(25)),
];

const TOP_RATE: Decimal = dec!(30);

/// Salary to tax-rate lookup
pub struct TaxTable;

impl TaxTable {
    const TABLE: BracketTable<Decimal> = BracketTable::new(TAX_BRACKETS, TOP_RATE);

    /// Tax rate, in percent, for an annual salary
    pub fn rate_for(salary: Decimal) -> Decimal {
        Self::TABLE.lookup(salary)
    }
}
