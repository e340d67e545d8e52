//! Bracket tables
//!
//! An ordered set of `(upper bound, value)` pairs defining a step function.
//! Lookup returns the value of the first bracket whose inclusive upper bound
//! is at or above the input, or the catch-all value above the last bracket.

use rust_decimal::Decimal;

/// A piecewise-constant step function over ascending, inclusive upper bounds
#[derive(Debug, Clone, Copy)]
pub struct BracketTable<T: 'static> {
    brackets: &'static [(Decimal, T)],
    above: T,
}

impl<T: Copy + 'static> BracketTable<T> {
    /// Build a table from ascending `(upper bound, value)` pairs and the value
    /// used above the last bound
    pub const fn new(brackets: &'static [(Decimal, T)], above: T) -> Self {
        Self { brackets, above }
    }

    /// Look up the value for `input`
    pub fn lookup(&self, input: Decimal) -> T {
        self.brackets
            .iter()
            .find(|(upper, _)| input <= *upper)
            .map(|(_, value)| *value)
            .unwrap_or(self.above)
    }
}
