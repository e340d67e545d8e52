//! Service layer for the salary ledger
//!
//! Pure financial calculations: bracket lookups for tax and loan ranges, and
//! savings evaluation against a goal.

pub mod brackets;
pub mod loan;
pub mod savings;
pub mod tax;

pub use brackets::BracketTable;
pub use loan::LoanTable;
pub use savings::SavingsEvaluator;
pub use tax::TaxTable;
