//! Display formatting for terminal output
//!
//! Every formatter returns a `String`; printing is left to the caller.

pub mod expense;
pub mod profile;
pub mod report;

pub use expense::{format_expense_table, format_totals, NO_EXPENSES};
pub use profile::{format_deductions, format_salary_breakdown};
pub use report::{format_loan_range, format_savings_report, section};
