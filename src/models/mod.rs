//! Core data models for the salary ledger
//!
//! This module contains the data structures of the domain: money amounts,
//! logged expenses, the salary breakdown, savings goals and loan ranges.

pub mod expense;
pub mod loan;
pub mod money;
pub mod profile;
pub mod savings;

pub use expense::Expense;
pub use loan::LoanRange;
pub use money::Money;
pub use profile::FinancialProfile;
pub use savings::{SavingsGoal, SavingsReport, SavingsStatus};
