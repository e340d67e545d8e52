//! Storage layer for the salary ledger
//!
//! Keeps logged expenses in memory and persists them to a flat,
//! `|`-delimited text file on request.

pub mod codec;
pub mod expenses;
pub mod file_io;

pub use codec::DELIMITER;
pub use expenses::{ExpenseStore, LoadSummary};
pub use file_io::{read_all_lines, write_all_lines};

/// Expense file used when none is configured, relative to the working directory
pub const DEFAULT_EXPENSES_FILE: &str = "expenses.txt";
