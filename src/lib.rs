//! Salary ledger - terminal salary breakdown and expense log
//!
//! Given an annual salary, this library computes tax, fixed expenses and the
//! disposable balance from a fixed bracket table, keeps a log of
//! discretionary expenses, checks savings against a minimum balance goal and
//! looks up an eligible home loan range.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, salary breakdown, savings)
//! - `services`: Tax and loan bracket tables, savings evaluation
//! - `storage`: Expense store and flat-file persistence
//! - `display`: Terminal formatting
//! - `cli`: Interactive menu session
//!
//! # Example
//!
//! ```rust
//! use ledger::models::{FinancialProfile, Money};
//! use ledger::services::LoanTable;
//!
//! let profile = FinancialProfile::create(Money::from_units(1_000_000))?;
//! assert_eq!(profile.monthly_balance(), Money::from_units(67_500));
//!
//! let range = LoanTable::range_for(profile.monthly_balance());
//! assert_eq!(range.max, Money::from_units(5_800_000));
//! # Ok::<(), ledger::TrackerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
