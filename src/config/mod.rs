//! Configuration module for the salary ledger
//!
//! Settings are read from an optional JSON file and never written back.

pub mod settings;

pub use settings::Settings;
