//! Interactive command-line session
//!
//! Bridges console input and output with the models, services and storage.

pub mod prompt;
pub mod session;

pub use prompt::{parse_amount, parse_field, Prompter};
pub use session::{MenuChoice, Session};
