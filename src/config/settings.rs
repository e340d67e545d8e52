//! User settings for the salary ledger
//!
//! Optional JSON settings file. Every field has a default, so a partial or
//! absent file is fine; command-line flags override what is read here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::models::money::{Money, DEFAULT_SYMBOL};
use crate::storage::DEFAULT_EXPENSES_FILE;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol printed before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Where expenses are saved to and loaded from
    #[serde(default = "default_expenses_file")]
    pub expenses_file: PathBuf,

    /// Minimum balance goal to start the session with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_goal: Option<Money>,
}

fn default_currency() -> String {
    DEFAULT_SYMBOL.to_string()
}

fn default_expenses_file() -> PathBuf {
    PathBuf::from(DEFAULT_EXPENSES_FILE)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            expenses_file: default_expenses_file(),
            default_goal: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, TrackerError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Settings file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TrackerError::Io(format!("Failed to read settings file: {}", e))
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            TrackerError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        if settings.default_goal.is_some_and(|goal| goal.is_negative()) {
            return Err(TrackerError::Config(
                "default_goal cannot be negative".to_string(),
            ));
        }

        Ok(settings)
    }

    /// Settings as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, TrackerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
