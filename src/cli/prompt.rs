//! Console prompts
//!
//! Line-based question and answer over any reader and writer, with
//! validate-and-reprompt for amounts.

use std::io::{BufRead, Write};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;
use crate::storage::DELIMITER;

/// Parse a non-negative amount typed by the user
///
/// # Errors
///
/// Returns `InvalidInput` if the text is not a number or is negative.
pub fn parse_amount(text: &str, field: &str) -> TrackerResult<Money> {
    let amount = Money::parse(text).map_err(|_| {
        TrackerError::InvalidInput(format!("{} must be a number, got '{}'", field, text.trim()))
    })?;

    if amount.is_negative() {
        return Err(TrackerError::negative(field));
    }

    Ok(amount)
}

/// Check a free-text field typed by the user
///
/// # Errors
///
/// Returns `InvalidInput` if the text contains the expense file delimiter,
/// which could not be read back after a save.
pub fn parse_field(text: &str, field: &str) -> TrackerResult<String> {
    if text.contains(DELIMITER) {
        return Err(TrackerError::InvalidInput(format!(
            "{} cannot contain '{}'",
            field, DELIMITER
        )));
    }

    Ok(text.to_string())
}

/// Asks questions on `output` and reads answers from `input`
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write text as-is
    pub fn say(&mut self, text: &str) -> TrackerResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than failing the
    /// read, so the caller sees them as ordinary bad input.
    pub fn ask(&mut self, prompt: &str) -> TrackerResult<Option<String>> {
        self.say(prompt)?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Ask until text without the file delimiter is given; `None` at end of input
    pub fn ask_field(&mut self, prompt: &str, field: &str) -> TrackerResult<Option<String>> {
        loop {
            let Some(text) = self.ask(prompt)? else {
                return Ok(None);
            };

            match parse_field(&text, field) {
                Ok(text) => return Ok(Some(text)),
                Err(e) => {
                    tracing::debug!(error = %e, "Rejected text");
                    self.say(&format!("{}\n", e))?;
                }
            }
        }
    }

    /// Ask until a non-negative amount is given; `None` at end of input
    pub fn ask_amount(&mut self, prompt: &str, field: &str) -> TrackerResult<Option<Money>> {
        loop {
            let Some(text) = self.ask(prompt)? else {
                return Ok(None);
            };

            match parse_amount(&text, field) {
                Ok(amount) => return Ok(Some(amount)),
                Err(e) => {
                    tracing::debug!(error = %e, "Rejected amount");
                    self.say(&format!("{}\n", e))?;
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &W {
        &self.output
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}
