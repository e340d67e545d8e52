//! Expense line format
//!
//! One expense per line, fields `name|category|amount|date`. Field values are
//! not escaped, so a `|` inside a name or category cannot be read back.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Money};

/// Field separator
pub const DELIMITER: char = '|';

const FIELD_COUNT: usize = 4;

/// Encode an expense as a single line
pub fn encode_line(expense: &Expense) -> String {
    [
        expense.name(),
        expense.category(),
        &expense.amount().to_plain_string(),
        expense.date(),
    ]
    .join(DELIMITER.to_string().as_str())
}

/// Decode one line
///
/// Returns `Ok(None)` for a line that does not have exactly four fields.
/// `line_number` is 1-based and only used for error reporting.
pub fn decode_line(line: &str, line_number: usize) -> TrackerResult<Option<Expense>> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Ok(None);
    }

    let amount = Money::parse(fields[2]).map_err(|e| TrackerError::Parse {
        line: line_number,
        message: e.to_string(),
    })?;

    let expense = Expense::new(fields[0], fields[1], amount, fields[3]).map_err(|e| {
        TrackerError::Parse {
            line: line_number,
            message: e.to_string(),
        }
    })?;

    Ok(Some(expense))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_encode_line() {
        let e = Expense::new("Lunch", "Food", Money::new(dec!(100.50)), "01/02/2024").unwrap();
        assert_eq!(encode_line(&e), "Lunch|Food|100.50|01/02/2024");
    }

    #[test]
    fn test_decode_line() {
        let e = decode_line("Bus|Travel|45|03/03/2024", 1).unwrap().unwrap();
        assert_eq!(e.name(), "Bus");
        assert_eq!(e.category(), "Travel");
        assert_eq!(e.amount().value(), dec!(45));
        assert_eq!(e.date(), "03/03/2024");
    }

    #[test]
    fn test_decode_legacy_amount_forms() {
        let e = decode_line("Rent|Home|2500.0|01/01/2024", 1).unwrap().unwrap();
        assert_eq!(e.amount().value(), dec!(2500));

        let e = decode_line("Car|Auto|1.2E5|01/01/2024", 1).unwrap().unwrap();
        assert_eq!(e.amount().value(), dec!(120000));
    }

    #[test]
    fn test_empty_date_survives() {
        let e = Expense::new("Tea", "Food", Money::from_units(20), "").unwrap();
        let line = encode_line(&e);
        assert_eq!(line, "Tea|Food|20|");
        assert_eq!(decode_line(&line, 1).unwrap(), Some(e));
    }

    #[test]
    fn test_wrong_field_count_is_none() {
        assert_eq!(decode_line("OnlyTwo|Fields", 1).unwrap(), None);
        assert_eq!(decode_line("", 1).unwrap(), None);
        assert_eq!(decode_line("a|b|1|d|extra", 1).unwrap(), None);
    }

    #[test]
    fn test_bad_amount_is_parse_error() {
        let err = decode_line("Lunch|Food|abc|01/02/2024", 7).unwrap_err();
        assert!(matches!(err, TrackerError::Parse { line: 7, .. }));
    }

    #[test]
    fn test_negative_amount_is_parse_error() {
        let err = decode_line("Lunch|Food|-5|01/02/2024", 2).unwrap_err();
        assert!(matches!(err, TrackerError::Parse { line: 2, .. }));
    }
}
