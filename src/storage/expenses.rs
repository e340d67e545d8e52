//! Expense store
//!
//! The ordered, in-memory list of logged expenses, and its flat-file
//! serialization.

use std::path::Path;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Money};

use super::codec::{decode_line, encode_line};
use super::file_io::{read_all_lines, write_all_lines};

/// Outcome of replacing the store from lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Expenses now in the store
    pub loaded: usize,
    /// Non-blank lines dropped for not having four fields
    pub skipped: usize,
}

/// Ordered collection of expenses, duplicates allowed
#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    /// Always the exact sum of `expenses`
    total: Money,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the running total would overflow; the store
    /// is left unchanged.
    pub fn add(&mut self, expense: Expense) -> TrackerResult<()> {
        self.total = self
            .total
            .checked_add(expense.amount())
            .ok_or_else(|| TrackerError::too_large("Total expense"))?;

        tracing::debug!(expense = expense.name(), "Adding expense");
        self.expenses.push(expense);
        Ok(())
    }

    /// Sum of all amounts
    pub fn total(&self) -> Money {
        self.total
    }

    /// Expenses in insertion order
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// One line per expense
    pub fn serialize(&self) -> Vec<String> {
        self.expenses.iter().map(encode_line).collect()
    }

    /// Replace the store with the expenses encoded in `lines`
    ///
    /// Lines without exactly four fields are dropped. A line with an
    /// unreadable amount, or one that overflows the total, fails the whole
    /// call and leaves the store as it was.
    pub fn deserialize<I, S>(&mut self, lines: I) -> TrackerResult<LoadSummary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        let mut total = Money::zero();
        let mut skipped = 0;

        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            match decode_line(line, index + 1)? {
                Some(expense) => {
                    total = total.checked_add(expense.amount()).ok_or_else(|| {
                        TrackerError::Parse {
                            line: index + 1,
                            message: "total expense is too large".to_string(),
                        }
                    })?;
                    parsed.push(expense);
                }
                None if line.trim().is_empty() => {}
                None => {
                    tracing::warn!(line = index + 1, "Skipping malformed expense line");
                    skipped += 1;
                }
            }
        }

        self.expenses = parsed;
        self.total = total;

        Ok(LoadSummary {
            loaded: self.expenses.len(),
            skipped,
        })
    }

    /// Write every expense to `path`, replacing its contents
    pub fn save<P: AsRef<Path>>(&self, path: P) -> TrackerResult<()> {
        let path = path.as_ref();
        write_all_lines(path, self.serialize())?;
        tracing::info!(count = self.len(), path = %path.display(), "Saved expenses");
        Ok(())
    }

    /// Replace the store with the expenses in `path`
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> TrackerResult<LoadSummary> {
        let path = path.as_ref();
        let lines = read_all_lines(path)?;
        let summary = self.deserialize(lines)?;
        tracing::info!(
            loaded = summary.loaded,
            skipped = summary.skipped,
            path = %path.display(),
            "Loaded expenses"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::fs;
    use tempfile::TempDir;

    fn expense(name: &str, amount: Money) -> Expense {
        Expense::new(name, "Misc", amount, "01/01/2024").unwrap()
    }

    fn sample_store() -> ExpenseStore {
        let mut store = ExpenseStore::new();
        store.add(expense("Groceries", Money::new(dec!(100.50)))).unwrap();
        store.add(expense("Fuel", Money::new(dec!(200.25)))).unwrap();
        store.add(expense("Movie", Money::new(dec!(50)))).unwrap();
        store
    }

    #[test]
    fn test_empty_store() {
        let store = ExpenseStore::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
        assert_eq!(store.total(), Money::zero());
    }

    #[test]
    fn test_total() {
        let store = sample_store();
        assert_eq!(store.len(), 3);
        assert_eq!(store.total().value(), dec!(350.75));
    }

    #[test]
    fn test_list_keeps_insertion_order_and_duplicates() {
        let mut store = ExpenseStore::new();
        store.add(expense("B", Money::from_units(1))).unwrap();
        store.add(expense("A", Money::from_units(2))).unwrap();
        store.add(expense("B", Money::from_units(1))).unwrap();

        let names: Vec<_> = store.list().iter().map(Expense::name).collect();
        assert_eq!(names, vec!["B", "A", "B"]);
    }

    #[test]
    fn test_serialize_lines() {
        let store = sample_store();
        assert_eq!(
            store.serialize(),
            vec![
                "Groceries|Misc|100.50|01/01/2024",
                "Fuel|Misc|200.25|01/01/2024",
                "Movie|Misc|50|01/01/2024",
            ]
        );
    }

    #[test]
    fn test_deserialize_reproduces_serialized_store() {
        let store = sample_store();
        let mut restored = ExpenseStore::new();
        let summary = restored.deserialize(store.serialize()).unwrap();

        assert_eq!(summary.loaded, 3);
        assert_eq!(summary.skipped, 0);
        assert_eq!(restored.list(), store.list());
    }

    #[test]
    fn test_deserialize_drops_short_lines() {
        let mut store = ExpenseStore::new();
        let summary = store
            .deserialize([
                "Rent|Home|1000|01/01/2024",
                "OnlyTwo|Fields",
                "",
                "Bus|Travel|20|02/01/2024",
            ])
            .unwrap();

        assert_eq!(summary, LoadSummary { loaded: 2, skipped: 1 });
        let names: Vec<_> = store.list().iter().map(Expense::name).collect();
        assert_eq!(names, vec!["Rent", "Bus"]);
    }

    #[test]
    fn test_deserialize_replaces_contents() {
        let mut store = sample_store();
        store.deserialize(["Tea|Food|10|01/01/2024"]).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.total(), Money::from_units(10));
    }

    #[test]
    fn test_bad_amount_leaves_store_untouched() {
        let mut store = sample_store();
        let err = store
            .deserialize(["Tea|Food|10|01/01/2024", "Cake|Food|ten|01/01/2024"])
            .unwrap_err();

        assert!(matches!(err, TrackerError::Parse { line: 2, .. }));
        assert_eq!(store.len(), 3);
        assert_eq!(store.total().value(), dec!(350.75));
    }

    #[test]
    fn test_add_rejects_total_overflow() {
        let mut store = ExpenseStore::new();
        store.add(expense("Huge", Money::new(Decimal::MAX))).unwrap();

        let err = store.add(expense("Huge", Money::new(Decimal::MAX))).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(store.len(), 1);
        assert_eq!(store.total(), Money::new(Decimal::MAX));
    }

    #[test]
    fn test_deserialize_rejects_total_overflow() {
        let huge = format!("Huge|Misc|{}|01/01/2024", Decimal::MAX);
        let mut store = sample_store();

        let err = store.deserialize([huge.as_str(), huge.as_str()]).unwrap_err();
        assert!(matches!(err, TrackerError::Parse { line: 2, .. }));
        assert_eq!(store.len(), 3);
        assert_eq!(store.total().value(), dec!(350.75));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");

        let store = sample_store();
        store.save(&path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Groceries|Misc|100.50|01/01/2024\nFuel|Misc|200.25|01/01/2024\nMovie|Misc|50|01/01/2024\n"
        );

        let mut loaded = ExpenseStore::new();
        let summary = loaded.load(&path).unwrap();
        assert_eq!(summary.loaded, 3);
        assert_eq!(loaded.list(), store.list());
    }

    #[test]
    fn test_load_missing_file_keeps_store() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = sample_store();

        let err = store.load(temp_dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, TrackerError::Io(_)));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_failed_save_keeps_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = sample_store();

        assert!(store.save(temp_dir.path().join("missing").join("x.txt")).is_err());
        assert_eq!(store.len(), 3);
    }
}
