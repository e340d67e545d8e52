//! Expense list formatting
//!
//! Renders the logged expenses as a table, or a notice when there are none.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Expense, Money};

/// Shown instead of an empty table
pub const NO_EXPENSES: &str = "No additional expenses recorded.";

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
}

/// Format expenses as a numbered table
pub fn format_expense_table(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return format!("{}\n", NO_EXPENSES);
    }

    let rows = expenses.iter().enumerate().map(|(i, e)| ExpenseRow {
        index: i + 1,
        name: e.name().to_string(),
        category: e.category().to_string(),
        amount: e.amount().format_with_symbol(symbol),
        date: e.date().to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format the expense total and what remains of the monthly balance
pub fn format_totals(total: Money, remaining: Money, symbol: &str) -> String {
    format!(
        "Total Extra Expense: {}\nBalance Remaining This Month: {}\n",
        total.format_with_symbol(symbol),
        remaining.format_with_symbol(symbol)
    )
}
