//! Report formatting utilities for terminal output
//!
//! Section headers plus the savings and loan reports.

use crate::models::{LoanRange, SavingsReport};

/// Format a section header, preceded by a blank line
pub fn section(title: &str) -> String {
    format!("\n--- {} ---\n", title)
}

/// Format the savings overview
pub fn format_savings_report(report: &SavingsReport, symbol: &str) -> String {
    let mut output = section("Savings Overview");
    output.push_str(&format!(
        "Minimum Balance Goal: {}\n",
        report.goal.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Current Savings: {}\n",
        report.savings.format_with_symbol(symbol)
    ));
    output.push_str(report.status.message());
    output.push('\n');
    output
}

/// Format the eligible home loan range
pub fn format_loan_range(range: &LoanRange, symbol: &str) -> String {
    let mut output = section("Eligible Home Loan Range");
    output.push_str("Based on your monthly income:\n");
    output.push_str(&format!("Minimum Loan: {}\n", range.min.format_with_symbol(symbol)));
    output.push_str(&format!("Maximum Loan: {}\n", range.max.format_with_symbol(symbol)));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, SavingsStatus};

    #[test]
    fn test_section() {
        assert_eq!(section("Main Menu"), "\n--- Main Menu ---\n");
    }

    #[test]
    fn test_savings_report() {
        let report = SavingsReport {
            goal: Money::from_units(2000),
            savings: Money::from_units(1500),
            status: SavingsStatus::Alert,
        };
        let output = format_savings_report(&report, "Rs.");

        assert!(output.contains("Minimum Balance Goal: Rs.2000.00"));
        assert!(output.contains("Current Savings: Rs.1500.00"));
        assert!(output.contains("Alert: You are near your minimum balance limit!"));
    }

    #[test]
    fn test_loan_range() {
        let range = LoanRange::new(Money::from_units(3_000_000), Money::from_units(5_800_000));
        let output = format_loan_range(&range, "Rs.");

        assert!(output.contains("Minimum Loan: Rs.3000000.00"));
        assert!(output.contains("Maximum Loan: Rs.5800000.00"));
    }
}
