//! Salary breakdown formatting

use crate::models::FinancialProfile;

use super::report::section;

/// Format the salary breakdown shown when a session starts
pub fn format_salary_breakdown(profile: &FinancialProfile, symbol: &str) -> String {
    let mut output = section("Salary Breakdown");

    output.push_str(&format!(
        "Annual Salary: {}\n",
        profile.salary().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Tax Deducted ({}%): {}\n",
        profile.tax_rate_percent(),
        profile.tax().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Other Fixed Expenses (10%): {}\n",
        profile.fixed_expenses().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Available Annual Balance: {}\n",
        profile.annual_balance().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Available Monthly Balance: {}\n",
        profile.monthly_balance().format_with_symbol(symbol)
    ));

    output
}

/// Format the deductions summary printed above the expense list
pub fn format_deductions(profile: &FinancialProfile, symbol: &str) -> String {
    format!(
        "Tax Deducted: {}\nOther Fixed Expenses: {}\nAvailable Monthly Balance: {}\nAvailable Annual Balance: {}\n",
        profile.tax().format_with_symbol(symbol),
        profile.fixed_expenses().format_with_symbol(symbol),
        profile.monthly_balance().format_with_symbol(symbol),
        profile.annual_balance().format_with_symbol(symbol),
    )
}
