//! Interactive session
//!
//! Owns the financial profile, expense store and savings goal for the
//! lifetime of one run, and drives the numbered menu.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::Settings;
use crate::display::{
    format_deductions, format_expense_table, format_loan_range, format_salary_breakdown,
    format_savings_report, format_totals, section,
};
use crate::error::TrackerResult;
use crate::models::expense::today;
use crate::models::{Expense, FinancialProfile, LoanRange, Money, SavingsGoal, SavingsReport};
use crate::services::{LoanTable, SavingsEvaluator};
use crate::storage::{ExpenseStore, LoadSummary};

use super::prompt::Prompter;

/// Menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewExpenses,
    TotalExpense,
    Savings,
    LoanRange,
    SetGoal,
    Save,
    Load,
    Exit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 9] = [
        Self::AddExpense,
        Self::ViewExpenses,
        Self::TotalExpense,
        Self::Savings,
        Self::LoanRange,
        Self::SetGoal,
        Self::Save,
        Self::Load,
        Self::Exit,
    ];

    /// Parse the number typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        number.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddExpense => "Add Expense",
            Self::ViewExpenses => "View Expenses",
            Self::TotalExpense => "Total Expense",
            Self::Savings => "Savings",
            Self::LoanRange => "Eligible Loan Range",
            Self::SetGoal => "Set Minimum Balance Goal",
            Self::Save => "Save Expenses",
            Self::Load => "Load Expenses",
            Self::Exit => "Exit",
        }
    }
}

fn menu_text() -> String {
    let mut output = section("Main Menu");
    for (i, choice) in MenuChoice::ALL.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, choice.label()));
    }
    output
}

/// Whether the menu loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// State of one interactive run
#[derive(Debug)]
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    settings: Settings,
    profile: FinancialProfile,
    store: ExpenseStore,
    goal: SavingsGoal,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session, asking for the salary unless one is given
    ///
    /// A typed salary is asked for again until a breakdown can be computed.
    /// Returns `None` if input ends before a salary is entered.
    pub fn start(
        input: R,
        output: W,
        settings: Settings,
        salary: Option<Money>,
    ) -> TrackerResult<Option<Self>> {
        let mut prompter = Prompter::new(input, output);

        let profile = match salary {
            Some(salary) => FinancialProfile::create(salary)?,
            None => {
                let prompt = format!("Enter your Annual Salary (in {}): ", settings.currency_symbol);
                loop {
                    let Some(salary) = prompter.ask_amount(&prompt, "Salary")? else {
                        return Ok(None);
                    };

                    match FinancialProfile::create(salary) {
                        Ok(profile) => break profile,
                        Err(e) => prompter.say(&format!("{}\n", e))?,
                    }
                }
            }
        };

        prompter.say(&format_salary_breakdown(&profile, &settings.currency_symbol))?;

        let mut goal = SavingsGoal::unset();
        if let Some(default_goal) = settings.default_goal {
            goal.set(default_goal)?;
        }

        Ok(Some(Self {
            prompter,
            settings,
            profile,
            store: ExpenseStore::new(),
            goal,
        }))
    }

    pub fn profile(&self) -> &FinancialProfile {
        &self.profile
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    pub fn goal(&self) -> SavingsGoal {
        self.goal
    }

    /// Log an expense
    pub fn add_expense(&mut self, expense: Expense) -> TrackerResult<()> {
        self.store.add(expense)
    }

    /// Set the minimum balance goal
    pub fn set_goal(&mut self, min_balance: Money) -> TrackerResult<()> {
        self.goal.set(min_balance)
    }

    /// What is left of the monthly balance after logged expenses
    pub fn remaining_this_month(&self) -> Money {
        SavingsEvaluator::savings(self.profile.monthly_balance(), self.store.total())
    }

    /// Savings status, or `None` while the goal is unset
    pub fn savings_report(&self) -> Option<SavingsReport> {
        self.goal.get().map(|goal| {
            SavingsEvaluator::evaluate(self.profile.monthly_balance(), self.store.total(), goal)
        })
    }

    /// Eligible loan range for the monthly balance
    pub fn loan_range(&self) -> LoanRange {
        LoanTable::range_for(self.profile.monthly_balance())
    }

    /// Save expenses to `path`
    pub fn save_to(&self, path: &Path) -> TrackerResult<()> {
        self.store.save(path)
    }

    /// Replace expenses with those in `path`
    pub fn load_from(&mut self, path: &Path) -> TrackerResult<LoadSummary> {
        self.store.load(path)
    }

    /// Run the menu until the user exits or input ends
    pub fn run(&mut self) -> TrackerResult<()> {
        loop {
            self.prompter.say(&menu_text())?;

            let Some(line) = self.prompter.ask("Enter your choice: ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    self.prompter.say("Invalid choice!\n")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.prompter.say("Exiting... Goodbye!\n")?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> TrackerResult<Flow> {
        tracing::debug!(?choice, "Menu choice");

        match choice {
            MenuChoice::AddExpense => self.handle_add_expense(),
            MenuChoice::ViewExpenses => self.handle_view_expenses(),
            MenuChoice::TotalExpense => self.handle_total_expense(),
            MenuChoice::Savings => self.handle_savings(),
            MenuChoice::LoanRange => self.handle_loan_range(),
            MenuChoice::SetGoal => self.handle_set_goal(),
            MenuChoice::Save => self.handle_save(),
            MenuChoice::Load => self.handle_load(),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn handle_add_expense(&mut self) -> TrackerResult<Flow> {
        let Some(name) = self.prompter.ask_field("Enter Expense Name: ", "Name")? else {
            return Ok(Flow::Exit);
        };
        let Some(category) = self.prompter.ask_field("Enter Category: ", "Category")? else {
            return Ok(Flow::Exit);
        };
        let Some(amount) = self.prompter.ask_amount("Enter Amount: ", "Amount")? else {
            return Ok(Flow::Exit);
        };
        let Some(date) = self.prompter.ask_field("Enter Date (dd/mm/yyyy): ", "Date")? else {
            return Ok(Flow::Exit);
        };
        let date = if date.is_empty() { today() } else { date };

        let added = Expense::new(name, category, amount, date).and_then(|e| self.add_expense(e));
        match added {
            Ok(()) => self.prompter.say("Expense Added Successfully!\n")?,
            Err(e) => self.prompter.say(&format!("{}\n", e))?,
        }

        Ok(Flow::Continue)
    }

    fn handle_view_expenses(&mut self) -> TrackerResult<Flow> {
        let symbol = &self.settings.currency_symbol;
        let mut output = section("Expense Report");
        output.push_str(&format_deductions(&self.profile, symbol));
        output.push_str(&format_expense_table(self.store.list(), symbol));

        self.prompter.say(&output)?;
        Ok(Flow::Continue)
    }

    fn handle_total_expense(&mut self) -> TrackerResult<Flow> {
        let output = format_totals(
            self.store.total(),
            self.remaining_this_month(),
            &self.settings.currency_symbol,
        );

        self.prompter.say(&output)?;
        Ok(Flow::Continue)
    }

    fn handle_savings(&mut self) -> TrackerResult<Flow> {
        if !self.goal.is_set() && self.ask_goal()? == Flow::Exit {
            return Ok(Flow::Exit);
        }

        if let Some(report) = self.savings_report() {
            let output = format_savings_report(&report, &self.settings.currency_symbol);
            self.prompter.say(&output)?;
        }

        Ok(Flow::Continue)
    }

    fn handle_loan_range(&mut self) -> TrackerResult<Flow> {
        let output = format_loan_range(&self.loan_range(), &self.settings.currency_symbol);
        self.prompter.say(&output)?;
        Ok(Flow::Continue)
    }

    fn handle_set_goal(&mut self) -> TrackerResult<Flow> {
        if self.ask_goal()? == Flow::Exit {
            return Ok(Flow::Exit);
        }

        if let Some(goal) = self.goal.get() {
            let message = format!(
                "Minimum balance goal set to {}\n",
                goal.format_with_symbol(&self.settings.currency_symbol)
            );
            self.prompter.say(&message)?;
        }

        Ok(Flow::Continue)
    }

    fn handle_save(&mut self) -> TrackerResult<Flow> {
        let path = self.settings.expenses_file.clone();

        let message = match self.save_to(&path) {
            Ok(()) => format!("Saved {} expense(s) to {}\n", self.store.len(), path.display()),
            Err(e) => {
                tracing::error!(error = %e, "Save failed");
                format!("Could not save expenses: {}\n", e)
            }
        };

        self.prompter.say(&message)?;
        Ok(Flow::Continue)
    }

    fn handle_load(&mut self) -> TrackerResult<Flow> {
        let path = self.settings.expenses_file.clone();

        let message = match self.load_from(&path) {
            Ok(summary) if summary.skipped > 0 => format!(
                "Loaded {} expense(s) from {} (skipped {} malformed line(s))\n",
                summary.loaded,
                path.display(),
                summary.skipped
            ),
            Ok(summary) => format!(
                "Loaded {} expense(s) from {}\n",
                summary.loaded,
                path.display()
            ),
            Err(e) => {
                tracing::error!(error = %e, "Load failed");
                format!("Could not load expenses: {}\n", e)
            }
        };

        self.prompter.say(&message)?;
        Ok(Flow::Continue)
    }

    fn ask_goal(&mut self) -> TrackerResult<Flow> {
        let Some(goal) = self
            .prompter
            .ask_amount("Enter your minimum balance goal: ", "Minimum balance goal")?
        else {
            return Ok(Flow::Exit);
        };

        self.goal.set(goal)?;
        Ok(Flow::Continue)
    }
}
