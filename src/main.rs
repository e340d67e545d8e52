use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use ledger::cli::{parse_amount, Session};
use ledger::config::Settings;
use ledger::display::{format_loan_range, format_salary_breakdown};
use ledger::models::{FinancialProfile, Money};
use ledger::services::LoanTable;

#[derive(Parser)]
#[command(
    name = "salary-ledger",
    version,
    about = "Salary breakdown, expense log, savings check and loan range",
    long_about = "Computes tax, fixed expenses and disposable balance for an annual \
                  salary, then lets you log expenses, compare savings against a \
                  minimum balance goal and see an eligible home loan range."
)]
struct Cli {
    /// Annual salary (skips the salary prompt)
    #[arg(short, long, value_parser = parse_salary)]
    salary: Option<Money>,

    /// Expense file to save to and load from
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level for diagnostics written to stderr
    #[arg(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the salary breakdown and exit
    Profile {
        /// Annual salary
        #[arg(value_parser = parse_salary)]
        salary: Money,
    },

    /// Print the eligible loan range for a salary and exit
    Loan {
        /// Annual salary
        #[arg(value_parser = parse_salary)]
        salary: Money,
    },

    /// Show the effective settings
    Config,
}

fn parse_salary(s: &str) -> Result<Money, String> {
    parse_amount(s, "Salary").map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level);

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(file) = cli.file {
        settings.expenses_file = file;
    }

    match cli.command {
        Some(Commands::Profile { salary }) => {
            let profile = FinancialProfile::create(salary)?;
            print!("{}", format_salary_breakdown(&profile, &settings.currency_symbol));
        }
        Some(Commands::Loan { salary }) => {
            let profile = FinancialProfile::create(salary)?;
            let range = LoanTable::range_for(profile.monthly_balance());
            print!("{}", format_loan_range(&range, &settings.currency_symbol));
        }
        Some(Commands::Config) => {
            println!("Salary Ledger Configuration");
            println!("===========================");
            println!("Settings file: {}", display_path(cli.config.as_ref()));
            println!("Log level:     {}", cli.log_level);
            println!();
            println!("{}", settings.to_json()?);
        }
        None => {
            let stdin = io::stdin();
            let session = Session::start(stdin.lock(), io::stdout(), settings, cli.salary)?;
            if let Some(mut session) = session {
                session.run()?;
            }
        }
    }

    Ok(())
}

fn display_path(path: Option<&PathBuf>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none, using defaults)".to_string())
}

fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "ledger={},{}={}",
            level,
            env!("CARGO_CRATE_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
