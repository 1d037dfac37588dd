pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "caradvisor",
    about = "CarAdvisor operator CLI",
    long_about = "Inspect configuration, check readiness, dry-run segment selection, and run analyses.",
    after_help = "Examples:\n  caradvisor doctor --json\n  caradvisor segments --country USA --min 25000 --max 50000\n  caradvisor analyze --country Turkey --min 1000000 --max 2500000"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(
        about = "Inspect effective configuration values with source attribution and redaction"
    )]
    Config,
    #[command(about = "Validate config, the market catalog, and reasoning provider readiness")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Classify segments and show which would be dispatched, without any calls")]
    Segments(BudgetArgs),
    #[command(about = "Run a full analysis against the configured reasoning provider")]
    Analyze {
        #[command(flatten)]
        budget: BudgetArgs,
        #[arg(long, default_value = "", help = "Free-text client preferences")]
        preferences: String,
    },
}

#[derive(Debug, Args)]
struct BudgetArgs {
    #[arg(long, help = "Market name, e.g. USA or Turkey")]
    country: String,
    #[arg(long, help = "Minimum budget, digit grouping allowed")]
    min: String,
    #[arg(long, help = "Maximum budget, digit grouping allowed")]
    max: String,
    #[arg(long, help = "Currency code, defaults to the market's currency")]
    currency: Option<String>,
}

impl BudgetArgs {
    fn into_input(self, preferences: String) -> commands::BudgetInput {
        commands::BudgetInput {
            country: self.country,
            min_budget: self.min,
            max_budget: self.max,
            currency: self.currency,
            preferences,
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Config => commands::config::run(),
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
        Command::Segments(budget) => commands::segments::run(budget.into_input(String::new())),
        Command::Analyze { budget, preferences } => {
            commands::analyze::run(budget.into_input(preferences))
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
