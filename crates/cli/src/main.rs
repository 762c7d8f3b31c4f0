// expenseport CLI - one-shot cleaning of spreadsheet expense exports

mod clean;
mod exit_codes;
mod io;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{EXIT_CLEAN_IO, EXIT_CLEAN_PARSE, EXIT_SUCCESS};

#[derive(Parser)]
#[command(name = "eport")]
#[command(about = "Clean spreadsheet expense CSV exports into JSON")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean a CSV export and write the rows as a JSON array
    #[command(after_help = "\
Examples:
  eport clean expenses.csv -o data/expenses.json
  eport clean expenses.csv --config columns.toml --strict
  eport clean expenses.csv > expenses.json")]
    Clean {
        /// Input CSV file (header row required)
        input: PathBuf,

        /// Output JSON file (omit for stdout); parent dirs are created
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// TOML column-mapping config (defaults cover the standard export)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Exit nonzero if any rows were skipped
        #[arg(long)]
        strict: bool,

        /// Suppress the summary line on stderr
        #[arg(long)]
        quiet: bool,
    },

    /// Validate a column-mapping config without running
    #[command(after_help = "\
Examples:
  eport validate columns.toml")]
    Validate {
        /// Path to the .toml config file
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Clean {
            input,
            output,
            config,
            strict,
            quiet,
        } => clean::cmd_clean(input, output, config, strict, quiet),
        Commands::Validate { config } => clean::cmd_validate(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn io(msg: impl Into<String>) -> Self {
        Self { code: EXIT_CLEAN_IO, message: msg.into(), hint: None }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self { code: EXIT_CLEAN_PARSE, message: msg.into(), hint: None }
    }
}
