//! `eport clean` — run the CSV → JSON pipeline; `eport validate` — check a
//! column-mapping config without running.

use std::path::{Path, PathBuf};

use expenseport_core::{clean_csv, CleanConfig, CleanSummary};

use crate::exit_codes::EXIT_CLEAN_SKIPPED;
use crate::io::{read_file_as_utf8, write_json_rows};
use crate::CliError;

pub fn cmd_clean(
    input: PathBuf,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
    strict: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let config = load_config(config_path.as_deref())?;

    let csv_data = read_file_as_utf8(&input)
        .map_err(|e| CliError::io(format!("cannot read {}: {e}", input.display())))?;

    let run = clean_csv(&csv_data, &config).map_err(|e| CliError::parse(e.to_string()))?;

    match output {
        Some(ref path) => {
            write_json_rows(path, &run.rows)
                .map_err(|e| CliError::io(format!("cannot write {}: {e}", path.display())))?;
        }
        None => {
            let json = serde_json::to_string_pretty(&run.rows)
                .map_err(|e| CliError::io(format!("JSON serialization error: {e}")))?;
            println!("{json}");
        }
    }

    if !quiet {
        eprintln!("{}", summary_line(&run.summary));
    }

    if strict && run.summary.rows_skipped > 0 {
        return Err(CliError {
            code: EXIT_CLEAN_SKIPPED,
            message: format!("{} row(s) skipped (strict mode)", run.summary.rows_skipped),
            hint: None,
        });
    }

    Ok(())
}

pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let text = std::fs::read_to_string(&config_path)
        .map_err(|e| CliError::io(format!("cannot read {}: {e}", config_path.display())))?;
    CleanConfig::from_toml(&text).map_err(|e| CliError::parse(e.to_string()))?;
    eprintln!("config OK: {}", config_path.display());
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<CleanConfig, CliError> {
    match path {
        None => Ok(CleanConfig::default()),
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| CliError::io(format!("cannot read {}: {e}", path.display())))?;
            CleanConfig::from_toml(&text).map_err(|e| CliError::parse(e.to_string()))
        }
    }
}

/// One line for stderr, e.g.
/// `cleaned 42 rows, skipped 3 (blank_row: 1, invalid_date: 2)`.
fn summary_line(summary: &CleanSummary) -> String {
    if summary.rows_skipped == 0 {
        return format!("cleaned {} rows, skipped 0", summary.rows_kept);
    }

    let reasons: Vec<String> = summary
        .sorted_skip_counts()
        .into_iter()
        .map(|(reason, count)| format!("{reason}: {count}"))
        .collect();

    format!(
        "cleaned {} rows, skipped {} ({})",
        summary.rows_kept,
        summary.rows_skipped,
        reasons.join(", ")
    )
}
