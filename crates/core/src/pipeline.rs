use csv::ReaderBuilder;

use crate::config::CleanConfig;
use crate::error::CleanError;
use crate::model::{CleanRow, RowOutcome};
use crate::normalize::{normalize_row, RowLayout};
use crate::report::CleanSummary;

/// Result of one cleaning run: kept rows in input order, plus counts.
#[derive(Debug)]
pub struct CleanRun {
    pub rows: Vec<CleanRow>,
    pub summary: CleanSummary,
}

/// Run the pipeline over CSV text: resolve the layout from the header row,
/// then one normalize pass in file order. Rows are never reordered, merged,
/// or duplicated.
pub fn clean_csv(csv_data: &str, config: &CleanConfig) -> Result<CleanRun, CleanError> {
    // flexible: spreadsheet exports routinely have ragged rows; short records
    // read missing fields as blank rather than failing the run.
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| CleanError::Csv(e.to_string()))?
        .clone();
    let layout = RowLayout::from_headers(&headers, &config.columns)?;

    let mut rows = Vec::new();
    let mut summary = CleanSummary::default();

    for record in reader.records() {
        let record = record.map_err(|e| CleanError::Csv(e.to_string()))?;
        summary.rows_read += 1;

        match normalize_row(&record, &layout) {
            RowOutcome::Clean(row) => {
                summary.rows_kept += 1;
                rows.push(row);
            }
            RowOutcome::Skip(reason) => summary.record_skip(reason),
        }
    }

    Ok(CleanRun { rows, summary })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_qualifying_rows_in_file_order() {
        let csv = "\
Date,VIN,Model,Description,Amount,Category,Investor,Notes
05.03.2021,A,,,100,,,
,,,,,,,
06.03.2021,B,,,200,,,
31.02.2021,C,,,300,,,
07.03.2021,D,,,\"1,400\",,,
";
        let run = clean_csv(csv, &CleanConfig::default()).unwrap();

        assert_eq!(run.summary.rows_read, 5);
        assert_eq!(run.summary.rows_kept, 3);
        assert_eq!(run.summary.rows_skipped, 2);
        assert_eq!(run.summary.skip_counts["blank_row"], 1);
        assert_eq!(run.summary.skip_counts["invalid_date"], 1);

        let dates: Vec<&str> = run.rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2021-03-05", "2021-03-06", "2021-03-07"]);
        assert_eq!(run.rows[2].amount, "1400");
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let csv = "When,How Much\n05.03.2021,100\n";
        let err = clean_csv(csv, &CleanConfig::default()).unwrap_err();
        assert!(matches!(err, CleanError::MissingColumn { .. }));
    }

    #[test]
    fn remapped_columns_resolve() {
        let config = CleanConfig::from_toml(
            r#"
[columns]
date = "Datum"
amount = "Betrag"
"#,
        )
        .unwrap();
        let csv = "Datum,Betrag,Notes\n05.03.2021,100,paid\n";
        let run = clean_csv(csv, &config).unwrap();
        assert_eq!(run.rows.len(), 1);
        assert_eq!(run.rows[0].date, "2021-03-05");
        assert_eq!(run.rows[0].notes.as_deref(), Some("paid"));
    }

    #[test]
    fn header_only_input_yields_no_rows() {
        let csv = "Date,Amount\n";
        let run = clean_csv(csv, &CleanConfig::default()).unwrap();
        assert!(run.rows.is_empty());
        assert_eq!(run.summary.rows_read, 0);
    }
}
