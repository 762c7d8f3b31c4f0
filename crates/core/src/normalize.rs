//! Row normalization: the one piece of real logic in this tool.
//!
//! Dates arrive as `dd.mm.yyyy` (some locales export `dd,mm,yyyy`) and leave
//! as ISO `YYYY-MM-DD`. Amounts lose their thousands-separator commas but
//! stay strings. Blank optional fields become `None`.

use chrono::NaiveDate;
use csv::StringRecord;

use crate::config::ColumnMapping;
use crate::error::CleanError;
use crate::model::{CleanRow, RowOutcome, SkipReason};

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Column positions for one CSV file, resolved once from its header row.
#[derive(Debug, Clone)]
pub struct RowLayout {
    pub date: usize,
    pub amount: usize,
    pub vin: Option<usize>,
    pub model: Option<usize>,
    pub description: Option<usize>,
    pub category: Option<usize>,
    pub investor: Option<usize>,
    pub notes: Option<usize>,
}

impl RowLayout {
    /// Resolve the mapped headers against the actual header row.
    /// `date` and `amount` must exist; the rest resolve to `None` when absent.
    pub fn from_headers(
        headers: &StringRecord,
        columns: &ColumnMapping,
    ) -> Result<Self, CleanError> {
        let idx = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            idx(name).ok_or_else(|| CleanError::MissingColumn {
                column: name.into(),
            })
        };

        Ok(Self {
            date: require(&columns.date)?,
            amount: require(&columns.amount)?,
            vin: idx(&columns.vin),
            model: idx(&columns.model),
            description: idx(&columns.description),
            category: idx(&columns.category),
            investor: idx(&columns.investor),
            notes: idx(&columns.notes),
        })
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Normalize one raw record.
///
/// Pure over its inputs and never fails: every row-level problem is a
/// tagged `Skip`, so callers can count what was dropped and why.
pub fn normalize_row(record: &StringRecord, layout: &RowLayout) -> RowOutcome {
    // Spreadsheet exports are full of rows that are nothing but separators.
    if record.iter().all(|v| v.trim().is_empty()) {
        return RowOutcome::Skip(SkipReason::BlankRow);
    }

    let date = match normalize_date(field(record, Some(layout.date))) {
        Ok(date) => date,
        Err(reason) => return RowOutcome::Skip(reason),
    };

    let amount = match normalize_amount(field(record, Some(layout.amount))) {
        Ok(amount) => amount,
        Err(reason) => return RowOutcome::Skip(reason),
    };

    RowOutcome::Clean(CleanRow {
        date,
        vin: optional(field(record, layout.vin)),
        model: optional(field(record, layout.model)),
        description: optional(field(record, layout.description)),
        amount,
        category: optional(field(record, layout.category)),
        investor: optional(field(record, layout.investor)),
        notes: optional(field(record, layout.notes)),
    })
}

/// `dd.mm.yyyy` (or `dd,mm,yyyy`) → ISO `YYYY-MM-DD`.
///
/// Strict parse: wrong shape and impossible calendar dates (31.02.2021)
/// both reject the row.
pub fn normalize_date(raw: &str) -> Result<String, SkipReason> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SkipReason::MissingDate);
    }

    let dotted = trimmed.replace(',', ".");
    match NaiveDate::parse_from_str(&dotted, "%d.%m.%Y") {
        Ok(date) => Ok(date.format("%Y-%m-%d").to_string()),
        Err(_) => Err(SkipReason::InvalidDate),
    }
}

/// Strip thousands-separator commas; the value stays a string and is not
/// checked for being numeric. Deliberately locale-naive: every comma goes,
/// matching the upstream export contract.
pub fn normalize_amount(raw: &str) -> Result<String, SkipReason> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SkipReason::MissingAmount);
    }
    Ok(trimmed.replace(',', ""))
}

/// Trimmed value, or `None` when blank/absent.
fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Field by resolved position; absent columns and short records read as "".
fn field<'a>(record: &'a StringRecord, idx: Option<usize>) -> &'a str {
    idx.and_then(|i| record.get(i)).unwrap_or("")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColumnMapping;

    fn layout() -> RowLayout {
        let headers = StringRecord::from(vec![
            "Date",
            "VIN",
            "Model",
            "Description",
            "Amount",
            "Category",
            "Investor",
            "Notes",
        ]);
        RowLayout::from_headers(&headers, &ColumnMapping::default()).unwrap()
    }

    fn record(fields: [&str; 8]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    fn clean(outcome: RowOutcome) -> CleanRow {
        match outcome {
            RowOutcome::Clean(row) => row,
            RowOutcome::Skip(reason) => panic!("expected clean row, got skip: {reason}"),
        }
    }

    #[test]
    fn dotted_date_becomes_iso() {
        assert_eq!(normalize_date("05.03.2021").unwrap(), "2021-03-05");
    }

    #[test]
    fn comma_date_becomes_iso() {
        assert_eq!(normalize_date("05,03,2021").unwrap(), "2021-03-05");
    }

    #[test]
    fn unpadded_date_accepted() {
        assert_eq!(normalize_date("5.3.2021").unwrap(), "2021-03-05");
    }

    #[test]
    fn impossible_calendar_date_rejected() {
        assert_eq!(
            normalize_date("31.02.2021").unwrap_err(),
            SkipReason::InvalidDate
        );
    }

    #[test]
    fn iso_input_shape_rejected() {
        // Only d.m.Y is the export contract; anything else skips.
        assert_eq!(
            normalize_date("2021-03-05").unwrap_err(),
            SkipReason::InvalidDate
        );
    }

    #[test]
    fn blank_date_is_missing() {
        assert_eq!(normalize_date("   ").unwrap_err(), SkipReason::MissingDate);
    }

    #[test]
    fn amount_loses_thousands_commas() {
        assert_eq!(normalize_amount("1,234.56").unwrap(), "1234.56");
    }

    #[test]
    fn amount_is_not_validated_numerically() {
        // Boundary contract: the importer casts, we only strip commas.
        assert_eq!(normalize_amount("n/a").unwrap(), "n/a");
    }

    #[test]
    fn blank_amount_is_missing() {
        assert_eq!(
            normalize_amount("").unwrap_err(),
            SkipReason::MissingAmount
        );
    }

    #[test]
    fn full_row_normalizes() {
        let row = clean(normalize_row(
            &record([
                "05.03.2021",
                "WAUZZZ123",
                "A4",
                "brake pads",
                "1,234.56",
                "Parts",
                "",
                "  ",
            ]),
            &layout(),
        ));
        assert_eq!(row.date, "2021-03-05");
        assert_eq!(row.vin.as_deref(), Some("WAUZZZ123"));
        assert_eq!(row.amount, "1234.56");
        assert_eq!(row.investor, None);
        assert_eq!(row.notes, None);
    }

    #[test]
    fn whitespace_only_field_becomes_null() {
        let row = clean(normalize_row(
            &record(["05.03.2021", "  ", "", "", "10", "", "", ""]),
            &layout(),
        ));
        assert_eq!(row.vin, None);
    }

    #[test]
    fn optional_fields_are_trimmed() {
        let row = clean(normalize_row(
            &record(["05.03.2021", " WAU ", "", "", "10", "", "", ""]),
            &layout(),
        ));
        assert_eq!(row.vin.as_deref(), Some("WAU"));
    }

    #[test]
    fn blank_row_skipped() {
        let outcome = normalize_row(&record(["", "  ", "", "", "", "", "", ""]), &layout());
        assert_eq!(outcome, RowOutcome::Skip(SkipReason::BlankRow));
    }

    #[test]
    fn missing_date_skipped() {
        let outcome = normalize_row(
            &record(["", "WAUZZZ123", "", "", "10", "", "", ""]),
            &layout(),
        );
        assert_eq!(outcome, RowOutcome::Skip(SkipReason::MissingDate));
    }

    #[test]
    fn missing_amount_skipped() {
        let outcome = normalize_row(
            &record(["01.01.2021", "", "", "", "", "", "", ""]),
            &layout(),
        );
        assert_eq!(outcome, RowOutcome::Skip(SkipReason::MissingAmount));
    }

    #[test]
    fn short_record_reads_missing_fields_as_blank() {
        // Ragged exports: fewer fields than headers.
        let outcome = normalize_row(&StringRecord::from(vec!["05.03.2021"]), &layout());
        assert_eq!(outcome, RowOutcome::Skip(SkipReason::MissingAmount));
    }

    #[test]
    fn layout_requires_date_and_amount() {
        let headers = StringRecord::from(vec!["Date", "Notes"]);
        let err = RowLayout::from_headers(&headers, &ColumnMapping::default()).unwrap_err();
        match err {
            CleanError::MissingColumn { column } => assert_eq!(column, "Amount"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn layout_tolerates_absent_optional_columns() {
        let headers = StringRecord::from(vec!["Date", "Amount"]);
        let layout = RowLayout::from_headers(&headers, &ColumnMapping::default()).unwrap();
        assert_eq!(layout.vin, None);

        let row = clean(normalize_row(
            &StringRecord::from(vec!["05.03.2021", "10"]),
            &layout,
        ));
        assert_eq!(row.notes, None);
        assert_eq!(row.amount, "10");
    }
}
