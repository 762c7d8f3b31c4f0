use serde::Serialize;

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// A normalized expense record ready for JSON output.
///
/// `amount` stays a string on purpose: the downstream importer does the
/// numeric cast, along with the precision decisions that come with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanRow {
    pub date: String,
    pub vin: Option<String>,
    pub model: Option<String>,
    pub description: Option<String>,
    pub amount: String,
    pub category: Option<String>,
    pub investor: Option<String>,
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Row outcome
// ---------------------------------------------------------------------------

/// Outcome of normalizing a single raw record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Clean(CleanRow),
    Skip(SkipReason),
}

/// Why a row was excluded from output. A skip is intentional, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    BlankRow,
    MissingDate,
    InvalidDate,
    MissingAmount,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankRow => write!(f, "blank_row"),
            Self::MissingDate => write!(f, "missing_date"),
            Self::InvalidDate => write!(f, "invalid_date"),
            Self::MissingAmount => write!(f, "missing_amount"),
        }
    }
}
