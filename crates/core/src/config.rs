use serde::Deserialize;

use crate::error::CleanError;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Column-mapping config. Every key defaults to the header name the standard
/// spreadsheet export uses, so no config file is needed for the common case.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    pub columns: ColumnMapping,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            columns: ColumnMapping::default(),
        }
    }
}

/// Maps output fields to input header names. `date` and `amount` are
/// required in the input; the rest are treated as absent when their header
/// is not found.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub date: String,
    pub amount: String,
    pub vin: String,
    pub model: String,
    pub description: String,
    pub category: String,
    pub investor: String,
    pub notes: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            date: "Date".into(),
            amount: "Amount".into(),
            vin: "VIN".into(),
            model: "Model".into(),
            description: "Description".into(),
            category: "Category".into(),
            investor: "Investor".into(),
            notes: "Notes".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl CleanConfig {
    pub fn from_toml(input: &str) -> Result<Self, CleanError> {
        let config: CleanConfig =
            toml::from_str(input).map_err(|e| CleanError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CleanError> {
        let c = &self.columns;

        if c.date.trim().is_empty() {
            return Err(CleanError::ConfigValidation(
                "columns.date must not be empty".into(),
            ));
        }
        if c.amount.trim().is_empty() {
            return Err(CleanError::ConfigValidation(
                "columns.amount must not be empty".into(),
            ));
        }

        // No two output fields may read the same header. Empty names mean
        // "column not present" and are exempt.
        let headers = [
            &c.date,
            &c.amount,
            &c.vin,
            &c.model,
            &c.description,
            &c.category,
            &c.investor,
            &c.notes,
        ];
        for (i, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            if headers[..i].contains(header) {
                return Err(CleanError::ConfigValidation(format!(
                    "header '{header}' is mapped to more than one field"
                )));
            }
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
