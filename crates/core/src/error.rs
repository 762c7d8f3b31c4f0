use std::fmt;

#[derive(Debug)]
pub enum CleanError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty or duplicate column mapping).
    ConfigValidation(String),
    /// A required column is missing from the input header.
    MissingColumn { column: String },
    /// CSV read error.
    Csv(String),
}

impl fmt::Display for CleanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::MissingColumn { column } => {
                write!(f, "missing column '{column}' in input header")
            }
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
        }
    }
}

impl std::error::Error for CleanError {}
