//! `expenseport-core` — Expense CSV normalization engine.
//!
//! Pure engine crate: receives CSV text and a column mapping, returns cleaned
//! rows plus a run summary. No CLI or file IO dependencies.

pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod report;

pub use config::CleanConfig;
pub use error::CleanError;
pub use model::{CleanRow, RowOutcome, SkipReason};
pub use pipeline::{clean_csv, CleanRun};
pub use report::CleanSummary;
