//! CLI Exit Code Registry
//!
//! Single source of truth for all CLI exit codes. Exit codes are part of the
//! shell contract: import scripts branch on them.
//!
//! | Range | Domain    | Description                              |
//! |-------|-----------|------------------------------------------|
//! | 0     | Universal | Success                                  |
//! | 1     | Universal | General error (unspecified)              |
//! | 2     | Universal | CLI usage error (bad args)               |
//! | 3-9   | clean     | Cleaning-specific codes                  |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// Usage error - bad arguments, missing required options.
/// (clap emits 2 itself for argument errors; kept here for parity.)
#[allow(dead_code)]
pub const EXIT_USAGE: u8 = 2;

/// Strict mode: the run succeeded but rows were skipped.
/// Output is still written; like `diff(1)`, nonzero means "not clean".
pub const EXIT_CLEAN_SKIPPED: u8 = 3;

/// Input or output file could not be read/written.
pub const EXIT_CLEAN_IO: u8 = 4;

/// Input CSV or column-mapping config failed to parse/validate.
pub const EXIT_CLEAN_PARSE: u8 = 5;
