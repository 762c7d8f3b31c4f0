use std::collections::HashMap;

use serde::Serialize;

use crate::model::SkipReason;

/// Counts for one cleaning run. Skips are tallied per reason so the tool can
/// say what it dropped; the JSON output itself is unaffected by any of this.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CleanSummary {
    pub rows_read: usize,
    pub rows_kept: usize,
    pub rows_skipped: usize,
    pub skip_counts: HashMap<String, usize>,
}

impl CleanSummary {
    pub fn record_skip(&mut self, reason: SkipReason) {
        self.rows_skipped += 1;
        *self.skip_counts.entry(reason.to_string()).or_insert(0) += 1;
    }

    /// Skip counts in stable (alphabetical) order, for display.
    pub fn sorted_skip_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = self
            .skip_counts
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        counts.sort();
        counts
    }
}
