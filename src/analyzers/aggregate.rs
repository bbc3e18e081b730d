use crate::analyzers::types::{Analysis, Record};
use tracing::debug;

/// Groups `records` by their exact `group` string and computes the count and
/// mean score of each group.
///
/// Groups appear in the result in the order their first record appears in
/// the input.
pub fn analyze(records: &[Record]) -> Analysis {
    let mut analysis = Analysis::new();

    for record in records {
        analysis.entry_or_insert(&record.group).record(record.score);
    }

    for (group, stats) in analysis.iter() {
        debug!(group, count = stats.count, average = stats.average, "Group aggregated");
    }

    analysis
}
