//! Data types used by the aggregation pipeline.

use serde::Serialize;
use indexmap::IndexMap;

/// A single data row read from the input CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub group: String,
    pub score: i64,
}

impl Record {
    pub fn new(name: impl Into<String>, group: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            score,
        }
    }
}

/// Count and mean score of one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GroupStats {
    pub count: usize,
    /// Sum of all scores seen so far.
    pub total: i64,
    pub average: f64,
}

impl GroupStats {
    /// Folds one more score into the group.
    pub fn record(&mut self, score: i64) {
        self.count += 1;
        self.total += score;
        self.average = self.total as f64 / self.count as f64;
    }
}

/// Group name to [`GroupStats`], iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    groups: IndexMap<String, GroupStats>,
}

impl Analysis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stats slot for `group`, inserting an empty one first if the
    /// group has not been seen yet.
    pub fn entry_or_insert(&mut self, group: &str) -> &mut GroupStats {
        if !self.groups.contains_key(group) {
            self.groups.insert(group.to_string(), GroupStats::default());
        }
        &mut self.groups[group]
    }

    pub fn get(&self, group: &str) -> Option<&GroupStats> {
        self.groups.get(group)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GroupStats)> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// One group row of the exported JSON summary.
#[derive(Debug, Serialize)]
pub struct GroupSummary {
    pub group: String,
    pub count: usize,
    pub average: f64,
}

/// Serializable snapshot of a run, written by `--summary-json`.
#[derive(Debug, Serialize)]
pub struct AnalysisSummary {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub record_count: usize,
    pub groups: Vec<GroupSummary>,
}

impl AnalysisSummary {
    pub fn new(records: &[Record], analysis: &Analysis) -> Self {
        Self {
            generated_at: chrono::Utc::now(),
            record_count: records.len(),
            groups: analysis
                .iter()
                .map(|(group, stats)| GroupSummary {
                    group: group.to_string(),
                    count: stats.count,
                    average: stats.average,
                })
                .collect(),
        }
    }
}
