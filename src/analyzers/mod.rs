//! Score aggregation.
//!
//! Records are grouped by their department string and reduced to a count and
//! mean score per group, preserving the order in which groups first appear.

pub mod aggregate;
pub mod types;

pub use aggregate::analyze;
pub use types::{Analysis, AnalysisSummary, GroupStats, Record};
