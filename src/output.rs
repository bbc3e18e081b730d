//! Console and JSON presentation of parsed data and aggregates.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::analyzers::{Analysis, AnalysisSummary, Record};
use crate::error::Result;
use crate::report::summary_line;

/// Logs each parsed record, in input order.
pub fn print_dataset(records: &[Record]) {
    info!(rows = records.len(), "Data read");
    for record in records {
        info!(name = %record.name, department = %record.group, score = record.score, "Record");
    }
}

/// Logs the per-group summary lines exactly as they appear in the report.
pub fn print_analysis(analysis: &Analysis) {
    for (group, stats) in analysis.iter() {
        debug!("{}", summary_line(group, stats));
    }
}

/// Writes the analysis summary as pretty-printed JSON to `path`, replacing
/// any existing file.
pub fn write_summary_json(path: &Path, summary: &AnalysisSummary) -> Result<()> {
    debug!(path = %path.display(), "Writing JSON summary");
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writer.flush()?;
    Ok(())
}
