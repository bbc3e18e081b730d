//! Pipeline orchestration: parse, aggregate, compose, render, open.

use std::path::PathBuf;

use tracing::info;

use crate::analyzers::{Analysis, AnalysisSummary, Record, analyze};
use crate::error::Result;
use crate::infra::{FileOpener, open_with_default_handler};
use crate::output::{print_analysis, print_dataset, write_summary_json};
use crate::parser::read_records;
use crate::render::write_pdf;
use crate::report::{Document, compose};

pub const DEFAULT_INPUT: &str = "data.csv";
pub const DEFAULT_OUTPUT: &str = "Internship_Report.pdf";
pub const DEFAULT_TITLE: &str = "Automated Internship Report - CodTech";
pub const DEFAULT_END_DATE: &str = "31st July 2025";

/// Settings for a single report run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub title: String,
    /// Inserted verbatim into the certificate notice.
    pub end_date: String,
    pub summary_json: Option<PathBuf>,
    /// Ask the OS to open the PDF once it is written.
    pub open: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            title: DEFAULT_TITLE.to_string(),
            end_date: DEFAULT_END_DATE.to_string(),
            summary_json: None,
            open: true,
        }
    }
}

/// What a successful run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub records: Vec<Record>,
    pub analysis: Analysis,
    pub document: Document,
    pub output: PathBuf,
}

/// Runs the whole pipeline for `config`.
///
/// Any parse, render or write failure aborts the run before later steps. The
/// final open request can fail without affecting the result.
#[tracing::instrument(skip_all, fields(input = %config.input.display(), output = %config.output.display()))]
pub fn run(config: &Config, opener: &dyn FileOpener) -> Result<RunOutcome> {
    info!("Reading and analyzing data...");
    let records = read_records(&config.input)?;
    print_dataset(&records);

    let analysis = analyze(&records);
    print_analysis(&analysis);

    info!("Generating PDF...");
    let document = compose(&config.title, &records, &analysis, &config.end_date);
    write_pdf(&document, &config.output)?;
    info!(path = %config.output.display(), "PDF report generated");

    if let Some(path) = &config.summary_json {
        write_summary_json(path, &AnalysisSummary::new(&records, &analysis))?;
        info!(path = %path.display(), "JSON summary written");
    }

    if config.open {
        open_with_default_handler(opener, &config.output);
    }

    Ok(RunOutcome {
        records,
        analysis,
        document,
        output: config.output.clone(),
    })
}
