//! CLI entry point for the internship report generator.
//!
//! Reads a `Name,Department,Score` CSV, summarizes scores per department and
//! writes a paginated PDF report.

use anyhow::Result;
use clap::Parser;
use intern_report::driver::{
    Config, DEFAULT_END_DATE, DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_TITLE, run,
};
use intern_report::infra::SystemOpener;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "intern_report")]
#[command(about = "Generate a PDF internship report from a CSV score sheet", long_about = None)]
struct Cli {
    /// CSV file with Name, Department and Score columns
    #[arg(value_name = "FILE", env = "REPORT_INPUT", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// PDF file to write (overwritten if present)
    #[arg(short, long, env = "REPORT_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Internship end date printed in the certificate notice
    #[arg(short, long, env = "REPORT_END_DATE", default_value = DEFAULT_END_DATE)]
    end_date: String,

    /// Title repeated at the top of every page
    #[arg(short, long, env = "REPORT_TITLE", default_value = DEFAULT_TITLE)]
    title: String,

    /// Optional: also write the department summary as JSON
    #[arg(long, env = "REPORT_SUMMARY_JSON")]
    summary_json: Option<PathBuf>,

    /// Do not open the report with the default viewer afterwards
    #[arg(long, default_value_t = false)]
    no_open: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            input: cli.input,
            output: cli.output,
            title: cli.title,
            end_date: cli.end_date,
            summary_json: cli.summary_json,
            open: !cli.no_open,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/intern_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("intern_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let config = Config::from(Cli::parse());

    run(&config, &SystemOpener)?;

    Ok(())
}
