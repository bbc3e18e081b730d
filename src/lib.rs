pub mod analyzers;
pub mod driver;
pub mod error;
pub mod infra;
pub mod output;
pub mod parser;
pub mod render;
pub mod report;

pub use error::{ReportError, Result};
