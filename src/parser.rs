//! CSV parser for intern score sheets.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use crate::analyzers::Record;
use crate::error::{ReportError, Result};

pub const NAME_COLUMN: &str = "Name";
pub const GROUP_COLUMN: &str = "Department";
pub const SCORE_COLUMN: &str = "Score";

/// Positions of the required columns within the header row. A repeated
/// header name resolves to its last occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    name: usize,
    group: usize,
    score: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let find = |column: &'static str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == column)
                .map(|(i, _)| i)
                .last()
                .ok_or(ReportError::MissingColumn(column))
        };

        Ok(Self {
            name: find(NAME_COLUMN)?,
            group: find(GROUP_COLUMN)?,
            score: find(SCORE_COLUMN)?,
        })
    }
}

/// Opens `path` and parses every data row into a [`Record`].
///
/// # Errors
///
/// Returns [`ReportError::FileNotFound`] if `path` does not exist, plus any
/// error from [`parse_records`].
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ReportError::FileNotFound(path.to_path_buf()),
        _ => ReportError::Io(e),
    })?;
    parse_records(file)
}

/// Parses a header row followed by data rows.
///
/// The header must name `Name`, `Department` and `Score`; other columns are
/// ignored. Rows are returned in input order.
///
/// # Errors
///
/// * [`ReportError::MissingColumn`] before any data row is read.
/// * [`ReportError::MalformedScore`] with the 1-based data row number.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let columns = Columns::locate(rdr.headers()?)?;
    debug!(?columns, "Header columns located");

    let mut records = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = i + 1;
        let raw = result?;
        records.push(to_record(&raw, columns, row)?);
    }

    debug!(rows = records.len(), "Records parsed");
    Ok(records)
}

fn to_record(raw: &StringRecord, columns: Columns, row: usize) -> Result<Record> {
    let field = |idx: usize| raw.get(idx).ok_or(ReportError::MalformedRow { row });

    let score_text = field(columns.score)?;
    let score = score_text
        .trim()
        .parse::<i64>()
        .map_err(|_| ReportError::MalformedScore {
            row,
            value: score_text.to_string(),
        })?;

    Ok(Record {
        name: field(columns.name)?.to_string(),
        group: field(columns.group)?.to_string(),
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample_rows_in_order() {
        let input = "Name,Department,Score\nAlice,Eng,80\nBob,Eng,90\nCarol,Sales,70\n";
        let records = parse_records(input.as_bytes()).unwrap();

        assert_eq!(
            records,
            vec![
                Record::new("Alice", "Eng", 80),
                Record::new("Bob", "Eng", 90),
                Record::new("Carol", "Sales", 70),
            ]
        );
    }

    #[test]
    fn test_column_order_and_extra_columns() {
        let input = "Score,Mentor,Department,Name\n75,Zed,Ops,Dana\n";
        let records = parse_records(input.as_bytes()).unwrap();

        assert_eq!(records, vec![Record::new("Dana", "Ops", 75)]);
    }

    #[test]
    fn test_repeated_header_uses_last_column() {
        let input = "Name,Department,Score,Department,Score\nAlice,Eng,1,Sales,2\n";
        let records = parse_records(input.as_bytes()).unwrap();

        assert_eq!(records, vec![Record::new("Alice", "Sales", 2)]);
    }

    #[test]
    fn test_header_only_yields_no_records() {
        let records = parse_records("Name,Department,Score\n".as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_score_column() {
        let input = "Name,Department\nAlice,Eng\n";
        let err = parse_records(input.as_bytes()).unwrap_err();
        assert!(matches!(err, ReportError::MissingColumn("Score")));
    }

    #[test]
    fn test_header_names_are_case_sensitive() {
        let input = "name,Department,Score\nAlice,Eng,80\n";
        let err = parse_records(input.as_bytes()).unwrap_err();
        assert!(matches!(err, ReportError::MissingColumn("Name")));
    }

    #[test]
    fn test_malformed_score_reports_row() {
        let input = "Name,Department,Score\nAlice,Eng,80\nBob,Eng,ninety\n";
        let err = parse_records(input.as_bytes()).unwrap_err();

        match err {
            ReportError::MalformedScore { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "ninety");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_fractional_score_is_malformed() {
        let input = "Name,Department,Score\nAlice,Eng,80.5\n";
        let err = parse_records(input.as_bytes()).unwrap_err();
        assert!(matches!(err, ReportError::MalformedScore { row: 1, .. }));
    }

    #[test]
    fn test_score_whitespace_and_sign() {
        let input = "Name,Department,Score\nAlice,Eng, 80 \nBob,Eng,-5\n";
        let records = parse_records(input.as_bytes()).unwrap();
        assert_eq!(records[0].score, 80);
        assert_eq!(records[1].score, -5);
    }

    #[test]
    fn test_short_row_is_malformed() {
        let input = "Name,Department,Score\nAlice,Eng\n";
        let err = parse_records(input.as_bytes()).unwrap_err();
        assert!(matches!(err, ReportError::MalformedRow { row: 1 }));
    }

    #[test]
    fn test_group_text_is_kept_verbatim() {
        let input = "Name,Department,Score\nAlice,\" Eng \",80\n";
        let records = parse_records(input.as_bytes()).unwrap();
        assert_eq!(records[0].group, " Eng ");
    }

    #[test]
    fn test_read_records_missing_file() {
        let path = std::env::temp_dir().join("intern_report_does_not_exist.csv");
        let err = read_records(&path).unwrap_err();
        assert!(matches!(err, ReportError::FileNotFound(p) if p == path));
    }
}
