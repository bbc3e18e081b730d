use crate::analyzers::{Analysis, GroupStats, Record};
use crate::report::{Block, Color, Document};

pub const SUMMARY_HEADING: &str = "Department Summary:";
pub const DETAIL_HEADING: &str = "Intern Details:";
pub const NOTICE_COLOR: Color = Color::rgb(220, 50, 50);

pub fn summary_line(group: &str, stats: &GroupStats) -> String {
    format!(
        "{}: {} interns, Average Score = {:.2}",
        group, stats.count, stats.average
    )
}

pub fn detail_line(record: &Record) -> String {
    format!("{} - {} - Score: {}", record.name, record.group, record.score)
}

pub fn notice_text(completion_date: &str) -> String {
    format!(
        "Completion certificate will be issued on your internship end date: {}",
        completion_date
    )
}

/// Builds the three report sections: group summary, per-record details and
/// the certificate notice.
pub fn compose(
    title: &str,
    records: &[Record],
    analysis: &Analysis,
    completion_date: &str,
) -> Document {
    let mut doc = Document::new(title);

    doc.push(Block::Heading(SUMMARY_HEADING.to_string()));
    for (group, stats) in analysis.iter() {
        doc.push(Block::Line(summary_line(group, stats)));
    }
    doc.push(Block::Spacer);

    doc.push(Block::Heading(DETAIL_HEADING.to_string()));
    for record in records {
        doc.push(Block::Line(detail_line(record)));
    }
    doc.push(Block::Spacer);

    doc.push(Block::Emphasis {
        text: notice_text(completion_date),
        color: NOTICE_COLOR,
    });

    doc
}
