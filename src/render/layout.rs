//! Flows a [`Document`] onto fixed-size A4 pages.
//!
//! Coordinates are millimetres. `y_mm` on a placed [`TextRun`] is the text
//! baseline measured from the bottom edge, which is what PDF expects.

use crate::render::metrics::text_width_mm;
use crate::report::{Block, Color, Document};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 10.0;
pub const CONTENT_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
pub const LINE_HEIGHT_MM: f32 = 10.0;
/// Content never extends below this distance from the bottom edge.
pub const BREAK_MARGIN_MM: f32 = 20.0;
/// Footer cell top, measured from the bottom edge.
pub const FOOTER_OFFSET_MM: f32 = 15.0;
/// Gap left after the emphasized paragraph.
const EMPHASIS_GAP_MM: f32 = 5.0;
/// Horizontal padding inside a text cell.
const CELL_PADDING_MM: f32 = 1.0;

pub const TITLE_SIZE_PT: f32 = 16.0;
pub const BODY_SIZE_PT: f32 = 12.0;
pub const FOOTER_SIZE_PT: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x_mm: f32,
    pub y_mm: f32,
    pub size_pt: f32,
    pub style: FontStyle,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based.
    pub number: usize,
    pub runs: Vec<TextRun>,
}

impl Page {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.runs.iter().map(|r| r.text.as_str())
    }
}

/// Baseline (from the bottom edge) of text vertically centred in a cell whose
/// top edge is `top_mm` below the top of the page.
fn baseline(top_mm: f32, cell_height_mm: f32, size_pt: f32) -> f32 {
    let cap_height_mm = size_pt * 0.7 * 25.4 / 72.0;
    PAGE_HEIGHT_MM - (top_mm + cell_height_mm / 2.0 + cap_height_mm / 2.0)
}

fn centered_x(text: &str, size_pt: f32, style: FontStyle) -> f32 {
    MARGIN_MM + (CONTENT_WIDTH_MM - text_width_mm(text, size_pt, style)) / 2.0
}

struct Flow<'a> {
    title: &'a str,
    pages: Vec<Page>,
    /// Distance of the next cell's top edge from the top of the page.
    top_mm: f32,
}

impl<'a> Flow<'a> {
    fn new(title: &'a str) -> Self {
        let mut flow = Self {
            title,
            pages: Vec::new(),
            top_mm: 0.0,
        };
        flow.new_page();
        flow
    }

    fn new_page(&mut self) {
        let number = self.pages.len() + 1;
        let footer = format!("Page {number}");
        let footer_top = PAGE_HEIGHT_MM - FOOTER_OFFSET_MM;

        let runs = vec![
            TextRun {
                x_mm: centered_x(self.title, TITLE_SIZE_PT, FontStyle::Bold),
                y_mm: baseline(MARGIN_MM, LINE_HEIGHT_MM, TITLE_SIZE_PT),
                text: self.title.to_string(),
                size_pt: TITLE_SIZE_PT,
                style: FontStyle::Bold,
                color: Color::BLACK,
            },
            TextRun {
                x_mm: centered_x(&footer, FOOTER_SIZE_PT, FontStyle::Italic),
                y_mm: baseline(footer_top, LINE_HEIGHT_MM, FOOTER_SIZE_PT),
                text: footer,
                size_pt: FOOTER_SIZE_PT,
                style: FontStyle::Italic,
                color: Color::BLACK,
            },
        ];

        self.pages.push(Page { number, runs });
        // title cell followed by a blank line
        self.top_mm = MARGIN_MM + 2.0 * LINE_HEIGHT_MM;
    }

    fn place(&mut self, text: String, x_mm: f32, style: FontStyle, color: Color) {
        if self.top_mm + LINE_HEIGHT_MM > PAGE_HEIGHT_MM - BREAK_MARGIN_MM {
            self.new_page();
        }
        let run = TextRun {
            text,
            x_mm,
            y_mm: baseline(self.top_mm, LINE_HEIGHT_MM, BODY_SIZE_PT),
            size_pt: BODY_SIZE_PT,
            style,
            color,
        };
        if let Some(page) = self.pages.last_mut() {
            page.runs.push(run);
        }
        self.top_mm += LINE_HEIGHT_MM;
    }

    fn block(&mut self, block: &Block) {
        let left = MARGIN_MM + CELL_PADDING_MM;
        match block {
            Block::Heading(text) => self.place(text.clone(), left, FontStyle::Bold, Color::BLACK),
            Block::Line(text) => self.place(text.clone(), left, FontStyle::Regular, Color::BLACK),
            Block::Spacer => self.top_mm += LINE_HEIGHT_MM,
            Block::Emphasis { text, color } => {
                let max_width = CONTENT_WIDTH_MM - 2.0 * CELL_PADDING_MM;
                for line in wrap(text, max_width, BODY_SIZE_PT, FontStyle::Bold) {
                    let x = centered_x(&line, BODY_SIZE_PT, FontStyle::Bold);
                    self.place(line, x, FontStyle::Bold, *color);
                }
                self.top_mm += EMPHASIS_GAP_MM;
            }
        }
    }
}

/// Greedy word wrap. A single word wider than `max_width_mm` gets a line of
/// its own rather than being split.
pub fn wrap(text: &str, max_width_mm: f32, size_pt: f32, style: FontStyle) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if text_width_mm(&candidate, size_pt, style) <= max_width_mm {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Lays out `document`, returning at least one page. Every page carries the
/// title header and a `Page n` footer.
pub fn layout(document: &Document) -> Vec<Page> {
    let mut flow = Flow::new(&document.title);
    for block in &document.blocks {
        flow.block(block);
    }
    flow.pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_lines(n: usize) -> Document {
        let mut doc = Document::new("Report");
        for i in 0..n {
            doc.push(Block::Line(format!("line {i}")));
        }
        doc
    }

    #[test]
    fn test_empty_document_has_one_page() {
        let pages = layout(&Document::new("Report"));

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].number, 1);
        assert_eq!(pages[0].texts().collect::<Vec<_>>(), vec!["Report", "Page 1"]);
    }

    #[test]
    fn test_lines_break_onto_new_pages() {
        // 297 - 20 (break margin) - 30 (header) leaves room for 24 lines
        let pages = layout(&doc_with_lines(30));

        assert_eq!(pages.len(), 2);
        // header + footer + body lines
        assert_eq!(pages[0].runs.len(), 2 + 24);
        assert_eq!(pages[1].runs.len(), 2 + 6);
    }

    #[test]
    fn test_every_page_has_header_and_numbered_footer() {
        let pages = layout(&doc_with_lines(80));

        assert!(pages.len() > 2);
        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.number, i + 1);
            let texts: Vec<_> = page.texts().collect();
            assert_eq!(texts[0], "Report");
            assert_eq!(texts[1], format!("Page {}", i + 1));
        }
    }

    #[test]
    fn test_body_stays_above_break_margin() {
        for page in layout(&doc_with_lines(60)) {
            for run in page.runs.iter().skip(2) {
                assert!(run.y_mm > BREAK_MARGIN_MM);
                assert!(run.y_mm < PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM);
            }
        }
    }

    #[test]
    fn test_line_order_is_preserved_across_pages() {
        let texts: Vec<String> = layout(&doc_with_lines(40))
            .iter()
            .flat_map(|p| p.runs.iter().skip(2).map(|r| r.text.clone()))
            .collect();
        let expected: Vec<String> = (0..40).map(|i| format!("line {i}")).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn test_emphasis_is_wrapped_centered_and_colored() {
        let red = Color::rgb(220, 50, 50);
        let mut doc = Document::new("Report");
        doc.push(Block::Emphasis {
            text: "word ".repeat(60),
            color: red,
        });

        let pages = layout(&doc);
        let runs: Vec<_> = pages[0].runs.iter().skip(2).collect();

        assert!(runs.len() > 1);
        for run in runs {
            assert_eq!(run.color, red);
            assert_eq!(run.style, FontStyle::Bold);
            let width = text_width_mm(&run.text, BODY_SIZE_PT, FontStyle::Bold);
            assert!(width <= CONTENT_WIDTH_MM);
            let right_gap = PAGE_WIDTH_MM - MARGIN_MM - (run.x_mm + width);
            assert!((right_gap - (run.x_mm - MARGIN_MM)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_wrap_keeps_all_words() {
        let text = "Completion certificate will be issued on your internship end date: 31st July 2025";
        let lines = wrap(text, 60.0, BODY_SIZE_PT, FontStyle::Bold);

        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_long_word_gets_own_line() {
        let long = "x".repeat(200);
        let lines = wrap(&format!("a {long} b"), 50.0, BODY_SIZE_PT, FontStyle::Regular);
        assert_eq!(lines, vec!["a".to_string(), long, "b".to_string()]);
    }

    #[test]
    fn test_spacer_advances_without_text() {
        let mut doc = Document::new("Report");
        doc.push(Block::Line("a".into()));
        doc.push(Block::Spacer);
        doc.push(Block::Line("b".into()));

        let pages = layout(&doc);
        let a = &pages[0].runs[2];
        let b = &pages[0].runs[3];
        assert!((a.y_mm - b.y_mm - 2.0 * LINE_HEIGHT_MM).abs() < 1e-3);
    }
}
