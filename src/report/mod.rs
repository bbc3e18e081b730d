//! Document description consumed by the rendering backend.
//!
//! A [`Document`] is an ordered list of content [`Block`]s. It carries no
//! layout or pagination; the renderer decides where each block lands.

mod sections;

pub use sections::{
    DETAIL_HEADING, NOTICE_COLOR, SUMMARY_HEADING, compose, detail_line, notice_text,
    summary_line,
};

/// RGB text color, 0-255 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Bold section title.
    Heading(String),
    /// Single left-aligned line of body text.
    Line(String),
    /// Vertical gap between sections.
    Spacer,
    /// Bold, colored, centered paragraph that may wrap over several lines.
    Emphasis { text: String, color: Color },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Repeated as the header of every page.
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Text of every [`Block::Line`], in document order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Line(text) => Some(text.as_str()),
            _ => None,
        })
    }
}
