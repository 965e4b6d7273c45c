//! Backend-neutral tree for structured (word-processor) documents.
//!
//! Renderers only ever build a [`Document`]; turning it into bytes is the job of
//! a [`DocumentBuilder`](crate::ports::DocumentBuilder) backend.

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// Monospace face used for formulas and code listings.
pub const MONOSPACE_FONT: &str = "Courier New";

/// A span of text sharing one set of character properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    /// Font override; `None` inherits the document default.
    pub font: Option<&'static str>,
    /// Size override in points.
    pub size: Option<u8>,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Run { text: text.into(), bold: false, font: None, size: None }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Run { bold: true, ..Run::plain(text) }
    }

    pub fn monospace(text: impl Into<String>, size: u8) -> Self {
        Run { font: Some(MONOSPACE_FONT), size: Some(size), ..Run::plain(text) }
    }
}

/// A paragraph made of runs. A `'\n'` inside a run is a line break, not a new paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub alignment: Alignment,
}

impl Paragraph {
    pub fn new(runs: Vec<Run>) -> Self {
        Paragraph { runs, alignment: Alignment::Left }
    }

    /// Bold `"<lead>: "` followed by plain `rest`, split at the first `": "`.
    ///
    /// Text without the separator becomes a single plain run.
    pub fn lead(text: &str) -> Self {
        match text.split_once(": ") {
            Some((lead, rest)) => {
                Paragraph::new(vec![Run::bold(format!("{lead}: ")), Run::plain(rest)])
            }
            None => Paragraph::from(text),
        }
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    /// Concatenated text of every run.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

impl From<&str> for Paragraph {
    fn from(text: &str) -> Self {
        Paragraph::new(vec![Run::plain(text)])
    }
}

impl From<String> for Paragraph {
    fn from(text: String) -> Self {
        Paragraph::new(vec![Run::plain(text)])
    }
}

impl From<Run> for Paragraph {
    fn from(run: Run) -> Self {
        Paragraph::new(vec![run])
    }
}

/// Grid table. The header row is always rendered bold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn columns(&self) -> usize {
        self.header.len()
    }

    /// Row count including the header row.
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, text: String, alignment: Alignment },
    Paragraph(Paragraph),
    BulletList(Vec<Paragraph>),
    /// Numbering restarts at 1 for every list.
    NumberedList(Vec<Paragraph>),
    Table(Table),
    /// An empty paragraph.
    Blank,
}

/// Document-wide character defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultFont {
    pub name: &'static str,
    pub size: u8,
}

impl Default for DefaultFont {
    fn default() -> Self {
        DefaultFont { name: "Calibri", size: 11 }
    }
}

/// An ordered sequence of blocks plus document defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub font: DefaultFont,
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    pub fn heading(&mut self, level: u8, text: impl Into<String>) -> &mut Self {
        self.push(Block::Heading { level, text: text.into(), alignment: Alignment::Left })
    }

    pub fn centered_heading(&mut self, level: u8, text: impl Into<String>) -> &mut Self {
        self.push(Block::Heading { level, text: text.into(), alignment: Alignment::Center })
    }

    pub fn paragraph(&mut self, paragraph: impl Into<Paragraph>) -> &mut Self {
        self.push(Block::Paragraph(paragraph.into()))
    }

    pub fn bullets<I, P>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Paragraph>,
    {
        self.push(Block::BulletList(items.into_iter().map(Into::into).collect()))
    }

    pub fn numbered<I, P>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Paragraph>,
    {
        self.push(Block::NumberedList(items.into_iter().map(Into::into).collect()))
    }

    /// Append a table. Every row has exactly as many cells as the header.
    pub fn table<const N: usize>(&mut self, header: [&str; N], rows: &[[&str; N]]) -> &mut Self {
        let table = Table {
            header: header.iter().map(|cell| cell.to_string()).collect(),
            rows: rows.iter().map(|row| row.iter().map(|cell| cell.to_string()).collect()).collect(),
        };
        self.push(Block::Table(table))
    }

    pub fn blank(&mut self) -> &mut Self {
        self.push(Block::Blank)
    }

    /// `(level, text)` of every heading in document order.
    pub fn headings(&self) -> impl Iterator<Item = (u8, &str)> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Heading { level, text, .. } => Some((*level, text.as_str())),
            _ => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }
}
