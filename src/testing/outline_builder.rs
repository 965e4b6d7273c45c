use crate::domain::{AppError, Block, Document};
use crate::ports::DocumentBuilder;

/// Stub backend that flattens a document into a readable line-per-block outline.
///
/// `H{level} text`, `P text`, `- item`, `1. item`, `| a | b |`, and an empty line
/// for blank paragraphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineBuilder;

impl DocumentBuilder for OutlineBuilder {
    fn name(&self) -> &'static str {
        "outline"
    }

    fn build(&self, document: &Document) -> Result<Vec<u8>, AppError> {
        let mut out = String::new();
        for block in document.blocks() {
            match block {
                Block::Heading { level, text, .. } => out.push_str(&format!("H{level} {text}\n")),
                Block::Paragraph(paragraph) => out.push_str(&format!("P {}\n", paragraph.text())),
                Block::BulletList(items) => {
                    for item in items {
                        out.push_str(&format!("- {}\n", item.text()));
                    }
                }
                Block::NumberedList(items) => {
                    for (index, item) in items.iter().enumerate() {
                        out.push_str(&format!("{}. {}\n", index + 1, item.text()));
                    }
                }
                Block::Table(table) => {
                    for row in std::iter::once(&table.header).chain(table.rows.iter()) {
                        out.push_str(&format!("| {} |\n", row.join(" | ")));
                    }
                }
                Block::Blank => out.push('\n'),
            }
        }
        Ok(out.into_bytes())
    }
}
