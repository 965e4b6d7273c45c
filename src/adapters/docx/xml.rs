//! WordprocessingML serialization of the document tree.

use crate::domain::{Alignment, Block, DefaultFont, Document, Paragraph, Run, Table};

const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Usable text width of a Letter page with 1" margins, in twentieths of a point.
const TEXT_WIDTH_TWIPS: usize = 9360;

/// Numbering instance shared by every bullet list.
pub(super) const BULLET_NUM_ID: usize = 1;

/// Highest heading level with a dedicated style.
pub(super) const MAX_HEADING_LEVEL: u8 = 4;

pub(super) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `word/document.xml` and the number of numbered lists it references.
pub(super) fn document_xml(document: &Document) -> (String, usize) {
    let mut body = String::new();
    let mut numbered_lists = 0;

    for block in document.blocks() {
        match block {
            Block::Heading { level, text, alignment } => {
                let style = format!("Heading{}", (*level).clamp(1, MAX_HEADING_LEVEL));
                body.push_str(&paragraph_xml(
                    &Paragraph { runs: vec![Run::plain(text.as_str())], alignment: *alignment },
                    Some(&style),
                    None,
                ));
            }
            Block::Paragraph(paragraph) => body.push_str(&paragraph_xml(paragraph, None, None)),
            Block::BulletList(items) => {
                for item in items {
                    body.push_str(&paragraph_xml(item, Some("ListBullet"), Some(BULLET_NUM_ID)));
                }
            }
            Block::NumberedList(items) => {
                numbered_lists += 1;
                let num_id = BULLET_NUM_ID + numbered_lists;
                for item in items {
                    body.push_str(&paragraph_xml(item, Some("ListNumber"), Some(num_id)));
                }
            }
            Block::Table(table) => body.push_str(&table_xml(table)),
            Block::Blank => body.push_str("<w:p/>"),
        }
    }

    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{NS_W}" xmlns:r="{NS_R}"><w:body>{body}<w:sectPr><w:pgSz w:w="12240" w:h="15840"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/></w:sectPr></w:body></w:document>"#
    );
    (xml, numbered_lists)
}

fn paragraph_xml(paragraph: &Paragraph, style: Option<&str>, num_id: Option<usize>) -> String {
    let mut ppr = String::new();
    if let Some(style) = style {
        ppr.push_str(&format!(r#"<w:pStyle w:val="{style}"/>"#));
    }
    if let Some(num_id) = num_id {
        ppr.push_str(&format!(r#"<w:numPr><w:ilvl w:val="0"/><w:numId w:val="{num_id}"/></w:numPr>"#));
    }
    if paragraph.alignment == Alignment::Center {
        ppr.push_str(r#"<w:jc w:val="center"/>"#);
    }

    let mut xml = String::from("<w:p>");
    if !ppr.is_empty() {
        xml.push_str(&format!("<w:pPr>{ppr}</w:pPr>"));
    }
    for run in &paragraph.runs {
        xml.push_str(&run_xml(run));
    }
    xml.push_str("</w:p>");
    xml
}

fn run_xml(run: &Run) -> String {
    let mut rpr = String::new();
    if let Some(font) = run.font {
        let font = escape(font);
        rpr.push_str(&format!(
            r#"<w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:cs="{font}"/>"#
        ));
    }
    if run.bold {
        rpr.push_str("<w:b/><w:bCs/>");
    }
    if let Some(size) = run.size {
        let half_points = u16::from(size) * 2;
        rpr.push_str(&format!(r#"<w:sz w:val="{half_points}"/><w:szCs w:val="{half_points}"/>"#));
    }

    let mut xml = String::from("<w:r>");
    if !rpr.is_empty() {
        xml.push_str(&format!("<w:rPr>{rpr}</w:rPr>"));
    }
    for (index, line) in run.text.split('\n').enumerate() {
        if index > 0 {
            xml.push_str("<w:br/>");
        }
        xml.push_str(&format!(r#"<w:t xml:space="preserve">{}</w:t>"#, escape(line)));
    }
    xml.push_str("</w:r>");
    xml
}

fn table_xml(table: &Table) -> String {
    let columns = table.columns().max(1);
    let width = TEXT_WIDTH_TWIPS / columns;

    let mut xml = String::from(
        r#"<w:tbl><w:tblPr><w:tblStyle w:val="TableGrid"/><w:tblW w:w="0" w:type="auto"/><w:tblLook w:val="04A0" w:firstRow="1" w:lastRow="0" w:firstColumn="1" w:lastColumn="0" w:noHBand="0" w:noVBand="1"/></w:tblPr><w:tblGrid>"#,
    );
    for _ in 0..columns {
        xml.push_str(&format!(r#"<w:gridCol w:w="{width}"/>"#));
    }
    xml.push_str("</w:tblGrid>");

    xml.push_str(&row_xml(&table.header, width, true));
    for row in &table.rows {
        xml.push_str(&row_xml(row, width, false));
    }
    xml.push_str("</w:tbl>");
    xml
}

fn row_xml(cells: &[String], width: usize, header: bool) -> String {
    let mut xml = String::from("<w:tr>");
    for cell in cells {
        let run = if header { Run::bold(cell.as_str()) } else { Run::plain(cell.as_str()) };
        xml.push_str(&format!(
            r#"<w:tc><w:tcPr><w:tcW w:w="{width}" w:type="dxa"/></w:tcPr><w:p>{}</w:p></w:tc>"#,
            run_xml(&run)
        ));
    }
    xml.push_str("</w:tr>");
    xml
}

/// `word/styles.xml` carrying the document default font.
pub(super) fn styles_xml(font: DefaultFont) -> String {
    let name = escape(font.name);
    let size = u16::from(font.size) * 2;

    let mut headings = String::new();
    for (level, points) in (1..=MAX_HEADING_LEVEL).zip([16u16, 13, 12, 11]) {
        let half_points = points * 2;
        let next_level = level - 1;
        headings.push_str(&format!(
            r#"<w:style w:type="paragraph" w:styleId="Heading{level}"><w:name w:val="heading {level}"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:uiPriority w:val="9"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="240" w:after="60"/><w:outlineLvl w:val="{next_level}"/></w:pPr><w:rPr><w:b/><w:bCs/><w:color w:val="2F5496"/><w:sz w:val="{half_points}"/><w:szCs w:val="{half_points}"/></w:rPr></w:style>"#
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="{NS_W}"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="{name}" w:hAnsi="{name}" w:eastAsia="{name}" w:cs="{name}"/><w:sz w:val="{size}"/><w:szCs w:val="{size}"/><w:lang w:val="en-US"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="160" w:line="259" w:lineRule="auto"/></w:pPr></w:pPrDefault></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style>{headings}<w:style w:type="paragraph" w:styleId="ListBullet"><w:name w:val="List Bullet"/><w:basedOn w:val="Normal"/><w:pPr><w:contextualSpacing/></w:pPr></w:style><w:style w:type="paragraph" w:styleId="ListNumber"><w:name w:val="List Number"/><w:basedOn w:val="Normal"/><w:pPr><w:contextualSpacing/></w:pPr></w:style><w:style w:type="table" w:default="1" w:styleId="TableNormal"><w:name w:val="Normal Table"/><w:tblPr><w:tblInd w:w="0" w:type="dxa"/><w:tblCellMar><w:top w:w="0" w:type="dxa"/><w:left w:w="108" w:type="dxa"/><w:bottom w:w="0" w:type="dxa"/><w:right w:w="108" w:type="dxa"/></w:tblCellMar></w:tblPr></w:style><w:style w:type="table" w:styleId="TableGrid"><w:name w:val="Table Grid"/><w:basedOn w:val="TableNormal"/><w:pPr><w:spacing w:after="0" w:line="240" w:lineRule="auto"/></w:pPr><w:tblPr><w:tblBorders><w:top w:val="single" w:sz="4" w:space="0" w:color="auto"/><w:left w:val="single" w:sz="4" w:space="0" w:color="auto"/><w:bottom w:val="single" w:sz="4" w:space="0" w:color="auto"/><w:right w:val="single" w:sz="4" w:space="0" w:color="auto"/><w:insideH w:val="single" w:sz="4" w:space="0" w:color="auto"/><w:insideV w:val="single" w:sz="4" w:space="0" w:color="auto"/></w:tblBorders></w:tblPr></w:style></w:styles>"#
    )
}

/// `word/numbering.xml`: one shared bullet instance plus one restarting
/// decimal instance per numbered list.
pub(super) fn numbering_xml(numbered_lists: usize) -> String {
    let mut nums = format!(
        r#"<w:num w:numId="{BULLET_NUM_ID}"><w:abstractNumId w:val="0"/></w:num>"#
    );
    for offset in 1..=numbered_lists {
        let num_id = BULLET_NUM_ID + offset;
        nums.push_str(&format!(
            r#"<w:num w:numId="{num_id}"><w:abstractNumId w:val="1"/><w:lvlOverride w:ilvl="0"><w:startOverride w:val="1"/></w:lvlOverride></w:num>"#
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="{NS_W}"><w:abstractNum w:abstractNumId="0"><w:multiLevelType w:val="singleLevel"/><w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="&#8226;"/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr></w:lvl></w:abstractNum><w:abstractNum w:abstractNumId="1"><w:multiLevelType w:val="singleLevel"/><w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="decimal"/><w:lvlText w:val="%1."/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr></w:lvl></w:abstractNum>{nums}</w:numbering>"#
    )
}
