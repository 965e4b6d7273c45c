//! Office Open XML container assembly.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::domain::{AppError, Document};

use super::xml;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/><Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/></Relationships>"#;

/// Part names of every package, in write order.
pub(super) const PART_NAMES: [&str; 6] = [
    "[Content_Types].xml",
    "_rels/.rels",
    "word/document.xml",
    "word/styles.xml",
    "word/numbering.xml",
    "word/_rels/document.xml.rels",
];

/// Write the package. Entry timestamps are fixed, so equal documents give equal bytes.
pub(super) fn write_package(document: &Document) -> Result<Vec<u8>, AppError> {
    let (document_xml, numbered_lists) = xml::document_xml(document);
    let styles_xml = xml::styles_xml(document.font);
    let numbering_xml = xml::numbering_xml(numbered_lists);

    let parts: [(&str, &str); 6] = [
        (PART_NAMES[0], CONTENT_TYPES),
        (PART_NAMES[1], PACKAGE_RELS),
        (PART_NAMES[2], &document_xml),
        (PART_NAMES[3], &styles_xml),
        (PART_NAMES[4], &numbering_xml),
        (PART_NAMES[5], DOCUMENT_RELS),
    ];

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, body) in parts {
        zip.start_file(name, options)
            .map_err(|e| AppError::Package(format!("Failed to start part '{}': {}", name, e)))?;
        zip.write_all(body.as_bytes())?;
    }

    let cursor = zip
        .finish()
        .map_err(|e| AppError::Package(format!("Failed to finish container: {}", e)))?;
    Ok(cursor.into_inner())
}
