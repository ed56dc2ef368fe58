//! Document-to-text conversion. PDF pages and DOCX paragraphs/table cells
//! come out as one newline-separated string in document order; everything
//! downstream works on that string alone.

use std::path::Path;

use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild, TableCellContent, TableChild,
    TableRowChild,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Text extraction failed: {0}")]
    Extraction(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Other,
}

impl DocumentFormat {
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map_or(Self::Other, Self::from_extension)
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode the document at `path` into plain text. Corrupt or unreadable
/// files propagate as errors; there is no partial-result recovery.
pub fn extract_text(path: &Path) -> ParseResult<String> {
    let format = DocumentFormat::from_path(path);
    if format == DocumentFormat::Other {
        return Err(ParseError::UnsupportedFormat(
            path.display().to_string(),
        ));
    }
    let data = std::fs::read(path)?;
    extract_text_bytes(&data, format)
}

pub fn extract_text_bytes(data: &[u8], format: DocumentFormat) -> ParseResult<String> {
    match format {
        DocumentFormat::Pdf => pdf_text(data),
        DocumentFormat::Docx => docx_text(data),
        DocumentFormat::Other => Err(ParseError::UnsupportedFormat("other".to_string())),
    }
}

fn pdf_text(data: &[u8]) -> ParseResult<String> {
    let text =
        pdf_extract::extract_text_from_mem(data).map_err(|e| ParseError::Extraction(e.to_string()))?;
    Ok(scrub(&text))
}

fn docx_text(data: &[u8]) -> ParseResult<String> {
    let docx = read_docx(data).map_err(|e| ParseError::Extraction(e.to_string()))?;

    // All paragraph text first, then all table-cell text, no matter where
    // the tables sit in the body. The line heuristics downstream (name
    // heading, education window) are position-sensitive, so this order is
    // part of the output contract.
    let mut blocks: Vec<String> = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(p) = child {
            push_paragraph(p, &mut blocks);
        }
    }
    for child in &docx.document.children {
        if let DocumentChild::Table(table) = child {
            for row in &table.rows {
                let TableChild::TableRow(row) = row;
                for cell in &row.cells {
                    let TableRowChild::TableCell(cell) = cell;
                    for content in &cell.children {
                        if let TableCellContent::Paragraph(p) = content {
                            push_paragraph(p, &mut blocks);
                        }
                    }
                }
            }
        }
    }

    Ok(blocks.join("\n"))
}

fn push_paragraph(paragraph: &Paragraph, blocks: &mut Vec<String>) {
    let text = paragraph_text(paragraph);
    if !text.trim().is_empty() {
        blocks.push(text);
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for node in &run.children {
                if let RunChild::Text(t) = node {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

/// Drop control characters but keep line structure; the extractors' line
/// heuristics depend on `\n` surviving.
fn scrub(text: &str) -> String {
    text.chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .collect()
}
