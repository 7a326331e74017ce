//! Text extraction: turns an uploaded resume (PDF, DOCX, or plain text) into a single string.
//!
//! Extraction is a pure, single-shot transform from bytes to text. Each format lives in its
//! own submodule; `extract` dispatches on the `DocumentFormat` tag.

mod docx;
mod pdf;
mod txt;

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file format '{0}'. Please upload a PDF, DOCX, or TXT file.")]
    UnsupportedFormat(String),

    #[error("File is not valid UTF-8 text: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("Failed to parse {format} document: {message}")]
    Parse {
        format: DocumentFormat,
        message: String,
    },
}

impl ExtractionError {
    pub(crate) fn parse(format: DocumentFormat, message: impl fmt::Display) -> Self {
        ExtractionError::Parse {
            format,
            message: message.to_string(),
        }
    }
}

/// Format tag of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// Derives the format from a file name's extension (case-insensitive).
    pub fn from_file_name(file_name: &str) -> Result<Self, ExtractionError> {
        let ext = match file_name.rsplit_once('.') {
            Some((_, ext)) => ext,
            None => return Err(ExtractionError::UnsupportedFormat(file_name.to_string())),
        };
        ext.parse()
    }
}

impl FromStr for DocumentFormat {
    type Err = ExtractionError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "txt" => Ok(DocumentFormat::PlainText),
            other => Err(ExtractionError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DocumentFormat::Pdf => "PDF",
            DocumentFormat::Docx => "DOCX",
            DocumentFormat::PlainText => "plain-text",
        };
        f.write_str(label)
    }
}

/// An uploaded document: format tag plus raw content. Consumed once by `extract`.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub format: DocumentFormat,
    pub content: Bytes,
}

impl RawDocument {
    pub fn new(format: DocumentFormat, content: impl Into<Bytes>) -> Self {
        Self {
            format,
            content: content.into(),
        }
    }

    /// Builds a document from an upload, deriving the format from the file name.
    /// Fails with `UnsupportedFormat` before any bytes are inspected.
    pub fn from_upload(file_name: &str, content: impl Into<Bytes>) -> Result<Self, ExtractionError> {
        let format = DocumentFormat::from_file_name(file_name)?;
        Ok(Self::new(format, content))
    }
}

/// Extracts the textual content of a document.
///
/// - plain text is decoded as UTF-8 verbatim
/// - PDF page texts are concatenated in page order with no separator
/// - DOCX body paragraphs are concatenated in order, each followed by `\n`
///
/// A document without a text layer (e.g. a scanned PDF) yields an empty string, not an error.
/// `max_inflated_bytes` caps how far a compressed DOCX part may expand while it is read.
pub fn extract(doc: RawDocument, max_inflated_bytes: usize) -> Result<String, ExtractionError> {
    let text = match doc.format {
        DocumentFormat::PlainText => txt::extract_txt(&doc.content)?,
        DocumentFormat::Pdf => pdf::extract_pdf(&doc.content)?,
        DocumentFormat::Docx => docx::extract_docx(&doc.content, max_inflated_bytes)?,
    };

    tracing::debug!(
        format = %doc.format,
        bytes = doc.content.len(),
        chars = text.chars().count(),
        "Extracted document text"
    );

    Ok(text)
}
