use std::panic;

use super::{DocumentFormat, ExtractionError};

/// Extracts the visible text of every page, in page order, concatenated with no separator.
///
/// Image-only PDFs have no text layer and yield an empty string.
pub fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    // pdf-extract panics on some malformed inputs instead of returning an error.
    let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
        .map_err(|_| ExtractionError::parse(DocumentFormat::Pdf, "parser aborted on malformed input"))?
        .map_err(|e| ExtractionError::parse(DocumentFormat::Pdf, e))?;

    tracing::debug!(pages = pages.len(), "Parsed PDF");

    Ok(pages.concat())
}
