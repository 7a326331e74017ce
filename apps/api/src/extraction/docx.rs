use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use super::{DocumentFormat, ExtractionError};

const DOCUMENT_PART: &str = "word/document.xml";

const BODY: &[u8] = b"w:body";
const PARAGRAPH: &[u8] = b"w:p";
const RUN: &[u8] = b"w:r";
const TEXT: &[u8] = b"w:t";

/// Extracts body paragraphs of an Office Open XML word-processing document.
///
/// Only paragraphs that are direct children of `w:body` are visited, and within them only
/// their own runs, so tables, headers and text boxes are skipped. Each paragraph
/// contributes its run text followed by `\n`. The document part may inflate to at most
/// `max_part_bytes`.
pub fn extract_docx(bytes: &[u8], max_part_bytes: usize) -> Result<String, ExtractionError> {
    let xml = read_document_part(bytes, max_part_bytes)?;
    paragraphs_to_text(&xml)
}

fn read_document_part(bytes: &[u8], max_part_bytes: usize) -> Result<Vec<u8>, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::parse(DocumentFormat::Docx, e))?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractionError::parse(DocumentFormat::Docx, format!("{DOCUMENT_PART}: {e}")))?;

    // The size in the archive header is not trusted; stop one byte past the limit instead.
    let mut xml = Vec::new();
    (&mut part)
        .take(max_part_bytes as u64 + 1)
        .read_to_end(&mut xml)
        .map_err(|e| ExtractionError::parse(DocumentFormat::Docx, e))?;
    if xml.len() > max_part_bytes {
        return Err(ExtractionError::parse(
            DocumentFormat::Docx,
            format!("{DOCUMENT_PART} inflates past the {max_part_bytes} byte limit"),
        ));
    }
    Ok(xml)
}

fn paragraphs_to_text(xml: &[u8]) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    // Open element names, outermost first.
    let mut stack: Vec<Vec<u8>> = Vec::new();
    // Stack index of the open body-level paragraph.
    let mut body_paragraph: Option<usize> = None;
    let mut paragraph = String::new();
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.name().as_ref().to_vec();
                if name == PARAGRAPH && parent_is(&stack, BODY) {
                    body_paragraph = Some(stack.len());
                    paragraph.clear();
                }
                stack.push(name);
            }
            Ok(Event::Empty(e)) => {
                let name = e.name();
                let name = name.as_ref();
                if name == PARAGRAPH && parent_is(&stack, BODY) {
                    // <w:p/> is an empty paragraph
                    text.push('\n');
                } else if open_below(&stack, body_paragraph, &[RUN]) {
                    match name {
                        b"w:tab" => paragraph.push('\t'),
                        b"w:br" | b"w:cr" => paragraph.push('\n'),
                        _ => {}
                    }
                }
            }
            Ok(Event::Text(t)) => {
                if open_below(&stack, body_paragraph, &[RUN, TEXT]) {
                    let unescaped = t
                        .unescape()
                        .map_err(|e| ExtractionError::parse(DocumentFormat::Docx, e))?;
                    paragraph.push_str(&unescaped);
                }
            }
            Ok(Event::CData(t)) => {
                if open_below(&stack, body_paragraph, &[RUN, TEXT]) {
                    paragraph.push_str(&String::from_utf8_lossy(&t));
                }
            }
            Ok(Event::End(_)) => {
                stack.pop();
                if body_paragraph == Some(stack.len()) {
                    body_paragraph = None;
                    text.push_str(&paragraph);
                    text.push('\n');
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ExtractionError::parse(
                    DocumentFormat::Docx,
                    format!("{DOCUMENT_PART} at byte {}: {e}", reader.buffer_position()),
                ))
            }
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(ExtractionError::parse(
            DocumentFormat::Docx,
            format!("{DOCUMENT_PART} ended with unclosed elements"),
        ));
    }

    Ok(text)
}

fn parent_is(stack: &[Vec<u8>], name: &[u8]) -> bool {
    stack.last().map(|n| n.as_slice() == name).unwrap_or(false)
}

/// True when the open elements below the body paragraph are exactly `path`.
fn open_below(stack: &[Vec<u8>], paragraph: Option<usize>, path: &[&[u8]]) -> bool {
    match paragraph {
        Some(depth) => {
            stack.len() == depth + 1 + path.len()
                && stack[depth + 1..]
                    .iter()
                    .zip(path)
                    .all(|(open, expected)| open.as_slice() == *expected)
        }
        None => false,
    }
}
