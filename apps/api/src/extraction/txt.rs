use super::ExtractionError;

/// Decodes plain-text bytes as UTF-8, verbatim. No lossy fallback.
pub fn extract_txt(bytes: &[u8]) -> Result<String, ExtractionError> {
    Ok(std::str::from_utf8(bytes)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_simple_text() {
        let text = extract_txt(b"Hello, world!\nThis is a resume.").unwrap();
        assert_eq!(text, "Hello, world!\nThis is a resume.");
    }

    #[test]
    fn extract_preserves_whitespace() {
        let text = extract_txt(b"  padded \n\n").unwrap();
        assert_eq!(text, "  padded \n\n");
    }

    #[test]
    fn extract_utf8_text() {
        let content = "Zürich café — naïve résumé".as_bytes();
        assert_eq!(extract_txt(content).unwrap(), "Zürich café — naïve résumé");
    }

    #[test]
    fn extract_empty_text() {
        assert_eq!(extract_txt(b"").unwrap(), "");
    }

    #[test]
    fn extract_latin1_bytes_fails() {
        // "café" encoded as Latin-1
        let err = extract_txt(&[0x63, 0x61, 0x66, 0xe9]).unwrap_err();
        assert!(matches!(err, ExtractionError::Decode(_)));
    }
}
