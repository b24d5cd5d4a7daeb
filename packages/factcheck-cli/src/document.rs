//! Document text extraction for plain text and PDF files.

use std::path::Path;

use factcheck::{DocumentTextExtractor, FactCheckError, Result};

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Reads bytes as UTF-8, replacing invalid sequences.
pub struct PlainTextExtractor;

impl DocumentTextExtractor for PlainTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

/// Extracts the text layer of a PDF with `pdf-extract`.
pub struct PdfTextExtractor;

impl DocumentTextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            let message = e.to_string();
            if message.to_lowercase().contains("encrypted") {
                FactCheckError::Document("PDF is password protected".to_string())
            } else {
                FactCheckError::Document(format!("failed to read PDF: {}", message))
            }
        })
    }
}

pub fn is_pdf(path: &Path, bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_MAGIC)
        || path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Pick an extractor by magic bytes, then by file extension.
pub fn extractor_for(path: &Path, bytes: &[u8]) -> Box<dyn DocumentTextExtractor> {
    if is_pdf(path, bytes) {
        Box::new(PdfTextExtractor)
    } else {
        Box::new(PlainTextExtractor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_lossy() {
        let text = PlainTextExtractor.extract_text(b"caf\xc3\xa9 \xff").unwrap();
        assert_eq!(text, "café \u{fffd}");
    }

    #[test]
    fn test_pdf_detection() {
        assert!(is_pdf(Path::new("report.PDF"), b"anything"));
        assert!(is_pdf(Path::new("upload.bin"), b"%PDF-1.7\n..."));
        assert!(!is_pdf(Path::new("notes.txt"), b"The sky is blue."));
        assert!(!is_pdf(Path::new("no_extension"), b""));
    }

    #[test]
    fn test_text_file_read_as_text() {
        let bytes = b"Water boils at 100 C at sea level.";
        let text = extractor_for(Path::new("notes.md"), bytes)
            .extract_text(bytes)
            .unwrap();
        assert_eq!(text, "Water boils at 100 C at sea level.");
    }
}
