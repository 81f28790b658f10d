//! Uploaded document -> plain text.
//!
//! PDFs are recognised by their signature, not the filename or declared
//! content type. Anything else must be UTF-8 text.

use bytes::Bytes;
use thiserror::Error;

const PDF_SIGNATURE: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Could not read PDF: {0}")]
    Unreadable(String),

    #[error("Unsupported file type: upload a PDF or a plain-text resume")]
    UnsupportedFormat,
}

pub fn is_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_SIGNATURE)
}

/// Extracts the text of an uploaded resume.
///
/// PDF decoding is CPU-bound, so it runs under `spawn_blocking`. A panic inside
/// the decoder surfaces as `Unreadable` rather than taking the worker down.
pub async fn extract_document_text(bytes: Bytes) -> Result<String, ExtractError> {
    if !is_pdf(&bytes) {
        return String::from_utf8(bytes.to_vec()).map_err(|_| ExtractError::UnsupportedFormat);
    }

    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| ExtractError::Unreadable(format!("extraction aborted: {e}")))?
        .map_err(|e| ExtractError::Unreadable(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_detection() {
        assert!(is_pdf(b"%PDF-1.7\n..."));
        assert!(!is_pdf(b"Jane Doe\nEngineer"));
        assert!(!is_pdf(b"%PD"));
    }

    #[tokio::test]
    async fn test_plain_text_passes_through() {
        let text = extract_document_text(Bytes::from_static(b"Jane Doe\nEngineer"))
            .await
            .unwrap();
        assert_eq!(text, "Jane Doe\nEngineer");
    }

    #[tokio::test]
    async fn test_binary_non_pdf_is_rejected() {
        let err = extract_document_text(Bytes::from_static(&[0xff, 0xd8, 0xff, 0xe0]))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat));
    }

    #[tokio::test]
    async fn test_corrupt_pdf_is_unreadable() {
        let err = extract_document_text(Bytes::from_static(b"%PDF-1.4\nnot really a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::Unreadable(_)));
    }
}
