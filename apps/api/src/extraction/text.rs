//! File-to-text conversion for uploaded resumes.
//!
//! PDF goes through `pdf-extract`; plain text passes through. DOCX is
//! rejected with a user-facing message (no in-process DOCX support; see
//! DESIGN.md). Scanned/image PDFs that yield almost no text are rejected
//! rather than silently producing an empty resume.

use tracing::info;

use crate::errors::AppError;

/// 10 MB upload ceiling, enforced before any parsing work.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Extracted text shorter than this is treated as a scanned/image PDF.
const MIN_EXTRACTED_CHARS: usize = 50;

const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Converts uploaded file bytes to plain text based on the declared MIME type.
pub fn extract_text(bytes: &[u8], mime_type: &str) -> Result<String, AppError> {
    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(format!(
            "File exceeds the {} MB upload limit",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }

    match mime_type {
        "application/pdf" => {
            let text = pdf_extract::extract_text_from_mem(bytes)
                .map_err(|e| AppError::Extraction(format!("PDF text extraction failed: {e}")))?;
            let text = text.trim().to_string();

            // Very little text usually means a scanned or image-based PDF.
            if text.len() < MIN_EXTRACTED_CHARS {
                return Err(AppError::Extraction(
                    "PDF yielded almost no readable text; it may be scanned or image-based"
                        .to_string(),
                ));
            }

            info!("PDF text extracted, length: {}", text.len());
            Ok(text)
        }
        "text/plain" => Ok(String::from_utf8_lossy(bytes).into_owned()),
        DOCX_MIME => Err(AppError::Validation(
            "DOCX is not supported; please convert the resume to PDF".to_string(),
        )),
        other => Err(AppError::Validation(format!(
            "Unsupported file type: {other}. Please upload a PDF or plain-text resume."
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let text = extract_text(b"Jane Doe\nCivil Engineer", "text/plain").unwrap();
        assert_eq!(text, "Jane Doe\nCivil Engineer");
    }

    #[test]
    fn test_empty_file_rejected() {
        let err = extract_text(b"", "text/plain").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_oversized_file_rejected() {
        let bytes = vec![0u8; MAX_UPLOAD_BYTES + 1];
        let err = extract_text(&bytes, "application/pdf").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_docx_rejected_with_guidance() {
        let err = extract_text(b"PK...", DOCX_MIME).unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("PDF")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_mime_rejected() {
        let err = extract_text(b"GIF89a", "image/gif").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_garbage_pdf_is_extraction_error() {
        let err = extract_text(b"not a pdf at all, definitely not", "application/pdf").unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}
