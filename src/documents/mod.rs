//! Document text extraction
//!
//! Normalizes uploaded study notes into plain text:
//!
//! - **PDF**: text layer of every page, concatenated in page order
//! - **DOCX**: body paragraphs joined with `\n`
//! - anything else: empty text, no error
//!
//! Parsing happens entirely in memory; nothing touches the network or disk.

pub mod docx;
pub mod export;
pub mod pdf;

pub use export::{render_printable, EXPORT_FILE_NAME};

use crate::types::AppResult;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// Number of characters shown in the upload preview panel.
pub const PREVIEW_CHARS: usize = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Unsupported,
}

impl DocumentFormat {
    /// Detect the format from a file name extension (ASCII case-insensitive).
    pub fn from_file_name(name: &str) -> Self {
        let extension = match name.rsplit_once('.') {
            Some((_, ext)) => ext,
            None => return DocumentFormat::Unsupported,
        };

        if extension.eq_ignore_ascii_case("pdf") {
            DocumentFormat::Pdf
        } else if extension.eq_ignore_ascii_case("docx") {
            DocumentFormat::Docx
        } else {
            DocumentFormat::Unsupported
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "pdf"),
            DocumentFormat::Docx => write!(f, "docx"),
            DocumentFormat::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// A file as received from the client.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    file_name: String,
    content: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn format(&self) -> DocumentFormat {
        DocumentFormat::from_file_name(&self.file_name)
    }
}

/// Extract the plain text of an uploaded document.
///
/// Unsupported formats yield an empty string. Bytes that the PDF or DOCX
/// parser cannot read produce [`crate::types::AppError::Extraction`].
pub fn extract_text(document: &UploadedDocument) -> AppResult<String> {
    let format = document.format();
    debug!(
        file_name = %document.file_name(),
        format = %format,
        bytes = document.content().len(),
        "Extracting text"
    );

    let text = match format {
        DocumentFormat::Pdf => pdf::extract_pdf_text(document.content())?,
        DocumentFormat::Docx => docx::extract_docx_text(document.content())?,
        DocumentFormat::Unsupported => String::new(),
    };

    info!(
        file_name = %document.file_name(),
        format = %format,
        characters = text.chars().count(),
        "Text extracted"
    );

    Ok(text)
}

/// First `max_chars` characters of `text`.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
