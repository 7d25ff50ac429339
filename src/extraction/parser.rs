//! Multi-format file parser
//!
//! All actual parsing is delegated to external crates: `lopdf` and
//! `pdf-extract` for PDFs, `docx-rs` for Word documents. This module only
//! wires their output into per-page records.

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::types::FileType;

/// Parsed document with extracted text and metadata
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// File type
    pub file_type: FileType,
    /// Extracted text content, all pages concatenated in order
    pub content: String,
    /// Hex SHA-256 of the extracted text
    pub content_hash: String,
    /// Total pages in the document
    pub total_pages: u32,
    /// Page-level content
    pub pages: Vec<PageContent>,
}

/// Content from a single page
#[derive(Debug, Clone)]
pub struct PageContent {
    /// Page number (1-indexed)
    pub page_number: u32,
    /// Text content of the page
    pub content: String,
    /// Character offset in the full document text
    pub char_offset: usize,
}

/// Multi-format file parser
pub struct FileParser;

impl FileParser {
    /// Parse a file based on its extension
    pub fn parse(filename: &str, data: &[u8]) -> Result<ParsedDocument> {
        let extension = filename.rsplit('.').next().unwrap_or("").to_lowercase();
        let file_type = FileType::from_extension(&extension);

        if !file_type.is_supported() {
            return Err(Error::UnsupportedFileType(extension));
        }

        let parsed = match file_type {
            #[cfg(feature = "pdf")]
            FileType::Pdf => Self::parse_pdf(filename, data)?,
            #[cfg(not(feature = "pdf"))]
            FileType::Pdf => {
                return Err(Error::UnsupportedFileType(
                    "pdf (support disabled at build time)".to_string(),
                ))
            }
            #[cfg(feature = "docx")]
            FileType::Docx => Self::parse_docx(filename, data)?,
            #[cfg(not(feature = "docx"))]
            FileType::Docx => {
                return Err(Error::UnsupportedFileType(
                    "docx (support disabled at build time)".to_string(),
                ))
            }
            FileType::Txt => Self::parse_text(data),
            FileType::Unknown => return Err(Error::UnsupportedFileType(extension)),
        };

        if parsed.content.trim().is_empty() {
            return Err(Error::EmptyDocument(filename.to_string()));
        }

        Ok(parsed)
    }

    /// Parse a PDF by iterating its pages
    ///
    /// Pages are enumerated with `lopdf` and extracted one at a time so the
    /// result keeps page boundaries. If per-page extraction comes back
    /// empty, the whole document is run through `pdf-extract` instead (some
    /// font encodings defeat lopdf but not pdf-extract).
    #[cfg(feature = "pdf")]
    fn parse_pdf(filename: &str, data: &[u8]) -> Result<ParsedDocument> {
        let doc = lopdf::Document::load_mem(data)
            .map_err(|e| Error::file_parse(filename, format!("Failed to load PDF: {}", e)))?;

        let page_map = doc.get_pages();
        let total_pages = page_map.len() as u32;

        let mut page_numbers: Vec<u32> = page_map.keys().cloned().collect();
        page_numbers.sort_unstable();

        let mut content = String::new();
        let mut pages = Vec::with_capacity(page_numbers.len());

        for number in page_numbers {
            let text = match doc.extract_text(&[number]) {
                Ok(text) => normalize_text(&text),
                Err(e) => {
                    tracing::debug!("No text extracted from page {}: {}", number, e);
                    String::new()
                }
            };

            pages.push(PageContent {
                page_number: number,
                char_offset: content.len(),
                content: text.clone(),
            });

            if !text.is_empty() {
                content.push_str(&text);
                content.push('\n');
            }
        }

        // Per-page extraction produced nothing; fall back to whole-document
        // extraction and report the result as a single page.
        if content.trim().is_empty() {
            tracing::warn!("Per-page extraction empty for '{}', trying pdf-extract", filename);
            let fallback = pdf_extract::extract_text_from_mem(data)
                .map_err(|e| Error::file_parse(filename, e.to_string()))?;
            content = normalize_text(&fallback);
            pages = vec![PageContent {
                page_number: 1,
                content: content.clone(),
                char_offset: 0,
            }];
        }

        Ok(ParsedDocument {
            file_type: FileType::Pdf,
            content_hash: hash_content(&content),
            content,
            total_pages: total_pages.max(1),
            pages,
        })
    }

    /// Parse a DOCX document as a whole (no page boundaries in the format)
    #[cfg(feature = "docx")]
    fn parse_docx(filename: &str, data: &[u8]) -> Result<ParsedDocument> {
        let doc = docx_rs::read_docx(data)
            .map_err(|e| Error::file_parse(filename, e.to_string()))?;

        let mut content = String::new();

        for child in doc.document.children {
            if let docx_rs::DocumentChild::Paragraph(p) = child {
                for child in p.children {
                    if let docx_rs::ParagraphChild::Run(run) = child {
                        for child in run.children {
                            if let docx_rs::RunChild::Text(t) = child {
                                content.push_str(&t.text);
                            }
                        }
                    }
                }
                content.push('\n');
            }
        }

        let content = normalize_text(&content);

        Ok(ParsedDocument {
            file_type: FileType::Docx,
            content_hash: hash_content(&content),
            pages: vec![PageContent {
                page_number: 1,
                content: content.clone(),
                char_offset: 0,
            }],
            total_pages: 1,
            content,
        })
    }

    /// Plain text passthrough
    fn parse_text(data: &[u8]) -> ParsedDocument {
        let content = String::from_utf8_lossy(data).into_owned();
        let content = normalize_text(&content);

        ParsedDocument {
            file_type: FileType::Txt,
            content_hash: hash_content(&content),
            pages: vec![PageContent {
                page_number: 1,
                content: content.clone(),
                char_offset: 0,
            }],
            total_pages: 1,
            content,
        }
    }
}

/// Strip null bytes and trailing whitespace, drop empty lines
fn normalize_text(text: &str) -> String {
    text.replace('\0', "")
        .lines()
        .map(|l| l.trim_end())
        .filter(|l| !l.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Hex SHA-256 of the extracted text
fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
