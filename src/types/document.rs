//! Document records for uploaded files

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supported file types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// PDF document
    Pdf,
    /// Microsoft Word document (.docx)
    Docx,
    /// Plain text file
    Txt,
    /// Unknown file type
    Unknown,
}

impl FileType {
    /// Detect file type from extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            "txt" | "text" => Self::Txt,
            _ => Self::Unknown,
        }
    }

    /// Check if this is a supported file type
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Get display name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "Word Document (.docx)",
            Self::Txt => "Text File",
            Self::Unknown => "Unknown",
        }
    }
}

/// A document that has been uploaded and parsed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Unique document ID
    pub id: Uuid,
    /// Original filename as uploaded by the user
    pub filename: String,
    /// File type
    pub file_type: FileType,
    /// Content hash of the extracted text
    pub content_hash: String,
    /// Total number of pages
    pub total_pages: u32,
    /// File size in bytes
    pub file_size: u64,
    /// Upload timestamp
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}

impl DocumentRecord {
    /// Create a new record for a parsed upload
    pub fn new(
        filename: String,
        file_type: FileType,
        content_hash: String,
        total_pages: u32,
        file_size: u64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename,
            file_type,
            content_hash,
            total_pages,
            file_size,
            uploaded_at: chrono::Utc::now(),
        }
    }
}

/// Summary of a document for listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: Uuid,
    pub filename: String,
    pub file_type: FileType,
    pub total_pages: u32,
    pub file_size: u64,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}

impl From<&DocumentRecord> for DocumentSummary {
    fn from(record: &DocumentRecord) -> Self {
        Self {
            id: record.id,
            filename: record.filename.clone(),
            file_type: record.file_type.clone(),
            total_pages: record.total_pages,
            file_size: record.file_size,
            uploaded_at: record.uploaded_at,
        }
    }
}
