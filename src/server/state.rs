//! Application state for the AskMyDoc server

use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::extraction::PageContent;
use crate::types::{DocumentRecord, DocumentSummary};

/// A parsed upload held in memory
///
/// Nothing is persisted; a restart forgets every document. That matches
/// the prototype, where documents lived only in the UI session.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    /// Document record
    pub record: DocumentRecord,
    /// Per-page extracted text
    pub pages: Vec<PageContent>,
}

impl StoredDocument {
    /// Text of a page, if the page exists (1-indexed)
    pub fn page_text(&self, page_number: u32) -> Option<&str> {
        self.pages
            .iter()
            .find(|p| p.page_number == page_number)
            .map(|p| p.content.as_str())
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: AppConfig,
    /// In-memory registry of parsed uploads
    documents: DashMap<Uuid, StoredDocument>,
    /// Ready state
    ready: RwLock<bool>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                documents: DashMap::new(),
                ready: RwLock::new(true),
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Add a document to the registry
    pub fn add_document(&self, doc: StoredDocument) {
        self.inner.documents.insert(doc.record.id, doc);
    }

    /// Get a document by ID
    pub fn get_document(&self, id: &Uuid) -> Option<StoredDocument> {
        self.inner.documents.get(id).map(|d| d.clone())
    }

    /// Remove a document, returning its record
    pub fn remove_document(&self, id: &Uuid) -> Option<DocumentRecord> {
        self.inner.documents.remove(id).map(|(_, d)| d.record)
    }

    /// List all stored documents
    pub fn list_documents(&self) -> Vec<DocumentSummary> {
        self.inner
            .documents
            .iter()
            .map(|entry| DocumentSummary::from(&entry.value().record))
            .collect()
    }

    /// Number of stored documents
    pub fn document_count(&self) -> usize {
        self.inner.documents.len()
    }

    /// Check if the server is ready
    pub fn is_ready(&self) -> bool {
        *self.inner.ready.read()
    }

    /// Set ready state
    pub fn set_ready(&self, ready: bool) {
        *self.inner.ready.write() = ready;
    }
}
