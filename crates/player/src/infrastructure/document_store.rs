//! JSON-backed document store

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use pde_domain::{DisplayableEntity, DocumentUuid};

use crate::ports::outbound::DocumentResolver;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid document JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Documents held in memory, keyed by locator
///
/// Loaded from a JSON array of documents tagged with `documentName`
/// (`Item`, `ActiveEffect`, `JournalEntryPage`).
#[derive(Debug, Clone, Default)]
pub struct JsonDocumentStore {
    documents: HashMap<DocumentUuid, DisplayableEntity>,
}

impl JsonDocumentStore {
    pub fn new(documents: impl IntoIterator<Item = DisplayableEntity>) -> Self {
        Self {
            documents: documents
                .into_iter()
                .map(|doc| (doc.uuid().clone(), doc))
                .collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let documents: Vec<DisplayableEntity> = serde_json::from_str(json)?;
        Ok(Self::new(documents))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let store = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), count = store.len(), "Loaded documents");
        Ok(store)
    }

    pub fn insert(&mut self, document: DisplayableEntity) {
        self.documents.insert(document.uuid().clone(), document);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentResolver for JsonDocumentStore {
    async fn from_uuid(&self, uuid: &DocumentUuid) -> Option<DisplayableEntity> {
        let found = self.documents.get(uuid).cloned();
        if found.is_none() {
            tracing::debug!(uuid = %uuid, "Document not found");
        }
        found
    }
}
