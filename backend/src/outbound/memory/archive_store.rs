//! In-memory `ArchiveRepository` implementation.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{ArchiveRepository, ArchiveStoreError};
use crate::domain::{ArchiveEntry, EntityId, Identified};

/// Append-only archive keyed by assignment id.
#[derive(Debug, Default)]
pub struct InMemoryArchiveStore {
    entries: RwLock<HashMap<EntityId, Vec<ArchiveEntry>>>,
}

fn poisoned<T>(_: PoisonError<T>) -> ArchiveStoreError {
    ArchiveStoreError::query("archive store lock poisoned")
}

impl InMemoryArchiveStore {
    /// Create an empty archive.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArchiveRepository for InMemoryArchiveStore {
    async fn append(&self, entry: &ArchiveEntry) -> Result<(), ArchiveStoreError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.entry(entry.id()).or_default().push(entry.clone());
        Ok(())
    }

    async fn find_by_assignment(
        &self,
        id: EntityId,
    ) -> Result<Vec<ArchiveEntry>, ArchiveStoreError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(&id).cloned().unwrap_or_default())
    }
}
