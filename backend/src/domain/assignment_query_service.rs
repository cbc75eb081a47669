//! Read-side service implementing [`AssignmentQuery`].

use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{ArchiveRepository, AssignmentQuery, EntityRepository};
use crate::domain::submission_service::{map_archive_error, map_entity_error};
use crate::domain::{ArchiveEntry, Assignment, AssignmentCriteria, EntityId, Error, User, Versioned};

/// Query service over the entity and archive stores.
#[derive(Clone)]
pub struct AssignmentQueryService<E, A> {
    entities: Arc<E>,
    archive: Arc<A>,
}

impl<E, A> AssignmentQueryService<E, A> {
    /// Create a new query service.
    pub fn new(entities: Arc<E>, archive: Arc<A>) -> Self {
        Self { entities, archive }
    }
}

#[async_trait]
impl<E, A> AssignmentQuery for AssignmentQueryService<E, A>
where
    E: EntityRepository,
    A: ArchiveRepository,
{
    async fn find_user(&self, username: &str) -> Result<Option<User>, Error> {
        self.entities
            .find_user_by_name(username)
            .await
            .map_err(map_entity_error)
    }

    async fn assignments_for_user(&self, username: &str) -> Result<Vec<Assignment>, Error> {
        let criteria = AssignmentCriteria::from_parts(None, Some(username.to_owned()))?;
        self.list_assignments(&criteria).await
    }

    async fn list_assignments(
        &self,
        criteria: &AssignmentCriteria,
    ) -> Result<Vec<Assignment>, Error> {
        self.entities
            .list_assignments(criteria)
            .await
            .map_err(map_entity_error)
    }

    async fn archive_history(&self, id: EntityId) -> Result<Vec<ArchiveEntry>, Error> {
        let mut entries = self
            .archive
            .find_by_assignment(id)
            .await
            .map_err(map_archive_error)?;
        entries.sort_by_key(|entry| Reverse(entry.version()));
        Ok(entries)
    }
}
