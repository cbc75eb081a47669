//! Submission versioning engine.
//!
//! Implements [`SubmissionCommand`]: the first answer on an assignment fills
//! the live record in place; every later answer first archives a value copy
//! of the live record at its current version, bumps the version, then
//! overwrites. Afterwards the live version always equals the number of
//! archived snapshots for that id plus one.
//!
//! Calls for the same assignment are serialised through a per-id async lock
//! so two overlapping submissions can never read the same "current" state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use tracing::{error, info, warn};

use crate::domain::ports::{
    ArchiveRepository, ArchiveStoreError, EntityRepository, EntityStoreError, SubmissionCommand,
    SubmitAnswerRequest,
};
use crate::domain::{Assignment, EntityId, Error, Versioned};

/// What to do with answers submitted after an assignment's due date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DueDatePolicy {
    /// Record late answers like any other.
    #[default]
    AcceptLate,
    /// Reject answers whose submission time is after the due date.
    Enforce,
}

pub(crate) fn map_entity_error(error: EntityStoreError) -> Error {
    match error {
        EntityStoreError::Connection { message } => {
            Error::service_unavailable(format!("entity store unavailable: {message}"))
        }
        EntityStoreError::Query { message } => {
            Error::internal(format!("entity store error: {message}"))
        }
        EntityStoreError::Duplicate { key } => {
            Error::internal(format!("unexpected entity store conflict on {key}"))
        }
        EntityStoreError::UnknownAssignment { id } => assignment_not_found(id),
    }
}

pub(crate) fn map_archive_error(error: ArchiveStoreError) -> Error {
    match error {
        ArchiveStoreError::Connection { message } => {
            Error::service_unavailable(format!("archive store unavailable: {message}"))
        }
        ArchiveStoreError::Query { message } => {
            Error::internal(format!("archive store error: {message}"))
        }
    }
}

pub(crate) fn assignment_not_found(id: EntityId) -> Error {
    Error::not_found(format!("assignment {id} not found")).with_details(json!({
        "id": id,
        "code": "assignment_not_found",
    }))
}

/// Per-assignment async locks.
///
/// A slot lives in the table only while some task holds or awaits it.
#[derive(Debug, Default)]
struct SubmissionLocks {
    slots: Mutex<HashMap<EntityId, Arc<AsyncMutex<()>>>>,
}

impl SubmissionLocks {
    fn slots(&self) -> MutexGuard<'_, HashMap<EntityId, Arc<AsyncMutex<()>>>> {
        // The map only hands out lock handles, so a poisoned guard is safe
        // to reuse.
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn acquire(&self, id: EntityId) -> SubmissionPermit<'_> {
        let slot = Arc::clone(self.slots().entry(id).or_default());
        SubmissionPermit {
            locks: self,
            id,
            guard: Some(slot.lock_owned().await),
        }
    }

    fn release(&self, id: EntityId) {
        let mut slots = self.slots();
        // Waiters clone the slot under this same lock, so a count of one
        // means nobody else can still reach it.
        if slots.get(&id).is_some_and(|slot| Arc::strong_count(slot) == 1) {
            slots.remove(&id);
        }
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.slots().len()
    }
}

/// Exclusive hold on one assignment; frees its slot on drop.
struct SubmissionPermit<'a> {
    locks: &'a SubmissionLocks,
    id: EntityId,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for SubmissionPermit<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        self.locks.release(self.id);
    }
}

/// Versioning engine backed by an entity store and an archive store.
pub struct SubmissionService<E, A> {
    entities: Arc<E>,
    archive: Arc<A>,
    due_dates: DueDatePolicy,
    locks: SubmissionLocks,
}

impl<E, A> SubmissionService<E, A> {
    /// Create an engine that accepts late answers.
    pub fn new(entities: Arc<E>, archive: Arc<A>) -> Self {
        Self::with_policy(entities, archive, DueDatePolicy::default())
    }

    /// Create an engine with an explicit due-date policy.
    pub fn with_policy(entities: Arc<E>, archive: Arc<A>, due_dates: DueDatePolicy) -> Self {
        Self {
            entities,
            archive,
            due_dates,
            locks: SubmissionLocks::default(),
        }
    }
}

impl<E, A> SubmissionService<E, A>
where
    E: EntityRepository,
    A: ArchiveRepository,
{
    fn check_due_date(
        &self,
        assignment: &Assignment,
        request: &SubmitAnswerRequest,
    ) -> Result<(), Error> {
        if self.due_dates == DueDatePolicy::Enforce && assignment.is_late(request.submitted_at) {
            warn!(
                assignment_id = %request.assignment_id,
                submitted_at = %request.submitted_at,
                "late submission rejected"
            );
            return Err(Error::forbidden("submission window closed").with_details(json!({
                "id": request.assignment_id,
                "due": assignment.due(),
                "submitted": request.submitted_at,
                "code": "past_due",
            })));
        }
        Ok(())
    }
}

#[async_trait]
impl<E, A> SubmissionCommand for SubmissionService<E, A>
where
    E: EntityRepository,
    A: ArchiveRepository,
{
    async fn submit(&self, request: SubmitAnswerRequest) -> Result<Assignment, Error> {
        let id = request.assignment_id;
        let _guard = self.locks.acquire(id).await;

        let mut assignment = self
            .entities
            .find_assignment_by_id(id)
            .await
            .map_err(map_entity_error)?
            .ok_or_else(|| assignment_not_found(id))?;

        self.check_due_date(&assignment, &request)?;

        let archived = if assignment.is_submitted() {
            let snapshot = assignment.supersede();
            self.archive
                .append(&snapshot)
                .await
                .map_err(map_archive_error)?;
            true
        } else {
            false
        };

        assignment.record_answer(request.answer, request.submitted_at);
        if let Err(store_error) = self.entities.save_assignment(&assignment).await {
            if archived {
                error!(
                    assignment_id = %id,
                    archived_version = assignment.version().saturating_sub(1),
                    error = %store_error,
                    "live record not saved after archiving; archive holds an extra snapshot"
                );
            }
            return Err(map_entity_error(store_error));
        }

        info!(
            assignment_id = %id,
            version = assignment.version(),
            archived,
            "answer recorded"
        );
        Ok(assignment)
    }
}

#[cfg(test)]
#[path = "submission_service_tests.rs"]
mod tests;
