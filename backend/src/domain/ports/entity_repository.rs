//! Driven port for the entity store: users, homework and live assignments.

use async_trait::async_trait;

use crate::domain::{Assignment, AssignmentCriteria, EntityId, Homework, User};

use super::define_port_error;

define_port_error! {
    /// Errors raised by entity store adapters.
    pub enum EntityStoreError {
        /// The backing store could not be reached.
        Connection { message: String } => "entity store connection failed: {message}",
        /// A read or write failed while executing.
        Query { message: String } => "entity store query failed: {message}",
        /// An insert collided with an existing id or user name.
        Duplicate { key: String } => "entity store already holds {key}",
        /// An update named an assignment the store does not hold.
        UnknownAssignment { id: EntityId } => "assignment {id} is not stored",
    }
}

/// Storage for the authoritative users, homework and current assignments.
///
/// Implementations hold exactly one live record per assignment id. The
/// archive of superseded states lives behind
/// [`ArchiveRepository`](super::ArchiveRepository).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityRepository: Send + Sync {
    /// Case-insensitive exact match on the user's unique name.
    async fn find_user_by_name(&self, name: &str) -> Result<Option<User>, EntityStoreError>;

    /// Fetch the live assignment with `id`.
    async fn find_assignment_by_id(
        &self,
        id: EntityId,
    ) -> Result<Option<Assignment>, EntityStoreError>;

    /// List live assignments matching `criteria`.
    ///
    /// For [`AssignmentCriteria::ByUsername`] the result holds every
    /// assignment where the user is the student and, when the user is a
    /// teacher, every assignment they assigned that has been submitted at
    /// least once. Unknown users yield an empty list.
    async fn list_assignments(
        &self,
        criteria: &AssignmentCriteria,
    ) -> Result<Vec<Assignment>, EntityStoreError>;

    /// Replace the live record sharing `assignment`'s id.
    ///
    /// Fails with [`EntityStoreError::UnknownAssignment`] when no such record
    /// exists; this port never creates assignments implicitly.
    async fn save_assignment(&self, assignment: &Assignment) -> Result<(), EntityStoreError>;

    /// Register a user. Names must be unique ignoring case.
    async fn insert_user(&self, user: &User) -> Result<(), EntityStoreError>;

    /// Register homework.
    async fn insert_homework(&self, homework: &Homework) -> Result<(), EntityStoreError>;

    /// Register a new assignment.
    async fn insert_assignment(&self, assignment: &Assignment) -> Result<(), EntityStoreError>;
}
