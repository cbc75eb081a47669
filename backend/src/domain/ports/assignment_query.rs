//! Driving port for read-side queries.
//!
//! Inbound adapters use this port to look up users, list the assignments a
//! user may see, and read an assignment's submission history without touching
//! the stores directly.

use async_trait::async_trait;

use crate::domain::{ArchiveEntry, Assignment, AssignmentCriteria, EntityId, Error, User};

/// Use-case port for reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssignmentQuery: Send + Sync {
    /// Look a user up by name, ignoring case.
    async fn find_user(&self, username: &str) -> Result<Option<User>, Error>;

    /// Assignments visible to `username`.
    ///
    /// Students see all of their own assignments; teachers additionally see
    /// submitted work they assigned.
    async fn assignments_for_user(&self, username: &str) -> Result<Vec<Assignment>, Error>;

    /// Live assignments selected by `criteria`.
    async fn list_assignments(
        &self,
        criteria: &AssignmentCriteria,
    ) -> Result<Vec<Assignment>, Error>;

    /// Superseded states of assignment `id`, highest version first.
    async fn archive_history(&self, id: EntityId) -> Result<Vec<ArchiveEntry>, Error>;
}
