//! Driven port for the append-only archive of superseded assignment states.

use async_trait::async_trait;

use crate::domain::{ArchiveEntry, EntityId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by archive store adapters.
    pub enum ArchiveStoreError {
        /// The backing store could not be reached.
        Connection { message: String } => "archive store connection failed: {message}",
        /// A read or write failed while executing.
        Query { message: String } => "archive store query failed: {message}",
    }
}

/// Write-once log of [`ArchiveEntry`] values.
///
/// Entries are never mutated or removed once appended. Adapters make no
/// promise about the order entries come back in; callers sort by version.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArchiveRepository: Send + Sync {
    /// Append a snapshot.
    async fn append(&self, entry: &ArchiveEntry) -> Result<(), ArchiveStoreError>;

    /// Every snapshot taken from assignment `id`, in unspecified order.
    async fn find_by_assignment(&self, id: EntityId)
    -> Result<Vec<ArchiveEntry>, ArchiveStoreError>;
}
