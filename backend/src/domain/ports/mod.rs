//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod archive_repository;
mod assignment_query;
mod entity_repository;
mod submission_command;

#[cfg(test)]
pub use archive_repository::MockArchiveRepository;
pub use archive_repository::{ArchiveRepository, ArchiveStoreError};
#[cfg(test)]
pub use assignment_query::MockAssignmentQuery;
pub use assignment_query::AssignmentQuery;
#[cfg(test)]
pub use entity_repository::MockEntityRepository;
pub use entity_repository::{EntityRepository, EntityStoreError};
#[cfg(test)]
pub use submission_command::MockSubmissionCommand;
pub use submission_command::{SubmissionCommand, SubmitAnswerRequest};
