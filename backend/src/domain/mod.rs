//! Domain primitives, aggregates and services.
//!
//! Purpose: define the strongly typed entities of the homework service and
//! the use-case services that drive them. Transport and storage concerns live
//! behind the traits in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic error payload.
//! - EntityId / IdGenerator: identifiers and their minting.
//! - User, Homework: immutable reference data.
//! - Assignment / ArchiveEntry: the versioned record and its snapshots.
//! - SubmissionService: the versioning engine.
//! - AssignmentQueryService: read-side composition over both stores.

pub mod assignment;
pub mod assignment_query_service;
pub mod criteria;
pub mod error;
pub mod example_data;
pub mod homework;
pub mod identity;
pub mod ports;
pub mod submission_service;
pub mod trace_id;
pub mod user;

pub use self::assignment::{
    ArchiveEntry, Assignment, AssignmentBuilder, AssignmentState, INITIAL_VERSION, Versioned,
};
pub use self::assignment_query_service::AssignmentQueryService;
pub use self::criteria::AssignmentCriteria;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::example_data::{
    ExampleDataSeedOutcome, ExampleDataSeeder, ExampleDataSeedingError,
};
pub use self::homework::{Homework, HomeworkValidationError};
pub use self::identity::{EntityId, ID_RANDOM_SPAN, IdGenerator, Identified};
pub use self::submission_service::{DueDatePolicy, SubmissionService};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserValidationError, Username};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use homework::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<u32> {
///     Err(Error::not_found("assignment 42 not found"))
/// }
///
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
