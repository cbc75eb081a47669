//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers here mirror their JSON shape and are registered with utoipa under
//! the domain type names.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or names no criteria.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The submission window has closed.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The user or assignment does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A backing store is temporarily unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "missing required field: username")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details, such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = 1_458_000_000_000_001_u64)]
    id: u64,
    /// Login name; unique ignoring case.
    #[schema(example = "zeffren")]
    name: String,
    is_teacher: bool,
}

/// OpenAPI schema for [`crate::domain::Homework`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Homework)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct HomeworkSchema {
    id: u64,
    #[schema(example = "Math")]
    title: String,
    #[schema(example = "Solve Fib(5)")]
    question: String,
}

/// OpenAPI schema for [`crate::domain::Assignment`].
///
/// Archive entries share this shape; they are frozen snapshots of a
/// superseded version.
#[derive(ToSchema)]
#[schema(as = crate::domain::Assignment)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AssignmentSchema {
    id: u64,
    teacher: UserSchema,
    student: UserSchema,
    homework: HomeworkSchema,
    /// Due instant in RFC 3339 form.
    #[schema(value_type = Option<String>, format = DateTime)]
    due: Option<String>,
    /// Starts at 1 and grows by one per resubmission.
    #[schema(minimum = 1, example = 1)]
    version: u32,
    answer: Option<String>,
    /// Submission instant in RFC 3339 form.
    #[schema(value_type = Option<String>, format = DateTime)]
    submitted: Option<String>,
}
