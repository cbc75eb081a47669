//! Assignment listing and submission handlers.
//!
//! ```text
//! GET /assignment?username=zeffren
//! PUT /assignment  assignment={"id":42,"answer":"5","submitted":"2016-03-15T09:00:00Z"}
//! ```

use actix_web::{Either, get, put, web};
use serde::Deserialize;
use tracing::info;

use crate::domain::Assignment;
use crate::inbound::http::ApiResult;
use crate::inbound::http::assignments_dto::{
    ASSIGNMENT_FIELD, AssignmentEnvelope, AssignmentUpdate,
};
use crate::inbound::http::schemas::{AssignmentSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require_text, unsupported_body_error};

/// Query string for `GET /assignment`.
#[derive(Debug, Deserialize)]
pub struct AssignmentListQuery {
    pub username: Option<String>,
}

type EnvelopeBody = Either<web::Json<AssignmentEnvelope>, web::Form<AssignmentEnvelope>>;

/// List the assignments visible to a user.
///
/// Students see every assignment addressed to them. Teachers additionally
/// see assignments they set once the student has submitted something.
#[utoipa::path(
    get,
    path = "/assignment",
    params(
        ("username" = String, Query, description = "Login name, matched ignoring case")
    ),
    responses(
        (status = 200, description = "Visible assignments", body = [AssignmentSchema]),
        (status = 400, description = "Missing username", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["assignments"],
    operation_id = "listAssignments"
)]
#[get("/assignment")]
pub async fn list_assignments(
    state: web::Data<HttpState>,
    query: web::Query<AssignmentListQuery>,
) -> ApiResult<web::Json<Vec<Assignment>>> {
    let username = require_text(query.into_inner().username, FieldName::new("username"))?;
    let assignments = state.query.assignments_for_user(&username).await?;
    Ok(web::Json(assignments))
}

/// Record an answer.
///
/// A resubmission archives the previous state and bumps the version. The
/// response holds the updated live record.
#[utoipa::path(
    put,
    path = "/assignment",
    request_body(
        content = AssignmentEnvelope,
        description = "Also accepted as application/x-www-form-urlencoded",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Updated assignment", body = [AssignmentSchema]),
        (status = 400, description = "Malformed payload", body = ErrorSchema),
        (status = 403, description = "Submission window closed", body = ErrorSchema),
        (status = 404, description = "Unknown assignment", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["assignments"],
    operation_id = "submitAssignment"
)]
#[put("/assignment")]
pub async fn submit_assignment(
    state: web::Data<HttpState>,
    payload: Result<EnvelopeBody, actix_web::Error>,
) -> ApiResult<web::Json<Vec<Assignment>>> {
    let envelope = match payload {
        Ok(Either::Left(json)) => json.into_inner(),
        Ok(Either::Right(form)) => form.into_inner(),
        Err(_) => return Err(unsupported_body_error(ASSIGNMENT_FIELD)),
    };
    let update = AssignmentUpdate::parse(envelope)?;
    info!(
        student = update.student.as_deref().unwrap_or("unknown"),
        homework = update.homework.as_deref().unwrap_or("unknown"),
        submitted = %update.request.submitted_at,
        "assignment submitted"
    );

    let updated = state.submissions.submit(update.request).await?;
    Ok(web::Json(vec![updated]))
}
