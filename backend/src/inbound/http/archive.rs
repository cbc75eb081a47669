//! Archive history handler.
//!
//! ```text
//! GET /archive?id=43
//! ```

use actix_web::{get, web};
use serde::Deserialize;

use crate::domain::ArchiveEntry;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{AssignmentSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_entity_id, require_text};

const ID_FIELD: FieldName = FieldName::new("id");

/// Query string for `GET /archive`.
#[derive(Debug, Deserialize)]
pub struct ArchiveQuery {
    pub id: Option<String>,
}

/// Superseded versions of an assignment, newest first.
///
/// Assignments that were never resubmitted, including unknown ids, have an
/// empty history.
#[utoipa::path(
    get,
    path = "/archive",
    params(
        ("id" = u64, Query, description = "Assignment identifier")
    ),
    responses(
        (status = 200, description = "Archived versions", body = [AssignmentSchema]),
        (status = 400, description = "Missing or malformed id", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["assignments"],
    operation_id = "getArchive"
)]
#[get("/archive")]
pub async fn get_archive(
    state: web::Data<HttpState>,
    query: web::Query<ArchiveQuery>,
) -> ApiResult<web::Json<Vec<ArchiveEntry>>> {
    let raw = require_text(query.into_inner().id, ID_FIELD)?;
    let id = parse_entity_id(&raw, ID_FIELD)?;
    let history = state.query.archive_history(id).await?;
    Ok(web::Json(history))
}
