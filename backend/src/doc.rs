//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer along with
//! the schema wrappers that describe domain types without coupling them to
//! utoipa. The document backs Swagger UI in debug builds and is exported by
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::AssignmentEnvelope;
use crate::inbound::http::schemas::{
    AssignmentSchema, ErrorCodeSchema, ErrorSchema, HomeworkSchema, UserSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Homework API",
        description = "Submit answers to assigned homework and browse superseded versions."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::find_user,
        crate::inbound::http::assignments::list_assignments,
        crate::inbound::http::assignments::submit_assignment,
        crate::inbound::http::archive::get_archive,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        HomeworkSchema,
        AssignmentSchema,
        AssignmentEnvelope,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "users", description = "User lookup"),
        (name = "assignments", description = "Submission and archive history"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
