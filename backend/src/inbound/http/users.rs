//! User lookup handler.
//!
//! ```text
//! GET /user?username=zeffren
//! ```

use actix_web::{get, web};
use serde::Deserialize;

use crate::domain::User;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require_text};

/// Query string for `GET /user`.
#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub username: Option<String>,
}

/// Look a user up by name, ignoring case.
///
/// Returns a one-element array when the user exists and an empty array
/// otherwise.
#[utoipa::path(
    get,
    path = "/user",
    params(
        ("username" = String, Query, description = "Login name, matched ignoring case")
    ),
    responses(
        (status = 200, description = "Matching user, if any", body = [UserSchema]),
        (status = 400, description = "Missing username", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "findUser"
)]
#[get("/user")]
pub async fn find_user(
    state: web::Data<HttpState>,
    query: web::Query<UserQuery>,
) -> ApiResult<web::Json<Vec<User>>> {
    let username = require_text(query.into_inner().username, FieldName::new("username"))?;
    let user = state.query.find_user(&username).await?;
    Ok(web::Json(user.into_iter().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{seeded_state, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn get(uri: &str) -> (StatusCode, Value) {
        let app = actix_test::init_service(test_app(seeded_state().await)).await;
        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        (status, serde_json::from_slice(&body).expect("json body"))
    }

    #[rstest]
    #[case("/user?username=aristotle")]
    #[case("/user?username=ARISTOTLE")]
    #[actix_web::test]
    async fn known_users_are_returned_in_a_single_element_array(#[case] uri: &str) {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{ "id": 1, "name": "aristotle", "isTeacher": true }])
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_users_yield_an_empty_array() {
        let (status, body) = get("/user?username=nobody").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[rstest]
    #[case("/user")]
    #[case("/user?username=")]
    #[actix_web::test]
    async fn missing_username_is_an_invalid_request(#[case] uri: &str) {
        let (status, body) = get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.get("code"), Some(&json!("invalid_request")));
        assert_eq!(
            body.pointer("/details/field"),
            Some(&json!("username"))
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn store_outages_surface_as_service_unavailable() {
        use crate::domain::Error;
        use crate::domain::ports::{MockAssignmentQuery, MockSubmissionCommand};
        use std::sync::Arc;

        let mut query = MockAssignmentQuery::new();
        query
            .expect_find_user()
            .returning(|_| Err(Error::service_unavailable("entity store unavailable")));
        let state = web::Data::new(HttpState::new(
            Arc::new(query),
            Arc::new(MockSubmissionCommand::new()),
        ));
        let app = actix_test::init_service(test_app(state)).await;

        let request = actix_test::TestRequest::get()
            .uri("/user?username=zeffren")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
