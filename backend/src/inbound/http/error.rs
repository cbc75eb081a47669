//! Domain errors rendered as HTTP responses.
//!
//! Every handler returns [`ApiResult`]; the body is always the JSON form of
//! [`Error`] and the `trace-id` header mirrors its trace identifier. Store
//! failures never reach clients verbatim: internal errors are reduced to a
//! generic message and outages keep only their message.

use std::borrow::Cow;

use actix_web::http::StatusCode;
use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{HttpResponse, ResponseError};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for handlers in this adapter.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

/// Client-facing view of `error`.
fn public_view(error: &Error) -> Cow<'_, Error> {
    match error.code() {
        ErrorCode::InternalError => {
            let generic = Error::internal(REDACTED_MESSAGE);
            Cow::Owned(match error.trace_id() {
                Some(id) => generic.with_trace_id(id.to_owned()),
                None => generic,
            })
        }
        ErrorCode::ServiceUnavailable if error.details().is_some() => {
            let outage = Error::service_unavailable(error.message());
            Cow::Owned(match error.trace_id() {
                Some(id) => outage.with_trace_id(id.to_owned()),
                None => outage,
            })
        }
        _ => Cow::Borrowed(error),
    }
}

fn log_server_side(error: &Error) {
    match error.code() {
        ErrorCode::InternalError => {
            error!(message = %error.message(), trace_id = ?error.trace_id(), "request failed");
        }
        ErrorCode::ServiceUnavailable => {
            warn!(message = %error.message(), trace_id = ?error.trace_id(), "store unavailable");
        }
        _ => {}
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        log_server_side(self);

        let mut response = HttpResponse::build(self.status_code());
        // Never cache error bodies.
        response.insert_header(CacheControl(vec![CacheDirective::NoStore]));
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        response.json(public_view(self).as_ref())
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "framework error reached a handler");
        Error::internal(REDACTED_MESSAGE)
    }
}
