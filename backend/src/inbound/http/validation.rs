//! Shared validation helpers for inbound HTTP adapters.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::{EntityId, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidId,
    InvalidTimestamp,
    InvalidType,
    InvalidJson,
    UnsupportedBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidId => "invalid_id",
            ErrorCode::InvalidTimestamp => "invalid_timestamp",
            ErrorCode::InvalidType => "invalid_type",
            ErrorCode::InvalidJson => "invalid_json",
            ErrorCode::UnsupportedBody => "unsupported_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field: field.as_str(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("missing required field: {name}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_id_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("{name} must be a non-negative integer"))
        .with_value(ErrorCode::InvalidId, value)
}

pub(crate) fn invalid_type_error(field: FieldName, expected: &str) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("{name} must be {expected}"))
        .with_code(ErrorCode::InvalidType)
}

pub(crate) fn invalid_json_error(field: FieldName, reason: &str) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("{name} must hold a JSON object: {reason}"))
        .with_code(ErrorCode::InvalidJson)
}

pub(crate) fn unsupported_body_error(field: FieldName) -> Error {
    let name = field.as_str();
    ValidationError::new(
        field,
        format!("request body must be JSON or form data carrying {name}"),
    )
    .with_code(ErrorCode::UnsupportedBody)
}

pub(crate) fn invalid_timestamp_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("{name} must be an RFC 3339 timestamp"))
        .with_value(ErrorCode::InvalidTimestamp, value)
}

/// Treat absent and blank query values alike.
pub(crate) fn require_text(value: Option<String>, field: FieldName) -> Result<String, Error> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
        .ok_or_else(|| missing_field_error(field))
}

pub(crate) fn parse_entity_id(value: &str, field: FieldName) -> Result<EntityId, Error> {
    value
        .parse::<EntityId>()
        .map_err(|_| invalid_id_error(field, value))
}

pub(crate) fn parse_rfc3339_timestamp(
    value: &str,
    field: FieldName,
) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|_| invalid_timestamp_error(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainCode;
    use rstest::rstest;
    use serde_json::Value;

    const FIELD: FieldName = FieldName::new("id");

    fn detail<'a>(error: &'a Error, key: &str) -> Option<&'a Value> {
        error.details().and_then(|details| details.get(key))
    }

    #[rstest]
    #[case(None)]
    #[case(Some("   "))]
    fn blank_values_are_missing(#[case] value: Option<&str>) {
        let error = require_text(value.map(str::to_owned), FIELD).expect_err("missing");
        assert_eq!(error.code(), DomainCode::InvalidRequest);
        assert_eq!(detail(&error, "field"), Some(&json!("id")));
        assert_eq!(detail(&error, "code"), Some(&json!("missing_field")));
    }

    #[rstest]
    fn present_values_are_trimmed() {
        let value = require_text(Some(" zeffren ".to_owned()), FIELD).expect("present");
        assert_eq!(value, "zeffren");
    }

    #[rstest]
    #[case("-4")]
    #[case("forty-two")]
    fn non_numeric_ids_are_rejected(#[case] raw: &str) {
        let error = parse_entity_id(raw, FIELD).expect_err("invalid id");
        assert_eq!(detail(&error, "code"), Some(&json!("invalid_id")));
        assert_eq!(detail(&error, "value"), Some(&json!(raw)));
    }

    #[rstest]
    fn timestamps_are_normalised_to_utc() {
        let parsed = parse_rfc3339_timestamp("2016-03-15T10:00:00+01:00", FIELD)
            .expect("valid timestamp");
        assert_eq!(parsed.to_rfc3339(), "2016-03-15T09:00:00+00:00");
    }
}
