//! Assignment submission payloads and parsing helpers.
//!
//! `PUT /assignment` carries a single field, `assignment`, whose value is a
//! JSON-encoded object. Only `id`, `answer` and `submitted` are required; the
//! embedded student and homework are read for logging when present and every
//! other field is ignored. The stored record is authoritative.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::ports::SubmitAnswerRequest;
use crate::domain::{EntityId, Error};
use crate::inbound::http::validation::{
    FieldName, invalid_id_error, invalid_json_error, invalid_type_error, missing_field_error,
    parse_entity_id, parse_rfc3339_timestamp,
};

pub(super) const ASSIGNMENT_FIELD: FieldName = FieldName::new("assignment");
const ID_FIELD: FieldName = FieldName::new("assignment.id");
const ANSWER_FIELD: FieldName = FieldName::new("assignment.answer");
const SUBMITTED_FIELD: FieldName = FieldName::new("assignment.submitted");

/// Body of `PUT /assignment`, sent as JSON or as form fields.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct AssignmentEnvelope {
    /// JSON-encoded assignment holding at least `id`, `answer` and
    /// `submitted`.
    #[schema(
        example = r#"{"id":1458000000000123,"answer":"5","submitted":"2016-03-15T09:00:00Z"}"#
    )]
    pub assignment: Option<String>,
}

/// Submission decoded from an [`AssignmentEnvelope`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct AssignmentUpdate {
    pub(super) request: SubmitAnswerRequest,
    pub(super) student: Option<String>,
    pub(super) homework: Option<String>,
}

impl AssignmentUpdate {
    pub(super) fn parse(envelope: AssignmentEnvelope) -> Result<Self, Error> {
        let raw = envelope
            .assignment
            .ok_or_else(|| missing_field_error(ASSIGNMENT_FIELD))?;
        let value: Value = serde_json::from_str(&raw)
            .map_err(|err| invalid_json_error(ASSIGNMENT_FIELD, &err.to_string()))?;
        let object = value
            .as_object()
            .ok_or_else(|| invalid_json_error(ASSIGNMENT_FIELD, "expected an object"))?;

        let request = SubmitAnswerRequest {
            assignment_id: parse_id(object.get("id"))?,
            answer: required_string(object, "answer", ANSWER_FIELD)?,
            submitted_at: {
                let raw = required_string(object, "submitted", SUBMITTED_FIELD)?;
                parse_rfc3339_timestamp(&raw, SUBMITTED_FIELD)?
            },
        };

        Ok(Self {
            request,
            student: nested_str(object, "student", "name"),
            homework: nested_str(object, "homework", "title"),
        })
    }
}

fn parse_id(value: Option<&Value>) -> Result<EntityId, Error> {
    match value {
        None | Some(Value::Null) => Err(missing_field_error(ID_FIELD)),
        Some(Value::Number(number)) => number
            .as_u64()
            .map(EntityId::new)
            .ok_or_else(|| invalid_id_error(ID_FIELD, &number.to_string())),
        Some(Value::String(raw)) => parse_entity_id(raw, ID_FIELD),
        Some(_) => Err(invalid_type_error(ID_FIELD, "a number")),
    }
}

fn required_string(
    object: &Map<String, Value>,
    key: &str,
    field: FieldName,
) -> Result<String, Error> {
    match object.get(key) {
        None | Some(Value::Null) => Err(missing_field_error(field)),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(invalid_type_error(field, "a string")),
    }
}

fn nested_str(object: &Map<String, Value>, outer: &str, inner: &str) -> Option<String> {
    object
        .get(outer)
        .and_then(|nested| nested.get(inner))
        .and_then(Value::as_str)
        .map(str::to_owned)
}
