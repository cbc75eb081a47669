//! Driving port for recording answers.
//!
//! Inbound adapters call this port to submit or resubmit an answer. The
//! implementation is responsible for archiving the superseded state before
//! overwriting the live record.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Assignment, EntityId, Error};

/// An answer submitted for one assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    pub assignment_id: EntityId,
    pub answer: String,
    pub submitted_at: DateTime<Utc>,
}

/// Use-case port for submissions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionCommand: Send + Sync {
    /// Record `request` against the live assignment and return its new state.
    ///
    /// Every call after the first on a given assignment archives the prior
    /// state and bumps the version, even when the payload repeats the last
    /// one.
    async fn submit(&self, request: SubmitAnswerRequest) -> Result<Assignment, Error>;
}
