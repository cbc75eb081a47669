//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on driving ports and remain testable without real stores.

use std::sync::Arc;

use crate::domain::ports::{AssignmentQuery, SubmissionCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub query: Arc<dyn AssignmentQuery>,
    pub submissions: Arc<dyn SubmissionCommand>,
}

impl HttpState {
    /// Construct state from the read and write ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use homework::domain::{AssignmentQueryService, SubmissionService};
    /// use homework::inbound::http::state::HttpState;
    /// use homework::outbound::memory::{InMemoryArchiveStore, InMemoryEntityStore};
    ///
    /// let entities = Arc::new(InMemoryEntityStore::new());
    /// let archive = Arc::new(InMemoryArchiveStore::new());
    /// let state = HttpState::new(
    ///     Arc::new(AssignmentQueryService::new(entities.clone(), archive.clone())),
    ///     Arc::new(SubmissionService::new(entities, archive)),
    /// );
    /// let _query = state.query.clone();
    /// ```
    pub fn new(query: Arc<dyn AssignmentQuery>, submissions: Arc<dyn SubmissionCommand>) -> Self {
        Self { query, submissions }
    }
}
