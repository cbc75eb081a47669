//! Builders wiring stores into the HTTP state ports.

use std::sync::Arc;

use actix_web::web;

use homework::domain::ports::{ArchiveRepository, EntityRepository};
use homework::domain::{AssignmentQueryService, SubmissionService};
use homework::inbound::http::state::HttpState;

use super::ServerConfig;

/// Stores shared by every worker.
pub struct Stores<E, A> {
    pub entities: Arc<E>,
    pub archive: Arc<A>,
}

impl<E, A> Clone for Stores<E, A> {
    fn clone(&self) -> Self {
        Self {
            entities: Arc::clone(&self.entities),
            archive: Arc::clone(&self.archive),
        }
    }
}

/// Build the shared HTTP state over `stores`.
///
/// Query and submission services share the same stores so a submission is
/// visible to the next listing or archive read.
pub(super) fn build_http_state<E, A>(
    config: &ServerConfig,
    stores: Stores<E, A>,
) -> web::Data<HttpState>
where
    E: EntityRepository + 'static,
    A: ArchiveRepository + 'static,
{
    let Stores { entities, archive } = stores;
    let query = AssignmentQueryService::new(Arc::clone(&entities), Arc::clone(&archive));
    let submissions = SubmissionService::with_policy(entities, archive, config.due_dates);

    web::Data::new(HttpState::new(Arc::new(query), Arc::new(submissions)))
}
