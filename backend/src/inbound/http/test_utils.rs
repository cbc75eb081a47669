//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono::{DateTime, TimeZone, Utc};

use crate::Trace;
use crate::domain::ports::EntityRepository;
use crate::domain::{
    Assignment, AssignmentQueryService, EntityId, Homework, SubmissionService, User, Username,
};
use crate::inbound::http::archive::get_archive;
use crate::inbound::http::assignments::{list_assignments, submit_assignment};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::find_user;
use crate::outbound::memory::{InMemoryArchiveStore, InMemoryEntityStore};

/// Unsubmitted math assignment for zeffren.
pub const UNSUBMITTED_ID: u64 = 42;
/// Math assignment bart has already answered once.
pub const SUBMITTED_ID: u64 = 43;

pub fn seeded_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 3, 15, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn user(id: u64, name: &str, teacher: bool) -> User {
    let name = Username::new(name).expect("valid name");
    if teacher {
        User::teacher(EntityId::new(id), name)
    } else {
        User::student(EntityId::new(id), name)
    }
}

/// In-memory stores holding a small, fixed classroom.
pub async fn seeded_stores() -> (Arc<InMemoryEntityStore>, Arc<InMemoryArchiveStore>) {
    let entities = Arc::new(InMemoryEntityStore::new());
    let aristotle = user(1, "aristotle", true);
    let zeffren = user(2, "zeffren", false);
    let bart = user(3, "bartsimpson", false);
    let math = Homework::try_new(EntityId::new(10), "Math", "Solve Fib(5)").expect("homework");

    for u in [&aristotle, &zeffren, &bart] {
        entities.insert_user(u).await.expect("insert user");
    }
    entities.insert_homework(&math).await.expect("insert homework");
    entities
        .insert_assignment(
            &Assignment::builder(
                EntityId::new(UNSUBMITTED_ID),
                aristotle.clone(),
                zeffren,
                math.clone(),
            )
            .build(),
        )
        .await
        .expect("insert assignment");
    entities
        .insert_assignment(
            &Assignment::builder(EntityId::new(SUBMITTED_ID), aristotle, bart, math)
                .answered("Don't have a cow man.", seeded_at())
                .build(),
        )
        .await
        .expect("insert assignment");

    (entities, Arc::new(InMemoryArchiveStore::new()))
}

/// HTTP state backed by [`seeded_stores`].
pub async fn seeded_state() -> web::Data<HttpState> {
    let (entities, archive) = seeded_stores().await;
    web::Data::new(HttpState::new(
        Arc::new(AssignmentQueryService::new(
            Arc::clone(&entities),
            Arc::clone(&archive),
        )),
        Arc::new(SubmissionService::new(entities, archive)),
    ))
}

/// App exposing every homework endpoint over `state`.
pub fn test_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(Trace)
        .service(find_user)
        .service(list_assignments)
        .service(submit_assignment)
        .service(get_archive)
}
