//! Tests for the submission versioning engine.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use mockall::predicate::eq;

use super::*;
use crate::domain::ports::{MockArchiveRepository, MockEntityRepository};
use crate::domain::{ErrorCode, Homework, Identified, User, Username};

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 3, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn sample_assignment() -> Assignment {
    let teacher = User::teacher(EntityId::new(1), Username::new("aristotle").expect("name"));
    let student = User::student(EntityId::new(2), Username::new("zeffren").expect("name"));
    let homework = Homework::try_new(EntityId::new(3), "Math", "Solve Fib(5)").expect("homework");
    Assignment::builder(EntityId::new(42), teacher, student, homework)
        .due(at(15, 23))
        .build()
}

fn request(answer: &str, submitted_at: DateTime<Utc>) -> SubmitAnswerRequest {
    SubmitAnswerRequest {
        assignment_id: EntityId::new(42),
        answer: answer.to_owned(),
        submitted_at,
    }
}

#[tokio::test]
async fn first_submission_fills_in_place_without_archiving() {
    let mut entities = MockEntityRepository::new();
    entities
        .expect_find_assignment_by_id()
        .with(eq(EntityId::new(42)))
        .times(1)
        .return_once(|_| Ok(Some(sample_assignment())));
    entities
        .expect_save_assignment()
        .withf(|saved| saved.version() == 1 && saved.answer() == Some("A"))
        .times(1)
        .return_once(|_| Ok(()));
    let mut archive = MockArchiveRepository::new();
    archive.expect_append().times(0);

    let service = SubmissionService::new(Arc::new(entities), Arc::new(archive));
    let updated = service
        .submit(request("A", at(15, 9)))
        .await
        .expect("submission succeeds");

    assert_eq!(updated.version(), 1);
    assert_eq!(updated.answer(), Some("A"));
    assert_eq!(updated.submitted(), Some(at(15, 9)));
}

#[tokio::test]
async fn resubmission_archives_prior_state_then_bumps_version() {
    let mut live = sample_assignment();
    live.record_answer("A", at(15, 9));

    let mut entities = MockEntityRepository::new();
    entities
        .expect_find_assignment_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(live)));
    entities
        .expect_save_assignment()
        .withf(|saved| saved.version() == 2 && saved.answer() == Some("B"))
        .times(1)
        .return_once(|_| Ok(()));
    let mut archive = MockArchiveRepository::new();
    archive
        .expect_append()
        .withf(|entry| {
            entry.id() == EntityId::new(42)
                && entry.version() == 1
                && entry.snapshot().answer() == Some("A")
                && entry.snapshot().submitted() == Some(at(15, 9))
        })
        .times(1)
        .return_once(|_| Ok(()));

    let service = SubmissionService::new(Arc::new(entities), Arc::new(archive));
    let updated = service
        .submit(request("B", at(15, 10)))
        .await
        .expect("resubmission succeeds");

    assert_eq!(updated.version(), 2);
    assert_eq!(updated.answer(), Some("B"));
}

#[tokio::test]
async fn identical_resubmission_still_versions() {
    let mut live = sample_assignment();
    live.record_answer("A", at(15, 9));

    let mut entities = MockEntityRepository::new();
    entities
        .expect_find_assignment_by_id()
        .return_once(move |_| Ok(Some(live)));
    entities.expect_save_assignment().return_once(|_| Ok(()));
    let mut archive = MockArchiveRepository::new();
    archive.expect_append().times(1).return_once(|_| Ok(()));

    let service = SubmissionService::new(Arc::new(entities), Arc::new(archive));
    let updated = service
        .submit(request("A", at(15, 9)))
        .await
        .expect("resubmission succeeds");

    assert_eq!(updated.version(), 2);
}

#[tokio::test]
async fn unknown_assignment_is_not_found() {
    let mut entities = MockEntityRepository::new();
    entities
        .expect_find_assignment_by_id()
        .return_once(|_| Ok(None));
    entities.expect_save_assignment().times(0);
    let mut archive = MockArchiveRepository::new();
    archive.expect_append().times(0);

    let service = SubmissionService::new(Arc::new(entities), Arc::new(archive));
    let error = service
        .submit(request("A", at(15, 9)))
        .await
        .expect_err("unknown id");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn late_answers_are_accepted_by_default() {
    let mut entities = MockEntityRepository::new();
    entities
        .expect_find_assignment_by_id()
        .return_once(|_| Ok(Some(sample_assignment())));
    entities.expect_save_assignment().return_once(|_| Ok(()));

    let service = SubmissionService::new(Arc::new(entities), Arc::new(MockArchiveRepository::new()));
    let updated = service
        .submit(request("late", at(17, 9)))
        .await
        .expect("late answer accepted");

    assert_eq!(updated.answer(), Some("late"));
}

#[tokio::test]
async fn enforced_policy_rejects_late_answers_without_side_effects() {
    let mut entities = MockEntityRepository::new();
    entities
        .expect_find_assignment_by_id()
        .return_once(|_| Ok(Some(sample_assignment())));
    entities.expect_save_assignment().times(0);
    let mut archive = MockArchiveRepository::new();
    archive.expect_append().times(0);

    let service = SubmissionService::with_policy(
        Arc::new(entities),
        Arc::new(archive),
        DueDatePolicy::Enforce,
    );
    let error = service
        .submit(request("late", at(17, 9)))
        .await
        .expect_err("late answer rejected");

    assert_eq!(error.code(), ErrorCode::Forbidden);
    assert_eq!(error.message(), "submission window closed");
}

#[tokio::test]
async fn connection_failures_map_to_service_unavailable() {
    let mut entities = MockEntityRepository::new();
    entities
        .expect_find_assignment_by_id()
        .return_once(|_| Err(EntityStoreError::connection("store offline")));

    let service = SubmissionService::new(Arc::new(entities), Arc::new(MockArchiveRepository::new()));
    let error = service
        .submit(request("A", at(15, 9)))
        .await
        .expect_err("store offline");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[tokio::test]
async fn archive_failure_leaves_live_record_untouched() {
    let mut live = sample_assignment();
    live.record_answer("A", at(15, 9));

    let mut entities = MockEntityRepository::new();
    entities
        .expect_find_assignment_by_id()
        .return_once(move |_| Ok(Some(live)));
    entities.expect_save_assignment().times(0);
    let mut archive = MockArchiveRepository::new();
    archive
        .expect_append()
        .return_once(|_| Err(ArchiveStoreError::query("disk full")));

    let service = SubmissionService::new(Arc::new(entities), Arc::new(archive));
    let error = service
        .submit(request("B", at(15, 10)))
        .await
        .expect_err("archive failure");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[test]
fn unknown_assignment_store_error_maps_to_not_found() {
    let error = map_entity_error(EntityStoreError::unknown_assignment(EntityId::new(7)));
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(
        error.details().and_then(|d| d.get("id")),
        Some(&serde_json::json!(7))
    );
}

#[tokio::test]
async fn lock_slots_are_released_after_unknown_ids() {
    let mut entities = MockEntityRepository::new();
    entities
        .expect_find_assignment_by_id()
        .times(64)
        .returning(|_| Ok(None));
    let service = SubmissionService::new(Arc::new(entities), Arc::new(MockArchiveRepository::new()));

    for raw in 1_000..1_064 {
        let mut unknown = request("A", at(15, 9));
        unknown.assignment_id = EntityId::new(raw);
        let error = service.submit(unknown).await.expect_err("unknown id");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    assert_eq!(service.locks.tracked(), 0);
}

#[tokio::test]
async fn lock_slot_survives_while_a_waiter_is_queued() {
    let service = SubmissionService::new(
        Arc::new(MockEntityRepository::new()),
        Arc::new(MockArchiveRepository::new()),
    );
    let id = EntityId::new(42);

    let held = service.locks.acquire(id).await;
    let waiter = service.locks.acquire(id);
    tokio::pin!(waiter);
    assert!(futures_util::poll!(&mut waiter).is_pending());

    drop(held);
    assert_eq!(service.locks.tracked(), 1);
    let second = waiter.await;
    assert_eq!(service.locks.tracked(), 1);

    drop(second);
    assert_eq!(service.locks.tracked(), 0);
}

#[tokio::test]
async fn save_failure_after_archiving_surfaces_the_store_error() {
    let mut live = sample_assignment();
    live.record_answer("A", at(15, 9));

    let mut entities = MockEntityRepository::new();
    entities
        .expect_find_assignment_by_id()
        .return_once(move |_| Ok(Some(live)));
    entities
        .expect_save_assignment()
        .times(1)
        .return_once(|_| Err(EntityStoreError::connection("store offline")));
    let mut archive = MockArchiveRepository::new();
    archive.expect_append().times(1).return_once(|_| Ok(()));

    let service = SubmissionService::new(Arc::new(entities), Arc::new(archive));
    let error = service
        .submit(request("B", at(15, 10)))
        .await
        .expect_err("save failure");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    assert_eq!(service.locks.tracked(), 0);
}
