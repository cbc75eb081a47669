//! Shared helpers for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! the small classroom fixture they share lives here.

#![allow(dead_code, reason = "each test crate uses a different subset")]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use homework::domain::ports::EntityRepository;
use homework::domain::{Assignment, EntityId, Homework, User, Username};
use homework::outbound::memory::{InMemoryArchiveStore, InMemoryEntityStore};

pub const MATH_FOR_ZEFFREN: u64 = 42;
pub const MATH_FOR_BART: u64 = 43;
pub const HISTORY_FOR_ZEFFREN: u64 = 44;

pub struct Classroom {
    pub entities: Arc<InMemoryEntityStore>,
    pub archive: Arc<InMemoryArchiveStore>,
}

/// Fixed instant the classroom is built around.
pub fn morning() -> DateTime<Utc> {
    at(2016, 3, 15, 9)
}

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn name(raw: &str) -> Username {
    Username::new(raw).expect("valid username")
}

/// Two students, two teachers and three assignments.
///
/// - 42: aristotle set Math for zeffren, unanswered, due tomorrow.
/// - 43: aristotle set Math for bartsimpson, answered this morning.
/// - 44: herodotus set History for zeffren, unanswered, due yesterday.
pub async fn classroom() -> Classroom {
    let entities = Arc::new(InMemoryEntityStore::new());
    let aristotle = User::teacher(EntityId::new(1), name("aristotle"));
    let herodotus = User::teacher(EntityId::new(2), name("herodotus"));
    let zeffren = User::student(EntityId::new(3), name("zeffren"));
    let bart = User::student(EntityId::new(4), name("bartsimpson"));
    let math = Homework::try_new(EntityId::new(10), "Math", "Solve Fib(5)").expect("homework");
    let history = Homework::try_new(
        EntityId::new(11),
        "History",
        "Who won the Peloponnesian War?",
    )
    .expect("homework");

    for user in [&aristotle, &herodotus, &zeffren, &bart] {
        entities.insert_user(user).await.expect("insert user");
    }
    for homework in [&math, &history] {
        entities.insert_homework(homework).await.expect("insert homework");
    }

    let assignments = [
        Assignment::builder(
            EntityId::new(MATH_FOR_ZEFFREN),
            aristotle.clone(),
            zeffren.clone(),
            math.clone(),
        )
        .due(at(2016, 3, 16, 23))
        .build(),
        Assignment::builder(EntityId::new(MATH_FOR_BART), aristotle, bart, math)
            .due(at(2016, 3, 16, 23))
            .answered("Don't have a cow man.", morning())
            .build(),
        Assignment::builder(EntityId::new(HISTORY_FOR_ZEFFREN), herodotus, zeffren, history)
            .due(at(2016, 3, 14, 23))
            .build(),
    ];
    for assignment in &assignments {
        entities
            .insert_assignment(assignment)
            .await
            .expect("insert assignment");
    }

    Classroom {
        entities,
        archive: Arc::new(InMemoryArchiveStore::new()),
    }
}
