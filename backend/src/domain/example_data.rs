//! Demo roster seeding.
//!
//! Builds a small classroom (two students, three teachers, three pieces of
//! homework and four assignments) relative to the injected clock, then
//! writes it through the entity store port. One assignment is already
//! answered and past due so history and late-policy behaviour can be
//! exercised straight away.

use std::sync::Arc;

use chrono::{DateTime, Days, NaiveTime, Utc};
use mockable::Clock;
use thiserror::Error;

use crate::domain::ports::{EntityRepository, EntityStoreError};
use crate::domain::{
    Assignment, Homework, HomeworkValidationError, IdGenerator, User, UserValidationError,
    Username,
};

/// Counts of records written by a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleDataSeedOutcome {
    pub user_count: usize,
    pub homework_count: usize,
    pub assignment_count: usize,
}

/// Errors raised while preparing or applying example data.
#[derive(Debug, Error)]
pub enum ExampleDataSeedingError {
    /// A roster name failed validation.
    #[error("example user name failed validation: {0}")]
    UserInvalid(#[from] UserValidationError),
    /// A roster homework failed validation.
    #[error("example homework failed validation: {0}")]
    HomeworkInvalid(#[from] HomeworkValidationError),
    /// A date relative to the clock could not be represented.
    #[error("example due date out of range")]
    DateOutOfRange,
    /// Persistence adapter failed while seeding.
    #[error("example data persistence error: {0}")]
    Persistence(#[from] EntityStoreError),
}

struct Roster {
    users: Vec<User>,
    homework: Vec<Homework>,
    assignments: Vec<Assignment>,
}

/// Writes the demo roster through an [`EntityRepository`].
#[derive(Clone)]
pub struct ExampleDataSeeder<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
    ids: Arc<IdGenerator>,
}

impl<R> ExampleDataSeeder<R>
where
    R: EntityRepository,
{
    /// Create a seeder minting ids from `ids` and reading time from `clock`.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>, ids: Arc<IdGenerator>) -> Self {
        Self {
            repository,
            clock,
            ids,
        }
    }

    /// Build and persist the demo roster.
    pub async fn seed(&self) -> Result<ExampleDataSeedOutcome, ExampleDataSeedingError> {
        let roster = self.build_roster()?;

        for user in &roster.users {
            self.repository.insert_user(user).await?;
        }
        for homework in &roster.homework {
            self.repository.insert_homework(homework).await?;
        }
        for assignment in &roster.assignments {
            self.repository.insert_assignment(assignment).await?;
        }

        Ok(ExampleDataSeedOutcome {
            user_count: roster.users.len(),
            homework_count: roster.homework.len(),
            assignment_count: roster.assignments.len(),
        })
    }

    fn build_roster(&self) -> Result<Roster, ExampleDataSeedingError> {
        let now = self.clock.utc();
        let today = end_of_day(now);
        let tomorrow = today
            .checked_add_days(Days::new(1))
            .ok_or(ExampleDataSeedingError::DateOutOfRange)?;
        let yesterday = today
            .checked_sub_days(Days::new(1))
            .ok_or(ExampleDataSeedingError::DateOutOfRange)?;
        let two_days_ago = now
            .checked_sub_days(Days::new(2))
            .ok_or(ExampleDataSeedingError::DateOutOfRange)?;

        let zeffren = self.student("zeffren")?;
        let bart = self.student("bartsimpson")?;
        let aristotle = self.teacher("aristotle")?;
        let demosthenes = self.teacher("demosthenes")?;
        let herodotus = self.teacher("herodotus")?;

        let math = Homework::try_new(self.ids.next(), "Math", "Solve Fib(5)")?;
        let english = Homework::try_new(
            self.ids.next(),
            "English",
            "What did the tell tale heart tell us?",
        )?;
        let history = Homework::try_new(
            self.ids.next(),
            "History",
            "What is manifest about our destiny?",
        )?;

        let assignments = vec![
            Assignment::builder(
                self.ids.next(),
                aristotle.clone(),
                zeffren.clone(),
                math.clone(),
            )
            .due(tomorrow)
            .build(),
            Assignment::builder(self.ids.next(), aristotle.clone(), bart.clone(), math.clone())
                .due(tomorrow)
                .answered("Don't have a cow man.", now)
                .build(),
            Assignment::builder(
                self.ids.next(),
                demosthenes.clone(),
                zeffren.clone(),
                english.clone(),
            )
            .due(tomorrow)
            .build(),
            Assignment::builder(
                self.ids.next(),
                herodotus.clone(),
                zeffren.clone(),
                history.clone(),
            )
            .due(yesterday)
            .answered("carpe diem", two_days_ago)
            .build(),
        ];

        Ok(Roster {
            users: vec![zeffren, bart, aristotle, demosthenes, herodotus],
            homework: vec![math, english, history],
            assignments,
        })
    }

    fn student(&self, name: &str) -> Result<User, UserValidationError> {
        Ok(User::student(self.ids.next(), Username::new(name)?))
    }

    fn teacher(&self, name: &str) -> Result<User, UserValidationError> {
        Ok(User::teacher(self.ids.next(), Username::new(name)?))
    }
}

/// Last whole second of the UTC day containing `instant`.
fn end_of_day(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc()
        .checked_add_signed(chrono::Duration::seconds(86_399))
        .unwrap_or(instant)
}
