//! Assignments and their archived versions.
//!
//! An [`Assignment`] binds one homework to one student on behalf of one
//! teacher. It is the only mutable, versioned entity: the live record always
//! holds the current state and each superseded state survives as an
//! [`ArchiveEntry`].
//!
//! ## Invariants
//! - `id` never changes across the version history.
//! - `version` starts at 1 and only moves through [`Assignment::supersede`],
//!   which increments it by exactly one.
//! - `submitted` is `None` until the first answer is recorded and never
//!   returns to `None` afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, Homework, Identified, User};

/// First version of every assignment.
pub const INITIAL_VERSION: u32 = 1;

/// Capability tag for records carrying a version counter.
pub trait Versioned {
    /// Version number of this record.
    fn version(&self) -> u32;
}

/// Submission state derived from an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentState {
    /// No answer has ever been recorded.
    Unsubmitted,
    /// At least one answer has been recorded; `version` is the live version.
    Submitted { version: u32 },
}

/// Homework assigned to a student.
///
/// Users and homework are embedded by value so a serialised assignment is
/// self-contained.
///
/// # Examples
/// ```
/// use homework::domain::{
///     Assignment, AssignmentState, EntityId, Homework, User, Username, Versioned,
/// };
///
/// let teacher = User::teacher(EntityId::new(1), Username::new("aristotle").unwrap());
/// let student = User::student(EntityId::new(2), Username::new("zeffren").unwrap());
/// let homework = Homework::try_new(EntityId::new(3), "Math", "Solve Fib(5)").unwrap();
///
/// let assignment = Assignment::builder(EntityId::new(42), teacher, student, homework).build();
/// assert_eq!(assignment.state(), AssignmentState::Unsubmitted);
/// assert_eq!(assignment.version(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Assignment {
    id: EntityId,
    teacher: User,
    student: User,
    homework: Homework,
    due: Option<DateTime<Utc>>,
    version: u32,
    answer: Option<String>,
    submitted: Option<DateTime<Utc>>,
}

impl Assignment {
    /// Start building an unsubmitted assignment.
    pub fn builder(
        id: EntityId,
        teacher: User,
        student: User,
        homework: Homework,
    ) -> AssignmentBuilder {
        AssignmentBuilder::new(id, teacher, student, homework)
    }

    /// Teacher who assigned the homework.
    pub fn teacher(&self) -> &User {
        &self.teacher
    }

    /// Student expected to answer.
    pub fn student(&self) -> &User {
        &self.student
    }

    /// Homework being answered.
    pub fn homework(&self) -> &Homework {
        &self.homework
    }

    /// Due date, if one was set.
    pub fn due(&self) -> Option<DateTime<Utc>> {
        self.due
    }

    /// Latest recorded answer.
    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    /// Time of the latest submission.
    pub fn submitted(&self) -> Option<DateTime<Utc>> {
        self.submitted
    }

    /// Whether an answer has ever been recorded.
    pub fn is_submitted(&self) -> bool {
        self.submitted.is_some()
    }

    /// Derived submission state.
    pub fn state(&self) -> AssignmentState {
        if self.is_submitted() {
            AssignmentState::Submitted {
                version: self.version,
            }
        } else {
            AssignmentState::Unsubmitted
        }
    }

    /// Whether a submission at `at` lands after the due date.
    pub fn is_late(&self, at: DateTime<Utc>) -> bool {
        self.due.is_some_and(|due| at > due)
    }

    /// Freeze the current state and advance the live version.
    ///
    /// Returns a value copy of the state as it stood before the bump; the copy
    /// shares nothing with `self`.
    pub fn supersede(&mut self) -> ArchiveEntry {
        let snapshot = ArchiveEntry(self.clone());
        self.version += 1;
        snapshot
    }

    /// Overwrite the answer and submission time.
    pub fn record_answer(&mut self, answer: impl Into<String>, submitted: DateTime<Utc>) {
        self.answer = Some(answer.into());
        self.submitted = Some(submitted);
    }
}

impl Identified for Assignment {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Versioned for Assignment {
    fn version(&self) -> u32 {
        self.version
    }
}

/// Builder for [`Assignment`].
#[derive(Debug, Clone)]
pub struct AssignmentBuilder {
    id: EntityId,
    teacher: User,
    student: User,
    homework: Homework,
    due: Option<DateTime<Utc>>,
    answer: Option<(String, DateTime<Utc>)>,
}

impl AssignmentBuilder {
    /// Create a builder with the required parties.
    pub fn new(id: EntityId, teacher: User, student: User, homework: Homework) -> Self {
        Self {
            id,
            teacher,
            student,
            homework,
            due: None,
            answer: None,
        }
    }

    /// Set the due date.
    pub fn due(mut self, due: DateTime<Utc>) -> Self {
        self.due = Some(due);
        self
    }

    /// Seed an initial answer, as if submitted once.
    pub fn answered(mut self, answer: impl Into<String>, submitted: DateTime<Utc>) -> Self {
        self.answer = Some((answer.into(), submitted));
        self
    }

    /// Build the assignment at [`INITIAL_VERSION`].
    pub fn build(self) -> Assignment {
        let (answer, submitted) = match self.answer {
            Some((answer, submitted)) => (Some(answer), Some(submitted)),
            None => (None, None),
        };
        Assignment {
            id: self.id,
            teacher: self.teacher,
            student: self.student,
            homework: self.homework,
            due: self.due,
            version: INITIAL_VERSION,
            answer,
            submitted,
        }
    }
}

/// Immutable snapshot of a superseded assignment state.
///
/// Serialises exactly like the assignment it was taken from, including the
/// version the assignment had when it was superseded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArchiveEntry(Assignment);

impl ArchiveEntry {
    /// Read-only view of the frozen state.
    pub fn snapshot(&self) -> &Assignment {
        &self.0
    }
}

impl Identified for ArchiveEntry {
    fn id(&self) -> EntityId {
        self.0.id
    }
}

impl Versioned for ArchiveEntry {
    fn version(&self) -> u32 {
        self.0.version
    }
}
