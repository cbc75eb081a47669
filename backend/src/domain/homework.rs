//! Homework templates.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{EntityId, Identified};

/// Validation errors returned by [`Homework::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeworkValidationError {
    EmptyTitle,
}

impl fmt::Display for HomeworkValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "homework title must not be empty"),
        }
    }
}

impl std::error::Error for HomeworkValidationError {}

/// A reusable question that can be assigned to any number of students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Homework {
    id: EntityId,
    title: String,
    question: String,
}

impl Homework {
    /// Build homework, rejecting a blank title.
    pub fn try_new(
        id: EntityId,
        title: impl Into<String>,
        question: impl Into<String>,
    ) -> Result<Self, HomeworkValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(HomeworkValidationError::EmptyTitle);
        }
        Ok(Self {
            id,
            title,
            question: question.into(),
        })
    }

    /// Short subject line, e.g. "Math".
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Question students answer.
    pub fn question(&self) -> &str {
        self.question.as_str()
    }
}

impl Identified for Homework {
    fn id(&self) -> EntityId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn blank_title_is_rejected() {
        let result = Homework::try_new(EntityId::new(1), " ", "Solve Fib(5)");
        assert_eq!(result, Err(HomeworkValidationError::EmptyTitle));
    }

    #[rstest]
    fn accessors_expose_fields() {
        let homework = Homework::try_new(EntityId::new(3), "Math", "Solve Fib(5)")
            .expect("valid homework");
        assert_eq!(homework.id(), EntityId::new(3));
        assert_eq!(homework.title(), "Math");
        assert_eq!(homework.question(), "Solve Fib(5)");
    }
}
