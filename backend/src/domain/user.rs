//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{EntityId, Identified};

/// Validation errors returned while building users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyName,
    NameHasSurroundingWhitespace,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "user name must not be empty"),
            Self::NameHasSurroundingWhitespace => {
                write!(f, "user name must not start or end with whitespace")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Login name of a user.
///
/// Names are unique ignoring ASCII and Unicode case; the original casing is
/// kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(name.into())
    }

    fn from_owned(name: String) -> Result<Self, UserValidationError> {
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if name.trim() != name {
            return Err(UserValidationError::NameHasSurroundingWhitespace);
        }
        Ok(Self(name))
    }

    /// Case-insensitive comparison against a raw name.
    ///
    /// # Examples
    /// ```
    /// use homework::domain::Username;
    ///
    /// let name = Username::new("BartSimpson").expect("valid name");
    /// assert!(name.matches("bartsimpson"));
    /// assert!(!name.matches("bart"));
    /// ```
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.to_uppercase() == candidate.to_uppercase()
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// A student or teacher.
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct User {
    id: EntityId,
    name: Username,
    is_teacher: bool,
}

impl User {
    /// Build a student.
    pub fn student(id: EntityId, name: Username) -> Self {
        Self {
            id,
            name,
            is_teacher: false,
        }
    }

    /// Build a teacher.
    pub fn teacher(id: EntityId, name: Username) -> Self {
        Self {
            id,
            name,
            is_teacher: true,
        }
    }

    /// Login name.
    pub fn name(&self) -> &Username {
        &self.name
    }

    /// Whether the user may review submitted work they assigned.
    pub fn is_teacher(&self) -> bool {
        self.is_teacher
    }
}

impl Identified for User {
    fn id(&self) -> EntityId {
        self.id
    }
}
