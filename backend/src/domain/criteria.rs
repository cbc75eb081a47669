//! Selection criteria for assignment listings.

use serde_json::json;

use super::{EntityId, Error};

/// Which live assignments a listing should return.
///
/// Exactly one selector applies per listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentCriteria {
    /// The zero-or-one assignment with this id.
    ById(EntityId),
    /// Everything the named user may see: their own assignments as a student
    /// and, for teachers, submitted work they assigned.
    ByUsername(String),
}

impl AssignmentCriteria {
    /// Build criteria from optional request parts.
    ///
    /// Fails with an invalid-request error unless exactly one part is given.
    ///
    /// # Examples
    /// ```
    /// use homework::domain::{AssignmentCriteria, EntityId};
    ///
    /// let criteria = AssignmentCriteria::from_parts(Some(EntityId::new(42)), None)
    ///     .expect("id alone is valid");
    /// assert_eq!(criteria, AssignmentCriteria::ById(EntityId::new(42)));
    /// assert!(AssignmentCriteria::from_parts(None, None).is_err());
    /// ```
    pub fn from_parts(id: Option<EntityId>, username: Option<String>) -> Result<Self, Error> {
        let username = username.filter(|name| !name.trim().is_empty());
        match (id, username) {
            (Some(id), None) => Ok(Self::ById(id)),
            (None, Some(username)) => Ok(Self::ByUsername(username)),
            (None, None) => Err(Error::invalid_request(
                "assignment criteria require an id or a username",
            )
            .with_details(json!({ "code": "missing_criteria" }))),
            (Some(_), Some(_)) => Err(Error::invalid_request(
                "assignment criteria accept an id or a username, not both",
            )
            .with_details(json!({ "code": "ambiguous_criteria" }))),
        }
    }
}
