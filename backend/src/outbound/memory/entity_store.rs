//! In-memory `EntityRepository` implementation.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{EntityRepository, EntityStoreError};
use crate::domain::{Assignment, AssignmentCriteria, EntityId, Homework, Identified, User};

#[derive(Debug, Default)]
struct Records {
    users: Vec<User>,
    homework: Vec<Homework>,
    assignments: Vec<Assignment>,
}

impl Records {
    fn user_by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|user| user.name().matches(name))
    }

    fn visible_to(&self, name: &str) -> Vec<Assignment> {
        let Some(user) = self.user_by_name(name) else {
            return Vec::new();
        };
        let is_teacher = user.is_teacher();
        self.assignments
            .iter()
            .filter(|assignment| {
                assignment.student().name().matches(name)
                    || (is_teacher
                        && assignment.teacher().id() == user.id()
                        && assignment.is_submitted())
            })
            .cloned()
            .collect()
    }
}

/// Users, homework and live assignments held in process memory.
///
/// Listings return records in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryEntityStore {
    records: RwLock<Records>,
}

fn poisoned<T>(_: PoisonError<T>) -> EntityStoreError {
    EntityStoreError::query("entity store lock poisoned")
}

impl InMemoryEntityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>, EntityStoreError> {
        self.records.read().map_err(poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>, EntityStoreError> {
        self.records.write().map_err(poisoned)
    }
}

#[async_trait]
impl EntityRepository for InMemoryEntityStore {
    async fn find_user_by_name(&self, name: &str) -> Result<Option<User>, EntityStoreError> {
        Ok(self.read()?.user_by_name(name).cloned())
    }

    async fn find_assignment_by_id(
        &self,
        id: EntityId,
    ) -> Result<Option<Assignment>, EntityStoreError> {
        let records = self.read()?;
        Ok(records.assignments.iter().find(|a| a.id() == id).cloned())
    }

    async fn list_assignments(
        &self,
        criteria: &AssignmentCriteria,
    ) -> Result<Vec<Assignment>, EntityStoreError> {
        let records = self.read()?;
        let listed = match criteria {
            AssignmentCriteria::ById(id) => records
                .assignments
                .iter()
                .filter(|a| a.id() == *id)
                .cloned()
                .collect(),
            AssignmentCriteria::ByUsername(name) => records.visible_to(name),
        };
        Ok(listed)
    }

    async fn save_assignment(&self, assignment: &Assignment) -> Result<(), EntityStoreError> {
        let mut records = self.write()?;
        let slot = records
            .assignments
            .iter_mut()
            .find(|existing| existing.id() == assignment.id())
            .ok_or_else(|| EntityStoreError::unknown_assignment(assignment.id()))?;
        *slot = assignment.clone();
        Ok(())
    }

    async fn insert_user(&self, user: &User) -> Result<(), EntityStoreError> {
        let mut records = self.write()?;
        if records.users.iter().any(|u| u.id() == user.id()) {
            return Err(EntityStoreError::duplicate(format!("user {}", user.id())));
        }
        if records.user_by_name(user.name().as_ref()).is_some() {
            return Err(EntityStoreError::duplicate(format!(
                "user name {}",
                user.name()
            )));
        }
        records.users.push(user.clone());
        Ok(())
    }

    async fn insert_homework(&self, homework: &Homework) -> Result<(), EntityStoreError> {
        let mut records = self.write()?;
        if records.homework.iter().any(|h| h.id() == homework.id()) {
            return Err(EntityStoreError::duplicate(format!(
                "homework {}",
                homework.id()
            )));
        }
        records.homework.push(homework.clone());
        Ok(())
    }

    async fn insert_assignment(&self, assignment: &Assignment) -> Result<(), EntityStoreError> {
        let mut records = self.write()?;
        if records.assignments.iter().any(|a| a.id() == assignment.id()) {
            return Err(EntityStoreError::duplicate(format!(
                "assignment {}",
                assignment.id()
            )));
        }
        records.assignments.push(assignment.clone());
        Ok(())
    }
}
