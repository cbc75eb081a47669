//! Entity identifiers and their generator.
//!
//! Identifiers combine a millisecond timestamp with a random sub-millisecond
//! component: `timestamp_ms * 1000 + rand(0..1000)`. The timestamp dominates
//! the high-order digits so ids sort roughly chronologically, while the random
//! part keeps ids minted within the same millisecond apart. These ids are
//! lookup keys only and carry no security meaning.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use mockable::Clock;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Spread of the random low-order component.
pub const ID_RANDOM_SPAN: u64 = 1000;

/// Stable identifier shared by users, homework and assignments.
///
/// Serialised as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    /// Wrap a raw identifier value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EntityId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

/// Capability tag for anything addressable by an [`EntityId`].
pub trait Identified {
    /// Identifier of this entity.
    fn id(&self) -> EntityId;
}

/// Mints [`EntityId`] values.
///
/// The timestamp component never moves backwards, even when the wall clock
/// does; a regressing clock reuses the last timestamp seen.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use homework::domain::IdGenerator;
/// use mockable::DefaultClock;
///
/// let ids = IdGenerator::new(Arc::new(DefaultClock));
/// let first = ids.next();
/// let second = ids.next();
/// assert_ne!(first, second);
/// ```
pub struct IdGenerator {
    clock: Arc<dyn Clock>,
    last_millis: AtomicI64,
}

impl IdGenerator {
    /// Build a generator reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            last_millis: AtomicI64::new(0),
        }
    }

    /// Return a fresh identifier.
    pub fn next(&self) -> EntityId {
        let observed = self.clock.utc().timestamp_millis().max(0);
        let previous = self.last_millis.fetch_max(observed, Ordering::AcqRel);
        let millis = u64::try_from(previous.max(observed)).unwrap_or_default();
        let random = rand::thread_rng().gen_range(0..ID_RANDOM_SPAN);
        EntityId(millis.saturating_mul(ID_RANDOM_SPAN).saturating_add(random))
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdGenerator")
            .field("last_millis", &self.last_millis.load(Ordering::Acquire))
            .finish_non_exhaustive()
    }
}
