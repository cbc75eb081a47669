//! Startup seeding orchestration.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::ports::EntityRepository;
use crate::domain::{
    ExampleDataSeedOutcome, ExampleDataSeeder, ExampleDataSeedingError, IdGenerator,
};
use crate::example_data::config::ExampleDataSettings;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Roster generation or persistence failed.
    #[error("example data seeding error: {0}")]
    Seeding(#[from] ExampleDataSeedingError),
}

/// Apply example data on startup when enabled.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use homework::domain::IdGenerator;
/// use homework::example_data::{ExampleDataSettings, seed_example_data_on_startup};
/// use homework::outbound::memory::InMemoryEntityStore;
/// use mockable::DefaultClock;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let clock = Arc::new(DefaultClock);
/// let outcome = seed_example_data_on_startup(
///     &ExampleDataSettings { enabled: false },
///     Arc::new(InMemoryEntityStore::new()),
///     clock.clone(),
///     Arc::new(IdGenerator::new(clock)),
/// )
/// .await?;
/// assert!(outcome.is_none());
/// # Ok(())
/// # }
/// ```
pub async fn seed_example_data_on_startup<R>(
    settings: &ExampleDataSettings,
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
    ids: Arc<IdGenerator>,
) -> Result<Option<ExampleDataSeedOutcome>, StartupSeedingError>
where
    R: EntityRepository,
{
    if !settings.is_enabled() {
        warn!(
            reason = "EXAMPLE_DATA_ENABLED=false",
            "example data seeding skipped; the store starts empty"
        );
        return Ok(None);
    }

    let outcome = ExampleDataSeeder::new(repository, clock, ids).seed().await?;
    info!(
        user_count = outcome.user_count,
        homework_count = outcome.homework_count,
        assignment_count = outcome.assignment_count,
        "example data seeding applied"
    );
    Ok(Some(outcome))
}
