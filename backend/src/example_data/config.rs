//! Example data configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Configuration values controlling example data seeding at startup.
///
/// Seeding is on unless `EXAMPLE_DATA_ENABLED=false`: the service has no
/// route that creates users or assignments, so an unseeded store can only
/// answer with empty lists and 404s.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXAMPLE_DATA")]
pub struct ExampleDataSettings {
    /// Seed the demo classroom into the entity store on startup.
    #[ortho_config(default = true)]
    pub enabled: bool,
}

impl Default for ExampleDataSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl ExampleDataSettings {
    /// Whether startup seeding should run.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
