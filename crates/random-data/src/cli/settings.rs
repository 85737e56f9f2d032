//! Generator settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use super::{CliError, OutputKind};

const DEFAULT_COUNT: usize = 1;
const DEFAULT_COUNTRY: &str = "US";

/// Settings controlling one generation batch.
///
/// Values come from `--flags`, `RANDOM_DATA_*` environment variables and
/// configuration files, in OrthoConfig's usual precedence.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RANDOM_DATA")]
pub struct GeneratorSettings {
    /// Seed for reproducible output; entropy is used when absent.
    pub seed: Option<u64>,
    /// Output kind, e.g. `profile` or `postal-code`.
    pub kind: Option<String>,
    /// Number of records to emit.
    pub count: Option<usize>,
    /// Country code used for postal codes.
    pub country: Option<String>,
    /// Pretty-print JSON records.
    #[ortho_config(default = false)]
    pub pretty: bool,
}

impl GeneratorSettings {
    /// Returns the configured output kind, defaulting to profiles.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::UnknownKind`] when the kind is not recognised.
    pub fn kind(&self) -> Result<OutputKind, CliError> {
        self.kind
            .as_deref()
            .map_or(Ok(OutputKind::Profile), str::parse)
    }

    /// Returns the configured record count, falling back to one.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_COUNT)
    }

    /// Returns the configured country code, falling back to `US`.
    #[must_use]
    pub fn country(&self) -> &str {
        self.country.as_deref().unwrap_or(DEFAULT_COUNTRY)
    }
}
