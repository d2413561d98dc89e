use crate::domain::error::DomainError;
use crate::domain::values::month::Month;
use crate::domain::values::query::QueryDefaults;
use crate::infrastructure::seed::DEFAULT_SEED_URL;
use std::net::SocketAddr;

/// Process configuration, read from `SALESCOPE_*` environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// `SALESCOPE_DB`, the SQLite database path.
    pub db_path: String,
    /// `SALESCOPE_BIND`, the HTTP listen address.
    pub bind_address: SocketAddr,
    /// `SALESCOPE_SEED_URL`, where `init` downloads seed data from.
    pub seed_url: String,
    /// `SALESCOPE_DEFAULT_MONTH` and `SALESCOPE_PER_PAGE`.
    pub defaults: QueryDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: "./salescope.db".into(),
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            seed_url: DEFAULT_SEED_URL.into(),
            defaults: QueryDefaults::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let mut config = Config::default();

        if let Some(db_path) = lookup("SALESCOPE_DB") {
            config.db_path = db_path;
        }
        if let Some(bind) = lookup("SALESCOPE_BIND") {
            config.bind_address = bind
                .parse()
                .map_err(|e| DomainError::Config(format!("SALESCOPE_BIND '{bind}': {e}")))?;
        }
        if let Some(url) = lookup("SALESCOPE_SEED_URL") {
            config.seed_url = url;
        }
        if let Some(month) = lookup("SALESCOPE_DEFAULT_MONTH") {
            config.defaults.month = month
                .parse::<Month>()
                .map_err(|e| DomainError::Config(format!("SALESCOPE_DEFAULT_MONTH: {e}")))?;
        }
        if let Some(per_page) = lookup("SALESCOPE_PER_PAGE") {
            config.defaults.per_page = per_page
                .parse::<u64>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    DomainError::Config(format!(
                        "SALESCOPE_PER_PAGE must be a positive integer, got '{per_page}'"
                    ))
                })?;
        }

        Ok(config)
    }
}
