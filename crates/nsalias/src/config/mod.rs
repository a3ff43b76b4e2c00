pub mod schema;

use crate::{Error, ThisError, log, log::Topic};
use schema::{ConfigSchemaError, Validate};
use std::sync::{Arc, OnceLock};

pub use schema::{AliasConfig, ConfigModel, ResolverConfig};

//
// CONFIG
//
// Process-wide, initialize-once. Loader construction takes a &ConfigModel
// directly; the global handle exists for embedders that configure once at
// startup and wire loaders from many places.
//

static CONFIG: OnceLock<Arc<ConfigModel>> = OnceLock::new();

/// Errors related to configuration lifecycle and parsing.
#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("config has already been initialized")]
    AlreadyInitialized,

    #[error("config has not been initialized")]
    NotInitialized,

    /// TOML could not be parsed into the expected structure.
    #[error("toml error: {0}")]
    CannotParseToml(String),

    /// Wrapper for data schema-level errors.
    #[error(transparent)]
    ConfigSchema(#[from] ConfigSchemaError),
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::invalid(err.to_string())
    }
}

///
/// Config
///

pub struct Config {}

impl Config {
    pub fn get() -> Result<Arc<ConfigModel>, Error> {
        if let Some(config) = CONFIG.get() {
            return Ok(config.clone());
        }

        #[cfg(test)]
        {
            Ok(Self::init_for_tests())
        }

        #[cfg(not(test))]
        {
            Err(ConfigError::NotInitialized.into())
        }
    }

    #[must_use]
    pub fn try_get() -> Option<Arc<ConfigModel>> {
        if let Some(config) = CONFIG.get() {
            return Some(config.clone());
        }

        #[cfg(test)]
        {
            Some(Self::init_for_tests())
        }

        #[cfg(not(test))]
        {
            None
        }
    }

    /// Initialize the global configuration from a TOML string.
    pub fn init_from_toml(config_str: &str) -> Result<(), ConfigError> {
        let config: ConfigModel =
            toml::from_str(config_str).map_err(|e| ConfigError::CannotParseToml(e.to_string()))?;

        // validate
        config.validate()?;

        log!(
            Topic::Config,
            Ok,
            "⚙️ config.init: aliasing {} -> {}",
            config.alias.source,
            config.alias.target,
        );

        CONFIG
            .set(Arc::new(config))
            .map_err(|_| ConfigError::AlreadyInitialized)
    }

    #[cfg(test)]
    fn init_for_tests() -> Arc<ConfigModel> {
        CONFIG
            .get_or_init(|| Arc::new(ConfigModel::default()))
            .clone()
    }
}

///
/// TESTS
///
