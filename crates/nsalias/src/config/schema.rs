use crate::{Error, NamespaceMapping, ThisError, config::ConfigError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

///
/// ConfigSchemaError
///

#[derive(Debug, ThisError)]
pub enum ConfigSchemaError {
    #[error("validation error: {0}")]
    ValidationError(String),
}

impl From<ConfigSchemaError> for Error {
    fn from(err: ConfigSchemaError) -> Self {
        ConfigError::from(err).into()
    }
}

///
/// Validate
///

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigSchemaError>;
}

///
/// ConfigModel
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigModel {
    #[serde(default)]
    pub alias: AliasConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl Validate for ConfigModel {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        self.alias.validate()?;
        self.resolver.validate()?;

        Ok(())
    }
}

///
/// AliasConfig
/// The (source, target) namespace pair the loader aliases.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AliasConfig {
    #[serde(default = "default_source")]
    pub source: String,

    #[serde(default = "default_target")]
    pub target: String,
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            target: default_target(),
        }
    }
}

impl Validate for AliasConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        NamespaceMapping::new(&self.source, &self.target)
            .map(|_| ())
            .map_err(|err| ConfigSchemaError::ValidationError(err.to_string()))
    }
}

fn default_source() -> String {
    NamespaceMapping::DEFAULT_SOURCE.to_string()
}

fn default_target() -> String {
    NamespaceMapping::DEFAULT_TARGET.to_string()
}

///
/// ResolverConfig
/// Search roots and file extension for the directory resolver.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    #[serde(default = "default_roots")]
    pub roots: Vec<PathBuf>,

    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            extension: default_extension(),
        }
    }
}

impl Validate for ResolverConfig {
    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.extension.is_empty() {
            return Err(ConfigSchemaError::ValidationError(
                "resolver extension is empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("units")]
}

fn default_extension() -> String {
    "unit".to_string()
}

///
/// TESTS
///
