use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Errors
///
/// * `ConfigError::Io` - the file cannot be read
/// * `ConfigError::Parse` - the content is not valid TOML
/// * `ConfigError::Validation` - the parsed configuration is inconsistent
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}
