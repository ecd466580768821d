use crate::config::types::Config;
use crate::ConfigError;

/// Validates a parsed configuration
///
/// Catches inconsistencies TOML parsing cannot express: identical seed
/// columns and empty paths.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.seeds.table_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "seeds.table-path must not be empty".to_string(),
        ));
    }

    if config.seeds.source_column == config.seeds.target_column {
        return Err(ConfigError::Validation(format!(
            "seeds.source-column and seeds.target-column must differ (both are {})",
            config.seeds.source_column
        )));
    }

    if config.output.corpus_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output.corpus-path must not be empty".to_string(),
        ));
    }

    if config.output.checkpoint_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output.checkpoint-path must not be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{OutputConfig, SeedsConfig};

    fn valid_config() -> Config {
        Config {
            seeds: SeedsConfig {
                table_path: "seeds.csv".to_string(),
                source_column: 0,
                target_column: 1,
                skip_header: true,
            },
            output: OutputConfig {
                corpus_path: "corpus.csv".to_string(),
                checkpoint_path: "crawl.ckpt".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_identical_columns_rejected() {
        let mut config = valid_config();
        config.seeds.target_column = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_table_path_rejected() {
        let mut config = valid_config();
        config.seeds.table_path = "  ".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_corpus_path_rejected() {
        let mut config = valid_config();
        config.output.corpus_path = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_checkpoint_path_rejected() {
        let mut config = valid_config();
        config.output.checkpoint_path = String::new();
        assert!(validate(&config).is_err());
    }
}
