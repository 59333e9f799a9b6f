use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, ENV_PREFIX, ENV_SEPARATOR};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// What the driver does when a record fails to normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnError {
    /// Stop the run at the first failing record.
    #[default]
    Halt,
    /// Log the failure and continue with the next record.
    Skip,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Log label maps and unconsumed fields for every record.
    pub debug: bool,
    /// Write a header row before the first entry.
    pub header: bool,
    pub on_error: OnError,
}

impl Settings {
    /// ## Summary
    /// Returns a builder pre-populated with the default values for every key.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be set.
    pub fn defaults() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("export.debug", false)?
            .set_default("export.header", false)?
            .set_default("export.on_error", "halt")?)
    }

    /// ## Summary
    /// Loads settings from defaults, an optional TOML file and environment variables.
    /// Environment variables take precedence over file values.
    ///
    /// When `path` is `None` the file `vcf2csv.toml` in the working directory is
    /// used if it exists.
    ///
    /// ## Errors
    /// Returns an error if an explicit file is missing, if building the
    /// configuration or deserializing it fails, or if a value is invalid.
    pub fn load(path: Option<&Path>) -> CoreResult<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE_NAME).required(false),
        };

        let settings = Self::defaults()?
            // TOML file
            .add_source(file)
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values the deserializer cannot.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidConfiguration`] for an empty log level.
    pub fn validate(&self) -> CoreResult<()> {
        if self.logging.level.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables, a `.env` file and the optional
/// config file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(path: Option<&Path>) -> CoreResult<Settings> {
    if let Ok(env_file) = dotenvy::dotenv() {
        tracing::debug!(path = %env_file.display(), "Loaded .env file");
    }

    Settings::load(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> Settings {
        Settings::defaults()
            .unwrap()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test_log::test]
    fn defaults_apply_without_sources() {
        let settings = from_toml("");
        assert_eq!(settings.logging.level, "info");
        assert!(!settings.export.debug);
        assert!(!settings.export.header);
        assert_eq!(settings.export.on_error, OnError::Halt);
    }

    #[test]
    fn file_values_override_defaults() {
        let settings = from_toml(
            r#"
            [logging]
            level = "trace"

            [export]
            header = true
            on_error = "skip"
            "#,
        );
        assert_eq!(settings.logging.level, "trace");
        assert!(settings.export.header);
        assert_eq!(settings.export.on_error, OnError::Skip);
    }

    #[test]
    fn unknown_error_policy_is_rejected() {
        let result = Settings::defaults()
            .unwrap()
            .add_source(config::File::from_str(
                "[export]\non_error = \"retry\"",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize::<Settings>();
        assert!(result.is_err());
    }

    #[test]
    fn empty_log_level_is_invalid() {
        let settings = from_toml("[logging]\nlevel = \" \"");
        assert!(matches!(
            settings.validate(),
            Err(CoreError::InvalidConfiguration(_))
        ));
        assert!(from_toml("").validate().is_ok());
    }

    #[test]
    fn missing_explicit_file_fails() {
        let result = Settings::load(Some(Path::new("/nonexistent/vcf2csv.toml")));
        assert!(result.is_err());
    }
}
