//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `routefinder.toml` (or an explicit file), then `ROUTEFINDER_*` environment
//! variables. Nested keys use a double underscore, for example
//! `ROUTEFINDER_ROUTING__BASE_URL`.

use std::path::Path;

use application::error::ApplicationError;
use application::ports::ArtifactStyle;
use application::services::SuggestionConfig;
use integration_geocoding::PhotonConfig;
use integration_routing::RoutingConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::telemetry::TelemetryConfig;

/// Base name of the optional configuration file in the working directory
pub const CONFIG_FILE_NAME: &str = "routefinder";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "ROUTEFINDER";

/// Effective configuration for every layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address autocomplete service
    #[serde(default)]
    pub geocoding: PhotonConfig,

    /// Route computation back end
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Suggestion controller settings
    #[serde(default)]
    pub suggestions: SuggestionConfig,

    /// Route artifact style
    #[serde(default)]
    pub map: ArtifactStyle,

    /// Log output
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from the optional default file and environment
    ///
    /// # Errors
    ///
    /// Returns an error when a source cannot be read or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name(CONFIG_FILE_NAME).required(false))
    }

    /// Load configuration from `path` (required) and environment
    ///
    /// # Errors
    ///
    /// Returns an error when the file is missing or a source cannot be
    /// deserialized.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app: Self = config.try_deserialize()?;
        debug!(
            geocoding = %app.geocoding.base_url,
            routing = %app.routing.base_url,
            debounce_ms = app.suggestions.debounce_ms,
            "Configuration loaded"
        );
        Ok(app)
    }

    /// Check every section
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` naming the first bad section.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        self.geocoding
            .validate()
            .map_err(|e| ApplicationError::Configuration(format!("geocoding: {e}")))?;
        self.routing
            .validate()
            .map_err(|e| ApplicationError::Configuration(format!("routing: {e}")))?;

        if self.suggestions.debounce_ms > 5_000 {
            return Err(ApplicationError::Configuration(
                "suggestions: debounce_ms must be 5000 or less".to_string(),
            ));
        }

        if self.map.stroke_width == 0 {
            return Err(ApplicationError::Configuration(
                "map: stroke_width must be greater than 0".to_string(),
            ));
        }
        if self.map.stroke_color.trim().is_empty() {
            return Err(ApplicationError::Configuration(
                "map: stroke_color must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Render the effective configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.geocoding.base_url, "https://photon.komoot.io");
        assert_eq!(config.routing.base_url, "http://localhost:5000");
        assert_eq!(config.suggestions.debounce_ms, 100);
        assert_eq!(config.map.stroke_color, "red");
        assert_eq!(config.map.stroke_width, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let file = write_config(
            r#"
            [routing]
            base_url = "https://routes.example.org"
            timeout_secs = 12

            [suggestions]
            debounce_ms = 250

            [map]
            stroke_color = "blue"
            "#,
        );

        let config = AppConfig::load_from(file.path()).unwrap();

        assert_eq!(config.routing.base_url, "https://routes.example.org");
        assert_eq!(config.routing.timeout_secs, 12);
        assert_eq!(config.suggestions.debounce_ms, 250);
        assert_eq!(config.map.stroke_color, "blue");
        assert_eq!(config.map.stroke_width, 4);
        assert_eq!(config.geocoding.language, "en");
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_from(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_load_from_invalid_type_fails() {
        let file = write_config("[suggestions]\ndebounce_ms = \"soon\"\n");
        assert!(AppConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn test_validate_reports_section() {
        let mut config = AppConfig::default();
        config.routing.base_url = "nowhere".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("routing"));

        let mut config = AppConfig::default();
        config.map.stroke_width = 0;
        assert!(config.validate().unwrap_err().to_string().contains("map"));

        let mut config = AppConfig::default();
        config.suggestions.debounce_ms = 60_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_to_toml_round_trips() {
        let mut config = AppConfig::default();
        config.map.stroke_color = "green".to_string();

        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("[geocoding]"));
        assert!(rendered.contains("stroke_color = \"green\""));

        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.map.stroke_color, "green");
        assert_eq!(parsed.routing.base_url, config.routing.base_url);
    }
}
