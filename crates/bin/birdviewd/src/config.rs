//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `birdview.toml` in the working directory, or the file named by
//! `BIRDVIEW_CONFIG`. Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use birdview_domain::error::SettingsError;
use birdview_domain::settings::{
    AudioSettings, BirdNetSettings, DashboardSettings, LocaleSettings, Settings, SpeciesSettings,
};

/// Config file used when `BIRDVIEW_CONFIG` is not set.
pub const DEFAULT_CONFIG_FILE: &str = "birdview.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Analyzer options shown on the main settings panel.
    pub birdnet: BirdNetSettings,
    /// Locale selection.
    pub locale: LocaleSettings,
    /// Audio capture and export.
    pub audio: AudioSettings,
    /// Dashboard display options.
    pub dashboard: DashboardSettings,
    /// Species filters and overrides.
    pub species: SpeciesSettings,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Path of the config file to load.
#[must_use]
pub fn config_path() -> PathBuf {
    std::env::var("BIRDVIEW_CONFIG")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from)
}

impl Config {
    /// Load configuration from `path` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_file(path)?.finish()
    }

    /// Load configuration from a file that must exist and have content.
    ///
    /// Unlike [`Config::load`], a missing or empty file is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Empty`] if it has no content, and the same errors as
    /// [`Config::load`] otherwise.
    pub fn load_existing(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Err(ConfigError::Empty);
        }
        toml::from_str::<Self>(&content)?.finish()
    }

    fn finish(mut self) -> Result<Self, ConfigError> {
        self.apply_env_overrides();
        self.validate()?;
        Ok(self)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("BIRDVIEW_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("BIRDVIEW_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("BIRDVIEW_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("BIRDVIEW_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        self.settings().validate()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Build the settings snapshot handed to the rendering layer.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings {
            birdnet: self.birdnet.clone(),
            locale: self.locale.clone(),
            audio: self.audio.clone(),
            dashboard: self.dashboard.clone(),
            species: self.species.clone(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "birdviewd=info,birdview=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// The file exists but holds no configuration.
    #[error("config file is empty")]
    Empty,
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// The dashboard settings are inconsistent.
    #[error("invalid settings")]
    Settings(#[from] SettingsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.locale.active, "en");
        assert_eq!(config.dashboard.summary_limit, 30);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [logging]
            filter = 'debug'

            [birdnet]
            threshold = 0.7
            latitude = 60.17
            longitude = 24.94

            [locale]
            active = 'fi'
            available = ['fi', 'sv', 'en']

            [audio]
            source = 'hw:1,0'

            [audio.export]
            enabled = true

            [dashboard]
            summary_limit = 12

            [dashboard.thumbnails]
            summary = true

            [species]
            include = ['Eurasian Pygmy Owl']
            exclude = ['Human']

            [species.config.'Black Woodpecker']
            threshold = 0.5
            interval = 300
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.filter, "debug");

        let settings = config.settings();
        assert!((settings.birdnet.threshold - 0.7).abs() < f64::EPSILON);
        assert_eq!(settings.locale.available, vec!["fi", "sv", "en"]);
        assert_eq!(settings.audio.source, "hw:1,0");
        assert!(settings.audio.export.enabled);
        assert_eq!(settings.audio.export.format, "wav");
        assert_eq!(settings.dashboard.summary_limit, 12);
        assert!(settings.dashboard.thumbnails.summary);
        assert!(settings.dashboard.thumbnails.recent);
        assert_eq!(settings.species.include, vec!["Eurasian Pygmy Owl"]);
        assert_eq!(
            settings.species.config["Black Woodpecker"].interval,
            Some(300)
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file(Path::new("nonexistent.toml")).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_require_existing_file_on_strict_load() {
        let result = Config::load_existing(Path::new("nonexistent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn should_reject_empty_file_on_strict_load() {
        let path = std::env::temp_dir().join(format!(
            "birdview-strict-empty-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "  \n").unwrap();

        let result = Config::load_existing(&path);

        assert!(matches!(result, Err(ConfigError::Empty)));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_inconsistent_settings() {
        let mut config = Config::default();
        config.locale.active = "xx".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Settings(SettingsError::UnknownActiveLocale(_)))
        ));
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn should_format_custom_bind_addr() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 3000
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.settings(), Settings::default());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
