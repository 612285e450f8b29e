//! Configuration management for QREF.
//!
//! Parses `qref.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "qref.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override the default language section.
    pub default_language: Option<String>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Explicitly requested config file does not exist.
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// Config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field failed validation.
    #[error("invalid config: {0}")]
    Validation(String),
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Viewer configuration.
    pub viewer: ViewerConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
        }
    }
}

/// Viewer configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Language section shown when none is selected.
    pub default_language: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            default_language: "c".to_owned(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// If `path` is given, that file must exist. Otherwise `qref.toml` is
    /// discovered by walking up from the current directory; when none is
    /// found, defaults apply. CLI settings override loaded values last.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for a missing explicit path,
    /// `ConfigError::Io`/`ConfigError::Parse` for unreadable or malformed
    /// files, and `ConfigError::Validation` for invalid field values.
    pub fn load(path: Option<&Path>, cli: Option<&CliSettings>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::load_from_file(path)?
            }
            None => match Self::discover_config() {
                Some(found) => Self::load_from_file(&found)?,
                None => Self::default(),
            },
        };

        if let Some(cli) = cli {
            config.apply_cli_settings(cli);
        }

        config.validate()?;
        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&text)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Walk up from the current directory looking for `qref.toml`.
    fn discover_config() -> Option<PathBuf> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let candidate = dir.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    fn apply_cli_settings(&mut self, cli: &CliSettings) {
        if let Some(host) = &cli.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(language) = &cli.default_language {
            self.viewer.default_language.clone_from(language);
        }
    }

    /// Validate field values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::Validation("server.host cannot be empty".into()));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation("server.port cannot be 0".into()));
        }
        if self.viewer.default_language.is_empty() {
            return Err(ConfigError::Validation(
                "viewer.default_language cannot be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use pretty_assertions::assert_eq;

    use super::*;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7878);
        assert_eq!(config.viewer.default_language, "c");
    }

    #[test]
    fn test_load_from_file() {
        let (_dir, path) = write_config(
            "[server]\nhost = \"0.0.0.0\"\nport = 9000\n\n[viewer]\ndefault_language = \"rust\"\n",
        );

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.viewer.default_language, "rust");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let (_dir, path) = write_config("[server]\nport = 9000\n");

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.viewer.default_language, "c");
    }

    #[test]
    fn test_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/nonexistent/qref.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_malformed_file() {
        let (_dir, path) = write_config("not valid toml [[");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_cli_settings_override() {
        let (_dir, path) = write_config("[server]\nport = 9000\n");
        let cli = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            port: Some(8080),
            default_language: None,
        };

        let config = Config::load(Some(&path), Some(&cli)).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_validation_rejects_port_zero() {
        let (_dir, path) = write_config("[server]\nport = 0\n");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validation_rejects_empty_language() {
        let (_dir, path) = write_config("[viewer]\ndefault_language = \"\"\n");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
