use super::{default_config_path, DrillsConfig};
use crate::error::{DrillError, ErrorCode, ErrorExt};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Builds the effective configuration: defaults, then a TOML file, then the environment
pub struct ConfigLoader {
    explicit_path: Option<PathBuf>,
    fallback_path: Option<PathBuf>,
    read_env: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            explicit_path: None,
            fallback_path: default_config_path(),
            read_env: true,
        }
    }

    /// Use this file instead of the platform default; it must exist
    pub fn with_path(mut self, path: Option<PathBuf>) -> Self {
        self.explicit_path = path;
        self
    }

    /// Override the platform default lookup location
    pub fn with_fallback_path(mut self, path: Option<PathBuf>) -> Self {
        self.fallback_path = path;
        self
    }

    /// Skip `DRILLS_*` environment overrides
    pub fn without_env(mut self) -> Self {
        self.read_env = false;
        self
    }

    pub fn load(&self) -> Result<DrillsConfig, DrillError> {
        let mut config = match (&self.explicit_path, &self.fallback_path) {
            (Some(path), _) => {
                if !path.exists() {
                    return Err(DrillError::config_with_code(
                        ErrorCode::CONFIG_NOT_FOUND,
                        "configuration file not found",
                        Some(path.clone()),
                    ));
                }
                Self::load_file(path)?
            }
            (None, Some(path)) if path.is_file() => Self::load_file(path)?,
            _ => {
                debug!("No configuration file found, using defaults");
                DrillsConfig::new()
            }
        };

        if self.read_env {
            config.merge_env_vars()?;
        }

        config.validate()?;
        Ok(config)
    }

    fn load_file(path: &Path) -> Result<DrillsConfig, DrillError> {
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path).to_io_error(path)?;
        toml::from_str(&content).to_config_error(ErrorCode::CONFIG_INVALID_TOML, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_no_files_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = ConfigLoader::new()
            .with_fallback_path(Some(temp.path().join("absent.toml")))
            .without_env()
            .load()
            .unwrap();
        assert_eq!(config, DrillsConfig::default());
    }

    #[test]
    fn test_fallback_file_is_used_when_present() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("drills.toml");
        std::fs::write(&path, "output = \"json\"\n").unwrap();

        let config = ConfigLoader::new()
            .with_fallback_path(Some(path))
            .without_env()
            .load()
            .unwrap();
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let temp = TempDir::new().unwrap();
        let err = ConfigLoader::new()
            .with_path(Some(temp.path().join("missing.toml")))
            .without_env()
            .load()
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_NOT_FOUND);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_explicit_path_wins_over_fallback() {
        let temp = TempDir::new().unwrap();
        let explicit = temp.path().join("explicit.toml");
        let fallback = temp.path().join("fallback.toml");
        std::fs::write(&explicit, "[gearbox]\ntop_gear = 5\n").unwrap();
        std::fs::write(&fallback, "[gearbox]\ntop_gear = 7\n").unwrap();

        let config = ConfigLoader::new()
            .with_path(Some(explicit))
            .with_fallback_path(Some(fallback))
            .without_env()
            .load()
            .unwrap();
        assert_eq!(config.gearbox.top_gear, 5);
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        std::fs::write(&path, "output = = json").unwrap();

        let err = ConfigLoader::new()
            .with_path(Some(path))
            .without_env()
            .load()
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_TOML);
        assert!(err.user_message().contains("broken.toml"));
    }

    #[test]
    fn test_loaded_values_are_validated() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("drills.toml");
        std::fs::write(&path, "[pick]\nfallback_min = 10\nfallback_max = 1\n").unwrap();

        let err = ConfigLoader::new()
            .with_path(Some(path))
            .without_env()
            .load()
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_VALUE);
    }
}
