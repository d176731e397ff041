use crate::{
    error::{Error, Result},
    options::TaskOptions,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".phase-runner.json";

/// Tool locations and output directories, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    /// Where the package manager installs tool executables
    pub bin_dir: PathBuf,
    pub coverage_dir: PathBuf,
    pub docs_dir: PathBuf,
    pub dist_dir: PathBuf,
    pub watch_debounce_ms: u64,

    /// Options applied when the host supplies none of its own
    pub defaults: TaskOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bin_dir: PathBuf::from("node_modules/.bin"),
            coverage_dir: PathBuf::from("coverage"),
            docs_dir: PathBuf::from("docs"),
            dist_dir: PathBuf::from("dist"),
            watch_debounce_ms: 250,
            defaults: TaskOptions::default(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load the nearest config file above `start_path`, or fall back to defaults
    pub fn load_or_default(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::load_from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::TestType;
    use tempfile::TempDir;

    #[test]
    fn test_config_serialization() {
        let config = Config {
            coverage_dir: PathBuf::from(".coverage"),
            defaults: TaskOptions {
                test_type: TestType::Api,
                ..Default::default()
            },
            ..Default::default()
        };

        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = serde_json::from_str(r#"{ "dist_dir": "out" }"#).unwrap();
        assert_eq!(parsed.dist_dir, PathBuf::from("out"));
        assert_eq!(parsed.bin_dir, PathBuf::from("node_modules/.bin"));
        assert_eq!(parsed.watch_debounce_ms, 250);
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();

        let config_path = temp_dir.path().join("a").join(CONFIG_FILE_NAME);
        Config {
            docs_dir: PathBuf::from("api-docs"),
            ..Default::default()
        }
        .save_to_file(&config_path)
        .unwrap();

        assert_eq!(Config::find_config_file(&nested), Some(config_path));
        let loaded = Config::load_or_default(&nested).unwrap();
        assert_eq!(loaded.docs_dir, PathBuf::from("api-docs"));
    }

    #[test]
    fn test_serde_errors_convert_to_serialization_error() {
        let err: Error = serde_json::from_str::<Config>("[").unwrap_err().into();
        assert!(matches!(err, Error::SerializationError(_)));
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }
}
