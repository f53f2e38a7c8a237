use crate::errors::{AppError, AppResult};
use crate::store::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Data file. Relative paths resolve against the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("prodtracker")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".prodtracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("prodtracker.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))
    }

    /// Data file path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        crate::utils::path::expand_tilde(&self.data_file)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration (unless `is_test`) and create an
    /// empty data file if none exists yet.
    pub fn init_all(data_file: Option<String>, is_test: bool) -> AppResult<Self> {
        let config = Config {
            data_file: data_file.unwrap_or_else(default_data_file),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            fs::write(Self::config_file(), config.to_yaml()?)?;
        }

        let data_path = config.data_path();
        if !data_path.exists() {
            fs::File::create(&data_path)?;
        }

        Ok(config)
    }
}
