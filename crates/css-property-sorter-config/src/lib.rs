use css_property_sorter_engine::{OrderingPolicy, SortMode, UnknownPlacement, UnterminatedPolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Per-project config file name, looked up from the working directory upwards.
pub const PROJECT_CONFIG_FILE: &str = ".css-property-sorter.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Property names in the order they should appear.
    pub custom_order: Vec<String>,
    #[serde(alias = "sortOrder")]
    pub sort_mode: SortMode,
    pub unknown_property_position: UnknownPlacement,
    /// Ask before rewriting a whole file.
    pub enable_confirm: bool,
    pub unterminated_declarations: UnterminatedPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            custom_order: Vec::new(),
            sort_mode: SortMode::default(),
            unknown_property_position: UnknownPlacement::default(),
            enable_confirm: true,
            unterminated_declarations: UnterminatedPolicy::default(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Finds the nearest project config in `dir` or one of its ancestors.
    pub fn discover_path<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
        dir.as_ref()
            .ancestors()
            .map(|d| d.join(PROJECT_CONFIG_FILE))
            .find(|candidate| candidate.is_file())
    }

    /// Loads the nearest project config, if there is one.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Option<Self>, ConfigError> {
        match Self::discover_path(dir) {
            Some(path) => Self::load_from_path(path),
            None => Ok(None),
        }
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/css-property-sorter");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and environment variables, leaving the path as is on failure.
    pub fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => PathBuf::from(expanded.as_ref()),
            Err(_) => path.to_path_buf(),
        }
    }

    pub fn policy(&self) -> OrderingPolicy {
        OrderingPolicy {
            custom_order: self.custom_order.clone(),
            sort_mode: self.sort_mode,
            unknown_placement: self.unknown_property_position,
            unterminated: self.unterminated_declarations,
        }
    }
}
