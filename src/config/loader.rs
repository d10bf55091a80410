use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Looked up in order in the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["phaseload.toml", "phaseload.json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Picks the format from the file extension.
    pub(crate) fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some(ext) => Err(ConfigError::UnsupportedExtension {
                ext: ext.to_owned(),
            }),
            None => Err(ConfigError::MissingExtension),
        }
    }

    fn parse(self, path: &Path, content: &str) -> Result<ConfigFile, ConfigError> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|err| ConfigError::ParseToml {
                path: path.to_path_buf(),
                source: err,
            }),
            Self::Json => serde_json::from_str(content).map_err(|err| ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: err,
            }),
        }
    }
}

/// Reads the explicit `--config` file, or the first default file found in
/// the working directory. `Ok(None)` means no config applies.
///
/// # Errors
///
/// Returns an error when the chosen file cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> AppResult<Option<ConfigFile>> {
    let chosen = match path {
        Some(explicit) => Some(PathBuf::from(explicit)),
        None => default_config_path(Path::new(".")),
    };
    chosen
        .map(|config_path| load_config_file(&config_path))
        .transpose()
}

/// First default config file present in `dir`.
pub(crate) fn default_config_path(dir: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

pub(crate) fn load_config_file(path: &Path) -> AppResult<ConfigFile> {
    let format = ConfigFormat::from_path(path).map_err(AppError::config)?;
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    format.parse(path, &content).map_err(AppError::config)
}
