use crate::Config;
use ron::{extensions::Extensions, Options};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use xdg::BaseDirectories;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("XDG error: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
    #[error("RON parsing error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config file '{0}' does not exist")]
    Missing(PathBuf),
    #[error("Unsupported config format: '{0}'")]
    UnsupportedFormat(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFileType {
    RonFile,
    TomlFile,
}

#[must_use]
pub fn check_file_type(path: impl AsRef<Path>) -> Option<ConfigFileType> {
    match path.as_ref().extension()?.to_str()? {
        "ron" => Some(ConfigFileType::RonFile),
        "toml" => Some(ConfigFileType::TomlFile),
        _ => None,
    }
}

/// Where `config.ron` lives, whether or not it exists.
///
/// # Errors
///
/// Fails if the XDG base directories cannot be determined.
pub fn get_default_path() -> Result<PathBuf, ConfigError> {
    let path = BaseDirectories::with_prefix("wmhint")?;
    Ok(path.get_config_home().join("config.ron"))
}

/// Load the config from `path`, or from the default location when `None`. A missing default
/// file is not an error and gives [`Config::default`]; a missing explicit path is.
///
/// # Errors
///
/// Fails if a file exists but cannot be read or parsed.
pub fn load_config_file(path: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = path {
        if !path.exists() {
            return Err(ConfigError::Missing(path.to_owned()));
        }
        return parse_config_file(path);
    }

    let config_ron = get_default_path()?;
    let config_toml = config_ron.with_extension("toml");
    if config_ron.exists() {
        parse_config_file(&config_ron)
    } else if config_toml.exists() {
        parse_config_file(&config_toml)
    } else {
        tracing::debug!("Config file not found. Using defaults.");
        Ok(Config::default())
    }
}

fn parse_config_file(path: &Path) -> Result<Config, ConfigError> {
    tracing::debug!("Loading config file '{}'", path.display());
    let contents = fs::read_to_string(path)?;
    match check_file_type(path) {
        Some(ConfigFileType::RonFile) => {
            let ron = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
            Ok(ron.from_str(&contents)?)
        }
        Some(ConfigFileType::TomlFile) => Ok(toml::from_str(&contents)?),
        None => Err(ConfigError::UnsupportedFormat(path.to_owned())),
    }
}
