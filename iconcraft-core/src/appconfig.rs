use crate::{
    rasterizer::{Filter, Kind},
    spec::Platform,
};
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct AppConfig {
    pub rasterizer: Kind,
    pub filter: Filter,
    /// `sips` executable; only consulted by the sips rasterizer.
    pub sips_binary: Option<PathBuf>,
    pub output: Output,

    /// path of the configuration file, if the configuration was loaded from a file
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            rasterizer: Kind::Builtin,
            filter: Filter::Lanczos3,
            sips_binary: None,
            output: Default::default(),
            source: None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Output {
    pub ios: PathBuf,
    pub android: PathBuf,
}

impl Default for Output {
    fn default() -> Self {
        Output {
            ios: Platform::Ios.default_output_dir().into(),
            android: Platform::Android.default_output_dir().into(),
        }
    }
}

impl Output {
    pub fn for_platform(&self, platform: Platform) -> &Path {
        match platform {
            Platform::Ios => &self.ios,
            Platform::Android => &self.android,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("invalid configuration string")]
    InvalidConfigString(String, #[source] eyre::Report),
    #[error("invalid configuration file {}", .0.display())]
    InvalidConfigFile(PathBuf, #[source] eyre::Report),
    #[error("i/o error reading configuration file {}", .0.display())]
    IoError(PathBuf, #[source] std::io::Error),
}

impl AppConfig {
    pub fn parse(s: &str) -> Result<AppConfig, ConfigLoadError> {
        toml::from_str(s).map_err(|e| ConfigLoadError::InvalidConfigString(s.to_owned(), e.into()))
    }

    pub fn parse_file(p: &Path) -> Result<AppConfig, ConfigLoadError> {
        let config_string =
            std::fs::read_to_string(p).map_err(|e| ConfigLoadError::IoError(p.to_owned(), e))?;
        let mut config: AppConfig = toml::from_str(&config_string)
            .map_err(|e| ConfigLoadError::InvalidConfigFile(p.to_owned(), e.into()))?;
        config.source = Some(p.to_owned());
        Ok(config)
    }
}
