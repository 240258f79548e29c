use crate::data::SaveErrorPolicy;
use crate::error::{ManipulatorError, Result};
use crate::logging::LoggingConfig;
use crate::processing::{ResizeFilter, ThumbnailSize};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "./lena.png";
pub const DEFAULT_OUTPUT_DIR: &str = "./";

/// Everything a pipeline run needs; the CLI overrides `input` and `output`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub thumbnail: ThumbnailConfig,
    pub save: SaveConfig,
    pub logging: LoggingConfig,
}

/// Thumbnail width and height go together: set both or neither.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub filter: ResizeFilter,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveConfig {
    pub on_error: SaveErrorPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            thumbnail: ThumbnailConfig::default(),
            save: SaveConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ThumbnailConfig {
    pub fn size(&self) -> Result<ThumbnailSize> {
        ThumbnailSize::from_options(self.width, self.height)
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ManipulatorError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;

        if content.trim_start().starts_with('{') {
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(toml::from_str(&content)?)
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P, format: ConfigFormat) -> Result<()> {
        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| ManipulatorError::ConfigParse(e.to_string()))?,
        };

        let path = path.as_ref();
        fs::write(path, content).map_err(|source| ManipulatorError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match self.thumbnail.size() {
            Ok(ThumbnailSize::Explicit { width, height }) if width == 0 || height == 0 => {
                errors.push(format!(
                    "Thumbnail size must be positive, got {}x{}",
                    width, height
                ));
            }
            Ok(_) => {}
            Err(e) => errors.push(e.to_string()),
        }

        if self.input.as_os_str().is_empty() {
            errors.push("Input path must not be empty".to_string());
        }

        if let Err(e) = self.logging.validate() {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ConfigFormat {
    Json,
    Toml,
}

/// Load `path` if given, otherwise the defaults; the result is validated either way.
pub fn load_config_or_default(config_path: Option<&Path>) -> Result<Config> {
    let config = match config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    config.validate().map_err(ManipulatorError::InvalidConfig)?;
    Ok(config)
}
