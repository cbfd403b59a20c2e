use crate::error::{RecipeBoxError, Result};
use crate::image::MAX_IMAGE_BYTES;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const CONFIG_DIR_ENV: &str = "RECIPEBOX_CONFIG_DIR";

/// Settings for recipebox, stored in `config.json`. Recipes are never written here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeBoxConfig {
    /// Largest accepted image upload, in bytes
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,

    /// Start each session with the sample recipes
    #[serde(default = "default_load_samples")]
    pub load_samples: bool,
}

fn default_max_image_bytes() -> u64 {
    MAX_IMAGE_BYTES
}

fn default_load_samples() -> bool {
    true
}

impl Default for RecipeBoxConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: default_max_image_bytes(),
            load_samples: default_load_samples(),
        }
    }
}

impl RecipeBoxConfig {
    pub const KEYS: &'static [&'static str] = &["max-image-bytes", "load-samples"];

    /// `$RECIPEBOX_CONFIG_DIR`, else the platform config directory.
    pub fn default_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        directories::ProjectDirs::from("com", "recipebox", "recipebox")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| RecipeBoxError::Config("Could not determine config dir".to_string()))
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "max-image-bytes" => Some(self.max_image_bytes.to_string()),
            "load-samples" => Some(self.load_samples.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "max-image-bytes" => {
                let bytes: u64 = value.trim().parse().map_err(|_| {
                    RecipeBoxError::Config(format!(
                        "max-image-bytes must be a number, got '{}'",
                        value
                    ))
                })?;
                if bytes == 0 {
                    return Err(RecipeBoxError::Config(
                        "max-image-bytes must be greater than zero".to_string(),
                    ));
                }
                self.max_image_bytes = bytes;
            }
            "load-samples" => {
                self.load_samples = match value.trim().to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => {
                        return Err(RecipeBoxError::Config(format!(
                            "load-samples must be true or false, got '{}'",
                            value
                        )))
                    }
                };
            }
            other => {
                return Err(RecipeBoxError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}
