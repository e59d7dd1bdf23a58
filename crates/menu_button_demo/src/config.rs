//! Contains [DemoConfig], the settings that can be loaded from a JSON file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use egui::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use menu_button::MenuButtonConfig;

/// The size of the window when nothing else was asked for.
pub const DEFAULT_WINDOW_SIZE: Vec2 = Vec2::new(640.0, 420.0);

/// The smallest the window can get.
pub const MIN_WINDOW_SIZE: Vec2 = Vec2::new(360.0, 240.0);

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Applied to every menu button in the window.
    #[serde(default)]
    pub menu: MenuButtonConfig,
    #[serde(default = "DemoConfig::default_window_size")]
    pub window_size: Vec2,
}

impl DemoConfig {
    #[inline(always)]
    const fn default_window_size() -> Vec2 {
        DEFAULT_WINDOW_SIZE
    }

    /// Read a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;

        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            menu: MenuButtonConfig::default(),
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't read config file `{}`: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Invalid config file `{}`: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
