use std::env::var_os;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use log::debug;
use serde::Deserialize;
use thiserror::Error;
use phonepad_keypad::{KeyMap, KeyMapError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid key map: {0}")]
    KeyMap(#[from] KeyMapError),
}

#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct Config {
    /// Replacement characters for each digit key, one string per digit from `0` to `9`.
    #[serde(default)]
    pub keymap: Option<Vec<String>>,
}

impl Config {
    /// Gets the config file path from `PHONEPAD_CONFIG`, defaulting to `phonepad.json`.
    pub fn path() -> PathBuf {
        let config_str = var_os("PHONEPAD_CONFIG");
        let config_str: &OsStr = config_str.as_deref().unwrap_or(OsStr::new("phonepad.json"));
        PathBuf::from(config_str)
    }

    /// Loads the config from `config_path`, or the default config if there is no such file.
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            debug!("No config at {}, using default.", config_path.display());
            return Ok(Config::default());
        }

        let file = std::fs::File::open(config_path)?;
        let reader = std::io::BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        debug!("Config loaded from {}.", config_path.display());
        Ok(config)
    }

    /// Builds the key map this config selects.
    pub fn keymap(&self) -> Result<KeyMap, ConfigError> {
        match &self.keymap {
            Some(entries) => Ok(KeyMap::from_strs(entries)?),
            None => Ok(KeyMap::standard()),
        }
    }
}
