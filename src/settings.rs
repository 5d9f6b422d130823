use std::env;
use std::fs;
use std::path::PathBuf;

use log::LevelFilter;
use serde_json::Value;

use crate::error::Error;

pub const SETTINGS_ENV: &str = "PERCOLATION_SETTINGS";
const DEFAULT_ASSETS_DIR: &str = "test_inputs";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub assets_dir: PathBuf,
    // None seeds from OS entropy
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            seed: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Settings {
    /// Reads `ASSETS_DIR`, `SEED` and `LOG_LEVEL`; absent keys keep their defaults.
    pub fn from_json(json: &Value) -> Result<Settings, Error> {
        let mut settings = Settings::default();
        if !json.is_object() {
            return Err(Error::Config("settings must be a JSON object".to_string()));
        }

        if let Some(dir) = json.get("ASSETS_DIR") {
            let dir = dir.as_str()
                .ok_or_else(|| Error::Config("ASSETS_DIR must be a string".to_string()))?;
            settings.assets_dir = PathBuf::from(dir);
        }
        if let Some(seed) = json.get("SEED") {
            if !seed.is_null() {
                settings.seed = Some(seed.as_u64()
                    .ok_or_else(|| Error::Config("SEED must be a non-negative integer".to_string()))?);
            }
        }
        if let Some(level) = json.get("LOG_LEVEL") {
            let level = level.as_str()
                .ok_or_else(|| Error::Config("LOG_LEVEL must be a string".to_string()))?;
            settings.log_level = level.parse::<LevelFilter>()
                .map_err(|_| Error::Config(format!("unknown LOG_LEVEL '{}'", level)))?;
        }
        Ok(settings)
    }

    pub fn parse(text: &str) -> Result<Settings, Error> {
        let json: Value = serde_json::from_str(text)?;
        Settings::from_json(&json)
    }

    /// Loads the file named by `PERCOLATION_SETTINGS`, or defaults if it is unset.
    pub fn load() -> Result<Settings, Error> {
        match env::var_os(SETTINGS_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                let text = fs::read_to_string(&path)
                    .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
                Settings::parse(&text)
            },
            None => Ok(Settings::default()),
        }
    }

    pub fn input_path(&self, filename: &str) -> PathBuf {
        self.assets_dir.join(filename)
    }
}
