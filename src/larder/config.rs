use crate::error::{LarderError, Result};
use crate::model::CookingUnit;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for larder, stored in `<data-dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LarderConfig {
    /// Unit assumed for ingredient specs that don't name one
    /// (e.g. `flour:200` becomes 200 g when this is set to `g`).
    #[serde(default)]
    pub default_unit: CookingUnit,
}

impl LarderConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LarderError::Io)?;
        let config: LarderConfig =
            serde_json::from_str(&content).map_err(LarderError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LarderError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LarderError::Serialization)?;
        fs::write(config_path, content).map_err(LarderError::Io)?;
        Ok(())
    }
}
