use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Environment variable that relocates the configuration directory.
pub const CONFIG_DIR_ENV: &str = "RBREAKSCHEDULER_CONFIG_DIR";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Break schedule CSV. Relative paths resolve against the working directory.
    #[serde(default = "default_schedule_file")]
    pub schedule_file: String,
    /// Notes log CSV.
    #[serde(default = "default_notes_file")]
    pub notes_file: String,
    /// Validate times and dates of imported lines.
    #[serde(default)]
    pub strict_import: bool,
}

fn default_schedule_file() -> String {
    "break_schedule.csv".to_string()
}
fn default_notes_file() -> String {
    "notes.csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schedule_file: default_schedule_file(),
            notes_file: default_notes_file(),
            strict_import: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rbreakscheduler")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rbreakscheduler")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbreakscheduler.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write this configuration to the config file, creating its directory.
    pub fn save(&self) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;

        let path = Self::config_file();
        fs::write(&path, serde_yaml::to_string(self)?)?;

        Ok(path)
    }

    pub fn schedule_path(&self) -> PathBuf {
        expand_tilde(&self.schedule_file)
    }

    pub fn notes_path(&self) -> PathBuf {
        expand_tilde(&self.notes_file)
    }
}
