use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the sign-in sheet CSV (must have a "Timestamp" column)
    pub sheet_csv: String,
    /// URL of the club events page to scrape
    pub events_url: String,
    /// Daily run time for `watch`, as HH:MM
    #[serde(default = "default_schedule_time")]
    pub schedule_time: String,
}

fn default_schedule_time() -> String {
    "08:00".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_csv: "AI Club Attendance SS24.csv".to_string(),
            events_url: "https://www.msuaiclub.com/events".to_string(),
            schedule_time: default_schedule_time(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".clubtrack")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("clubtrack.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// `override_path` takes precedence over the standard location.
    pub fn load(override_path: Option<&str>) -> AppResult<Self> {
        let path = match override_path {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
        } else {
            Ok(Config::default())
        }
    }

    /// Write the default configuration to `path`, creating parent dirs.
    pub fn init_at(path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let yaml = serde_yaml::to_string(&Config::default())
            .map_err(|e| AppError::Config(e.to_string()))?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(())
    }

    /// Render the active configuration as YAML.
    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }
}
