use crate::errors::{AppError, AppResult};
use crate::models::spreadsheet::{DEFAULT_LOCALE, DEFAULT_TIMEZONE, SpreadsheetSettings};
use crate::utils::date::parse_timezone;
use crate::utils::path::expand_tilde;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Target spreadsheet; required by `serve` and `add`.
    #[serde(default)]
    pub sheet_id: Option<String>,
    /// Service-account key file (JSON).
    #[serde(default = "default_credentials")]
    pub credentials: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_credentials() -> String {
    "service-account.json".to_string()
}
fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}
fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}
fn default_bind() -> String {
    "127.0.0.1:8501".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_id: None,
            credentials: default_credentials(),
            timezone: default_timezone(),
            locale: default_locale(),
            bind: default_bind(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".petlog")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("petlog.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// The configured spreadsheet id; a missing or blank value is a startup error.
    pub fn require_sheet_id(&self, path: &Path) -> AppResult<&str> {
        match self.sheet_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(AppError::MissingSheetId(path.display().to_string())),
        }
    }

    pub fn credentials_path(&self) -> PathBuf {
        expand_tilde(&self.credentials)
    }

    pub fn tz(&self) -> AppResult<Tz> {
        parse_timezone(&self.timezone)
    }

    pub fn settings(&self) -> SpreadsheetSettings {
        SpreadsheetSettings {
            timezone: self.timezone.clone(),
            locale: self.locale.clone(),
        }
    }

    /// List problems that would stop `serve`/`add` from working.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.sheet_id.as_deref().is_none_or(|s| s.trim().is_empty()) {
            problems.push("`sheet_id` is not set".to_string());
        }
        if !self.credentials_path().exists() {
            problems.push(format!(
                "credentials file '{}' not found",
                self.credentials_path().display()
            ));
        }
        if let Err(e) = self.tz() {
            problems.push(e.to_string());
        }
        if self.locale.trim().is_empty() {
            problems.push("`locale` is empty".to_string());
        }
        if self.bind.parse::<std::net::SocketAddr>().is_err() {
            problems.push(format!("`bind` is not a socket address: '{}'", self.bind));
        }

        problems
    }

    /// Initialize the configuration file. Existing files are kept unless `force`.
    pub fn init_all(path: &Path, template: &Config, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        template.save(path)?;
        Ok(true)
    }
}
