use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::entities::grid::PAGE_SIZES;
use crate::domain::entities::query::DEFAULT_PAGE_SIZE;

pub const PRIMARY_COLORS: [&str; 14] = [
    "dark", "gray", "red", "pink", "grape", "violet", "indigo", "blue", "cyan", "green", "lime",
    "yellow", "orange", "teal",
];

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("unable to resolve config directory")]
    NoConfigDir,
    #[error("failed to access settings {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub color_scheme: ColorScheme,
    pub primary_color: String,
    /// Artificial delay of the dynamic grid's fetches.
    pub latency_ms: u64,
    pub default_page_size: usize,
    /// JSON array of users replacing the bundled dataset.
    pub dataset_path: Option<PathBuf>,
    /// Address applied on startup, e.g. `tab=dynamic&sort=age`.
    pub initial_query: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Light,
            primary_color: "blue".to_string(),
            latency_ms: 1000,
            default_page_size: DEFAULT_PAGE_SIZE,
            dataset_path: None,
            initial_query: None,
        }
    }
}

impl Settings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn page_size(&self) -> usize {
        if PAGE_SIZES.contains(&self.default_page_size) {
            self.default_page_size
        } else {
            DEFAULT_PAGE_SIZE
        }
    }

    pub fn primary_color(&self) -> &str {
        PRIMARY_COLORS
            .iter()
            .copied()
            .find(|color| *color == self.primary_color)
            .unwrap_or("blue")
    }
}

pub fn default_settings_path() -> Result<PathBuf, SettingsError> {
    let project_dirs =
        ProjectDirs::from("com", "usergrid", "usergrid").ok_or(SettingsError::NoConfigDir)?;
    Ok(project_dirs.config_dir().join("settings.json"))
}

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A missing file yields defaults.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Settings::default())
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        Ok(serde_json::from_str(&json)?)
    }

    pub fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(settings) => settings,
            Err(err) => {
                warn!(error = %err, "falling back to default settings");
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let io_error = |source| SettingsError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, json).map_err(io_error)?;
        info!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}
