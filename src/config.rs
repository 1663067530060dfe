//! Configuration Module
//! Year bounds, table sources and window size, loaded from JSON or defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PHILLIPS_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "phillips.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("min_year {min_year} is after max_year {max_year}")]
    InvertedBounds { min_year: i32, max_year: i32 },
    #[error("Row label for {0} is empty")]
    EmptyRowLabel(&'static str),
}

/// First and last year covered by the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBounds {
    pub min_year: i32,
    pub max_year: i32,
}

impl YearBounds {
    pub const fn new(min_year: i32, max_year: i32) -> Self {
        Self { min_year, max_year }
    }

    /// Number of years in `min_year..=max_year`.
    pub fn year_count(&self) -> usize {
        (self.max_year - self.min_year + 1).max(0) as usize
    }
}

impl Default for YearBounds {
    fn default() -> Self {
        Self::new(1990, 2017)
    }
}

/// Where one series comes from and how it is labelled on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSource {
    pub path: PathBuf,
    pub row_label: String,
    pub axis_label: String,
}

impl SeriesSource {
    pub fn unemployment() -> Self {
        Self {
            path: PathBuf::from("unemployment_rates.xls"),
            row_label: "unemployment rate (%)".to_string(),
            axis_label: "unemployment rate".to_string(),
        }
    }

    pub fn inflation() -> Self {
        Self {
            path: PathBuf::from("inflation_rates.xls"),
            row_label: "consumer price inflation rate (%)".to_string(),
            axis_label: "inflation rate".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1400.0,
            height: 800.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub years: YearBounds,
    pub unemployment: SeriesSource,
    pub inflation: SeriesSource,
    pub window: WindowConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            years: YearBounds::default(),
            unemployment: SeriesSource::unemployment(),
            inflation: SeriesSource::inflation(),
            window: WindowConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read and validate a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config: `PHILLIPS_CONFIG` first, then `phillips.json` in
    /// the working directory, then the built-in defaults.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            let path = PathBuf::from(path);
            log::info!("Using config from ${CONFIG_ENV_VAR}: {}", path.display());
            return Self::from_file(&path);
        }

        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            log::info!("Using config {}", local.display());
            return Self::from_file(local);
        }

        log::debug!("No config file, using defaults");
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.years.min_year > self.years.max_year {
            return Err(ConfigError::InvertedBounds {
                min_year: self.years.min_year,
                max_year: self.years.max_year,
            });
        }
        if self.unemployment.row_label.trim().is_empty() {
            return Err(ConfigError::EmptyRowLabel("unemployment"));
        }
        if self.inflation.row_label.trim().is_empty() {
            return Err(ConfigError::EmptyRowLabel("inflation"));
        }
        Ok(())
    }
}
