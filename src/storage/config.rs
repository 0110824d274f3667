//! User profile and application configuration.

use crate::metrics::training_load::{Gender, TrainingLoadCalculator};
use crate::metrics::zones::HrZones;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Unit system preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Metric units (km/h, kg, km)
    #[default]
    Metric,
    /// Imperial units (mph, lbs, miles)
    Imperial,
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Units::Metric => write!(f, "Metric"),
            Units::Imperial => write!(f, "Imperial"),
        }
    }
}

const KM_TO_MILES: f64 = 0.621371;
const METERS_PER_MILE: f64 = 1609.344;

impl Units {
    /// Convert a canonical speed (m/s) to the display unit (km/h or mph).
    pub fn localize_speed(&self, meters_per_second: f64) -> f64 {
        let kmh = meters_per_second * 3.6;
        match self {
            Units::Metric => kmh,
            Units::Imperial => kmh * KM_TO_MILES,
        }
    }

    /// Convert a canonical pace (seconds per meter) to the display unit
    /// (minutes per km or minutes per mile).
    pub fn localize_pace(&self, seconds_per_meter: f64) -> f64 {
        match self {
            Units::Metric => seconds_per_meter * 1000.0 / 60.0,
            Units::Imperial => seconds_per_meter * METERS_PER_MILE / 60.0,
        }
    }

    /// Convert a canonical distance (meters) to the display unit (km or mi).
    pub fn localize_distance(&self, meters: f64) -> f64 {
        match self {
            Units::Metric => meters / 1000.0,
            Units::Imperial => meters / METERS_PER_MILE,
        }
    }

    /// Speed unit label.
    pub fn speed_label(&self) -> &'static str {
        match self {
            Units::Metric => "km/h",
            Units::Imperial => "mph",
        }
    }

    /// Pace unit label.
    pub fn pace_label(&self) -> &'static str {
        match self {
            Units::Metric => "min/km",
            Units::Imperial => "min/mi",
        }
    }
}

/// User profile with physiological data and preferences.
///
/// The profile is passed explicitly into every component that needs it;
/// there is no ambient settings state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Maximum heart rate in bpm
    pub max_hr: Option<u16>,
    /// Resting heart rate in bpm
    pub resting_hr: Option<u16>,
    /// Gender, for the training load exponent
    pub gender: Option<Gender>,
    /// Weight in kilograms
    pub weight_kg: f32,
    /// Customized zone boundary values, when the user has moved them
    pub zone_values: Option<[u16; 5]>,
    /// Unit preference
    pub units: Units,
    /// Profile creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Default for UserProfile {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: "Athlete".to_string(),
            max_hr: None,
            resting_hr: None,
            gender: None,
            weight_kg: 75.0,
            zone_values: None,
            units: Units::Metric,
            created_at: now,
            updated_at: now,
        }
    }
}

impl UserProfile {
    /// Create a new user profile with the given name.
    pub fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// Update heart rate bounds and drop customized zones that no longer fit.
    pub fn set_heart_rate(&mut self, max_hr: Option<u16>, resting_hr: Option<u16>) {
        self.max_hr = max_hr;
        self.resting_hr = resting_hr;
        if let (Some(max), Some(values)) = (max_hr, self.zone_values) {
            if values[4] > max {
                self.zone_values = None;
            }
        }
        self.updated_at = Utc::now();
    }

    /// Heart rate zones for this profile, when a maximum heart rate is set.
    ///
    /// Customized boundaries win over the percent defaults.
    pub fn hr_zones(&self) -> Option<HrZones> {
        let max_hr = self.max_hr?;
        Some(match self.zone_values {
            Some(values) => HrZones::with_values(max_hr, values),
            None => HrZones::new(max_hr),
        })
    }

    /// Training load calculator for this profile.
    ///
    /// The calculator itself reports whether the profile supports a score.
    pub fn training_load(&self) -> TrainingLoadCalculator {
        TrainingLoadCalculator::new(
            self.max_hr.unwrap_or(0),
            self.resting_hr.unwrap_or(0),
            self.gender,
        )
    }

    /// Validate a maximum heart rate value (100-220 bpm).
    pub fn validate_max_hr(max_hr: u16) -> bool {
        (100..=220).contains(&max_hr)
    }

    /// Validate a resting heart rate value (30-120 bpm).
    pub fn validate_resting_hr(resting_hr: u16) -> bool {
        (30..=120).contains(&resting_hr)
    }
}

/// Batch processing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingSettings {
    /// Workouts processed concurrently per chunk
    pub chunk_size: usize,
    /// Completed analyses accumulated before a storage flush
    pub flush_every: usize,
}

impl Default for ProcessingSettings {
    fn default() -> Self {
        Self {
            chunk_size: 5,
            flush_every: 10,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// User profile
    pub profile: UserProfile,
    /// Batch processing settings
    pub processing: ProcessingSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            profile: UserProfile::default(),
            processing: ProcessingSettings::default(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "stridelog", "Stridelog")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from file.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from an explicit path.
pub fn load_config_from(path: &std::path::Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        let config = AppConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        };
        return Ok(config);
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = get_data_dir();

    Ok(config)
}

/// Save application configuration to file.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save application configuration to an explicit path.
pub fn save_config_to(config: &AppConfig, path: &std::path::Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_speed_localization() {
        // 5 m/s = 18 km/h
        assert!((Units::Metric.localize_speed(5.0) - 18.0).abs() < 1e-9);
        assert!((Units::Imperial.localize_speed(5.0) - 11.18468).abs() < 1e-4);
    }

    #[test]
    fn test_units_pace_localization() {
        // 0.3 s/m = 5 min/km
        assert!((Units::Metric.localize_pace(0.3) - 5.0).abs() < 1e-9);
        // ~8.05 min/mi
        assert!((Units::Imperial.localize_pace(0.3) - 8.04672).abs() < 1e-4);
    }

    #[test]
    fn test_profile_zones_require_max_hr() {
        let mut profile = UserProfile::default();
        assert!(profile.hr_zones().is_none());

        profile.set_heart_rate(Some(200), Some(60));
        let zones = profile.hr_zones().unwrap();
        assert_eq!(zones.values(), [100, 120, 140, 160, 180]);
    }

    #[test]
    fn test_custom_zone_values_survive_compatible_max_hr() {
        let mut profile = UserProfile::default();
        profile.set_heart_rate(Some(200), Some(60));
        profile.zone_values = Some([95, 115, 135, 155, 175]);

        assert_eq!(profile.hr_zones().unwrap().values(), [95, 115, 135, 155, 175]);

        // Lowering max_hr below the top boundary drops the customization
        profile.set_heart_rate(Some(170), Some(60));
        assert_eq!(profile.zone_values, None);
        assert_eq!(profile.hr_zones().unwrap().values(), HrZones::default_values(170));
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.profile.name = "Runner".to_string();
        config.profile.set_heart_rate(Some(187), Some(52));
        config.profile.gender = Some(Gender::Female);
        config.processing.chunk_size = 3;

        save_config_to(&config, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();

        assert_eq!(loaded.profile.name, "Runner");
        assert_eq!(loaded.profile.max_hr, Some(187));
        assert_eq!(loaded.profile.gender, Some(Gender::Female));
        assert_eq!(loaded.processing.chunk_size, 3);
    }

    #[test]
    fn test_missing_config_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.profile.max_hr, None);
        assert_eq!(config.processing.chunk_size, 5);
    }
}
