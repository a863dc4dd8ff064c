//! User settings for the expense tracker
//!
//! Manages display preferences and the thresholds used to flag categories
//! that are close to or over their budget.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::Thresholds;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Spent/budget ratio above which a category is shown as a warning
    #[serde(default = "default_warning_ratio")]
    pub warning_ratio: f64,

    /// Spent/budget ratio above which a category is shown as critical
    #[serde(default = "default_critical_ratio")]
    pub critical_ratio: f64,

    /// Width of the budget progress bar in characters
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_warning_ratio() -> f64 {
    Thresholds::default().warning
}

fn default_critical_ratio() -> f64 {
    Thresholds::default().critical
}

/// Accepted progress bar widths
pub const BAR_WIDTH_RANGE: std::ops::RangeInclusive<usize> = 1..=200;

fn default_bar_width() -> usize {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            warning_ratio: default_warning_ratio(),
            critical_ratio: default_critical_ratio(),
            bar_width: default_bar_width(),
        }
    }
}

impl Settings {
    /// Thresholds for budget status levels
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            warning: self.warning_ratio,
            critical: self.critical_ratio,
        }
    }

    /// Check that the thresholds are usable
    pub fn validate(&self) -> Result<(), TrackerError> {
        let valid = |r: f64| r.is_finite() && r > 0.0;
        if !valid(self.warning_ratio) || !valid(self.critical_ratio) {
            return Err(TrackerError::Config(
                "Budget thresholds must be positive numbers".into(),
            ));
        }
        if self.warning_ratio >= self.critical_ratio {
            return Err(TrackerError::Config(format!(
                "warning_ratio ({}) must be below critical_ratio ({})",
                self.warning_ratio, self.critical_ratio
            )));
        }
        if !BAR_WIDTH_RANGE.contains(&self.bar_width) {
            return Err(TrackerError::Config(format!(
                "bar_width ({}) must be between {} and {}",
                self.bar_width,
                BAR_WIDTH_RANGE.start(),
                BAR_WIDTH_RANGE.end()
            )));
        }
        Ok(())
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
