use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::services::catalog_service::ModelCatalog;
use crate::services::series_service::MAX_SERIES_DAYS;

/// All tunables of the demo, grouped by the component that reads them.
///
/// `Settings::default()` reproduces the stock demo exactly; any
/// section may be omitted from JSON and falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub generator: GeneratorSettings,
    pub scores: ScoreSettings,
    pub demo: DemoSettings,
}

/// Parameters of the random walk with drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Lower bound of the uniformly drawn starting level
    pub base_level_min: f64,

    /// Width of the starting level range: `[min, min + spread)`
    pub base_level_spread: f64,

    /// Maximum per-step noise as a fraction of the current level
    pub volatility: f64,

    /// Constant per-step trend as a fraction of the current level
    pub drift: f64,

    /// Fractions of the series length at which anomalies are injected.
    /// Each index is `floor(days * fraction)`; duplicates are kept.
    pub anomaly_positions: Vec<f64>,

    /// Smallest anomaly shock as a fraction of the current level
    pub shock_min: f64,

    /// Width of the shock range: `[min, min + spread)`
    pub shock_spread: f64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            base_level_min: 100.0,
            base_level_spread: 50.0,
            volatility: 0.02,
            drift: 0.001,
            anomaly_positions: vec![0.2, 0.5, 0.8],
            shock_min: 0.05,
            shock_spread: 0.10,
        }
    }
}

/// Score bands of the mock reconstruction error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreSettings {
    /// Lowest score an injected anomaly can receive
    pub anomaly_floor: f64,

    /// Width of the anomaly band: `[floor, floor + width)`
    pub anomaly_width: f64,

    /// Width of the normal band: `[0, width)`
    pub normal_width: f64,

    /// Scores strictly above this are highlighted as "high"
    pub high_score_threshold: f64,
}

impl Default for ScoreSettings {
    fn default() -> Self {
        Self {
            anomaly_floor: 0.8,
            anomaly_width: 0.2,
            normal_width: 0.3,
            high_score_threshold: 0.6,
        }
    }
}

/// Session behaviour of the demo page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Length of the series shown before anything is uploaded (no anomalies)
    pub initial_days: i64,

    /// Length of the series generated after a successful upload (with anomalies)
    pub upload_days: i64,

    /// Model selected when a session starts
    pub default_model_id: u32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            initial_days: 60,
            upload_days: 90,
            default_model_id: 1,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self).map_err(|e| CoreError::Serialization(e.to_string()))
    }

    /// Reject parameter combinations that would break the series or score invariants.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.generator.validate()?;
        self.scores.validate()?;
        self.demo.validate()
    }
}

fn ensure(condition: bool, message: impl FnOnce() -> String) -> Result<(), CoreError> {
    if condition {
        Ok(())
    } else {
        Err(CoreError::InvalidSettings(message()))
    }
}

fn is_fraction(x: f64) -> bool {
    (0.0..1.0).contains(&x)
}

impl GeneratorSettings {
    pub fn validate(&self) -> Result<(), CoreError> {
        ensure(self.base_level_min.is_finite() && self.base_level_min >= 0.0, || {
            format!("base_level_min must be a non-negative number, got {}", self.base_level_min)
        })?;
        ensure(self.base_level_spread.is_finite() && self.base_level_spread >= 0.0, || {
            format!("base_level_spread must be a non-negative number, got {}", self.base_level_spread)
        })?;
        ensure(is_fraction(self.volatility), || {
            format!("volatility must be in [0, 1), got {}", self.volatility)
        })?;
        ensure(is_fraction(self.drift), || {
            format!("drift must be in [0, 1), got {}", self.drift)
        })?;
        if let Some(bad) = self.anomaly_positions.iter().find(|p| !is_fraction(**p)) {
            return Err(CoreError::InvalidSettings(format!(
                "anomaly positions must be in [0, 1), got {bad}"
            )));
        }
        ensure(
            self.shock_min >= 0.0 && self.shock_spread >= 0.0 && self.shock_min + self.shock_spread < 1.0,
            || {
                format!(
                    "shock range [{}, {}) must lie within [0, 1)",
                    self.shock_min,
                    self.shock_min + self.shock_spread
                )
            },
        )
    }
}

impl ScoreSettings {
    pub fn validate(&self) -> Result<(), CoreError> {
        ensure(self.normal_width > 0.0, || {
            format!("normal_width must be positive, got {}", self.normal_width)
        })?;
        ensure(self.anomaly_width > 0.0, || {
            format!("anomaly_width must be positive, got {}", self.anomaly_width)
        })?;
        ensure(self.anomaly_floor + self.anomaly_width <= 1.0, || {
            format!(
                "anomaly band [{}, {}) exceeds 1.0",
                self.anomaly_floor,
                self.anomaly_floor + self.anomaly_width
            )
        })?;
        ensure(self.normal_width <= self.anomaly_floor, || {
            format!(
                "normal band [0, {}) overlaps anomaly band starting at {}",
                self.normal_width, self.anomaly_floor
            )
        })?;
        ensure((0.0..=1.0).contains(&self.high_score_threshold), || {
            format!("high_score_threshold must be in [0, 1], got {}", self.high_score_threshold)
        })
    }
}

impl DemoSettings {
    pub fn validate(&self) -> Result<(), CoreError> {
        ensure((0..=MAX_SERIES_DAYS).contains(&self.initial_days), || {
            format!("initial_days must be in [0, {MAX_SERIES_DAYS}], got {}", self.initial_days)
        })?;
        ensure((0..=MAX_SERIES_DAYS).contains(&self.upload_days), || {
            format!("upload_days must be in [0, {MAX_SERIES_DAYS}], got {}", self.upload_days)
        })?;
        if ModelCatalog::find(self.default_model_id).is_none() {
            return Err(CoreError::UnknownModel(self.default_model_id));
        }
        Ok(())
    }
}
