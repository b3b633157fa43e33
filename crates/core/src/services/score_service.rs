use rand::Rng;
use tracing::debug;

use crate::errors::CoreError;
use crate::models::series::Series;
use crate::models::settings::ScoreSettings;

/// Annotates a series with a mock anomaly score per point.
///
/// Scores stand in for a model's reconstruction error. Injected anomalies
/// land in `[anomaly_floor, anomaly_floor + anomaly_width)`, every other
/// point in `[0, normal_width)`; the bands never overlap, so a threshold
/// between them classifies perfectly.
#[derive(Debug, Clone)]
pub struct ScoreAssigner {
    settings: ScoreSettings,
}

impl ScoreAssigner {
    pub fn new() -> Self {
        Self {
            settings: ScoreSettings::default(),
        }
    }

    /// Build an assigner from custom bands. Empty or overlapping bands are rejected.
    pub fn with_settings(settings: ScoreSettings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &ScoreSettings {
        &self.settings
    }

    /// Return a copy of `series` where every point carries an anomaly score.
    ///
    /// Dates, values, flags, length and order are preserved exactly. An
    /// existing score on the input is replaced.
    pub fn assign_scores<R: Rng + ?Sized>(&self, rng: &mut R, series: &Series) -> Series {
        let s = &self.settings;
        let scored: Series = series
            .iter()
            .map(|point| {
                let score = if point.is_anomaly {
                    rng.gen_range(s.anomaly_floor..s.anomaly_floor + s.anomaly_width)
                } else {
                    rng.gen_range(0.0..s.normal_width)
                };
                point.with_score(score)
            })
            .collect();

        debug!(points = scored.len(), "assigned anomaly scores");
        scored
    }
}

impl Default for ScoreAssigner {
    fn default() -> Self {
        Self::new()
    }
}
