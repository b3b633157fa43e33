use crate::models::analytics::AnalysisSummary;
use crate::models::series::{DataPoint, Series};

/// Computes the headline figures of the results panel.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Summarise a series: point count, flagged anomalies and their share.
    ///
    /// An empty series yields a zero rate rather than NaN.
    pub fn summarize(&self, series: &Series) -> AnalysisSummary {
        let anomalies: Vec<DataPoint> = series.anomalies().into_iter().cloned().collect();
        let total_points = series.len();
        let anomaly_count = anomalies.len();

        let anomaly_rate_pct = if total_points > 0 {
            (anomaly_count as f64 / total_points as f64) * 100.0
        } else {
            0.0
        };

        AnalysisSummary {
            total_points,
            anomaly_count,
            anomaly_rate_pct,
            period_days: total_points,
            anomalies,
        }
    }

    /// Whether a score should be highlighted (strictly above `threshold`).
    pub fn is_high_score(&self, score: f64, threshold: f64) -> bool {
        score > threshold
    }

    /// Scored points whose score is strictly above `threshold`, oldest first.
    /// Unscored points are skipped.
    pub fn high_score_points<'a>(&self, series: &'a Series, threshold: f64) -> Vec<&'a DataPoint> {
        series
            .iter()
            .filter(|p| p.anomaly_score.is_some_and(|s| self.is_high_score(s, threshold)))
            .collect()
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
