use serde::{Deserialize, Serialize};

use super::series::DataPoint;

/// Headline numbers for a scored (or unscored) series, as shown in the
/// results panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Total number of data points
    pub total_points: usize,

    /// Number of points flagged as anomalies
    pub anomaly_count: usize,

    /// Percentage of flagged points: (anomaly_count / total_points) * 100.
    /// Zero for an empty series.
    pub anomaly_rate_pct: f64,

    /// Covered time period in days (one point per day)
    pub period_days: usize,

    /// The flagged points themselves, oldest first
    pub anomalies: Vec<DataPoint>,
}
