use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single day of a generated price series.
///
/// The core generates these, the frontend just renders them.
/// Field names serialise in camelCase so the chart layer receives
/// `{date, value, isAnomaly, anomalyScore?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    /// Calendar day of this observation (serialised as `YYYY-MM-DD`)
    pub date: NaiveDate,

    /// Price level, rounded to 2 decimals and never negative
    pub value: f64,

    /// Whether this index was chosen as an anomaly injection point
    pub is_anomaly: bool,

    /// Mock reconstruction error in `[0, 1)`, present only after scoring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anomaly_score: Option<f64>,
}

impl DataPoint {
    pub fn new(date: NaiveDate, value: f64, is_anomaly: bool) -> Self {
        Self {
            date,
            value,
            is_anomaly,
            anomaly_score: None,
        }
    }

    /// Copy of this point carrying the given anomaly score.
    #[must_use]
    pub fn with_score(&self, score: f64) -> Self {
        Self {
            anomaly_score: Some(score),
            ..self.clone()
        }
    }
}

/// An ordered, day-by-day sequence of [`DataPoint`]s.
///
/// Iteration order is chronological and significant. A `Series` is never
/// mutated after construction; scoring produces a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already-ordered points. Callers are responsible for the ordering.
    pub fn from_points(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DataPoint> {
        self.points.get(index)
    }

    /// Points flagged as injected anomalies, in chronological order.
    #[must_use]
    pub fn anomalies(&self) -> Vec<&DataPoint> {
        self.points.iter().filter(|p| p.is_anomaly).collect()
    }

    /// True when every point carries an anomaly score.
    #[must_use]
    pub fn is_scored(&self) -> bool {
        self.points.iter().all(|p| p.anomaly_score.is_some())
    }

    pub fn into_points(self) -> Vec<DataPoint> {
        self.points
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<DataPoint> for Series {
    fn from_iter<I: IntoIterator<Item = DataPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
