use chrono::{Days, NaiveDate, Utc};
use rand::Rng;
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::series::{DataPoint, Series};
use crate::models::settings::GeneratorSettings;

/// Longest series the generator produces (100 years of days).
/// Longer requests are truncated to this many points.
pub const MAX_SERIES_DAYS: i64 = 36_500;

/// Produces synthetic daily price series: a random walk with drift and
/// optional shocks at fixed relative positions.
///
/// Randomness is always supplied by the caller, so a seeded RNG gives a
/// reproducible series.
#[derive(Debug, Clone)]
pub struct SeriesGenerator {
    settings: GeneratorSettings,
}

impl SeriesGenerator {
    pub fn new() -> Self {
        Self {
            settings: GeneratorSettings::default(),
        }
    }

    /// Build a generator from custom settings, rejecting ranges it cannot sample.
    pub fn with_settings(settings: GeneratorSettings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Indices at which shocks are injected into a series of `days` points.
    ///
    /// One index per configured position, `floor(days * position)`, in
    /// configuration order. Duplicates are kept as-is (small `days` collapse
    /// several positions onto the same index). Empty for `days <= 0`.
    pub fn anomaly_indices(&self, days: i64) -> Vec<usize> {
        if days <= 0 {
            return Vec::new();
        }
        self.settings
            .anomaly_positions
            .iter()
            .map(|position| (days as f64 * position).floor() as usize)
            .collect()
    }

    /// Generate a series of `days` points ending yesterday (UTC).
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        days: i64,
        inject_anomalies: bool,
    ) -> Series {
        self.generate_until(rng, days, inject_anomalies, Utc::now().date_naive())
    }

    /// Generate a series of `days` points, the first dated `today - days`
    /// and each following point one calendar day later.
    ///
    /// For each step `i` the level moves by:
    /// - noise: uniform in `±volatility × level`
    /// - drift: `drift × level`
    /// - shock (anomaly indices only): `±[shock_min, shock_min + shock_spread) × level`,
    ///   sign chosen uniformly
    ///
    /// Emitted values are rounded to cents and clamped at zero. Requests
    /// longer than [`MAX_SERIES_DAYS`] are truncated to that length.
    pub fn generate_until<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        days: i64,
        inject_anomalies: bool,
        today: NaiveDate,
    ) -> Series {
        if days <= 0 {
            return Series::new();
        }
        if days > MAX_SERIES_DAYS {
            warn!(days, max = MAX_SERIES_DAYS, "series length capped");
        }
        let days = days.min(MAX_SERIES_DAYS);

        let Some(start) = today.checked_sub_days(Days::new(days as u64)) else {
            warn!(days, %today, "requested series starts before the earliest representable date");
            return Series::new();
        };

        let anomaly_indices = if inject_anomalies {
            self.anomaly_indices(days)
        } else {
            Vec::new()
        };

        let s = &self.settings;
        let mut level = s.base_level_min + rng.gen::<f64>() * s.base_level_spread;
        let mut points = Vec::with_capacity(days as usize);
        let mut date = start;

        for i in 0..days as usize {
            let noise = rng.gen_range(-1.0_f64..1.0) * s.volatility * level;
            let drift = s.drift * level;

            let is_anomaly = anomaly_indices.contains(&i);
            let shock = if is_anomaly {
                let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
                direction * level * (s.shock_min + rng.gen::<f64>() * s.shock_spread)
            } else {
                0.0
            };

            level += noise + drift + shock;

            points.push(DataPoint::new(date, round_cents(level).max(0.0), is_anomaly));

            date = match date.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }

        debug!(
            days,
            inject_anomalies,
            anomalies = anomaly_indices.len(),
            %start,
            "generated mock series"
        );

        Series::from_points(points)
    }
}

impl Default for SeriesGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

