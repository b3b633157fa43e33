pub mod errors;
pub mod models;
pub mod services;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use errors::CoreError;
use models::{
    analytics::AnalysisSummary,
    model::ModelDescriptor,
    series::{DataPoint, Series},
    settings::Settings,
    upload::UploadedFile,
};
use services::{
    analytics_service::AnalyticsService, catalog_service::ModelCatalog,
    score_service::ScoreAssigner, series_service::SeriesGenerator,
    upload_service::UploadService,
};

/// Main entry point for the anomaly detection demo.
///
/// Holds the whole page state (current series, analysis results, selected
/// model, uploaded file, whether an upload has ever succeeded) plus the
/// random source every generation draws from. All transitions go through
/// methods; nothing is shared behind the caller's back.
#[must_use]
pub struct AnomalyDemo<R: Rng> {
    settings: Settings,
    rng: R,
    generator: SeriesGenerator,
    scorer: ScoreAssigner,
    upload_service: UploadService,
    analytics_service: AnalyticsService,
    series: Series,
    results: Option<Series>,
    selected_model: &'static ModelDescriptor,
    uploaded_file: Option<UploadedFile>,
    /// Set by the first accepted upload; `reset_upload` leaves it set.
    has_uploaded: bool,
}

impl<R: Rng> std::fmt::Debug for AnomalyDemo<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnomalyDemo")
            .field("series_len", &self.series.len())
            .field("results_len", &self.results.as_ref().map(Series::len))
            .field("selected_model", &self.selected_model.name)
            .field("uploaded_file", &self.uploaded_file.as_ref().map(|file| &file.name))
            .field("has_uploaded", &self.has_uploaded)
            .finish()
    }
}

impl AnomalyDemo<StdRng> {
    /// Start a session with default settings and an OS-seeded RNG.
    pub fn with_entropy() -> Self {
        Self::build(
            Settings::default(),
            SeriesGenerator::new(),
            ScoreAssigner::new(),
            StdRng::from_entropy(),
        )
    }

    /// Start a session with default settings and a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(
            Settings::default(),
            SeriesGenerator::new(),
            ScoreAssigner::new(),
            StdRng::seed_from_u64(seed),
        )
    }
}

impl<R: Rng> AnomalyDemo<R> {
    /// Start a session with the given settings and random source.
    ///
    /// Settings are validated first. The session opens with an
    /// anomaly-free demo series and the configured default model selected.
    pub fn new(settings: Settings, rng: R) -> Result<Self, CoreError> {
        settings.demo.validate()?;
        let generator = SeriesGenerator::with_settings(settings.generator.clone())?;
        let scorer = ScoreAssigner::with_settings(settings.scores.clone())?;
        Ok(Self::build(settings, generator, scorer, rng))
    }

    fn build(
        settings: Settings,
        generator: SeriesGenerator,
        scorer: ScoreAssigner,
        mut rng: R,
    ) -> Self {
        let series = generator.generate(&mut rng, settings.demo.initial_days, false);
        let selected_model = ModelCatalog::find(settings.demo.default_model_id)
            .unwrap_or(&ModelCatalog::all()[0]);

        info!(
            days = series.len(),
            model = selected_model.name,
            "demo session started"
        );

        Self {
            settings,
            rng,
            generator,
            scorer,
            upload_service: UploadService::new(),
            analytics_service: AnalyticsService::new(),
            series,
            results: None,
            selected_model,
            uploaded_file: None,
            has_uploaded: false,
        }
    }

    // ── Upload ──────────────────────────────────────────────────────

    /// Accept an uploaded file and replace the series with a fresh one
    /// containing injected anomalies. Previous results are discarded.
    ///
    /// A rejected file leaves the session untouched.
    pub fn upload(&mut self, file: UploadedFile) -> Result<&Series, CoreError> {
        self.upload_service.validate(&file)?;

        self.series = self
            .generator
            .generate(&mut self.rng, self.settings.demo.upload_days, true);
        self.results = None;
        info!(
            name = %file.name,
            size = %file.display_size(),
            days = self.series.len(),
            "file accepted, generated new series"
        );
        self.uploaded_file = Some(file);
        self.has_uploaded = true;

        Ok(&self.series)
    }

    /// Forget the uploaded file. The current series and results are kept,
    /// and analysis stays available.
    pub fn reset_upload(&mut self) {
        self.uploaded_file = None;
    }

    // ── Analysis ────────────────────────────────────────────────────

    /// Score the current series. The scored copy becomes both the results
    /// and the series shown on the chart.
    ///
    /// Fails with [`CoreError::NoUpload`] until a file has been accepted.
    pub fn analyze(&mut self) -> Result<&Series, CoreError> {
        if !self.has_uploaded {
            return Err(CoreError::NoUpload);
        }

        let scored = self.scorer.assign_scores(&mut self.rng, &self.series);
        info!(
            points = scored.len(),
            model = self.selected_model.name,
            "analysis complete"
        );
        self.series = scored.clone();
        Ok(self.results.insert(scored))
    }

    /// Summary of the latest analysis, if one has run.
    #[must_use]
    pub fn summary(&self) -> Option<AnalysisSummary> {
        self.results
            .as_ref()
            .map(|results| self.analytics_service.summarize(results))
    }

    /// Scored points above the configured high-score threshold.
    /// Empty until an analysis has run.
    #[must_use]
    pub fn high_score_points(&self) -> Vec<&DataPoint> {
        match &self.results {
            Some(results) => self
                .analytics_service
                .high_score_points(results, self.settings.scores.high_score_threshold),
            None => Vec::new(),
        }
    }

    // ── Models ──────────────────────────────────────────────────────

    /// Select a detection model by catalog id.
    pub fn select_model(&mut self, id: u32) -> Result<&'static ModelDescriptor, CoreError> {
        let model = ModelCatalog::get(id)?;
        self.selected_model = model;
        Ok(model)
    }

    /// All models available for selection.
    #[must_use]
    pub fn models(&self) -> &'static [ModelDescriptor] {
        ModelCatalog::all()
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[must_use]
    pub fn series(&self) -> &Series {
        &self.series
    }

    #[must_use]
    pub fn results(&self) -> Option<&Series> {
        self.results.as_ref()
    }

    #[must_use]
    pub fn selected_model(&self) -> &'static ModelDescriptor {
        self.selected_model
    }

    #[must_use]
    pub fn uploaded_file(&self) -> Option<&UploadedFile> {
        self.uploaded_file.as_ref()
    }

    /// Whether any upload has been accepted in this session.
    #[must_use]
    pub fn has_uploaded(&self) -> bool {
        self.has_uploaded
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
