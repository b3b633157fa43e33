// ═══════════════════════════════════════════════════════════════════
// Integration Tests — AnomalyDemo session flows
// ═══════════════════════════════════════════════════════════════════

use rand::rngs::StdRng;
use rand::SeedableRng;

use anomaly_demo_core::errors::CoreError;
use anomaly_demo_core::models::settings::Settings;
use anomaly_demo_core::models::upload::UploadedFile;
use anomaly_demo_core::AnomalyDemo;

fn csv_file() -> UploadedFile {
    UploadedFile::new("prices.csv", "text/csv", 4096)
}

fn anomaly_positions(demo: &AnomalyDemo<StdRng>) -> Vec<usize> {
    demo.series()
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_anomaly)
        .map(|(i, _)| i)
        .collect()
}

// ── Session start ───────────────────────────────────────────────────

#[test]
fn starts_with_sixty_day_clean_series() {
    let demo = AnomalyDemo::with_seed(7);
    assert_eq!(demo.series().len(), 60);
    assert!(demo.series().iter().all(|p| !p.is_anomaly));
    assert!(demo.results().is_none());
    assert!(demo.summary().is_none());
    assert!(demo.uploaded_file().is_none());
    assert_eq!(demo.selected_model().name, "Autoencoder");
}

#[test]
fn with_entropy_starts_a_default_session() {
    let demo = AnomalyDemo::with_entropy();
    assert_eq!(demo.series().len(), 60);
    assert_eq!(demo.settings(), &Settings::default());
}

#[test]
fn custom_settings_are_honoured() {
    let settings = Settings::from_json(
        r#"{"demo": {"initial_days": 5, "upload_days": 10, "default_model_id": 2}}"#,
    )
    .unwrap();
    let mut demo = AnomalyDemo::new(settings, StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(demo.series().len(), 5);
    assert_eq!(demo.selected_model().name, "LSTM");

    demo.upload(csv_file()).unwrap();
    assert_eq!(demo.series().len(), 10);
    assert_eq!(anomaly_positions(&demo), vec![2, 5, 8]);
}

#[test]
fn invalid_settings_are_rejected() {
    let mut settings = Settings::default();
    settings.scores.normal_width = 0.9;
    let err = AnomalyDemo::new(settings, StdRng::seed_from_u64(1)).unwrap_err();
    assert!(matches!(err, CoreError::InvalidSettings(_)));
}

#[test]
fn zero_day_session_is_empty() {
    let mut settings = Settings::default();
    settings.demo.initial_days = 0;
    settings.demo.upload_days = 0;
    let mut demo = AnomalyDemo::new(settings, StdRng::seed_from_u64(1)).unwrap();
    assert!(demo.series().is_empty());

    demo.upload(csv_file()).unwrap();
    assert!(demo.series().is_empty());
    assert!(demo.analyze().unwrap().is_empty());
    let summary = demo.summary().unwrap();
    assert_eq!(summary.total_points, 0);
    assert_eq!(summary.anomaly_rate_pct, 0.0);
}

#[test]
fn oversized_day_counts_are_rejected() {
    let mut settings = Settings::default();
    settings.demo.upload_days = i64::MAX;
    let err = AnomalyDemo::new(settings, StdRng::seed_from_u64(1)).unwrap_err();
    assert!(matches!(err, CoreError::InvalidSettings(_)));
}

#[test]
fn same_seed_same_session() {
    let a = AnomalyDemo::with_seed(42);
    let b = AnomalyDemo::with_seed(42);
    let values_a: Vec<f64> = a.series().iter().map(|p| p.value).collect();
    let values_b: Vec<f64> = b.series().iter().map(|p| p.value).collect();
    assert_eq!(values_a, values_b);
}

// ── Upload ──────────────────────────────────────────────────────────

#[test]
fn upload_generates_ninety_days_with_anomalies() {
    let mut demo = AnomalyDemo::with_seed(7);
    let len = demo.upload(csv_file()).unwrap().len();
    assert_eq!(len, 90);
    assert_eq!(anomaly_positions(&demo), vec![18, 45, 72]);
    assert_eq!(demo.uploaded_file().unwrap().name, "prices.csv");
}

#[test]
fn rejected_upload_leaves_session_untouched() {
    let mut demo = AnomalyDemo::with_seed(7);
    let before = demo.series().clone();

    let err = demo
        .upload(UploadedFile::new("photo.png", "image/png", 100))
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid upload: Please upload a CSV file");
    assert_eq!(demo.series(), &before);
    assert!(demo.uploaded_file().is_none());
}

#[test]
fn upload_clears_previous_results() {
    let mut demo = AnomalyDemo::with_seed(3);
    demo.upload(csv_file()).unwrap();
    demo.analyze().unwrap();
    assert!(demo.results().is_some());

    demo.upload(csv_file()).unwrap();
    assert!(demo.results().is_none());
    assert!(demo.summary().is_none());
}

#[test]
fn upload_ignores_file_identity() {
    let mut demo = AnomalyDemo::with_seed(5);
    demo.upload(UploadedFile::new("a.csv", "", 1)).unwrap();
    let first = demo.series().clone();
    demo.upload(UploadedFile::new("a.csv", "", 1)).unwrap();
    // every upload draws a fresh series
    assert_ne!(demo.series(), &first);
    assert_eq!(demo.series().len(), first.len());
}

#[test]
fn reset_upload_keeps_series() {
    let mut demo = AnomalyDemo::with_seed(5);
    demo.upload(csv_file()).unwrap();
    let series = demo.series().clone();
    demo.reset_upload();
    assert!(demo.uploaded_file().is_none());
    assert_eq!(demo.series(), &series);
}

// ── Analysis ────────────────────────────────────────────────────────

#[test]
fn analyze_scores_current_series() {
    let mut demo = AnomalyDemo::with_seed(11);
    demo.upload(csv_file()).unwrap();
    let series = demo.series().clone();

    let results = demo.analyze().unwrap().clone();
    assert_eq!(results.len(), series.len());
    assert!(results.is_scored());
    for (raw, scored) in series.iter().zip(results.iter()) {
        assert_eq!(raw.date, scored.date);
        assert_eq!(raw.value, scored.value);
        assert_eq!(raw.is_anomaly, scored.is_anomaly);
        let score = scored.anomaly_score.unwrap();
        if scored.is_anomaly {
            assert!(score >= 0.8 && score < 1.0);
        } else {
            assert!(score < 0.3);
        }
    }
    // the chart now shows the scored series
    assert_eq!(demo.series(), &results);
    assert!(demo.series().is_scored());
}

#[test]
fn summary_after_analysis() {
    let mut demo = AnomalyDemo::with_seed(11);
    demo.upload(csv_file()).unwrap();
    demo.analyze().unwrap();

    let summary = demo.summary().unwrap();
    assert_eq!(summary.total_points, 90);
    assert_eq!(summary.anomaly_count, 3);
    assert_eq!(summary.period_days, 90);
    assert!((summary.anomaly_rate_pct - 100.0 / 30.0).abs() < 1e-9);
    assert!(summary.anomalies.iter().all(|p| p.anomaly_score.unwrap() >= 0.8));
}

#[test]
fn high_score_points_are_the_injected_anomalies() {
    let mut demo = AnomalyDemo::with_seed(13);
    assert!(demo.high_score_points().is_empty());

    demo.upload(csv_file()).unwrap();
    demo.analyze().unwrap();
    let high = demo.high_score_points();
    assert_eq!(high.len(), 3);
    assert!(high.iter().all(|p| p.is_anomaly));
}

#[test]
fn analyze_requires_an_upload() {
    let mut demo = AnomalyDemo::with_seed(17);
    assert!(!demo.has_uploaded());

    let err = demo.analyze().unwrap_err();
    assert!(matches!(err, CoreError::NoUpload));
    assert!(demo.results().is_none());
    assert!(demo.summary().is_none());
    assert!(demo.series().iter().all(|p| p.anomaly_score.is_none()));
}

#[test]
fn rejected_upload_does_not_enable_analysis() {
    let mut demo = AnomalyDemo::with_seed(17);
    demo.upload(UploadedFile::new("notes.txt", "text/plain", 10)).unwrap_err();
    assert!(!demo.has_uploaded());
    assert!(matches!(demo.analyze(), Err(CoreError::NoUpload)));
}

#[test]
fn analysis_still_available_after_reset_upload() {
    let mut demo = AnomalyDemo::with_seed(17);
    demo.upload(csv_file()).unwrap();
    demo.reset_upload();
    assert!(demo.uploaded_file().is_none());
    assert!(demo.has_uploaded());

    let results = demo.analyze().unwrap();
    assert_eq!(results.len(), 90);
}

#[test]
fn analyzing_twice_rescores_the_same_points() {
    let mut demo = AnomalyDemo::with_seed(29);
    demo.upload(csv_file()).unwrap();
    let first = demo.analyze().unwrap().clone();
    let second = demo.analyze().unwrap().clone();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.date, b.date);
        assert_eq!(a.value, b.value);
        assert_eq!(a.is_anomaly, b.is_anomaly);
    }
    assert_eq!(demo.series(), &second);
}

#[test]
fn results_serialize_for_the_chart() {
    let mut demo = AnomalyDemo::with_seed(19);
    demo.upload(csv_file()).unwrap();
    let results = demo.analyze().unwrap();

    let json = serde_json::to_value(results).unwrap();
    let points = json.as_array().unwrap();
    assert_eq!(points.len(), 90);
    let first = points[0].as_object().unwrap();
    assert!(first.contains_key("date"));
    assert!(first.contains_key("value"));
    assert!(first.contains_key("isAnomaly"));
    assert!(first.contains_key("anomalyScore"));
    assert_eq!(first["date"].as_str().unwrap().len(), "YYYY-MM-DD".len());
}

// ── Model selection ─────────────────────────────────────────────────

#[test]
fn select_known_model() {
    let mut demo = AnomalyDemo::with_seed(1);
    let model = demo.select_model(3).unwrap();
    assert_eq!(model.name, "Isolation Forest");
    assert_eq!(demo.selected_model().id, 3);
}

#[test]
fn select_unknown_model_keeps_selection() {
    let mut demo = AnomalyDemo::with_seed(1);
    demo.select_model(2).unwrap();
    let err = demo.select_model(9).unwrap_err();
    assert!(matches!(err, CoreError::UnknownModel(9)));
    assert_eq!(demo.selected_model().id, 2);
}

#[test]
fn models_lists_catalog() {
    let demo = AnomalyDemo::with_seed(1);
    assert_eq!(demo.models().len(), 3);
}

#[test]
fn model_choice_does_not_change_scoring() {
    let mut a = AnomalyDemo::with_seed(23);
    let mut b = AnomalyDemo::with_seed(23);
    b.select_model(3).unwrap();
    let values = |demo: &mut AnomalyDemo<StdRng>| -> Vec<Option<f64>> {
        demo.upload(csv_file()).unwrap();
        demo.analyze().unwrap().iter().map(|p| p.anomaly_score).collect()
    };
    assert_eq!(values(&mut a), values(&mut b));
}

#[test]
fn debug_output_is_compact() {
    let demo = AnomalyDemo::with_seed(1);
    let dbg = format!("{demo:?}");
    assert!(dbg.contains("AnomalyDemo"));
    assert!(dbg.contains("series_len: 60"));
    assert!(dbg.contains("Autoencoder"));
    assert!(dbg.contains("has_uploaded: false"));
}
