use mathplot::PlotError;
use mathplot::api::ViewConfig;
use mathplot::render::CameraEye;

#[test]
fn view_config_json_roundtrip() {
    let config = ViewConfig::default()
        .with_sample_count(400)
        .with_circle_segments(64)
        .with_default_color("#22c55e")
        .with_marker_sizes(12.0, 4.0)
        .with_camera_eye(CameraEye::new(1.25, -1.25, 0.75));

    let json = config.to_json_pretty().expect("config should serialize to json");
    let restored = ViewConfig::from_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, config);
}

#[test]
fn empty_json_object_yields_defaults() {
    let config = ViewConfig::from_json_str("{}").expect("parse");

    assert_eq!(config, ViewConfig::default());
    assert_eq!(config.sample_count, 200);
    assert_eq!(config.circle_segments, 100);
    assert_eq!(config.default_color, "#3b82f6");
    assert_eq!(config.surface_colorscale, "Viridis");
    assert_eq!(config.placeholder_text, "No data to display");
    config.validate().expect("defaults are valid");
}

#[test]
fn validate_rejects_degenerate_values() {
    let cases = [
        ViewConfig::default().with_sample_count(1),
        ViewConfig::default().with_circle_segments(1),
        ViewConfig::default().with_line_width(0.0),
        ViewConfig::default().with_line_width(f64::NAN),
        ViewConfig::default().with_marker_sizes(-1.0, 6.0),
        ViewConfig::default().with_camera_eye(CameraEye::new(f64::INFINITY, 1.0, 1.0)),
    ];

    for config in cases {
        assert!(
            matches!(config.validate(), Err(PlotError::InvalidConfig(_))),
            "expected {config:?} to be rejected"
        );
    }
}
