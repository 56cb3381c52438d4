use super::*;

#[test]
fn defaults_validate() {
    let c = EditorConfig::default();
    c.validate().unwrap();
    assert_eq!(c.dead_zone, 4.0);
    assert_eq!(c.carousel.rubber_band, 0.3);
    assert_eq!(c.carousel.max_fling_steps, 3);
    assert_eq!(c.raster.backdrop_rgb, [0, 0, 0]);
}

#[test]
fn empty_object_is_default() {
    assert_eq!(EditorConfig::from_json_str("{}").unwrap(), EditorConfig::default());
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let c = EditorConfig::from_json_str(
        r#"{ "dead_zone": 2.5, "carousel": { "item_width_px": 64, "spring": { "damping": 20 } } }"#,
    )
    .unwrap();
    assert_eq!(c.dead_zone, 2.5);
    assert_eq!(c.carousel.item_width_px, 64.0);
    assert_eq!(c.carousel.spring.damping, 20.0);
    assert_eq!(c.carousel.spring.stiffness, 100.0);
    assert_eq!(c.carousel.distance_threshold_px, 30.0);
}

#[test]
fn invalid_values_are_rejected() {
    for json in [
        r#"{ "dead_zone": -1 }"#,
        r#"{ "carousel": { "item_width_px": 0 } }"#,
        r#"{ "carousel": { "rubber_band": 1.5 } }"#,
        r#"{ "carousel": { "velocity_threshold": -0.1 } }"#,
        r#"{ "carousel": { "spring": { "mass": 0 } } }"#,
    ] {
        let err = EditorConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ArclightError::Validation(_)), "{json}: {err}");
    }
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = EditorConfig::from_json_str("{").unwrap_err();
    assert!(matches!(err, ArclightError::Serde(_)));
}

#[test]
fn missing_file_surfaces_path() {
    let err = EditorConfig::load(Path::new("definitely/not/here.json")).unwrap_err();
    assert!(format!("{err:#}").contains("here.json"));
}
