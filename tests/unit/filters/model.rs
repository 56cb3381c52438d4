use super::*;

#[test]
fn registry_order_matches_filter_ids() {
    for (i, id) in FilterId::ALL.into_iter().enumerate() {
        assert_eq!(REGISTRY[i].id, id);
        assert_eq!(id.index(), i);
    }
}

#[test]
fn contrast_has_the_wide_range() {
    let r = FilterId::Contrast.range();
    assert_eq!((r.min, r.max), (-100, 100));
    for id in FilterId::ALL {
        if id != FilterId::Contrast {
            assert_eq!((id.range().min, id.range().max), (-50, 50), "{id}");
        }
    }
}

#[test]
fn defaults_are_all_zero() {
    let v = FilterValues::default();
    assert!(v.is_default());
    for id in FilterId::ALL {
        assert_eq!(v.get(id), 0);
    }
    assert_eq!(v.active().count(), 0);
}

#[test]
fn set_clamps_silently_to_registry_range() {
    let mut v = FilterValues::default();
    assert_eq!(v.set(FilterId::Brightness, 80), 50);
    assert_eq!(v.set(FilterId::Contrast, 80), 80);
    assert_eq!(v.set(FilterId::Contrast, -500), -100);
    assert_eq!(v.get(FilterId::Brightness), 50);
}

#[test]
fn reset_single_and_all() {
    let mut v = FilterValues::default();
    v.set(FilterId::Warmth, 12);
    v.set(FilterId::Noise, -7);
    v.reset(FilterId::Warmth);
    assert_eq!(v.get(FilterId::Warmth), 0);
    assert_eq!(v.get(FilterId::Noise), -7);
    v.reset_all();
    assert!(v.is_default());
}

#[test]
fn active_follows_registry_order() {
    let mut v = FilterValues::default();
    v.set(FilterId::Highlights, 3);
    v.set(FilterId::Brightness, -9);
    let active: Vec<_> = v.active().collect();
    assert_eq!(
        active,
        vec![(FilterId::Brightness, -9), (FilterId::Highlights, 3)]
    );
}

#[test]
fn json_uses_camel_case_and_fills_missing_keys() {
    let v = FilterValues::from_json_str(r#"{"blackLift": 7, "saturation": 99}"#).unwrap();
    assert_eq!(v.black_lift, 7);
    assert_eq!(v.saturation, 50);
    assert_eq!(v.brightness, 0);

    let s = serde_json::to_string(&v).unwrap();
    assert!(s.contains("\"blackLift\":7"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err = FilterValues::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, ArclightError::Serde(_)));
}

#[test]
fn filter_ids_parse_case_insensitively() {
    assert_eq!("blackLift".parse::<FilterId>().unwrap(), FilterId::BlackLift);
    assert_eq!("BRIGHTNESS".parse::<FilterId>().unwrap(), FilterId::Brightness);
    assert!("vibrance".parse::<FilterId>().is_err());
}

#[test]
fn assignments_parse() {
    assert_eq!(
        parse_assignment("contrast=-20").unwrap(),
        (FilterId::Contrast, -20)
    );
    assert!(parse_assignment("contrast").is_err());
    assert!(parse_assignment("contrast=abc").is_err());
    assert!(parse_assignment("glow=3").is_err());
}
