use super::*;
use crate::filters::model::FilterId;

#[test]
fn boundaries_are_stable() {
    assert_eq!(value_to_position(-50.0, 300.0, -50.0, 50.0), Some(0.0));
    assert_eq!(value_to_position(50.0, 300.0, -50.0, 50.0), Some(300.0));
    assert_eq!(value_to_position(0.0, 300.0, -50.0, 50.0), Some(150.0));
}

#[test]
fn roundtrip_within_rounding_tolerance() {
    for width in [1.0, 37.0, 250.0, 333.3] {
        for (min, max) in [(-50, 50), (-100, 100)] {
            for v in min..=max {
                let p = value_to_position(f64::from(v), width, f64::from(min), f64::from(max))
                    .unwrap();
                let back =
                    position_to_value(p, width, f64::from(min), f64::from(max)).unwrap();
                assert!(
                    (round_half_up(back) - f64::from(v)).abs() <= 1.0,
                    "v={v} width={width} back={back}"
                );
            }
        }
    }
}

#[test]
fn positions_outside_track_clamp_to_exact_bounds() {
    for p in [-1.0, -1000.0, f64::NEG_INFINITY] {
        assert_eq!(position_to_value(p, 200.0, -50.0, 50.0), Some(-50.0));
    }
    for p in [200.5, 5000.0, f64::INFINITY] {
        assert_eq!(position_to_value(p, 200.0, -100.0, 100.0), Some(100.0));
    }
}

#[test]
fn zero_or_negative_width_means_no_conversion() {
    assert_eq!(position_to_value(10.0, 0.0, -50.0, 50.0), None);
    assert_eq!(position_to_value(10.0, -4.0, -50.0, 50.0), None);
    assert_eq!(position_to_value(10.0, f64::NAN, -50.0, 50.0), None);
    assert_eq!(value_to_position(10.0, 0.0, -50.0, 50.0), None);
    assert_eq!(position_to_value(10.0, 100.0, 5.0, 5.0), None);
}

#[test]
fn dead_zone_snaps_small_magnitudes_to_exact_zero() {
    let range = FilterId::Brightness.range();
    for raw in [-3.99, -3.5, -1.0, -0.2, 0.0, 0.4, 2.5, 3.6, 3.999] {
        assert_eq!(commit_value(raw, range, DEFAULT_DEAD_ZONE), 0, "raw={raw}");
    }
    assert_eq!(commit_value(4.0, range, DEFAULT_DEAD_ZONE), 4);
    assert_eq!(commit_value(-4.0, range, DEFAULT_DEAD_ZONE), -4);
}

#[test]
fn committed_values_are_rounded_integers_in_range() {
    let range = FilterId::Saturation.range();
    assert_eq!(commit_value(12.4, range, DEFAULT_DEAD_ZONE), 12);
    assert_eq!(commit_value(12.5, range, DEFAULT_DEAD_ZONE), 13);
    assert_eq!(commit_value(-12.5, range, DEFAULT_DEAD_ZONE), -12);
    assert_eq!(commit_value(75.0, range, DEFAULT_DEAD_ZONE), 50);
    assert_eq!(commit_value(-1e12, range, DEFAULT_DEAD_ZONE), -50);
}

#[test]
fn tool_helpers_use_each_tools_own_range() {
    let b = FilterId::Brightness.range();
    let c = FilterId::Contrast.range();
    assert_eq!(tool_value_to_position(25, 200.0, b), Some(150.0));
    assert_eq!(tool_value_to_position(25, 200.0, c), Some(125.0));
    assert_eq!(tool_position_to_value(150.0, 200.0, b, DEFAULT_DEAD_ZONE), Some(25));
    assert_eq!(tool_position_to_value(125.0, 200.0, c, DEFAULT_DEAD_ZONE), Some(25));
    assert_eq!(tool_position_to_value(101.0, 200.0, b, DEFAULT_DEAD_ZONE), Some(0));
    assert_eq!(tool_position_to_value(5.0, 0.0, b, DEFAULT_DEAD_ZONE), None);
}
