use super::*;

fn run_to_rest(spring: &mut Spring) -> f64 {
    let mut elapsed = 0.0;
    while !spring.step(1.0 / 60.0) {
        elapsed += 1.0 / 60.0;
        assert!(elapsed < 30.0, "spring never settled");
    }
    elapsed
}

#[test]
fn starting_on_target_is_already_at_rest() {
    let s = Spring::new(5.0, 5.0, 0.0, SpringConfig::default());
    assert!(s.is_at_rest());
    assert_eq!(s.position(), 5.0);
}

#[test]
fn settles_exactly_on_target() {
    let mut s = Spring::new(0.0, 144.0, 0.0, SpringConfig::default());
    run_to_rest(&mut s);
    assert_eq!(s.position(), 144.0);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn release_velocity_carries_motion_forward() {
    let cfg = SpringConfig::default();
    let mut still = Spring::new(0.0, 100.0, 0.0, cfg);
    let mut flung = Spring::new(0.0, 100.0, 2000.0, cfg);
    still.step(0.016);
    flung.step(0.016);
    assert!(flung.position() > still.position());
}

#[test]
fn non_finite_or_negative_dt_is_ignored() {
    let mut s = Spring::new(0.0, 10.0, 0.0, SpringConfig::default());
    assert!(!s.step(f64::NAN));
    assert!(!s.step(-1.0));
    assert_eq!(s.position(), 0.0);
}

#[test]
fn huge_frames_integrate_at_most_one_capped_step() {
    let cfg = SpringConfig {
        damping: 0.0,
        ..SpringConfig::default()
    };
    let mut huge = Spring::new(0.0, 10.0, 0.0, cfg);
    let mut capped = Spring::new(0.0, 10.0, 0.0, cfg);
    assert!(!huge.step(1e9));
    assert!(!capped.step(MAX_STEP_SECS));
    assert_eq!(huge.position(), capped.position());
    assert_eq!(huge.velocity(), capped.velocity());
}

#[test]
fn config_validation() {
    assert!(SpringConfig::default().validate().is_ok());
    let bad = SpringConfig {
        mass: 0.0,
        ..SpringConfig::default()
    };
    assert!(bad.validate().is_err());
    let bad = SpringConfig {
        damping: -1.0,
        ..SpringConfig::default()
    };
    assert!(bad.validate().is_err());
}
