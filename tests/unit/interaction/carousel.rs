use super::*;

const W: f64 = 72.0;

fn strip(n: usize) -> CarouselState {
    CarouselState::new(n, CarouselConfig::default()).unwrap()
}

fn swipe(c: &mut CarouselState, dx: f64, vx: f64) -> Option<usize> {
    c.apply(CarouselEvent::Grant);
    c.apply(CarouselEvent::Move { dx: dx / 2.0 });
    c.apply(CarouselEvent::Move { dx });
    c.apply(CarouselEvent::Release { dx, vx })
}

fn settle(c: &mut CarouselState) {
    for _ in 0..10_000 {
        if matches!(c.phase(), CarouselPhase::Idle) {
            return;
        }
        c.apply(CarouselEvent::Tick { dt_secs: 1.0 / 60.0 });
    }
    panic!("carousel never settled");
}

#[test]
fn empty_strip_is_rejected() {
    assert!(CarouselState::new(0, CarouselConfig::default()).is_err());
}

#[test]
fn short_slow_drag_returns_to_start() {
    let mut c = strip(10);
    assert_eq!(swipe(&mut c, -10.0, 0.0), None);
    settle(&mut c);
    assert_eq!(c.index(), 0);
    assert_eq!(c.offset(), 0.0);
}

#[test]
fn rounding_picks_the_nearest_icon() {
    let mut c = strip(10);
    assert_eq!(swipe(&mut c, -40.0, 0.0), Some(1));
    settle(&mut c);
    assert_eq!(c.offset(), W);
}

#[test]
fn distance_threshold_forces_one_step() {
    let mut c = strip(10);
    assert_eq!(swipe(&mut c, -31.0, 0.1), Some(1));

    let mut c = strip(10);
    assert_eq!(swipe(&mut c, -29.0, 0.1), None);
}

#[test]
fn velocity_threshold_forces_one_step_backwards_too() {
    let mut c = strip(10);
    c.apply(CarouselEvent::Select { index: 5 });
    settle(&mut c);
    assert_eq!(swipe(&mut c, 10.0, 0.8), Some(4));
}

#[test]
fn fling_adds_floor_velocity_extra_steps() {
    let mut c = strip(10);
    assert_eq!(swipe(&mut c, -20.0, -2.5), Some(3));

    let mut c = strip(10);
    assert_eq!(swipe(&mut c, -20.0, -9.0), Some(4));
}

#[test]
fn target_never_leaves_the_strip() {
    let mut c = strip(10);
    c.apply(CarouselEvent::Select { index: 9 });
    settle(&mut c);
    assert_eq!(swipe(&mut c, -100.0, -5.0), None);
    assert_eq!(c.index(), 9);

    let mut c = strip(10);
    assert_eq!(swipe(&mut c, 300.0, 7.0), None);
    assert_eq!(c.index(), 0);
}

#[test]
fn ends_are_elastic_not_hard_clamped() {
    let mut c = strip(10);
    c.apply(CarouselEvent::Grant);
    c.apply(CarouselEvent::Move { dx: 100.0 });
    assert_eq!(c.offset(), -30.0);

    c.apply(CarouselEvent::Move { dx: -(9.0 * W + 100.0) });
    assert!((c.offset() - (9.0 * W + 30.0)).abs() < 1e-9);

    c.apply(CarouselEvent::Move { dx: -100.0 });
    assert_eq!(c.offset(), 100.0);
}

#[test]
fn settling_lands_on_the_canonical_offset() {
    let mut c = strip(10);
    swipe(&mut c, -50.0, -1.2);
    assert!(matches!(c.phase(), CarouselPhase::Settling(_)));
    settle(&mut c);
    assert_eq!(c.offset(), c.canonical_offset(c.index()));
}

#[test]
fn grabbing_a_settling_strip_stops_it() {
    let mut c = strip(10);
    swipe(&mut c, -40.0, 0.0);
    c.apply(CarouselEvent::Tick { dt_secs: 0.05 });
    let caught = c.offset();
    c.apply(CarouselEvent::Grant);
    assert!(c.is_dragging());
    assert_eq!(c.offset(), caught);
    c.apply(CarouselEvent::Tick { dt_secs: 0.05 });
    assert_eq!(c.offset(), caught);
}

#[test]
fn cancel_discards_the_drag() {
    let mut c = strip(10);
    c.apply(CarouselEvent::Select { index: 2 });
    settle(&mut c);
    c.apply(CarouselEvent::Grant);
    c.apply(CarouselEvent::Move { dx: -200.0 });
    assert_eq!(c.apply(CarouselEvent::Cancel), None);
    settle(&mut c);
    assert_eq!(c.index(), 2);
    assert_eq!(c.offset(), 2.0 * W);
}

#[test]
fn select_clamps_out_of_range_taps() {
    let mut c = strip(4);
    assert_eq!(c.apply(CarouselEvent::Select { index: 99 }), Some(3));
    assert_eq!(c.apply(CarouselEvent::Select { index: 3 }), None);
}

#[test]
fn single_tool_strip_stays_put() {
    let mut c = strip(1);
    assert_eq!(swipe(&mut c, -500.0, -8.0), None);
    settle(&mut c);
    assert_eq!(c.index(), 0);
    assert_eq!(c.offset(), 0.0);
}

#[test]
fn random_gesture_sequences_stay_in_bounds() {
    // SplitMix64
    let mut state = 0x5EED_u64;
    let mut next = move || {
        state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        let z = z ^ (z >> 31);
        (z >> 11) as f64 / (1u64 << 53) as f64
    };

    for n in [1usize, 2, 5, 10] {
        let mut c = strip(n);
        for _ in 0..500 {
            let dx = (next() - 0.5) * 2000.0;
            let vx = (next() - 0.5) * 20.0;
            match (next() * 4.0) as u32 {
                0 => {
                    c.apply(CarouselEvent::Select {
                        index: (next() * 20.0) as usize,
                    });
                }
                1 => {
                    c.apply(CarouselEvent::Grant);
                    c.apply(CarouselEvent::Move { dx });
                    c.apply(CarouselEvent::Cancel);
                }
                _ => {
                    swipe(&mut c, dx, vx);
                }
            }
            c.apply(CarouselEvent::Tick {
                dt_secs: next() * 0.1,
            });
            assert!(c.index() < n, "index {} out of [0, {})", c.index(), n);
        }
    }
}
