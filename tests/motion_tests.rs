//! Motion curve and card flight tests.
//!
//! These tests verify the properties every flight must have regardless of
//! its random draws: easing bounds, exact endpoints, the depth-rank step and
//! sub-stepping consistency.

use card_flight::cards::{Card, FlightRequest, FlightStatus};
use card_flight::core::{CardId, CurveConfig, DepthRank, FlightRng, TextureId, Vec2};
use card_flight::motion::{bell_ease, CurveParams, FlightPath};

use proptest::prelude::*;

fn card_at(x: f32, y: f32, rotation: f32) -> Card {
    let mut card = Card::new(CardId(1), TextureId::new(0, 100.0, 150.0));
    card.set_position(Vec2::new(x, y));
    card.set_rotation(rotation);
    card
}

fn random_path(seed: u64, start: Vec2, end: Vec2) -> FlightPath {
    let mut rng = FlightRng::new(seed);
    let params = CurveParams::sample(&mut rng, &CurveConfig::default());
    FlightPath::new(start, 0.0, end, (DepthRank(2), DepthRank(7)), &params)
}

// =============================================================================
// Easing
// =============================================================================

/// Test the fixed points of the bell ease.
#[test]
fn test_ease_fixed_points() {
    assert_eq!(bell_ease(0.0), 0.0);
    assert_eq!(bell_ease(1.0), 1.0);
    assert!((bell_ease(0.5) - 0.5).abs() < 1e-6);
}

/// Test that the ease is slow at both ends and fastest in the middle.
#[test]
fn test_ease_velocity_profile() {
    let h = 0.01;
    let start = bell_ease(h) - bell_ease(0.0);
    let middle = bell_ease(0.5 + h / 2.0) - bell_ease(0.5 - h / 2.0);
    let end = bell_ease(1.0) - bell_ease(1.0 - h);

    assert!(middle > 10.0 * start);
    assert!(middle > 10.0 * end);
}

proptest! {
    /// Eased value is monotonically non-decreasing and stays in [0, 1].
    #[test]
    fn prop_ease_monotonic(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(bell_ease(lo) <= bell_ease(hi));
        prop_assert!((0.0..=1.0).contains(&bell_ease(lo)));
    }

    /// Position at t = 0 is the start point and at t = 1 the end point, exactly.
    #[test]
    fn prop_path_endpoints_exact(
        seed in any::<u64>(),
        sx in -1000.0f32..1000.0, sy in -1000.0f32..1000.0,
        ex in -1000.0f32..1000.0, ey in -1000.0f32..1000.0,
    ) {
        let path = random_path(seed, Vec2::new(sx, sy), Vec2::new(ex, ey));
        prop_assert_eq!(path.sample(0.0).position, path.start);
        prop_assert_eq!(path.sample(1.0).position, path.end);
        prop_assert_eq!(path.sample(1.0).rotation, path.end_rotation);
    }

    /// Rank is the start rank before the midpoint and the end rank from it on.
    #[test]
    fn prop_rank_step(seed in any::<u64>(), t in 0.0f32..=1.0) {
        let path = random_path(seed, Vec2::new(0.0, 0.0), Vec2::new(400.0, 100.0));
        let expected = if t < 0.5 { DepthRank(2) } else { DepthRank(7) };
        prop_assert_eq!(path.sample(t).rank, expected);
    }

    /// Rank step holds for any duration when driven through a card.
    #[test]
    fn prop_card_rank_step_any_duration(duration in 0.01f32..10.0, fraction in 0.0f32..1.0) {
        let mut card = card_at(0.0, 0.0, 0.0);
        card.start_flight(
            FlightRequest::new(Vec2::new(300.0, 0.0), duration).with_ranks(DepthRank(1), DepthRank(9)),
        ).unwrap();

        card.advance(duration * fraction);
        let t = card.flight().map_or(1.0, |f| f.progress());
        let expected = if t < 0.5 { DepthRank(1) } else { DepthRank(9) };
        prop_assert_eq!(card.depth_rank(), expected);
    }

    /// The control point stays within the configured offset of the midpoint.
    #[test]
    fn prop_control_point_bounded(seed in any::<u64>()) {
        let start = Vec2::new(0.0, 0.0);
        let end = Vec2::new(500.0, 0.0);
        let path = random_path(seed, start, end);
        let mid = start.midpoint(end);

        // Along the line only jitter moves it; across it, strength plus jitter.
        let along = path.control.x - mid.x;
        let across = path.control.y - mid.y + 80.0;
        prop_assert!(along.abs() <= 25.0 + 1e-3);
        prop_assert!(across.abs() >= 100.0 - 25.0 - 1e-3);
        prop_assert!(across.abs() <= 250.0 + 25.0 + 1e-3);
    }
}

// =============================================================================
// Card flights
// =============================================================================

/// Test that two half steps land in the same state as one full step.
#[test]
fn test_sub_stepping_consistency() {
    let params = CurveParams::sample(&mut FlightRng::new(5), &CurveConfig::default());
    let request = || {
        FlightRequest::new(Vec2::new(420.0, -35.0), 2.0)
            .with_ranks(DepthRank(3), DepthRank(11))
            .with_curve(params)
    };

    let mut stepped = card_at(10.0, 20.0, 0.03);
    stepped.start_flight(request()).unwrap();
    assert!(matches!(stepped.advance(1.0), FlightStatus::Moving { .. }));
    assert_eq!(stepped.advance(1.0), FlightStatus::Landed);

    let mut whole = card_at(10.0, 20.0, 0.03);
    whole.start_flight(request()).unwrap();
    assert_eq!(whole.advance(2.0), FlightStatus::Landed);

    assert_eq!(stepped.position(), whole.position());
    assert_eq!(stepped.rotation(), whole.rotation());
    assert_eq!(stepped.depth_rank(), whole.depth_rank());
    assert_eq!(stepped.position(), Vec2::new(420.0, -35.0));
    assert_eq!(stepped.depth_rank(), DepthRank(11));
}

/// Test that mid-flight sub-steps also agree with a single step.
#[test]
fn test_mid_flight_sub_steps_agree() {
    let params = CurveParams::sample(&mut FlightRng::new(8), &CurveConfig::default());

    let mut a = card_at(0.0, 0.0, 0.0);
    let mut b = card_at(0.0, 0.0, 0.0);
    for card in [&mut a, &mut b] {
        card.start_flight(FlightRequest::new(Vec2::new(200.0, 200.0), 1.0).with_curve(params))
            .unwrap();
    }

    a.advance(0.25);
    a.advance(0.25);
    b.advance(0.5);

    assert_eq!(a.position(), b.position());
    assert_eq!(a.rotation(), b.rotation());
}

/// Test that the curve parameters are frozen for the whole flight.
#[test]
fn test_curve_frozen_during_flight() {
    let params = CurveParams::sample(&mut FlightRng::new(13), &CurveConfig::default());
    let mut card = card_at(0.0, 0.0, 0.0);
    card.start_flight(FlightRequest::new(Vec2::new(300.0, 0.0), 1.0).with_curve(params))
        .unwrap();

    let control = card.flight().unwrap().path().control;
    for _ in 0..9 {
        card.advance(0.1);
        assert_eq!(card.flight().unwrap().path().control, control);
    }
}

/// Test that a flight arcs away from the straight line.
#[test]
fn test_flight_arcs() {
    let params = CurveParams {
        strength: 150.0,
        direction: 1.0,
        jitter: Vec2::ZERO,
        upward_bias: 80.0,
        end_rotation: 0.0,
    };
    let mut card = card_at(0.0, 0.0, 0.0);
    card.start_flight(FlightRequest::new(Vec2::new(400.0, 0.0), 2.0).with_curve(params))
        .unwrap();

    card.advance(1.0);
    // Perpendicular of +x is +y, bias pulls up: control y = 150 - 80 = 70,
    // and the Bézier midpoint is halfway to the control point.
    let p = card.position();
    assert!((p.x - 200.0).abs() < 1e-2);
    assert!((p.y - 35.0).abs() < 1e-2);
}
