//! Randomized quadratic flight curves.
//!
//! A `FlightPath` is built once when a flight starts. All random draws are
//! captured in `CurveParams` at that moment, so evaluating the path is a pure
//! function of raw progress `t`.

use serde::{Deserialize, Serialize};

use crate::core::{CurveConfig, DepthRank, FlightRng, Vec2};

use super::easing::eased_exact;

/// Random draws for one flight, frozen for the flight's duration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveParams {
    /// Perpendicular offset of the control point from the midpoint.
    pub strength: f32,
    /// `1.0` or `-1.0`: which side of the straight line the card arcs to.
    pub direction: f32,
    /// Independent control point jitter.
    pub jitter: Vec2,
    /// Upward shift of the control point.
    pub upward_bias: f32,
    /// Resting rotation at the end of the flight, in radians.
    pub end_rotation: f32,
}

impl CurveParams {
    /// Draw a fresh set of parameters within `config` bounds.
    pub fn sample(rng: &mut FlightRng, config: &CurveConfig) -> Self {
        let strength = rng.gen_between(config.strength_min, config.strength_max);
        let direction = rng.gen_sign();
        let jitter = Vec2::new(rng.gen_symmetric(config.jitter), rng.gen_symmetric(config.jitter));
        let end_rotation = rng.gen_symmetric(config.max_end_rotation_deg).to_radians();

        Self {
            strength,
            direction,
            jitter,
            upward_bias: config.upward_bias,
            end_rotation,
        }
    }

    /// A straight, unjittered curve. Useful for hosts that want plain motion.
    #[must_use]
    pub fn straight() -> Self {
        Self {
            strength: 0.0,
            direction: 1.0,
            jitter: Vec2::ZERO,
            upward_bias: 0.0,
            end_rotation: 0.0,
        }
    }

    /// Control point for a curve from `start` to `end`.
    #[must_use]
    pub fn control_point(&self, start: Vec2, end: Vec2) -> Vec2 {
        let perp = (end - start).unit_perpendicular();
        let offset = perp * (self.strength * self.direction);
        let mid = start.midpoint(end);
        Vec2::new(
            mid.x + offset.x + self.jitter.x,
            mid.y + offset.y + self.jitter.y - self.upward_bias,
        )
    }
}

/// Card state at one point along a flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec2,
    pub rotation: f32,
    pub rank: DepthRank,
}

/// The fixed geometry of one flight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightPath {
    pub start: Vec2,
    pub control: Vec2,
    pub end: Vec2,
    pub start_rotation: f32,
    pub end_rotation: f32,
    pub start_rank: DepthRank,
    pub end_rank: DepthRank,
}

impl FlightPath {
    /// Build a path from the card's current pose to `end`.
    #[must_use]
    pub fn new(
        start: Vec2,
        start_rotation: f32,
        end: Vec2,
        ranks: (DepthRank, DepthRank),
        params: &CurveParams,
    ) -> Self {
        Self {
            start,
            control: params.control_point(start, end),
            end,
            start_rotation,
            end_rotation: params.end_rotation,
            start_rank: ranks.0,
            end_rank: ranks.1,
        }
    }

    /// Evaluate the path at raw progress `t` (clamped to `[0, 1]`).
    ///
    /// Position and rotation follow the eased parameter. The rank is a step:
    /// the start rank before the eased midpoint, the end rank from it on.
    #[must_use]
    pub fn sample(&self, t: f32) -> Pose {
        let eased = eased_exact(t);
        let e = eased as f32;
        let u = 1.0 - e;

        let a = u * u;
        let b = 2.0 * u * e;
        let c = e * e;
        let position = Vec2::new(
            a * self.start.x + b * self.control.x + c * self.end.x,
            a * self.start.y + b * self.control.y + c * self.end.y,
        );

        let rotation = self.start_rotation * u + self.end_rotation * e;

        let rank = if eased < 0.5 {
            self.start_rank
        } else {
            self.end_rank
        };

        Pose { position, rotation, rank }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(params: &CurveParams) -> FlightPath {
        FlightPath::new(
            Vec2::new(10.0, 20.0),
            0.02,
            Vec2::new(410.0, 60.0),
            (DepthRank(4), DepthRank(9)),
            params,
        )
    }

    #[test]
    fn test_params_within_bounds() {
        let config = CurveConfig::default();
        let mut rng = FlightRng::new(3);
        for _ in 0..500 {
            let p = CurveParams::sample(&mut rng, &config);
            assert!(p.strength >= 100.0 && p.strength <= 250.0);
            assert!(p.direction == 1.0 || p.direction == -1.0);
            assert!(p.jitter.x.abs() <= 25.0 && p.jitter.y.abs() <= 25.0);
            assert!(p.end_rotation.abs() <= 3.0_f32.to_radians() + 1e-6);
            assert_eq!(p.upward_bias, 80.0);
        }
    }

    #[test]
    fn test_control_point_straight_is_midpoint() {
        let params = CurveParams::straight();
        let c = params.control_point(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
        assert_eq!(c, Vec2::new(50.0, 0.0));
    }

    #[test]
    fn test_control_point_offset_and_bias() {
        let params = CurveParams {
            strength: 100.0,
            direction: -1.0,
            jitter: Vec2::new(5.0, -5.0),
            upward_bias: 80.0,
            end_rotation: 0.0,
        };
        // Perpendicular of +x is +y; direction flips it to -y.
        let c = params.control_point(Vec2::new(0.0, 0.0), Vec2::new(200.0, 0.0));
        assert!((c.x - 105.0).abs() < 1e-4);
        assert!((c.y - (-100.0 - 5.0 - 80.0)).abs() < 1e-4);
    }

    #[test]
    fn test_control_point_zero_length() {
        let params = CurveParams {
            strength: 150.0,
            direction: 1.0,
            jitter: Vec2::ZERO,
            upward_bias: 80.0,
            end_rotation: 0.0,
        };
        let p = Vec2::new(7.0, 7.0);
        let c = params.control_point(p, p);
        assert!(c.x.is_finite() && c.y.is_finite());
        assert_eq!(c, Vec2::new(7.0, -73.0));
    }

    #[test]
    fn test_endpoints_exact() {
        let mut rng = FlightRng::new(11);
        let params = CurveParams::sample(&mut rng, &CurveConfig::default());
        let path = path(&params);

        let start = path.sample(0.0);
        assert_eq!(start.position, path.start);
        assert_eq!(start.rotation, path.start_rotation);
        assert_eq!(start.rank, DepthRank(4));

        let end = path.sample(1.0);
        assert_eq!(end.position, path.end);
        assert_eq!(end.rotation, path.end_rotation);
        assert_eq!(end.rank, DepthRank(9));
    }

    #[test]
    fn test_rank_steps_at_midpoint() {
        let path = path(&CurveParams::straight());
        assert_eq!(path.sample(0.49).rank, DepthRank(4));
        assert_eq!(path.sample(0.5).rank, DepthRank(9));
        assert_eq!(path.sample(0.51).rank, DepthRank(9));
    }

    #[test]
    fn test_midpoint_position_on_straight_path() {
        let path = path(&CurveParams::straight());
        let mid = path.sample(0.5).position;
        assert!((mid.x - 210.0).abs() < 1e-3);
        assert!((mid.y - 40.0).abs() < 1e-3);
    }
}
