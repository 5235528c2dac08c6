//! Motion curve engine.
//!
//! Computes a single card's pose along a flight:
//! - `bell_ease`: slow-in/slow-out timing, `(1 - cos(tπ)) / 2`
//! - `CurveParams`: per-flight random draws, sampled once
//! - `FlightPath`: quadratic Bézier through a randomized control point,
//!   with a depth-rank step at the eased midpoint
//!
//! ## Example
//!
//! ```
//! use card_flight::core::{CurveConfig, DepthRank, FlightRng, Vec2};
//! use card_flight::motion::{CurveParams, FlightPath};
//!
//! let mut rng = FlightRng::new(42);
//! let params = CurveParams::sample(&mut rng, &CurveConfig::default());
//! let path = FlightPath::new(
//!     Vec2::new(0.0, 0.0),
//!     0.0,
//!     Vec2::new(300.0, 0.0),
//!     (DepthRank(10), DepthRank(3)),
//!     &params,
//! );
//!
//! assert_eq!(path.sample(0.0).position, Vec2::new(0.0, 0.0));
//! assert_eq!(path.sample(1.0).position, Vec2::new(300.0, 0.0));
//! assert_eq!(path.sample(0.25).rank, DepthRank(10));
//! assert_eq!(path.sample(0.75).rank, DepthRank(3));
//! ```

mod curve;
mod easing;

pub use curve::{CurveParams, FlightPath, Pose};
pub use easing::bell_ease;
