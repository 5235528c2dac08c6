//! 2D points and the local ⇄ shared coordinate transform.
//!
//! The scene has one shared coordinate space (the overlay layer). Each deck
//! lives in its own local space, placed in the shared space by a `Transform`.
//! Cards in flight are tracked purely in shared coordinates, so moving or
//! rescaling a deck never disturbs them.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A point or vector in 2D space. `y` grows downward, as on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Midpoint between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Vec2) -> Vec2 {
        Vec2::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Unit vector perpendicular to `self` (rotated a quarter turn).
    ///
    /// A zero vector is treated as having length 1, so the result is zero
    /// instead of NaN.
    #[must_use]
    pub fn unit_perpendicular(self) -> Vec2 {
        let len = self.length();
        let len = if len > 0.0 { len } else { 1.0 };
        Vec2::new(-self.y / len, self.x / len)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Placement of a local space inside the shared space.
///
/// `to_shared(p) = translation + p * scale`. Decks use scale 1 (cards carry
/// their own scale), but the transform stays general so hosts with scaled
/// containers can use it too.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec2,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec2::ZERO,
        scale: 1.0,
    };

    /// A pure translation.
    #[must_use]
    pub const fn at(translation: Vec2) -> Self {
        Self { translation, scale: 1.0 }
    }

    /// Convert a local point into the shared space.
    #[must_use]
    pub fn to_shared(&self, local: Vec2) -> Vec2 {
        self.translation + local * self.scale
    }

    /// Convert a shared-space point into this local space.
    #[must_use]
    pub fn to_local(&self, shared: Vec2) -> Vec2 {
        let scale = if self.scale != 0.0 { self.scale } else { 1.0 };
        (shared - self.translation) * (1.0 / scale)
    }
}

/// Paint order of a card. Higher ranks are drawn on top.
///
/// A card resting in a deck has the rank of its index in that deck. A card
/// in flight carries the rank of the slot it left until the eased midpoint,
/// then the rank of the slot it is heading for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DepthRank(pub i32);

impl DepthRank {
    /// Rank of the card at `index` in a deck.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self(i32::try_from(index).unwrap_or(i32::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perpendicular_is_unit_and_orthogonal() {
        let d = Vec2::new(3.0, 4.0);
        let p = d.unit_perpendicular();
        assert!((p.length() - 1.0).abs() < 1e-6);
        assert!((p.x * d.x + p.y * d.y).abs() < 1e-5);
    }

    #[test]
    fn test_perpendicular_of_zero() {
        assert_eq!(Vec2::ZERO.unit_perpendicular(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_midpoint() {
        let m = Vec2::new(0.0, 0.0).midpoint(Vec2::new(10.0, -4.0));
        assert_eq!(m, Vec2::new(5.0, -2.0));
    }

    #[test]
    fn test_transform_round_trip() {
        let t = Transform {
            translation: Vec2::new(100.0, 50.0),
            scale: 2.0,
        };
        let local = Vec2::new(3.0, 4.0);
        let shared = t.to_shared(local);
        assert_eq!(shared, Vec2::new(106.0, 58.0));
        assert_eq!(t.to_local(shared), local);
    }

    #[test]
    fn test_depth_rank_order() {
        assert!(DepthRank::from_index(3) > DepthRank::from_index(2));
        assert_eq!(DepthRank::from_index(0), DepthRank(0));
    }

    #[test]
    fn test_identity() {
        let p = Vec2::new(12.5, -3.0);
        assert_eq!(Transform::IDENTITY.to_shared(p), p);
        assert_eq!(Transform::default().to_local(p), p);
    }
}
