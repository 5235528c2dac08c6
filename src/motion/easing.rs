//! Bell easing for card flights.

use std::f64::consts::FRAC_PI_2;

/// Eased progress for raw progress `t`.
///
/// `e = (1 - cos(tπ)) / 2`. Velocity is zero at both ends and peaks at
/// `t = 0.5`, with no overshoot.
///
/// Evaluated as `sin²(tπ/2)` on the first half and `1 - sin²((1-t)π/2)` on
/// the second. Both are the same curve, but this form lands exactly on 0 and
/// 1 at the endpoints and is `>= 0.5` exactly when `t >= 0.5`, which the
/// depth-rank step relies on.
///
/// `t` is clamped to `[0, 1]`.
///
/// ```
/// use card_flight::motion::bell_ease;
///
/// assert_eq!(bell_ease(0.0), 0.0);
/// assert_eq!(bell_ease(1.0), 1.0);
/// assert!((bell_ease(0.5) - 0.5).abs() < 1e-6);
/// ```
#[must_use]
pub fn bell_ease(t: f32) -> f32 {
    eased_exact(t) as f32
}

/// Full precision eased value, used where the midpoint comparison matters.
pub(crate) fn eased_exact(t: f32) -> f64 {
    let t = f64::from(t.clamp(0.0, 1.0));
    if t < 0.5 {
        let s = (t * FRAC_PI_2).sin();
        s * s
    } else {
        let s = ((1.0 - t) * FRAC_PI_2).sin();
        1.0 - s * s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(bell_ease(0.0), 0.0);
        assert_eq!(bell_ease(1.0), 1.0);
    }

    #[test]
    fn test_midpoint_not_below_half() {
        assert!(eased_exact(0.5) >= 0.5);
        assert!(eased_exact(0.499_999_97) < 0.5);
        assert!((bell_ease(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_matches_cosine_form() {
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            let cosine = (1.0 - (f64::from(t) * std::f64::consts::PI).cos()) / 2.0;
            assert!((f64::from(bell_ease(t)) - cosine).abs() < 1e-6, "t = {t}");
        }
    }

    #[test]
    fn test_symmetric() {
        for i in 0..=50 {
            let t = i as f32 / 100.0;
            let sum = bell_ease(t) + bell_ease(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-5, "t = {t}");
        }
    }

    #[test]
    fn test_clamped() {
        assert_eq!(bell_ease(-1.0), 0.0);
        assert_eq!(bell_ease(2.0), 1.0);
    }
}
