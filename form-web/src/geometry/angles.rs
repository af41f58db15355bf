//! Joint angle calculation
//!
//! Calculates the interior angle at a joint from the headings of the two
//! limb segments meeting there (e.g. hip→knee and knee→ankle).

use crate::pose::Landmark;

/// Interior angle at `b` formed by the rays b→a and b→c, in degrees.
///
/// Takes the difference of the two rays' `atan2` headings and reflects
/// anything past 180° back, so the result is always in [0, 180] whatever
/// the winding direction:
/// - 0° = both rays point the same way (fully folded)
/// - 180° = rays point in opposite directions (fully straight)
///
/// Collinear or coincident points are not special-cased. A NaN coordinate
/// yields NaN.
///
/// Computed in `f32`, the precision of the host's `Float32Array` landmarks.
/// A reading sitting exactly on a window edge may round either way.
pub fn angle_between(a: Landmark, b: Landmark, c: Landmark) -> f32 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let angle = radians.to_degrees().abs();

    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// Round a raw angle to whole degrees for display (NaN becomes 0)
pub fn round_degrees(degrees: f32) -> i32 {
    degrees.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f32, y: f32) -> Landmark {
        Landmark::new(x, y)
    }

    #[test]
    fn test_straight_joint() {
        let angle = angle_between(pt(0.0, 0.0), pt(0.5, 0.0), pt(1.0, 0.0));
        assert!((angle - 180.0).abs() < 0.01);
    }

    #[test]
    fn test_right_angle() {
        let angle = angle_between(pt(0.5, 0.0), pt(0.5, 0.5), pt(1.0, 0.5));
        assert!((angle - 90.0).abs() < 0.01);
    }

    #[test]
    fn test_reflex_heading_difference_is_folded() {
        // Headings of -135° and +135° differ by 270°, interior angle is 90°
        let angle = angle_between(pt(-1.0, -1.0), pt(0.0, 0.0), pt(-1.0, 1.0));
        assert!((angle - 90.0).abs() < 0.01);
    }

    #[test]
    fn test_collinear_and_coincident_points() {
        let folded = angle_between(pt(0.2, 0.2), pt(0.5, 0.5), pt(0.1, 0.1));
        assert!(folded.abs() < 0.01);

        let same = angle_between(pt(0.3, 0.3), pt(0.3, 0.3), pt(0.3, 0.3));
        assert_eq!(same, 0.0);

        let straight = angle_between(pt(0.1, 0.9), pt(0.5, 0.5), pt(0.9, 0.1));
        assert!(straight >= 0.0 && straight <= 180.0);
        assert!((straight - 180.0).abs() < 0.01);
    }

    #[test]
    fn test_symmetric_under_endpoint_swap() {
        let cases = [
            (pt(0.1, 0.2), pt(0.4, 0.5), pt(0.9, 0.3)),
            (pt(0.7, 0.1), pt(0.2, 0.2), pt(0.3, 0.8)),
            (pt(0.5, 0.5), pt(0.5, 0.6), pt(0.5, 0.7)),
        ];
        for (a, b, c) in cases {
            assert_eq!(angle_between(a, b, c), angle_between(c, b, a));
        }
    }

    #[test]
    fn test_missing_point_propagates_nan() {
        let angle = angle_between(Landmark::MISSING, pt(0.5, 0.5), pt(0.9, 0.1));
        assert!(angle.is_nan());
        assert_eq!(round_degrees(angle), 0);
    }

    #[test]
    fn test_round_degrees() {
        assert_eq!(round_degrees(89.5), 90);
        assert_eq!(round_degrees(89.49), 89);
        assert_eq!(round_degrees(179.99998), 180);
    }
}
