mod bezier2;

use crate::common::AngleDir;
use parry2d_f64::na::Rotation2;

pub type Point2 = parry2d_f64::na::Point2<f64>;
pub type Vector2 = parry2d_f64::na::Vector2<f64>;

pub use self::bezier2::Bezier2;

/// Create a rotation matrix which rotates 2D vectors counter-clockwise by `angle` radians.
pub fn rotation_2d(angle: f64) -> Rotation2<f64> {
    Rotation2::new(angle)
}

/// The z component of the cross product of two vectors lying in the x-y plane. Positive when `b`
/// is counter-clockwise from `a`.
pub fn cross2(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Returns a rotation of 90 degrees in the given direction
pub fn rot90(dir: AngleDir) -> Rotation2<f64> {
    rotation_2d(dir.to_sign() * std::f64::consts::FRAC_PI_2)
}

/// Twice the signed area enclosed by a polygon given as a sequence of vertices, where the last
/// vertex connects back to the first. Positive for counter-clockwise winding.
pub fn signed_area2(points: &[Point2]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| cross2(&points[i].coords, &points[(i + 1) % n].coords))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rot90_directions() {
        let v = Vector2::new(1.0, 0.0);
        assert_relative_eq!(rot90(AngleDir::Ccw) * v, Vector2::new(0.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(rot90(AngleDir::Cw) * v, Vector2::new(0.0, -1.0), epsilon = 1e-12);
    }

    #[test]
    fn cross_sign() {
        let a = Vector2::new(1.0, 0.0);
        let b = Vector2::new(0.0, 2.0);
        assert_eq!(cross2(&a, &b), 2.0);
        assert_eq!(cross2(&b, &a), -2.0);
    }

    #[test]
    fn square_area_winding() {
        let ccw = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        assert_relative_eq!(signed_area2(&ccw), 2.0);

        let cw = ccw.iter().rev().cloned().collect::<Vec<_>>();
        assert_relative_eq!(signed_area2(&cw), -2.0);
    }
}
