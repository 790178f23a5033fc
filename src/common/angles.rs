//! Rotation and winding directions in the plane.

use crate::Point2;
use crate::geom2::signed_area2;

/// A direction of rotation, or the winding of a closed contour
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AngleDir {
    Cw,
    Ccw,
}

impl AngleDir {
    /// The winding of a contour whose last point connects back to its first. Contours without
    /// area count as counter-clockwise.
    pub fn of_contour(points: &[Point2]) -> Self {
        if signed_area2(points) < 0.0 {
            AngleDir::Cw
        } else {
            AngleDir::Ccw
        }
    }

    /// +1 for counter-clockwise, -1 for clockwise, the sign of the mathematical angle.
    pub fn to_sign(self) -> f64 {
        match self {
            AngleDir::Ccw => 1.0,
            AngleDir::Cw => -1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            AngleDir::Ccw => AngleDir::Cw,
            AngleDir::Cw => AngleDir::Ccw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn airfoil_winding() {
        // trailing edge, over the upper surface to the nose and back under it
        let points = vec![
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 0.1),
            Point2::new(0.0, 0.0),
            Point2::new(0.5, -0.1),
        ];
        assert_eq!(AngleDir::of_contour(&points), AngleDir::Ccw);

        let reversed = points.iter().rev().cloned().collect::<Vec<_>>();
        assert_eq!(AngleDir::of_contour(&reversed), AngleDir::Cw);
        assert_eq!(AngleDir::of_contour(&reversed).opposite().to_sign(), 1.0);
    }
}
