//! Common operations on f64 points in D-dimensional space.

use parry3d_f64::na::Point;

/// Returns the distance between two points in D-dimensional space.
///
/// # Examples
///
/// ```
/// use glidergeom::common::points::dist;
/// use glidergeom::Point2;
/// let a = Point2::new(1.0, 2.0);
/// let b = Point2::new(3.0, 2.0);
/// assert_eq!(dist(&a, &b), 2.0);
/// ```
pub fn dist<const D: usize>(a: &Point<f64, D>, b: &Point<f64, D>) -> f64 {
    (a - b).norm()
}

/// Finds the point in the slice which is farthest from `origin`, returning its index and its
/// distance. When several points share the maximum distance the first of them is returned. An
/// empty slice yields `None`.
///
/// # Arguments
///
/// * `points`: the points to search
/// * `origin`: the point distances are measured from
///
/// returns: Option<(usize, f64)>
pub fn farthest_from<const D: usize>(
    points: &[Point<f64, D>],
    origin: &Point<f64, D>,
) -> Option<(usize, f64)> {
    let mut result: Option<(usize, f64)> = None;
    for (i, p) in points.iter().enumerate() {
        let d = dist(p, origin);
        match result {
            Some((_, best)) if d <= best => {}
            _ => result = Some((i, d)),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point2, Point3};

    #[test]
    fn farthest_takes_first_maximum() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(-1.0, 0.0),
        ];
        let (i, d) = farthest_from(&points, &Point2::origin()).unwrap();
        assert_eq!(i, 1);
        assert_eq!(d, 1.0);
    }

    #[test]
    fn farthest_in_3d() {
        let points = vec![Point3::new(1.0, 1.0, 1.0), Point3::new(0.0, 0.0, 3.0)];
        let (i, _) = farthest_from(&points, &Point3::origin()).unwrap();
        assert_eq!(i, 1);
    }

    #[test]
    fn farthest_of_nothing() {
        let points: Vec<Point2> = Vec::new();
        assert!(farthest_from(&points, &Point2::origin()).is_none());
    }
}
