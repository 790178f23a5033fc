//! Normalization of raw airfoil section points into the unit chord frame.

use crate::common::points::farthest_from;
use crate::errors::InvalidGeometry;
use crate::{Point2, Result};
use itertools::Itertools;
use parry2d_f64::na::Matrix2;

/// Transform raw section points into the normalized frame: the nose (the point farthest from the
/// first point, which is the trailing edge) is moved to the origin, the trailing edge is rotated
/// onto the positive x-axis, and everything is scaled so that the chord has unit length. The
/// rotation and scale are applied together as a single linear map.
///
/// # Arguments
///
/// * `points`: the ordered section points, starting at the trailing edge
///
/// returns: Result<Vec<OPoint<f64, Const<2>>, Global>, Error>
///
/// # Examples
///
/// ```
/// use glidergeom::airfoil::normalize_points;
/// use glidergeom::Point2;
/// use approx::assert_relative_eq;
/// let points = vec![
///     Point2::new(3.0, 1.0),
///     Point2::new(1.5, 1.3),
///     Point2::new(1.0, 1.0),
///     Point2::new(1.5, 0.8),
///     Point2::new(3.0, 1.0),
/// ];
/// let normalized = normalize_points(&points).unwrap();
/// assert_relative_eq!(normalized[0], Point2::new(1.0, 0.0), epsilon = 1e-12);
/// assert_relative_eq!(normalized[2], Point2::new(0.0, 0.0), epsilon = 1e-12);
/// ```
pub fn normalize_points(points: &[Point2]) -> Result<Vec<Point2>> {
    if points.len() < 3 {
        return Err(InvalidGeometry::NotEnoughPoints.into());
    }
    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(InvalidGeometry::NonFiniteValue.into());
    }

    let trailing = points[0];
    let (nose_i, d_max) =
        farthest_from(points, &trailing).ok_or(InvalidGeometry::NotEnoughPoints)?;
    if d_max <= f64::EPSILON {
        return Err(InvalidGeometry::CoincidentPoints.into());
    }
    let nose = points[nose_i];

    // The sine is the cross product of the unit chord direction with the x-axis. Taking the
    // cosine from the x component directly equals sqrt(1 - sin^2) for a trailing edge that lies
    // behind the nose and keeps the orientation of contours that were given mirrored.
    let dir = (trailing - nose) / d_max;
    let (sin, cos) = (-dir.y, dir.x);
    let transform = Matrix2::new(cos, -sin, sin, cos) / d_max;

    Ok(points
        .iter()
        .map(|p| Point2::from(transform * (p - nose)))
        .collect())
}

/// Index of the nose in a normalized section: the first point at which the x-values stop
/// decreasing. If the x-values never increase the last point is the nose.
pub(crate) fn nose_index(data: &[Point2]) -> usize {
    data.iter()
        .tuple_windows()
        .position(|(a, b)| b.x >= a.x)
        .unwrap_or(data.len().saturating_sub(1))
}
