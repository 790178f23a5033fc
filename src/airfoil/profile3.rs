//! Airfoil sections placed in 3D space and their flattening back into the plane.

use crate::common::points::farthest_from;
use crate::errors::InvalidGeometry;
use crate::{Error, Point3, Profile2D, Result, Vector3};
use serde::{Deserialize, Serialize};

/// An ordered sequence of 3D points describing an airfoil section in space, typically produced
/// by placing a `Profile2D` with a rib. Points keep the order (and therefore the indices) of the
/// 2D profile they came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile3D {
    name: String,
    data: Vec<Point3>,
}

impl Profile3D {
    pub fn new(name: &str, data: Vec<Point3>) -> Self {
        Self {
            name: name.to_string(),
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[Point3] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn check_index(&self, ik: f64) -> Result<f64> {
        let max = self.data.len().saturating_sub(1) as f64;
        if self.data.is_empty() || !ik.is_finite() || ik < 0.0 || ik > max {
            return Err(Error::OutOfRange { x: ik, min: 0.0, max });
        }
        Ok(ik)
    }

    /// Get the point at a fractional index, interpolating linearly between the neighboring
    /// stored points. Fractional indices are what `Profile2D::x_index` produces, so a position
    /// found on the 2D profile can be looked up directly on its 3D counterpart.
    pub fn point_at_index(&self, ik: f64) -> Result<Point3> {
        let ik = self.check_index(ik)?;
        let i = (ik.floor() as usize).min(self.data.len() - 1);
        let f = ik - i as f64;
        if f <= 0.0 || i + 1 >= self.data.len() {
            return Ok(self.data[i]);
        }
        let a = self.data[i];
        let b = self.data[i + 1];
        Ok(a + (b - a) * f)
    }

    /// The portion of the curve between two fractional indices: the interpolated end points and
    /// every stored point strictly between them. When `ik0 > ik1` the points are returned in
    /// reverse curve order.
    pub fn slice(&self, ik0: f64, ik1: f64) -> Result<Vec<Point3>> {
        let (lo, hi) = crate::min_max(self.check_index(ik0)?, self.check_index(ik1)?);

        let mut points = vec![self.point_at_index(lo)?];
        let first = lo.floor() as usize + 1;
        let last = hi.ceil() as usize;
        for i in first..last {
            points.push(self.data[i]);
        }
        if hi > lo {
            points.push(self.point_at_index(hi)?);
        }

        if ik0 > ik1 {
            points.reverse();
        }
        Ok(points)
    }

    /// Project the section into its own best fitting plane and return it as a normalized 2D
    /// profile named `<name>_flattened`.
    ///
    /// The in-plane x direction runs from the first point towards the nose (the point farthest
    /// from the first point). The y direction is accumulated from the components of every point
    /// orthogonal to x, flipping each component's sign so that the accumulator grows.
    pub fn flatten(&self) -> Result<Profile2D> {
        let first = self.data.first().ok_or(InvalidGeometry::NotEnoughPoints)?;
        let (i_nose, _) =
            farthest_from(&self.data, first).ok_or(InvalidGeometry::NotEnoughPoints)?;
        let nose = self.data[i_nose];

        let diff = self.data.iter().map(|p| nose - p).collect::<Vec<_>>();
        let x_dir = diff[0]
            .try_normalize(f64::EPSILON)
            .ok_or(InvalidGeometry::CoincidentPoints)?;

        let mut y_acc = Vector3::zeros();
        for d in diff.iter() {
            let residual = d - x_dir * x_dir.dot(d);
            let plus = y_acc + residual;
            let minus = y_acc - residual;
            y_acc = if plus.norm() >= minus.norm() { plus } else { minus };
        }
        let y_dir = y_acc
            .try_normalize(f64::EPSILON)
            .ok_or(InvalidGeometry::DegenerateContour)?;

        let points = diff
            .iter()
            .map(|d| crate::Point2::new(x_dir.dot(d), y_dir.dot(d)))
            .collect::<Vec<_>>();

        Profile2D::new(&format!("{}_flattened", self.name), &points)
    }
}
