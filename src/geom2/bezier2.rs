//! Bezier curves in the plane, used to build smooth shaping functions such as the blending
//! function of a mini rib.

use crate::common::points::dist;
use crate::common::{Interpolation1, linear_space};
use crate::errors::InvalidGeometry;
use crate::{Point2, Result, Vector2};
use itertools::Itertools;
use parry2d_f64::na::DMatrix;
use serde::{Deserialize, Serialize};

/// A Bezier curve of arbitrary degree defined by its control points and evaluated in Bernstein
/// form over the parameter range [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bezier2 {
    control_points: Vec<Point2>,
}

impl Bezier2 {
    pub fn new(control_points: Vec<Point2>) -> Result<Self> {
        if control_points.is_empty() {
            return Err(InvalidGeometry::NotEnoughPoints.into());
        }
        Ok(Self { control_points })
    }

    pub fn control_points(&self) -> &[Point2] {
        &self.control_points
    }

    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    /// Evaluate the curve at parameter `t`, where 0 is the first control point and 1 the last.
    pub fn at(&self, t: f64) -> Point2 {
        let n = self.degree();
        let sum = self
            .control_points
            .iter()
            .enumerate()
            .fold(Vector2::zeros(), |acc, (i, p)| {
                acc + p.coords * bernstein(n, i, t)
            });
        Point2::from(sum)
    }

    /// Sample the curve at `n` evenly spaced parameter values, including both ends.
    pub fn sequence(&self, n: usize) -> Vec<Point2> {
        linear_space(0.0, 1.0, n)
            .into_iter()
            .map(|t| self.at(t))
            .collect()
    }

    /// Approximate the arc length of the curve by the length of the polyline through `n`
    /// samples.
    pub fn length(&self, n: usize) -> f64 {
        self.sequence(n)
            .iter()
            .tuple_windows()
            .map(|(a, b)| dist(a, b))
            .sum()
    }

    /// Least squares fit of a curve with `num_control` control points to an ordered sequence of
    /// points, which are assumed to be evenly spaced in the curve parameter.
    ///
    /// # Arguments
    ///
    /// * `points`: the ordered points to fit, at least `num_control` of them
    /// * `num_control`: the number of control points of the resulting curve
    ///
    /// returns: Result<Bezier2, Error>
    pub fn fit(points: &[Point2], num_control: usize) -> Result<Self> {
        if num_control == 0 || points.len() < num_control {
            return Err(InvalidGeometry::NotEnoughPoints.into());
        }

        let n = num_control - 1;
        let ts = linear_space(0.0, 1.0, points.len());
        let basis = DMatrix::from_fn(points.len(), num_control, |r, c| bernstein(n, c, ts[r]));
        let targets = DMatrix::from_fn(points.len(), 2, |r, c| points[r][c]);

        let solution = basis
            .svd(true, true)
            .solve(&targets, 1e-12)
            .map_err(|_| InvalidGeometry::DegenerateContour)?;

        let control_points = (0..num_control)
            .map(|i| Point2::new(solution[(i, 0)], solution[(i, 1)]))
            .collect();

        Self::new(control_points)
    }

    /// Treat the curve as the graph of a function `y(x)` and build a linear interpolation of it
    /// from `n` samples. Only meaningful for curves whose x coordinate is monotonic in `t`.
    pub fn interpolation(&self, n: usize) -> Result<Interpolation1> {
        Interpolation1::new(&self.sequence(n))
    }
}

fn binomial(n: usize, k: usize) -> f64 {
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

fn bernstein(n: usize, i: usize, t: f64) -> f64 {
    binomial(n, i) * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32)
}
