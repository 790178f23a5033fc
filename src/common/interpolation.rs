//! Piecewise linear interpolation of a scalar function sampled at discrete positions.

use crate::errors::InvalidGeometry;
use crate::{Point2, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A scalar function `y(x)` defined by samples and evaluated by linear interpolation between the
/// two samples bracketing `x`. Outside of the sampled range the value of the nearest end sample
/// is returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Samples")]
pub struct Interpolation1 {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

#[derive(Deserialize)]
struct Samples {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl TryFrom<Samples> for Interpolation1 {
    type Error = crate::Error;

    fn try_from(value: Samples) -> Result<Self> {
        if value.xs.len() != value.ys.len() {
            return Err(InvalidGeometry::NotEnoughPoints.into());
        }
        let samples = value
            .xs
            .iter()
            .zip(value.ys.iter())
            .map(|(x, y)| Point2::new(*x, *y))
            .collect::<Vec<_>>();
        Self::new(&samples)
    }
}

impl Interpolation1 {
    /// Create the interpolation from a set of (x, y) samples. The samples do not need to be
    /// sorted, but they must be finite and there must be at least one of them.
    pub fn new(samples: &[Point2]) -> Result<Self> {
        if samples.is_empty() {
            return Err(InvalidGeometry::NotEnoughPoints.into());
        }
        if samples.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(InvalidGeometry::NonFiniteValue.into());
        }

        let (xs, ys) = samples
            .iter()
            .sorted_by(|a, b| a.x.total_cmp(&b.x))
            .map(|p| (p.x, p.y))
            .unzip();

        Ok(Self { xs, ys })
    }

    pub fn at(&self, x: f64) -> f64 {
        let last = self.xs.len() - 1;
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[last] {
            return self.ys[last];
        }

        // The first index with xs[i] > x, guaranteed to be in 1..=last by the checks above
        let i = self.xs.partition_point(|v| *v <= x);
        let (x0, x1) = (self.xs[i - 1], self.xs[i]);
        let (y0, y1) = (self.ys[i - 1], self.ys[i]);
        if x1 - x0 <= f64::EPSILON {
            y1
        } else {
            y0 + (y1 - y0) * (x - x0) / (x1 - x0)
        }
    }
}
