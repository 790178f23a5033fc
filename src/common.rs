mod angles;
mod interpolation;
pub mod points;

pub use angles::AngleDir;
pub use interpolation::Interpolation1;

use crate::errors::InvalidGeometry;
use crate::Result;
use std::f64::consts::PI;

/// Generate a vec of domain values which are linearly spaced between `start` and `end` and which
/// have a count of `count`. The first value will be `start` and the last value will be `end`.
///
/// # Arguments
///
/// * `start`: the starting value of the domain, inclusive
/// * `end`: the ending value of the domain, inclusive
/// * `count`: the total number of discrete, evenly spaced values in the domain
///
/// returns: Vec<f64, Global>
///
/// # Examples
///
/// ```
/// use glidergeom::common::linear_space;
/// let domain = linear_space(0.0, 1.0, 3);
/// assert_eq!(domain, vec![0.0, 0.5, 1.0]);
/// ```
pub fn linear_space(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![start; count];
    }

    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| start + i as f64 * step).collect()
}

/// Generate a cosine spaced distribution of signed x-values running from the upper trailing edge
/// (-1) over the nose (0) to the lower trailing edge (1). The spacing concentrates values near
/// both edges of the airfoil, where the curvature is highest.
///
/// The distribution always has an odd number of values so that it is symmetric about the nose:
/// an odd `n` yields `n` values, an even `n` yields `n - 1` values.
///
/// # Arguments
///
/// * `n`: the requested number of values, must be at least 3
///
/// returns: Result<Vec<f64, Global>, Error>
///
/// # Examples
///
/// ```
/// use glidergeom::common::cosine_distribution;
/// let values = cosine_distribution(4).unwrap();
/// assert_eq!(values.len(), 3);
/// assert_eq!(values[1], 0.0);
/// ```
pub fn cosine_distribution(n: usize) -> Result<Vec<f64>> {
    if n < 3 {
        return Err(InvalidGeometry::InvalidNumPoints.into());
    }

    let intervals = (n - 1) - (n - 1) % 2;
    let values = (0..=intervals)
        .map(|j| {
            let t = j as f64 / intervals as f64;
            let side = if 2 * j < intervals {
                -1.0
            } else if 2 * j == intervals {
                0.0
            } else {
                1.0
            };
            side * (1.0 - (PI * t).sin())
        })
        .collect();

    Ok(values)
}
