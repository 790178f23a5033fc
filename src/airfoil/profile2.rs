//! Normalized 2D airfoil sections addressed by signed x-values.
//!
//! A section is stored as a single ordered curve running from the trailing edge over the upper
//! surface to the nose, and from there over the lower surface back to the trailing edge. Positions
//! on the section are addressed by a signed x-value: negative values lie on the upper surface,
//! positive values (and zero, which is the nose) on the lower surface.

use super::normalize::{normalize_points, nose_index};
use crate::common::{AngleDir, cosine_distribution};
use crate::errors::InvalidGeometry;
use crate::geom2::rot90;
use crate::{Error, Point2, Result, Vector2, min_max};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};
use std::sync::Arc;

/// Distance in x by which a lookup may exceed the stored range of a surface before it is
/// rejected. Lookups inside the tolerance are clamped to the surface end.
pub const LOOKUP_TOL: f64 = 1e-4;

/// A curve in the normalized frame together with the index of its nose point.
#[derive(Debug, Clone)]
struct Section {
    data: Vec<Point2>,
    nose_index: usize,
}

impl Section {
    fn new(data: Vec<Point2>) -> Self {
        let nose_index = nose_index(&data);
        Self { data, nose_index }
    }

    /// First and last index (inclusive) of the upper or lower surface. The nose point belongs to
    /// both ranges so that lookups close to the nose can interpolate on either side.
    fn surface(&self, upper: bool) -> (usize, usize) {
        if upper {
            (0, self.nose_index)
        } else {
            (self.nose_index, self.data.len() - 1)
        }
    }

    /// Finds the fractional curve index and the point for a signed x-value.
    fn locate(&self, x: f64) -> Result<(f64, Point2)> {
        if !x.is_finite() {
            return Err(InvalidGeometry::NonFiniteValue.into());
        }

        let (i0, i1) = self.surface(x < 0.0);
        let surface = &self.data[i0..=i1];
        let (s_min, s_max) = surface
            .iter()
            .map(|p| p.x)
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()
            .ok_or(InvalidGeometry::NotEnoughPoints)?;

        // An open trailing edge leaves one surface shorter than the chord; requests inside the
        // chord of the whole section land on that surface's end point.
        let (c_min, c_max) = self.x_range();
        let (min, max) = (s_min.min(c_min), s_max.max(c_max));

        let target = x.abs();
        if target < min - LOOKUP_TOL || target > max + LOOKUP_TOL {
            return Err(Error::OutOfRange { x, min, max });
        }
        let target = target.clamp(s_min, s_max);

        if i0 == i1 {
            return Ok((i0 as f64, self.data[i0]));
        }

        for (k, (a, b)) in surface.iter().tuple_windows().enumerate() {
            let (lo, hi) = min_max(a.x, b.x);
            if lo <= target && target <= hi {
                let f = if hi > lo {
                    (target - a.x) / (b.x - a.x)
                } else {
                    0.0
                };
                return Ok(((i0 + k) as f64 + f, a + (b - a) * f));
            }
        }

        Err(Error::OutOfRange { x, min, max })
    }

    /// The point at chordwise position `|x|` and relative height `h`, where -1 is the lower
    /// surface, 1 the upper surface and 0 the camber line.
    fn at_height(&self, x: f64, h: f64) -> Result<Point2> {
        let (_, upper) = self.locate(-x.abs())?;
        let (_, lower) = self.locate(x.abs())?;
        Ok(lower + (upper - lower) * ((h + 1.0) * 0.5))
    }

    fn x_values(&self) -> Vec<f64> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, p)| if i < self.nose_index { -p.x } else { p.x })
            .collect()
    }

    fn x_range(&self) -> (f64, f64) {
        self.data
            .iter()
            .map(|p| p.x)
            .minmax_by(|a, b| a.total_cmp(b))
            .into_option()
            .unwrap_or((0.0, 0.0))
    }

    fn map_points(&self, f: impl Fn(&Point2) -> Point2) -> Self {
        Self {
            data: self.data.iter().map(f).collect(),
            nose_index: self.nose_index,
        }
    }

    fn scaled_y(&self, factor: f64) -> Self {
        self.map_points(|p| Point2::new(p.x, p.y * factor))
    }

    fn with_camber_factor(&self, factor: f64) -> Result<Self> {
        let offsets = self
            .data
            .iter()
            .map(|p| self.at_height(p.x, 0.0).map(|c| c.y * factor))
            .collect::<Result<Vec<_>>>()?;

        let data = self
            .data
            .iter()
            .zip(offsets)
            .map(|(p, dy)| Point2::new(p.x, p.y + dy))
            .collect();

        Ok(Self {
            data,
            nose_index: self.nose_index,
        })
    }
}

/// A 2D airfoil section in the normalized frame: nose at the origin, trailing edge at (1, 0).
///
/// Besides its current points the profile keeps the high resolution normalized curve it was
/// created from. Every resampling is performed from that root curve, so resampling repeatedly
/// never compounds interpolation error. All operations which change the shape return a new
/// profile; a `Profile2D` itself is never modified.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ProfileRecord", into = "ProfileRecord")]
pub struct Profile2D {
    name: String,
    section: Section,
    root: Arc<Section>,
}

/// Serialized form of a profile: the name and the current points.
#[derive(Serialize, Deserialize)]
struct ProfileRecord {
    name: String,
    data: Vec<Point2>,
}

impl From<Profile2D> for ProfileRecord {
    fn from(value: Profile2D) -> Self {
        ProfileRecord {
            name: value.name,
            data: value.section.data,
        }
    }
}

impl TryFrom<ProfileRecord> for Profile2D {
    type Error = Error;

    fn try_from(value: ProfileRecord) -> Result<Self> {
        Profile2D::from_normalized(value.name, value.data)
    }
}

impl PartialEq for Profile2D {
    fn eq(&self, other: &Self) -> bool {
        self.section.data == other.section.data
    }
}

impl Profile2D {
    /// Create a new profile from raw section points, which will be normalized. The points must
    /// start at the trailing edge, run over one surface to the nose and back over the other.
    ///
    /// # Arguments
    ///
    /// * `name`: the profile name
    /// * `points`: the raw section points
    ///
    /// returns: Result<Profile2D, Error>
    ///
    /// # Examples
    ///
    /// ```
    /// use glidergeom::{Point2, Profile2D};
    /// let points = vec![
    ///     Point2::new(2.0, 0.0),
    ///     Point2::new(1.0, 0.1),
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(1.0, -0.1),
    ///     Point2::new(2.0, 0.0),
    /// ];
    /// let profile = Profile2D::new("test", &points).unwrap();
    /// assert_eq!(profile.nose_index(), 2);
    /// assert_eq!(profile.data()[0], Point2::new(1.0, 0.0));
    /// ```
    pub fn new(name: &str, points: &[Point2]) -> Result<Self> {
        let normalized = normalize_points(points)?;
        let profile = Self::from_normalized(name.to_string(), normalized)?;
        log::debug!(
            "created profile '{}' with {} points, nose at {}",
            profile.name,
            profile.numpoints(),
            profile.nose_index()
        );
        Ok(profile)
    }

    /// Create a profile from points which are already in the normalized frame. The points become
    /// the root curve of the profile.
    pub(crate) fn from_normalized(name: String, data: Vec<Point2>) -> Result<Self> {
        if data.len() < 3 {
            return Err(InvalidGeometry::NotEnoughPoints.into());
        }
        if data.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(InvalidGeometry::NonFiniteValue.into());
        }

        let section = Section::new(data);
        let root = Arc::new(section.clone());
        Ok(Self {
            name,
            section,
            root,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[Point2] {
        &self.section.data
    }

    pub fn nose_index(&self) -> usize {
        self.section.nose_index
    }

    pub fn numpoints(&self) -> usize {
        self.section.data.len()
    }

    /// The high resolution curve retained from construction, which all resampling starts from.
    pub fn root_data(&self) -> &[Point2] {
        &self.root.data
    }

    pub fn renamed(&self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self.clone()
        }
    }

    /// Get the point on the profile at a signed x-value, interpolating linearly between the
    /// stored points. Negative values address the upper surface, zero and positive values the
    /// lower surface (x = 0 is the nose regardless of the sign of the zero).
    ///
    /// Values inside the chordwise range of the section but beyond the end of the addressed
    /// surface, as at an open trailing edge, give that surface's end point. Values outside the
    /// range of the section by more than `LOOKUP_TOL` are rejected with `Error::OutOfRange`.
    pub fn point(&self, x: f64) -> Result<Point2> {
        self.section.locate(x).map(|(_, p)| p)
    }

    /// Get the fractional curve index of a signed x-value. The integer part is the index of the
    /// preceding stored point and the fraction is the position between it and the next point.
    pub fn x_index(&self, x: f64) -> Result<f64> {
        self.section.locate(x).map(|(i, _)| i)
    }

    /// Get the point at chordwise position `|x|` and relative height `h` between the surfaces,
    /// where -1 is the lower surface, 1 is the upper surface and 0 is the camber line.
    pub fn point_at_height(&self, x: f64, h: f64) -> Result<Point2> {
        self.section.at_height(x, h)
    }

    /// Map a sequence of signed x-values onto the profile. The result has the order of the input.
    pub fn points(&self, xs: &[f64]) -> Result<Vec<Point2>> {
        xs.iter().map(|x| self.point(*x)).collect()
    }

    /// Point lookup on the high resolution root curve instead of the current points.
    pub fn root_point(&self, x: f64) -> Result<Point2> {
        self.root.locate(x).map(|(_, p)| p)
    }

    /// The signed x-value of every stored point: negative on the upper surface, positive on the
    /// lower surface.
    pub fn x_values(&self) -> Vec<f64> {
        self.section.x_values()
    }

    /// Create a profile whose points sit at the given signed x-values. The points are always
    /// taken from the root curve, so the result does not depend on any earlier resampling.
    pub fn with_x_values(&self, xs: &[f64]) -> Result<Self> {
        if xs.len() < 3 {
            return Err(InvalidGeometry::NotEnoughPoints.into());
        }

        let data = xs
            .iter()
            .map(|x| self.root_point(*x))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("resampled profile '{}' to {} points", self.name, data.len());
        Ok(Self {
            name: self.name.clone(),
            section: Section::new(data),
            root: Arc::clone(&self.root),
        })
    }

    /// Resample the profile onto a cosine spaced distribution of x-values, which concentrates
    /// points at the leading and trailing edge. The result has `n` points when `n` is odd and
    /// `n - 1` points when it is even, symmetric about the nose.
    pub fn with_numpoints(&self, n: usize) -> Result<Self> {
        self.with_x_values(&cosine_distribution(n)?)
    }

    /// Discard any resampling and return to the points of the root curve.
    pub fn reset(&self) -> Self {
        Self {
            name: self.name.clone(),
            section: self.root.as_ref().clone(),
            root: Arc::clone(&self.root),
        }
    }

    fn unsigned_x_values(&self) -> Vec<f64> {
        self.x_values()
            .iter()
            .map(|x| x.abs())
            .sorted_by(|a, b| a.total_cmp(b))
            .dedup()
            .collect()
    }

    /// The thickness (upper minus lower surface height) at the given chordwise positions, as
    /// `(x, thickness)` pairs. Without explicit positions the distinct unsigned x-values of the
    /// stored points are used.
    pub fn thickness(&self, xs: Option<&[f64]>) -> Result<Vec<(f64, f64)>> {
        let xs = xs.map_or_else(|| self.unsigned_x_values(), |v| v.to_vec());
        xs.iter()
            .map(|x| {
                let x = x.abs();
                let upper = self.point(-x)?;
                let lower = self.point(x)?;
                Ok((x, upper.y - lower.y))
            })
            .collect()
    }

    pub fn max_thickness(&self) -> Result<f64> {
        Ok(self
            .thickness(None)?
            .iter()
            .map(|(_, t)| *t)
            .fold(f64::NEG_INFINITY, f64::max))
    }

    /// Create a profile with the given maximum thickness by scaling every y coordinate. The new
    /// profile is named after this one with the thickness percentage appended.
    pub fn with_thickness(&self, thickness: f64) -> Result<Self> {
        let current = self.max_thickness()?;
        if current.abs() <= f64::EPSILON {
            return Err(InvalidGeometry::ZeroThickness.into());
        }

        let factor = thickness / current;
        Ok(Self {
            name: format!("{}_{:?}%", self.name, thickness * 100.0),
            section: self.section.scaled_y(factor),
            root: Arc::new(self.root.scaled_y(factor)),
        })
    }

    /// The camber line (the middle between the surfaces) at the given chordwise positions, as
    /// `(x, y)` pairs. Without explicit positions the distinct unsigned x-values of the stored
    /// points are used.
    pub fn camber(&self, xs: Option<&[f64]>) -> Result<Vec<(f64, f64)>> {
        let xs = xs.map_or_else(|| self.unsigned_x_values(), |v| v.to_vec());
        xs.iter()
            .map(|x| {
                let p = self.point_at_height(*x, 0.0)?;
                Ok((x.abs(), p.y))
            })
            .collect()
    }

    pub fn max_camber(&self) -> Result<f64> {
        Ok(self
            .camber(None)?
            .iter()
            .map(|(_, c)| *c)
            .fold(f64::NEG_INFINITY, f64::max))
    }

    /// Create a profile with the given maximum camber. The thickness distribution is kept and
    /// only the offset of the camber line is scaled.
    pub fn with_camber(&self, camber: f64) -> Result<Self> {
        let current = self.max_camber()?;
        if current.abs() <= f64::EPSILON {
            return Err(InvalidGeometry::ZeroCamber.into());
        }

        let factor = camber / current - 1.0;
        Ok(Self {
            name: self.name.clone(),
            section: self.section.with_camber_factor(factor)?,
            root: Arc::new(self.root.with_camber_factor(factor)?),
        })
    }

    /// Create a profile with every y coordinate multiplied by `factor`. A factor of zero closes
    /// the profile onto its chord line.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            name: self.name.clone(),
            section: self.section.scaled_y(factor),
            root: Arc::new(self.root.scaled_y(factor)),
        }
    }

    /// Outward pointing unit normals at every stored point, estimated from the neighboring
    /// points.
    pub fn normals(&self) -> Result<Vec<Vector2>> {
        let data = &self.section.data;
        let last = data.len() - 1;
        let outward = rot90(AngleDir::of_contour(data).opposite());

        (0..data.len())
            .map(|i| {
                let tangent = data[(i + 1).min(last)] - data[i.saturating_sub(1)];
                (outward * tangent)
                    .try_normalize(f64::EPSILON)
                    .ok_or_else(|| InvalidGeometry::CoincidentPoints.into())
            })
            .collect()
    }
}

impl Add for &Profile2D {
    type Output = Result<Profile2D>;

    /// Combine two profiles: the operand with fewer points is resampled onto the x-values of the
    /// other, and the y coordinates of the other are added to it. The chordwise range of the
    /// higher resolution operand must lie within the root range of the resampled one.
    fn add(self, other: Self) -> Self::Output {
        let (base, detail) = if self.numpoints() > other.numpoints() {
            (other, self)
        } else {
            (self, other)
        };

        let (a_min, a_max) = base.root.x_range();
        let (b_min, b_max) = detail.section.x_range();
        if b_min < a_min - LOOKUP_TOL || b_max > a_max + LOOKUP_TOL {
            return Err(Error::DomainMismatch {
                a_min,
                a_max,
                b_min,
                b_max,
            });
        }

        let target = detail.x_values();
        let resampled = if base.x_values() == target {
            base.clone()
        } else {
            base.with_x_values(&target)?
        };

        let data = resampled
            .data()
            .iter()
            .zip(detail.data())
            .map(|(p, q)| Point2::new(p.x, p.y + q.y))
            .collect();

        Profile2D::from_normalized(base.name.clone(), data)
    }
}

impl Mul<f64> for &Profile2D {
    type Output = Profile2D;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scaled(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    /// Symmetric section with shared x-values on both surfaces
    fn symmetric() -> Profile2D {
        let points = [
            (1.0, 0.0),
            (0.5, 0.05),
            (0.2, 0.06),
            (0.0, 0.0),
            (0.2, -0.06),
            (0.5, -0.05),
            (1.0, 0.0),
        ];
        let points = points.iter().map(|(x, y)| Point2::new(*x, *y)).collect::<Vec<_>>();
        Profile2D::new("symmetric", &points).unwrap()
    }

    /// Cambered section with a sine shaped surface, dense enough to resample
    fn cambered(n: usize) -> Profile2D {
        let mut points = Vec::new();
        for i in 0..=n {
            let x = 1.0 - i as f64 / n as f64;
            points.push(Point2::new(x, 0.12 * (std::f64::consts::PI * x).sin() * (1.0 - x)));
        }
        for i in 1..=n {
            let x = i as f64 / n as f64;
            points.push(Point2::new(x, -0.04 * (std::f64::consts::PI * x).sin()));
        }
        Profile2D::new("cambered", &points).unwrap()
    }

    #[test_case(-0.5, (0.5, 0.05))]
    #[test_case(0.5, (0.5, -0.05))]
    #[test_case(0.35, (0.35, -0.055))]
    #[test_case(-0.35, (0.35, 0.055))]
    #[test_case(1.0, (1.0, 0.0))]
    #[test_case(-1.0, (1.0, 0.0))]
    fn point_lookup(x: f64, e: (f64, f64)) {
        let p = symmetric().point(x).unwrap();
        assert_relative_eq!(p, Point2::new(e.0, e.1), epsilon = 1e-12);
    }

    #[test_case(0.35, 4.5)]
    #[test_case(-0.35, 1.5)]
    #[test_case(0.5, 5.0)]
    #[test_case(-0.5, 1.0)]
    fn fractional_index(x: f64, e: f64) {
        assert_relative_eq!(symmetric().x_index(x).unwrap(), e, epsilon = 1e-12);
    }

    #[test]
    fn zero_of_either_sign_is_the_nose() {
        let profile = symmetric();
        assert_relative_eq!(profile.x_index(0.0).unwrap(), 3.0);
        assert_relative_eq!(profile.x_index(-0.0).unwrap(), 3.0);
        assert_relative_eq!(profile.point(-0.0).unwrap(), Point2::origin(), epsilon = 1e-12);
    }

    #[test_case(1.5)]
    #[test_case(-1.2)]
    #[test_case(f64::NAN)]
    fn lookup_out_of_range_fails(x: f64) {
        assert!(symmetric().point(x).is_err());
    }

    #[test]
    fn lookup_out_of_range_reports_bounds() {
        match symmetric().point(1.5) {
            Err(Error::OutOfRange { x, min, max }) => {
                assert_eq!(x, 1.5);
                assert_relative_eq!(min, 0.0, epsilon = 1e-12);
                assert_relative_eq!(max, 1.0, epsilon = 1e-12);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn points_keep_input_order() {
        let points = symmetric().points(&[0.5, -0.5, 0.0]).unwrap();
        assert_relative_eq!(points[0], Point2::new(0.5, -0.05), epsilon = 1e-12);
        assert_relative_eq!(points[1], Point2::new(0.5, 0.05), epsilon = 1e-12);
        assert_relative_eq!(points[2], Point2::origin(), epsilon = 1e-12);
    }

    #[test]
    fn x_values_are_signed_by_surface() {
        let xs = symmetric().x_values();
        let expected = [-1.0, -0.5, -0.2, 0.0, 0.2, 0.5, 1.0];
        for (a, b) in xs.iter().zip(expected.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn resampling_starts_from_root() {
        let profile = cambered(100);
        let d1 = cosine_distribution(15).unwrap();
        let d2 = cosine_distribution(41).unwrap();

        let direct = profile.with_x_values(&d2).unwrap();
        let chained = profile
            .with_x_values(&d1)
            .unwrap()
            .with_x_values(&d2)
            .unwrap();

        assert_eq!(direct, chained);
        assert_eq!(chained.root_data().len(), 201);
    }

    #[test]
    fn numpoints_is_symmetric() {
        let profile = cambered(100).with_numpoints(20).unwrap();
        assert_eq!(profile.numpoints(), 19);
        assert_eq!(profile.nose_index(), 9);

        let xs = profile.x_values();
        for i in 0..9 {
            assert_relative_eq!(xs[i], -xs[18 - i], epsilon = 1e-12);
        }
    }

    #[test]
    fn reset_restores_root() {
        let profile = cambered(50);
        let reset = profile.with_numpoints(11).unwrap().reset();
        assert_eq!(reset, profile);
    }

    #[test]
    fn thickness_of_symmetric() {
        let thickness = symmetric().thickness(Some(&[0.2, -0.5][..])).unwrap();
        assert_relative_eq!(thickness[0].1, 0.12, epsilon = 1e-12);
        assert_relative_eq!(thickness[1].0, 0.5, epsilon = 1e-12);
        assert_relative_eq!(thickness[1].1, 0.10, epsilon = 1e-12);
        assert_relative_eq!(symmetric().max_thickness().unwrap(), 0.12, epsilon = 1e-12);
    }

    #[test_case(0.08, "cambered_8.0%")]
    #[test_case(0.2, "cambered_20.0%")]
    #[test_case(0.125, "cambered_12.5%")]
    fn thickness_round_trip(t: f64, name: &str) {
        let profile = cambered(60).with_numpoints(31).unwrap();
        let thicker = profile.with_thickness(t).unwrap();
        assert_relative_eq!(thicker.max_thickness().unwrap(), t, epsilon = 1e-12);
        assert_eq!(thicker.name(), name);
    }

    /// Section whose surfaces end 0.02 apart, so the lower surface stops short of x = 1
    fn open_trailing_edge() -> Profile2D {
        let points = [
            (1.0, 0.01),
            (0.5, 0.06),
            (0.2, 0.05),
            (0.0, 0.0),
            (0.2, -0.04),
            (0.5, -0.04),
            (1.0, -0.01),
        ];
        let points = points.iter().map(|(x, y)| Point2::new(*x, *y)).collect::<Vec<_>>();
        Profile2D::new("open", &points).unwrap()
    }

    #[test]
    fn open_trailing_edge_lookups_reach_surface_end() {
        let profile = open_trailing_edge();
        let lower_end = profile.data()[6];
        assert!(lower_end.x < 1.0 - LOOKUP_TOL);

        assert_relative_eq!(profile.point(1.0).unwrap(), lower_end, epsilon = 1e-12);
        assert_relative_eq!(profile.x_index(1.0).unwrap(), 6.0, epsilon = 1e-12);
        assert!(profile.point(1.0 + 2.0 * LOOKUP_TOL).is_err());

        let thickness = profile.thickness(None).unwrap();
        let (x, t) = thickness[thickness.len() - 1];
        assert_relative_eq!(x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(t, -lower_end.y, epsilon = 1e-12);
        assert!(profile.max_thickness().unwrap() > t);
    }

    #[test]
    fn open_trailing_edge_resamples() {
        let profile = open_trailing_edge();
        let resampled = profile.with_numpoints(21).unwrap();
        assert_eq!(resampled.numpoints(), 21);
        assert_relative_eq!(resampled.data()[0], profile.data()[0], epsilon = 1e-12);
        assert_relative_eq!(resampled.data()[20], profile.data()[6], epsilon = 1e-12);
    }

    #[test]
    fn zero_thickness_cannot_be_scaled() {
        let flat = symmetric().scaled(0.0);
        assert!(flat.with_thickness(0.1).is_err());
    }

    #[test]
    fn camber_of_symmetric_is_zero() {
        for (_, c) in symmetric().camber(None).unwrap() {
            assert_relative_eq!(c, 0.0, epsilon = 1e-12);
        }
        assert!(symmetric().with_camber(0.02).is_err());
    }

    #[test]
    fn camber_round_trip() {
        let profile = cambered(60).with_numpoints(31).unwrap();
        let original_thickness = profile.max_thickness().unwrap();
        let more = profile.with_camber(0.05).unwrap();
        assert_relative_eq!(more.max_camber().unwrap(), 0.05, epsilon = 1e-9);
        assert_relative_eq!(more.max_thickness().unwrap(), original_thickness, epsilon = 1e-9);
    }

    #[test]
    fn scaling_by_operator() {
        let half = &symmetric() * 0.5;
        assert_relative_eq!(half.point(-0.2).unwrap(), Point2::new(0.2, 0.03), epsilon = 1e-12);
    }

    #[test]
    fn normals_point_outward() {
        let normals = symmetric().normals().unwrap();
        assert_relative_eq!(normals[3], Vector2::new(-1.0, 0.0), epsilon = 1e-12);
        assert!(normals[1].y > 0.0);
        assert!(normals[5].y < 0.0);
    }

    #[test]
    fn addition_adds_y_onto_finer_distribution() {
        let fine = cambered(60).with_numpoints(41).unwrap();
        let coarse = symmetric();
        let sum = (&coarse + &fine).unwrap();

        assert_eq!(sum.numpoints(), fine.numpoints());
        assert_eq!(sum.name(), "symmetric");
        for (i, x) in fine.x_values().iter().enumerate() {
            let expected = coarse.point(*x).unwrap().y + fine.data()[i].y;
            assert_relative_eq!(sum.data()[i].y, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn addition_rejects_disjoint_domains() {
        let profile = symmetric();
        let shifted = Profile2D::from_normalized(
            "shifted".to_string(),
            profile
                .data()
                .iter()
                .map(|p| Point2::new(p.x + 5.0, p.y))
                .collect(),
        )
        .unwrap();

        assert!(matches!(&profile + &shifted, Err(Error::DomainMismatch { .. })));
    }

    #[test]
    fn serializes_name_and_points() {
        let profile = symmetric().with_numpoints(11).unwrap();
        let json = serde_json::to_string(&profile).unwrap();
        let restored: Profile2D = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.name(), "symmetric");
        assert_eq!(restored.numpoints(), 11);
        assert_eq!(restored.nose_index(), 5);
        for (a, b) in restored.data().iter().zip(profile.data()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }
}
