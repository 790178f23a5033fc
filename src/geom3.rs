use crate::errors::InvalidGeometry;
use crate::{Point2, Result};

pub type Point3 = parry3d_f64::na::Point3<f64>;
pub type Vector3 = parry3d_f64::na::Vector3<f64>;
pub type UnitVec3 = parry3d_f64::na::Unit<Vector3>;
pub type Rotation3 = parry3d_f64::na::Rotation3<f64>;
pub type Matrix3 = parry3d_f64::na::Matrix3<f64>;

/// Builds the rotation of `angle` radians about `axis`, turning clockwise when looking along the
/// direction of the axis (equivalently, a right-handed rotation about `-axis`). This is the
/// convention the rib orientation angles are defined in.
///
/// # Arguments
///
/// * `angle`: the rotation angle in radians
/// * `axis`: the rotation axis, does not need to be normalized but must not be zero
///
/// returns: Result<Rotation<f64, 3>, Error>
///
/// # Examples
///
/// ```
/// use glidergeom::geom3::rotation_3d;
/// use glidergeom::{Point3, Vector3};
/// use approx::assert_relative_eq;
/// let rot = rotation_3d(std::f64::consts::FRAC_PI_2, &Vector3::new(-1.0, 0.0, 0.0)).unwrap();
/// assert_relative_eq!(rot * Point3::new(0.0, 1.0, 0.0), Point3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
/// ```
pub fn rotation_3d(angle: f64, axis: &Vector3) -> Result<Rotation3> {
    let axis = UnitVec3::try_new(-axis, f64::EPSILON).ok_or(InvalidGeometry::DegenerateContour)?;
    Ok(Rotation3::from_axis_angle(&axis, angle))
}

/// Conversion of 2D and 3D points into 3D space, with 2D points being placed in the z = 0 plane.
pub trait AsPoint3 {
    fn as_point3(&self) -> Point3;
}

impl AsPoint3 for Point3 {
    fn as_point3(&self) -> Point3 {
        *self
    }
}

impl AsPoint3 for Point2 {
    fn as_point3(&self) -> Point3 {
        Point3::new(self.x, self.y, 0.0)
    }
}

impl<T: AsPoint3> AsPoint3 for &T {
    fn as_point3(&self) -> Point3 {
        (*self).as_point3()
    }
}
