//! Parametric geometry for paraglider wing design: normalized 2D airfoil profiles, their
//! resampling and derived quantities, and the placement of ribs in 3D space.

pub mod airfoil;
pub mod common;
pub mod errors;
pub mod geom2;
pub mod geom3;
pub mod glider;
pub mod solver;

pub use crate::airfoil::{Profile2D, Profile3D};
pub use crate::errors::{Error, InvalidGeometry};
pub use crate::geom2::{Point2, Vector2};
pub use crate::geom3::{Point3, Rotation3, Vector3};
pub use crate::glider::{AngleOfAttack, MiniRib, Rib, RibPlacement};

pub type Result<T> = std::result::Result<T, Error>;

fn min_max(f0: f64, f1: f64) -> (f64, f64) {
    if f0 < f1 { (f0, f1) } else { (f1, f0) }
}
