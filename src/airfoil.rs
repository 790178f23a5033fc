//! This module contains the airfoil profile engine: normalized 2D section curves addressed by
//! signed x-values, their resampling and derived quantities (thickness, camber), the plain text
//! profile file format, and 3D section curves which can be flattened back into the plane.

mod dat;
mod normalize;
mod profile2;
mod profile3;

pub use normalize::normalize_points;
pub use profile2::{LOOKUP_TOL, Profile2D};
pub use profile3::Profile3D;
