//! This module contains the placement of airfoil sections on a wing: ribs, which map a normalized
//! 2D profile into 3D space through a position, a chord length and three orientation angles, and
//! mini ribs, which blend rib sections spanwise.

mod mini_rib;
mod rib;

pub use mini_rib::MiniRib;
pub use rib::{CacheStats, Rib, rib_rotation};

use crate::Point3;
use serde::{Deserialize, Serialize};

/// The difference between the relative and the absolute angle of attack of a rib, which depends
/// on the arc angle of the rib and the glide ratio of the wing.
///
/// # Arguments
///
/// * `arcang`: the arc angle of the rib in radians
/// * `glide`: the glide ratio
///
/// returns: f64
pub fn aoa_difference(arcang: f64, glide: f64) -> f64 {
    (arcang.cos() / glide).atan()
}

/// An angle of attack in radians, either measured against the glide path (relative) or as the
/// actual rotation of the rib (absolute). Only one of the two is stored; the other is derived
/// from the arc angle and the glide ratio when it is needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AngleOfAttack {
    Absolute(f64),
    Relative(f64),
}

impl AngleOfAttack {
    pub fn absolute(&self, arcang: f64, glide: f64) -> f64 {
        match self {
            AngleOfAttack::Absolute(a) => *a,
            AngleOfAttack::Relative(a) => *a - aoa_difference(arcang, glide),
        }
    }

    pub fn relative(&self, arcang: f64, glide: f64) -> f64 {
        match self {
            AngleOfAttack::Absolute(a) => *a + aoa_difference(arcang, glide),
            AngleOfAttack::Relative(a) => *a,
        }
    }

    /// The stored angle, in whichever representation it was given.
    pub fn value(&self) -> f64 {
        match self {
            AngleOfAttack::Absolute(a) | AngleOfAttack::Relative(a) => *a,
        }
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, AngleOfAttack::Absolute(_))
    }

    /// Convert to the absolute representation.
    pub fn to_absolute(self, arcang: f64, glide: f64) -> Self {
        AngleOfAttack::Absolute(self.absolute(arcang, glide))
    }

    /// Convert to the relative representation.
    pub fn to_relative(self, arcang: f64, glide: f64) -> Self {
        AngleOfAttack::Relative(self.relative(arcang, glide))
    }
}

impl Default for AngleOfAttack {
    fn default() -> Self {
        AngleOfAttack::Absolute(0.0)
    }
}

/// The parameters which place a rib in space. All angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RibPlacement {
    /// The position of the rib's nose in wing coordinates.
    pub pos: Point3,

    /// The chord length, the scale applied to the unit chord profile.
    pub chord: f64,

    /// The arc angle, the inclination of the rib away from vertical in the spanwise direction.
    pub arcang: f64,

    pub aoa: AngleOfAttack,

    /// The rotation of the rib about its own thickness direction, applied after the arc and aoa
    /// rotations.
    pub zrot: f64,

    /// The glide ratio of the wing, used to convert between absolute and relative aoa.
    pub glide: f64,
}

impl RibPlacement {
    /// Create a new set of placement parameters
    ///
    /// # Arguments
    ///
    /// * `pos`: the position of the rib's nose
    /// * `chord`: the chord length
    /// * `arcang`: the arc angle in radians
    /// * `aoa`: the angle of attack, absolute or relative
    /// * `zrot`: the rotation about the rib's thickness direction in radians
    /// * `glide`: the glide ratio
    ///
    /// returns: RibPlacement
    pub fn new(
        pos: Point3,
        chord: f64,
        arcang: f64,
        aoa: AngleOfAttack,
        zrot: f64,
        glide: f64,
    ) -> Self {
        Self {
            pos,
            chord,
            arcang,
            aoa,
            zrot,
            glide,
        }
    }

    pub fn aoa_absolute(&self) -> f64 {
        self.aoa.absolute(self.arcang, self.glide)
    }

    pub fn aoa_relative(&self) -> f64 {
        self.aoa.relative(self.arcang, self.glide)
    }
}

impl Default for RibPlacement {
    fn default() -> Self {
        Self {
            pos: Point3::origin(),
            chord: 1.0,
            arcang: 0.0,
            aoa: AngleOfAttack::default(),
            zrot: 0.0,
            glide: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;
    use test_case::test_case;

    #[test_case(0.0, 1.0, std::f64::consts::FRAC_PI_4)]
    #[test_case(std::f64::consts::FRAC_PI_2, 8.0, 0.0)]
    fn difference_values(arcang: f64, glide: f64, expected: f64) {
        assert_relative_eq!(aoa_difference(arcang, glide), expected, epsilon = 1e-12);
    }

    #[test]
    fn aoa_round_trip() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let arcang = rng.random_range(-1.5..1.5);
            let glide = rng.random_range(2.0..12.0);
            let aoa = rng.random_range(-0.3..0.3);

            let rel = AngleOfAttack::Relative(aoa);
            let back = AngleOfAttack::Absolute(rel.absolute(arcang, glide));
            assert_relative_eq!(back.relative(arcang, glide), aoa, epsilon = 1e-12);

            let abs = AngleOfAttack::Absolute(aoa);
            let back = abs.to_relative(arcang, glide).to_absolute(arcang, glide);
            assert_relative_eq!(back.value(), aoa, epsilon = 1e-12);
            assert!(back.is_absolute());
        }
    }

    #[test]
    fn placement_defaults() {
        let placement = RibPlacement::default();
        assert_eq!(placement.chord, 1.0);
        assert_eq!(placement.glide, 1.0);
        assert_eq!(placement.aoa, AngleOfAttack::Absolute(0.0));
        assert_relative_eq!(placement.aoa_relative(), std::f64::consts::FRAC_PI_4);
    }
}
