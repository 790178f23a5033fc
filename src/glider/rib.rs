use super::{AngleOfAttack, RibPlacement};
use crate::geom3::{AsPoint3, rotation_3d};
use crate::{Error, Point3, Profile2D, Profile3D, Result, Rotation3, Vector3};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cell::{Cell, OnceCell};
use std::f64::consts::FRAC_PI_2;
use std::sync::Arc;

/// Builds the orientation of a rib from its absolute angle of attack, its arc angle and `zrot`.
///
/// The rotations are applied in sequence, with each axis taken from the rotation accumulated so
/// far: first the rib is stood up from the x-y plane by `π/2 - arcang` about the chordwise axis,
/// then pitched by the angle of attack about the image of the profile's z axis (the rib
/// normal), and finally turned by `zrot` about the image of the profile's y axis. The order
/// matters; the rotations do not commute.
///
/// # Arguments
///
/// * `aoa_absolute`: the absolute angle of attack in radians
/// * `arcang`: the arc angle in radians
/// * `zrot`: the rotation about the thickness direction in radians
///
/// returns: Result<Rotation<f64, 3>, Error>
pub fn rib_rotation(aoa_absolute: f64, arcang: f64, zrot: f64) -> Result<Rotation3> {
    let rot = rotation_3d(FRAC_PI_2 - arcang, &-Vector3::x())?;
    let axis = rot * Vector3::z();
    let rot = rotation_3d(aoa_absolute, &axis)? * rot;
    let axis = rot * Vector3::y();
    let rot = rotation_3d(zrot, &axis)? * rot;
    Ok(rot)
}

/// Counts how many times each derived value of a rib has been computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub rotation: usize,
    pub profile_3d: usize,
    pub normvectors: usize,
}

/// A rib places a normalized 2D profile in 3D space. The profile is shared, not copied, between
/// the ribs which use it.
///
/// The rotation matrix, the 3D profile and the rotated profile normals are computed lazily and
/// memoized. Every setter discards exactly the derived values which depend on the parameter it
/// changes, so a read after a change never returns stale data and repeated reads without a change
/// never recompute.
#[derive(Debug, Clone)]
pub struct Rib {
    name: String,
    profile_2d: Option<Arc<Profile2D>>,
    ballooning: Option<serde_json::Value>,
    placement: RibPlacement,

    rotation: OnceCell<Rotation3>,
    profile_3d: OnceCell<Profile3D>,
    normvectors: OnceCell<Vec<Vector3>>,
    stats: Cell<CacheStats>,
}

impl Rib {
    pub fn new(name: &str, profile_2d: Option<Arc<Profile2D>>, placement: RibPlacement) -> Self {
        Self {
            name: name.to_string(),
            profile_2d,
            ballooning: None,
            placement,
            rotation: OnceCell::new(),
            profile_3d: OnceCell::new(),
            normvectors: OnceCell::new(),
            stats: Cell::new(CacheStats::default()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profile_2d(&self) -> Option<&Arc<Profile2D>> {
        self.profile_2d.as_ref()
    }

    pub fn ballooning(&self) -> Option<&serde_json::Value> {
        self.ballooning.as_ref()
    }

    pub fn placement(&self) -> &RibPlacement {
        &self.placement
    }

    pub fn pos(&self) -> Point3 {
        self.placement.pos
    }

    pub fn chord(&self) -> f64 {
        self.placement.chord
    }

    pub fn arcang(&self) -> f64 {
        self.placement.arcang
    }

    pub fn zrot(&self) -> f64 {
        self.placement.zrot
    }

    pub fn glide(&self) -> f64 {
        self.placement.glide
    }

    pub fn aoa(&self) -> AngleOfAttack {
        self.placement.aoa
    }

    pub fn aoa_absolute(&self) -> f64 {
        self.placement.aoa_absolute()
    }

    pub fn aoa_relative(&self) -> f64 {
        self.placement.aoa_relative()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.stats.get()
    }

    fn count(&self, f: impl FnOnce(&mut CacheStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }

    fn invalidate_orientation(&mut self) {
        self.rotation.take();
        self.normvectors.take();
        self.profile_3d.take();
    }

    fn invalidate_profile(&mut self) {
        self.normvectors.take();
        self.profile_3d.take();
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_profile_2d(&mut self, profile: Option<Arc<Profile2D>>) {
        self.profile_2d = profile;
        self.invalidate_profile();
    }

    pub fn set_ballooning(&mut self, ballooning: Option<serde_json::Value>) {
        self.ballooning = ballooning;
    }

    pub fn set_aoa(&mut self, aoa: AngleOfAttack) {
        self.placement.aoa = aoa;
        self.invalidate_orientation();
    }

    pub fn set_aoa_absolute(&mut self, aoa: f64) {
        self.set_aoa(AngleOfAttack::Absolute(aoa));
    }

    pub fn set_aoa_relative(&mut self, aoa: f64) {
        self.set_aoa(AngleOfAttack::Relative(aoa));
    }

    pub fn set_arcang(&mut self, arcang: f64) {
        self.placement.arcang = arcang;
        self.invalidate_orientation();
    }

    pub fn set_glide(&mut self, glide: f64) {
        self.placement.glide = glide;
        self.invalidate_orientation();
    }

    pub fn set_zrot(&mut self, zrot: f64) {
        self.placement.zrot = zrot;
        self.invalidate_orientation();
    }

    pub fn set_chord(&mut self, chord: f64) {
        self.placement.chord = chord;
        self.profile_3d.take();
    }

    pub fn set_pos(&mut self, pos: Point3) {
        self.placement.pos = pos;
        self.profile_3d.take();
    }

    /// Turn the rib into its counterpart on the other wing half by reflecting it through the
    /// x-z plane: the arc angle and `zrot` change sign, as does the spanwise coordinate of the
    /// position.
    pub fn mirror(&mut self) {
        self.placement.arcang = -self.placement.arcang;
        self.placement.zrot = -self.placement.zrot;
        self.placement.pos.y = -self.placement.pos.y;
        self.invalidate_orientation();
    }

    /// A copy of the rib named `<name>_copy`, sharing the same 2D profile.
    pub fn copy(&self) -> Self {
        let mut rib = self.clone();
        rib.name.push_str("_copy");
        rib
    }

    pub fn rotation_matrix(&self) -> Result<Rotation3> {
        if let Some(rot) = self.rotation.get() {
            return Ok(*rot);
        }

        let p = &self.placement;
        let rot = rib_rotation(p.aoa_absolute(), p.arcang, p.zrot)?;
        self.count(|s| s.rotation += 1);
        log::debug!("computed rotation matrix of rib '{}'", self.name);
        Ok(*self.rotation.get_or_init(|| rot))
    }

    /// Map a point of the normalized profile frame into wing coordinates: the point is scaled by
    /// the chord, rotated by the rib orientation and moved to the rib position. 2D points are
    /// taken to lie in the z = 0 plane.
    ///
    /// # Examples
    ///
    /// ```
    /// use glidergeom::{Point2, Point3, Rib, RibPlacement};
    /// use approx::assert_relative_eq;
    /// let placement = RibPlacement {
    ///     pos: Point3::new(0.0, 2.0, 0.0),
    ///     chord: 3.0,
    ///     ..Default::default()
    /// };
    /// let rib = Rib::new("r0", None, placement);
    /// let p = rib.align(Point2::new(1.0, 0.0)).unwrap();
    /// assert_relative_eq!(p, Point3::new(3.0, 2.0, 0.0), epsilon = 1e-12);
    /// ```
    pub fn align<P: AsPoint3>(&self, point: P) -> Result<Point3> {
        let rot = self.rotation_matrix()?;
        Ok(self.placement.pos + rot * point.as_point3().coords * self.placement.chord)
    }

    /// Map a sequence of points with `align`, keeping their order.
    pub fn align_all<P: AsPoint3>(&self, points: &[P]) -> Result<Vec<Point3>> {
        let rot = self.rotation_matrix()?;
        let pos = self.placement.pos;
        let chord = self.placement.chord;
        Ok(points
            .iter()
            .map(|p| pos + rot * p.as_point3().coords * chord)
            .collect())
    }

    fn require_profile(&self) -> Result<&Profile2D> {
        self.profile_2d
            .as_deref()
            .ok_or_else(|| Error::MissingProfile {
                rib: self.name.clone(),
            })
    }

    /// The 3D point at a signed x-value of the rib's profile.
    pub fn point(&self, x: f64) -> Result<Point3> {
        self.align(self.require_profile()?.point(x)?)
    }

    /// The rib's profile placed in wing coordinates, point for point.
    pub fn profile_3d(&self) -> Result<&Profile3D> {
        if let Some(profile) = self.profile_3d.get() {
            return Ok(profile);
        }

        let profile = self.require_profile()?;
        let points = self.align_all(profile.data())?;
        self.count(|s| s.profile_3d += 1);
        log::debug!(
            "computed 3d profile of rib '{}' with {} points",
            self.name,
            points.len()
        );
        Ok(self
            .profile_3d
            .get_or_init(|| Profile3D::new(&self.name, points)))
    }

    /// The outward normals of the profile rotated into wing coordinates.
    pub fn normvectors(&self) -> Result<&[Vector3]> {
        if let Some(normals) = self.normvectors.get() {
            return Ok(normals);
        }

        let rot = self.rotation_matrix()?;
        let normals = self
            .require_profile()?
            .normals()?
            .iter()
            .map(|n| rot * Vector3::new(n.x, n.y, 0.0))
            .collect::<Vec<_>>();
        self.count(|s| s.normvectors += 1);
        Ok(self.normvectors.get_or_init(|| normals))
    }

    /// The normal of the rib plane in wing coordinates.
    pub fn normal(&self) -> Result<Vector3> {
        Ok(self.rotation_matrix()? * Vector3::z())
    }

    /// The thickness direction of the profile in wing coordinates, which lies in the rib plane.
    pub fn in_plane_normal(&self) -> Result<Vector3> {
        Ok(self.rotation_matrix()? * Vector3::y())
    }
}

/// Serialized form of a rib. The angle of attack is stored as its value and a flag marking it as
/// absolute.
#[derive(Serialize, Deserialize)]
struct RibRecord {
    name: String,
    profile_2d: Option<Profile2D>,
    ballooning: Option<serde_json::Value>,
    startpoint: Point3,
    chord: f64,
    arcang: f64,
    aoa: f64,
    aoa_abs: bool,
    zrot: f64,
    glide: f64,
}

impl From<&Rib> for RibRecord {
    fn from(rib: &Rib) -> Self {
        let p = &rib.placement;
        RibRecord {
            name: rib.name.clone(),
            profile_2d: rib.profile_2d.as_deref().cloned(),
            ballooning: rib.ballooning.clone(),
            startpoint: p.pos,
            chord: p.chord,
            arcang: p.arcang,
            aoa: p.aoa.value(),
            aoa_abs: p.aoa.is_absolute(),
            zrot: p.zrot,
            glide: p.glide,
        }
    }
}

impl From<RibRecord> for Rib {
    fn from(record: RibRecord) -> Self {
        let aoa = if record.aoa_abs {
            AngleOfAttack::Absolute(record.aoa)
        } else {
            AngleOfAttack::Relative(record.aoa)
        };
        let placement = RibPlacement::new(
            record.startpoint,
            record.chord,
            record.arcang,
            aoa,
            record.zrot,
            record.glide,
        );

        let mut rib = Rib::new(&record.name, record.profile_2d.map(Arc::new), placement);
        rib.ballooning = record.ballooning;
        rib
    }
}

impl Serialize for Rib {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        RibRecord::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rib {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        RibRecord::deserialize(deserializer).map(Rib::from)
    }
}
