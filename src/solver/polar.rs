use super::SolverBackend;
use crate::{Point2, Profile2D, Result};
use serde::{Deserialize, Serialize};
use std::sync::atomic::AtomicBool;

/// Polar files print alpha with three decimals, so results are matched to requested angles
/// within half of the last printed digit.
const ANGLE_TOL: f64 = 5e-4;

/// Aerodynamic coefficients of a profile at one angle of attack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub cl: f64,
    pub cd: f64,
    pub cdp: f64,
    pub cm: f64,
}

/// One row of a polar: an angle of attack in degrees and the coefficients computed for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarPoint {
    pub alpha: f64,
    pub coefficients: Coefficients,
}

impl PolarPoint {
    pub fn new(alpha: f64, cl: f64, cd: f64, cdp: f64, cm: f64) -> Self {
        Self {
            alpha,
            coefficients: Coefficients { cl, cd, cdp, cm },
        }
    }

    fn matches(&self, alpha: f64) -> bool {
        (self.alpha - alpha).abs() <= ANGLE_TOL
    }
}

/// Parse the rows of a polar result file. Only lines consisting entirely of numbers, at least
/// `alpha CL CD CDp CM`, are rows; headers, separators and blank lines are skipped. Angles which
/// did not converge simply have no row.
pub fn parse_polar(text: &str) -> Vec<PolarPoint> {
    text.lines()
        .filter_map(|line| {
            let values = line
                .split_whitespace()
                .map(|t| t.parse::<f64>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .ok()?;
            match values.as_slice() {
                [alpha, cl, cd, cdp, cm, ..] => {
                    Some(PolarPoint::new(*alpha, *cl, *cd, *cdp, *cm))
                }
                _ => None,
            }
        })
        .collect()
}

/// Remembers solver results for one profile shape, so that each angle is solved only once.
///
/// The cache is tied to the points of the profile it was last used with; a request for a
/// profile with different points, whether resampled, thickened or recambered, discards
/// everything. A failed solve returns the error and
/// leaves the cached results as they were.
pub struct PolarCache<B: SolverBackend> {
    backend: B,
    shape: Vec<Point2>,
    points: Vec<PolarPoint>,
}

impl<B: SolverBackend> PolarCache<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            shape: Vec::new(),
            points: Vec::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// All results currently held, sorted by angle.
    pub fn cached(&self) -> &[PolarPoint] {
        &self.points
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    fn lookup(&self, alpha: f64) -> Option<PolarPoint> {
        self.points.iter().find(|p| p.matches(alpha)).copied()
    }

    /// Get the polar of `profile` at the given angles (degrees), running the solver for the
    /// angles which are not cached yet. The result has the order of `angles`; angles for which
    /// the solver produced no row are left out.
    ///
    /// # Arguments
    ///
    /// * `profile`: the profile to analyze
    /// * `angles`: the angles of attack in degrees
    /// * `cancel`: a flag which aborts a running solve when set
    ///
    /// returns: Result<Vec<PolarPoint, Global>, Error>
    pub fn get(
        &mut self,
        profile: &Profile2D,
        angles: &[f64],
        cancel: &AtomicBool,
    ) -> Result<Vec<PolarPoint>> {
        if profile.data() != self.shape.as_slice() {
            if !self.points.is_empty() {
                log::debug!("profile '{}' changed, dropping cached polar", profile.name());
            }
            self.points.clear();
            self.shape = profile.data().to_vec();
        }

        let mut missing: Vec<f64> = Vec::new();
        for a in angles {
            if self.lookup(*a).is_none() && !missing.iter().any(|m| (m - a).abs() <= ANGLE_TOL) {
                missing.push(*a);
            }
        }

        if !missing.is_empty() {
            let solved = self.backend.solve(profile, &missing, cancel)?;
            for point in solved {
                self.points.retain(|p| !p.matches(point.alpha));
                self.points.push(point);
            }
            self.points.sort_by(|a, b| a.alpha.total_cmp(&b.alpha));
        }

        Ok(angles.iter().filter_map(|a| self.lookup(*a)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Point2};
    use std::cell::{Cell, RefCell};

    const POLAR: &str = "
       XFOIL         Version 6.99

 Calculated polar for: demo

 1 1 Reynolds number fixed          Mach number fixed

 xtrf =   1.000 (top)        1.000 (bottom)
 Mach =   0.000     Re =     0.200 e 6     Ncrit =   9.000

   alpha    CL        CD       CDp       CM     Top_Xtr  Bot_Xtr
  ------ -------- --------- --------- -------- -------- --------
   0.000   0.2654   0.00978   0.00401  -0.0612   0.5840   0.9876
   2.000   0.4857   0.01051   0.00452  -0.0625   0.4771   1.0000
";

    /// Answers every angle with `cl = alpha / 10` and records what it was asked for
    struct FakeSolver {
        calls: RefCell<Vec<Vec<f64>>>,
        fail: Cell<bool>,
    }

    impl FakeSolver {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail: Cell::new(false),
            }
        }
    }

    impl SolverBackend for FakeSolver {
        fn solve(
            &self,
            _profile: &Profile2D,
            angles: &[f64],
            _cancel: &AtomicBool,
        ) -> Result<Vec<PolarPoint>> {
            self.calls.borrow_mut().push(angles.to_vec());
            if self.fail.get() {
                return Err(Error::SolverFailed("exit status 1".to_string()));
            }
            Ok(angles
                .iter()
                .map(|a| PolarPoint::new(*a, a / 10.0, 0.01, 0.005, -0.05))
                .collect())
        }
    }

    fn profile() -> Profile2D {
        let points = [(1.0, 0.0), (0.4, 0.06), (0.0, 0.0), (0.4, -0.03), (1.0, 0.0)];
        let points = points.iter().map(|(x, y)| Point2::new(*x, *y)).collect::<Vec<_>>();
        Profile2D::new("demo", &points).unwrap()
    }

    #[test]
    fn parses_numeric_rows_only() {
        let points = parse_polar(POLAR);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], PolarPoint::new(0.0, 0.2654, 0.00978, 0.00401, -0.0612));
        assert_eq!(points[1].alpha, 2.0);
        assert_eq!(points[1].coefficients.cm, -0.0625);
    }

    #[test]
    fn short_rows_are_skipped() {
        assert!(parse_polar("1.0 2.0 3.0\n\n").is_empty());
    }

    #[test]
    fn only_missing_angles_are_solved() {
        let mut cache = PolarCache::new(FakeSolver::new());
        let cancel = AtomicBool::new(false);
        let profile = profile();

        let first = cache.get(&profile, &[0.0, 2.0], &cancel).unwrap();
        let second = cache.get(&profile, &[4.0, 2.0, 0.0], &cancel).unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(second.iter().map(|p| p.alpha).collect::<Vec<_>>(), vec![4.0, 2.0, 0.0]);
        assert_eq!(*cache.backend().calls.borrow(), vec![vec![0.0, 2.0], vec![4.0]]);
        assert_eq!(cache.cached().len(), 3);
    }

    #[test]
    fn fully_cached_request_does_not_solve() {
        let mut cache = PolarCache::new(FakeSolver::new());
        let cancel = AtomicBool::new(false);
        cache.get(&profile(), &[1.0], &cancel).unwrap();
        cache.get(&profile(), &[1.0, 1.0001], &cancel).unwrap();
        assert_eq!(cache.backend().calls.borrow().len(), 1);
    }

    #[test]
    fn changed_profile_clears_cache() {
        let mut cache = PolarCache::new(FakeSolver::new());
        let cancel = AtomicBool::new(false);
        cache.get(&profile(), &[1.0], &cancel).unwrap();

        let resampled = profile().with_numpoints(11).unwrap();
        cache.get(&resampled, &[3.0], &cancel).unwrap();

        assert_eq!(cache.cached().len(), 1);
        assert_eq!(cache.cached()[0].alpha, 3.0);
    }

    #[test]
    fn thicker_profile_is_solved_again() {
        let mut cache = PolarCache::new(FakeSolver::new());
        let cancel = AtomicBool::new(false);
        let profile = profile();
        cache.get(&profile, &[1.0], &cancel).unwrap();

        let thicker = profile.with_thickness(0.15).unwrap();
        assert_eq!(thicker.x_values(), profile.x_values());
        cache.get(&thicker, &[1.0], &cancel).unwrap();

        assert_eq!(cache.backend().calls.borrow().len(), 2);
        assert_eq!(cache.cached().len(), 1);
    }

    #[test]
    fn failed_solve_keeps_cached_results() {
        let mut cache = PolarCache::new(FakeSolver::new());
        let cancel = AtomicBool::new(false);
        cache.get(&profile(), &[0.0, 1.0], &cancel).unwrap();

        cache.backend().fail.set(true);
        let result = cache.get(&profile(), &[5.0], &cancel);

        assert!(matches!(result, Err(Error::SolverFailed(_))));
        assert_eq!(cache.cached().len(), 2);
        assert_eq!(cache.cached()[1].coefficients.cl, 0.1);
    }
}
