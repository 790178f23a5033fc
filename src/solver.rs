//! This module contains the integration of an external aerodynamic solver: its configuration,
//! the subprocess backend which runs it, and a cache of the polars it computes.

mod config;
mod polar;
mod process;

pub use config::SolverConfig;
pub use polar::{Coefficients, PolarCache, PolarPoint, parse_polar};
pub use process::ProcessSolver;

use crate::{Profile2D, Result};
use std::sync::atomic::AtomicBool;

/// Computes the polar of a profile at a set of angles of attack.
pub trait SolverBackend {
    /// Solve `profile` at every angle (degrees) in `angles`. Implementations stop and return
    /// `Error::Cancelled` once `cancel` is set. Angles which do not converge may be missing from
    /// the result.
    fn solve(
        &self,
        profile: &Profile2D,
        angles: &[f64],
        cancel: &AtomicBool,
    ) -> Result<Vec<PolarPoint>>;
}
