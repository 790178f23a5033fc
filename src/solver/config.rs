use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings for running an external aerodynamic solver. Every field has a default, so a JSON
/// configuration only needs to name the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// The solver executable, looked up on the `PATH` when it is not an absolute path.
    pub binary: PathBuf,

    /// Time allowed for a single solver run before it is killed.
    pub timeout_secs: f64,

    /// Number of runs attempted before a failure is reported. Cancellation is never retried.
    pub max_attempts: usize,

    /// Directory for the profile, command and result files. Defaults to the system temp dir.
    pub temp_dir: Option<PathBuf>,

    /// Reynolds number for a viscous analysis; inviscid when absent.
    pub reynolds: Option<f64>,

    /// Iteration limit of the viscous solution.
    pub iterations: usize,

    /// How often a running solver is checked for completion, timeout and cancellation.
    pub poll_interval_ms: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("xfoil"),
            timeout_secs: 60.0,
            max_attempts: 1,
            temp_dir: None,
            reynolds: None,
            iterations: 100,
            poll_interval_ms: 20,
        }
    }
}

impl SolverConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout_secs.max(0.0))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    pub fn temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}
