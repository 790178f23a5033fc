use super::{PolarPoint, SolverBackend, SolverConfig, parse_polar};
use crate::{Error, Profile2D, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Files of one solver run, removed when the run ends no matter how it ends.
struct TempFiles {
    paths: Vec<PathBuf>,
}

impl Drop for TempFiles {
    fn drop(&mut self) {
        for path in self.paths.iter() {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => log::warn!("could not remove {}: {}", path.display(), e),
            }
        }
    }
}

fn kill(child: &mut Child) {
    if let Err(e) = child.kill() {
        log::warn!("could not kill solver process {}: {}", child.id(), e);
    }
    if let Err(e) = child.wait() {
        log::warn!("could not reap solver process {}: {}", child.id(), e);
    }
}

/// Wait for a child process to exit, killing it when `timeout` elapses or `cancel` is set.
pub(crate) fn wait_with_timeout(
    child: &mut Child,
    timeout: Duration,
    poll: Duration,
    cancel: &AtomicBool,
) -> Result<ExitStatus> {
    let start = Instant::now();
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }
        if cancel.load(Ordering::Relaxed) {
            kill(child);
            return Err(Error::Cancelled);
        }
        if start.elapsed() >= timeout {
            kill(child);
            return Err(Error::SolverTimeout(timeout));
        }
        std::thread::sleep(poll);
    }
}

/// Runs an XFOIL compatible solver as a subprocess.
///
/// Each run writes the profile and a command script into uniquely named files, starts the solver
/// with the profile file as its argument and the script on stdin, and reads the polar file the
/// script asked the solver to write. The files are removed after every run, successful or not.
#[derive(Debug, Clone, Default)]
pub struct ProcessSolver {
    config: SolverConfig,
}

impl ProcessSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The commands fed to the solver: enter the operating point menu, configure the analysis,
    /// accumulate a polar into `result_path`, run every angle and quit.
    pub fn command_script(&self, angles: &[f64], result_path: &Path) -> String {
        let mut lines = vec!["OPER".to_string()];
        if let Some(re) = self.config.reynolds {
            lines.push(format!("VISC {}", re));
            lines.push(format!("ITER {}", self.config.iterations));
        }
        lines.push("PACC".to_string());
        lines.push(result_path.display().to_string());
        lines.push(String::new());
        for a in angles {
            lines.push(format!("ALFA {}", a));
        }
        lines.push("PACC".to_string());
        lines.push(String::new());
        lines.push("QUIT".to_string());

        let mut script = lines.join("\n");
        script.push('\n');
        script
    }

    fn run_once(
        &self,
        profile: &Profile2D,
        angles: &[f64],
        cancel: &AtomicBool,
    ) -> Result<Vec<PolarPoint>> {
        let dir = self.config.temp_dir();
        let id = Uuid::new_v4();
        let profile_path = dir.join(format!("glidergeom-{}-profile.dat", id));
        let command_path = dir.join(format!("glidergeom-{}-commands.txt", id));
        let result_path = dir.join(format!("glidergeom-{}-polar.txt", id));
        let _files = TempFiles {
            paths: vec![
                profile_path.clone(),
                command_path.clone(),
                result_path.clone(),
            ],
        };

        profile.export(&profile_path)?;
        std::fs::write(&command_path, self.command_script(angles, &result_path))?;

        let binary = &self.config.binary;
        log::info!(
            "running {} on profile '{}' for {} angles",
            binary.display(),
            profile.name(),
            angles.len()
        );

        let mut child = Command::new(binary)
            .arg(&profile_path)
            .stdin(Stdio::from(File::open(&command_path)?))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                Error::SolverFailed(format!("could not start {}: {}", binary.display(), e))
            })?;

        let status = wait_with_timeout(
            &mut child,
            self.config.timeout(),
            self.config.poll_interval(),
            cancel,
        )?;

        if !status.success() {
            return Err(Error::SolverFailed(format!(
                "{} exited with {}",
                binary.display(),
                status
            )));
        }
        if !result_path.is_file() {
            return Err(Error::SolverFailed(format!(
                "{} wrote no polar file",
                binary.display()
            )));
        }

        let text = std::fs::read_to_string(&result_path)?;
        Ok(parse_polar(&text))
    }
}

impl SolverBackend for ProcessSolver {
    fn solve(
        &self,
        profile: &Profile2D,
        angles: &[f64],
        cancel: &AtomicBool,
    ) -> Result<Vec<PolarPoint>> {
        let attempts = self.config.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            if cancel.load(Ordering::Relaxed) {
                return Err(Error::Cancelled);
            }
            match self.run_once(profile, angles, cancel) {
                Ok(points) => return Ok(points),
                Err(Error::Cancelled) => return Err(Error::Cancelled),
                Err(e) if attempt < attempts => {
                    log::warn!("solver attempt {} of {} failed: {}", attempt, attempts, e);
                    attempt += 1;
                }
                Err(e) => {
                    log::warn!("solver failed after {} attempts: {}", attempts, e);
                    return Err(e);
                }
            }
        }
    }
}
