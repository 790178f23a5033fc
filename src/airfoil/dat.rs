//! This module has I/O functionality for profiles in the plain text `.dat` format: an optional
//! free-text name line followed by one `x y` pair per line, separated by tabs or spaces.

use super::Profile2D;
use crate::{Error, Point2, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const DEFAULT_NAME: &str = "Profile";

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}

fn parse_pair(tokens: &[&str]) -> Option<Point2> {
    match tokens {
        [x, y] => Some(Point2::new(x.parse().ok()?, y.parse().ok()?)),
        _ => None,
    }
}

/// Parse the contents of a profile file into its name and raw (not yet normalized) points. The
/// first non-blank line is the name unless it already is an `x y` pair; every later non-blank
/// line must be a pair.
pub(crate) fn parse_points(text: &str) -> Result<(String, Vec<Point2>)> {
    let mut name: Option<String> = None;
    let mut points = Vec::new();
    let mut first = true;

    for (i, line) in text.lines().enumerate() {
        let tokens = line.split_whitespace().collect::<Vec<_>>();
        if tokens.is_empty() {
            continue;
        }

        if let Some(p) = parse_pair(&tokens) {
            points.push(p);
        } else if first {
            name = Some(line.trim().to_string());
        } else if let [x, y] = tokens.as_slice() {
            let message = match x.parse::<f64>() {
                Ok(_) => format!("bad y value '{}'", y),
                Err(_) => format!("bad x value '{}'", x),
            };
            return Err(parse_error(i + 1, message));
        } else {
            return Err(parse_error(
                i + 1,
                format!("expected two numbers, found {} tokens", tokens.len()),
            ));
        }
        first = false;
    }

    Ok((name.unwrap_or_else(|| DEFAULT_NAME.to_string()), points))
}

impl Profile2D {
    /// Read and normalize a profile from a `.dat` file.
    ///
    /// # Arguments
    ///
    /// * `path`: the path of the file to read
    ///
    /// returns: Result<Profile2D, Error>
    pub fn import(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::NotFound(path.to_path_buf()));
        }

        let text = std::fs::read_to_string(path)?;
        let profile = Self::parse_dat(&text)?;
        log::debug!("imported profile '{}' from {}", profile.name(), path.display());
        Ok(profile)
    }

    /// Parse and normalize a profile from the text of a `.dat` file. A file without a name line
    /// produces a profile named "Profile".
    ///
    /// # Examples
    ///
    /// ```
    /// use glidergeom::Profile2D;
    /// let text = "demo\n1.0 0.0\n0.5\t0.05\n0.0 0.0\n0.5 -0.05\n1.0 0.0\n";
    /// let profile = Profile2D::parse_dat(text).unwrap();
    /// assert_eq!(profile.name(), "demo");
    /// assert_eq!(profile.nose_index(), 2);
    /// ```
    pub fn parse_dat(text: &str) -> Result<Self> {
        let (name, points) = parse_points(text)?;
        Self::new(&name, &points)
    }

    /// Write the current points of the profile to a `.dat` file.
    pub fn export(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(self.to_dat().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// The profile in `.dat` format: the name on the first line and one tab separated point on
    /// every following line.
    pub fn to_dat(&self) -> String {
        let mut text = self.name().to_string();
        for p in self.data() {
            text.push_str(&format!("\n{}\t{}", p.x, p.y));
        }
        text.push('\n');
        text
    }
}
