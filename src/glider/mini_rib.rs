use crate::common::Interpolation1;
use crate::geom2::Bezier2;
use crate::{Point2, Result};
use serde::{Deserialize, Serialize};

const FUNCTION_SAMPLES: usize = 100;

/// A partial rib between two full ribs, present only over a chordwise window of the profile.
///
/// Its blending function gives the weight of the mini rib at every chordwise position: 1 where
/// the section is unaffected (outside the window and at a window edge which is not at the nose or
/// trailing edge), dropping smoothly towards 0 inside the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiniRib {
    name: String,
    y_value: f64,
    front_cut: f64,
    back_cut: f64,
    function: Interpolation1,
}

impl MiniRib {
    /// Create a mini rib whose blending function is a Bezier curve built from the cut positions.
    /// A cut at the nose (`front_cut <= 0`) or at the trailing edge (`back_cut >= 1`) collapses
    /// that end of the curve onto a single control point at zero height.
    ///
    /// # Arguments
    ///
    /// * `y_value`: the spanwise position of the mini rib
    /// * `front_cut`: the chordwise start of the window
    /// * `back_cut`: the chordwise end of the window
    ///
    /// returns: Result<MiniRib, Error>
    pub fn new(y_value: f64, front_cut: f64, back_cut: f64) -> Result<Self> {
        let mut points = if front_cut > 0.0 {
            vec![
                Point2::new(front_cut, 1.0),
                Point2::new(front_cut * 2.0 / 3.0 + back_cut / 3.0, 0.0),
            ]
        } else {
            vec![Point2::new(front_cut, 0.0)]
        };

        if back_cut < 1.0 {
            points.push(Point2::new(front_cut / 3.0 + back_cut * 2.0 / 3.0, 0.0));
            points.push(Point2::new(back_cut, 1.0));
        } else {
            points.push(Point2::new(back_cut, 0.0));
        }

        let function = Bezier2::new(points)?.interpolation(FUNCTION_SAMPLES)?;
        Ok(Self::with_function(y_value, front_cut, back_cut, function))
    }

    /// Create a mini rib with a custom blending function.
    pub fn with_function(
        y_value: f64,
        front_cut: f64,
        back_cut: f64,
        function: Interpolation1,
    ) -> Self {
        Self {
            name: "minirib".to_string(),
            y_value,
            front_cut,
            back_cut,
            function,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn y_value(&self) -> f64 {
        self.y_value
    }

    pub fn front_cut(&self) -> f64 {
        self.front_cut
    }

    pub fn back_cut(&self) -> f64 {
        self.back_cut
    }

    /// The blending weight at a signed x-value, clamped to [0, 1]. Positions outside the window
    /// between the cuts have a weight of 1.
    pub fn function(&self, x: f64) -> f64 {
        let x = x.abs();
        if self.front_cut <= x && x <= self.back_cut {
            self.function.at(x).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test_case(0.1, 1.0)]
    #[test_case(0.9, 1.0)]
    #[test_case(0.2, 1.0)]
    #[test_case(0.8, 1.0)]
    #[test_case(0.5, 0.25)]
    #[test_case(-0.5, 0.25)]
    fn window_in_the_middle(x: f64, expected: f64) {
        let rib = MiniRib::new(0.5, 0.2, 0.8).unwrap();
        assert_relative_eq!(rib.function(x), expected, epsilon = 1e-3);
    }

    #[test]
    fn full_window_collapses_to_zero() {
        let rib = MiniRib::new(0.0, 0.0, 1.0).unwrap();
        assert_relative_eq!(rib.function(0.0), 0.0);
        assert_relative_eq!(rib.function(0.7), 0.0);
        assert_relative_eq!(rib.function(1.0), 0.0);
    }

    #[test]
    fn front_at_nose_rises_to_back_cut() {
        let rib = MiniRib::new(0.0, 0.0, 0.6).unwrap();
        assert_relative_eq!(rib.function(0.0), 0.0, epsilon = 1e-9);
        assert_relative_eq!(rib.function(0.6), 1.0, epsilon = 1e-9);
        assert_relative_eq!(rib.function(0.7), 1.0);

        let values = (0..=6).map(|i| rib.function(i as f64 * 0.1)).collect::<Vec<_>>();
        assert!(values.windows(2).all(|w| w[1] >= w[0] - 1e-12));
    }

    #[test]
    fn custom_function_is_clamped() {
        let points = vec![Point2::new(0.0, -1.0), Point2::new(1.0, 2.0)];
        let function = Interpolation1::new(&points).unwrap();
        let rib = MiniRib::with_function(1.0, 0.0, 1.0, function);
        assert_eq!(rib.function(0.0), 0.0);
        assert_eq!(rib.function(1.0), 1.0);
        assert_relative_eq!(rib.function(0.5), 0.5);
    }
}
