//! Helix control-vertex and knot generation.

use crate::error::{HelixError, Result};
use crate::params::HelixParams;
use helix_scene::Point3;
use serde::{Deserialize, Serialize};

/// Fixed degree of the generated curve.
pub const DEGREE: usize = 3;

/// Geometry produced from one parameter set, ready for curve construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelixGeometry {
    /// Control vertices, one per integer parameter step.
    pub control_points: Vec<Point3>,
    /// Ascending integer knot sequence.
    pub knots: Vec<f64>,
}

impl HelixGeometry {
    /// Generate helix CVs and knots from the given parameters.
    ///
    /// CV `i` is `(radius·cos i, up·pitch·i, radius·sin i)` with the integer
    /// index used directly as the angle in radians; knot `j` is `j`. Existing
    /// scenes depend on these exact values: the angle is not normalized to
    /// one turn per 2π, so curve shape varies with `num_cvs`.
    ///
    /// Span and knot counts are computed in the signed domain so that
    /// `num_cvs <= DEGREE` fails with [`HelixError::InvalidParameter`]
    /// instead of wrapping.
    pub fn generate(params: &HelixParams) -> Result<Self> {
        let num_cvs = params.num_cvs();
        let spans = i64::from(num_cvs) - DEGREE as i64;
        if spans <= 0 {
            return Err(HelixError::InvalidParameter {
                num_cvs,
                degree: DEGREE,
            });
        }
        let knot_count = spans + 2 * DEGREE as i64 - 1;

        let radius = params.radius();
        let pitch = params.pitch();
        let up_factor = if params.upside_down() { -1.0 } else { 1.0 };

        let control_points = (0..num_cvs)
            .map(|i| {
                let i = f64::from(i);
                Point3::new(radius * i.cos(), up_factor * pitch * i, radius * i.sin())
            })
            .collect();
        let knots = (0..knot_count).map(|j| j as f64).collect();

        Ok(Self {
            control_points,
            knots,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(radius: f64, pitch: f64, num_cvs: u32, upside_down: bool) -> HelixParams {
        let mut p = HelixParams::new();
        p.set_radius(radius);
        p.set_pitch(pitch);
        p.set_num_cvs(num_cvs);
        p.set_upside_down(upside_down);
        p
    }

    #[test]
    fn test_counts_for_valid_cv_counts() {
        for num_cvs in [4u32, 5, 8, 20, 100] {
            let geo = HelixGeometry::generate(&params(2.0, 0.25, num_cvs, false)).unwrap();
            assert_eq!(geo.control_points.len(), num_cvs as usize);
            // spans + 2*degree - 1
            let expected_knots = (num_cvs as usize - 3) + 2 * 3 - 1;
            assert_eq!(geo.knots.len(), expected_knots, "numCVs={num_cvs}");
        }
    }

    #[test]
    fn test_default_parameters_literal_output() {
        // radius=2.0, pitch=0.25, numCVs=20: spans=17, knots=17+6-1=22.
        let geo = HelixGeometry::generate(&HelixParams::new()).unwrap();
        assert_eq!(geo.control_points.len(), 20);
        assert_eq!(geo.knots.len(), 22);

        let cv0 = geo.control_points[0];
        assert_eq!(cv0, Point3::new(2.0, 0.0, 0.0));

        let cv1 = geo.control_points[1];
        assert_eq!(cv1.x, 2.0 * 1.0f64.cos());
        assert_eq!(cv1.y, 0.25);
        assert_eq!(cv1.z, 2.0 * 1.0f64.sin());

        let expected: Vec<f64> = (0..22).map(f64::from).collect();
        assert_eq!(geo.knots, expected);
    }

    #[test]
    fn test_cv_formula_is_literal() {
        let geo = HelixGeometry::generate(&params(1.5, 0.4, 7, false)).unwrap();
        for (i, cv) in geo.control_points.iter().enumerate() {
            let a = i as f64;
            assert_eq!(cv.x, 1.5 * a.cos(), "x at i={i}");
            assert_eq!(cv.y, 0.4 * a, "y at i={i}");
            assert_eq!(cv.z, 1.5 * a.sin(), "z at i={i}");
        }
    }

    #[test]
    fn test_upside_down_negates_y_only() {
        let up = HelixGeometry::generate(&params(2.0, 0.25, 20, false)).unwrap();
        let down = HelixGeometry::generate(&params(2.0, 0.25, 20, true)).unwrap();
        for (a, b) in up.control_points.iter().zip(&down.control_points) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, -b.y);
            assert_eq!(a.z, b.z);
        }
        assert_eq!(up.knots, down.knots);
    }

    #[test]
    fn test_knots_are_ascending_integers_from_zero() {
        let geo = HelixGeometry::generate(&params(3.0, 0.1, 12, false)).unwrap();
        for (j, knot) in geo.knots.iter().enumerate() {
            assert_eq!(*knot, j as f64);
        }
    }

    #[test]
    fn test_num_cvs_at_or_below_degree_fails() {
        for num_cvs in [0u32, 1, 2, 3] {
            let err = HelixGeometry::generate(&params(2.0, 0.25, num_cvs, false)).unwrap_err();
            assert!(
                matches!(err, HelixError::InvalidParameter { num_cvs: n, degree: 3 } if n == num_cvs),
                "numCVs={num_cvs}"
            );
        }
    }

    #[test]
    fn test_negative_radius_flips_nothing_but_sign() {
        // Sign is legal input; generation applies it verbatim.
        let geo = HelixGeometry::generate(&params(-2.0, 0.25, 6, false)).unwrap();
        assert_eq!(geo.control_points[0], Point3::new(-2.0, 0.0, 0.0));
    }
}
