//! NURBS curve data and evaluation.

use crate::error::{Result, SceneError};
use crate::Point3;
use serde::{Deserialize, Serialize};

/// How a curve's ends relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveForm {
    /// Endpoints are unconstrained.
    Open,
    /// Endpoints coincide positionally.
    Closed,
    /// Endpoints coincide with tangent continuity.
    Periodic,
}

/// NURBS curve geometry as stored on a scene-graph node.
///
/// The knot vector follows the Maya convention:
/// `knots.len() == control_points.len() + degree - 1`. The two textbook end
/// knots, which never influence the curve, are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveData {
    /// Control points in 3D.
    pub control_points: Vec<Point3>,
    /// Knot vector (Maya convention, see type docs).
    pub knots: Vec<f64>,
    /// Polynomial degree (order = degree + 1).
    pub degree: usize,
    /// End condition of the curve.
    pub form: CurveForm,
    /// Whether the curve carries per-CV weights. Always stored unweighted;
    /// a rational curve with unit weights is equivalent.
    pub rational: bool,
}

impl CurveData {
    /// Check the structural invariants of the curve.
    ///
    /// Rejects degrees below 1, too few control points for the degree,
    /// a knot count that does not match the Maya convention, and
    /// decreasing knots.
    pub fn validate(&self) -> Result<()> {
        if self.degree < 1 {
            return Err(SceneError::invalid_geometry(format!(
                "degree must be at least 1, got {}",
                self.degree
            )));
        }
        let n = self.control_points.len();
        if n <= self.degree {
            return Err(SceneError::invalid_geometry(format!(
                "need more than degree ({}) control points, got {}",
                self.degree, n
            )));
        }
        let expected = n + self.degree - 1;
        if self.knots.len() != expected {
            return Err(SceneError::invalid_geometry(format!(
                "knot count {} does not match {} CVs of degree {} (expected {})",
                self.knots.len(),
                n,
                self.degree,
                expected
            )));
        }
        for w in self.knots.windows(2) {
            if w[1] < w[0] {
                return Err(SceneError::invalid_geometry(format!(
                    "knots must be non-decreasing, found {} after {}",
                    w[1], w[0]
                )));
            }
        }
        Ok(())
    }

    /// Parameter range over which the curve is defined.
    ///
    /// Assumes `validate()` passed; a zero degree or an undersized knot
    /// vector on hand-built data would index out of bounds.
    pub fn parameter_domain(&self) -> (f64, f64) {
        let p = self.degree;
        debug_assert!(p >= 1 && self.knots.len() >= p + 1);
        // With the two end knots omitted, the domain runs from knots[p-1]
        // to knots[len-p].
        (self.knots[p - 1], self.knots[self.knots.len() - p])
    }

    /// Evaluate the curve at parameter `t` using De Boor's algorithm.
    ///
    /// `t` is clamped to the parameter domain. Assumes `validate()` passed.
    pub fn eval(&self, t: f64) -> Point3 {
        // Reconstruct the textbook knot vector by duplicating the end knots;
        // their values never affect points inside the domain.
        let mut full = Vec::with_capacity(self.knots.len() + 2);
        full.push(self.knots[0]);
        full.extend_from_slice(&self.knots);
        full.push(self.knots[self.knots.len() - 1]);

        let p = self.degree;
        let last = self.control_points.len() - 1;
        let (t_min, t_max) = (full[p], full[last + 1]);
        let t = t.clamp(t_min, t_max);

        let span = find_span(&full, last, p, t);
        let basis = basis_functions(&full, span, p, t);

        let mut acc = nalgebra::Vector3::zeros();
        for (r, b) in basis.iter().enumerate() {
            acc += self.control_points[span - p + r].coords * *b;
        }
        Point3::from(acc)
    }
}

/// Find `i` such that `knots[i] <= t < knots[i+1]`, clamped to the valid
/// span range. `last` is the index of the last control point.
fn find_span(knots: &[f64], last: usize, degree: usize, t: f64) -> usize {
    if t >= knots[last + 1] {
        return last;
    }
    if t <= knots[degree] {
        return degree;
    }
    let mut low = degree;
    let mut high = last + 1;
    let mut mid = (low + high) / 2;
    while t < knots[mid] || t >= knots[mid + 1] {
        if t < knots[mid] {
            high = mid;
        } else {
            low = mid;
        }
        mid = (low + high) / 2;
    }
    mid
}

/// Non-zero B-spline basis values `N[span-degree..=span]` at `t`.
fn basis_functions(knots: &[f64], span: usize, degree: usize, t: f64) -> Vec<f64> {
    let mut n = vec![0.0; degree + 1];
    let mut left = vec![0.0; degree + 1];
    let mut right = vec![0.0; degree + 1];
    n[0] = 1.0;

    for j in 1..=degree {
        left[j] = t - knots[span + 1 - j];
        right[j] = knots[span + j] - t;
        let mut saved = 0.0;
        for r in 0..j {
            let denom = right[r + 1] + left[j - r];
            if denom.abs() < 1e-30 {
                // Zero-length knot interval
                n[j] = saved;
                continue;
            }
            let temp = n[r] / denom;
            n[r] = saved + right[r + 1] * temp;
            saved = left[j - r] * temp;
        }
        n[j] = saved;
    }

    n
}
