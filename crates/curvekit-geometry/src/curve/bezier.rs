//! Arbitrary-degree Bézier curves over cached Bernstein polynomials.

use curvekit_core::{CurveError, Result};
use curvekit_math::{DVec3, Point3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Spline;
use crate::basis::{create_bernstein, BernsteinPolynomial};

/// A degree-`n` Bézier curve with `n + 1` control points, parameterized over
/// `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBezierCurve")]
pub struct BezierCurve {
    degree: usize,
    control_points: Vec<Point3>,
    #[serde(skip_serializing)]
    basis: Vec<BernsteinPolynomial>,
}

#[derive(Deserialize)]
struct RawBezierCurve {
    degree: usize,
    control_points: Vec<Point3>,
}

impl TryFrom<RawBezierCurve> for BezierCurve {
    type Error = CurveError;

    fn try_from(raw: RawBezierCurve) -> Result<Self> {
        Self::new(raw.degree, raw.control_points)
    }
}

impl BezierCurve {
    pub fn new(degree: usize, control_points: Vec<Point3>) -> Result<Self> {
        if degree == 0 {
            return Err(CurveError::Configuration(
                "Bézier degree must be positive".into(),
            ));
        }
        if control_points.len() != degree + 1 {
            return Err(CurveError::Configuration(format!(
                "degree {degree} Bézier curve needs {} control points, got {}",
                degree + 1,
                control_points.len()
            )));
        }

        let basis = bernstein_basis(degree)?;
        debug!(degree, "built Bézier curve");
        Ok(Self {
            degree,
            control_points,
            basis,
        })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn control_points(&self) -> &[Point3] {
        &self.control_points
    }

    /// The cached Bernstein polynomials, one per control point.
    pub fn basis(&self) -> &[BernsteinPolynomial] {
        &self.basis
    }
}

fn bernstein_basis(degree: usize) -> Result<Vec<BernsteinPolynomial>> {
    let n = degree as i64;
    (0..=n).map(|i| create_bernstein(n, i)).collect()
}

impl Spline for BezierCurve {
    fn evaluate(&self, parameter: f64) -> Result<Point3> {
        if !(0.0..=1.0).contains(&parameter) {
            return Err(CurveError::Domain(format!(
                "Bézier parameter {parameter} outside [0, 1]"
            )));
        }
        Ok(self
            .control_points
            .iter()
            .zip(&self.basis)
            .fold(DVec3::ZERO, |acc, (p, b)| acc + b.evaluate(parameter) * *p))
    }

    fn geometry(&self) -> Vec<Point3> {
        self.control_points.clone()
    }

    /// The degree follows the point count; the Bernstein cache is rebuilt
    /// only when it changes.
    fn set_geometry(&mut self, geometry: Vec<Point3>) -> Result<()> {
        if geometry.len() < 2 {
            return Err(CurveError::Configuration(format!(
                "Bézier curve needs at least 2 control points, got {}",
                geometry.len()
            )));
        }
        let degree = geometry.len() - 1;
        if degree != self.degree {
            self.basis = bernstein_basis(degree)?;
            self.degree = degree;
            debug!(degree, "rebuilt Bernstein cache");
        }
        self.control_points = geometry;
        Ok(())
    }

    fn min_parameter(&self) -> f64 {
        0.0
    }

    fn max_parameter(&self) -> f64 {
        1.0
    }
}
