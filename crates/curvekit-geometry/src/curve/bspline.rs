//! Non-uniform B-spline curves evaluated through the Cox-de Boor recursion.

use curvekit_core::{CurveError, Result, Tolerance};
use curvekit_math::{DVec3, Point3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Spline;
use crate::basis::CoxDeBoor;
use crate::knot::{KnotSelection, KnotVector, Parameterization};

pub const DEFAULT_DEGREE: usize = 3;

/// A B-spline curve defined by degree, knot vector, and control points.
///
/// The domain is `[knot[degree], knot[count - degree - 1]]`, which excludes
/// the boundary knots that only shape the first and last basis functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBSplineCurve")]
pub struct BSplineCurve {
    degree: usize,
    knots: KnotVector,
    control_points: Vec<Point3>,
    parameterization: Parameterization,
    #[serde(default)]
    tolerance: Tolerance,
}

#[derive(Deserialize)]
struct RawBSplineCurve {
    degree: usize,
    knots: KnotVector,
    control_points: Vec<Point3>,
    parameterization: Parameterization,
    #[serde(default)]
    tolerance: Tolerance,
}

impl TryFrom<RawBSplineCurve> for BSplineCurve {
    type Error = CurveError;

    fn try_from(raw: RawBSplineCurve) -> Result<Self> {
        let selection = match raw.parameterization {
            Parameterization::Explicit => KnotSelection::Explicit(raw.knots),
            Parameterization::Uniform => KnotSelection::Uniform,
            Parameterization::ChordLength => KnotSelection::ChordLength,
            Parameterization::Centripetal => KnotSelection::Centripetal,
        };
        Ok(Self::new(raw.degree, raw.control_points, selection)?.with_tolerance(raw.tolerance))
    }
}

impl BSplineCurve {
    /// Build a curve, resolving `knots` against the control points.
    ///
    /// # Arguments
    /// * `degree` - Polynomial degree of every segment
    /// * `control_points` - At least `degree + 1` points
    /// * `knots` - Explicit knots, or the strategy that derives them
    ///
    /// # Returns
    /// The curve, or `Configuration` when there are too few control points or
    /// too few knots to cover them.
    pub fn new(degree: usize, control_points: Vec<Point3>, knots: KnotSelection) -> Result<Self> {
        if control_points.len() < degree + 1 {
            return Err(CurveError::Configuration(format!(
                "degree {degree} B-spline curve needs at least {} control points, got {}",
                degree + 1,
                control_points.len()
            )));
        }

        let parameterization = knots.parameterization();
        let knots = knots.resolve(&control_points, degree)?;
        debug!(
            degree,
            points = control_points.len(),
            knots = knots.knot_count(),
            ?parameterization,
            "built B-spline curve"
        );
        Ok(Self {
            degree,
            knots,
            control_points,
            parameterization,
            tolerance: Tolerance::default(),
        })
    }

    /// Replace the tolerance used for the 0/0 interval checks of the basis.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// A cubic curve.
    pub fn cubic(control_points: Vec<Point3>, knots: KnotSelection) -> Result<Self> {
        Self::new(DEFAULT_DEGREE, control_points, knots)
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn knots(&self) -> &KnotVector {
        &self.knots
    }

    pub fn control_points(&self) -> &[Point3] {
        &self.control_points
    }

    pub fn parameterization(&self) -> Parameterization {
        self.parameterization
    }

    fn check_parameter(&self, parameter: f64) -> Result<()> {
        let (lo, hi) = self.domain();
        if !(lo..=hi).contains(&parameter) {
            return Err(CurveError::Domain(format!(
                "parameter {parameter} outside [{lo}, {hi}]"
            )));
        }
        Ok(())
    }

    /// The control points whose basis functions can be non-zero at
    /// `parameter`, at most `degree + 1` of them. Knots beyond the last
    /// control point leave part of the domain without a full window.
    fn window(&self, parameter: f64) -> Result<std::ops::RangeInclusive<usize>> {
        let last_span = self.knots.knot_count() - self.degree - 2;
        let span = self.knots.span_for_value(parameter)?.min(last_span);
        if span >= self.control_points.len() {
            return Err(CurveError::Index(format!(
                "parameter {parameter} needs control point {span}, curve has {}",
                self.control_points.len()
            )));
        }
        Ok(span.saturating_sub(self.degree)..=span)
    }

    /// The non-zero basis values at `parameter`, paired with the index of the
    /// control point each one weights.
    pub fn basis_values(&self, parameter: f64) -> Result<Vec<(usize, f64)>> {
        self.check_parameter(parameter)?;
        let cox = CoxDeBoor::with_tolerance(&self.knots, self.tolerance);
        Ok(self
            .window(parameter)?
            .map(|j| (j, cox.evaluate(self.degree, j as isize + 1, parameter)))
            .collect())
    }
}

impl Spline for BSplineCurve {
    fn evaluate(&self, parameter: f64) -> Result<Point3> {
        Ok(self
            .basis_values(parameter)?
            .into_iter()
            .fold(DVec3::ZERO, |acc, (j, n)| acc + n * self.control_points[j]))
    }

    fn geometry(&self) -> Vec<Point3> {
        self.control_points.clone()
    }

    /// Derived knots are rebuilt from the new points; explicit knots are kept
    /// and must still cover them.
    fn set_geometry(&mut self, geometry: Vec<Point3>) -> Result<()> {
        let selection = match self.parameterization {
            Parameterization::Explicit => KnotSelection::Explicit(self.knots.clone()),
            Parameterization::Uniform => KnotSelection::Uniform,
            Parameterization::ChordLength => KnotSelection::ChordLength,
            Parameterization::Centripetal => KnotSelection::Centripetal,
        };
        *self = Self::new(self.degree, geometry, selection)?.with_tolerance(self.tolerance);
        Ok(())
    }

    fn min_parameter(&self) -> f64 {
        self.knots
            .try_logical_knot(self.degree as isize)
            .unwrap_or_else(|| self.knots.min_value())
    }

    fn max_parameter(&self) -> f64 {
        let index = self.knots.knot_count() - self.degree - 1;
        self.knots
            .try_logical_knot(index as isize)
            .unwrap_or_else(|| self.knots.max_value())
    }
}
