//! Knot vectors derived from control points and a degree.

use curvekit_core::{CurveError, Result, Tolerance};
use curvekit_math::Point3;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::KnotVector;

/// How a B-spline obtains its knots. Exactly one strategy per curve.
#[derive(Debug, Clone, PartialEq)]
pub enum KnotSelection {
    Explicit(KnotVector),
    Uniform,
    ChordLength,
    Centripetal,
}

/// The strategy a knot vector was produced by, kept so derived knots can be
/// rebuilt when the control points change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameterization {
    Explicit,
    Uniform,
    ChordLength,
    Centripetal,
}

impl KnotSelection {
    pub fn parameterization(&self) -> Parameterization {
        match self {
            Self::Explicit(_) => Parameterization::Explicit,
            Self::Uniform => Parameterization::Uniform,
            Self::ChordLength => Parameterization::ChordLength,
            Self::Centripetal => Parameterization::Centripetal,
        }
    }

    /// Produce the knot vector for `points` at `degree`.
    ///
    /// # Arguments
    /// * `points` - Control points the knots must cover
    /// * `degree` - Curve degree
    ///
    /// # Returns
    /// A knot vector with at least `points.len() + degree + 1` logical
    /// knots, or `Configuration` when it falls short
    pub fn resolve(self, points: &[Point3], degree: usize) -> Result<KnotVector> {
        let knots = match self {
            Self::Explicit(knots) => knots,
            Self::Uniform => uniform(points.len(), degree)?,
            Self::ChordLength => chord_length(points, degree)?,
            Self::Centripetal => centripetal(points, degree)?,
        };

        let required = points.len() + degree + 1;
        if knots.knot_count() < required {
            return Err(CurveError::Configuration(format!(
                "{} control points at degree {degree} need {required} knots, got {}",
                points.len(),
                knots.knot_count()
            )));
        }
        Ok(knots)
    }
}

/// Integer knots `-degree, ..., point_count`, each of multiplicity 1.
///
/// The resulting domain is `[0, point_count - degree]`.
#[instrument(level = "debug")]
pub fn uniform(point_count: usize, degree: usize) -> Result<KnotVector> {
    let (n, d) = (point_count as i64, degree as i64);
    let values: Vec<f64> = (-d..=n).map(|k| k as f64).collect();
    let multiplicities = vec![1; values.len()];
    let knots = KnotVector::new(values, multiplicities)?;
    debug!(knot_count = knots.knot_count(), "built uniform knots");
    Ok(knots)
}

/// Clamped knots spaced by the distance between consecutive points.
#[instrument(level = "debug", skip(points), fields(points = points.len()))]
pub fn chord_length(points: &[Point3], degree: usize) -> Result<KnotVector> {
    averaged(points, degree, "chord-length", |d| d)
}

/// Clamped knots spaced by the square root of the distance between
/// consecutive points. Less prone to cusps than chord-length on irregular
/// spacing.
#[instrument(level = "debug", skip(points), fields(points = points.len()))]
pub fn centripetal(points: &[Point3], degree: usize) -> Result<KnotVector> {
    averaged(points, degree, "centripetal", f64::sqrt)
}

/// Normalize the per-gap spacing into parameters on `[0, 1]`, then average
/// `degree` consecutive parameters into each interior knot. Both ends carry
/// multiplicity `degree + 1`.
fn averaged(
    points: &[Point3],
    degree: usize,
    label: &str,
    spacing: impl Fn(f64) -> f64,
) -> Result<KnotVector> {
    let n = points.len();
    if n < degree + 1 {
        return Err(CurveError::Configuration(format!(
            "{label} knots of degree {degree} need at least {} control points, got {n}",
            degree + 1
        )));
    }

    let gaps: Vec<f64> = points
        .windows(2)
        .map(|w| spacing(w[0].distance(w[1])))
        .collect();
    let total: f64 = gaps.iter().sum();
    if Tolerance::default().is_zero(total) {
        return Err(CurveError::Configuration(format!(
            "{label} spacing is degenerate: control points are coincident"
        )));
    }

    let mut params = Vec::with_capacity(n);
    params.push(0.0);
    let mut acc = 0.0;
    for gap in &gaps {
        acc += gap / total;
        params.push(acc);
    }
    params[n - 1] = 1.0;

    let mut logical = vec![0.0; degree + 1];
    for j in 1..n - degree {
        let knot = if degree == 0 {
            params[j]
        } else {
            params[j..j + degree].iter().sum::<f64>() / degree as f64
        };
        logical.push(knot);
    }
    logical.extend(std::iter::repeat(1.0).take(degree + 1));

    let knots = KnotVector::from_logical(&logical)?;
    debug!(knot_count = knots.knot_count(), distinct = knots.distinct_count(), "built {label} knots");
    Ok(knots)
}
