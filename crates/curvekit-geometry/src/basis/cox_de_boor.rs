//! Recursive Cox-de Boor evaluation of B-spline basis functions.
//!
//! Family `i` at degree `d` is supported on the logical knots
//! `knot[i - 1] ..= knot[i + d]`, so the basis function that weights control
//! point `j` is family `j + 1`. Any knot lookup outside the logical sequence
//! contributes a zero term, as does any interval whose width is zero within
//! tolerance.

use curvekit_core::{CurveError, Result, Tolerance};

use crate::knot::KnotVector;

/// Evaluate the degree-`degree` basis function of `family` at `t`.
///
/// # Arguments
/// * `knots` - Knot vector the basis is defined over
/// * `degree` - Basis degree, must be non-negative
/// * `family` - Family index; knots it references outside the vector count as zero terms
/// * `t` - Parameter value
///
/// # Returns
/// The basis value, or `Configuration` for a negative degree
pub fn basis(knots: &KnotVector, degree: i32, family: isize, t: f64) -> Result<f64> {
    let degree = usize::try_from(degree).map_err(|_| {
        CurveError::Configuration(format!("basis degree must be non-negative, got {degree}"))
    })?;
    Ok(CoxDeBoor::new(knots).evaluate(degree, family, t))
}

/// Basis evaluator bound to one knot vector.
#[derive(Debug, Clone, Copy)]
pub struct CoxDeBoor<'a> {
    knots: &'a KnotVector,
    tolerance: Tolerance,
}

impl<'a> CoxDeBoor<'a> {
    pub fn new(knots: &'a KnotVector) -> Self {
        Self::with_tolerance(knots, Tolerance::default())
    }

    pub fn with_tolerance(knots: &'a KnotVector, tolerance: Tolerance) -> Self {
        Self { knots, tolerance }
    }

    pub fn evaluate(&self, degree: usize, family: isize, t: f64) -> f64 {
        if degree == 0 {
            return self.step(family, t);
        }

        let d = degree as isize;
        let knot = |i: isize| self.knots.try_logical_knot(i);

        let left = match (knot(family - 1), knot(family + d - 1)) {
            (Some(before), Some(mid)) if !self.tolerance.is_zero(mid - before) => {
                (t - before) / (mid - before) * self.evaluate(degree - 1, family, t)
            }
            _ => 0.0,
        };

        let right = match (knot(family + d), knot(family)) {
            (Some(after), Some(current)) if !self.tolerance.is_zero(after - current) => {
                (after - t) / (after - current) * self.evaluate(degree - 1, family + 1, t)
            }
            _ => 0.0,
        };

        left + right
    }

    /// Degree-zero indicator of `[knot[family - 1], knot[family])`. The last
    /// non-empty interval is closed at the maximum knot so that evaluation at
    /// the right end of a clamped vector does not vanish.
    fn step(&self, family: isize, t: f64) -> f64 {
        let lo = self.knots.try_logical_knot(family - 1);
        let hi = self.knots.try_logical_knot(family);
        match (lo, hi) {
            (Some(lo), Some(hi)) if lo <= t && t < hi => 1.0,
            (Some(lo), Some(hi)) if lo < hi && t == hi && hi == self.knots.max_value() => 1.0,
            _ => 0.0,
        }
    }

    /// Number of families with every referenced knot defined at `degree`:
    /// families `1..=count` pair with control points `0..count`.
    pub fn family_count(&self, degree: usize) -> usize {
        self.knots.knot_count().saturating_sub(degree + 1)
    }
}
