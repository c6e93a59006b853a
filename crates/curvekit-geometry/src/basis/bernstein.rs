//! Bernstein polynomials `B(n, i)(t) = C(n, i) t^i (1 - t)^(n - i)`.

use curvekit_core::{CurveError, Result};
use curvekit_math::binomial;
use serde::{Deserialize, Serialize};

/// Largest degree whose factorial is finite in `f64`.
pub const MAX_BERNSTEIN_DEGREE: i64 = 170;

/// A fixed-degree, fixed-index Bernstein basis polynomial.
///
/// An index outside `0..=degree` yields the identically zero polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BernsteinPolynomial {
    degree: i64,
    index: i64,
    coefficient: f64,
}

/// Build `B(n, i)`. The binomial coefficient is computed once, here.
///
/// # Arguments
/// * `n` - Degree, in `0..=MAX_BERNSTEIN_DEGREE`
/// * `i` - Index; outside `0..=n` the polynomial is identically zero
///
/// # Returns
/// The polynomial, or `Configuration` for an unsupported degree
pub fn create_bernstein(n: i64, i: i64) -> Result<BernsteinPolynomial> {
    if n < 0 {
        return Err(CurveError::Configuration(format!(
            "Bernstein degree must be non-negative, got {n}"
        )));
    }
    if n > MAX_BERNSTEIN_DEGREE {
        return Err(CurveError::Configuration(format!(
            "Bernstein degree {n} exceeds {MAX_BERNSTEIN_DEGREE}"
        )));
    }

    Ok(BernsteinPolynomial {
        degree: n,
        index: i,
        coefficient: binomial(n, i)?,
    })
}

impl BernsteinPolynomial {
    pub fn degree(&self) -> i64 {
        self.degree
    }

    pub fn index(&self) -> i64 {
        self.index
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    pub fn is_zero(&self) -> bool {
        self.index < 0 || self.index > self.degree
    }

    pub fn evaluate(&self, t: f64) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        // Both exponents are bounded by MAX_BERNSTEIN_DEGREE.
        let i = self.index as i32;
        let rest = (self.degree - self.index) as i32;
        self.coefficient * t.powi(i) * (1.0 - t).powi(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_endpoint_values() {
        for n in 0..=6 {
            for i in 0..=n {
                let b = create_bernstein(n, i).unwrap();
                assert_eq!(b.evaluate(0.0), if i == 0 { 1.0 } else { 0.0 });
                assert_eq!(b.evaluate(1.0), if i == n { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_partition_of_unity() {
        for n in 1..=8 {
            let basis: Vec<_> = (0..=n).map(|i| create_bernstein(n, i).unwrap()).collect();
            for step in 0..=20 {
                let t = step as f64 / 20.0;
                let sum: f64 = basis.iter().map(|b| b.evaluate(t)).sum();
                assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_cubic_midpoint_weights() {
        let weights: Vec<f64> = (0..=3)
            .map(|i| create_bernstein(3, i).unwrap().evaluate(0.5))
            .collect();
        assert_eq!(weights, vec![0.125, 0.375, 0.375, 0.125]);
    }

    #[test]
    fn test_out_of_range_index_is_zero() {
        let below = create_bernstein(3, -1).unwrap();
        let above = create_bernstein(3, 4).unwrap();
        assert!(below.is_zero() && above.is_zero());
        assert_eq!(below.evaluate(0.3), 0.0);
        assert_eq!(above.evaluate(0.7), 0.0);
    }

    #[test]
    fn test_negative_degree_rejected() {
        assert!(create_bernstein(-1, 0).unwrap_err().is_configuration());
        assert!(create_bernstein(MAX_BERNSTEIN_DEGREE + 1, 0).is_err());
    }
}
