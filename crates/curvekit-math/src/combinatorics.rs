//! Factorial and binomial coefficients for Bernstein construction.

use curvekit_core::{CurveError, Result};

/// `n!` as a float. Exact up to `22!`, rounded beyond.
pub fn factorial(n: i64) -> Result<f64> {
    if n < 0 {
        return Err(CurveError::Domain(format!(
            "factorial is undefined for negative integer {n}"
        )));
    }
    Ok((2..=n).fold(1.0, |acc, k| acc * k as f64))
}

/// `C(n, k) = n! / (k! (n-k)!)`. Zero when `k` lies outside `0..=n`.
pub fn binomial(n: i64, k: i64) -> Result<f64> {
    if n < 0 {
        return Err(CurveError::Domain(format!(
            "binomial coefficient is undefined for negative n = {n}"
        )));
    }
    if k < 0 || k > n {
        return Ok(0.0);
    }
    Ok(factorial(n)? / (factorial(k)? * factorial(n - k)?))
}
