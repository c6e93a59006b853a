//! Knot vectors stored as distinct ascending values with multiplicities.
//!
//! The *logical* knot sequence repeats each value by its multiplicity, so
//! `values = [0, 1, 2]` with `multiplicities = [3, 1, 3]` reads as
//! `[0, 0, 0, 1, 2, 2, 2]`. Logical indices are signed: the basis recursion
//! asks for positions such as `i - 1`, and a position outside
//! `0..knot_count()` is simply undefined.

mod builders;

use curvekit_core::{CurveError, Result, Tolerance, Validate};
use serde::{Deserialize, Serialize};

pub use builders::{centripetal, chord_length, uniform, KnotSelection, Parameterization};

/// Ascending distinct knot values paired with positive multiplicities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawKnotVector")]
pub struct KnotVector {
    values: Vec<f64>,
    multiplicities: Vec<usize>,
}

#[derive(Deserialize)]
struct RawKnotVector {
    values: Vec<f64>,
    multiplicities: Vec<usize>,
}

impl TryFrom<RawKnotVector> for KnotVector {
    type Error = CurveError;

    fn try_from(raw: RawKnotVector) -> Result<Self> {
        Self::new(raw.values, raw.multiplicities)
    }
}

impl KnotVector {
    pub fn new(values: Vec<f64>, multiplicities: Vec<usize>) -> Result<Self> {
        let knots = Self {
            values,
            multiplicities,
        };
        knots.validate()?;
        Ok(knots)
    }

    /// Build from a logical (repeated) sequence, merging neighbours that are
    /// equal within the default tolerance into one value.
    pub fn from_logical(knots: &[f64]) -> Result<Self> {
        let tol = Tolerance::default();
        let mut values: Vec<f64> = Vec::new();
        let mut multiplicities: Vec<usize> = Vec::new();

        for &k in knots {
            match values.last() {
                Some(&prev) if tol.approx_eq(prev, k) => {
                    if let Some(m) = multiplicities.last_mut() {
                        *m += 1;
                    }
                }
                Some(&prev) if k < prev => {
                    return Err(CurveError::Configuration(format!(
                        "logical knots must be non-decreasing, found {k} after {prev}"
                    )));
                }
                _ => {
                    values.push(k);
                    multiplicities.push(1);
                }
            }
        }

        Self::new(values, multiplicities)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn multiplicities(&self) -> &[usize] {
        &self.multiplicities
    }

    /// Number of distinct knot values.
    pub fn distinct_count(&self) -> usize {
        self.values.len()
    }

    /// Total number of logical knots (the sum of multiplicities).
    pub fn knot_count(&self) -> usize {
        self.multiplicities.iter().sum()
    }

    pub fn min_value(&self) -> f64 {
        self.values[0]
    }

    pub fn max_value(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// The value at logical position `i`, or `None` when `i` is negative or
    /// past the end.
    pub fn try_logical_knot(&self, i: isize) -> Option<f64> {
        let i = usize::try_from(i).ok()?;
        let mut running = 0;
        for (&value, &m) in self.values.iter().zip(&self.multiplicities) {
            running += m;
            if running > i {
                return Some(value);
            }
        }
        None
    }

    /// The value at logical position `i`.
    pub fn logical_knot(&self, i: isize) -> Result<f64> {
        self.try_logical_knot(i).ok_or_else(|| {
            CurveError::Index(format!(
                "logical knot index {i} outside 0..{}",
                self.knot_count()
            ))
        })
    }

    /// The value at logical position `i + offset`.
    pub fn logical_knot_offset(&self, i: isize, offset: isize) -> Result<f64> {
        self.logical_knot(i + offset)
    }

    /// The full repeated sequence.
    pub fn logical_knots(&self) -> Vec<f64> {
        self.values
            .iter()
            .zip(&self.multiplicities)
            .flat_map(|(&v, &m)| std::iter::repeat(v).take(m))
            .collect()
    }

    /// Find the distinct-value interval containing `v`.
    ///
    /// # Arguments
    /// * `v` - Value within `[min_value(), max_value()]`
    ///
    /// # Returns
    /// `j` such that `values[j] <= v < values[j + 1]`. The last interval is
    /// closed, so `v == max_value()` maps to the final interval. A value
    /// outside the knot range is a `Domain` error.
    pub fn find_interval(&self, v: f64) -> Result<usize> {
        let (lo, hi) = (self.min_value(), self.max_value());
        if !(lo..=hi).contains(&v) {
            return Err(CurveError::Domain(format!(
                "value {v} outside knot range [{lo}, {hi}]"
            )));
        }

        let last = self.values.len() - 1;
        if last == 0 {
            return Ok(0);
        }
        if v >= self.values[last] {
            return Ok(last - 1);
        }

        // Binary search, values[low] <= v < values[high]
        let mut low = 0;
        let mut high = last;
        while high - low > 1 {
            let mid = (low + high) / 2;
            if v < self.values[mid] {
                high = mid;
            } else {
                low = mid;
            }
        }

        Ok(low)
    }

    /// The logical span containing `v`: the last logical index whose knot is
    /// `<= v`, except at `max_value()` where the last non-degenerate span is
    /// used.
    pub fn span_for_value(&self, v: f64) -> Result<usize> {
        let j = self.find_interval(v)?;
        let through: usize = self.multiplicities[..=j].iter().sum();
        Ok(through - 1)
    }

    /// The parameter domain `(knot[degree], knot[count - degree - 1])` of a
    /// B-spline of the given degree over these knots.
    pub fn domain(&self, degree: usize) -> Result<(f64, f64)> {
        let count = self.knot_count();
        if count < 2 * degree + 2 {
            return Err(CurveError::Configuration(format!(
                "{count} knots cannot bound a degree {degree} domain"
            )));
        }
        let lo = self.logical_knot(degree as isize)?;
        let hi = self.logical_knot((count - degree - 1) as isize)?;
        Ok((lo, hi))
    }
}

impl Validate for KnotVector {
    fn validate(&self) -> Result<()> {
        if self.values.len() != self.multiplicities.len() {
            return Err(CurveError::Configuration(format!(
                "{} knot values but {} multiplicities",
                self.values.len(),
                self.multiplicities.len()
            )));
        }
        if self.values.is_empty() {
            return Err(CurveError::Configuration(
                "knot vector needs at least one value".into(),
            ));
        }
        if let Some(v) = self.values.iter().find(|v| !v.is_finite()) {
            return Err(CurveError::Configuration(format!(
                "knot value {v} is not finite"
            )));
        }
        if let Some(pos) = self.multiplicities.iter().position(|&m| m == 0) {
            return Err(CurveError::Configuration(format!(
                "multiplicity of knot {} must be at least 1",
                self.values[pos]
            )));
        }
        if let Some(w) = self.values.windows(2).find(|w| w[0] >= w[1]) {
            return Err(CurveError::Configuration(format!(
                "knot values must be strictly increasing, found {} then {}",
                w[0], w[1]
            )));
        }
        Ok(())
    }
}
