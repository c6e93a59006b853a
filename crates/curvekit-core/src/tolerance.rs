use approx::relative_eq;

/// Tolerances for real-number equivalence in knot and basis arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Absolute bound, governs comparisons near zero
    pub absolute: f64,
    /// Bound relative to the larger magnitude of the operands
    pub relative: f64,
}

impl Tolerance {
    pub const DEFAULT_ABSOLUTE: f64 = 1e-10;
    pub const DEFAULT_RELATIVE: f64 = 1e-12;

    pub fn new(absolute: f64, relative: f64) -> Self {
        Self { absolute, relative }
    }

    pub fn default_precision() -> Self {
        Self {
            absolute: Self::DEFAULT_ABSOLUTE,
            relative: Self::DEFAULT_RELATIVE,
        }
    }

    pub fn loose() -> Self {
        Self {
            absolute: 1e-6,
            relative: 1e-8,
        }
    }

    pub fn tight() -> Self {
        Self {
            absolute: 1e-14,
            relative: 1e-15,
        }
    }

    /// Check if two values are equivalent within this tolerance
    pub fn approx_eq(self, a: f64, b: f64) -> bool {
        relative_eq!(a, b, epsilon = self.absolute, max_relative = self.relative)
    }

    /// Check if a value is zero within the absolute tolerance
    pub fn is_zero(self, v: f64) -> bool {
        self.approx_eq(v, 0.0)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
