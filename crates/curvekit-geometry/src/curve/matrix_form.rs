//! Cubic splines evaluated as `[t³ t² t 1] · M · G` per segment.

use curvekit_core::{CurveError, Result};
use curvekit_math::{DVec3, Matrix4, Matrix4x3, Point3, RowVector4};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::window::{LastSharedWindow, ThreeSharedWindow, WindowingStrategy};
use super::Spline;

/// The four cubic families sharing the matrix form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplineKind {
    /// Geometry `P0, out0, in1, P1, out1, in2, P2, ...`
    Hermite,
    CubicBezier,
    UniformBSpline,
    CatmullRom,
}

impl SplineKind {
    /// The 4×4 basis matrix, rows ordered `t³, t², t, 1`.
    #[rustfmt::skip]
    pub fn basis_matrix(self) -> Matrix4 {
        match self {
            Self::Hermite => Matrix4::new(
                2.0, 1.0, 1.0, -2.0,
                -3.0, -2.0, -1.0, 3.0,
                0.0, 1.0, 0.0, 0.0,
                1.0, 0.0, 0.0, 0.0,
            ),
            Self::CubicBezier => Matrix4::new(
                -1.0, 3.0, -3.0, 1.0,
                3.0, -6.0, 3.0, 0.0,
                -3.0, 3.0, 0.0, 0.0,
                1.0, 0.0, 0.0, 0.0,
            ),
            Self::UniformBSpline => Matrix4::new(
                -1.0, 3.0, -3.0, 1.0,
                3.0, -6.0, 3.0, 0.0,
                -3.0, 0.0, 3.0, 0.0,
                1.0, 4.0, 1.0, 0.0,
            ) / 6.0,
            Self::CatmullRom => Matrix4::new(
                -1.0, 3.0, -3.0, 1.0,
                2.0, -5.0, 4.0, -1.0,
                -1.0, 0.0, 1.0, 0.0,
                0.0, 2.0, 0.0, 0.0,
            ) / 2.0,
        }
    }

    pub fn windowing(self) -> &'static dyn WindowingStrategy {
        match self {
            Self::Hermite | Self::CubicBezier => &LastSharedWindow,
            Self::UniformBSpline | Self::CatmullRom => &ThreeSharedWindow,
        }
    }
}

/// A piecewise cubic spline of one [`SplineKind`].
///
/// Segment `k` covers parameters `[k, k + 1)`; the last segment is closed so
/// that `max_parameter()` is evaluable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixFormSpline {
    kind: SplineKind,
    segments: Vec<Matrix4x3>,
}

impl MatrixFormSpline {
    /// A spline with no geometry yet. Evaluation fails until
    /// [`Spline::set_geometry`] succeeds.
    pub fn new(kind: SplineKind) -> Self {
        Self {
            kind,
            segments: Vec::new(),
        }
    }

    pub fn with_geometry(kind: SplineKind, geometry: Vec<Point3>) -> Result<Self> {
        let mut spline = Self::new(kind);
        spline.set_geometry(geometry)?;
        Ok(spline)
    }

    pub fn kind(&self) -> SplineKind {
        self.kind
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[Matrix4x3] {
        &self.segments
    }

    /// Per-segment polynomial coefficients `M · G`: rows are the cubic,
    /// quadratic, linear and constant terms, columns are x, y, z.
    pub fn coefficient_matrix(&self) -> Vec<Matrix4x3> {
        let basis = self.kind.basis_matrix();
        self.segments.iter().map(|g| basis * g).collect()
    }
}

impl Spline for MatrixFormSpline {
    fn evaluate(&self, parameter: f64) -> Result<Point3> {
        if self.segments.is_empty() {
            return Err(CurveError::Domain(format!(
                "{:?} spline has no geometry to evaluate",
                self.kind
            )));
        }

        let count = self.segments.len() as f64;
        let mut k = parameter.floor();
        let mut t = parameter - k;
        if k == count && t == 0.0 {
            k -= 1.0;
            t = 1.0;
        }
        if !(0.0..count).contains(&k) {
            return Err(CurveError::Domain(format!(
                "parameter {parameter} outside [0, {count}]"
            )));
        }

        let monomials = RowVector4::new(t * t * t, t * t, t, 1.0);
        let row = monomials * self.kind.basis_matrix() * self.segments[k as usize];
        Ok(DVec3::new(row[0], row[1], row[2]))
    }

    fn geometry(&self) -> Vec<Point3> {
        self.kind.windowing().flatten(&self.segments)
    }

    fn set_geometry(&mut self, geometry: Vec<Point3>) -> Result<()> {
        self.segments = self.kind.windowing().segments(&geometry)?;
        debug!(
            kind = ?self.kind,
            points = geometry.len(),
            segments = self.segments.len(),
            "set matrix-form geometry"
        );
        Ok(())
    }

    fn min_parameter(&self) -> f64 {
        0.0
    }

    fn max_parameter(&self) -> f64 {
        self.segments.len() as f64
    }
}
