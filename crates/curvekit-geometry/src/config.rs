//! Declarative spline construction, e.g. from JSON.
//!
//! ```json
//! {
//!   "kind": "non_uniform_b_spline",
//!   "degree": 2,
//!   "control_points": [[0, 0, 0], [1, 2, 0], [3, 1, 0]],
//!   "knots": { "chord_length": true }
//! }
//! ```

use curvekit_core::{CurveError, Result, Tolerance};
use curvekit_math::Point3;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::curve::{BSplineCurve, BezierCurve, MatrixFormSpline, Spline, SplineKind, DEFAULT_DEGREE};
use crate::knot::{KnotSelection, KnotVector};

/// A request for exactly one knot strategy.
///
/// Explicit knots are requested by supplying `values`; `multiplicities`
/// defaults to all ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnotRequest {
    pub values: Option<Vec<f64>>,
    pub multiplicities: Option<Vec<usize>>,
    pub uniform: bool,
    pub chord_length: bool,
    pub centripetal: bool,
}

impl KnotRequest {
    pub fn resolve(&self) -> Result<KnotSelection> {
        let explicit = self.values.is_some() || self.multiplicities.is_some();
        let requested = [explicit, self.uniform, self.chord_length, self.centripetal]
            .iter()
            .filter(|&&r| r)
            .count();
        if requested == 0 {
            return Err(CurveError::Configuration(
                "no knot parameterization requested".into(),
            ));
        }
        if requested > 1 {
            return Err(CurveError::Configuration(format!(
                "{requested} knot parameterizations requested, expected exactly one"
            )));
        }

        if self.uniform {
            return Ok(KnotSelection::Uniform);
        }
        if self.chord_length {
            return Ok(KnotSelection::ChordLength);
        }
        if self.centripetal {
            return Ok(KnotSelection::Centripetal);
        }

        let values = self.values.clone().ok_or_else(|| {
            CurveError::Configuration("knot multiplicities given without values".into())
        })?;
        let multiplicities = self
            .multiplicities
            .clone()
            .unwrap_or_else(|| vec![1; values.len()]);
        Ok(KnotSelection::Explicit(KnotVector::new(values, multiplicities)?))
    }
}

fn default_degree() -> i64 {
    DEFAULT_DEGREE as i64
}

/// Everything needed to build one spline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SplineConfig {
    Hermite {
        geometry: Vec<Point3>,
    },
    CubicBezier {
        geometry: Vec<Point3>,
    },
    UniformBSpline {
        geometry: Vec<Point3>,
    },
    CatmullRom {
        geometry: Vec<Point3>,
    },
    Bezier {
        degree: i64,
        control_points: Vec<Point3>,
    },
    NonUniformBSpline {
        #[serde(default = "default_degree")]
        degree: i64,
        control_points: Vec<Point3>,
        knots: KnotRequest,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tolerance: Option<Tolerance>,
    },
}

fn checked_degree(degree: i64) -> Result<usize> {
    usize::try_from(degree).map_err(|_| {
        CurveError::Configuration(format!("degree must be non-negative, got {degree}"))
    })
}

impl SplineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| CurveError::Configuration(format!("invalid spline config: {e}")))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Hermite { .. } => "hermite",
            Self::CubicBezier { .. } => "cubic_bezier",
            Self::UniformBSpline { .. } => "uniform_b_spline",
            Self::CatmullRom { .. } => "catmull_rom",
            Self::Bezier { .. } => "bezier",
            Self::NonUniformBSpline { .. } => "non_uniform_b_spline",
        }
    }

    #[instrument(skip(self), fields(kind = self.kind_name()))]
    pub fn build(self) -> Result<Box<dyn Spline>> {
        let spline: Box<dyn Spline> = match self {
            Self::Hermite { geometry } => matrix_form(SplineKind::Hermite, geometry)?,
            Self::CubicBezier { geometry } => matrix_form(SplineKind::CubicBezier, geometry)?,
            Self::UniformBSpline { geometry } => {
                matrix_form(SplineKind::UniformBSpline, geometry)?
            }
            Self::CatmullRom { geometry } => matrix_form(SplineKind::CatmullRom, geometry)?,
            Self::Bezier {
                degree,
                control_points,
            } => Box::new(BezierCurve::new(checked_degree(degree)?, control_points)?),
            Self::NonUniformBSpline {
                degree,
                control_points,
                knots,
                tolerance,
            } => {
                let degree = checked_degree(degree)?;
                let curve = BSplineCurve::new(degree, control_points, knots.resolve()?)?;
                Box::new(curve.with_tolerance(tolerance.unwrap_or_default()))
            }
        };
        debug!(domain = ?spline.domain(), "built spline from config");
        Ok(spline)
    }
}

fn matrix_form(kind: SplineKind, geometry: Vec<Point3>) -> Result<Box<dyn Spline>> {
    Ok(Box::new(MatrixFormSpline::with_geometry(kind, geometry)?))
}
