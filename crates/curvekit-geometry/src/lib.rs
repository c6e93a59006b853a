//! Curvekit geometry: knot vectors, basis functions, and splines.

pub mod basis;
pub mod config;
pub mod curve;
pub mod knot;
pub mod tessellate;

pub use config::{KnotRequest, SplineConfig};
pub use curve::{BSplineCurve, BezierCurve, MatrixFormSpline, Spline, SplineKind};
pub use knot::{KnotSelection, KnotVector};
