//! The spline capability set and its variants.

mod bezier;
mod bspline;
mod matrix_form;
mod window;

use curvekit_core::Result;
use curvekit_math::Point3;

pub use bezier::BezierCurve;
pub use bspline::{BSplineCurve, DEFAULT_DEGREE};
pub use matrix_form::{MatrixFormSpline, SplineKind};
pub use window::{LastSharedWindow, ThreeSharedWindow, WindowingStrategy};

/// Trait for parametric splines in 3D space.
///
/// Evaluation takes `&self` only, so a configured spline can be shared across
/// threads; replacing geometry needs `&mut self`.
pub trait Spline: Send + Sync {
    /// Evaluate the spline at `parameter`.
    fn evaluate(&self, parameter: f64) -> Result<Point3>;

    /// The flat control geometry, as it was last set.
    fn geometry(&self) -> Vec<Point3>;

    /// Replace the control geometry wholesale. On error the spline is left
    /// unchanged.
    fn set_geometry(&mut self, geometry: Vec<Point3>) -> Result<()>;

    fn min_parameter(&self) -> f64;

    fn max_parameter(&self) -> f64;

    /// Return the parameter domain `(min, max)`.
    fn domain(&self) -> (f64, f64) {
        (self.min_parameter(), self.max_parameter())
    }
}
