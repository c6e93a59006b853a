//! Slicing a flat control-geometry sequence into 4-row segments.

use curvekit_core::{CurveError, Result};
use curvekit_math::{point_from_row, rows_from_points, Matrix4x3, Point3};

/// Converts between flat geometry and per-segment 4×3 geometry matrices.
pub trait WindowingStrategy: Send + Sync + std::fmt::Debug {
    /// Split `geometry` into segments.
    fn segments(&self, geometry: &[Point3]) -> Result<Vec<Matrix4x3>>;

    /// Rows a segment after the first contributes to the flat sequence.
    fn fresh_rows(&self) -> std::ops::Range<usize>;

    /// Rebuild the flat sequence from segments.
    fn flatten(&self, segments: &[Matrix4x3]) -> Vec<Point3> {
        let Some((first, rest)) = segments.split_first() else {
            return Vec::new();
        };
        let mut flat: Vec<Point3> = (0..4).map(|r| point_from_row(first, r)).collect();
        for segment in rest {
            flat.extend(self.fresh_rows().map(|r| point_from_row(segment, r)));
        }
        flat
    }
}

fn window(geometry: &[Point3], start: usize) -> Matrix4x3 {
    rows_from_points([
        geometry[start],
        geometry[start + 1],
        geometry[start + 2],
        geometry[start + 3],
    ])
}

/// Consecutive segments share one row: the last row of segment `k` is the
/// first row of segment `k + 1`. Used by Hermite (`P, out, in, P, ...`) and
/// cubic Bézier geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastSharedWindow;

impl WindowingStrategy for LastSharedWindow {
    fn segments(&self, geometry: &[Point3]) -> Result<Vec<Matrix4x3>> {
        let len = geometry.len();
        if len < 4 || (len - 4) % 3 != 0 {
            return Err(CurveError::Configuration(format!(
                "geometry of length {len} does not split into 4-row segments sharing an endpoint \
                 (need 4 + 3k)"
            )));
        }
        Ok((0..1 + (len - 4) / 3).map(|k| window(geometry, 3 * k)).collect())
    }

    fn fresh_rows(&self) -> std::ops::Range<usize> {
        1..4
    }
}

/// Consecutive segments share three rows; the window slides by one point.
/// Used by uniform B-spline and Catmull-Rom geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreeSharedWindow;

impl WindowingStrategy for ThreeSharedWindow {
    fn segments(&self, geometry: &[Point3]) -> Result<Vec<Matrix4x3>> {
        let len = geometry.len();
        if len < 4 {
            return Err(CurveError::Configuration(format!(
                "sliding window needs at least 4 points, got {len}"
            )));
        }
        Ok((0..len - 3).map(|k| window(geometry, k)).collect())
    }

    fn fresh_rows(&self) -> std::ops::Range<usize> {
        3..4
    }
}
