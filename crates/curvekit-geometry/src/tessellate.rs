//! Sampling splines into point sequences.

use curvekit_core::{CurveError, Result};
use curvekit_math::Point3;
use rayon::prelude::*;

use crate::curve::Spline;

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

fn parameter_at(spline: &dyn Spline, i: usize, count: usize) -> f64 {
    let (lo, hi) = spline.domain();
    if i + 1 == count {
        hi
    } else {
        lo + (hi - lo) * i as f64 / (count - 1) as f64
    }
}

fn check_count(count: usize) -> Result<()> {
    if count < 2 {
        return Err(CurveError::Configuration(format!(
            "sampling needs at least 2 points, got {count}"
        )));
    }
    Ok(())
}

/// Evaluate `count` evenly spaced parameters spanning the whole domain,
/// both ends included.
///
/// # Arguments
/// * `spline` - The curve to sample
/// * `count` - Number of points, at least 2
///
/// # Returns
/// The points in parameter order, or the first evaluation error
pub fn sample(spline: &dyn Spline, count: usize) -> Result<Vec<Point3>> {
    check_count(count)?;
    (0..count)
        .map(|i| spline.evaluate(parameter_at(spline, i, count)))
        .collect()
}

/// [`sample`], with the evaluations spread over the rayon thread pool.
pub fn par_sample(spline: &dyn Spline, count: usize) -> Result<Vec<Point3>> {
    check_count(count)?;
    (0..count)
        .into_par_iter()
        .map(|i| spline.evaluate(parameter_at(spline, i, count)))
        .collect()
}

/// Convert a spline to a polyline using adaptive subdivision.
///
/// Segments are split while the curve midpoint deviates from the chord
/// midpoint by more than `tolerance`.
///
/// # Arguments
/// * `spline` - The curve to tessellate
/// * `tolerance` - Maximum chord deviation (smaller = more points)
///
/// # Returns
/// Points from `min_parameter` to `max_parameter` inclusive, with at most
/// `2^12` segments
pub fn to_polyline(spline: &dyn Spline, tolerance: f64) -> Result<Vec<Point3>> {
    let (t_min, t_max) = spline.domain();
    let mut points = vec![spline.evaluate(t_min)?];
    subdivide(spline, t_min, t_max, tolerance, &mut points, 0)?;
    Ok(points)
}

fn subdivide(
    spline: &dyn Spline,
    t0: f64,
    t1: f64,
    tolerance: f64,
    points: &mut Vec<Point3>,
    depth: u32,
) -> Result<()> {
    let p1 = spline.evaluate(t1)?;
    if depth >= MAX_DEPTH {
        points.push(p1);
        return Ok(());
    }

    let t_mid = (t0 + t1) * 0.5;
    let p0 = spline.evaluate(t0)?;
    let deviation = (spline.evaluate(t_mid)? - (p0 + p1) * 0.5).length();

    if deviation > tolerance {
        subdivide(spline, t0, t_mid, tolerance, points, depth + 1)?;
        subdivide(spline, t_mid, t1, tolerance, points, depth + 1)?;
    } else {
        points.push(p1);
    }
    Ok(())
}
