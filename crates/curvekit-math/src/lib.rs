pub mod combinatorics;

pub use glam::DVec3;
pub use combinatorics::{binomial, factorial};

pub type Point3 = DVec3;
pub type Vector3 = DVec3;

/// A 4×4 cubic basis matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;
/// Four rows of control geometry, one column per axis.
pub type Matrix4x3 = nalgebra::Matrix4x3<f64>;
/// The monomial row `(t³, t², t, 1)`.
pub type RowVector4 = nalgebra::RowVector4<f64>;

/// Pack four points into the rows of a geometry matrix.
pub fn rows_from_points(points: [Point3; 4]) -> Matrix4x3 {
    Matrix4x3::from_fn(|r, c| points[r][c])
}

/// Read row `r` of a geometry matrix back out as a point.
pub fn point_from_row(m: &Matrix4x3, r: usize) -> Point3 {
    DVec3::new(m[(r, 0)], m[(r, 1)], m[(r, 2)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn test_rows_round_trip() {
        let pts = [
            dvec3(1.0, 2.0, 3.0),
            dvec3(4.0, 5.0, 6.0),
            dvec3(7.0, 8.0, 9.0),
            dvec3(-1.0, -2.0, -3.0),
        ];
        let m = rows_from_points(pts);
        assert_eq!(m[(1, 2)], 6.0);
        for (r, p) in pts.iter().enumerate() {
            assert_eq!(point_from_row(&m, r), *p);
        }
    }
}
