//! Basis functions: Bernstein polynomials and Cox-de Boor B-spline bases.

pub mod bernstein;
pub mod cox_de_boor;

pub use bernstein::{create_bernstein, BernsteinPolynomial};
pub use cox_de_boor::{basis, CoxDeBoor};
