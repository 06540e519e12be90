//! Rosenbrock Objective test function

use ndarray::Array1;

use super::rosenbrock::pair_term;

/// Rosenbrock objective function (2D)
///
/// Only the first pair `(x[0], x[1])` is read. Panics if `x` has fewer than
/// two elements; [`rosenbrock`](super::rosenbrock::rosenbrock) handles any length.
pub fn rosenbrock_objective(x: &Array1<f64>) -> f64 {
    pair_term(x[0], x[1])
}
