//! Rosenbrock test function

use ndarray::{ArrayBase, Data, Ix1};

use crate::error::{Result, RosenbrockError};

/// Smallest input length with at least one adjacent pair.
pub const MIN_DIMENSION: usize = 2;

/// Rosenbrock function - N-dimensional
///
/// f(x) = sum_{i=0}^{n-2} [100 (x_{i+1} - x_i^2)^2 + (1 - x_i)^2]
///
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-2.048, 2.048]
///
/// Inputs with fewer than two elements have no adjacent pair, so the sum is
/// empty and the result is `0.0`. Use [`try_rosenbrock`] to reject them.
pub fn rosenbrock<S>(x: &ArrayBase<S, Ix1>) -> f64
where
    S: Data<Elem = f64>,
{
    pair_sum(x.iter().copied())
}

/// Rosenbrock function over a plain slice, same semantics as [`rosenbrock`].
pub fn rosenbrock_slice(x: &[f64]) -> f64 {
    pair_sum(x.iter().copied())
}

/// Rosenbrock function rejecting inputs with fewer than two elements.
pub fn try_rosenbrock<S>(x: &ArrayBase<S, Ix1>) -> Result<f64>
where
    S: Data<Elem = f64>,
{
    if x.len() < MIN_DIMENSION {
        log::debug!(
            "rosenbrock: rejecting input of length {} (need at least {})",
            x.len(),
            MIN_DIMENSION
        );
        return Err(RosenbrockError::InvalidArgument {
            len: x.len(),
            min: MIN_DIMENSION,
        });
    }
    Ok(rosenbrock(x))
}

/// Single pair term: 100 (next - xi^2)^2 + (1 - xi)^2
#[inline]
pub(crate) fn pair_term(xi: f64, next: f64) -> f64 {
    100.0 * (next - xi.powi(2)).powi(2) + (1.0 - xi).powi(2)
}

// Left to right over increasing i, one term per adjacent pair.
fn pair_sum<I>(values: I) -> f64
where
    I: Iterator<Item = f64> + Clone,
{
    values
        .clone()
        .zip(values.skip(1))
        .fold(0.0, |sum, (xi, next)| sum + pair_term(xi, next))
}
