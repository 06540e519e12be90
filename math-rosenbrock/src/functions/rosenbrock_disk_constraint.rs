//! Rosenbrock Disk Constraint test function

use ndarray::Array1;

/// Squared radius of the feasible disk.
const DISK_RADIUS_SQUARED: f64 = 2.0;

/// Rosenbrock disk constraint: x^2 + y^2 <= 2
///
/// Returns `x^2 + y^2 - 2`, non-positive inside the disk.
pub fn rosenbrock_disk_constraint(x: &Array1<f64>) -> f64 {
    x[0].powi(2) + x[1].powi(2) - DISK_RADIUS_SQUARED
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_rosenbrock_disk_constraint_values() {
        assert_eq!(rosenbrock_disk_constraint(&array![0.0, 0.0]), -2.0);
        assert_eq!(rosenbrock_disk_constraint(&array![1.5, 1.5]), 2.5);
        assert_abs_diff_eq!(
            rosenbrock_disk_constraint(&array![-1.0, 0.5]),
            -0.75,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_global_minimum_on_boundary() {
        use crate::get_function_metadata;

        let metadata = get_function_metadata();
        let meta = metadata
            .get("rosenbrock_disk_constraint")
            .expect("Function rosenbrock_disk_constraint should have metadata");

        for (minimum_coords, _) in &meta.global_minima {
            let x = Array1::from_vec(minimum_coords.clone());
            for constraint in &meta.inequality_constraints {
                assert_abs_diff_eq!(constraint(&x), 0.0, epsilon = 1e-12);
            }
        }
    }
}
