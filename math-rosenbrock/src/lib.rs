#![doc = include_str!("../README.md")]

use ndarray::{Array1, Array2};
use std::collections::HashMap;

pub mod error;
pub mod functions;

pub use error::{Result, RosenbrockError};
pub use functions::*;

/// Signature shared by every objective and constraint in this crate
pub type TestFunction = fn(&Array1<f64>) -> f64;

/// Metadata for a test function including bounds, constraints, and other properties
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Bounds for each dimension (min, max)
    pub bounds: Vec<(f64, f64)>,
    /// Global minima locations and values
    pub global_minima: Vec<(Vec<f64>, f64)>,
    /// Inequality constraint functions (should be <= 0 when satisfied)
    pub inequality_constraints: Vec<TestFunction>,
    /// Equality constraint functions (should be = 0 when satisfied)
    pub equality_constraints: Vec<TestFunction>,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
    /// Typical dimension(s) for the function
    pub dimensions: Vec<usize>,
}

/// Create bounds matrix for optimization (2 x n matrix)
/// bounds[[0, i]] = lower bound, bounds[[1, i]] = upper bound
pub fn create_bounds(n: usize, lower: f64, upper: f64) -> Array2<f64> {
    Array2::from_shape_fn((2, n), |(i, _)| if i == 0 { lower } else { upper })
}

/// Location of the global minimum in `n` dimensions: every coordinate is 1.
pub fn global_minimum(n: usize) -> Array1<f64> {
    Array1::ones(n)
}

/// Get metadata for all available test functions
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let mut metadata = HashMap::new();

    metadata.insert(
        "rosenbrock".to_string(),
        FunctionMetadata {
            name: "rosenbrock".to_string(),
            bounds: vec![(-2.048, 2.048); 2],
            global_minima: vec![(vec![1.0, 1.0], 0.0)],
            inequality_constraints: vec![],
            equality_constraints: vec![],
            description: "Classic Rosenbrock banana function, generalized to n dimensions"
                .to_string(),
            multimodal: false,
            dimensions: vec![2, 3, 5, 10],
        },
    );

    metadata.insert(
        "rosenbrock_disk_constraint".to_string(),
        FunctionMetadata {
            name: "rosenbrock_disk_constraint".to_string(),
            bounds: vec![(-1.5, 1.5); 2],
            global_minima: vec![(vec![1.0, 1.0], 0.0)],
            inequality_constraints: vec![rosenbrock_disk_constraint],
            equality_constraints: vec![],
            description: "Disk constraint: x^2 + y^2 <= 2".to_string(),
            multimodal: false,
            dimensions: vec![2],
        },
    );

    metadata.insert(
        "rosenbrock_objective".to_string(),
        FunctionMetadata {
            name: "rosenbrock_objective".to_string(),
            bounds: vec![(-2.048, 2.048); 2],
            global_minima: vec![(vec![1.0, 1.0], 0.0)],
            inequality_constraints: vec![],
            equality_constraints: vec![],
            description: "Rosenbrock objective function".to_string(),
            multimodal: false,
            dimensions: vec![2],
        },
    );

    metadata
}

/// Helper function to get bounds for a specific function from metadata
/// Returns None if function is not found in metadata
pub fn get_function_bounds(function_name: &str) -> Option<Vec<(f64, f64)>> {
    let metadata = get_function_metadata();
    metadata.get(function_name).map(|meta| meta.bounds.clone())
}

/// Helper function to get bounds as a 2D array for optimization
/// Returns default bounds if function is not found
pub fn get_function_bounds_2d(function_name: &str, default_bounds: (f64, f64)) -> [(f64, f64); 2] {
    match get_function_bounds(function_name) {
        Some(bounds) if bounds.len() >= 2 => [bounds[0], bounds[1]],
        _ => {
            log::warn!(
                "no 2D bounds for function '{}', using default {:?}",
                function_name,
                default_bounds
            );
            [default_bounds; 2]
        }
    }
}

/// Helper function to get bounds as a Vec for optimization
/// Returns default bounds if function is not found
pub fn get_function_bounds_vec(function_name: &str, default_bounds: (f64, f64)) -> Vec<(f64, f64)> {
    match get_function_bounds(function_name) {
        Some(bounds) if bounds.len() >= 2 => bounds,
        _ => {
            log::warn!(
                "no bounds for function '{}', using default {:?}",
                function_name,
                default_bounds
            );
            vec![default_bounds; 2]
        }
    }
}
