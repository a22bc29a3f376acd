#![doc = include_str!("../README.md")]

use ndarray::Array1;
use std::collections::HashMap;

pub mod benchmark;
pub mod bounds;
pub mod config;
pub mod error;
pub mod function_registry;
pub mod functions;
pub mod parallel_eval;

pub use benchmark::{Benchmark, LatexFormats, TestFunction};
pub use bounds::{Bounds, DEFAULT_LOWER, DEFAULT_UPPER, create_bounds};
pub use config::BenchmarkConfig;
pub use error::{BenchmarkError, Result};
pub use function_registry::FunctionRegistry;
pub use functions::*;
pub use parallel_eval::{ParallelConfig, evaluate_population_parallel, evaluate_trials_parallel};

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
    pub inequality_constraints: Vec<fn(&Array1<f64>) -> f64>,
    /// Equality constraint functions (should be = 0 when satisfied)
    pub equality_constraints: Vec<fn(&Array1<f64>) -> f64>,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
    /// Typical dimension(s) for the function
    pub dimensions: Vec<usize>,
}

/// Get metadata for all available test functions
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let mut metadata = HashMap::new();

    metadata.insert(
        CHUNG_REYNOLDS_KEY.to_string(),
        FunctionMetadata {
            name: CHUNG_REYNOLDS_KEY.to_string(),
            bounds: vec![(DEFAULT_LOWER, DEFAULT_UPPER); 2],
            global_minima: vec![(vec![0.0, 0.0], 0.0)],
            inequality_constraints: vec![],
            equality_constraints: vec![],
            description: "Chung Reynolds function: unimodal, (sum of squares)^2".to_string(),
            multimodal: false,
            dimensions: vec![2, 10, 30],
        },
    );

    log::debug!("loaded metadata for {} test functions", metadata.len());
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
        _ => [default_bounds; 2],
    }
}

/// Helper function to get bounds as a Vec for optimization
/// Returns default bounds if function is not found
pub fn get_function_bounds_vec(function_name: &str, default_bounds: (f64, f64)) -> Vec<(f64, f64)> {
    match get_function_bounds(function_name) {
        Some(bounds) if bounds.len() >= 2 => bounds,
        _ => vec![default_bounds; 2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_function_minima() {
        let metadata = get_function_metadata();
        let registry = FunctionRegistry::new();
        let tolerance = 1e-10;

        for (func_name, meta) in metadata.iter() {
            let func = registry
                .get(func_name)
                .unwrap_or_else(|| panic!("{} has metadata but is not registered", func_name));

            for (minimum_location, expected_value) in &meta.global_minima {
                let x = Array1::from_vec(minimum_location.clone());
                let actual_value = func(&x);
                let error = (actual_value - expected_value).abs();
                assert!(
                    error <= tolerance,
                    "Function {} failed: at {:?}, expected {:.10}, got {:.10}, error {:.2e}",
                    func_name,
                    minimum_location,
                    expected_value,
                    actual_value,
                    error
                );
            }
        }
    }

    #[test]
    fn test_function_metadata_completeness() {
        let metadata = get_function_metadata();

        for (name, meta) in metadata.iter() {
            assert!(!meta.name.is_empty(), "Function {} has empty name", name);
            assert!(!meta.bounds.is_empty(), "Function {} has no bounds", name);
            assert!(
                !meta.description.is_empty(),
                "Function {} has no description",
                name
            );
            assert!(
                !meta.dimensions.is_empty(),
                "Function {} has no dimensions",
                name
            );

            for (lower, upper) in &meta.bounds {
                assert!(
                    lower < upper,
                    "Function {} has invalid bounds: {} >= {}",
                    name,
                    lower,
                    upper
                );
            }

            for (location, _value) in &meta.global_minima {
                assert_eq!(
                    location.len(),
                    meta.bounds.len(),
                    "Function {} global minimum and bounds disagree on dimension",
                    name
                );
            }
        }
    }

    #[test]
    fn test_bounds_helpers() {
        assert_eq!(
            get_function_bounds("chung_reynolds"),
            Some(vec![(-100.0, 100.0); 2])
        );
        assert_eq!(get_function_bounds("missing"), None);
        assert_eq!(
            get_function_bounds_2d("chung_reynolds", (-1.0, 1.0)),
            [(-100.0, 100.0); 2]
        );
        assert_eq!(
            get_function_bounds_2d("missing", (-1.0, 1.0)),
            [(-1.0, 1.0); 2]
        );
        assert_eq!(
            get_function_bounds_vec("missing", (-2.0, 2.0)),
            vec![(-2.0, 2.0); 2]
        );
    }

    #[test]
    fn test_chung_reynolds_not_multimodal() {
        let metadata = get_function_metadata();
        let meta = &metadata["chung_reynolds"];
        assert!(!meta.multimodal);
        assert!(meta.inequality_constraints.is_empty());
        assert!(meta.equality_constraints.is_empty());
    }
}
